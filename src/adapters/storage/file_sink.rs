//! Filesystem output sink
//!
//! Writes artifacts as `{base_name}_{YYYYMMDD_HHMMSS}.{extension}` under the
//! target directory, creating it on demand. Timestamps have one-second
//! resolution: two artifacts of the same kind written within the same second
//! land on the same path and the later write wins.

use crate::error::Result;
use crate::ports::clock::Clock;
use crate::ports::sink::OutputSinkPort;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;

/// Sink writing timestamped text files
pub struct FileSink {
    clock: Arc<dyn Clock>,
}

impl FileSink {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

#[async_trait]
impl OutputSinkPort for FileSink {
    async fn write(
        &self,
        dir: &Path,
        base_name: &str,
        extension: &str,
        content: &str,
    ) -> Result<PathBuf> {
        fs::create_dir_all(dir).await?;

        let timestamp = self.clock.now().format("%Y%m%d_%H%M%S");
        let path = dir.join(format!("{}_{}.{}", base_name, timestamp, extension));
        fs::write(&path, content).await?;

        log::debug!("Wrote {} bytes to {}", content.len(), path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::mocks::FixedClock;
    use tempfile::tempdir;

    fn sink() -> FileSink {
        FileSink::new(Arc::new(FixedClock::at(2026, 3, 5, 9, 30, 0)))
    }

    #[tokio::test]
    async fn test_write_uses_timestamped_name() {
        let dir = tempdir().unwrap();
        let path = sink()
            .write(dir.path(), "meeting_summary", "md", "# Summary")
            .await
            .unwrap();

        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "meeting_summary_20260305_093000.md"
        );
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# Summary");
    }

    #[tokio::test]
    async fn test_write_creates_missing_directory() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("reports").join("march");
        let path = sink()
            .write(&nested, "executive_brief", "txt", "brief")
            .await
            .unwrap();

        assert!(path.starts_with(&nested));
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_same_second_write_overwrites() {
        let dir = tempdir().unwrap();
        let s = sink();
        let first = s
            .write(dir.path(), "meeting_followup_email", "txt", "first")
            .await
            .unwrap();
        let second = s
            .write(dir.path(), "meeting_followup_email", "txt", "second")
            .await
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(std::fs::read_to_string(&second).unwrap(), "second");
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
