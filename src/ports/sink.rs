/// Output sink port trait
///
/// Defines the interface for persisting named text artifacts.
/// Implementation: timestamped files under a target directory.
use crate::error::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Port trait for artifact persistence
#[async_trait]
pub trait OutputSinkPort: Send + Sync {
    /// Write `content` under `dir` as `{base_name}_{YYYYMMDD_HHMMSS}.{extension}`,
    /// creating the directory if absent, and return the path written.
    async fn write(
        &self,
        dir: &Path,
        base_name: &str,
        extension: &str,
        content: &str,
    ) -> Result<PathBuf>;
}
