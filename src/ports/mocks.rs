//! Mock implementations for testing

use crate::error::{AppError, Result};
use crate::ports::clock::Clock;
use crate::ports::completion::{CompletionPort, CompletionRequest, CompletionResult};
use crate::ports::sink::OutputSinkPort;
use async_trait::async_trait;
use chrono::{DateTime, Local, TimeZone};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

type ScriptedReply = std::result::Result<CompletionResult, String>;

/// Scripted completion service for tests
///
/// Replies are consumed in push order; once the queue is empty every call
/// returns a fixed stub. All issued requests are recorded.
#[derive(Clone, Default)]
pub struct MockCompletion {
    replies: Arc<Mutex<VecDeque<ScriptedReply>>>,
    calls: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl MockCompletion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful reply with explicit token usage
    pub fn push_reply(&self, text: &str, input_tokens: u64, output_tokens: u64) {
        self.replies.lock().unwrap().push_back(Ok(CompletionResult {
            text: text.to_string(),
            input_tokens,
            output_tokens,
        }));
    }

    /// Queue a failure for the next call
    pub fn push_failure(&self, message: &str) {
        self.replies
            .lock()
            .unwrap()
            .push_back(Err(message.to_string()));
    }

    /// All requests issued so far, in call order
    pub fn calls(&self) -> Vec<CompletionRequest> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl CompletionPort for MockCompletion {
    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResult> {
        self.calls.lock().unwrap().push(request.clone());

        let reply = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Ok(CompletionResult {
                    text: "stub completion".to_string(),
                    input_tokens: 100,
                    output_tokens: 40,
                })
            });

        reply.map_err(AppError::Completion)
    }

    fn provider_name(&self) -> &str {
        "mock"
    }

    fn is_configured(&self) -> bool {
        true
    }
}

/// In-memory sink recording writes without touching the filesystem
///
/// Paths use a fixed timestamp so assertions stay deterministic.
#[derive(Clone, Default)]
pub struct MockSink {
    writes: Arc<Mutex<Vec<(PathBuf, String)>>>,
    fail_for_base: Arc<Mutex<Option<String>>>,
}

impl MockSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make writes of the given base name fail with a permission error
    pub fn fail_for(&self, base_name: &str) {
        *self.fail_for_base.lock().unwrap() = Some(base_name.to_string());
    }

    /// All recorded writes, in write order
    pub fn writes(&self) -> Vec<(PathBuf, String)> {
        self.writes.lock().unwrap().clone()
    }
}

#[async_trait]
impl OutputSinkPort for MockSink {
    async fn write(
        &self,
        dir: &Path,
        base_name: &str,
        extension: &str,
        content: &str,
    ) -> Result<PathBuf> {
        if self.fail_for_base.lock().unwrap().as_deref() == Some(base_name) {
            return Err(AppError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                format!("write denied for {}", base_name),
            )));
        }

        let path = dir.join(format!("{}_{}.{}", base_name, "20260305_093000", extension));
        self.writes
            .lock()
            .unwrap()
            .push((path.clone(), content.to_string()));
        Ok(path)
    }
}

/// Clock pinned to a fixed instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Local>);

impl FixedClock {
    pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Self {
        Self(
            Local
                .with_ymd_and_hms(year, month, day, hour, minute, second)
                .unwrap(),
        )
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CompletionRequest {
        CompletionRequest {
            system_prompt: None,
            user_prompt: "prompt".to_string(),
            model: "gpt-3.5-turbo".to_string(),
            temperature: 0.3,
            max_output_tokens: 2000,
        }
    }

    #[test]
    fn test_mock_completion_replays_in_order() {
        let mock = MockCompletion::new();
        mock.push_reply("first", 10, 5);
        mock.push_failure("boom");

        let first = tokio_test::block_on(mock.complete(&request())).unwrap();
        assert_eq!(first.text, "first");
        assert_eq!(first.input_tokens, 10);

        let second = tokio_test::block_on(mock.complete(&request()));
        assert!(matches!(second, Err(AppError::Completion(_))));

        // Queue drained: falls back to the stub
        let third = tokio_test::block_on(mock.complete(&request())).unwrap();
        assert_eq!(third.text, "stub completion");

        assert_eq!(mock.call_count(), 3);
    }

    #[test]
    fn test_mock_sink_records_writes() {
        let sink = MockSink::new();
        let path = tokio_test::block_on(sink.write(
            Path::new("out"),
            "meeting_summary",
            "md",
            "content",
        ))
        .unwrap();

        assert_eq!(
            path,
            PathBuf::from("out/meeting_summary_20260305_093000.md")
        );
        assert_eq!(sink.writes().len(), 1);

        sink.fail_for("meeting_summary");
        let denied = tokio_test::block_on(sink.write(
            Path::new("out"),
            "meeting_summary",
            "md",
            "content",
        ));
        assert!(matches!(denied, Err(AppError::Io(_))));
    }

    #[test]
    fn test_fixed_clock_is_pinned() {
        let clock = FixedClock::at(2026, 3, 5, 9, 30, 0);
        assert_eq!(clock.now().format("%Y%m%d_%H%M%S").to_string(), "20260305_093000");
        assert_eq!(clock.now().format("%B %d, %Y").to_string(), "March 05, 2026");
    }
}
