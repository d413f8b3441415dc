/// Domain layer - core business logic
///
/// Pure models, prompt templates, text sizing, and usage accounting.
/// Nothing in here touches the network or the filesystem.
pub mod models;
pub mod prompts;
pub mod text;
pub mod usage;

pub use models::{ArtifactKind, MeetingRequest, ProcessingResult};
pub use prompts::PromptTemplates;
pub use usage::{CostEstimate, UsageLedger, UsageTotals};
