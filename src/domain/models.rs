/// Domain models for the meeting summarizer
///
/// These models represent core business entities and carry no I/O.
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Kind of generated artifact
///
/// The summary is load-bearing: the email and brief are derived from it,
/// never from raw notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    Summary,
    Email,
    Brief,
}

impl ArtifactKind {
    /// Base name of the persisted file; downstream listing features rely on
    /// these exact strings.
    pub fn base_name(&self) -> &'static str {
        match self {
            ArtifactKind::Summary => "meeting_summary",
            ArtifactKind::Email => "meeting_followup_email",
            ArtifactKind::Brief => "executive_brief",
        }
    }

    /// File extension of the persisted artifact
    pub fn extension(&self) -> &'static str {
        match self {
            ArtifactKind::Summary => "md",
            ArtifactKind::Email => "txt",
            ArtifactKind::Brief => "txt",
        }
    }
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArtifactKind::Summary => write!(f, "summary"),
            ArtifactKind::Email => write!(f, "email"),
            ArtifactKind::Brief => write!(f, "brief"),
        }
    }
}

/// One meeting-processing request
///
/// `None` on a switch or the output directory means "use the configured
/// default"; `None` on the date means "today".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MeetingRequest {
    /// Raw meeting notes
    pub notes: String,
    /// Meeting date as free text (e.g. "March 05, 2026")
    pub date: Option<String>,
    pub want_email: Option<bool>,
    pub want_brief: Option<bool>,
    pub output_dir: Option<PathBuf>,
}

/// Snapshot of one completed processing run
///
/// Generated text per artifact kind, plus the path each artifact was
/// persisted under.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProcessingResult {
    texts: BTreeMap<ArtifactKind, String>,
    files: BTreeMap<ArtifactKind, PathBuf>,
}

impl ProcessingResult {
    pub(crate) fn record(&mut self, kind: ArtifactKind, text: String, path: PathBuf) {
        self.texts.insert(kind, text);
        self.files.insert(kind, path);
    }

    /// Generated text for an artifact kind, if it was produced
    pub fn text(&self, kind: ArtifactKind) -> Option<&str> {
        self.texts.get(&kind).map(String::as_str)
    }

    /// Path an artifact was persisted under, if it was produced
    pub fn file(&self, kind: ArtifactKind) -> Option<&Path> {
        self.files.get(&kind).map(PathBuf::as_path)
    }

    /// Kinds that were produced, in fixed summary/email/brief order
    pub fn kinds(&self) -> impl Iterator<Item = ArtifactKind> + '_ {
        self.texts.keys().copied()
    }

    /// Number of artifacts produced
    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }
}
