use crate::domain::{PromptText, TaskCategory};

/// What happened to the clipboard copy of a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyStatus {
    /// Copying was not requested, or there was nothing to copy.
    Skipped,
    Copied,
    /// Copying was requested but the clipboard refused it.
    Failed(String),
}

/// Result of a prompt-producing command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptOutcome {
    /// Selected category. `None` when consent was withheld.
    pub category: Option<TaskCategory>,
    pub prompt: PromptText,
    pub copy: CopyStatus,
}

impl PromptOutcome {
    /// Outcome of a run where the user did not give consent.
    pub fn consent_withheld() -> Self {
        Self { category: None, prompt: PromptText::empty(), copy: CopyStatus::Skipped }
    }

    pub fn consent_given(&self) -> bool {
        self.category.is_some()
    }
}
