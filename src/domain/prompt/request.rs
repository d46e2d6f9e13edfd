use std::fmt;

use crate::domain::{AnswerSet, TaskCategory};

/// Everything the builder needs, captured at one point of a session.
///
/// The surrounding UI owns the mutable session state and hands the builder a
/// fresh request whenever an input changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptRequest {
    /// Whether the user agreed not to enter personal information.
    pub consent: bool,
    /// Selected task category. `None` until the user picks one.
    pub category: Option<TaskCategory>,
    /// Collected answers for `category`.
    pub answers: AnswerSet,
}

impl PromptRequest {
    pub fn new(consent: bool, category: Option<TaskCategory>, answers: AnswerSet) -> Self {
        Self { consent, category, answers }
    }

    /// Request with consent given and a category selected.
    pub fn consented(category: TaskCategory, answers: AnswerSet) -> Self {
        Self::new(true, Some(category), answers)
    }
}

/// Rendered prompt text. Empty while consent is withheld.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptText(String);

impl PromptText {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for PromptText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PromptText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
