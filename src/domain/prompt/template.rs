use serde::Serialize;

use crate::domain::{AppError, TemplateForm};

/// Values substituted into the structured quiz template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizFields {
    pub subject: String,
    pub difficulty: String,
    pub question_count: String,
    pub supplementary: String,
}

/// One `- label: value` line of the generic template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptLine {
    pub label: String,
    pub value: String,
}

/// Values substituted into the generic template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenericFields {
    pub category: String,
    pub lines: Vec<PromptLine>,
}

/// Fully stringified template input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptContext {
    Structured(QuizFields),
    Generic(GenericFields),
}

impl PromptContext {
    pub fn form(&self) -> TemplateForm {
        match self {
            PromptContext::Structured(_) => TemplateForm::Structured,
            PromptContext::Generic(_) => TemplateForm::Generic,
        }
    }
}

/// Trait for rendering prompt templates.
///
/// This abstraction allows swapping out the template engine (e.g. minijinja)
/// and keeping infrastructure details out of the domain layer.
pub trait TemplateRenderer {
    /// Render the template matching `context.form()`.
    fn render(&self, context: &PromptContext) -> Result<String, AppError>;
}
