//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use chrono::Local;

use crate::app::AppContext;
use crate::app::commands::{catalog, generate, render};
use crate::app::config::AppConfig;
use crate::domain::{self, PromptRequest, PromptText, TaskCategory};
use crate::services::{ArboardClipboard, DialoguerPrompter, MinijinjaTemplateRenderer};

pub use crate::app::commands::catalog::{CategorySchema, CategorySummary};
pub use crate::app::commands::generate::GenerateOptions;
pub use crate::app::commands::outcome::{CopyStatus, PromptOutcome};
pub use crate::app::commands::render::RenderOptions;
pub use crate::domain::AppError;

/// Create an `AppContext` wired to the terminal and the system clipboard.
fn create_context(config: AppConfig) -> AppContext<DialoguerPrompter, ArboardClipboard> {
    let today = Local::now().date_naive();
    AppContext::new(DialoguerPrompter::new(), ArboardClipboard::new(), config, today)
}

/// Build the prompt text for a request with the embedded templates.
///
/// Returns an empty prompt while consent is withheld.
pub fn build_prompt(request: &PromptRequest) -> Result<PromptText, AppError> {
    domain::build_prompt(request, &MinijinjaTemplateRenderer::new())
}

/// All task categories in menu order.
pub fn categories() -> Vec<CategorySummary> {
    catalog::list_categories()
}

/// Questions asked for a category.
pub fn describe_category(category: TaskCategory) -> CategorySchema {
    catalog::describe(category)
}

/// Run the interactive questionnaire in the terminal.
pub fn generate(options: GenerateOptions, config: AppConfig) -> Result<PromptOutcome, AppError> {
    let mut ctx = create_context(config);
    generate::execute(&mut ctx, options)
}

/// Render a prompt from raw `LABEL=VALUE` answers without asking anything.
pub fn render(options: RenderOptions, config: AppConfig) -> Result<PromptOutcome, AppError> {
    let mut ctx = create_context(config);
    render::execute(&mut ctx, options)
}
