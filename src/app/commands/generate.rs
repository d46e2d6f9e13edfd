//! Interactive prompt generation.

use tracing::{info, warn};

use crate::app::AppContext;
use crate::domain::{AppError, PromptRequest, PromptText, TaskCategory, build_prompt};
use crate::ports::{ClipboardWriter, FormPrompter};

use super::collect;
use super::outcome::{CopyStatus, PromptOutcome};

/// Options for the interactive `generate` command.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Skip the category menu.
    pub category: Option<TaskCategory>,
    /// Copy the prompt even if the config does not ask for it.
    pub copy: bool,
}

/// Walk the user through consent, category and questions, then build the prompt.
pub fn execute<P, C>(
    ctx: &mut AppContext<P, C>,
    options: GenerateOptions,
) -> Result<PromptOutcome, AppError>
where
    P: FormPrompter,
    C: ClipboardWriter,
{
    if !collect::ask_consent(ctx.prompter_mut())? {
        info!("consent withheld, no questions asked");
        return Ok(PromptOutcome::consent_withheld());
    }

    let category = match options.category {
        Some(category) => category,
        None => collect::select_category(ctx.prompter_mut())?,
    };
    let today = ctx.today();
    let answers = collect::collect_interactive(ctx.prompter_mut(), category, today)?;

    let prompt = build_prompt(&PromptRequest::consented(category, answers), ctx.renderer())?;
    let copy = copy_prompt(ctx, &prompt, options.copy);
    Ok(PromptOutcome { category: Some(category), prompt, copy })
}

/// Copy a built prompt when the caller or the config asks for it.
///
/// Clipboard failures are reported in the outcome so the prompt itself is
/// never lost.
pub(crate) fn copy_prompt<P, C>(
    ctx: &mut AppContext<P, C>,
    prompt: &PromptText,
    requested: bool,
) -> CopyStatus
where
    P: FormPrompter,
    C: ClipboardWriter,
{
    if prompt.is_empty() || !(requested || ctx.config().output.copy_to_clipboard) {
        return CopyStatus::Skipped;
    }
    match ctx.clipboard_mut().write_text(prompt.as_str()) {
        Ok(()) => CopyStatus::Copied,
        Err(err) => {
            warn!(error = %err, "clipboard copy failed");
            CopyStatus::Failed(err.to_string())
        }
    }
}
