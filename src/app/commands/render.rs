//! Non-interactive prompt rendering from `LABEL=VALUE` answers.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};

use crate::app::AppContext;
use crate::domain::{AppError, PromptRequest, TaskCategory, build_prompt};
use crate::ports::{ClipboardWriter, FormPrompter};

use super::collect;
use super::generate::copy_prompt;
use super::outcome::PromptOutcome;

/// Options for the `render` command.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Category name. Falls back to the answers file's `category`.
    pub category: Option<String>,
    /// Personal-information consent (`--agree`).
    pub consent: bool,
    /// Raw `LABEL=VALUE` arguments.
    pub answers: Vec<String>,
    /// TOML file with an `[answers]` table.
    pub answers_file: Option<PathBuf>,
    pub copy: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct AnswersFile {
    category: Option<String>,
    #[serde(default)]
    answers: toml::Table,
}

/// Render a prompt without asking any question.
pub fn execute<P, C>(
    ctx: &mut AppContext<P, C>,
    options: RenderOptions,
) -> Result<PromptOutcome, AppError>
where
    P: FormPrompter,
    C: ClipboardWriter,
{
    if !options.consent {
        info!("consent withheld, answers ignored");
        return Ok(PromptOutcome::consent_withheld());
    }

    let (file_category, mut pairs) = match &options.answers_file {
        Some(path) => load_answers_file(path)?,
        None => (None, Vec::new()),
    };
    for raw in &options.answers {
        pairs.push(collect::parse_pair(raw)?);
    }

    let category_name = options.category.or(file_category).ok_or_else(|| {
        AppError::InvalidState("a task category must be given (--category)".to_string())
    })?;
    let category: TaskCategory = category_name.parse()?;
    debug!(category = category.slug(), answers = pairs.len(), "rendering from raw answers");

    let answers = collect::collect_from_pairs(category, &pairs, ctx.today())?;
    let prompt = build_prompt(&PromptRequest::consented(category, answers), ctx.renderer())?;
    let copy = copy_prompt(ctx, &prompt, options.copy);
    Ok(PromptOutcome { category: Some(category), prompt, copy })
}

/// Read the optional category and the raw answers of an answers file.
pub fn load_answers_file(path: &Path) -> Result<(Option<String>, Vec<(String, String)>), AppError> {
    if !path.is_file() {
        return Err(AppError::config_error(format!("Answers file not found: {}", path.display())));
    }
    let content = fs::read_to_string(path)?;
    parse_answers_file(&content)
}

fn parse_answers_file(content: &str) -> Result<(Option<String>, Vec<(String, String)>), AppError> {
    let file: AnswersFile = toml::from_str(content)?;
    let pairs = file
        .answers
        .into_iter()
        .map(|(label, value)| {
            let raw = raw_answer(&label, value)?;
            Ok((label, raw))
        })
        .collect::<Result<Vec<_>, AppError>>()?;
    Ok((file.category, pairs))
}

fn raw_answer(label: &str, value: toml::Value) -> Result<String, AppError> {
    match value {
        toml::Value::String(text) => Ok(text),
        toml::Value::Integer(number) => Ok(number.to_string()),
        toml::Value::Datetime(datetime) => Ok(datetime.to_string()),
        toml::Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                toml::Value::String(text) => Ok(text),
                other => Err(AppError::invalid_answer(
                    label,
                    format!("list items must be strings, found {}", other.type_str()),
                )),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(|items| items.join(",")),
        other => Err(AppError::invalid_answer(
            label,
            format!("unsupported value type {}", other.type_str()),
        )),
    }
}
