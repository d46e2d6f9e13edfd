use chrono::NaiveDate;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, MultiSelect, Select};

use crate::domain::{AppError, DATE_FORMAT};
use crate::ports::FormPrompter;

/// Terminal prompter backed by dialoguer widgets.
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self { theme: ColorfulTheme::default() }
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl FormPrompter for DialoguerPrompter {
    fn confirm(&mut self, question: &str) -> Result<bool, AppError> {
        Confirm::with_theme(&self.theme)
            .with_prompt(question)
            .default(false)
            .interact()
            .map_err(|e| prompt_error(question, e))
    }

    fn select(
        &mut self,
        question: &str,
        items: &[String],
        default: usize,
    ) -> Result<usize, AppError> {
        Select::with_theme(&self.theme)
            .with_prompt(question)
            .items(items)
            .default(default)
            .interact()
            .map_err(|e| prompt_error(question, e))
    }

    fn multi_select(&mut self, question: &str, items: &[String]) -> Result<Vec<usize>, AppError> {
        MultiSelect::with_theme(&self.theme)
            .with_prompt(question)
            .items(items)
            .interact()
            .map_err(|e| prompt_error(question, e))
    }

    fn text(&mut self, question: &str, placeholder: Option<&str>) -> Result<String, AppError> {
        let label = match placeholder {
            Some(hint) => format!("{} {}", question, hint),
            None => question.to_string(),
        };
        Input::<String>::with_theme(&self.theme)
            .with_prompt(label)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| prompt_error(question, e))
    }

    fn date(&mut self, question: &str, default: NaiveDate) -> Result<NaiveDate, AppError> {
        let raw = Input::<String>::with_theme(&self.theme)
            .with_prompt(question)
            .default(default.format(DATE_FORMAT).to_string())
            .validate_with(|input: &String| -> Result<(), String> {
                NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
                    .map(|_| ())
                    .map_err(|_| "YYYY-MM-DD 形式で入力してください".to_string())
            })
            .interact_text()
            .map_err(|e| prompt_error(question, e))?;

        NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
            .map_err(|e| AppError::invalid_answer(question, e.to_string()))
    }
}

fn prompt_error(question: &str, err: dialoguer::Error) -> AppError {
    AppError::Prompt(format!("{}: {}", question, err))
}
