use std::collections::VecDeque;

use chrono::NaiveDate;

use crate::domain::AppError;
use crate::ports::FormPrompter;

/// One canned reply for [`ScriptedPrompter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Confirm(bool),
    Select(usize),
    MultiSelect(Vec<usize>),
    Text(String),
    /// `None` accepts the pre-filled default.
    Date(Option<NaiveDate>),
}

/// Prompter that answers from a fixed script and records every question.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    replies: VecDeque<Reply>,
    pub asked: Vec<String>,
    pub date_defaults: Vec<NaiveDate>,
}

impl ScriptedPrompter {
    pub fn new(replies: impl IntoIterator<Item = Reply>) -> Self {
        Self { replies: replies.into_iter().collect(), ..Self::default() }
    }

    pub fn remaining(&self) -> usize {
        self.replies.len()
    }

    fn next(&mut self, question: &str) -> Result<Reply, AppError> {
        self.asked.push(question.to_string());
        self.replies
            .pop_front()
            .ok_or_else(|| AppError::Prompt(format!("{}: script exhausted", question)))
    }
}

fn unexpected(question: &str, reply: Reply) -> AppError {
    AppError::Prompt(format!("{}: unexpected scripted reply {:?}", question, reply))
}

impl FormPrompter for ScriptedPrompter {
    fn confirm(&mut self, question: &str) -> Result<bool, AppError> {
        match self.next(question)? {
            Reply::Confirm(value) => Ok(value),
            other => Err(unexpected(question, other)),
        }
    }

    fn select(
        &mut self,
        question: &str,
        items: &[String],
        _default: usize,
    ) -> Result<usize, AppError> {
        match self.next(question)? {
            Reply::Select(index) if index < items.len() => Ok(index),
            other => Err(unexpected(question, other)),
        }
    }

    fn multi_select(&mut self, question: &str, items: &[String]) -> Result<Vec<usize>, AppError> {
        match self.next(question)? {
            Reply::MultiSelect(indices) if indices.iter().all(|i| *i < items.len()) => Ok(indices),
            other => Err(unexpected(question, other)),
        }
    }

    fn text(&mut self, question: &str, _placeholder: Option<&str>) -> Result<String, AppError> {
        match self.next(question)? {
            Reply::Text(value) => Ok(value),
            other => Err(unexpected(question, other)),
        }
    }

    fn date(&mut self, question: &str, default: NaiveDate) -> Result<NaiveDate, AppError> {
        self.date_defaults.push(default);
        match self.next(question)? {
            Reply::Date(value) => Ok(value.unwrap_or(default)),
            other => Err(unexpected(question, other)),
        }
    }
}
