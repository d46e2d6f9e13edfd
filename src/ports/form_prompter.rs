use chrono::NaiveDate;

use crate::domain::AppError;

/// Port for asking the user questions one at a time.
///
/// The form collector drives this trait; the terminal adapter renders each
/// call as an interactive widget.
pub trait FormPrompter {
    /// Yes/no question. Defaults to "no".
    fn confirm(&mut self, question: &str) -> Result<bool, AppError>;

    /// Pick exactly one item. Returns its index.
    fn select(&mut self, question: &str, items: &[String], default: usize)
    -> Result<usize, AppError>;

    /// Pick any number of items. Returns the checked indices in item order.
    fn multi_select(&mut self, question: &str, items: &[String]) -> Result<Vec<usize>, AppError>;

    /// Free text. May return an empty string.
    fn text(&mut self, question: &str, placeholder: Option<&str>) -> Result<String, AppError>;

    /// Calendar date, pre-filled with `default`.
    fn date(&mut self, question: &str, default: NaiveDate) -> Result<NaiveDate, AppError>;
}
