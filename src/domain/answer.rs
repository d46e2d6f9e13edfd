use std::fmt;

use chrono::NaiveDate;

/// Separator used when a multi-select answer is rendered inline.
pub const MULTI_SEPARATOR: &str = "、";

/// Date format answers are normalized to.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single collected answer, already normalized by the form collector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerValue {
    /// One option of a radio or select question.
    Choice(String),
    /// Numeric option (question count, number of people).
    Integer(i64),
    /// Options picked in a multi-select question, in the order given.
    Multi(Vec<String>),
    /// Free text. May be empty.
    Text(String),
    /// Calendar date.
    Date(NaiveDate),
    /// Top-level choice with an optional second-level detail.
    Branch { top: String, detail: Option<String> },
}

impl AnswerValue {
    pub fn choice(value: impl Into<String>) -> Self {
        AnswerValue::Choice(value.into())
    }

    pub fn text(value: impl Into<String>) -> Self {
        AnswerValue::Text(value.into())
    }

    /// Build a multi-select answer, dropping repeated options.
    pub fn multi<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut picked: Vec<String> = Vec::new();
        for value in values {
            let value = value.into();
            if !picked.contains(&value) {
                picked.push(value);
            }
        }
        AnswerValue::Multi(picked)
    }

    pub fn branch(top: impl Into<String>, detail: Option<&str>) -> Self {
        AnswerValue::Branch { top: top.into(), detail: detail.map(str::to_string) }
    }
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerValue::Choice(value) | AnswerValue::Text(value) => f.write_str(value),
            AnswerValue::Integer(value) => write!(f, "{}", value),
            AnswerValue::Multi(values) => f.write_str(&values.join(MULTI_SEPARATOR)),
            AnswerValue::Date(date) => write!(f, "{}", date.format(DATE_FORMAT)),
            AnswerValue::Branch { top, detail: Some(detail) } => write!(f, "{}（{}）", top, detail),
            AnswerValue::Branch { top, detail: None } => f.write_str(top),
        }
    }
}

/// Answers keyed by question label, kept in insertion order.
///
/// Order matters: the generic template renders one line per entry in this order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSet {
    entries: Vec<(String, AnswerValue)>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an answer. Re-inserting a label replaces its value in place.
    pub fn insert(&mut self, label: impl Into<String>, value: AnswerValue) {
        let label = label.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == label) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((label, value)),
        }
    }

    /// Builder-style insert.
    pub fn with(mut self, label: impl Into<String>, value: AnswerValue) -> Self {
        self.insert(label, value);
        self
    }

    pub fn get(&self, label: &str) -> Option<&AnswerValue> {
        self.entries.iter().find(|(existing, _)| existing == label).map(|(_, value)| value)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.get(label).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnswerValue)> {
        self.entries.iter().map(|(label, value)| (label.as_str(), value))
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(label, _)| label.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<L: Into<String>> FromIterator<(L, AnswerValue)> for AnswerSet {
    fn from_iter<T: IntoIterator<Item = (L, AnswerValue)>>(iter: T) -> Self {
        let mut set = AnswerSet::new();
        for (label, value) in iter {
            set.insert(label, value);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn branch_renders_detail_in_fullwidth_parentheses() {
        assert_eq!(AnswerValue::branch("理科", Some("化学")).to_string(), "理科（化学）");
        assert_eq!(AnswerValue::branch("数学", None).to_string(), "数学");
    }

    #[test]
    fn date_is_zero_padded() {
        let date = NaiveDate::from_ymd_opt(2024, 4, 3).unwrap();
        assert_eq!(AnswerValue::Date(date).to_string(), "2024-04-03");
    }

    #[test]
    fn multi_joins_with_japanese_comma_and_dedupes() {
        let value = AnswerValue::multi(["教科書", "プリント", "教科書"]);
        assert_eq!(value.to_string(), "教科書、プリント");
        assert_eq!(AnswerValue::multi(Vec::<String>::new()).to_string(), "");
    }

    #[test]
    fn reinsert_keeps_first_position() {
        let mut set = AnswerSet::new();
        set.insert("宛先", AnswerValue::choice("同僚"));
        set.insert("補足情報", AnswerValue::text(""));
        set.insert("宛先", AnswerValue::choice("上司"));

        let labels: Vec<_> = set.labels().collect();
        assert_eq!(labels, vec!["宛先", "補足情報"]);
        assert_eq!(set.get("宛先"), Some(&AnswerValue::choice("上司")));
        assert_eq!(set.len(), 2);
    }
}
