//! Form collection: turning user input into a normalized `AnswerSet`.

use chrono::NaiveDate;
use tracing::debug;

use crate::domain::schema::{self, FieldDescriptor, FieldKind};
use crate::domain::{AnswerSet, AnswerValue, AppError, DATE_FORMAT, TaskCategory};
use crate::ports::FormPrompter;

pub const CONSENT_QUESTION: &str = "【必須】個人情報を入力しないことに同意しますか？";
pub const CONSENT_WARNING: &str =
    "※ 個人情報の入力は禁止されています。同意いただくまで、次の入力項目は表示されません。";
pub const CATEGORY_QUESTION: &str = "業務内容を選択してください";

/// Ask for the personal-information consent.
pub fn ask_consent<P: FormPrompter>(prompter: &mut P) -> Result<bool, AppError> {
    prompter.confirm(CONSENT_QUESTION)
}

/// Ask which task the prompt is for.
pub fn select_category<P: FormPrompter>(prompter: &mut P) -> Result<TaskCategory, AppError> {
    let items: Vec<String> =
        TaskCategory::ALL.iter().map(|category| category.display_name().to_string()).collect();
    let index = prompter.select(CATEGORY_QUESTION, &items, 0)?;
    TaskCategory::ALL
        .get(index)
        .copied()
        .ok_or_else(|| AppError::InvalidState(format!("category index {} out of range", index)))
}

/// Ask every question of `category` in schema order.
///
/// Date questions are pre-filled with `today`.
pub fn collect_interactive<P: FormPrompter>(
    prompter: &mut P,
    category: TaskCategory,
    today: NaiveDate,
) -> Result<AnswerSet, AppError> {
    let mut answers = AnswerSet::new();
    for field in schema::schema_for(category) {
        let value = ask_field(prompter, field, today)?;
        debug!(label = field.label, value = %value, "answer collected");
        answers.insert(field.label, value);
    }
    Ok(answers)
}

fn ask_field<P: FormPrompter>(
    prompter: &mut P,
    field: &FieldDescriptor,
    today: NaiveDate,
) -> Result<AnswerValue, AppError> {
    let items = field.kind.option_labels();
    match field.kind {
        FieldKind::Radio { options } | FieldKind::Select { options } => {
            let index = prompter.select(field.question, &items, 0)?;
            Ok(AnswerValue::choice(pick(field.label, options, index)?))
        }
        FieldKind::MultiSelect { options } => {
            let indices = prompter.multi_select(field.question, &items)?;
            let picked = indices
                .into_iter()
                .map(|index| pick(field.label, options, index))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(AnswerValue::multi(picked))
        }
        FieldKind::Count { options } => {
            let index = prompter.select(field.question, &items, 0)?;
            Ok(AnswerValue::Integer(pick(field.label, options, index)?))
        }
        FieldKind::Date => Ok(AnswerValue::Date(prompter.date(field.question, today)?)),
        FieldKind::FreeText => {
            Ok(AnswerValue::text(prompter.text(field.question, field.placeholder)?))
        }
        FieldKind::Branching { options, .. } => {
            let index = prompter.select(field.question, &items, 0)?;
            let top = pick(field.label, options, index)?;
            let detail = match field.kind.branch_for(top) {
                Some(branch) => {
                    let details: Vec<String> =
                        branch.details.iter().map(|detail| detail.to_string()).collect();
                    let index = prompter.select(branch.question, &details, 0)?;
                    Some(pick(field.label, branch.details, index)?)
                }
                None => None,
            };
            Ok(AnswerValue::branch(top, detail))
        }
    }
}

fn pick<T: Copy>(label: &str, options: &[T], index: usize) -> Result<T, AppError> {
    options
        .get(index)
        .copied()
        .ok_or_else(|| AppError::invalid_answer(label, format!("option {} out of range", index)))
}

/// Split a `LABEL=VALUE` argument.
pub fn parse_pair(raw: &str) -> Result<(String, String), AppError> {
    match raw.split_once('=') {
        Some((label, value)) if !label.trim().is_empty() => {
            Ok((label.trim().to_string(), value.to_string()))
        }
        _ => Err(AppError::invalid_answer(raw, "expected LABEL=VALUE")),
    }
}

/// Build an `AnswerSet` from raw label/value pairs.
///
/// The result is in schema order. Missing free-text answers become empty
/// strings and a missing date becomes `today`.
pub fn collect_from_pairs(
    category: TaskCategory,
    pairs: &[(String, String)],
    today: NaiveDate,
) -> Result<AnswerSet, AppError> {
    for (index, (label, _)) in pairs.iter().enumerate() {
        if schema::field(category, label).is_none() {
            return Err(AppError::UnknownField {
                category: category.display_name().to_string(),
                label: label.clone(),
            });
        }
        if pairs[..index].iter().any(|(earlier, _)| earlier == label) {
            return Err(AppError::invalid_answer(label.as_str(), "given more than once"));
        }
    }

    let mut answers = AnswerSet::new();
    for field in schema::schema_for(category) {
        let raw = pairs.iter().find(|(label, _)| label == field.label).map(|(_, raw)| raw);
        match (raw, field.kind) {
            (Some(raw), _) => answers.insert(field.label, parse_answer(field, raw)?),
            (None, FieldKind::Date) => answers.insert(field.label, AnswerValue::Date(today)),
            (None, FieldKind::FreeText) => answers.insert(field.label, AnswerValue::text("")),
            (None, _) if field.required => {
                return Err(AppError::MissingAnswer {
                    category: category.display_name().to_string(),
                    label: field.label.to_string(),
                });
            }
            (None, _) => {}
        }
    }
    Ok(answers)
}

/// Parse one raw answer against its question.
///
/// Choices accept the option text or its 1-based position. Multi-select
/// answers are separated by `,` or `、`. Branching answers accept
/// `理科/化学` or `理科（化学）`.
pub fn parse_answer(field: &FieldDescriptor, raw: &str) -> Result<AnswerValue, AppError> {
    match field.kind {
        FieldKind::Radio { options } | FieldKind::Select { options } => {
            parse_choice(field.label, options, raw).map(AnswerValue::choice)
        }
        FieldKind::MultiSelect { options } => {
            let picked = raw
                .split([',', '、'])
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .map(|part| parse_choice(field.label, options, part))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(AnswerValue::multi(picked))
        }
        FieldKind::Count { options } => {
            let value: i64 = raw.trim().parse().map_err(|_| {
                AppError::invalid_answer(field.label, format!("'{}' is not a number", raw.trim()))
            })?;
            if options.contains(&value) {
                Ok(AnswerValue::Integer(value))
            } else {
                Err(AppError::invalid_answer(
                    field.label,
                    format!("{} is not one of {}", value, field.kind.option_labels().join(", ")),
                ))
            }
        }
        FieldKind::Date => NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
            .map(AnswerValue::Date)
            .map_err(|_| {
                AppError::invalid_answer(field.label, format!("'{}' is not YYYY-MM-DD", raw.trim()))
            }),
        FieldKind::FreeText => Ok(AnswerValue::text(raw)),
        FieldKind::Branching { options, .. } => {
            let (top_raw, detail_raw) = split_branch(raw);
            let top = parse_choice(field.label, options, top_raw)?;
            match (field.kind.branch_for(top), detail_raw) {
                (Some(branch), Some(detail)) => {
                    let detail = parse_choice(field.label, branch.details, detail)?;
                    Ok(AnswerValue::branch(top, Some(detail)))
                }
                (Some(branch), None) => Err(AppError::invalid_answer(
                    field.label,
                    format!("{} requires a detail ({})", top, branch.details.join(", ")),
                )),
                (None, Some(_)) => Err(AppError::invalid_answer(
                    field.label,
                    format!("{} takes no detail", top),
                )),
                (None, None) => Ok(AnswerValue::branch(top, None)),
            }
        }
    }
}

fn split_branch(raw: &str) -> (&str, Option<&str>) {
    let raw = raw.trim();
    if let Some((top, detail)) = raw.split_once('/') {
        return (top.trim(), Some(detail.trim()));
    }
    if let Some(inner) = raw.strip_suffix('）') {
        if let Some((top, detail)) = inner.split_once('（') {
            return (top.trim(), Some(detail.trim()));
        }
    }
    (raw, None)
}

fn parse_choice(
    label: &str,
    options: &'static [&'static str],
    raw: &str,
) -> Result<&'static str, AppError> {
    let raw = raw.trim();
    if let Some(option) = options.iter().copied().find(|option| *option == raw) {
        return Ok(option);
    }
    let position = raw.parse::<usize>().ok().and_then(|n| n.checked_sub(1));
    if let Some(option) = position.and_then(|index| options.get(index).copied()) {
        return Ok(option);
    }
    Err(AppError::invalid_answer(
        label,
        format!("'{}' is not one of {}", raw, options.join(", ")),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::schema::{DIFFICULTY_LEVELS, SUBJECT_LABEL};
    use crate::testing::{Reply, ScriptedPrompter};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter().map(|(label, value)| (label.to_string(), value.to_string())).collect()
    }

    #[test]
    fn interactive_quiz_asks_sub_subject_for_science() {
        let mut prompter = ScriptedPrompter::new([
            Reply::Select(3),
            Reply::Select(0),
            Reply::Select(1),
            Reply::Select(2),
            Reply::Text("計算問題中心".to_string()),
        ]);

        let answers =
            collect_interactive(&mut prompter, TaskCategory::QuizCreation, today()).unwrap();

        assert_eq!(prompter.asked[1], "理科の科目を選択してください");
        assert_eq!(answers.get(SUBJECT_LABEL).unwrap().to_string(), "理科（化学）");
        assert_eq!(answers.get("難易度").unwrap().to_string(), DIFFICULTY_LEVELS[1]);
        assert_eq!(answers.get("問題数"), Some(&AnswerValue::Integer(5)));
        assert_eq!(answers.get("補足情報"), Some(&AnswerValue::text("計算問題中心")));
        assert_eq!(prompter.remaining(), 0);
    }

    #[test]
    fn interactive_quiz_skips_sub_subject_for_math() {
        let mut prompter = ScriptedPrompter::new([
            Reply::Select(0),
            Reply::Select(0),
            Reply::Select(0),
            Reply::Text(String::new()),
        ]);

        let answers =
            collect_interactive(&mut prompter, TaskCategory::QuizCreation, today()).unwrap();

        assert_eq!(answers.get(SUBJECT_LABEL), Some(&AnswerValue::branch("数学", None)));
        assert_eq!(prompter.asked.len(), 4);
    }

    #[test]
    fn interactive_reminder_defaults_date_to_today() {
        let mut prompter = ScriptedPrompter::new([
            Reply::Select(1),
            Reply::Date(None),
            Reply::Select(0),
            Reply::Select(0),
            Reply::Select(0),
            Reply::Text(String::new()),
        ]);

        let answers = collect_interactive(&mut prompter, TaskCategory::Reminder, today()).unwrap();

        assert_eq!(prompter.date_defaults, vec![today()]);
        assert_eq!(answers.get("実施日").unwrap().to_string(), "2024-06-01");
    }

    #[test]
    fn interactive_multi_select_joins_checked_materials() {
        let mut prompter = ScriptedPrompter::new([
            Reply::Select(0),
            Reply::Select(0),
            Reply::Select(0),
            Reply::Select(0),
            Reply::MultiSelect(vec![0, 2]),
            Reply::Text(String::new()),
        ]);

        let answers =
            collect_interactive(&mut prompter, TaskCategory::LessonPlanDraft, today()).unwrap();

        assert_eq!(answers.get("使用教材").unwrap().to_string(), "教科書、映像教材");
    }

    #[test]
    fn short_email_labels_are_not_schema_labels() {
        let raw = pairs(&[
            ("目的", "依頼"),
            ("宛先", "同僚"),
            ("内容", "資料提出依頼"),
            ("送信希望日時", "すぐに"),
        ]);

        let err = collect_from_pairs(TaskCategory::EmailDraft, &raw, today()).unwrap_err();

        assert!(matches!(err, AppError::UnknownField { label, .. } if label == "目的"));
    }

    #[test]
    fn select_category_maps_index_to_menu_order() {
        let mut prompter = ScriptedPrompter::new([Reply::Select(6)]);
        assert_eq!(select_category(&mut prompter).unwrap(), TaskCategory::TaskSplit);
        assert_eq!(prompter.asked, vec![CATEGORY_QUESTION]);
    }

    #[test]
    fn exhausted_script_surfaces_prompt_error() {
        let mut prompter = ScriptedPrompter::new([]);
        let err = ask_consent(&mut prompter).unwrap_err();
        assert!(matches!(err, AppError::Prompt(_)));
    }

    #[test]
    fn pairs_are_returned_in_schema_order_with_defaults() {
        let answers = collect_from_pairs(
            TaskCategory::Reminder,
            &pairs(&[
                ("リマインド頻度", "複数回"),
                ("対象者", "全員"),
                ("時間帯", "2"),
                ("リマインド内容", "会議のリマインド"),
            ]),
            today(),
        )
        .unwrap();

        let labels: Vec<_> = answers.labels().collect();
        assert_eq!(
            labels,
            vec!["リマインド内容", "実施日", "時間帯", "対象者", "リマインド頻度", "補足情報"]
        );
        assert_eq!(answers.get("時間帯"), Some(&AnswerValue::choice("午後")));
        assert_eq!(answers.get("実施日"), Some(&AnswerValue::Date(today())));
        assert_eq!(answers.get("補足情報"), Some(&AnswerValue::text("")));
    }

    #[test]
    fn missing_required_pair_is_reported() {
        let err = collect_from_pairs(
            TaskCategory::EmailDraft,
            &pairs(&[("メールの目的", "依頼")]),
            today(),
        )
        .unwrap_err();
        assert!(matches!(err, AppError::MissingAnswer { label, .. } if label == "宛先"));
    }

    #[test]
    fn duplicate_and_unknown_pairs_are_rejected() {
        let duplicate = collect_from_pairs(
            TaskCategory::EmailDraft,
            &pairs(&[("宛先", "同僚"), ("宛先", "上司")]),
            today(),
        )
        .unwrap_err();
        assert!(matches!(duplicate, AppError::InvalidAnswer { .. }));

        let unknown =
            collect_from_pairs(TaskCategory::EmailDraft, &pairs(&[("目的", "依頼")]), today())
                .unwrap_err();
        assert!(matches!(unknown, AppError::UnknownField { label, .. } if label == "目的"));
    }

    #[test]
    fn branching_answer_accepts_slash_and_parenthesis_forms() {
        let subject = schema::field(TaskCategory::QuizCreation, SUBJECT_LABEL).unwrap();

        assert_eq!(parse_answer(subject, "理科/化学").unwrap().to_string(), "理科（化学）");
        assert_eq!(parse_answer(subject, "社会（倫理）").unwrap().to_string(), "社会（倫理）");
        assert_eq!(parse_answer(subject, "数学").unwrap().to_string(), "数学");
        assert!(parse_answer(subject, "理科").is_err());
        assert!(parse_answer(subject, "数学/代数").is_err());
        assert!(parse_answer(subject, "理科/数学").is_err());
    }

    #[test]
    fn count_answer_must_be_in_closed_set() {
        let count = schema::field(TaskCategory::QuizCreation, "問題数").unwrap();

        assert_eq!(parse_answer(count, "10").unwrap(), AnswerValue::Integer(10));
        assert!(parse_answer(count, "4").is_err());
        assert!(parse_answer(count, "many").is_err());
    }

    #[test]
    fn difficulty_accepts_rank_as_position() {
        let difficulty = schema::field(TaskCategory::QuizCreation, "難易度").unwrap();
        assert_eq!(parse_answer(difficulty, "5").unwrap().to_string(), DIFFICULTY_LEVELS[4]);
    }

    #[test]
    fn date_answer_is_normalized() {
        let date = schema::field(TaskCategory::Reminder, "実施日").unwrap();
        assert_eq!(parse_answer(date, "2025-3-7").unwrap().to_string(), "2025-03-07");
        assert!(parse_answer(date, "07/03/2025").is_err());
    }

    #[test]
    fn multi_select_splits_on_both_commas() {
        let materials = schema::field(TaskCategory::LessonPlanDraft, "使用教材").unwrap();
        assert_eq!(
            parse_answer(materials, "教科書, プリント、映像教材").unwrap(),
            AnswerValue::multi(["教科書", "プリント", "映像教材"])
        );
        assert_eq!(parse_answer(materials, "").unwrap(), AnswerValue::Multi(Vec::new()));
        assert!(parse_answer(materials, "黒板").is_err());
    }

    #[test]
    fn parse_pair_splits_on_first_equals() {
        assert_eq!(
            parse_pair("補足情報=a=b").unwrap(),
            ("補足情報".to_string(), "a=b".to_string())
        );
        assert!(parse_pair("=value").is_err());
        assert!(parse_pair("no-separator").is_err());
    }
}
