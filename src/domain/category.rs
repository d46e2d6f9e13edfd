use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::AppError;

/// The school-affairs tasks a prompt can be generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskCategory {
    /// Short quiz with answers, formatted for pasting into a word processor.
    QuizCreation,
    /// Email body to colleagues, guardians or students.
    EmailDraft,
    /// First draft of a lesson plan.
    LessonPlanDraft,
    /// Class newsletter.
    ClassNewsletter,
    /// Notice addressed to guardians.
    GuardianNotice,
    /// Reminder message for a dated event.
    Reminder,
    /// Splitting a piece of work across several people.
    TaskSplit,
}

/// Which template strategy renders a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateForm {
    /// Fixed document with labeled fields and placeholder sections.
    Structured,
    /// Header followed by one `- label: value` line per answer.
    Generic,
}

impl TaskCategory {
    /// All categories in menu order.
    pub const ALL: [TaskCategory; 7] = [
        TaskCategory::QuizCreation,
        TaskCategory::EmailDraft,
        TaskCategory::LessonPlanDraft,
        TaskCategory::ClassNewsletter,
        TaskCategory::GuardianNotice,
        TaskCategory::Reminder,
        TaskCategory::TaskSplit,
    ];

    /// Label shown in menus and rendered in generic prompts.
    pub fn display_name(&self) -> &'static str {
        match self {
            TaskCategory::QuizCreation => "小テストの作成",
            TaskCategory::EmailDraft => "メール文面の作成",
            TaskCategory::LessonPlanDraft => "学習指導案の原案作成",
            TaskCategory::ClassNewsletter => "学級通信の作成",
            TaskCategory::GuardianNotice => "保護者連絡文面の作成",
            TaskCategory::Reminder => "リマインドの作成",
            TaskCategory::TaskSplit => "業務の分割",
        }
    }

    /// ASCII name accepted on the command line.
    pub fn slug(&self) -> &'static str {
        match self {
            TaskCategory::QuizCreation => "quiz",
            TaskCategory::EmailDraft => "email",
            TaskCategory::LessonPlanDraft => "lesson-plan",
            TaskCategory::ClassNewsletter => "newsletter",
            TaskCategory::GuardianNotice => "guardian-notice",
            TaskCategory::Reminder => "reminder",
            TaskCategory::TaskSplit => "task-split",
        }
    }

    fn variant_name(&self) -> &'static str {
        match self {
            TaskCategory::QuizCreation => "QuizCreation",
            TaskCategory::EmailDraft => "EmailDraft",
            TaskCategory::LessonPlanDraft => "LessonPlanDraft",
            TaskCategory::ClassNewsletter => "ClassNewsletter",
            TaskCategory::GuardianNotice => "GuardianNotice",
            TaskCategory::Reminder => "Reminder",
            TaskCategory::TaskSplit => "TaskSplit",
        }
    }

    pub fn template_form(&self) -> TemplateForm {
        match self {
            TaskCategory::QuizCreation => TemplateForm::Structured,
            _ => TemplateForm::Generic,
        }
    }
}

impl fmt::Display for TaskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for TaskCategory {
    type Err = AppError;

    /// Accepts the slug, the display name, or the variant name.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        let lowered = trimmed.to_lowercase();
        TaskCategory::ALL
            .into_iter()
            .find(|category| {
                category.slug() == lowered
                    || category.display_name() == trimmed
                    || category.variant_name().to_lowercase() == lowered
            })
            .ok_or_else(|| AppError::UnsupportedCategory(trimmed.to_string()))
    }
}
