//! Declarative question table: which questions each task category asks.
//!
//! The table is static configuration. The collector walks it to ask questions,
//! and the builder checks answers against it.

use serde::Serialize;

use super::TaskCategory;

/// Label of the optional free-text field every category ends with.
pub const SUPPLEMENTARY_LABEL: &str = "補足情報";

/// Quiz field labels referenced by the structured template.
pub const SUBJECT_LABEL: &str = "対象教科";
pub const DIFFICULTY_LABEL: &str = "難易度";
pub const QUESTION_COUNT_LABEL: &str = "問題数";

/// Reminder date field label.
pub const EVENT_DATE_LABEL: &str = "実施日";

/// Difficulty scale, easiest first. The full label is stored and rendered.
pub const DIFFICULTY_LEVELS: [&str; 5] = [
    "1. 非常に易しい（高校入学時レベル）",
    "2. 易しい（基礎理解レベル）",
    "3. 普通（標準的難易度）",
    "4. やや難しい（応用力を問うレベル）",
    "5. 非常に難しい（国立大学入試問題レベル）",
];

/// Allowed quiz question counts.
pub const QUESTION_COUNTS: [i64; 4] = [1, 3, 5, 10];

const SUBJECTS: [&str; 6] = ["数学", "英語", "国語", "理科", "社会", "その他"];

const SUBJECT_BRANCHES: [Branch; 2] = [
    Branch {
        top: "理科",
        question: "理科の科目を選択してください",
        details: &["化学", "生物", "物理", "地学"],
    },
    Branch {
        top: "社会",
        question: "社会の科目を選択してください",
        details: &["地理", "日本史", "世界史", "倫理", "政治経済"],
    },
];

const STAFF_COUNTS: [i64; 10] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];

/// Second-level question asked when a particular top-level option is picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Branch {
    pub top: &'static str,
    pub question: &'static str,
    pub details: &'static [&'static str],
}

/// Input control and value domain of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum FieldKind {
    /// Exactly one option, shown as a radio group.
    Radio { options: &'static [&'static str] },
    /// Exactly one option, shown as a dropdown.
    Select { options: &'static [&'static str] },
    /// Any subset of options.
    MultiSelect { options: &'static [&'static str] },
    /// One number out of a closed set.
    Count { options: &'static [i64] },
    /// Calendar date, defaulting to today.
    Date,
    /// Free text.
    FreeText,
    /// One option; some options require a second-level detail.
    Branching { options: &'static [&'static str], branches: &'static [Branch] },
}

impl FieldKind {
    /// Short name of the input control, matching the serialized `kind` tag.
    pub fn name(&self) -> &'static str {
        match self {
            FieldKind::Radio { .. } => "radio",
            FieldKind::Select { .. } => "select",
            FieldKind::MultiSelect { .. } => "multi-select",
            FieldKind::Count { .. } => "count",
            FieldKind::Date => "date",
            FieldKind::FreeText => "free-text",
            FieldKind::Branching { .. } => "branching",
        }
    }

    /// Options as display strings. Empty for date and free-text fields.
    pub fn option_labels(&self) -> Vec<String> {
        match self {
            FieldKind::Radio { options }
            | FieldKind::Select { options }
            | FieldKind::MultiSelect { options }
            | FieldKind::Branching { options, .. } => {
                options.iter().map(|option| option.to_string()).collect()
            }
            FieldKind::Count { options } => options.iter().map(|n| n.to_string()).collect(),
            FieldKind::Date | FieldKind::FreeText => Vec::new(),
        }
    }

    /// Second-level question for a top-level option, if it has one.
    pub fn branch_for(&self, top: &str) -> Option<&'static Branch> {
        match self {
            FieldKind::Branching { branches, .. } => {
                branches.iter().find(|branch| branch.top == top)
            }
            _ => None,
        }
    }
}

/// One question of a category's form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    /// Key under which the answer is stored and rendered.
    pub label: &'static str,
    /// Question text shown to the user.
    pub question: &'static str,
    #[serde(flatten)]
    pub kind: FieldKind,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
}

const fn radio(
    label: &'static str,
    question: &'static str,
    options: &'static [&'static str],
) -> FieldDescriptor {
    FieldDescriptor {
        label,
        question,
        kind: FieldKind::Radio { options },
        required: true,
        placeholder: None,
    }
}

const fn select(
    label: &'static str,
    question: &'static str,
    options: &'static [&'static str],
) -> FieldDescriptor {
    FieldDescriptor {
        label,
        question,
        kind: FieldKind::Select { options },
        required: true,
        placeholder: None,
    }
}

const fn supplementary(placeholder: &'static str) -> FieldDescriptor {
    FieldDescriptor {
        label: SUPPLEMENTARY_LABEL,
        question: "追加の補足情報（任意）",
        kind: FieldKind::FreeText,
        required: false,
        placeholder: Some(placeholder),
    }
}

static QUIZ_CREATION: [FieldDescriptor; 4] = [
    FieldDescriptor {
        label: SUBJECT_LABEL,
        question: "大分類を選択してください",
        kind: FieldKind::Branching { options: &SUBJECTS, branches: &SUBJECT_BRANCHES },
        required: true,
        placeholder: None,
    },
    radio(DIFFICULTY_LABEL, "テストの難易度は？", &DIFFICULTY_LEVELS),
    FieldDescriptor {
        label: QUESTION_COUNT_LABEL,
        question: "問題数は？",
        kind: FieldKind::Count { options: &QUESTION_COUNTS },
        required: true,
        placeholder: None,
    },
    supplementary("例：出題傾向、使用する時間など"),
];

static EMAIL_DRAFT: [FieldDescriptor; 5] = [
    radio("メールの目的", "メールの目的は？", &["連絡", "依頼", "報告", "お礼", "その他"]),
    radio("宛先", "宛先は？", &["保護者", "同僚", "上司", "生徒", "その他"]),
    radio(
        "要望・依頼内容",
        "伝えたい内容は？",
        &["資料提出依頼", "会議設定", "スケジュール調整", "その他"],
    ),
    select("送信希望日時", "送信希望日時は？", &["すぐに", "今日中", "明日以降"]),
    supplementary("例：本文のトーン、署名など"),
];

static LESSON_PLAN_DRAFT: [FieldDescriptor; 6] = [
    radio(
        "授業形式",
        "授業の形式は？",
        &["講義形式", "グループワーク", "実習", "ディスカッション", "その他"],
    ),
    radio("重点事項", "重点事項は？", &["基礎理解", "応用力", "実践力", "創造力", "その他"]),
    radio("対象学年", "対象の高校学年は？", &["高校1年生", "高校2年生", "高校3年生"]),
    radio("対象クラス", "対象クラスは？", &["1組", "2組", "3組", "4組", "5組"]),
    FieldDescriptor {
        label: "使用教材",
        question: "使用する教材を選択（複数選択可）",
        kind: FieldKind::MultiSelect {
            options: &["教科書", "プリント", "映像教材", "オンライン資料", "その他"],
        },
        required: true,
        placeholder: None,
    },
    supplementary("例：生徒の習熟度に合わせた工夫など"),
];

static CLASS_NEWSLETTER: [FieldDescriptor; 5] = [
    radio("連絡内容", "連絡内容は？", &["今月の行事", "学校行事", "休校情報", "その他"]),
    radio(
        "お知らせ内容",
        "お知らせ内容は？",
        &["試験情報", "イベント情報", "クラブ活動", "その他"],
    ),
    radio("その他伝えたい事項", "その他伝えたい事項は？", &["特になし", "追記あり"]),
    select("発行頻度", "発行頻度は？", &["月1回", "月2回", "不定期"]),
    supplementary("例：文体やレイアウトの希望など"),
];

static GUARDIAN_NOTICE: [FieldDescriptor; 5] = [
    radio("連絡の目的", "連絡の目的は？", &["行事案内", "連絡事項", "個別連絡", "その他"]),
    radio(
        "伝えたい内容",
        "伝えたい内容は？",
        &["詳細な案内", "簡潔な連絡", "注意喚起", "その他"],
    ),
    radio(
        "締めのメッセージ",
        "締めの一言は？",
        &["よろしくお願いします", "ご確認ください", "ご対応の程お願い申し上げます", "その他"],
    ),
    radio("フォローアップ方法", "フォローアップ方法は？", &["電話", "メール", "面談", "その他"]),
    supplementary("例：連絡の背景、緊急度など"),
];

static REMINDER: [FieldDescriptor; 6] = [
    radio(
        "リマインド内容",
        "リマインドする内容は？",
        &["提出期限のリマインド", "会議のリマインド", "イベントのリマインド", "その他"],
    ),
    FieldDescriptor {
        label: EVENT_DATE_LABEL,
        question: "実施日を選択してください",
        kind: FieldKind::Date,
        required: true,
        placeholder: None,
    },
    radio("時間帯", "実施時間帯は？", &["午前", "午後", "夕方"]),
    radio("対象者", "対象者は？", &["全員", "特定のクラス", "特定のグループ", "その他"]),
    select("リマインド頻度", "リマインド頻度は？", &["1回", "複数回", "状況に応じて"]),
    supplementary("例：リマインドの注意点など"),
];

static TASK_SPLIT: [FieldDescriptor; 6] = [
    radio(
        "業務内容",
        "業務内容は？",
        &["授業準備", "試験作成", "部活動運営", "書類作成", "その他"],
    ),
    FieldDescriptor {
        label: "担当者数",
        question: "担当者数は？",
        kind: FieldKind::Count { options: &STAFF_COUNTS },
        required: true,
        placeholder: None,
    },
    radio("期間", "業務の期間は？", &["本日中", "今週中", "来週まで", "今月中"]),
    radio(
        "分割の希望",
        "分割の希望は？",
        &["役割分担", "作業の順序指定", "担当者ごとの分担", "その他"],
    ),
    select("優先順位", "作業の優先順位は？", &["高", "中", "低"]),
    supplementary("例：各担当者の得意分野など"),
];

/// Ordered questions for a category.
pub fn schema_for(category: TaskCategory) -> &'static [FieldDescriptor] {
    match category {
        TaskCategory::QuizCreation => &QUIZ_CREATION,
        TaskCategory::EmailDraft => &EMAIL_DRAFT,
        TaskCategory::LessonPlanDraft => &LESSON_PLAN_DRAFT,
        TaskCategory::ClassNewsletter => &CLASS_NEWSLETTER,
        TaskCategory::GuardianNotice => &GUARDIAN_NOTICE,
        TaskCategory::Reminder => &REMINDER,
        TaskCategory::TaskSplit => &TASK_SPLIT,
    }
}

/// Look up a single question of a category by label.
pub fn field(category: TaskCategory, label: &str) -> Option<&'static FieldDescriptor> {
    schema_for(category).iter().find(|field| field.label == label)
}
