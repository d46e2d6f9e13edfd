//! kyomu: Collect school-affairs task details and render ready-to-paste chat assistant prompts.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    CategorySchema, CategorySummary, CopyStatus, GenerateOptions, PromptOutcome, RenderOptions,
    build_prompt, categories, describe_category, generate, render,
};
pub use app::config::{AppConfig, load_config, parse_config};
pub use domain::{
    AnswerSet, AnswerValue, AppError, FieldDescriptor, FieldKind, PromptRequest, PromptText,
    TaskCategory, schema_for,
};
