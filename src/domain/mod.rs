pub mod answer;
pub mod category;
pub mod error;
pub mod prompt;
pub mod schema;

pub use answer::{AnswerSet, AnswerValue, DATE_FORMAT, MULTI_SEPARATOR};
pub use category::{TaskCategory, TemplateForm};
pub use error::AppError;
pub use prompt::{PromptContext, PromptRequest, PromptText, TemplateRenderer, build_prompt};
pub use schema::{Branch, FieldDescriptor, FieldKind, schema_for};
