mod builder;
mod request;
mod template;

pub use builder::build_prompt;
pub use request::{PromptRequest, PromptText};
pub use template::{GenericFields, PromptContext, PromptLine, QuizFields, TemplateRenderer};
