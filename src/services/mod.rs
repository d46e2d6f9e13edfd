mod clipboard_arboard;
mod dialoguer_prompter;
pub mod template_renderer;

pub use clipboard_arboard::ArboardClipboard;
pub use dialoguer_prompter::DialoguerPrompter;
pub use template_renderer::MinijinjaTemplateRenderer;
