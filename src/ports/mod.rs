mod clipboard_writer;
mod form_prompter;

pub use clipboard_writer::ClipboardWriter;
pub use form_prompter::FormPrompter;
