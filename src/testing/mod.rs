mod mock_clipboard;
mod scripted_prompter;

pub use mock_clipboard::MockClipboard;
pub use scripted_prompter::{Reply, ScriptedPrompter};
