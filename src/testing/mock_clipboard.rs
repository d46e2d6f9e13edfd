use crate::domain::AppError;
use crate::ports::ClipboardWriter;

/// In-memory clipboard that records every write.
#[derive(Debug, Default)]
pub struct MockClipboard {
    writes: Vec<String>,
    fail_with: Option<String>,
}

impl MockClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clipboard whose writes always fail, as in a session without a display.
    pub fn failing() -> Self {
        Self { writes: Vec::new(), fail_with: Some("no display available".to_string()) }
    }

    /// Text of the most recent successful write.
    pub fn get_written_text(&self) -> Option<String> {
        self.writes.last().cloned()
    }

    pub fn write_count(&self) -> usize {
        self.writes.len()
    }
}

impl ClipboardWriter for MockClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), AppError> {
        if let Some(reason) = &self.fail_with {
            return Err(AppError::Clipboard(reason.clone()));
        }
        self.writes.push(text.to_string());
        Ok(())
    }
}
