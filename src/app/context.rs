use chrono::NaiveDate;

use crate::app::config::AppConfig;
use crate::ports::{ClipboardWriter, FormPrompter};
use crate::services::MinijinjaTemplateRenderer;

/// Application context holding dependencies for command execution.
pub struct AppContext<P: FormPrompter, C: ClipboardWriter> {
    prompter: P,
    clipboard: C,
    renderer: MinijinjaTemplateRenderer,
    config: AppConfig,
    today: NaiveDate,
}

impl<P: FormPrompter, C: ClipboardWriter> AppContext<P, C> {
    /// Create a new application context.
    ///
    /// `today` pre-fills date questions.
    pub fn new(prompter: P, clipboard: C, config: AppConfig, today: NaiveDate) -> Self {
        Self { prompter, clipboard, renderer: MinijinjaTemplateRenderer::new(), config, today }
    }

    pub fn prompter_mut(&mut self) -> &mut P {
        &mut self.prompter
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    pub fn clipboard_mut(&mut self) -> &mut C {
        &mut self.clipboard
    }

    pub fn renderer(&self) -> &MinijinjaTemplateRenderer {
        &self.renderer
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }
}
