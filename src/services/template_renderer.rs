use std::sync::OnceLock;

use include_dir::{Dir, include_dir};
use minijinja::{Environment, UndefinedBehavior};

use crate::domain::{AppError, PromptContext, TemplateForm, TemplateRenderer};

static TEMPLATE_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

const STRUCTURED_TEMPLATE: &str = "structured_quiz.txt";
const GENERIC_TEMPLATE: &str = "generic.txt";

/// Template file backing each form.
pub fn template_name(form: TemplateForm) -> &'static str {
    match form {
        TemplateForm::Structured => STRUCTURED_TEMPLATE,
        TemplateForm::Generic => GENERIC_TEMPLATE,
    }
}

/// Read an embedded template by file name.
pub fn read_template_asset(name: &str) -> Option<&'static str> {
    TEMPLATE_DIR.get_file(name).and_then(|file| file.contents_utf8())
}

/// Template renderer using Minijinja over the embedded template assets.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinijinjaTemplateRenderer;

impl MinijinjaTemplateRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for MinijinjaTemplateRenderer {
    fn render(&self, context: &PromptContext) -> Result<String, AppError> {
        let env = environment()?;
        let name = template_name(context.form());
        let template = env.get_template(name).map_err(|err| template_render_error(name, err))?;

        let rendered = match context {
            PromptContext::Structured(fields) => template.render(fields),
            PromptContext::Generic(fields) => template.render(fields),
        };
        rendered.map_err(|err| template_render_error(name, err))
    }
}

static ENV: OnceLock<Result<Environment<'static>, String>> = OnceLock::new();

fn environment() -> Result<&'static Environment<'static>, AppError> {
    ENV.get_or_init(|| {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        for name in [STRUCTURED_TEMPLATE, GENERIC_TEMPLATE] {
            let source = read_template_asset(name)
                .ok_or_else(|| format!("embedded template {} not found", name))?;
            env.add_template(name, source).map_err(|err| format!("{}: {}", name, err))?;
        }
        Ok(env)
    })
    .as_ref()
    .map_err(|reason| AppError::TemplateRender {
        template: "environment".to_string(),
        reason: reason.clone(),
    })
}

fn template_render_error(template_name: &str, err: impl std::fmt::Display) -> AppError {
    AppError::TemplateRender { template: template_name.to_string(), reason: err.to_string() }
}
