use tracing::debug;

use crate::domain::schema::{
    self, DIFFICULTY_LABEL, FieldDescriptor, FieldKind, QUESTION_COUNT_LABEL, SUBJECT_LABEL,
    SUPPLEMENTARY_LABEL,
};
use crate::domain::{AnswerSet, AnswerValue, AppError, TaskCategory, TemplateForm};

use super::request::{PromptRequest, PromptText};
use super::template::{GenericFields, PromptContext, PromptLine, QuizFields, TemplateRenderer};

/// Build the prompt text for a request.
///
/// Returns an empty prompt while consent is withheld. Otherwise the category
/// must be set and every required question of its schema answered.
pub fn build_prompt<R>(request: &PromptRequest, renderer: &R) -> Result<PromptText, AppError>
where
    R: TemplateRenderer + ?Sized,
{
    if !request.consent {
        debug!("consent withheld, prompt suppressed");
        return Ok(PromptText::empty());
    }

    let category = request.category.ok_or_else(|| {
        AppError::InvalidState("a task category must be selected before building a prompt".into())
    })?;

    check_answers(category, &request.answers)?;

    let context = match category.template_form() {
        TemplateForm::Structured => PromptContext::Structured(quiz_fields(&request.answers)),
        TemplateForm::Generic => PromptContext::Generic(generic_fields(category, &request.answers)),
    };

    let text = renderer.render(&context)?;
    debug!(category = category.slug(), bytes = text.len(), "prompt rendered");
    Ok(PromptText::new(text))
}

fn check_answers(category: TaskCategory, answers: &AnswerSet) -> Result<(), AppError> {
    let fields = schema::schema_for(category);

    if let Some(label) = answers.labels().find(|label| schema::field(category, label).is_none()) {
        return Err(AppError::UnknownField {
            category: category.display_name().to_string(),
            label: label.to_string(),
        });
    }

    for field in fields {
        let Some(value) = answers.get(field.label) else {
            if field.required {
                return Err(AppError::MissingAnswer {
                    category: category.display_name().to_string(),
                    label: field.label.to_string(),
                });
            }
            continue;
        };

        if let FieldKind::Branching { options, .. } = field.kind {
            check_branch(field, options, value)?;
        }
    }

    Ok(())
}

/// A branching answer needs a known top-level option, and a detail exactly
/// when that option has a second-level question.
fn check_branch(
    field: &FieldDescriptor,
    options: &[&str],
    value: &AnswerValue,
) -> Result<(), AppError> {
    let AnswerValue::Branch { top, detail } = value else {
        return Err(AppError::invalid_answer(
            field.label,
            format!("'{}' must be given as a subject choice", value),
        ));
    };
    if !options.iter().any(|option| option == top) {
        return Err(AppError::invalid_answer(
            field.label,
            format!("'{}' is not one of {}", top, options.join(", ")),
        ));
    }

    match (field.kind.branch_for(top), detail) {
        (Some(branch), Some(detail)) if branch.details.iter().any(|known| known == detail) => {
            Ok(())
        }
        (Some(branch), Some(detail)) => Err(AppError::invalid_answer(
            field.label,
            format!("'{}' is not one of {}", detail, branch.details.join(", ")),
        )),
        (Some(branch), None) => Err(AppError::invalid_answer(
            field.label,
            format!("{} requires a detail ({})", top, branch.details.join(", ")),
        )),
        (None, Some(_)) => {
            Err(AppError::invalid_answer(field.label, format!("{} takes no detail", top)))
        }
        (None, None) => Ok(()),
    }
}

fn quiz_fields(answers: &AnswerSet) -> QuizFields {
    let render = |label: &str| answers.get(label).map(ToString::to_string).unwrap_or_default();
    QuizFields {
        subject: render(SUBJECT_LABEL),
        difficulty: render(DIFFICULTY_LABEL),
        question_count: render(QUESTION_COUNT_LABEL),
        supplementary: render(SUPPLEMENTARY_LABEL),
    }
}

fn generic_fields(category: TaskCategory, answers: &AnswerSet) -> GenericFields {
    GenericFields {
        category: category.display_name().to_string(),
        lines: answers
            .iter()
            .map(|(label, value)| PromptLine { label: label.to_string(), value: value.to_string() })
            .collect(),
    }
}
