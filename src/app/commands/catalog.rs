//! Read-only views of the category and question tables.

use serde::Serialize;

use crate::domain::{FieldDescriptor, TaskCategory, schema_for};

/// One row of `kyomu categories`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub slug: &'static str,
    pub display_name: &'static str,
    pub question_count: usize,
}

/// Questions of one category, as printed by `kyomu schema`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySchema {
    pub slug: &'static str,
    pub display_name: &'static str,
    pub fields: &'static [FieldDescriptor],
}

pub fn list_categories() -> Vec<CategorySummary> {
    TaskCategory::ALL
        .into_iter()
        .map(|category| CategorySummary {
            slug: category.slug(),
            display_name: category.display_name(),
            question_count: schema_for(category).len(),
        })
        .collect()
}

pub fn describe(category: TaskCategory) -> CategorySchema {
    CategorySchema {
        slug: category.slug(),
        display_name: category.display_name(),
        fields: schema_for(category),
    }
}
