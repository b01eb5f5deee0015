//! Name validation for title and item rows.

use std::collections::HashSet;

use super::{NameError, RowKind};

/// Applies the naming rules to one row.
///
/// Rules, first match wins:
/// 1. absent or empty → `EmptyName`
/// 2. title row in create mode matching an existing list name,
///    case-insensitively → `DuplicateName`
/// 3. nothing but whitespace → `InvalidName`
#[derive(Debug, Clone, Default)]
pub struct NameValidator {
    existing_titles: HashSet<String>,
    check_duplicates: bool,
}

impl NameValidator {
    /// Validator for create mode; `existing_titles` must be lower-cased.
    pub fn for_create(existing_titles: HashSet<String>) -> Self {
        Self {
            existing_titles,
            check_duplicates: true,
        }
    }

    /// Validator for edit mode, where duplicate names are allowed.
    pub fn for_edit() -> Self {
        Self::default()
    }

    pub fn check(&self, title: Option<&str>, kind: RowKind) -> Option<NameError> {
        let title = match title {
            Some(title) if !title.is_empty() => title,
            _ => return Some(NameError::EmptyName),
        };

        if kind == RowKind::Title
            && self.check_duplicates
            && self.existing_titles.contains(&title.to_lowercase())
        {
            return Some(NameError::DuplicateName);
        }

        if title.trim().is_empty() {
            return Some(NameError::InvalidName);
        }

        None
    }
}
