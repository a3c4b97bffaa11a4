//! Field validation rules and their user-facing messages.
//!
//! Every constraint implies non-empty (after trimming). A step validates in
//! field declaration order and stops at the first failure; there is no
//! aggregation of simultaneous errors.

use std::collections::HashMap;

use regex::Regex;

use crate::forms::definition::StepDefinition;

/// Validation rule attached to a required field.
#[derive(Debug, Clone, PartialEq)]
pub enum Constraint {
    NonEmpty,
    EmailAddress,
    /// Non-empty and at most this many characters.
    MaxLength(usize),
}

/// Checks one value against one constraint. `label` is used to build the
/// message shown to the user.
pub fn check(constraint: &Constraint, label: &str, value: &str) -> Result<(), String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(match constraint {
            Constraint::EmailAddress => "Please enter a valid email address".to_string(),
            _ => format!("Please enter your {}", label.to_lowercase()),
        });
    }
    match constraint {
        Constraint::NonEmpty => Ok(()),
        Constraint::EmailAddress => {
            if is_valid_email(value) {
                Ok(())
            } else {
                Err("Please enter a valid email address".to_string())
            }
        }
        Constraint::MaxLength(limit) => {
            if value.chars().count() <= *limit {
                Ok(())
            } else {
                Err(format!("{} must be {} characters or fewer", label, limit))
            }
        }
    }
}

/// Validates every required field of `step` against `fields`, in declaration
/// order. Returns the first failing rule's message.
pub fn validate_step(
    step: &StepDefinition,
    fields: &HashMap<String, String>,
) -> Result<(), String> {
    for field in &step.fields {
        if let Some(constraint) = &field.constraint {
            let value = fields.get(&field.name).map(String::as_str).unwrap_or("");
            check(constraint, &field.label, value)?;
        }
    }
    Ok(())
}

/// Email shape check: `local@domain.tld`, no whitespace, at least one `.`
/// after the `@`.
pub fn is_valid_email(value: &str) -> bool {
    let re = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    re.is_match(value)
}
