//! Schema collaborator trait and the rule-based implementation.

use std::collections::BTreeMap;

use serde_json::Value;
use thiserror::Error;
use validator::ValidateEmail;

use bookwell_core::{AppError, AppResult};

/// A single reported validation problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// The field the problem was reported for.
    pub field: String,
    /// Human-readable message, surfaced to the user verbatim.
    pub message: String,
}

/// Structured validation failure with ordered per-field messages.
#[derive(Debug, Clone, Error)]
#[error("validation failed on {} field(s)", errors.len())]
pub struct ValidationFailure {
    /// Reported problems, in schema order.
    pub errors: Vec<FieldError>,
}

impl ValidationFailure {
    /// The first message reported for `field`, if any.
    pub fn first_message_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

/// The schema collaborator interface.
///
/// A schema must be able to restrict itself to a named subset of fields
/// and then validate a partial form snapshot. Schemas that cannot subset
/// fail with a schema-capability error, which callers treat as a
/// programming defect rather than user input.
pub trait FormSchema: Send + Sync + std::fmt::Debug {
    /// Restrict validation to the named fields.
    fn subset(&self, fields: &[&str]) -> AppResult<Box<dyn FormSchema>>;

    /// Validate a form snapshot against this schema.
    fn validate(&self, data: &Value) -> Result<(), ValidationFailure>;
}

/// A single validation rule applied to one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Value must be present and, for strings, non-empty.
    Required,
    /// String value must be at least this many characters.
    MinLength(usize),
    /// String value must be at most this many characters.
    MaxLength(usize),
    /// String value must be a syntactically valid email address.
    Email,
}

/// Rule-based [`FormSchema`] implementation.
///
/// Fields are kept in a sorted map so reported errors have a stable
/// order. Rules within a field run in declaration order and every
/// failing rule is reported.
#[derive(Debug, Clone, Default)]
pub struct RuleSchema {
    fields: BTreeMap<String, Vec<Rule>>,
}

impl RuleSchema {
    /// Creates an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field with its rule list.
    pub fn with_field(mut self, name: impl Into<String>, rules: Vec<Rule>) -> Self {
        self.fields.insert(name.into(), rules);
        self
    }

    /// Applies one rule to one field value, returning a message on failure.
    fn apply(field: &str, rule: &Rule, value: Option<&Value>) -> Option<String> {
        let text = value.and_then(Value::as_str);
        match rule {
            Rule::Required => {
                let missing = match value {
                    None | Some(Value::Null) => true,
                    Some(Value::String(s)) => s.is_empty(),
                    Some(_) => false,
                };
                missing.then(|| format!("{field} is required"))
            }
            Rule::MinLength(min) => text
                .is_some_and(|s| s.chars().count() < *min)
                .then(|| format!("{field} must be at least {min} characters")),
            Rule::MaxLength(max) => text
                .is_some_and(|s| s.chars().count() > *max)
                .then(|| format!("{field} must be at most {max} characters")),
            Rule::Email => text
                .is_some_and(|s| !s.validate_email())
                .then(|| format!("{field} must be a valid email address")),
        }
    }
}

impl FormSchema for RuleSchema {
    fn subset(&self, fields: &[&str]) -> AppResult<Box<dyn FormSchema>> {
        let mut picked = BTreeMap::new();
        for &field in fields {
            let rules = self.fields.get(field).ok_or_else(|| {
                AppError::schema_capability(format!("Schema has no field named '{field}'"))
            })?;
            picked.insert(field.to_string(), rules.clone());
        }
        Ok(Box::new(Self { fields: picked }))
    }

    fn validate(&self, data: &Value) -> Result<(), ValidationFailure> {
        let mut errors = Vec::new();
        for (field, rules) in &self.fields {
            let value = data.get(field);
            for rule in rules {
                if let Some(message) = Self::apply(field, rule, value) {
                    errors.push(FieldError {
                        field: field.clone(),
                        message,
                    });
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationFailure { errors })
        }
    }
}
