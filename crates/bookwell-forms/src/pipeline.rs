//! Debounced per-field validation pipeline.

use std::sync::Arc;

use dashmap::DashMap;
use serde_json::Value;
use tokio::time::Duration;
use tracing::error;

use bookwell_core::config::forms::FormsConfig;

use crate::debounce::Debouncer;
use crate::schema::FormSchema;

/// Runs debounced single-field validations against a schema, writing
/// per-field messages into a caller-owned error sink.
///
/// Each field gets its own debouncer instance, so a keystroke in one
/// field never cancels the pending validation of another.
pub struct FieldValidator {
    /// The schema collaborator.
    schema: Arc<dyn FormSchema>,
    /// Caller-owned error sink, keyed by field name.
    errors: Arc<DashMap<String, String>>,
    /// Quiet period per field.
    delay: Duration,
    /// One debouncer per field key.
    debouncers: DashMap<String, Arc<Debouncer<Value>>>,
}

impl std::fmt::Debug for FieldValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldValidator")
            .field("schema", &self.schema)
            .field("delay", &self.delay)
            .finish()
    }
}

impl FieldValidator {
    /// Creates a validator writing into `errors`.
    pub fn new(
        schema: Arc<dyn FormSchema>,
        errors: Arc<DashMap<String, String>>,
        config: &FormsConfig,
    ) -> Self {
        Self {
            schema,
            errors,
            delay: Duration::from_millis(config.debounce_delay_ms),
            debouncers: DashMap::new(),
        }
    }

    /// Schedules a debounced validation of one field against the given
    /// form snapshot. Superseded snapshots for the same field are
    /// discarded, never merged.
    pub fn validate_field(&self, field: &str, form_snapshot: Value) {
        let debouncer = self
            .debouncers
            .entry(field.to_string())
            .or_insert_with(|| {
                let schema = Arc::clone(&self.schema);
                let errors = Arc::clone(&self.errors);
                let field = field.to_string();
                Arc::new(Debouncer::new(self.delay, move |snapshot: Value| {
                    run_validation(schema.as_ref(), &errors, &field, &snapshot);
                }))
            })
            .clone();

        debouncer.call(form_snapshot);
    }
}

/// One validation run for one field.
///
/// Success clears the field's sink entry; a structured failure writes the
/// first message reported for the field; any other error is logged and
/// the sink entry is left untouched so a programming defect never shows
/// up as user feedback.
fn run_validation(
    schema: &dyn FormSchema,
    errors: &DashMap<String, String>,
    field: &str,
    snapshot: &Value,
) {
    let sub_schema = match schema.subset(&[field]) {
        Ok(sub_schema) => sub_schema,
        Err(e) => {
            error!(field, error = %e, "Schema cannot restrict validation to field");
            return;
        }
    };

    let value = snapshot.get(field).cloned().unwrap_or(Value::Null);
    let partial = serde_json::json!({ field: value });

    match sub_schema.validate(&partial) {
        Ok(()) => {
            errors.insert(field.to_string(), String::new());
        }
        Err(failure) => {
            if let Some(message) = failure
                .first_message_for(field)
                .or_else(|| failure.errors.first().map(|e| e.message.as_str()))
            {
                errors.insert(field.to_string(), message.to_string());
            }
        }
    }
}
