//! # bookwell-forms
//!
//! Debounced, schema-driven field validation: a generic cancel-and-replace
//! debounce combinator, the schema collaborator trait, a rule-based schema
//! implementation, and the per-field validation pipeline.

pub mod debounce;
pub mod pipeline;
pub mod schema;

pub use debounce::Debouncer;
pub use pipeline::FieldValidator;
pub use schema::{FieldError, FormSchema, Rule, RuleSchema, ValidationFailure};
