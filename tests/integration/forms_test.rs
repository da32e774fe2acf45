//! Integration tests for the debounced validation pipeline.

use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use serde_json::json;

use bookwell::core::config::forms::FormsConfig;
use bookwell::forms::{FieldValidator, FormSchema, Rule, RuleSchema};

fn booking_schema() -> Arc<dyn FormSchema> {
    Arc::new(
        RuleSchema::new()
            .with_field("email", vec![Rule::Required, Rule::Email])
            .with_field("username", vec![Rule::Required, Rule::MinLength(3)])
            .with_field("title", vec![Rule::Required, Rule::MaxLength(80)]),
    )
}

fn pipeline() -> (FieldValidator, Arc<DashMap<String, String>>) {
    let errors = Arc::new(DashMap::new());
    let validator = FieldValidator::new(
        booking_schema(),
        Arc::clone(&errors),
        &FormsConfig::default(),
    );
    (validator, errors)
}

#[tokio::test(start_paused = true)]
async fn rapid_keystrokes_collapse_to_one_validation() {
    let (validator, errors) = pipeline();

    for snapshot in ["a", "ad", "ada@example.com"] {
        validator.validate_field("email", json!({"email": snapshot}));
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
    tokio::time::sleep(Duration::from_millis(400)).await;

    // Only the final snapshot was validated, and it passes.
    assert_eq!(errors.get("email").unwrap().value(), "");
}

#[tokio::test(start_paused = true)]
async fn two_fields_validate_within_overlapping_windows() {
    let (validator, errors) = pipeline();

    validator.validate_field("email", json!({"email": "bad"}));
    tokio::time::sleep(Duration::from_millis(100)).await;
    validator.validate_field("username", json!({"username": "ada42"}));
    tokio::time::sleep(Duration::from_millis(500)).await;

    assert_eq!(
        errors.get("email").unwrap().value(),
        "email must be a valid email address"
    );
    assert_eq!(errors.get("username").unwrap().value(), "");
}

#[tokio::test(start_paused = true)]
async fn fixing_a_field_clears_its_message() {
    let (validator, errors) = pipeline();

    validator.validate_field("title", json!({"title": ""}));
    tokio::time::sleep(Duration::from_millis(400)).await;
    assert_eq!(errors.get("title").unwrap().value(), "title is required");

    validator.validate_field("title", json!({"title": "Quarterly review"}));
    tokio::time::sleep(Duration::from_millis(400)).await;
    assert_eq!(errors.get("title").unwrap().value(), "");
}
