use record_helpers::ingestion::{parse_route, parse_user_summary, parse_user_summary_str};
use record_helpers::policy::{get_budget_status, get_retry_decision, BudgetStatus, RetryDecision, RetryPolicy};
use record_helpers::types::UserSummary;
use record_helpers::validation::{validate_signup, ValidationResult};
use serde_json::json;

#[test]
fn parse_user_summary_requires_both_fields() {
    assert_eq!(parse_user_summary(&json!({"username": "kai"})), None);
    assert_eq!(
        parse_user_summary(&json!({"username": "kai", "points": 20})),
        Some(UserSummary {
            username: "kai".to_string(),
            points: 20.0
        })
    );
}

#[test]
fn parse_user_summary_str_handles_garbage() {
    assert_eq!(parse_user_summary_str("not json"), None);
    assert_eq!(parse_user_summary_str("[]"), None);
    assert!(parse_user_summary_str(r#"{"username":"kai","points":-3.5}"#).is_some());
}

#[test]
fn validate_signup_examples() {
    assert_eq!(
        validate_signup("a@b.com", "1234567").messages(),
        vec!["Password must be at least 8 chars"]
    );
    assert_eq!(
        validate_signup("ab", "short").messages(),
        vec!["Email must include @", "Password must be at least 8 chars"]
    );
    assert_eq!(validate_signup("dev@example.com", "12345678"), ValidationResult::Valid);
}

#[test]
fn retry_decision_examples() {
    assert_eq!(
        get_retry_decision(1, 4),
        RetryDecision {
            should_retry: true,
            next_delay_ms: 200
        }
    );
    assert_eq!(
        get_retry_decision(4, 4),
        RetryDecision {
            should_retry: false,
            next_delay_ms: 0
        }
    );
}

#[test]
fn retry_policy_with_custom_base_delay() {
    let policy = RetryPolicy {
        base_delay_ms: 50,
        max_attempts: 5,
    };
    let delays: Vec<u64> = (1..=5).map(|a| policy.decide(a).next_delay_ms).collect();
    assert_eq!(delays, vec![50, 100, 200, 400, 0]);
}

#[test]
fn retry_decision_serializes_camel_case() {
    let v = serde_json::to_value(get_retry_decision(2, 4)).unwrap();
    assert_eq!(v, json!({"shouldRetry": true, "nextDelayMs": 400}));
}

#[test]
fn budget_and_route_examples() {
    assert_eq!(get_budget_status(100.0, 120.0), BudgetStatus::Over);
    let route = parse_route("/users/42");
    assert_eq!(route.resource, "users");
    assert_eq!(route.id.as_deref(), Some("42"));
}
