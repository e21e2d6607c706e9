//! Basic tests for fallible

use fallible::*;
use std::cell::Cell;
use std::collections::HashSet;

fn parse(input: &str) -> Outcome<i32, String> {
    input
        .parse::<i32>()
        .map_err(|e| format!("{input}: {e}"))
        .into()
}

#[test]
fn test_end_to_end_success_path() {
    let result = Outcome::<i32, i32>::success(1).map(|i| i + 1).unwrap_or(0);
    assert_eq!(result, 2);
}

#[test]
fn test_end_to_end_failure_path() {
    let calls = Cell::new(0);
    let result = Outcome::<i32, i32>::failure(1)
        .map(|i| {
            calls.set(calls.get() + 1);
            i + 1
        })
        .unwrap_or(0);

    assert_eq!(result, 0);
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_pipeline_short_circuits_after_first_failure() {
    let later_steps = Cell::new(0);

    let outcome = parse("12x")
        .and_then(|n| {
            later_steps.set(later_steps.get() + 1);
            Outcome::success(n * 2)
        })
        .map(|n| {
            later_steps.set(later_steps.get() + 1);
            n + 1
        });

    assert!(outcome.is_failure());
    assert_eq!(later_steps.get(), 0);
    assert_eq!(
        outcome.unwrap_error().unwrap(),
        "12x: invalid digit found in string"
    );
}

#[test]
fn test_pipeline_recovers_with_or_else() {
    let outcome = parse("oops")
        .or_else(|_| parse("40"))
        .map(|n| n + 2);

    assert_eq!(outcome, Outcome::Success(42));
}

#[test]
fn test_error_type_changes_through_map_error() {
    #[derive(Debug, PartialEq)]
    enum AppError {
        BadNumber(String),
    }

    let outcome: Outcome<i32, AppError> = parse("nope").map_error(AppError::BadNumber);
    assert_eq!(
        outcome,
        Outcome::Failure(AppError::BadNumber(
            "nope: invalid digit found in string".to_string()
        ))
    );
}

#[test]
fn test_unwrap_on_failure_is_mismatch() {
    let err = Outcome::<i32, i32>::failure(1).unwrap().unwrap_err();
    assert_eq!(
        err,
        OutcomeError::DiscriminantMismatch {
            found: Discriminant::Failure,
            message: None,
        }
    );
}

#[test]
fn test_expect_error_on_success_carries_message() {
    let err = Outcome::<i32, i32>::success(1)
        .expect_error("wanted a failure")
        .unwrap_err();
    assert!(err.is_mismatch());
    assert_eq!(err.message(), Some("wanted a failure"));
}

#[test]
fn test_absent_payload_is_distinct_error_kind() {
    let err = Outcome::<String, String>::try_success(None).unwrap_err();
    assert!(!err.is_mismatch());
    assert!(matches!(
        err,
        OutcomeError::InvalidArgument {
            slot: Discriminant::Success
        }
    ));
}

#[test]
fn test_question_mark_propagation() {
    fn first_even(values: &[Outcome<u32, String>]) -> fallible::Result<u32> {
        for value in values {
            let n = value.clone().expect("every entry must be parsed")?;
            if n % 2 == 0 {
                return Ok(n);
            }
        }
        Ok(0)
    }

    let good = vec![Outcome::success(3), Outcome::success(8)];
    assert_eq!(first_even(&good), Ok(8));

    let bad = vec![Outcome::success(3), Outcome::failure("x".to_string())];
    assert_eq!(
        first_even(&bad).unwrap_err().message(),
        Some("every entry must be parsed")
    );
}

#[test]
fn test_outcomes_in_hash_set() {
    let mut set = HashSet::new();
    set.insert(Outcome::<i32, i32>::success(1));
    set.insert(Outcome::<i32, i32>::failure(1));
    set.insert(Outcome::<i32, i32>::success(1));

    // Same payload collides on hash, but the variants stay distinct
    assert_eq!(set.len(), 2);
    assert!(set.contains(&Outcome::Success(1)));
    assert!(set.contains(&Outcome::Failure(1)));
}

#[test]
fn test_flatten_success_values() {
    let outcomes = vec![
        Outcome::<i32, &str>::success(1),
        Outcome::failure("skip"),
        Outcome::success(3),
    ];

    let total: i32 = outcomes.iter().flat_map(|o| o.iter()).sum();
    assert_eq!(total, 4);

    let owned: Vec<i32> = outcomes.into_iter().flatten().collect();
    assert_eq!(owned, vec![1, 3]);
}
