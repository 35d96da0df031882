//! Unit tests for the OperatingContext finalization matrix.
//!
//! A context created by `on_some_do` defers its branch decision until it
//! is finalized with `or_on_nothing_do`. Finalizing runs exactly one of
//! the two callables; dropping an unfinalized context runs neither.

#![cfg(feature = "data")]

use maybars::data::{maybe, nothing, some};
use rstest::rstest;
use std::cell::Cell;

// =============================================================================
// Finalization Matrix
// =============================================================================

#[rstest]
fn some_context_runs_the_operation_with_the_value() {
    let operation_runs = Cell::new(0);
    let action_runs = Cell::new(0);

    some(Some("testData"))
        .on_some_do(|text| {
            assert_eq!(text, "testData");
            operation_runs.set(operation_runs.get() + 1);
        })
        .or_on_nothing_do(|| action_runs.set(action_runs.get() + 1));

    assert_eq!(operation_runs.get(), 1);
    assert_eq!(action_runs.get(), 0);
}

#[rstest]
fn nothing_context_runs_the_action() {
    let operation_runs = Cell::new(0);
    let action_runs = Cell::new(0);

    nothing::<&str>()
        .on_some_do(|_| operation_runs.set(operation_runs.get() + 1))
        .or_on_nothing_do(|| action_runs.set(action_runs.get() + 1));

    assert_eq!(operation_runs.get(), 0);
    assert_eq!(action_runs.get(), 1);
}

#[rstest]
fn context_from_a_normalized_absent_value_runs_the_action() {
    let action_runs = Cell::new(0);

    maybe(None::<i32>)
        .on_some_do(|_| {})
        .or_on_nothing_do(|| action_runs.set(action_runs.get() + 1));

    assert_eq!(action_runs.get(), 1);
}

// =============================================================================
// Deferral
// =============================================================================

#[rstest]
fn nothing_runs_before_finalization() {
    let operation_runs = Cell::new(0);

    let context = some(Some(42)).on_some_do(|_| operation_runs.set(operation_runs.get() + 1));
    assert_eq!(operation_runs.get(), 0);

    context.or_on_nothing_do(|| {});
    assert_eq!(operation_runs.get(), 1);
}

#[rstest]
fn dropping_an_unfinalized_context_runs_neither_callable() {
    let operation_runs = Cell::new(0);

    let context = some(Some(42)).on_some_do(|_| operation_runs.set(operation_runs.get() + 1));
    drop(context);

    assert_eq!(operation_runs.get(), 0);
}

// =============================================================================
// Ownership
// =============================================================================

#[rstest]
fn the_operation_takes_ownership_of_the_value() {
    let collected = Cell::new(String::new());

    some(Some(String::from("testData")))
        .on_some_do(|text| collected.set(text))
        .or_on_nothing_do(|| collected.set(String::from("fallback")));

    assert_eq!(collected.take(), "testData");
}

#[rstest]
fn independent_contexts_do_not_interfere() {
    let first_seen = Cell::new(0);
    let second_seen = Cell::new(0);

    let first = some(Some(1)).on_some_do(|value| first_seen.set(value));
    let second = nothing::<i32>().on_some_do(|value| second_seen.set(value));

    second.or_on_nothing_do(|| second_seen.set(-1));
    first.or_on_nothing_do(|| first_seen.set(-1));

    assert_eq!(first_seen.get(), 1);
    assert_eq!(second_seen.get(), -1);
}
