//! Unit tests for the Maybe<V> container.
//!
//! Maybe represents an optional value with validated construction:
//! - `Some(V)`: Contains a present value
//! - `Nothing`: Contains no value
//!
//! The recovery operations are deliberately asymmetric: a present value
//! wins before any recovery argument is inspected, while an absent one
//! validates the argument it is about to use.

#![cfg(feature = "data")]

use maybars::data::{maybe, nothing, some, Maybe};
use maybars::error::EvaluatingError;
use maybars::function::transform;
use rstest::rstest;
use std::cell::Cell;
use std::panic::catch_unwind;

#[derive(Debug, PartialEq)]
struct NoSuchValue(&'static str);

fn invalid_argument(failure: Box<dyn std::any::Any + Send>) -> &'static str {
    failure
        .downcast::<EvaluatingError>()
        .expect("panic payload must be an EvaluatingError")
        .message
}

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn some_wraps_a_present_value() {
    let wrapped = some(Some("testData"));
    assert_eq!(wrapped, Maybe::Some("testData"));
}

#[rstest]
fn some_rejects_an_absent_value() {
    let failure = catch_unwind(|| some(None::<&str>)).unwrap_err();
    assert_eq!(invalid_argument(failure), "value must be present");
}

#[rstest]
fn maybe_accepts_either_presence() {
    assert_eq!(maybe(Some("testData")), Maybe::Some("testData"));
    assert_eq!(maybe(None::<&str>), Maybe::Nothing);
}

#[rstest]
fn nothing_is_always_absent() {
    let absent: Maybe<String> = nothing();
    assert!(absent.is_nothing());
}

// =============================================================================
// Type Checking
// =============================================================================

#[rstest]
fn presence_checks_are_mutually_exclusive() {
    let present = some(Some(42));
    assert!(present.is_some());
    assert!(!present.is_nothing());

    let absent: Maybe<i32> = nothing();
    assert!(absent.is_nothing());
    assert!(!absent.is_some());
}

// =============================================================================
// Map
// =============================================================================

#[rstest]
fn map_transforms_a_present_value() {
    let length = some(Some("testData")).map(|text| Some(text.len()));
    assert_eq!(length, Maybe::Some(8));
}

#[rstest]
fn map_chains_through_successive_transforms() {
    let last_five = some(Some("testData"))
        .map(|text| Some(text.len()))
        .map(|length| Some(length - 3))
        .map(|tail| Some(format!("last {} chars", tail)));
    assert_eq!(last_five, Maybe::Some(String::from("last 5 chars")));
}

#[rstest]
fn map_extracts_a_suffix() {
    let tail = some(Some("testData")).map(|text| Some(&text[text.len() - 5..]));
    assert_eq!(tail, Maybe::Some("tData"));
}

#[rstest]
fn map_collapses_a_refused_output() {
    let refused = some(Some("testData")).map(|_| None::<usize>);
    assert_eq!(refused, Maybe::Nothing);
}

#[rstest]
fn map_keeps_nothing_absent_without_running_the_transform() {
    let invoked = Cell::new(0);
    let still_absent = nothing::<&str>().map(|text| {
        invoked.set(invoked.get() + 1);
        Some(text.len())
    });
    assert_eq!(still_absent, Maybe::Nothing);
    assert_eq!(invoked.get(), 0);
}

// =============================================================================
// Fmap
// =============================================================================

#[rstest]
fn fmap_adopts_the_transform_presence() {
    let parse = |text: &str| match text.parse::<u32>() {
        Ok(value) => Maybe::Some(value),
        Err(_) => Maybe::Nothing,
    };

    assert_eq!(some(Some("8")).fmap(parse), Maybe::Some(8));
    assert_eq!(some(Some("broken")).fmap(parse), Maybe::Nothing);
}

#[rstest]
fn fmap_keeps_nothing_absent_without_running_the_transform() {
    let invoked = Cell::new(0);
    let still_absent = nothing::<u32>().fmap(|value| {
        invoked.set(invoked.get() + 1);
        Maybe::Some(value)
    });
    assert_eq!(still_absent, Maybe::Nothing);
    assert_eq!(invoked.get(), 0);
}

// =============================================================================
// Filter
// =============================================================================

#[rstest]
fn filter_keeps_a_value_satisfying_the_predicate() {
    let kept = some(Some("testData")).filter(|text| text.starts_with("test"));
    assert_eq!(kept, Maybe::Some("testData"));
}

#[rstest]
fn filter_drops_a_value_failing_the_predicate() {
    let dropped = some(Some("otherData")).filter(|text| text.starts_with("test"));
    assert_eq!(dropped, Maybe::Nothing);
}

#[rstest]
fn filter_keeps_an_empty_payload_satisfying_the_predicate() {
    let kept = some(Some(String::new())).filter(String::is_empty);
    assert_eq!(kept, Maybe::Some(String::new()));
}

#[rstest]
fn filter_composes_as_conjunction() {
    let kept = some(Some(42))
        .filter(|value| *value > 40)
        .filter(|value| *value < 50);
    assert_eq!(kept, Maybe::Some(42));

    let dropped = some(Some(42))
        .filter(|value| *value > 40)
        .filter(|value| *value < 40);
    assert_eq!(dropped, Maybe::Nothing);
}

// =============================================================================
// Get
// =============================================================================

#[rstest]
fn get_returns_the_present_value() {
    assert_eq!(some(Some("testData")).get(), "testData");
}

#[rstest]
#[should_panic(expected = "called `Maybe::get()` on a `Nothing` value")]
fn get_panics_on_nothing() {
    let _ = nothing::<String>().get();
}

// =============================================================================
// OrDefault
// =============================================================================

#[rstest]
fn or_default_prefers_the_present_value() {
    assert_eq!(some(Some("testData")).or_default(Some("fallback")), "testData");
}

#[rstest]
fn or_default_never_inspects_the_default_on_some() {
    assert_eq!(some(Some("testData")).or_default(None), "testData");
}

#[rstest]
fn or_default_yields_the_default_on_nothing() {
    assert_eq!(nothing::<&str>().or_default(Some("fallback")), "fallback");
}

#[rstest]
fn or_default_rejects_an_absent_default_on_nothing() {
    let failure = catch_unwind(|| nothing::<&str>().or_default(None)).unwrap_err();
    assert_eq!(invalid_argument(failure), "value must be present");
}

// =============================================================================
// OrThrow
// =============================================================================

#[rstest]
fn or_throw_prefers_the_present_value() {
    let value = some(Some(42)).or_throw(Some(|| NoSuchValue("unreachable")));
    assert_eq!(value, 42);
}

#[rstest]
fn or_throw_never_inspects_the_generator_on_some() {
    let absent_generator: Option<fn() -> NoSuchValue> = None;
    assert_eq!(some(Some(42)).or_throw(absent_generator), 42);
}

#[rstest]
fn or_throw_raises_the_generated_payload_on_nothing() {
    let failure =
        catch_unwind(|| nothing::<i32>().or_throw(Some(|| NoSuchValue("no value present"))))
            .unwrap_err();
    let payload = failure
        .downcast::<NoSuchValue>()
        .expect("panic payload must be the generated one");
    assert_eq!(*payload, NoSuchValue("no value present"));
}

#[rstest]
fn or_throw_rejects_an_absent_generator_on_nothing() {
    let absent_generator: Option<fn() -> NoSuchValue> = None;
    let failure = catch_unwind(|| nothing::<i32>().or_throw(absent_generator)).unwrap_err();
    assert_eq!(invalid_argument(failure), "producer must be present");
}

// =============================================================================
// WhenSome
// =============================================================================

#[rstest]
fn when_some_hands_the_value_to_the_operation() {
    let seen = Cell::new(0);
    some(Some(42)).when_some(|value| seen.set(value));
    assert_eq!(seen.get(), 42);
}

#[rstest]
fn when_some_does_nothing_on_nothing() {
    let invoked = Cell::new(0);
    nothing::<i32>().when_some(|_| invoked.set(invoked.get() + 1));
    assert_eq!(invoked.get(), 0);
}

// =============================================================================
// Conversions
// =============================================================================

#[rstest]
fn option_converts_into_maybe_and_back() {
    let present: Maybe<i32> = Some(42).into();
    assert_eq!(present, Maybe::Some(42));
    assert_eq!(Option::from(present), Some(42));

    let absent: Maybe<i32> = None.into();
    assert_eq!(absent, Maybe::Nothing);
    assert_eq!(Option::<i32>::from(absent), None);
}

// =============================================================================
// Combined Pipelines
// =============================================================================

#[rstest]
fn pipeline_keeps_a_qualifying_value() {
    let outcome = some(Some("testData"))
        .map(|text| Some(text.len()))
        .filter(|length| *length > 5)
        .or_default(Some(0));
    assert_eq!(outcome, 8);
}

#[rstest]
fn pipeline_recovers_after_a_dropped_value() {
    let outcome = some(Some("id"))
        .map(|text| Some(text.len()))
        .filter(|length| *length > 5)
        .or_default(Some(0));
    assert_eq!(outcome, 0);
}

#[rstest]
fn pipeline_carries_a_normalized_transform() {
    let mut parse = transform(Some(|text: &str| text.parse::<u32>()));
    let outcome = some(Some("8")).map(|text| Some(parse(text)));
    assert_eq!(outcome, Maybe::Some(8));
}

#[rstest]
fn pipeline_surfaces_absence_through_or_throw() {
    let failure = catch_unwind(|| {
        maybe(None::<&str>)
            .map(|text| Some(text.len()))
            .or_throw(Some(|| NoSuchValue("nothing to measure")))
    })
    .unwrap_err();
    let payload = failure
        .downcast::<NoSuchValue>()
        .expect("panic payload must be the generated one");
    assert_eq!(*payload, NoSuchValue("nothing to measure"));
}
