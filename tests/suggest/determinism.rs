//! Same inputs, same month, same output.

use super::common::{fixed_clock, repeated_subject_history, repeated_subject_trending};
use newsglide::{build_suggestions_at, SuggestionBuilder};

#[test]
fn repeated_runs_are_identical() {
    let explore = ["Deep sea mining", "Mars rovers"];
    let first = build_suggestions_at(
        &repeated_subject_history(),
        &explore,
        &repeated_subject_trending(),
        4,
        &fixed_clock(),
    );

    for run in 0..10 {
        let again = build_suggestions_at(
            &repeated_subject_history(),
            &explore,
            &repeated_subject_trending(),
            4,
            &fixed_clock(),
        );
        assert_eq!(again, first, "Run {} differs", run);
    }
}

#[test]
fn serialized_output_is_byte_identical() {
    let builder = SuggestionBuilder::new().with_clock(fixed_clock());
    let a = builder.build(&repeated_subject_history(), &["Mars rovers"], &repeated_subject_trending());
    let b = builder.build(&repeated_subject_history(), &["Mars rovers"], &repeated_subject_trending());
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}

#[test]
fn builder_and_free_function_agree() {
    let builder = SuggestionBuilder::new().with_clock(fixed_clock());
    let via_builder = builder.build_with_limit(
        &repeated_subject_history(),
        &["Mars rovers"],
        &repeated_subject_trending(),
        3,
    );
    let via_fn = build_suggestions_at(
        &repeated_subject_history(),
        &["Mars rovers"],
        &repeated_subject_trending(),
        3,
        &fixed_clock(),
    );
    assert_eq!(via_builder, via_fn);
}

#[test]
fn serialized_source_is_lowercase() {
    let builder = SuggestionBuilder::new().with_clock(fixed_clock());
    let suggestions = builder.build(&["Volcanoes"], &[] as &[&str], &[] as &[&str]);
    let json = serde_json::to_value(&suggestions[0]).unwrap();
    assert_eq!(json["source"], "search");
}
