//! Integration tests for the public API.
//!
//! These tests drive the data structures end-to-end through scripts,
//! checking the outputs the exercise descriptions list for each example.

use kata_core::api::{Error, ScriptKind, run_script};
use kata_core::prime::{Primality, is_prime};
use kata_core::script::{Output, ScriptError};
use kata_core::{ArrayError, DynArray, LinkedList};

fn json(kind: ScriptKind, source: &str) -> String {
    run_script(kind, source)
        .expect("script should run")
        .to_json(false)
        .expect("outputs should encode")
}

#[test]
fn test_array_example_one() {
    assert_eq!(
        json(ScriptKind::Array, r#"["Array", 1, "getSize", "getCapacity"]"#),
        "[null,0,1]"
    );
}

#[test]
fn test_array_example_two() {
    assert_eq!(
        json(
            ScriptKind::Array,
            r#"["Array", 1, "pushback", 1, "getCapacity", "pushback", 2, "getCapacity"]"#
        ),
        "[null,null,1,null,2]"
    );
}

#[test]
fn test_array_example_three() {
    let source = r#"["Array", 1, "getSize", "getCapacity", "pushback", 1, "getSize", "getCapacity", "pushback", 2, "getSize", "getCapacity", "get", 1, "set", 1, 3, "get", 1, "popback", "getSize", "getCapacity"]"#;
    assert_eq!(
        json(ScriptKind::Array, source),
        "[null,0,1,null,1,1,null,2,2,2,null,3,3,1,2]"
    );
}

#[test]
fn test_pretty_outputs() {
    let trace = run_script(ScriptKind::List, r#"["insertTail", 4, "getValues"]"#).unwrap();
    assert_eq!(
        trace.to_json(true).unwrap(),
        "[\n  null,\n  [\n    4\n  ]\n]"
    );
}

#[test]
fn test_list_outputs() {
    let trace = run_script(
        ScriptKind::List,
        r#"["insertHead", 1, "insertTail", 2, "insertHead", 0, "remove", 1, "getValues"]"#,
    )
    .unwrap();
    assert_eq!(
        trace.outputs(),
        vec![
            &Output::Null,
            &Output::Null,
            &Output::Null,
            &Output::Bool(true),
            &Output::List(vec![0, 2]),
        ]
    );
}

#[test]
fn test_array_errors_are_step_errors() {
    let err = run_script(ScriptKind::Array, r#"["Array", 2, "set", 0, 1]"#).unwrap_err();
    match err {
        Error::Script {
            error: ScriptError::Step { step, source, .. },
            ..
        } => {
            assert_eq!(step, 2);
            assert!(matches!(source, ArrayError::PreconditionViolation(_)));
        }
        other => panic!("expected a step error, got {other:?}"),
    }
}

#[test]
fn test_invalid_json() {
    let err = run_script(ScriptKind::List, r#"["getValues""#).unwrap_err();
    assert!(matches!(
        err,
        Error::Script {
            error: ScriptError::Json { .. },
            ..
        }
    ));
}

#[test]
fn test_direct_data_structure_use() {
    let mut array = DynArray::new(2).unwrap();
    let mut list = LinkedList::new();
    for i in 0..5 {
        array.push_back(i).unwrap();
        list.insert_head(i);
    }
    assert_eq!(array.capacity(), 8);
    assert_eq!(array.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
    assert_eq!(list.values(), vec![4, 3, 2, 1, 0]);
}

#[test]
fn test_primality() {
    assert!(is_prime(2));
    assert!(is_prime(97));
    assert!(!is_prime(1));
    assert_eq!(Primality::of(7).to_string(), "7 is a prime number");
}
