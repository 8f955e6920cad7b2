//! Integration tests for the `demo` and `completions` commands.

mod common;

use common::{check_stdout, kata};
use expect_test::expect;
use predicates::prelude::*;

#[test]
fn demo_array() {
    check_stdout(
        &["demo", "array"],
        None,
        expect![[r#"
            # dynamic array
            Array(1) -> null
            getSize -> 0
            getCapacity -> 1
            pushback(1) -> null
            getSize -> 1
            getCapacity -> 1
            pushback(2) -> null
            getSize -> 2
            getCapacity -> 2
            get(1) -> 2
            set(1, 3) -> null
            get(1) -> 3
            popback -> 3
            getSize -> 1
            getCapacity -> 2
        "#]],
    );
}

#[test]
fn demo_list() {
    check_stdout(
        &["demo", "list"],
        None,
        expect![[r#"
            # linked list
            LinkedList -> null
            insertHead(1) -> null
            insertTail(2) -> null
            insertTail(3) -> null
            getValues -> [1, 2, 3]
            remove(0) -> true
            getValues -> [2, 3]
            remove(1) -> true
            getValues -> [2]
        "#]],
    );
}

#[test]
fn demo_defaults_to_all() {
    kata()
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("# dynamic array"))
        .stdout(predicate::str::contains("# linked list"));
}

#[test]
fn completions_bash() {
    kata()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("_kata"));
}
