//! Raising faults through `throw!` and `ensure!`.

use std::error::Error;
use std::fmt;

use conlog::{ensure, throw, Fault, WideString};

fn checked_div(a: i32, b: i32) -> Result<i32, Fault> {
    ensure!(b != 0, "division of ", a, " by zero");
    Ok(a / b)
}

const THROW_LINE: u32 = line!() + 3;

fn always_throws() -> Result<(), Fault> {
    throw!("state ", 3, " is unreachable");
}

fn bare_ensure(flag: bool) -> Result<(), Fault> {
    ensure!(flag);
    Ok(())
}

fn boxed(flag: bool) -> Result<(), Box<dyn Error + Send + Sync>> {
    ensure!(flag, "boxed failure");
    Ok(())
}

struct Broken;

impl conlog::Loggable for Broken {
    fn write_text(&self, _out: &mut String) -> fmt::Result {
        Err(fmt::Error)
    }
}

fn throws_broken() -> Result<(), Fault> {
    throw!("value: ", Broken);
}

#[test]
fn ensure_true_has_no_effect() {
    assert_eq!(checked_div(9, 3).unwrap(), 3);
    assert!(bare_ensure(true).is_ok());
}

#[test]
fn ensure_false_raises_message_with_location() {
    let err = checked_div(1, 0).unwrap_err();
    let payload = err.diagnostic().unwrap();
    assert!(payload.starts_with("faults: division of 1 by zero\n"), "{payload}");
    assert!(payload.contains(&format!("file: {}", file!())), "{payload}");
    assert!(payload.contains("line: "), "{payload}");
}

#[test]
fn ensure_without_message_uses_condition() {
    let err = bare_ensure(false).unwrap_err();
    assert!(err.to_string().contains("assertion failed: flag"));
}

#[test]
fn throw_reports_its_own_line() {
    let err = always_throws().unwrap_err();
    assert!(err.to_string().contains("state 3 is unreachable"));
    assert!(
        err.to_string().ends_with(&format!("line: {THROW_LINE}")),
        "{err}"
    );
}

#[test]
fn raised_fault_converts_into_callers_error_type() {
    let err = boxed(false).unwrap_err();
    assert!(err.to_string().contains("boxed failure"));
    assert!(boxed(true).is_ok());
}

#[test]
fn formatting_failure_surfaces_unchanged() {
    let err = throws_broken().unwrap_err();
    assert!(matches!(err, Fault::Format(_)));
}

#[test]
fn wide_message_is_narrowed_for_the_payload() {
    fn wide() -> Result<(), Fault> {
        throw!(WideString::from("ширина"));
    }
    assert!(wide().unwrap_err().to_string().contains("ширина"));
}
