//! Compile-fail tests for the reduction protocol.
//!
//! These tests verify that a value without a reducible conversion, and a
//! monoid reduce over elements of another type, are rejected at compile
//! time.
//!
//! Note: trybuild tests use #[test] as an exception because
//! trybuild's standard usage pattern requires it.

#[test]
fn reducible_compile_fail_tests() {
    let test_cases = trybuild::TestCases::new();
    test_cases.compile_fail("tests/compile_fail/not_reducible.rs");
    #[cfg(feature = "typeclass")]
    test_cases.compile_fail("tests/compile_fail/monoid_mismatch.rs");
}
