//! Stimulus/expected-result pair.

use crate::pow;

/// One stimulus value together with the golden result the device under test
/// must produce for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestVector {
    /// Stimulus driven into the device under test.
    pub input: u64,
    /// Expected result, `input` raised to the configured exponent.
    pub expected: u64,
}

impl TestVector {
    /// Builds the pair for `input`, computing the expected result with the
    /// golden model.
    pub fn from_input(input: u64, exponent: u64) -> Self {
        Self { input, expected: pow(input, exponent) }
    }
}
