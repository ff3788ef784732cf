//! Golden model for the exponentiation datapath.

/// Computes `base^exponent` over `u64` by recursive squaring.
///
/// Semantics follow the hardware convention: `pow(x, 0) == 1` for every `x`,
/// zero included, and `pow(x, 1) == x`. For larger exponents the exponent is
/// halved at each level, squaring the half result and multiplying in one
/// extra `base` when the exponent is odd. The resulting multiplication chain
/// is the same squaring ladder the datapath implements, so the reference can
/// be audited against it multiplier by multiplier.
///
/// Callers keep `base` within [`domain_max`](crate::domain_max) for their
/// exponent; inside that bound no intermediate product wraps. The routine
/// performs no overflow checking of its own.
pub fn pow(base: u64, exponent: u64) -> u64 {
    match exponent {
        0 => 1,
        1 => base,
        _ => {
            let half = pow(base, exponent / 2);
            if exponent % 2 == 0 {
                half * half
            } else {
                half * half * base
            }
        }
    }
}
