//! Input-domain bound derivation.
//!
//! The device under test raises its input to a fixed exponent and presents the
//! result on a fixed-width unsigned bus. Stimulus must stay within the largest
//! domain whose powers never wrap that bus. The bound is derived from the
//! exponent and the bus width rather than hard-coded, so changing either one
//! recomputes a correct bound.

/// Exponent implemented by the device under test datapath.
pub const EXPONENT: u64 = 8;

/// Width in bits of the device under test result bus.
pub const OUTPUT_WIDTH_BITS: u32 = 64;

/// Largest admissible stimulus value for the default exponent and bus width.
///
/// Evaluates to 255 for the 8th power on a 64-bit bus.
pub const DOMAIN_MAX: u64 = domain_max(EXPONENT, OUTPUT_WIDTH_BITS);

/// Returns the largest base whose `exponent`-th power fits in `width_bits`
/// unsigned bits, i.e. floor((2^width_bits - 1)^(1/exponent)).
///
/// An exponent of zero maps every base to 1, so the whole `u64` range is
/// admissible. `width_bits` must be in `1..=64`.
pub const fn domain_max(exponent: u64, width_bits: u32) -> u64 {
    assert!(width_bits >= 1 && width_bits <= 64);

    let limit: u128 =
        if width_bits == 64 { u64::MAX as u128 } else { (1u128 << width_bits) - 1 };

    if exponent == 0 {
        return u64::MAX;
    }
    if exponent == 1 {
        return limit as u64;
    }

    // For exponent >= 2 on a bus of at most 64 bits the bound cannot exceed
    // 2^32, which keeps the midpoint arithmetic below exact.
    let mut lo: u64 = 0;
    let mut hi: u64 = 1 << 32;
    while lo < hi {
        let mid = lo + (hi - lo + 1) / 2;
        if power_fits(mid, exponent, limit) {
            lo = mid;
        } else {
            hi = mid - 1;
        }
    }
    lo
}

/// True when `base^exponent` does not exceed `limit`.
const fn power_fits(base: u64, exponent: u64, limit: u128) -> bool {
    // Bases 0 and 1 are fixed points of repeated multiplication.
    if base <= 1 {
        return true;
    }

    let mut acc: u128 = 1;
    let mut remaining = exponent;
    while remaining > 0 {
        acc = match acc.checked_mul(base as u128) {
            Some(product) => product,
            None => return false,
        };
        if acc > limit {
            return false;
        }
        remaining -= 1;
    }
    true
}
