//! Two's-complement conversions for arbitrary bit widths (1..=32).
//!
//! Every signed path of [`Data`](crate::Data) goes through these two
//! helpers: integers, and the mantissa and exponent fields of the packed
//! floats.

/// Reinterpret the low `bits` bits of `unsigned` as a two's-complement value.
///
/// If bit `bits - 1` is set the result is
/// `-(2^(bits-1) - (unsigned & (2^(bits-1) - 1)))`, otherwise `unsigned` is
/// returned unchanged.
pub fn to_signed(unsigned: i64, bits: u32) -> i64 {
    let sign = 1i64 << (bits - 1);
    if unsigned & sign != 0 {
        -(sign - (unsigned & (sign - 1)))
    } else {
        unsigned
    }
}

/// Map `signed` to its `bits`-wide two's-complement bit pattern.
///
/// Negative values become `2^(bits-1) + (signed & (2^(bits-1) - 1))`;
/// non-negative values are returned unchanged. Only the low `bits` bits of
/// the result are meaningful to the caller.
pub fn to_unsigned_bits(signed: i64, bits: u32) -> i64 {
    let sign = 1i64 << (bits - 1);
    if signed < 0 {
        sign + (signed & (sign - 1))
    } else {
        signed
    }
}
