/*! Carry, borrow, and double-width primitives.

The arithmetic algorithms thread a single carry or borrow bit between word-sized
steps, and need a word-by-word multiply and divide that produce or consume a
double-width intermediate. This module provides those four operations in two
independent implementations:

- [`native`] uses the target’s double-width integer types, and the carry-flag
  intrinsics on `x86_64`.
- [`portable`] uses only single-width arithmetic: wraparound detection for the
  carry chain, a half-width schoolbook multiply, and the two-digit case of
  Knuth’s Algorithm D for division.

The free functions at the root of this module select the native implementation
unless the `portable` feature is enabled. Both paths agree on every input,
including the overflowing division convention.

# Division Overflow

A quotient of `hi:lo / divisor` fits in one word only when `hi < divisor`. When
it does not, including when `divisor` is zero, `div_wide` reports `(ALL, ALL)`
rather than faulting. This mirrors unsigned wraparound; callers that need to
distinguish the case must check `hi < divisor` themselves.
!*/

use crate::word::BitWord;

pub mod native;
pub mod portable;

#[cfg(test)]
mod tests;

/// Adds `a`, `b`, and a carry-in, returning the sum word and the carry-out.
#[inline]
pub fn add_with_carry<W>(carry: bool, a: W, b: W) -> (W, bool)
where W: BitWord {
	#[cfg(not(feature = "portable"))]
	{
		native::add_with_carry(carry, a, b)
	}
	#[cfg(feature = "portable")]
	{
		portable::add_with_carry(carry, a, b)
	}
}

/// Subtracts `b` and a borrow-in from `a`, returning the difference word and
/// the borrow-out.
#[inline]
pub fn sub_with_borrow<W>(borrow: bool, a: W, b: W) -> (W, bool)
where W: BitWord {
	#[cfg(not(feature = "portable"))]
	{
		native::sub_with_borrow(borrow, a, b)
	}
	#[cfg(feature = "portable")]
	{
		portable::sub_with_borrow(borrow, a, b)
	}
}

/// Multiplies two words, returning the `(low, high)` halves of the product.
#[inline]
pub fn mul_wide<W>(a: W, b: W) -> (W, W)
where W: BitWord {
	#[cfg(not(feature = "portable"))]
	{
		native::mul_wide(a, b)
	}
	#[cfg(feature = "portable")]
	{
		portable::mul_wide(a, b)
	}
}

/// Divides the double-width numerator `hi:lo` by `divisor`, returning
/// `(quotient, remainder)`.
///
/// See the [module documentation](self) for the overflow convention.
#[inline]
pub fn div_wide<W>(hi: W, lo: W, divisor: W) -> (W, W)
where W: BitWord {
	#[cfg(not(feature = "portable"))]
	{
		native::div_wide(hi, lo, divisor)
	}
	#[cfg(feature = "portable")]
	{
		portable::div_wide(hi, lo, divisor)
	}
}
