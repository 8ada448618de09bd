/*! Portable carry and double-width arithmetic.

These implementations use only single-width operations on the word type, and
are correct on every target. They serve as the reference the native path is
tested against, and as the selected path when the `portable` feature is on.
!*/

use crate::word::{
	lsr,
	BitWord,
};

/// Adds `a`, `b`, and a carry-in, detecting carry by wraparound.
#[inline]
pub fn add_with_carry<W>(carry: bool, a: W, b: W) -> (W, bool)
where W: BitWord {
	let sum = a.wrapping_add(b);
	let wrapped = sum < a;
	let out = sum.wrapping_add(carry_word(carry));
	(out, wrapped | (out < sum))
}

/// Subtracts `b` and a borrow-in from `a`, detecting borrow by wraparound.
#[inline]
pub fn sub_with_borrow<W>(borrow: bool, a: W, b: W) -> (W, bool)
where W: BitWord {
	let diff = a.wrapping_sub(b);
	let wrapped = a < b;
	let out = diff.wrapping_sub(carry_word(borrow));
	(out, wrapped | (diff < carry_word(borrow)))
}

/// Multiplies two words by splitting each into half-words.
///
/// The four partial products each fit in one word. The two cross terms are
/// summed with the carry out of the low product before being split across the
/// halves of the result.
pub fn mul_wide<W>(a: W, b: W) -> (W, W)
where W: BitWord {
	let half = (W::WIDTH / 2) as u32;
	let low = W::ALL >> half;

	let (a0, a1) = (a & low, a >> half);
	let (b0, b1) = (b & low, b >> half);

	let p00 = a0 * b0;
	let p01 = a0 * b1;
	let p10 = a1 * b0;
	let p11 = a1 * b1;

	//  At most three half-words, so this cannot overflow.
	let mid = (p00 >> half) + (p01 & low) + (p10 & low);
	let lo = (p00 & low) | (mid << half);
	let hi = p11 + (p01 >> half) + (p10 >> half) + (mid >> half);
	(lo, hi)
}

/// Divides `hi:lo` by `divisor` with two-digit long division in base
/// `2^(WIDTH / 2)`.
///
/// The divisor is normalized so that its top bit is set. Each quotient digit
/// is estimated from the top digit of the divisor; the estimate can exceed the
/// true digit by at most two, and the correction loop brings it down.
pub fn div_wide<W>(hi: W, lo: W, divisor: W) -> (W, W)
where W: BitWord {
	if hi >= divisor {
		return (W::ALL, W::ALL);
	}

	let half = (W::WIDTH / 2) as u32;
	let base = W::LSB << half;
	let low = W::ALL >> half;

	let shift = divisor.leading_zeros();
	let v = divisor << shift;
	let (vn1, vn0) = (v >> half, v & low);

	let un32 = (hi << shift) | lsr(lo, W::WIDTH as u32 - shift);
	let un10 = lo << shift;
	let (un1, un0) = (un10 >> half, un10 & low);

	let q1 = digit(un32, un1, vn1, vn0, base, half);
	let un21 = (un32 << half)
		.wrapping_add(un1)
		.wrapping_sub(q1.wrapping_mul(v));

	let q0 = digit(un21, un0, vn1, vn0, base, half);
	let rem = (un21 << half)
		.wrapping_add(un0)
		.wrapping_sub(q0.wrapping_mul(v));

	((q1 << half) | q0, rem >> shift)
}

/// Estimates one quotient digit of `num:next / (vn1:vn0)` and corrects it.
#[inline]
fn digit<W>(num: W, next: W, vn1: W, vn0: W, base: W, half: u32) -> W
where W: BitWord {
	let mut q = num / vn1;
	let mut rhat = num - q * vn1;
	while q >= base || q * vn0 > (rhat << half) + next {
		q = q - W::LSB;
		rhat = rhat + vn1;
		if rhat >= base {
			break;
		}
	}
	q
}

#[inline(always)]
fn carry_word<W>(bit: bool) -> W
where W: BitWord {
	if bit { W::LSB } else { W::ZERO }
}
