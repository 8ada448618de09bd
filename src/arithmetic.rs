/*! Scalar arithmetic over bit ranges.

These functions treat a range as an unsigned integer: the bit at `first` is the
least significant bit, and the range length is the integer's width. Each one
combines that integer with a single scalar word, writes the result to a
destination range of the same length, and returns what did not fit.

The scalar has the destination's word type, and the range is processed in
units of that width counted from the range start, as in
[`transform_accumulate`]. When the range length is not a multiple of the word
width, the most significant unit is partial; any bits that its result produces
above the range are folded into the returned carry, borrow, or overflow rather
than dropped.

Operands wider than one word are not supported.

[`transform_accumulate`]: crate::algorithm::transform_accumulate
!*/

use funty::Integral;

use crate::{
	algorithm::{
		transform_accumulate,
		transform_accumulate_backward,
	},
	carry,
	iter::BitIter,
	store::{
		BitAccess,
		BitStore,
	},
	word::{
		self,
		BitWord,
	},
};

/// Opens a trace span over an arithmetic operation.
macro_rules! span {
	($name:literal, $first:expr, $last:expr, $word:ty) => {
		#[cfg(feature = "tracing")]
		let _scope = tracing::trace_span!(
			$name,
			bits = $first.distance($last),
			word_bits = <$word as BitWord>::WIDTH,
		)
		.entered();
	};
}

/** Adds `scalar` to the integer in `[first, last)`, writing the sum to the
range beginning at `d_first`.

# Returns

The carry out of the most significant bit of the range.

# Examples

```rust
use core::cell::Cell;
use bitcursor::prelude::*;

let data = [Cell::new(0xFFu8), Cell::new(0x00)];
let (first, last) = BitIter::span(&data, 12);
assert!(!addition(first, last, first, 1));
assert_eq!([data[0].get(), data[1].get()], [0x00, 0x01]);
```
**/
pub fn addition<T, U>(
	first: BitIter<T>,
	last: BitIter<T>,
	d_first: BitIter<U>,
	scalar: U::Mem,
) -> bool
where
	T: BitStore,
	U: BitAccess,
{
	span!("addition", first, last, U::Mem);
	let (_, (addend, carry)) = transform_accumulate(
		first,
		last,
		d_first,
		(scalar, false),
		|(addend, carry), word| {
			let (sum, carry) = carry::add_with_carry(carry, word, addend);
			(sum, (U::Mem::ZERO, carry))
		},
		|(addend, carry), word, len| {
			let (sum, carry) = carry::add_with_carry(carry, word, addend);
			let over = word::lsr(sum, len as u32) != U::Mem::ZERO;
			(sum, (U::Mem::ZERO, carry | over))
		},
	);
	//  An empty range cannot hold any of the scalar.
	carry | (addend != U::Mem::ZERO)
}

/** Subtracts `scalar` from the integer in `[first, last)`, writing the
difference to the range beginning at `d_first`.

# Returns

The borrow into the most significant bit of the range. When it is set, the
destination holds the difference modulo two to the power of the range length.
**/
pub fn subtraction<T, U>(
	first: BitIter<T>,
	last: BitIter<T>,
	d_first: BitIter<U>,
	scalar: U::Mem,
) -> bool
where
	T: BitStore,
	U: BitAccess,
{
	span!("subtraction", first, last, U::Mem);
	let (_, (subtrahend, borrow)) = transform_accumulate(
		first,
		last,
		d_first,
		(scalar, false),
		|(subtrahend, borrow), word| {
			let (diff, borrow) = carry::sub_with_borrow(borrow, word, subtrahend);
			(diff, (U::Mem::ZERO, borrow))
		},
		|(subtrahend, borrow), word, len| {
			let (diff, borrow) = carry::sub_with_borrow(borrow, word, subtrahend);
			let under = word::lsr(diff, len as u32) != U::Mem::ZERO;
			(diff, (U::Mem::ZERO, borrow | under))
		},
	);
	borrow | (subtrahend != U::Mem::ZERO)
}

/** Multiplies the integer in `[first, last)` by `scalar`, writing the product
to the range beginning at `d_first`.

Each unit contributes the low word of its product plus the incoming carry word,
and passes the high word of its product (plus any carry from that addition) to
the next unit.

# Returns

The overflow: the bits of the full product above the range, as a word.
**/
pub fn multiplication<T, U>(
	first: BitIter<T>,
	last: BitIter<T>,
	d_first: BitIter<U>,
	scalar: U::Mem,
) -> U::Mem
where
	T: BitStore,
	U: BitAccess,
{
	span!("multiplication", first, last, U::Mem);
	let step = |carry: U::Mem, word: U::Mem| {
		let (lo, hi) = carry::mul_wide(word, scalar);
		let (lo, over) = carry::add_with_carry(false, lo, carry);
		(lo, if over { hi + U::Mem::LSB } else { hi })
	};
	let (_, overflow) = transform_accumulate(
		first,
		last,
		d_first,
		U::Mem::ZERO,
		step,
		|carry, word, len| {
			let (lo, hi) = step(carry, word);
			let shift = (<U::Mem as BitWord>::WIDTH - len) as u32;
			(lo, word::lsl(hi, shift) | word::lsr(lo, len as u32))
		},
	);
	overflow
}

/** Divides the integer in `[first, last)` by `scalar`, writing the quotient to
the range beginning at `d_first`.

This is schoolbook long division, one word-sized digit at a time, from the most
significant unit down.

# Returns

The remainder.

A zero divisor is not detected. Each step then reports the overflow value of
[`div_wide`], so the quotient and the remainder are all ones.

[`div_wide`]: crate::carry::div_wide
**/
pub fn division<T, U>(
	first: BitIter<T>,
	last: BitIter<T>,
	d_first: BitIter<U>,
	scalar: U::Mem,
) -> U::Mem
where
	T: BitStore,
	U: BitAccess,
{
	span!("division", first, last, U::Mem);
	let step = |rem: U::Mem, word: U::Mem| carry::div_wide(rem, word, scalar);
	let (_, rem) = transform_accumulate_backward(
		first,
		last,
		d_first,
		U::Mem::ZERO,
		step,
		|rem, word, _| step(rem, word),
	);
	rem
}
