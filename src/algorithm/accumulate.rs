//! Directional folds over the words of a range.

use super::domain::{
	Domain,
	Unit,
};
use crate::{
	iter::BitIter,
	store::BitStore,
	word::BitWord,
};

/** Folds a range from its least significant word to its most significant.

Each whole word of the range is passed to `word_op`. Each boundary word is
passed to `subword_op` along with its count of range bits; its range bits are
right-aligned, so the first bit of the range is always bit `0` of the first
value, and its other bits are cleared.

# Parameters

- `first`, `last`: The range to fold.
- `init`: The initial accumulator.
- `word_op`: Combines the accumulator with a whole word.
- `subword_op`: Combines the accumulator with a partial word and its length.

# Returns

The final accumulator.
**/
pub fn accumulate<T, A, F, G>(
	first: BitIter<T>,
	last: BitIter<T>,
	init: A,
	mut word_op: F,
	mut subword_op: G,
) -> A
where
	T: BitStore,
	F: FnMut(A, T::Mem) -> A,
	G: FnMut(A, T::Mem, u8) -> A,
{
	Domain::new(first, last).units().fold(init, |acc, unit| match unit {
		Unit::Whole(word) => word_op(acc, word),
		Unit::Part(word, len) => subword_op(acc, word, len),
	})
}

/// Folds a range from its most significant word to its least significant.
///
/// The operators receive the same values as in [`accumulate`], in reverse
/// order.
pub fn accumulate_backward<T, A, F, G>(
	first: BitIter<T>,
	last: BitIter<T>,
	init: A,
	mut word_op: F,
	mut subword_op: G,
) -> A
where
	T: BitStore,
	F: FnMut(A, T::Mem) -> A,
	G: FnMut(A, T::Mem, u8) -> A,
{
	Domain::new(first, last).units().rev().fold(init, |acc, unit| match unit {
		Unit::Whole(word) => word_op(acc, word),
		Unit::Part(word, len) => subword_op(acc, word, len),
	})
}

/** Folds a range forward until an operator asks to stop.

Both operators return `(continue, accumulator)`. When `continue` is `false`,
the fold ends immediately with that accumulator, and the remaining words of the
range are never loaded.
**/
pub fn accumulate_while<T, A, F, G>(
	first: BitIter<T>,
	last: BitIter<T>,
	init: A,
	word_op: F,
	subword_op: G,
) -> A
where
	T: BitStore,
	F: FnMut(A, T::Mem) -> (bool, A),
	G: FnMut(A, T::Mem, u8) -> (bool, A),
{
	fold_while(Domain::new(first, last).units(), init, word_op, subword_op)
}

/// Folds a range backward until an operator asks to stop.
///
/// This is the mechanism behind [`count_msb`](super::count_msb): it visits the
/// most significant word first, and can stop at the first word that differs.
pub fn accumulate_backward_while<T, A, F, G>(
	first: BitIter<T>,
	last: BitIter<T>,
	init: A,
	word_op: F,
	subword_op: G,
) -> A
where
	T: BitStore,
	F: FnMut(A, T::Mem) -> (bool, A),
	G: FnMut(A, T::Mem, u8) -> (bool, A),
{
	fold_while(Domain::new(first, last).units().rev(), init, word_op, subword_op)
}

fn fold_while<I, W, A, F, G>(
	units: I,
	mut acc: A,
	mut word_op: F,
	mut subword_op: G,
) -> A
where
	I: Iterator<Item = Unit<W>>,
	W: BitWord,
	F: FnMut(A, W) -> (bool, A),
	G: FnMut(A, W, u8) -> (bool, A),
{
	for unit in units {
		let (more, next) = match unit {
			Unit::Whole(word) => word_op(acc, word),
			Unit::Part(word, len) => subword_op(acc, word, len),
		};
		acc = next;
		if !more {
			break;
		}
	}
	acc
}
