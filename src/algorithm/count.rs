//! Population counts over a range.

use funty::Integral;

use super::accumulate::{
	accumulate,
	accumulate_backward_while,
};
use crate::{
	iter::BitIter,
	store::BitStore,
	word::{
		self,
		BitWord,
	},
};

/** Counts the bits in a range that are equal to `value`.

This counts the `1` bits a word at a time. The count of `0` bits is the range
length minus the count of `1` bits.
**/
pub fn count<T>(first: BitIter<T>, last: BitIter<T>, value: bool) -> usize
where T: BitStore {
	let ones = accumulate(
		first,
		last,
		0usize,
		|acc, word| acc + word.count_ones() as usize,
		|acc, word, _| acc + word.count_ones() as usize,
	);
	if value {
		ones
	}
	else {
		super::range_len(first, last) - ones
	}
}

/** Counts the run of bits equal to `value` at the most significant end of a
range.

The count starts at the bit just before `last` and proceeds towards `first`,
stopping at the first bit that differs from `value`. A whole word that matches
entirely continues the count; the first word that does not ends it, so the cost
is proportional to the number of words up to the first difference.
**/
pub fn count_msb<T>(first: BitIter<T>, last: BitIter<T>, value: bool) -> usize
where T: BitStore {
	//  Ones mark the bits that differ from `value`.
	let differ = |word: T::Mem| if value { !word } else { word };
	accumulate_backward_while(
		first,
		last,
		0usize,
		|acc, word| {
			let diff = differ(word);
			if diff == T::Mem::ZERO {
				(true, acc + <T::Mem as BitWord>::WIDTH as usize)
			}
			else {
				(false, acc + diff.leading_zeros() as usize)
			}
		},
		|acc, word, len| {
			let diff = differ(word) & word::low_mask::<T::Mem>(len);
			if diff == T::Mem::ZERO {
				(true, acc + len as usize)
			}
			else {
				let top = diff << (<T::Mem as BitWord>::WIDTH - len) as u32;
				(false, acc + top.leading_zeros() as usize)
			}
		},
	)
}
