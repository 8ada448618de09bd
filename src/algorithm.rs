/*! Range algorithms.

Every function in this module takes its ranges as pairs of [`BitIter`] cursors
`[first, last)`, and processes them a word at a time rather than a bit at a
time. A range generally begins and ends partway through a word, so each
algorithm splits its range into at most three phases:

1. a leading partial word, from the range start up to the next word edge;
2. a run of whole, aligned words;
3. a trailing partial word, from the last word edge up to the range end.

A range that begins and ends inside the same word is a single partial word.
Partial words are always accessed through masks, so bits of a shared word that
lie outside the range are never observed by a fold and never modified by a
write.

Algorithms that read one range and write another (or compare two ranges) view
the second range through a [`WordAdapter`] in the word width of the first, so
the two ranges may use different word types and need not share an alignment.

# Preconditions

`first` must not be after `last`, and both must be cursors over the same
storage. Debug builds check both conditions. Destination ranges must be long
enough to hold the source range, and are bounds-checked by slice indexing.

[`BitIter`]: crate::iter::BitIter
[`WordAdapter`]: crate::adapter::WordAdapter
!*/

mod accumulate;
mod copy;
mod count;
mod domain;
mod equal;
mod fill;
mod transform;


pub use self::{
	accumulate::{
		accumulate,
		accumulate_backward,
		accumulate_backward_while,
		accumulate_while,
	},
	copy::{
		copy,
		move_bits,
	},
	count::{
		count,
		count_msb,
	},
	domain::{
		Domain,
		Unit,
		Units,
	},
	equal::equal,
	fill::fill,
	transform::{
		transform,
		transform_accumulate,
		transform_accumulate_backward,
		transform_binary,
	},
};

use crate::{
	iter::BitIter,
	store::BitStore,
};

/// Computes the bit length of a range, checking that it is well-formed.
#[inline]
pub(crate) fn range_len<T>(first: BitIter<T>, last: BitIter<T>) -> usize
where T: BitStore {
	let len = first.distance(last);
	debug_assert!(len >= 0, "range ends {} bits before it begins", -len);
	len.max(0) as usize
}
