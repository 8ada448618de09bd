//! Setting every bit of a range.

use super::domain::Domain;
use crate::{
	index::{
		BitIdx,
		BitMask,
	},
	iter::BitIter,
	store::BitAccess,
	word::BitWord,
};

/** Sets every bit in `[first, last)` to `value`.

Whole words are replaced outright. Boundary words are modified only under the
mask of their range bits.
**/
pub fn fill<T>(first: BitIter<T>, last: BitIter<T>, value: bool)
where T: BitAccess {
	let write = |word: &T, mask: BitMask<T::Mem>| {
		if value {
			word.set_bits(mask.value());
		}
		else {
			word.clear_bits(mask.value());
		}
	};
	match Domain::new(first, last) {
		Domain::Enclave { word, head, len } => {
			write(word, BitMask::span(head, len));
		},
		Domain::Region { head, body, tail } => {
			if let Some((word, head)) = head {
				let len = <T::Mem as BitWord>::WIDTH - head.value();
				write(word, BitMask::span(head, len));
			}
			let fill = if value {
				<T::Mem as BitWord>::ALL
			}
			else {
				<T::Mem as funty::Integral>::ZERO
			};
			for word in body {
				word.store_value(fill);
			}
			if let Some((word, len)) = tail {
				write(word, BitMask::span(BitIdx::ZERO, len));
			}
		},
	}
}
