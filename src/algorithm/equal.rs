//! Comparison of two ranges.

use super::domain::Domain;
use crate::{
	adapter::AdaptedIter,
	iter::BitIter,
	store::BitStore,
	word::{
		self,
		BitWord,
	},
};

/** Tests whether `[first1, last1)` holds the same bits as the range of equal
length beginning at `first2`.

The comparison is done in the word width of the first range, reading the second
through an adapter. Boundary words of the first range are compared only under
the mask of their range bits. The comparison stops at the first word that
differs.
**/
pub fn equal<T, U>(
	first1: BitIter<T>,
	last1: BitIter<T>,
	first2: BitIter<U>,
) -> bool
where
	T: BitStore,
	U: BitStore,
{
	let mut other = first2.adapt::<T::Mem>();
	match Domain::new(first1, last1) {
		Domain::Enclave { word, head, len } => {
			word::bit_extract(word.load_value(), head.value(), len)
				== other.read_bits(len)
		},
		Domain::Region { head, body, tail } => {
			if let Some((word, head)) = head {
				let len = <T::Mem as BitWord>::WIDTH - head.value();
				let bits = word::lsr(word.load_value(), head.value() as u32);
				if bits != other.read_bits(len) {
					return false;
				}
				other = other.offset(len as isize);
			}
			match equal_words(body, other) {
				Some(next) => other = next,
				None => return false,
			}
			tail.map_or(true, |(word, len)| {
				let mask = word::low_mask::<T::Mem>(len);
				word.load_value() & mask == other.read_bits(len)
			})
		},
	}
}

/// Compares whole words, returning the advanced cursor if all are equal.
fn equal_words<'a, T, U>(
	body: &[T],
	mut other: AdaptedIter<'a, U, T::Mem>,
) -> Option<AdaptedIter<'a, U, T::Mem>>
where
	T: BitStore,
	U: BitStore,
{
	let width = <T::Mem as BitWord>::WIDTH as isize;
	if other.head().value() == 0 {
		let words = other.adapter();
		let base = other.word_index() as usize;
		let same = body
			.iter()
			.enumerate()
			.all(|(k, word)| word.load_value() == words.load(base + k));
		return if same {
			Some(other.offset(body.len() as isize * width))
		}
		else {
			None
		};
	}
	for word in body {
		if word.load_value() != other.read_word() {
			return None;
		}
		other = other.offset(width);
	}
	Some(other)
}
