//! Copying one range into another.

use super::domain::Domain;
use crate::{
	adapter::AdaptedIter,
	iter::BitIter,
	store::{
		self,
		BitAccess,
		BitStore,
	},
	word::BitWord,
};

/** Copies the bits of `[first, last)` into the range beginning at `d_first`.

The destination is processed in its own word width, with the source read
through an adapter in that width. A partial destination word at either end is
written with a masked blend, so its bits outside the destination range keep
their values. Whole destination words are written with plain stores: when the
source is aligned to them, each is a single load, and otherwise each is
assembled from two shifted loads.

The ranges may share storage when the destination begins at or before the
source.

# Returns

A cursor one past the last bit written. Exactly `last - first` bits are
written.
**/
pub fn copy<'b, T, U>(
	first: BitIter<T>,
	last: BitIter<T>,
	d_first: BitIter<'b, U>,
) -> BitIter<'b, U>
where
	T: BitStore,
	U: BitAccess,
{
	let len = super::range_len(first, last);
	let d_last = d_first + len as isize;
	let mut src = first.adapt::<U::Mem>();

	match Domain::new(d_first, d_last) {
		Domain::Enclave { word, head, len } => {
			store::write_field(word, head.value(), len, src.read_bits(len));
		},
		Domain::Region { head, body, tail } => {
			if let Some((word, head)) = head {
				let len = <U::Mem as BitWord>::WIDTH - head.value();
				store::write_field(word, head.value(), len, src.read_bits(len));
				src = src.offset(len as isize);
			}
			src = copy_words(src, body);
			if let Some((word, len)) = tail {
				store::write_field(word, 0, len, src.read_bits(len));
			}
		},
	}
	d_last
}

/// Moves the bits of `[first, last)` into the range beginning at `d_first`.
///
/// Words are plain values, so moving them is copying them; this behaves
/// exactly as [`copy`] does.
#[inline]
pub fn move_bits<'b, T, U>(
	first: BitIter<T>,
	last: BitIter<T>,
	d_first: BitIter<'b, U>,
) -> BitIter<'b, U>
where
	T: BitStore,
	U: BitAccess,
{
	copy(first, last, d_first)
}

/// Fills whole destination words from the source, returning the source cursor
/// advanced past them.
fn copy_words<'a, T, U>(
	mut src: AdaptedIter<'a, T, U::Mem>,
	body: &[U],
) -> AdaptedIter<'a, T, U::Mem>
where
	T: BitStore,
	U: BitAccess,
{
	let width = <U::Mem as BitWord>::WIDTH as isize;
	if src.head().value() == 0 {
		let words = src.adapter();
		let base = src.word_index() as usize;
		for (k, dst) in body.iter().enumerate() {
			dst.store_value(words.load(base + k));
		}
		return src.offset(body.len() as isize * width);
	}
	for dst in body {
		dst.store_value(src.read_word());
		src = src.offset(width);
	}
	src
}
