//! Decomposition of a bit range into its boundary and interior words.

use core::{
	fmt::{
		self,
		Debug,
		Formatter,
	},
	iter::FusedIterator,
	slice,
};

use crate::{
	index::BitIdx,
	iter::BitIter,
	store::BitStore,
	word::{
		self,
		BitWord,
	},
};

/** The words touched by a bit range.

# Lifetimes

- `'a`: The lifetime of the storage containing the range.

# Type Parameters

- `T`: The word store of the range.
**/
pub enum Domain<'a, T>
where T: BitStore
{
	/// The range lies inside one word and reaches neither of its edges, or
	/// reaches only one of them.
	Enclave {
		/// The word containing the range.
		word: &'a T,
		/// The index of the first bit of the range.
		head: BitIdx<T::Mem>,
		/// The number of bits in the range. This is less than the word width.
		len: u8,
	},
	/// The range reaches at least one word edge inside it, and so has a
	/// possibly empty run of whole words.
	Region {
		/// The leading partial word, and the index of the first range bit in
		/// it.
		head: Option<(&'a T, BitIdx<T::Mem>)>,
		/// The whole words of the range.
		body: &'a [T],
		/// The trailing partial word, and the number of range bits in it.
		tail: Option<(&'a T, u8)>,
	},
}

impl<'a, T> Domain<'a, T>
where T: BitStore
{
	/// Splits the range `[first, last)` into its words.
	///
	/// # Panics
	///
	/// This panics if the range reaches outside its storage.
	pub fn new(first: BitIter<'a, T>, last: BitIter<'a, T>) -> Self {
		let len = super::range_len(first, last);
		let words = first.words();
		if len == 0 {
			return Self::Region {
				head: None,
				body: &[],
				tail: None,
			};
		}

		let start = first.word_index() as usize;
		let head = first.head();
		let (elts, tail) = head.span(len);
		if elts == 1 && len < <T::Mem as BitWord>::WIDTH as usize {
			return Self::Enclave {
				word: &words[start],
				head,
				len: len as u8,
			};
		}

		let end = start + elts;
		let mut body = &words[start .. end];
		let mut head_part = None;
		if head.value() != 0 {
			if let Some((first, rest)) = body.split_first() {
				head_part = Some((first, head));
				body = rest;
			}
		}
		let mut tail_part = None;
		if tail.value() != 0 {
			if let Some((last, rest)) = body.split_last() {
				tail_part = Some((last, tail.value()));
				body = rest;
			}
		}
		Self::Region {
			head: head_part,
			body,
			tail: tail_part,
		}
	}

	/// Produces the loaded values of the range, one word at a time, from the
	/// least significant end.
	pub fn units(&self) -> Units<'a, T> {
		match *self {
			Self::Enclave { word, head, len } => Units {
				head: Some(Unit::Part(
					word::bit_extract(word.load_value(), head.value(), len),
					len,
				)),
				body: <&'a [T]>::default().iter(),
				tail: None,
			},
			Self::Region { head, body, tail } => Units {
				head: head.map(|(word, head)| {
					let len = <T::Mem as BitWord>::WIDTH - head.value();
					Unit::Part(word::lsr(word.load_value(), head.value() as u32), len)
				}),
				body: body.iter(),
				tail: tail.map(|(word, len)| {
					let mask = word::low_mask::<T::Mem>(len);
					Unit::Part(word.load_value() & mask, len)
				}),
			},
		}
	}
}

impl<T> Clone for Domain<'_, T>
where T: BitStore
{
	#[inline]
	fn clone(&self) -> Self {
		*self
	}
}

impl<T> Copy for Domain<'_, T> where T: BitStore {}

impl<T> Debug for Domain<'_, T>
where T: BitStore
{
	fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
		match *self {
			Self::Enclave { head, len, .. } => fmt
				.debug_struct("Enclave")
				.field("head", &head)
				.field("len", &len)
				.finish(),
			Self::Region { head, body, tail } => fmt
				.debug_struct("Region")
				.field("head", &head.map(|(_, idx)| idx))
				.field("body", &body.len())
				.field("tail", &tail.map(|(_, len)| len))
				.finish(),
		}
	}
}

/// One word of a range, loaded into a register.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Unit<W>
where W: BitWord
{
	/// A word wholly inside the range.
	Whole(W),
	/// A boundary word: its range bits right-aligned, with all other bits
	/// cleared, and the count of range bits.
	Part(W, u8),
}

impl<W> Unit<W>
where W: BitWord
{
	/// Counts the range bits in the unit.
	#[inline]
	pub fn len(self) -> u8 {
		match self {
			Self::Whole(_) => W::WIDTH,
			Self::Part(_, len) => len,
		}
	}

	/// Views the loaded value.
	#[inline]
	pub fn value(self) -> W {
		match self {
			Self::Whole(word) | Self::Part(word, _) => word,
		}
	}
}

/// Iterator over the [`Unit`]s of a [`Domain`].
pub struct Units<'a, T>
where T: BitStore
{
	head: Option<Unit<T::Mem>>,
	body: slice::Iter<'a, T>,
	tail: Option<Unit<T::Mem>>,
}

impl<T> Iterator for Units<'_, T>
where T: BitStore
{
	type Item = Unit<T::Mem>;

	#[inline]
	fn next(&mut self) -> Option<Self::Item> {
		self.head
			.take()
			.or_else(|| self.body.next().map(|w| Unit::Whole(w.load_value())))
			.or_else(|| self.tail.take())
	}

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		let len = self.head.is_some() as usize
			+ self.body.len()
			+ self.tail.is_some() as usize;
		(len, Some(len))
	}
}

impl<T> DoubleEndedIterator for Units<'_, T>
where T: BitStore
{
	#[inline]
	fn next_back(&mut self) -> Option<Self::Item> {
		self.tail
			.take()
			.or_else(|| {
				self.body.next_back().map(|w| Unit::Whole(w.load_value()))
			})
			.or_else(|| self.head.take())
	}
}

impl<T> ExactSizeIterator for Units<'_, T> where T: BitStore {}

impl<T> FusedIterator for Units<'_, T> where T: BitStore {}
