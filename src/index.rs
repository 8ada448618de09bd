/*! Typed positions within a register word.

This module provides the types that describe where a bit lives inside one word
of storage. They carry the word type as a parameter, so an index produced for a
`u8` can never be applied to a `u32`, and every value is known to be in range
for the word that it governs.

# Type Sequence

[`BitIdx`] is a counter in `0 .. W::WIDTH`. It is the only position type that
supports arithmetic: moving it by a signed distance produces a carry into the
word index, with floor semantics for negative distances. The bit cursors store
their sub-word position as a `BitIdx`.

[`BitSel`] is a one-hot selector produced from a `BitIdx`. Bit references and
bit pointers hold a `BitSel`, and apply it directly to a loaded word.

[`BitMask`] is a multi-bit selector, built from a start index and a length, or
by combining selectors. The range algorithms use it for their boundary words.
!*/

use core::{
	any::type_name,
	fmt::{
		self,
		Binary,
		Debug,
		Display,
		Formatter,
	},
	iter::Sum,
	marker::PhantomData,
	ops::{
		BitAnd,
		BitOr,
		Not,
	},
};

use crate::word::{
	self,
	BitWord,
};

/** A semantic index of a single bit within a word `W`.

Bit `0` is the least significant bit of the word, and bit `W::WIDTH - 1` is the
most significant. This crate uses that numbering throughout: the first bit of a
range is the least significant bit of the value it represents.

# Validity

Values of this type are always in the range `0 .. W::WIDTH`. The checked
constructor rejects any other value, and every arithmetic operation renormalizes
its result into this range.
**/
#[repr(transparent)]
#[derive(Clone, Copy, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct BitIdx<W>
where W: BitWord
{
	/// Semantic index counter within a word, constrained to `0 .. W::WIDTH`.
	idx: u8,
	/// Marker for the indexed type.
	_ty: PhantomData<W>,
}

impl<W> BitIdx<W>
where W: BitWord
{
	/// The zero index.
	pub const ZERO: Self = Self {
		idx: 0,
		_ty: PhantomData,
	};
	/// The inclusive-maximum index.
	pub const LAST: Self = Self {
		idx: W::MASK,
		_ty: PhantomData,
	};

	/// Wraps a counter value as a known-good index into a `W` word.
	///
	/// # Errors
	///
	/// Values at or above `W::WIDTH` are rejected with a [`BitIdxError`].
	#[inline]
	pub fn new(idx: u8) -> Result<Self, BitIdxError<W>> {
		if idx >= W::WIDTH {
			return Err(BitIdxError::new(idx));
		}
		Ok(Self::new_unchecked(idx))
	}

	/// Wraps a counter value as an assumed-good index into a `W` word.
	///
	/// Debug builds panic on an out-of-range value. Release builds truncate it
	/// into range.
	#[inline]
	pub(crate) fn new_unchecked(idx: u8) -> Self {
		debug_assert!(
			idx < W::WIDTH,
			"bit index {} cannot exceed type width {}",
			idx,
			W::WIDTH,
		);
		Self {
			idx: idx & W::MASK,
			_ty: PhantomData,
		}
	}

	/// Views the internal index value.
	#[inline]
	pub fn value(self) -> u8 {
		self.idx
	}

	/// Increments an index counter, wrapping at the back edge of the word.
	///
	/// # Returns
	///
	/// - `.0`: The next index after `self`.
	/// - `.1`: Indicates that the new index is in the next word.
	#[inline]
	pub fn incr(self) -> (Self, bool) {
		let next = self.idx + 1;
		(Self::new_unchecked(next & W::MASK), next == W::WIDTH)
	}

	/// Decrements an index counter, wrapping at the front edge of the word.
	///
	/// # Returns
	///
	/// - `.0`: The previous index before `self`.
	/// - `.1`: Indicates that the new index is in the previous word.
	#[inline]
	pub fn decr(self) -> (Self, bool) {
		let next = self.idx.wrapping_sub(1);
		(Self::new_unchecked(next & W::MASK), self.idx == 0)
	}

	/// Computes the one-hot selector for this index.
	#[inline]
	pub fn select(self) -> BitSel<W> {
		BitSel::new_unchecked(W::LSB << self.idx as u32)
	}

	/// Computes the selector for this index as a multi-bit mask.
	#[inline]
	pub fn mask(self) -> BitMask<W> {
		self.select().mask()
	}

	/// Computes the jump distance for a number of bits away from this index.
	///
	/// # Parameters
	///
	/// - `self`: The starting bit index.
	/// - `by`: The number of bits by which to move. Negative values move towards
	///   the front of the storage.
	///
	/// # Returns
	///
	/// - `.0`: The number of words by which to move the enclosing word cursor.
	///   This is the floor of `(self + by) / W::WIDTH`, so `-1` is the last bit
	///   of the previous word.
	/// - `.1`: The bit index of the destination bit in the destination word.
	pub fn offset(self, by: isize) -> (isize, Self) {
		let (far, ovf) = by.overflowing_add(self.idx as isize);
		if !ovf {
			if (0 .. W::WIDTH as isize).contains(&far) {
				(0, Self::new_unchecked(far as u8))
			}
			else {
				//  Arithmetic shift rounds towards negative infinity.
				(far >> W::INDX, Self::new_unchecked(far as u8 & W::MASK))
			}
		}
		else {
			//  The overflowed signed sum is the correct unsigned sum.
			let far = far as usize;
			((far >> W::INDX) as isize, Self::new_unchecked(far as u8 & W::MASK))
		}
	}

	/// Computes the number of words that a span of `len` bits starting at
	/// `self` touches, and the index one past its final bit.
	///
	/// The returned end index is `0` when the span ends exactly on a word edge.
	pub fn span(self, len: usize) -> (usize, Self) {
		if len == 0 {
			return (0, self);
		}
		let bits = self.idx as usize + len;
		let words = (bits + W::MASK as usize) >> W::INDX;
		(words, Self::new_unchecked(bits as u8 & W::MASK))
	}

	/// Ranges over all possible index values.
	pub fn range_all() -> impl Iterator<Item = Self>
	+ DoubleEndedIterator
	+ ExactSizeIterator {
		(0 .. W::WIDTH).map(Self::new_unchecked)
	}
}

impl<W> Binary for BitIdx<W>
where W: BitWord
{
	#[inline]
	fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
		write!(fmt, "{:0>1$b}", self.idx, W::INDX as usize)
	}
}

impl<W> Debug for BitIdx<W>
where W: BitWord
{
	#[inline]
	fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
		write!(fmt, "BitIdx<{}>({})", type_name::<W>(), self.idx)
	}
}

impl<W> Display for BitIdx<W>
where W: BitWord
{
	#[inline]
	fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
		Display::fmt(&self.idx, fmt)
	}
}

/// Reports an attempt to create a [`BitIdx`] outside its word.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct BitIdxError<W>
where W: BitWord
{
	/// The rejected counter value.
	err: u8,
	/// Marker for the word that rejected it.
	_ty: PhantomData<W>,
}

impl<W> BitIdxError<W>
where W: BitWord
{
	#[inline]
	fn new(err: u8) -> Self {
		debug_assert!(err >= W::WIDTH, "{} is a valid index", err);
		Self {
			err,
			_ty: PhantomData,
		}
	}

	/// Views the rejected counter value.
	#[inline]
	pub fn value(self) -> u8 {
		self.err
	}
}

impl<W> Debug for BitIdxError<W>
where W: BitWord
{
	#[inline]
	fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
		write!(fmt, "BitIdxError<{}>({})", type_name::<W>(), self.err)
	}
}

impl<W> Display for BitIdxError<W>
where W: BitWord
{
	#[inline]
	fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
		write!(
			fmt,
			"the index {} is out of range for a {}-bit word",
			self.err,
			W::WIDTH,
		)
	}
}

#[cfg(feature = "std")]
impl<W> std::error::Error for BitIdxError<W> where W: BitWord {}

/** A one-hot selection mask for a single bit in a word.

Exactly one bit of the wrapped value is set. The position of that bit is the
trailing zero count of the value.
**/
#[repr(transparent)]
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct BitSel<W>
where W: BitWord
{
	sel: W,
}

impl<W> BitSel<W>
where W: BitWord
{
	/// Wraps a word as a selector, if it has exactly one bit set.
	#[inline]
	pub fn new(sel: W) -> Option<Self> {
		if sel.count_ones() != 1 {
			return None;
		}
		Some(Self { sel })
	}

	#[inline]
	pub(crate) fn new_unchecked(sel: W) -> Self {
		debug_assert!(
			sel.count_ones() == 1,
			"selections must have exactly one bit set: {:b}",
			sel,
		);
		Self { sel }
	}

	/// Computes the index of the selected bit.
	#[inline]
	pub fn index(self) -> BitIdx<W> {
		BitIdx::new_unchecked(self.sel.trailing_zeros() as u8)
	}

	/// Moves the selection towards the most significant end.
	///
	/// The selection wraps from the most significant bit to the least, and the
	/// second return value reports that wrap.
	#[inline]
	pub fn incr(self) -> (Self, bool) {
		if self.sel == W::MSB {
			(Self { sel: W::LSB }, true)
		}
		else {
			(Self { sel: self.sel << 1u32 }, false)
		}
	}

	/// Moves the selection towards the least significant end, wrapping as
	/// [`incr`](Self::incr) does.
	#[inline]
	pub fn decr(self) -> (Self, bool) {
		if self.sel == W::LSB {
			(Self { sel: W::MSB }, true)
		}
		else {
			(Self { sel: self.sel >> 1u32 }, false)
		}
	}

	/// Converts the selector into a general mask.
	#[inline]
	pub fn mask(self) -> BitMask<W> {
		BitMask { mask: self.sel }
	}

	/// Views the internal selector value.
	#[inline]
	pub fn value(self) -> W {
		self.sel
	}

	/// Ranges over all possible selector values.
	pub fn range_all() -> impl Iterator<Item = Self>
	+ DoubleEndedIterator
	+ ExactSizeIterator {
		BitIdx::<W>::range_all().map(BitIdx::select)
	}
}

impl<W> Debug for BitSel<W>
where W: BitWord
{
	#[inline]
	fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
		write!(
			fmt,
			"BitSel<{}>({:0>2$b})",
			type_name::<W>(),
			self.sel,
			W::WIDTH as usize,
		)
	}
}

impl<W> Display for BitSel<W>
where W: BitWord
{
	#[inline]
	fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
		write!(fmt, "{:0>1$b}", self.sel, W::WIDTH as usize)
	}
}

/** A multi-bit selection mask.

Unlike [`BitSel`], any number of bits in this mask may be set. The range
algorithms build one for each boundary word, covering exactly the bits of that
word which belong to the range.
**/
#[repr(transparent)]
#[derive(Clone, Copy, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct BitMask<W>
where W: BitWord
{
	mask: W,
}

impl<W> BitMask<W>
where W: BitWord
{
	/// A full mask.
	pub const ALL: Self = Self { mask: W::ALL };
	/// An empty mask.
	pub const ZERO: Self = Self { mask: W::ZERO };

	/// Wraps any word as a mask.
	#[inline]
	pub fn new(mask: W) -> Self {
		Self { mask }
	}

	/// Produces a mask of `len` bits beginning at `start`.
	///
	/// `start + len` must not exceed `W::WIDTH`.
	#[inline]
	pub fn span(start: BitIdx<W>, len: u8) -> Self {
		Self {
			mask: word::field_mask(start.value(), len),
		}
	}

	/// Adds a selector bit to the mask, returning the combination.
	#[inline]
	pub fn combine(self, sel: BitSel<W>) -> Self {
		Self {
			mask: self.mask | sel.value(),
		}
	}

	/// Inserts a selector bit into the mask.
	#[inline]
	pub fn insert(&mut self, sel: BitSel<W>) {
		self.mask = self.mask | sel.value();
	}

	/// Tests whether the mask contains a selector bit.
	#[inline]
	pub fn test(self, sel: BitSel<W>) -> bool {
		self.mask & sel.value() != W::ZERO
	}

	/// Counts the bits in the mask.
	#[inline]
	pub fn len(self) -> usize {
		self.mask.count_ones() as usize
	}

	/// Tests whether the mask is empty.
	#[inline]
	pub fn is_empty(self) -> bool {
		self.mask == W::ZERO
	}

	/// Views the internal mask value.
	#[inline]
	pub fn value(self) -> W {
		self.mask
	}
}

impl<W> Debug for BitMask<W>
where W: BitWord
{
	#[inline]
	fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
		write!(
			fmt,
			"BitMask<{}>({:0>2$b})",
			type_name::<W>(),
			self.mask,
			W::WIDTH as usize,
		)
	}
}

impl<W> Display for BitMask<W>
where W: BitWord
{
	#[inline]
	fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
		write!(fmt, "{:0>1$b}", self.mask, W::WIDTH as usize)
	}
}

impl<W> Sum<BitSel<W>> for BitMask<W>
where W: BitWord
{
	fn sum<I>(iter: I) -> Self
	where I: Iterator<Item = BitSel<W>> {
		iter.fold(Self::ZERO, Self::combine)
	}
}

impl<W> BitAnd<W> for BitMask<W>
where W: BitWord
{
	type Output = Self;

	#[inline]
	fn bitand(self, rhs: W) -> Self {
		Self {
			mask: self.mask & rhs,
		}
	}
}

impl<W> BitOr<W> for BitMask<W>
where W: BitWord
{
	type Output = Self;

	#[inline]
	fn bitor(self, rhs: W) -> Self {
		Self {
			mask: self.mask | rhs,
		}
	}
}

impl<W> Not for BitMask<W>
where W: BitWord
{
	type Output = Self;

	#[inline]
	fn not(self) -> Self::Output {
		Self { mask: !self.mask }
	}
}
