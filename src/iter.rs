/*! Random-access cursors over bit positions.

[`BitIter`] is the bit-granular counterpart of a slice index: it borrows a
slice of word stores and records a position inside it as a word index and a
sub-word [`BitIdx`]. All of its arithmetic renormalizes the sub-word index into
`0 .. W::WIDTH`, carrying into the word index with floor semantics, so that any
sequence of moves lands on the same position as the equivalent single move.

A pair of cursors over the same slice describes a half-open bit range
`[first, last)`. The range algorithms take their operands in that form, and
[`BitRange`] walks one as a Rust iterator of [`BitRef`]s.

A cursor may move outside its slice; only reading or writing through it
requires its position to be in bounds, and out-of-bounds access panics through
ordinary slice indexing.
!*/

use core::{
	cmp::Ordering,
	fmt::{
		self,
		Debug,
		Formatter,
	},
	iter::FusedIterator,
	ops::{
		Add,
		AddAssign,
		Sub,
		SubAssign,
	},
	ptr,
};

use wyz::fmt::FmtForward;

use crate::{
	adapter::AdaptedIter,
	index::{
		BitIdx,
		BitIdxError,
	},
	pointer::BitPtr,
	reference::BitRef,
	store::BitStore,
	word::BitWord,
};

/** A cursor addressing one bit position in a slice of word stores.

# Lifetimes

- `'a`: The lifetime of the borrowed storage.

# Type Parameters

- `T`: The word store. Two cursors can only be subtracted or compared when they
  share the same `T`.
**/
pub struct BitIter<'a, T>
where T: BitStore
{
	/// The storage region the cursor walks.
	words: &'a [T],
	/// Index of the word containing the current bit. This may lie outside
	/// `words`.
	index: isize,
	/// Index of the current bit within its word.
	head: BitIdx<T::Mem>,
}

impl<'a, T> BitIter<'a, T>
where T: BitStore
{
	/// Creates a cursor at the first bit of a slice.
	#[inline]
	pub fn from_slice(words: &'a [T]) -> Self {
		Self {
			words,
			index: 0,
			head: BitIdx::ZERO,
		}
	}

	/// Creates a cursor at a word index and a sub-word offset.
	///
	/// # Errors
	///
	/// The offset must be less than the bit width of the word.
	#[inline]
	pub fn new(
		words: &'a [T],
		index: usize,
		head: u8,
	) -> Result<Self, BitIdxError<T::Mem>> {
		Ok(Self {
			words,
			index: index as isize,
			head: BitIdx::new(head)?,
		})
	}

	/// Creates a cursor at an absolute bit position in a slice.
	#[inline]
	pub fn at(words: &'a [T], bit: usize) -> Self {
		Self::from_slice(words) + bit as isize
	}

	/// Creates a pair of cursors spanning the first `bits` bits of a slice.
	#[inline]
	pub fn span(words: &'a [T], bits: usize) -> (Self, Self) {
		debug_assert!(
			bits <= words.len() * <T::Mem as BitWord>::WIDTH as usize,
			"a span of {} bits exceeds {} words",
			bits,
			words.len(),
		);
		(Self::from_slice(words), Self::at(words, bits))
	}

	/// Creates a cursor one past the last bit of a slice.
	#[inline]
	pub fn end_of(words: &'a [T]) -> Self {
		Self {
			words,
			index: words.len() as isize,
			head: BitIdx::ZERO,
		}
	}

	/// Reads the current bit.
	///
	/// # Panics
	///
	/// This panics if the cursor is outside its slice.
	#[inline]
	pub fn read(&self) -> bool {
		self.bit().get()
	}

	/// Produces a reference to the current bit.
	///
	/// # Panics
	///
	/// This panics if the cursor is outside its slice.
	#[inline]
	pub fn bit(&self) -> BitRef<'a, T> {
		BitRef::new(self.word(), self.head)
	}

	/// Produces a reference to the bit `by` positions away from the cursor.
	#[inline]
	pub fn at_offset(&self, by: isize) -> BitRef<'a, T> {
		self.offset(by).bit()
	}

	/// Advances the cursor by one bit.
	#[inline]
	pub fn incr(&mut self) {
		let (head, wrap) = self.head.incr();
		self.head = head;
		self.index += wrap as isize;
	}

	/// Retreats the cursor by one bit.
	#[inline]
	pub fn decr(&mut self) {
		let (head, wrap) = self.head.decr();
		self.head = head;
		self.index -= wrap as isize;
	}

	/// Produces a cursor `by` bits away from this one.
	#[inline]
	pub fn offset(self, by: isize) -> Self {
		let (words, head) = self.head.offset(by);
		Self {
			index: self.index + words,
			head,
			..self
		}
	}

	/// Counts the bits from this cursor up to `other`.
	///
	/// The result is negative when `other` precedes `self`.
	#[inline]
	pub fn distance(self, other: Self) -> isize {
		debug_assert!(
			ptr::eq(self.words, other.words),
			"cursors over different storage have no distance",
		);
		(other.index - self.index) * <T::Mem as BitWord>::WIDTH as isize
			+ other.head.value() as isize
			- self.head.value() as isize
	}

	/// Gets the index of the word containing the current bit.
	#[inline]
	pub fn word_index(&self) -> isize {
		self.index
	}

	/// Gets the index of the current bit within its word.
	#[inline]
	pub fn head(&self) -> BitIdx<T::Mem> {
		self.head
	}

	/// Gets the absolute bit position of the cursor within its slice.
	#[inline]
	pub fn bit_index(&self) -> isize {
		self.index * <T::Mem as BitWord>::WIDTH as isize
			+ self.head.value() as isize
	}

	/// Borrows the storage that the cursor walks.
	#[inline]
	pub fn words(&self) -> &'a [T] {
		self.words
	}

	/// Converts the cursor into a bit pointer.
	///
	/// Positions outside the slice produce pointers that must not be
	/// dereferenced.
	#[inline]
	pub fn as_bitptr(&self) -> BitPtr<T> {
		BitPtr::new(self.words.as_ptr().wrapping_offset(self.index), self.head)
	}

	/// Views the storage as logical words of type `W`, positioned at the same
	/// bit as this cursor.
	#[inline]
	pub fn adapt<W>(&self) -> AdaptedIter<'a, T, W>
	where W: BitWord {
		AdaptedIter::new(self.words, self.bit_index())
	}

	/// Produces an iterator over the bits from this cursor up to `last`.
	#[inline]
	pub fn to(self, last: Self) -> BitRange<'a, T> {
		BitRange::new(self, last)
	}

	#[inline]
	fn word(&self) -> &'a T {
		&self.words[self.index as usize]
	}
}

impl<T> Clone for BitIter<'_, T>
where T: BitStore
{
	#[inline]
	fn clone(&self) -> Self {
		*self
	}
}

impl<T> Copy for BitIter<'_, T> where T: BitStore {}

impl<T> Eq for BitIter<'_, T> where T: BitStore {}

impl<T> PartialEq for BitIter<'_, T>
where T: BitStore
{
	#[inline]
	fn eq(&self, other: &Self) -> bool {
		self.index == other.index && self.head == other.head
	}
}

impl<T> Ord for BitIter<'_, T>
where T: BitStore
{
	#[inline]
	fn cmp(&self, other: &Self) -> Ordering {
		self.index
			.cmp(&other.index)
			.then_with(|| self.head.cmp(&other.head))
	}
}

impl<T> PartialOrd for BitIter<'_, T>
where T: BitStore
{
	#[inline]
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl<T> Add<isize> for BitIter<'_, T>
where T: BitStore
{
	type Output = Self;

	#[inline]
	fn add(self, by: isize) -> Self {
		self.offset(by)
	}
}

impl<T> AddAssign<isize> for BitIter<'_, T>
where T: BitStore
{
	#[inline]
	fn add_assign(&mut self, by: isize) {
		*self = self.offset(by);
	}
}

impl<T> Sub<isize> for BitIter<'_, T>
where T: BitStore
{
	type Output = Self;

	#[inline]
	fn sub(self, by: isize) -> Self {
		self.offset(by.wrapping_neg())
	}
}

impl<T> SubAssign<isize> for BitIter<'_, T>
where T: BitStore
{
	#[inline]
	fn sub_assign(&mut self, by: isize) {
		*self = *self - by;
	}
}

impl<'a, T> Sub<BitIter<'a, T>> for BitIter<'a, T>
where T: BitStore
{
	type Output = isize;

	#[inline]
	fn sub(self, origin: Self) -> isize {
		origin.distance(self)
	}
}

impl<T> Debug for BitIter<'_, T>
where T: BitStore
{
	#[inline]
	fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
		fmt.debug_struct("BitIter")
			.field("words", &self.words.as_ptr().fmt_pointer())
			.field("index", &self.index)
			.field("head", &self.head.fmt_binary())
			.finish()
	}
}

/** An iterator over the bits of a range `[first, last)`.

This yields a [`BitRef`] for each bit, front to back, and can also be walked
from the back.
**/
pub struct BitRange<'a, T>
where T: BitStore
{
	/// The next bit to yield from the front.
	front: BitIter<'a, T>,
	/// One past the next bit to yield from the back.
	back: BitIter<'a, T>,
}

impl<'a, T> BitRange<'a, T>
where T: BitStore
{
	/// Creates an iterator over `[first, last)`.
	#[inline]
	pub fn new(first: BitIter<'a, T>, last: BitIter<'a, T>) -> Self {
		debug_assert!(first <= last, "range ends before it begins");
		Self {
			front: first,
			back: last,
		}
	}

	/// Gets the front cursor of the remaining range.
	#[inline]
	pub fn front(&self) -> BitIter<'a, T> {
		self.front
	}

	/// Gets the back cursor of the remaining range.
	#[inline]
	pub fn back(&self) -> BitIter<'a, T> {
		self.back
	}
}

impl<T> Clone for BitRange<'_, T>
where T: BitStore
{
	#[inline]
	fn clone(&self) -> Self {
		Self { ..*self }
	}
}

impl<'a, T> Iterator for BitRange<'a, T>
where T: BitStore
{
	type Item = BitRef<'a, T>;

	#[inline]
	fn next(&mut self) -> Option<Self::Item> {
		if self.front >= self.back {
			return None;
		}
		let out = self.front.bit();
		self.front.incr();
		Some(out)
	}

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		let len = self.len();
		(len, Some(len))
	}

	#[inline]
	fn count(self) -> usize {
		self.len()
	}

	#[inline]
	fn nth(&mut self, n: usize) -> Option<Self::Item> {
		if n >= self.len() {
			self.front = self.back;
			return None;
		}
		self.front += n as isize;
		self.next()
	}

	#[inline]
	fn last(mut self) -> Option<Self::Item> {
		self.next_back()
	}
}

impl<T> DoubleEndedIterator for BitRange<'_, T>
where T: BitStore
{
	#[inline]
	fn next_back(&mut self) -> Option<Self::Item> {
		if self.front >= self.back {
			return None;
		}
		self.back.decr();
		Some(self.back.bit())
	}
}

impl<T> ExactSizeIterator for BitRange<'_, T>
where T: BitStore
{
	#[inline]
	fn len(&self) -> usize {
		(self.back - self.front).max(0) as usize
	}
}

impl<T> FusedIterator for BitRange<'_, T> where T: BitStore {}

impl<T> Debug for BitRange<'_, T>
where T: BitStore
{
	#[inline]
	fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
		fmt.debug_struct("BitRange")
			.field("first", &self.front)
			.field("last", &self.back)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use core::cell::Cell;

	use super::*;
	use crate::store;

	#[test]
	fn construct() {
		let words = [0u8; 4];
		assert!(BitIter::new(&words, 1, 8).is_err());
		let it = BitIter::new(&words, 1, 3).unwrap();
		assert_eq!(it, BitIter::at(&words, 11));
		assert_eq!(it.word_index(), 1);
		assert_eq!(it.head().value(), 3);
		assert_eq!(it.bit_index(), 11);

		let (first, last) = BitIter::span(&words, 32);
		assert_eq!(last, BitIter::end_of(&words));
		assert_eq!(last - first, 32);
	}

	#[test]
	fn moves_renormalize() {
		let words = [0u16; 4];
		let base = BitIter::from_slice(&words);
		let mut it = base + 15;
		it.incr();
		assert_eq!((it.word_index(), it.head().value()), (1, 0));
		it.decr();
		assert_eq!((it.word_index(), it.head().value()), (0, 15));

		let before = base - 1;
		assert_eq!((before.word_index(), before.head().value()), (-1, 15));
		let mut back = base + 40;
		back -= 41;
		assert_eq!(back, before);
		back += 1;
		assert_eq!(back, base);
	}

	#[test]
	fn iterator_law() {
		let words = [0u32; 3];
		for a in 0 .. 96 {
			for b in a .. 96 {
				let x = BitIter::at(&words, a);
				let y = BitIter::at(&words, b);
				assert!(x <= y);
				assert_eq!(x.distance(y), y - x);
				assert!(y - x >= 0);
				assert_eq!(x + (y - x), y);
				assert_eq!(y - (y - x), x);
			}
		}
	}

	#[test]
	fn reads_and_writes() {
		let mut raw = [0b1010_0101u8, 0x00];
		let words = store::from_mut_slice(&mut raw);
		let it = BitIter::from_slice(words);
		assert!(it.read());
		assert!(!it.at_offset(1).get());
		it.at_offset(9).set();
		(it + 15).bit().assign(true);
		assert!(it.at_offset(15) == true);
		assert_eq!(raw, [0b1010_0101, 0b1000_0010]);
	}

	#[test]
	fn ranges() {
		let words = [0b0110_1001u8];
		let (first, last) = BitIter::span(&words, 8);
		let bits = first.to(last).map(bool::from).collect::<Vec<_>>();
		assert_eq!(bits, [true, false, false, true, false, true, true, false]);

		let mut range = (first + 1).to(last - 1);
		assert_eq!(range.len(), 6);
		assert_eq!(range.next_back().map(bool::from), Some(true));
		assert_eq!(range.next().map(bool::from), Some(false));
		assert_eq!(range.nth(2).map(bool::from), Some(false));
		assert_eq!(range.len(), 1);
		assert_eq!(range.front(), first + 5);
		assert_eq!(range.back(), first + 6);
		assert_eq!(range.clone().last().map(bool::from), Some(true));
		assert!(range.next().is_some());
		assert!(range.next().is_none());
		assert!(range.next_back().is_none());
	}

	#[test]
	fn pointers() {
		let words = [Cell::new(0u64), Cell::new(0)];
		let it = BitIter::at(&words, 70);
		let ptr = it.as_bitptr();
		assert_eq!(ptr.address(), &words[1] as *const Cell<u64>);
		assert_eq!(ptr.position().value(), 6);
		unsafe {
			ptr.write(true);
		}
		assert_eq!(words[1].get(), 1 << 6);
	}
}
