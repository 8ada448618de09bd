/*! Proxy reference to a single bit.

Rust references must point at addressable bytes, so there is no `&bool` that
designates a bit packed inside a word. [`BitRef`] stands in for one: it pairs a
shared reference to the word store with the one-hot selector of the bit, and
exposes explicit methods for the operations that a reference would support
through syntax.

Writes go through the store's [`BitAccess`] interface, so a `BitRef` into a
`Cell` or atomic word can modify its bit even though it only holds a shared
reference. Assigning through a `BitRef` always changes the referent bit; the
reference itself is never rebound.
!*/

use core::fmt::{
	self,
	Debug,
	Display,
	Formatter,
};

use wyz::fmt::FmtForward;

use crate::{
	index::{
		BitIdx,
		BitSel,
	},
	pointer::BitPtr,
	store::{
		BitAccess,
		BitStore,
	},
};

/** A reference to one bit inside a word store.

# Lifetimes

- `'a`: The lifetime of the borrowed word store.

# Type Parameters

- `T`: The word store. Plain words give read-only references; `Cell` and atomic
  words give writable ones.
**/
pub struct BitRef<'a, T>
where T: BitStore
{
	/// The word containing the referent bit.
	word: &'a T,
	/// The selector of the referent bit within `*word`.
	sel: BitSel<T::Mem>,
}

impl<'a, T> BitRef<'a, T>
where T: BitStore
{
	/// Creates a reference to a bit in a word.
	#[inline]
	pub fn new(word: &'a T, head: BitIdx<T::Mem>) -> Self {
		Self {
			word,
			sel: head.select(),
		}
	}

	#[inline]
	pub(crate) fn from_sel(word: &'a T, sel: BitSel<T::Mem>) -> Self {
		Self { word, sel }
	}

	/// Reads the referent bit.
	#[inline]
	pub fn get(&self) -> bool {
		self.word.test_bits(self.sel.value())
	}

	/// Borrows the word that contains the referent bit.
	#[inline]
	pub fn word(&self) -> &'a T {
		self.word
	}

	/// Gets the index of the referent bit within its word.
	#[inline]
	pub fn index(&self) -> BitIdx<T::Mem> {
		self.sel.index()
	}

	/// Gets the selector of the referent bit within its word.
	#[inline]
	pub fn selector(&self) -> BitSel<T::Mem> {
		self.sel
	}

	/// Converts the reference into a bit pointer.
	#[inline]
	pub fn as_bitptr(&self) -> BitPtr<T> {
		BitPtr::from_sel(self.word, self.sel)
	}
}

impl<T> BitRef<'_, T>
where T: BitAccess
{
	/// Sets the referent bit to `1`.
	#[inline]
	pub fn set(&self) {
		self.word.set_bits(self.sel.value());
	}

	/// Clears the referent bit to `0`.
	#[inline]
	pub fn reset(&self) {
		self.word.clear_bits(self.sel.value());
	}

	/// Inverts the referent bit.
	#[inline]
	pub fn flip(&self) {
		self.word.invert_bits(self.sel.value());
	}

	/// Writes a value into the referent bit.
	#[inline]
	pub fn assign(&self, value: bool) {
		if value {
			self.set();
		}
		else {
			self.reset();
		}
	}

	/// Writes a value into the referent bit, returning its previous value.
	#[inline]
	pub fn replace(&self, value: bool) -> bool {
		let old = self.get();
		self.assign(value);
		old
	}

	/// Exchanges the values of two referent bits.
	#[inline]
	pub fn swap<U>(&self, other: &BitRef<U>)
	where U: BitAccess {
		let (this, that) = (self.get(), other.get());
		if this != that {
			self.assign(that);
			other.assign(this);
		}
	}
}

impl<T> Clone for BitRef<'_, T>
where T: BitStore
{
	#[inline]
	fn clone(&self) -> Self {
		*self
	}
}

impl<T> Copy for BitRef<'_, T> where T: BitStore {}

impl<T> From<BitRef<'_, T>> for bool
where T: BitStore
{
	#[inline]
	fn from(bit: BitRef<'_, T>) -> Self {
		bit.get()
	}
}

impl<T> PartialEq<bool> for BitRef<'_, T>
where T: BitStore
{
	#[inline]
	fn eq(&self, other: &bool) -> bool {
		self.get() == *other
	}
}

impl<T> PartialEq<BitRef<'_, T>> for bool
where T: BitStore
{
	#[inline]
	fn eq(&self, other: &BitRef<'_, T>) -> bool {
		*self == other.get()
	}
}

impl<T, U> PartialEq<BitRef<'_, U>> for BitRef<'_, T>
where
	T: BitStore,
	U: BitStore,
{
	#[inline]
	fn eq(&self, other: &BitRef<'_, U>) -> bool {
		self.get() == other.get()
	}
}

impl<T> Debug for BitRef<'_, T>
where T: BitStore
{
	#[inline]
	fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
		fmt.debug_struct("BitRef")
			.field("addr", &(self.word as *const T).fmt_pointer())
			.field("head", &self.index().fmt_binary())
			.field("bit", &self.get())
			.finish()
	}
}

impl<T> Display for BitRef<'_, T>
where T: BitStore
{
	#[inline]
	fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
		Display::fmt(&(self.get() as u8), fmt)
	}
}

#[cfg(test)]
mod tests {
	use core::cell::Cell;

	use super::*;

	#[test]
	fn read_and_write() {
		let word = Cell::new(0u8);
		let bit = BitRef::new(&word, BitIdx::new(3).unwrap());
		assert!(!bit.get());
		bit.set();
		assert_eq!(word.get(), 0b0000_1000);
		assert_eq!(bit, true);
		bit.flip();
		assert_eq!(word.get(), 0);
		bit.assign(true);
		assert!(bit.replace(false));
		assert!(!bool::from(bit));
		bit.flip();
		bit.reset();
		assert_eq!(word.get(), 0);
	}

	#[test]
	fn neighbors_untouched() {
		let word = Cell::new(0xF0u8);
		let bit = BitRef::new(&word, BitIdx::new(4).unwrap());
		bit.reset();
		assert_eq!(word.get(), 0xE0);
		let bit = BitRef::new(&word, BitIdx::new(0).unwrap());
		bit.set();
		assert_eq!(word.get(), 0xE1);
	}

	#[test]
	fn swap_values() {
		let a = Cell::new(0x01u16);
		let b = Cell::new(0u32);
		let x = BitRef::new(&a, BitIdx::new(0).unwrap());
		let y = BitRef::new(&b, BitIdx::new(31).unwrap());
		x.swap(&y);
		assert_eq!(a.get(), 0);
		assert_eq!(b.get(), 1 << 31);
		assert_eq!(x, false);
		assert!(y == true);
		assert!(x != y);
	}

	#[test]
	fn render() {
		let word = 0x80u8;
		let bit = BitRef::new(&word, BitIdx::new(7).unwrap());
		assert_eq!(format!("{}", bit), "1");
		let text = format!("{:?}", bit);
		assert!(text.starts_with("BitRef"));
		assert!(text.contains("bit: true"));
	}
}
