/*! Pointer to a single bit.

[`BitPtr`] is the raw-pointer counterpart of [`BitRef`]: the address of a word
store plus the one-hot selector of a bit inside it. It supports the same
arithmetic as a raw pointer, in units of bits. Moving the pointer rotates its
selector through the word, and carries into the word address whenever the
selector wraps.

Dereferencing a `BitPtr` is `unsafe`, with the same obligations as
dereferencing a raw pointer. The null pointer is available as a default value,
and is never valid to dereference.

[`BitRef`]: crate::reference::BitRef
!*/

use core::{
	any::type_name,
	cmp::Ordering,
	fmt::{
		self,
		Debug,
		Formatter,
		Pointer,
	},
	hash::{
		Hash,
		Hasher,
	},
	ptr,
};

use wyz::fmt::FmtForward;

use crate::{
	index::{
		BitIdx,
		BitSel,
	},
	reference::BitRef,
	store::{
		BitAccess,
		BitStore,
	},
	word::BitWord,
};

/** A pointer to one bit inside a word store.

# Type Parameters

- `T`: The word store that the pointer addresses.

# Invariants

The selector always has exactly one bit set. Its position is the trailing zero
count of the selector.
**/
pub struct BitPtr<T>
where T: BitStore
{
	/// Address of the word containing the bit.
	addr: *const T,
	/// Selector of the bit within `*addr`.
	sel: BitSel<T::Mem>,
}

impl<T> BitPtr<T>
where T: BitStore
{
	/// Produces the null bit pointer.
	#[inline]
	pub fn null() -> Self {
		Self {
			addr: ptr::null(),
			sel: BitIdx::ZERO.select(),
		}
	}

	/// Constructs a pointer from a word address and a bit index.
	#[inline]
	pub fn new(addr: *const T, head: BitIdx<T::Mem>) -> Self {
		Self {
			addr,
			sel: head.select(),
		}
	}

	/// Constructs a pointer to a bit of a borrowed word.
	#[inline]
	pub fn from_ref(word: &T, head: BitIdx<T::Mem>) -> Self {
		Self::new(word as *const T, head)
	}

	#[inline]
	pub(crate) fn from_sel(word: &T, sel: BitSel<T::Mem>) -> Self {
		Self {
			addr: word as *const T,
			sel,
		}
	}

	/// Tests whether the pointer has a null word address.
	#[inline]
	pub fn is_null(self) -> bool {
		self.addr.is_null()
	}

	/// Gets the address of the word containing the bit.
	#[inline]
	pub fn address(self) -> *const T {
		self.addr
	}

	/// Gets the index of the bit within its word.
	#[inline]
	pub fn position(self) -> BitIdx<T::Mem> {
		self.sel.index()
	}

	/// Gets the one-hot selector of the bit within its word.
	#[inline]
	pub fn mask(self) -> BitSel<T::Mem> {
		self.sel
	}

	/// Reads the referent bit.
	///
	/// # Safety
	///
	/// The pointer must be non-null and address a live `T`.
	#[inline]
	pub unsafe fn read(self) -> bool {
		(*self.addr).test_bits(self.sel.value())
	}

	/// Produces a bit reference to the referent bit, or `None` for a null
	/// pointer.
	///
	/// # Safety
	///
	/// A non-null pointer must address a `T` that lives for at least `'a`.
	#[inline]
	pub unsafe fn as_ref<'a>(self) -> Option<BitRef<'a, T>> {
		self.addr
			.as_ref()
			.map(|word| BitRef::from_sel(word, self.sel))
	}

	/// Moves the pointer to the next bit, carrying into the next word after
	/// the most significant bit.
	///
	/// The word address moves with wrapping arithmetic, so this is always safe
	/// to call; only dereferencing the result carries obligations.
	#[inline]
	pub fn incr(&mut self) {
		let (sel, wrap) = self.sel.incr();
		self.sel = sel;
		if wrap {
			self.addr = self.addr.wrapping_add(1);
		}
	}

	/// Moves the pointer to the previous bit, borrowing from the previous word
	/// before the least significant bit.
	#[inline]
	pub fn decr(&mut self) {
		let (sel, wrap) = self.sel.decr();
		self.sel = sel;
		if wrap {
			self.addr = self.addr.wrapping_sub(1);
		}
	}

	/// Offsets the pointer by a signed number of bits, using wrapping
	/// arithmetic on the word address.
	#[inline]
	pub fn wrapping_offset(self, count: isize) -> Self {
		let (elts, head) = self.position().offset(count);
		Self::new(self.addr.wrapping_offset(elts), head)
	}

	/// Offsets the pointer by a signed number of bits.
	///
	/// # Safety
	///
	/// The same requirements as [`pointer::offset`] apply to the word
	/// displacement: both the starting and the resulting word must lie within,
	/// or one past the end of, the same allocated object.
	///
	/// [`pointer::offset`]: https://doc.rust-lang.org/std/primitive.pointer.html#method.offset
	#[inline]
	pub unsafe fn offset(self, count: isize) -> Self {
		let (elts, head) = self.position().offset(count);
		Self::new(self.addr.offset(elts), head)
	}

	/// Calculates the distance in bits from `origin` to `self`.
	///
	/// This is the inverse of [`offset`](Self::offset).
	///
	/// # Safety
	///
	/// Both pointers must be derived from the same allocated object, as for
	/// [`pointer::offset_from`].
	///
	/// [`pointer::offset_from`]: https://doc.rust-lang.org/std/primitive.pointer.html#method.offset_from
	#[inline]
	pub unsafe fn offset_from(self, origin: Self) -> isize {
		self.addr
			.offset_from(origin.addr)
			.wrapping_mul(<T::Mem as BitWord>::WIDTH as isize)
			.wrapping_add(self.position().value() as isize)
			.wrapping_sub(origin.position().value() as isize)
	}
}

impl<T> BitPtr<T>
where T: BitAccess
{
	/// Writes a value into the referent bit.
	///
	/// # Safety
	///
	/// The pointer must be non-null and address a live `T`.
	#[inline]
	pub unsafe fn write(self, value: bool) {
		let word = &*self.addr;
		if value {
			word.set_bits(self.sel.value());
		}
		else {
			word.clear_bits(self.sel.value());
		}
	}
}

impl<T> Clone for BitPtr<T>
where T: BitStore
{
	#[inline]
	fn clone(&self) -> Self {
		*self
	}
}

impl<T> Copy for BitPtr<T> where T: BitStore {}

impl<T> Default for BitPtr<T>
where T: BitStore
{
	#[inline]
	fn default() -> Self {
		Self::null()
	}
}

impl<T> From<&T> for BitPtr<T>
where T: BitStore
{
	#[inline]
	fn from(word: &T) -> Self {
		Self::from_ref(word, BitIdx::ZERO)
	}
}

impl<T> Eq for BitPtr<T> where T: BitStore {}

impl<T> PartialEq for BitPtr<T>
where T: BitStore
{
	#[inline]
	fn eq(&self, other: &Self) -> bool {
		self.addr == other.addr && self.sel == other.sel
	}
}

impl<T> Ord for BitPtr<T>
where T: BitStore
{
	#[inline]
	fn cmp(&self, other: &Self) -> Ordering {
		self.addr
			.cmp(&other.addr)
			.then_with(|| self.position().cmp(&other.position()))
	}
}

impl<T> PartialOrd for BitPtr<T>
where T: BitStore
{
	#[inline]
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl<T> Hash for BitPtr<T>
where T: BitStore
{
	#[inline]
	fn hash<H>(&self, state: &mut H)
	where H: Hasher {
		self.addr.hash(state);
		self.position().hash(state);
	}
}

impl<T> Debug for BitPtr<T>
where T: BitStore
{
	#[inline]
	fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
		write!(fmt, "*Bit<{}>", type_name::<T>())?;
		Pointer::fmt(self, fmt)
	}
}

impl<T> Pointer for BitPtr<T>
where T: BitStore
{
	#[inline]
	fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
		fmt.debug_tuple("")
			.field(&self.addr.fmt_pointer())
			.field(&self.position().fmt_binary())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use core::cell::Cell;

	use super::*;

	#[test]
	fn null() {
		let ptr = BitPtr::<u8>::default();
		assert!(ptr.is_null());
		assert_eq!(ptr, BitPtr::null());
		assert!(unsafe { ptr.as_ref() }.is_none());
	}

	#[test]
	fn walk_carries() {
		let words = [0x80u8, 0x01];
		let mut ptr = BitPtr::new(&words[0], BitIdx::new(6).unwrap());
		assert!(!unsafe { ptr.read() });
		ptr.incr();
		assert!(unsafe { ptr.read() });
		assert_eq!(ptr.position().value(), 7);
		ptr.incr();
		assert_eq!(ptr.address(), &words[1] as *const u8);
		assert_eq!(ptr.position(), BitIdx::ZERO);
		assert!(unsafe { ptr.read() });
		ptr.decr();
		assert_eq!(ptr, BitPtr::new(&words[0], BitIdx::new(7).unwrap()));
	}

	#[test]
	fn arithmetic() {
		let words = [0u16; 4];
		let base = BitPtr::from(&words[0]);
		let far = unsafe { base.offset(37) };
		assert_eq!(far.address(), &words[2] as *const u16);
		assert_eq!(far.position().value(), 5);
		assert_eq!(unsafe { far.offset_from(base) }, 37);
		assert_eq!(unsafe { base.offset_from(far) }, -37);
		assert_eq!(unsafe { far.offset(-37) }, base);
		assert_eq!(base.wrapping_offset(37), far);
		assert_eq!(far.mask().value(), 1 << 5);
	}

	#[test]
	fn ordering() {
		let words = [0u32; 2];
		let a = BitPtr::new(&words[0], BitIdx::new(31).unwrap());
		let b = BitPtr::new(&words[1], BitIdx::new(0).unwrap());
		let c = BitPtr::new(&words[1], BitIdx::new(1).unwrap());
		assert!(a < b);
		assert!(b < c);
		assert_eq!(a.max(c), c);
	}

	#[test]
	fn writes() {
		let word = Cell::new(0u8);
		let ptr = BitPtr::new(&word, BitIdx::new(2).unwrap());
		unsafe {
			ptr.write(true);
			assert_eq!(word.get(), 4);
			assert!(ptr.as_ref().unwrap().get());
			ptr.write(false);
		}
		assert_eq!(word.get(), 0);
	}

	#[test]
	fn render() {
		let word = 0u8;
		let ptr = BitPtr::new(&word, BitIdx::new(3).unwrap());
		let text = format!("{:?}", ptr);
		assert!(text.starts_with("*Bit<u8>"));
	}
}
