/*! Memory access to word storage.

The bit cursors never hold a reference to a bare word that they intend to
modify. Instead, they borrow a word *store*: a type that can load the word value
through a shared reference, and, for writable stores, modify it through that
same shared reference. This lets one storage region serve as the source and the
destination of an in-place algorithm, and lets two destination ranges that share
a boundary word coexist.

- Plain words (`u8` through `usize`) are read-only stores.
- `Cell<W>` is a writable store for single-threaded use. [`from_mut_slice`]
  converts a `&mut [W]` into a `&[Cell<W>]` at no cost.
- With the `atomic` feature, the `AtomicW` types are writable stores that may be
  shared across threads.

Every write is a masked read-modify-write that touches only the bits its caller
selects, so writes to disjoint bit ranges never disturb each other.
!*/

use core::{
	cell::Cell,
	fmt::Debug,
	sync::atomic::Ordering,
};

use radium::Radium;

use crate::word::{
	self,
	BitWord,
};

/** A word of memory that the bit cursors can read.

This trait is sealed, and is implemented for the bare words, for `Cell`s of
words, and (with the `atomic` feature) for the atomic words.
**/
pub trait BitStore: Debug + seal::Sealed {
	/// The register type loaded from this store.
	type Mem: BitWord;

	/// Loads the current value of the word.
	fn load_value(&self) -> Self::Mem;

	/// Tests a single bit of the word.
	#[inline]
	fn test_bits(&self, mask: Self::Mem) -> bool {
		self.load_value() & mask != <Self::Mem as funty::Integral>::ZERO
	}
}

/** A word of memory that the bit cursors can modify through a shared
reference.

This is implemented for every [`BitStore`] that also implements [`Radium`], and
all of its methods operate through the `Radium` interface with relaxed
ordering. The methods only affect the bits selected by their `mask` argument.
**/
pub trait BitAccess: BitStore {
	/// Replaces the entire word.
	fn store_value(&self, value: Self::Mem);

	/// Clears every bit selected by `mask` to `0`.
	fn clear_bits(&self, mask: Self::Mem);

	/// Sets every bit selected by `mask` to `1`.
	fn set_bits(&self, mask: Self::Mem);

	/// Inverts every bit selected by `mask`.
	fn invert_bits(&self, mask: Self::Mem);

	/// Writes the bits of `bits` selected by `mask` into the word, leaving the
	/// unselected bits of the word unchanged.
	#[inline]
	fn write_bits(&self, mask: Self::Mem, bits: Self::Mem) {
		self.clear_bits(mask & !bits);
		self.set_bits(mask & bits);
	}
}

impl<R> BitAccess for R
where R: BitStore + Radium<Item = <R as BitStore>::Mem>
{
	#[inline]
	fn store_value(&self, value: Self::Mem) {
		Radium::store(self, value, Ordering::Relaxed);
	}

	#[inline]
	fn clear_bits(&self, mask: Self::Mem) {
		Radium::fetch_and(self, !mask, Ordering::Relaxed);
	}

	#[inline]
	fn set_bits(&self, mask: Self::Mem) {
		Radium::fetch_or(self, mask, Ordering::Relaxed);
	}

	#[inline]
	fn invert_bits(&self, mask: Self::Mem) {
		Radium::fetch_xor(self, mask, Ordering::Relaxed);
	}
}

macro_rules! store {
	($($t:ty),+ $(,)?) => { $(
		impl BitStore for $t {
			type Mem = $t;

			#[inline(always)]
			fn load_value(&self) -> Self::Mem {
				*self
			}
		}

		impl seal::Sealed for $t {}
	)+ };
}

store!(u8, u16, u32, u64, usize);

impl<W> BitStore for Cell<W>
where W: BitWord
{
	type Mem = W;

	#[inline(always)]
	fn load_value(&self) -> Self::Mem {
		self.get()
	}
}

impl<W> seal::Sealed for Cell<W> where W: BitWord {}

#[cfg(feature = "atomic")]
macro_rules! atomic {
	($($w:tt => $a:ident => $t:ty),+ $(,)?) => { $(
		radium::if_atomic! { if atomic($w) {
			impl BitStore for core::sync::atomic::$a {
				type Mem = $t;

				#[inline(always)]
				fn load_value(&self) -> Self::Mem {
					self.load(Ordering::Relaxed)
				}
			}

			impl seal::Sealed for core::sync::atomic::$a {}
		} }
	)+ };
}

#[cfg(feature = "atomic")]
atomic! {
	8 => AtomicU8 => u8,
	16 => AtomicU16 => u16,
	32 => AtomicU32 => u32,
	64 => AtomicU64 => u64,
	size => AtomicUsize => usize,
}

/** Views an exclusively borrowed word slice as a slice of cells.

The returned slice can be used as both the source and the destination of the
range algorithms, because every store through a `Cell` goes through a shared
reference.
**/
#[inline]
pub fn from_mut_slice<W>(words: &mut [W]) -> &[Cell<W>]
where W: BitWord {
	Cell::from_mut(words).as_slice_of_cells()
}

/// Copies the values out of a slice of stores, for inspection.
#[inline]
pub fn load_all<T>(stores: &[T]) -> impl '_ + Iterator<Item = T::Mem>
where T: BitStore {
	stores.iter().map(BitStore::load_value)
}

/// Writes `len` low bits of `bits` into `store`, starting at bit `start`.
#[inline]
pub fn write_field<T>(store: &T, start: u8, len: u8, bits: T::Mem)
where T: BitAccess {
	if len == 0 {
		return;
	}
	let mask = word::field_mask::<T::Mem>(start, len);
	store.write_bits(mask, word::lsl(bits, start as u32));
}

#[doc(hidden)]
mod seal {
	#[doc(hidden)]
	pub trait Sealed {}
}
