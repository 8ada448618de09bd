/*! Reconciliation of differing word widths.

An algorithm that reads one range and writes another wants to work in units of
the destination's word width, but the source may be stored in narrower or wider
words. [`WordAdapter`] presents a slice of any word store as a sequence of
logical words of another width, without copying:

- **Identity**: the widths match, and logical word `i` is physical word `i`.
- **Combine**: the logical word is `ratio` times wider. Logical word `i` is
  assembled from physical words `i * ratio ..`, the first in the least
  significant position.
- **Split**: the logical word is `ratio` times narrower. Logical word `i` is
  the field of physical word `i / ratio` at sub-index `i % ratio`, counting from
  the least significant end.

In every layout, bit `n` of the storage is bit `n % W` of logical word `n / W`.
The reassembly is done with shifts on loaded values rather than by
reinterpreting memory, so it does not depend on the byte order of the target.
Widths are always powers of two, so the ratio is always an integer.

When the storage does not fill the last combined logical word, the missing
physical words read as zero and are never written.
!*/

use core::{
	fmt::{
		self,
		Debug,
		Formatter,
	},
	marker::PhantomData,
};

use tap::pipe::Pipe;

use crate::{
	index::BitIdx,
	store::{
		BitAccess,
		BitStore,
	},
	word::{
		self,
		BitWord,
	},
};

/// The relationship between a physical word width and a logical one.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Layout {
	/// The widths are equal.
	Identity,
	/// Each logical word spans `ratio` physical words.
	Combine {
		/// Physical words per logical word.
		ratio: u8,
	},
	/// Each physical word holds `ratio` logical words.
	Split {
		/// Logical words per physical word.
		ratio: u8,
	},
}

impl Layout {
	/// Computes the layout for viewing `P` words as `W` words.
	#[inline]
	pub fn of<P, W>() -> Self
	where
		P: BitWord,
		W: BitWord,
	{
		let (phys, logi) = (P::WIDTH, W::WIDTH);
		if phys == logi {
			Self::Identity
		}
		else if logi > phys {
			Self::Combine {
				ratio: logi / phys,
			}
		}
		else {
			Self::Split {
				ratio: phys / logi,
			}
		}
	}
}

/** A view of a slice of word stores as logical words of type `W`.

# Type Parameters

- `T`: The physical word store.
- `W`: The logical word width.
**/
pub struct WordAdapter<'a, T, W>
where
	T: BitStore,
	W: BitWord,
{
	/// The physical storage.
	words: &'a [T],
	/// The logical word type.
	_word: PhantomData<W>,
}

impl<'a, T, W> WordAdapter<'a, T, W>
where
	T: BitStore,
	W: BitWord,
{
	/// Creates an adapter over a slice.
	#[inline]
	pub fn new(words: &'a [T]) -> Self {
		Self {
			words,
			_word: PhantomData,
		}
	}

	/// Gets the layout that this adapter uses.
	#[inline]
	pub fn layout(&self) -> Layout {
		Layout::of::<T::Mem, W>()
	}

	/// Borrows the physical storage.
	#[inline]
	pub fn words(&self) -> &'a [T] {
		self.words
	}

	/// Counts the logical words, including a final combined word that is only
	/// partly backed by storage.
	#[inline]
	pub fn len(&self) -> usize {
		let len = self.words.len();
		match self.layout() {
			Layout::Identity => len,
			Layout::Combine { ratio } => {
				let ratio = ratio as usize;
				(len + ratio - 1) / ratio
			},
			Layout::Split { ratio } => len * ratio as usize,
		}
	}

	/// Tests whether the adapter has no logical words.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}

	/// Loads logical word `index`.
	///
	/// Any part of the logical word that lies outside the storage reads as
	/// zero.
	pub fn load(&self, index: usize) -> W {
		match self.layout() {
			Layout::Identity => self.physical(index).pipe(W::narrow),
			Layout::Combine { ratio } => {
				let ratio = ratio as usize;
				let base = index * ratio;
				(0 .. ratio).fold(0u64, |acc, k| {
					acc | self.physical(base + k)
						<< (k * <T::Mem as BitWord>::WIDTH as usize)
				})
				.pipe(W::narrow)
			},
			Layout::Split { ratio } => {
				let ratio = ratio as usize;
				let shift = (index % ratio) * W::WIDTH as usize;
				(self.physical(index / ratio) >> shift).pipe(W::narrow)
			},
		}
	}

	/// Loads physical word `index`, zero-extended, or zero when it does not
	/// exist.
	#[inline]
	fn physical(&self, index: usize) -> u64 {
		self.words
			.get(index)
			.map(|word| word.load_value().widen())
			.unwrap_or(0)
	}
}

impl<T, W> WordAdapter<'_, T, W>
where
	T: BitAccess,
	W: BitWord,
{
	/// Replaces logical word `index`.
	#[inline]
	pub fn store(&self, index: usize, value: W) {
		self.write_bits(index, W::ALL, value);
	}

	/// Writes the bits of `bits` selected by `mask` into logical word `index`,
	/// leaving every other bit of storage unchanged.
	pub fn write_bits(&self, index: usize, mask: W, bits: W) {
		if mask == W::ZERO {
			return;
		}
		match self.layout() {
			Layout::Identity => {
				let word = &self.words[index];
				let bits = T::Mem::narrow(bits.widen());
				if mask == W::ALL {
					word.store_value(bits);
				}
				else {
					word.write_bits(T::Mem::narrow(mask.widen()), bits);
				}
			},
			Layout::Combine { ratio } => {
				let ratio = ratio as usize;
				let base = index * ratio;
				for k in 0 .. ratio {
					let shift = k * <T::Mem as BitWord>::WIDTH as usize;
					let part = T::Mem::narrow(mask.widen() >> shift);
					if part == <T::Mem as funty::Integral>::ZERO {
						continue;
					}
					if let Some(word) = self.words.get(base + k) {
						word.write_bits(part, T::Mem::narrow(bits.widen() >> shift));
					}
				}
			},
			Layout::Split { ratio } => {
				let ratio = ratio as usize;
				let shift = (index % ratio) * W::WIDTH as usize;
				self.words[index / ratio].write_bits(
					T::Mem::narrow(mask.widen() << shift),
					T::Mem::narrow(bits.widen() << shift),
				);
			},
		}
	}
}

impl<T, W> Clone for WordAdapter<'_, T, W>
where
	T: BitStore,
	W: BitWord,
{
	#[inline]
	fn clone(&self) -> Self {
		*self
	}
}

impl<T, W> Copy for WordAdapter<'_, T, W>
where
	T: BitStore,
	W: BitWord,
{
}

impl<T, W> Debug for WordAdapter<'_, T, W>
where
	T: BitStore,
	W: BitWord,
{
	#[inline]
	fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
		fmt.debug_struct("WordAdapter")
			.field("layout", &self.layout())
			.field("words", &self.words.len())
			.finish()
	}
}

/** A bit position over a [`WordAdapter`], measured in logical words.

The range algorithms use this to read and write fields of up to one logical
word at arbitrary bit positions. A field that straddles two logical words is
assembled from both.
**/
pub struct AdaptedIter<'a, T, W>
where
	T: BitStore,
	W: BitWord,
{
	/// The logical view of the storage.
	adapter: WordAdapter<'a, T, W>,
	/// Index of the logical word containing the current bit.
	index: isize,
	/// Index of the current bit within its logical word.
	head: BitIdx<W>,
}

impl<'a, T, W> AdaptedIter<'a, T, W>
where
	T: BitStore,
	W: BitWord,
{
	/// Creates a cursor at an absolute bit position in a slice.
	#[inline]
	pub fn new(words: &'a [T], bit: isize) -> Self {
		let (index, head) = BitIdx::ZERO.offset(bit);
		Self {
			adapter: WordAdapter::new(words),
			index,
			head,
		}
	}

	/// Borrows the logical view.
	#[inline]
	pub fn adapter(&self) -> WordAdapter<'a, T, W> {
		self.adapter
	}

	/// Gets the index of the current logical word.
	#[inline]
	pub fn word_index(&self) -> isize {
		self.index
	}

	/// Gets the index of the current bit within its logical word.
	#[inline]
	pub fn head(&self) -> BitIdx<W> {
		self.head
	}

	/// Gets the position of the current logical word within its physical
	/// word. This is only ever nonzero in the split layout.
	#[inline]
	pub fn sub_index(&self) -> usize {
		match self.adapter.layout() {
			Layout::Split { ratio } => self.index as usize % ratio as usize,
			_ => 0,
		}
	}

	/// Moves the cursor by a signed number of bits.
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
	#[inline]
	pub fn distance(self, other: Self) -> isize {
		(other.index - self.index) * W::WIDTH as isize + other.head.value() as isize
			- self.head.value() as isize
	}

	/// Reads `len` bits starting at the cursor, right-aligned in the returned
	/// word. `len` may be at most `W::WIDTH`.
	pub fn read_bits(&self, len: u8) -> W {
		debug_assert!(len <= W::WIDTH, "cannot read {} bits into a word", len);
		if len == 0 {
			return W::ZERO;
		}
		let index = self.index as usize;
		let head = self.head.value();
		let mut out = word::lsr(self.adapter.load(index), head as u32);
		if head + len > W::WIDTH {
			let next = self.adapter.load(index + 1);
			out = out | word::lsl(next, (W::WIDTH - head) as u32);
		}
		out & word::low_mask::<W>(len)
	}

	/// Reads one full logical word starting at the cursor.
	#[inline]
	pub fn read_word(&self) -> W {
		self.read_bits(W::WIDTH)
	}
}

impl<T, W> AdaptedIter<'_, T, W>
where
	T: BitAccess,
	W: BitWord,
{
	/// Writes the low `len` bits of `bits` starting at the cursor, leaving all
	/// other bits of storage unchanged.
	pub fn write_bits(&self, len: u8, bits: W) {
		debug_assert!(len <= W::WIDTH, "cannot write {} bits from a word", len);
		if len == 0 {
			return;
		}
		let index = self.index as usize;
		let head = self.head.value();
		let near = len.min(W::WIDTH - head);
		self.adapter.write_bits(
			index,
			word::field_mask(head, near),
			word::lsl(bits, head as u32),
		);
		if near < len {
			self.adapter.write_bits(
				index + 1,
				word::low_mask::<W>(len - near),
				word::lsr(bits, near as u32),
			);
		}
	}

	/// Writes one full logical word starting at the cursor.
	#[inline]
	pub fn write_word(&self, bits: W) {
		self.write_bits(W::WIDTH, bits);
	}
}

impl<T, W> Clone for AdaptedIter<'_, T, W>
where
	T: BitStore,
	W: BitWord,
{
	#[inline]
	fn clone(&self) -> Self {
		*self
	}
}

impl<T, W> Copy for AdaptedIter<'_, T, W>
where
	T: BitStore,
	W: BitWord,
{
}

impl<T, W> Debug for AdaptedIter<'_, T, W>
where
	T: BitStore,
	W: BitWord,
{
	#[inline]
	fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
		fmt.debug_struct("AdaptedIter")
			.field("adapter", &self.adapter)
			.field("index", &self.index)
			.field("head", &self.head)
			.finish()
	}
}
