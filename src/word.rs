/*! Description of register words.

This module describes the unsigned integers used as backing storage for bit
sequences, and provides the small set of pure bit-twiddling functions that the
rest of the crate builds on: masks, logical shifts that are defined for every
shift distance, masked blends, bit reversal, and field extraction.

None of the functions in this module touch memory. They operate only on values
already loaded into registers.
!*/

use core::{
	fmt::{
		Binary,
		Debug,
		LowerHex,
	},
	mem,
	ops::{
		Add,
		BitAnd,
		BitOr,
		BitXor,
		Div,
		Mul,
		Not,
		Rem,
		Shl,
		Shr,
		Sub,
	},
};

use funty::Unsigned;

use radium::marker::BitOps;

/** Description of a register word.

This trait provides the width information and the widening arithmetic that the
bit cursors and the range algorithms need from a storage word. It has no bearing
on how values are loaded from or stored to memory; that is governed by the
[`BitStore`] family.

This trait cannot be implemented outside this crate. It is implemented for
`u8`, `u16`, `u32`, `u64`, and `usize`.

[`BitStore`]: crate::store::BitStore
**/
pub trait BitWord:
	Unsigned
	+ BitOps
	+ Copy
	+ Binary
	+ Debug
	+ Default
	+ LowerHex
	+ Add<Self, Output = Self>
	+ Sub<Self, Output = Self>
	+ Mul<Self, Output = Self>
	+ Div<Self, Output = Self>
	+ Rem<Self, Output = Self>
	+ BitAnd<Self, Output = Self>
	+ BitOr<Self, Output = Self>
	+ BitXor<Self, Output = Self>
	+ Not<Output = Self>
	+ Shl<u32, Output = Self>
	+ Shr<u32, Output = Self>
	+ seal::Sealed
{
	/// The bit width of the word.
	const WIDTH: u8 = mem::size_of::<Self>() as u8 * 8;
	/// The number of bits required to store an index in the range
	/// `0 .. WIDTH`.
	const INDX: u8 = Self::WIDTH.trailing_zeros() as u8;
	/// A mask over all bits that can be used as an index within the word.
	const MASK: u8 = Self::WIDTH - 1;

	/// The value with all of its bits set to `1`.
	const ALL: Self;
	/// The value with only its least significant bit set.
	const LSB: Self;
	/// The value with only its most significant bit set.
	const MSB: Self;

	/// Zero-extends the word into a `u64`.
	fn widen(self) -> u64;

	/// Truncates a `u64` into the word, keeping its low `WIDTH` bits.
	fn narrow(value: u64) -> Self;

	/// Adds two words and a carry-in using the widest native support the
	/// target offers.
	fn add_carry_native(carry: bool, a: Self, b: Self) -> (Self, bool);

	/// Subtracts `b` and a borrow-in from `a` using the widest native support
	/// the target offers.
	fn sub_borrow_native(borrow: bool, a: Self, b: Self) -> (Self, bool);

	/// Multiplies two words into a double-width product, as `(low, high)`.
	fn mul_wide_native(a: Self, b: Self) -> (Self, Self);

	/// Divides the double-width value `hi:lo` by `divisor`, as
	/// `(quotient, remainder)`.
	///
	/// When `hi >= divisor` the quotient does not fit in one word, and this
	/// returns `(ALL, ALL)`.
	fn div_wide_native(hi: Self, lo: Self, divisor: Self) -> (Self, Self);
}

macro_rules! word {
	($($t:ty => $wide:ty, $adc:ident, $sbb:ident);+ $(;)?) => { $(
		impl BitWord for $t {
			const ALL: Self = !0;
			const LSB: Self = 1;
			const MSB: Self = 1 << (<Self as BitWord>::WIDTH - 1);

			#[inline(always)]
			fn widen(self) -> u64 {
				self as u64
			}

			#[inline(always)]
			fn narrow(value: u64) -> Self {
				value as Self
			}

			#[inline(always)]
			fn add_carry_native(carry: bool, a: Self, b: Self) -> (Self, bool) {
				crate::carry::native::$adc(carry, a, b)
			}

			#[inline(always)]
			fn sub_borrow_native(borrow: bool, a: Self, b: Self) -> (Self, bool) {
				crate::carry::native::$sbb(borrow, a, b)
			}

			#[inline]
			fn mul_wide_native(a: Self, b: Self) -> (Self, Self) {
				let prod = a as $wide * b as $wide;
				(prod as Self, (prod >> <Self as BitWord>::WIDTH) as Self)
			}

			#[inline]
			fn div_wide_native(hi: Self, lo: Self, divisor: Self) -> (Self, Self) {
				if hi >= divisor {
					return (!0, !0);
				}
				let num = ((hi as $wide) << <Self as BitWord>::WIDTH) | lo as $wide;
				let div = divisor as $wide;
				((num / div) as Self, (num % div) as Self)
			}
		}

		impl seal::Sealed for $t {}
	)+ };
}

word! {
	u8 => u16, add_u8, sub_u8;
	u16 => u32, add_u16, sub_u16;
	u32 => u64, add_u32, sub_u32;
	u64 => u128, add_u64, sub_u64;
}

#[cfg(target_pointer_width = "32")]
word!(usize => u64, add_usize, sub_usize);

#[cfg(target_pointer_width = "64")]
word!(usize => u128, add_usize, sub_usize);

/// Returns the bit width of a word type as a `usize`, for counting.
#[inline(always)]
pub fn bit_width<W>() -> usize
where W: BitWord {
	W::WIDTH as usize
}

/// Produces a mask with the low `bits` bits set.
///
/// `bits` may be anywhere in `0 ..= WIDTH`; both ends are handled without
/// overflowing the shift.
#[inline]
pub fn low_mask<W>(bits: u8) -> W
where W: BitWord {
	debug_assert!(bits <= W::WIDTH, "mask of {} bits exceeds word", bits);
	if bits == 0 {
		W::ZERO
	}
	else {
		W::ALL >> (W::WIDTH - bits) as u32
	}
}

/// Produces a mask with the high `bits` bits set.
#[inline]
pub fn high_mask<W>(bits: u8) -> W
where W: BitWord {
	debug_assert!(bits <= W::WIDTH, "mask of {} bits exceeds word", bits);
	if bits == 0 {
		W::ZERO
	}
	else {
		W::ALL << (W::WIDTH - bits) as u32
	}
}

/// Produces a mask of `len` bits starting at bit `start`.
#[inline]
pub fn field_mask<W>(start: u8, len: u8) -> W
where W: BitWord {
	debug_assert!(
		start as usize + len as usize <= W::WIDTH as usize,
		"field {}+{} exceeds word",
		start,
		len
	);
	lsl(low_mask::<W>(len), start as u32)
}

/// Logical left shift, producing zero when `n >= WIDTH`.
#[inline]
pub fn lsl<W>(word: W, n: u32) -> W
where W: BitWord {
	if n >= W::WIDTH as u32 { W::ZERO } else { word << n }
}

/// Logical right shift, producing zero when `n >= WIDTH`.
#[inline]
pub fn lsr<W>(word: W, n: u32) -> W
where W: BitWord {
	if n >= W::WIDTH as u32 { W::ZERO } else { word >> n }
}

/// Takes the bits of `b` where `mask` is set, and the bits of `a` elsewhere.
#[inline]
pub fn bit_blend<W>(a: W, b: W, mask: W) -> W
where W: BitWord {
	a ^ ((a ^ b) & mask)
}

/// Replaces `len` bits of `a`, starting at `start`, with the same bits of `b`.
#[inline]
pub fn bit_blend_at<W>(a: W, b: W, start: u8, len: u8) -> W
where W: BitWord {
	bit_blend(a, b, field_mask(start, len))
}

/// Reverses the order of the bits in a word.
#[inline]
pub fn bit_swap<W>(word: W) -> W
where W: BitWord {
	W::narrow(word.widen().reverse_bits() >> (64 - W::WIDTH as u32))
}

/// Extracts `len` bits of `word` starting at `start`, right-aligned.
#[inline]
pub fn bit_extract<W>(word: W, start: u8, len: u8) -> W
where W: BitWord {
	lsr(word, start as u32) & low_mask::<W>(len)
}

/// Exchanges the bits selected by `mask` between two words.
#[inline]
pub fn bit_exchange<W>(a: W, b: W, mask: W) -> (W, W)
where W: BitWord {
	let diff = (a ^ b) & mask;
	(a ^ diff, b ^ diff)
}

#[doc(hidden)]
mod seal {
	#[doc(hidden)]
	pub trait Sealed {}
}
