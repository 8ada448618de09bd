/*! Native carry and double-width arithmetic.

Add-with-carry and subtract-with-borrow use the `adc`/`sbb` intrinsics on
`x86_64` for 32- and 64-bit words, and a widening sum everywhere else. Wide
multiply and divide widen into the next integer size, which on 64-bit words is
`u128`; the compiler lowers this to the hardware multiply and, where the target
has one, the hardware divide.
!*/

use crate::word::BitWord;

/// Adds `a`, `b`, and a carry-in using native support.
#[inline]
pub fn add_with_carry<W>(carry: bool, a: W, b: W) -> (W, bool)
where W: BitWord {
	W::add_carry_native(carry, a, b)
}

/// Subtracts `b` and a borrow-in from `a` using native support.
#[inline]
pub fn sub_with_borrow<W>(borrow: bool, a: W, b: W) -> (W, bool)
where W: BitWord {
	W::sub_borrow_native(borrow, a, b)
}

/// Multiplies into the next-wider integer and splits the product.
#[inline]
pub fn mul_wide<W>(a: W, b: W) -> (W, W)
where W: BitWord {
	W::mul_wide_native(a, b)
}

/// Divides a double-width numerator using the next-wider integer.
#[inline]
pub fn div_wide<W>(hi: W, lo: W, divisor: W) -> (W, W)
where W: BitWord {
	W::div_wide_native(hi, lo, divisor)
}

macro_rules! widening {
	($($add:ident, $sub:ident: $t:ty => $wide:ty);+ $(;)?) => { $(
		#[inline(always)]
		pub(crate) fn $add(carry: bool, a: $t, b: $t) -> ($t, bool) {
			let sum = a as $wide + b as $wide + carry as $wide;
			(sum as $t, (sum >> <$t>::BITS) != 0)
		}

		#[inline(always)]
		pub(crate) fn $sub(borrow: bool, a: $t, b: $t) -> ($t, bool) {
			let diff = (a as $wide)
				.wrapping_sub(b as $wide)
				.wrapping_sub(borrow as $wide);
			(diff as $t, (diff >> <$t>::BITS) != 0)
		}
	)+ };
}

#[cfg(target_arch = "x86_64")]
macro_rules! flagged {
	($($add:ident, $sub:ident: $t:ty => $adc:ident, $sbb:ident);+ $(;)?) => { $(
		#[inline(always)]
		#[allow(unused_unsafe)]
		pub(crate) fn $add(carry: bool, a: $t, b: $t) -> ($t, bool) {
			let mut sum = 0;
			let carry = unsafe { core::arch::x86_64::$adc(carry as u8, a, b, &mut sum) };
			(sum, carry != 0)
		}

		#[inline(always)]
		#[allow(unused_unsafe)]
		pub(crate) fn $sub(borrow: bool, a: $t, b: $t) -> ($t, bool) {
			let mut diff = 0;
			let borrow = unsafe { core::arch::x86_64::$sbb(borrow as u8, a, b, &mut diff) };
			(diff, borrow != 0)
		}
	)+ };
}

widening! {
	add_u8, sub_u8: u8 => u16;
	add_u16, sub_u16: u16 => u32;
}

#[cfg(target_arch = "x86_64")]
flagged! {
	add_u32, sub_u32: u32 => _addcarry_u32, _subborrow_u32;
	add_u64, sub_u64: u64 => _addcarry_u64, _subborrow_u64;
}

#[cfg(not(target_arch = "x86_64"))]
widening! {
	add_u32, sub_u32: u32 => u64;
	add_u64, sub_u64: u64 => u128;
}

#[cfg(target_pointer_width = "32")]
#[inline(always)]
pub(crate) fn add_usize(carry: bool, a: usize, b: usize) -> (usize, bool) {
	let (sum, carry) = add_u32(carry, a as u32, b as u32);
	(sum as usize, carry)
}

#[cfg(target_pointer_width = "32")]
#[inline(always)]
pub(crate) fn sub_usize(borrow: bool, a: usize, b: usize) -> (usize, bool) {
	let (diff, borrow) = sub_u32(borrow, a as u32, b as u32);
	(diff as usize, borrow)
}

#[cfg(target_pointer_width = "64")]
#[inline(always)]
pub(crate) fn add_usize(carry: bool, a: usize, b: usize) -> (usize, bool) {
	let (sum, carry) = add_u64(carry, a as u64, b as u64);
	(sum as usize, carry)
}

#[cfg(target_pointer_width = "64")]
#[inline(always)]
pub(crate) fn sub_usize(borrow: bool, a: usize, b: usize) -> (usize, bool) {
	let (diff, borrow) = sub_u64(borrow, a as u64, b as u64);
	(diff as usize, borrow)
}
