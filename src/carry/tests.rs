#![cfg(test)]

use rand::{
	rngs::StdRng,
	Rng,
	SeedableRng,
};

use super::{
	native,
	portable,
};
use crate::word::BitWord;

#[test]
fn add_sub_exhaustive_u8() {
	for a in 0 ..= u8::MAX {
		for b in 0 ..= u8::MAX {
			for &c in &[false, true] {
				let wide = a as u16 + b as u16 + c as u16;
				let expected = (wide as u8, wide > 0xFF);
				assert_eq!(native::add_with_carry(c, a, b), expected);
				assert_eq!(portable::add_with_carry(c, a, b), expected);

				let wide = (a as i16) - (b as i16) - (c as i16);
				let expected = (wide as u8, wide < 0);
				assert_eq!(native::sub_with_borrow(c, a, b), expected);
				assert_eq!(portable::sub_with_borrow(c, a, b), expected);
			}
		}
	}
}

#[test]
fn mul_exhaustive_u8() {
	for a in 0 ..= u8::MAX {
		for b in 0 ..= u8::MAX {
			let prod = a as u16 * b as u16;
			let expected = (prod as u8, (prod >> 8) as u8);
			assert_eq!(native::mul_wide(a, b), expected);
			assert_eq!(portable::mul_wide(a, b), expected);
		}
	}
}

#[test]
fn div_sweep_u8() {
	for divisor in 1 ..= u8::MAX {
		for hi in 0 .. divisor {
			for lo in (0 ..= u8::MAX).step_by(3) {
				let num = (hi as u16) << 8 | lo as u16;
				let expected =
					((num / divisor as u16) as u8, (num % divisor as u16) as u8);
				assert_eq!(native::div_wide(hi, lo, divisor), expected);
				assert_eq!(portable::div_wide(hi, lo, divisor), expected);
			}
		}
	}
}

#[test]
fn div_overflow_sentinel() {
	assert_eq!(native::div_wide(5u8, 0, 5), (0xFF, 0xFF));
	assert_eq!(portable::div_wide(5u8, 0, 5), (0xFF, 0xFF));
	assert_eq!(native::div_wide(0u32, 7, 0), (!0, !0));
	assert_eq!(portable::div_wide(0u32, 7, 0), (!0, !0));
	assert_eq!(native::div_wide(!0u64, !0, 1), (!0, !0));
	assert_eq!(portable::div_wide(!0u64, !0, 1), (!0, !0));
}

/// Checks native against portable for random operands of one width.
fn agree<W>(rng: &mut StdRng, rounds: usize)
where W: BitWord {
	for _ in 0 .. rounds {
		let a = W::narrow(rng.gen());
		let b = W::narrow(rng.gen());
		let c = rng.gen::<bool>();
		assert_eq!(
			native::add_with_carry(c, a, b),
			portable::add_with_carry(c, a, b)
		);
		assert_eq!(
			native::sub_with_borrow(c, a, b),
			portable::sub_with_borrow(c, a, b)
		);
		assert_eq!(native::mul_wide(a, b), portable::mul_wide(a, b));

		//  Shrink the divisor some of the time to exercise normalization.
		let shift = rng.gen_range(0 .. W::WIDTH as u32);
		let divisor = (b >> shift) | W::LSB;
		let hi = a % divisor;
		assert_eq!(
			native::div_wide(hi, b, divisor),
			portable::div_wide(hi, b, divisor)
		);
	}
}

#[test]
fn native_matches_portable() {
	let mut rng = StdRng::seed_from_u64(0x5EED_CA55);
	agree::<u16>(&mut rng, 20_000);
	agree::<u32>(&mut rng, 20_000);
	agree::<u64>(&mut rng, 20_000);
	agree::<usize>(&mut rng, 5_000);
}

#[test]
fn div_wide_u64_reference() {
	let mut rng = StdRng::seed_from_u64(64);
	for _ in 0 .. 10_000 {
		let divisor: u64 = rng.gen::<u64>() >> rng.gen_range(0 .. 64) | 1;
		let hi = rng.gen::<u64>() % divisor;
		let lo: u64 = rng.gen();
		let num = (hi as u128) << 64 | lo as u128;
		let expected =
			((num / divisor as u128) as u64, (num % divisor as u128) as u64);
		assert_eq!(portable::div_wide(hi, lo, divisor), expected);
		assert_eq!(super::div_wide(hi, lo, divisor), expected);
	}
}

#[test]
fn dispatch() {
	assert_eq!(super::add_with_carry(true, 0xFFu8, 0), (0, true));
	assert_eq!(super::sub_with_borrow(false, 0u16, 1), (0xFFFF, true));
	assert_eq!(super::mul_wide(!0u32, !0), (1, !0 - 1));
	assert_eq!(super::div_wide(1u8, 0, 0xFF), (1, 1));
}
