//! Randomized properties of the range algorithms and the arithmetic, checked
//! across word widths and misalignments.

use std::cell::Cell;

use bitcursor::{
	prelude::*,
	store,
};
use rand::{
	rngs::StdRng,
	Rng,
	SeedableRng,
};

fn random_words<W>(rng: &mut StdRng, n: usize) -> Vec<W>
where W: BitWord {
	(0 .. n).map(|_| W::narrow(rng.gen())).collect()
}

/// Builds the reference model: one `bool` per bit, least significant first.
fn model<T>(words: &[T]) -> Vec<bool>
where T: BitStore {
	let (first, last) = BitIter::span(words, words.len() * T::Mem::WIDTH as usize);
	first.to(last).map(bool::from).collect()
}

fn copy_then_equal<S, D>(seed: u64)
where
	S: BitWord + BitStore<Mem = S>,
	D: BitWord + BitStore<Mem = D>,
	Cell<D>: BitAccess<Mem = D>,
{
	let mut rng = StdRng::seed_from_u64(seed);
	let width = S::WIDTH.max(D::WIDTH) as usize;
	let src = random_words::<S>(&mut rng, 6 * width / S::WIDTH as usize);
	let offsets = |w: u8| {
		let w = w as usize;
		[0, 1, 3, w / 2, w - 1]
	};
	for src_off in offsets(S::WIDTH) {
		for dst_off in offsets(D::WIDTH) {
			for len in (0 ..= 4 * width + 3).step_by(3).chain(Some(4 * width - 1)) {
				let mut raw = random_words::<D>(&mut rng, 6 * width / D::WIDTH as usize);
				let before = model(&raw);
				let dst = store::from_mut_slice(&mut raw);
				let first = BitIter::at(&src[..], src_off);
				let last = first + len as isize;
				let d_first = BitIter::at(dst, dst_off);

				let d_last = copy(first, last, d_first);
				assert_eq!(d_last - d_first, len as isize);
				assert!(equal(first, last, d_first));
				assert!(equal(d_first, d_last, first));

				let after = model(dst);
				let expect = model(&src[..]);
				assert_eq!(after[dst_off .. dst_off + len], expect[src_off .. src_off + len]);
				assert_eq!(after[.. dst_off], before[.. dst_off]);
				assert_eq!(after[dst_off + len ..], before[dst_off + len ..]);
			}
		}
	}
}

#[test]
fn round_trip_same_width() {
	copy_then_equal::<u8, u8>(1);
	copy_then_equal::<u16, u16>(2);
	copy_then_equal::<u32, u32>(3);
	copy_then_equal::<u64, u64>(4);
}

#[test]
fn round_trip_mixed_width() {
	copy_then_equal::<u8, u32>(5);
	copy_then_equal::<u32, u8>(6);
	copy_then_equal::<u16, u64>(7);
	copy_then_equal::<u64, u16>(8);
	copy_then_equal::<usize, u8>(9);
}

#[test]
fn adapter_transparency() {
	let mut rng = StdRng::seed_from_u64(10);
	let bytes = random_words::<u8>(&mut rng, 16);

	let mut wide = [0u32; 4];
	let cells = store::from_mut_slice(&mut wide);
	let (first, last) = BitIter::span(&bytes[..], 128);
	copy(first, last, BitIter::from_slice(cells));
	let (w_first, w_last) = BitIter::span(cells, 128);
	assert!(equal(w_first, w_last, first));
	assert!(equal(first, last, w_first));
	assert_eq!(
		cells[0].get(),
		u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
	);

	let mut narrow = [0u8; 16];
	let cells = store::from_mut_slice(&mut narrow);
	let (n_first, n_last) = BitIter::span(cells, 128);
	copy(w_first, w_last, n_first);
	assert!(equal(n_first, n_last, w_first));
	assert!(equal(w_first, w_last, n_first));
	assert_eq!(narrow[..], bytes[..]);
}

#[test]
fn count_matches_model() {
	let mut rng = StdRng::seed_from_u64(11);
	let words = random_words::<u32>(&mut rng, 5);
	let bits = model(&words[..]);
	for _ in 0 .. 2_000 {
		let a = rng.gen_range(0 ..= bits.len());
		let b = rng.gen_range(a ..= bits.len());
		let first = BitIter::at(&words[..], a);
		let last = BitIter::at(&words[..], b);
		let ones = bits[a .. b].iter().filter(|&&bit| bit).count();
		assert_eq!(count(first, last, true), ones);
		assert_eq!(count(first, last, false), (b - a) - ones);
	}
}

#[test]
fn count_msb_matches_model() {
	let mut rng = StdRng::seed_from_u64(12);
	for _ in 0 .. 500 {
		let len = rng.gen_range(0 ..= 200usize);
		let k = rng.gen_range(0 ..= len);
		let value = rng.gen::<bool>();
		let raw = (0 .. 4).map(|_| Cell::new(rng.gen::<u64>())).collect::<Vec<_>>();
		let start = rng.gen_range(0 .. 40usize);
		let first = BitIter::at(&raw[..], start);
		let last = first + len as isize;
		fill(last - k as isize, last, value);
		if k < len {
			(last - k as isize - 1).bit().assign(!value);
		}
		assert_eq!(count_msb(first, last, value), k);
	}
}

fn add_sub_inverse<W>(seed: u64)
where
	W: BitWord + BitStore<Mem = W>,
	Cell<W>: BitAccess<Mem = W>,
{
	let mut rng = StdRng::seed_from_u64(seed);
	let width = W::WIDTH as usize;
	for &scalar in &[W::ZERO, W::LSB, W::ALL] {
		for len in (1 .. 4 * width).filter(|len| len % width != 0) {
			let raw = random_words::<W>(&mut rng, 5)
				.into_iter()
				.map(Cell::new)
				.collect::<Vec<_>>();
			let original = model(&raw[..]);
			let first = BitIter::at(&raw[..], rng.gen_range(0 .. width));
			let last = first + len as isize;

			let carry = addition(first, last, first, scalar);
			let borrow = subtraction(first, last, first, scalar);
			assert_eq!(carry, borrow);
			assert_eq!(model(&raw[..]), original);
		}
	}
}

#[test]
fn addition_inverse() {
	add_sub_inverse::<u8>(13);
	add_sub_inverse::<u16>(14);
	add_sub_inverse::<u32>(15);
	add_sub_inverse::<u64>(16);
}

#[test]
fn twos_complement_negation_within_a_word() {
	for len in 1 .. 8usize {
		let modulus = 1u16 << len;
		for scalar in 0 .. modulus {
			let negation = ((modulus - scalar) % modulus) as u8;
			let data = [Cell::new(0xA5u8), Cell::new(0x5A)];
			let first = BitIter::at(&data, 3);
			let last = first + len as isize;
			addition(first, last, first, scalar as u8);
			addition(first, last, first, negation);
			assert_eq!([data[0].get(), data[1].get()], [0xA5, 0x5A]);
		}
	}
}

/// Reads a range of at most 127 bits as an integer.
fn value<T>(first: BitIter<T>, last: BitIter<T>) -> u128
where T: BitStore {
	first
		.to(last)
		.rev()
		.fold(0u128, |acc, bit| acc << 1 | bool::from(bit) as u128)
}

/// Adding `s` and then its negation modulo `2^len` restores the range, for
/// ranges that span several words and end partway through one.
fn negation_inverse<W>(seed: u64)
where
	W: BitWord + BitStore<Mem = W>,
	Cell<W>: BitAccess<Mem = W>,
{
	let mut rng = StdRng::seed_from_u64(seed);
	let width = W::WIDTH as usize;
	for &scalar in &[W::ZERO, W::LSB, W::ALL] {
		let s = scalar.widen() as u128;
		for len in (width + 1 .. 120).filter(|len| len % width != 0) {
			let raw = random_words::<W>(&mut rng, 128 / width + 2)
				.into_iter()
				.map(Cell::new)
				.collect::<Vec<_>>();
			let original = model(&raw[..]);
			let first = BitIter::at(&raw[..], rng.gen_range(0 .. width));
			let last = first + len as isize;
			let modulus = 1u128 << len;
			let x = value(first, last);

			let carry = addition(first, last, first, scalar);
			let sum = value(first, last);
			assert_eq!(sum, (x + s) % modulus);
			assert_eq!(carry, x + s >= modulus);

			//  Subtracting `s` is adding `2^len - s`, which carries out
			//  exactly when the subtraction does not borrow.
			let borrow = subtraction(first, last, first, scalar);
			assert_eq!(value(first, last), x);
			if s != 0 {
				assert_eq!(!borrow, sum + (modulus - s) >= modulus);
			}
			else {
				assert!(!borrow);
			}
			assert_eq!(model(&raw[..]), original);
		}
	}
}

#[test]
fn negation_inverse_across_words() {
	negation_inverse::<u8>(22);
	negation_inverse::<u16>(23);
	negation_inverse::<u32>(24);
}

fn div_mul_inverse<W>(seed: u64)
where
	W: BitWord + BitStore<Mem = W>,
	Cell<W>: BitAccess<Mem = W>,
{
	let mut rng = StdRng::seed_from_u64(seed);
	let width = W::WIDTH as usize;
	let two = W::LSB + W::LSB;
	for &scalar in &[W::LSB, two, W::ALL] {
		for len in 1 .. 4 * width + 3 {
			let raw = random_words::<W>(&mut rng, 6)
				.into_iter()
				.map(Cell::new)
				.collect::<Vec<_>>();
			let original = model(&raw[..]);
			let first = BitIter::at(&raw[..], rng.gen_range(0 .. width));
			let last = first + len as isize;

			let rem = division(first, last, first, scalar);
			assert!(rem < scalar);
			assert_eq!(multiplication(first, last, first, scalar), W::ZERO);
			assert!(!addition(first, last, first, rem));
			assert_eq!(model(&raw[..]), original);
		}
	}
}

#[test]
fn division_inverse() {
	div_mul_inverse::<u8>(17);
	div_mul_inverse::<u16>(18);
	div_mul_inverse::<u32>(19);
	div_mul_inverse::<u64>(20);
}

#[test]
fn iterator_law() {
	let mut rng = StdRng::seed_from_u64(21);
	let words = [0u16; 8];
	for _ in 0 .. 1_000 {
		let a = rng.gen_range(0 ..= 128usize);
		let b = rng.gen_range(a ..= 128usize);
		let x = BitIter::at(&words, a);
		let y = BitIter::at(&words, b);
		assert_eq!(x.distance(y), y - x);
		assert!(y - x >= 0);
		assert_eq!(x + (y - x), y);
		assert_eq!(x.to(y).len(), b - a);
	}
}
