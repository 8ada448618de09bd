//! Worked examples of the range algorithms and the arithmetic.

use std::cell::Cell;

use bitcursor::{
	prelude::*,
	store,
};

/// Writes `text` into `cells` with its first character at the most significant
/// end of the range.
fn load_msb_first<'a>(
	cells: &'a [Cell<u8>],
	text: &str,
) -> (BitIter<'a, Cell<u8>>, BitIter<'a, Cell<u8>>) {
	let (first, last) = BitIter::span(cells, text.len());
	for (bit, ch) in first.to(last).rev().zip(text.chars()) {
		bit.assign(ch == '1');
	}
	(first, last)
}

#[test]
fn fifteen_bit_pattern() {
	let cells = [Cell::new(0u8), Cell::new(0)];
	let (first, last) = load_msb_first(&cells, "111100001111000");

	assert_eq!(count_msb(first, last, true), 4);
	assert_eq!(count_msb(first, last, false), 0);
	assert_eq!(count(first, last, true), 8);
	assert_eq!(count(first, last, false), 7);
	//  The bit above the range is left alone.
	assert!(!BitIter::at(&cells[..], 15).read());
}

#[test]
fn addition_at_word_boundaries() {
	let data = [Cell::new(0x0Fu8), Cell::new(0x00)];
	let (first, last) = BitIter::span(&data[..], 16);
	assert!(!addition(first, last, first, 1));
	assert_eq!([data[0].get(), data[1].get()], [0x10, 0x00]);

	let data = [Cell::new(0xFFu8), Cell::new(0x00)];
	let (first, last) = BitIter::span(&data[..], 16);
	assert!(!addition(first, last, first, 1));
	assert_eq!([data[0].get(), data[1].get()], [0x00, 0x01]);

	let data = [Cell::new(0xFFu8), Cell::new(0xFF)];
	let (first, last) = BitIter::span(&data[..], 16);
	assert!(addition(first, last, first, 1));
	assert_eq!([data[0].get(), data[1].get()], [0x00, 0x00]);
}

#[test]
fn addition_into_separate_destination() {
	let src = [0xFEu8, 0x7F];
	let mut out = [0u8; 2];
	let dst = store::from_mut_slice(&mut out);
	let (first, last) = BitIter::span(&src[..], 15);
	assert!(addition(first, last, BitIter::from_slice(dst), 3));
	assert_eq!(out, [0x01, 0x00]);
}

#[test]
fn division_scenario() {
	let data = [Cell::new(0x00FFu16)];
	let (first, last) = BitIter::span(&data[..], 16);
	assert_eq!(division(first, last, first, 0xFF), 0);
	assert_eq!(data[0].get(), 1);

	let data = [Cell::new(0xFFu8), Cell::new(0x00)];
	let (first, last) = BitIter::span(&data[..], 16);
	assert_eq!(division(first, last, first, 0xFF), 0);
	assert_eq!([data[0].get(), data[1].get()], [0x01, 0x00]);
}

#[test]
fn multiplication_scenario() {
	let data = [Cell::new(0x80u8), Cell::new(0x40)];
	let (first, last) = BitIter::span(&data[..], 16);
	assert_eq!(multiplication(first, last, first, 4), 1);
	assert_eq!([data[0].get(), data[1].get()], [0x00, 0x02]);
}

#[test]
fn copy_between_widths() {
	let src = [0xABCDu16];
	let out = [Cell::new(0u8), Cell::new(0), Cell::new(0)];
	let (first, last) = BitIter::span(&src[..], 16);
	let end = copy(first, last, BitIter::at(&out[..], 4));
	assert_eq!(end.bit_index(), 20);
	assert_eq!(out.iter().map(Cell::get).collect::<Vec<_>>(), [0xD0, 0xBC, 0x0A]);
	assert!(equal(first, last, BitIter::at(&out[..], 4)));
	assert_eq!(count(BitIter::at(&out[..], 4), end, true), 10);
}
