/*! Word-wise transformation of one range into another.

Transformation works in units of the destination word width, counted from the
start of the range rather than from the storage: unit `j` holds bits
`j * W .. (j + 1) * W` of the range. Every unit but the most significant is
whole, whatever the alignment of either range, which lets a carry or borrow
pass between units exactly as it would between the words of an integer. The
most significant unit is partial when the range length is not a multiple of
the word width; it is passed to the operator right-aligned, with its other bits
cleared, and only its range bits are written back.

Each unit is read from the source before it is written to the destination, so
the destination may be the source itself.
!*/

use crate::{
	iter::BitIter,
	store::{
		BitAccess,
		BitStore,
	},
	word::BitWord,
};

/** Replaces each unit of the destination with `op` applied to the
corresponding unit of `[first, last)`.

# Returns

A cursor one past the last bit written.
**/
pub fn transform<'b, T, U, F>(
	first: BitIter<T>,
	last: BitIter<T>,
	d_first: BitIter<'b, U>,
	mut op: F,
) -> BitIter<'b, U>
where
	T: BitStore,
	U: BitAccess,
	F: FnMut(U::Mem) -> U::Mem,
{
	forward(first, last, d_first, (), |(), word, _| (op(word), ())).0
}

/** Combines corresponding units of two equal-length ranges into the
destination.

`op` receives the unit of `[first1, last1)` first and the unit of the range at
`first2` second.
**/
pub fn transform_binary<'b, T, V, U, F>(
	first1: BitIter<T>,
	last1: BitIter<T>,
	first2: BitIter<V>,
	d_first: BitIter<'b, U>,
	mut op: F,
) -> BitIter<'b, U>
where
	T: BitStore,
	V: BitStore,
	U: BitAccess,
	F: FnMut(U::Mem, U::Mem) -> U::Mem,
{
	let len = super::range_len(first1, last1);
	let width = <U::Mem as BitWord>::WIDTH as usize;
	let mut one = first1.adapt::<U::Mem>();
	let mut two = first2.adapt::<U::Mem>();
	let mut dst = d_first.adapt::<U::Mem>();
	let mut left = len;
	while left > 0 {
		let n = left.min(width) as u8;
		dst.write_bits(n, op(one.read_bits(n), two.read_bits(n)));
		one = one.offset(n as isize);
		two = two.offset(n as isize);
		dst = dst.offset(n as isize);
		left -= n as usize;
	}
	d_first + len as isize
}

/** Transforms a range while threading an accumulator from its least
significant unit to its most significant.

Whole units go through `word_op(acc, unit) -> (result, acc)`. The partial
most significant unit, if there is one, goes through
`subword_op(acc, unit, len) -> (result, acc)`.

# Returns

A cursor one past the last bit written, and the final accumulator.
**/
pub fn transform_accumulate<'b, T, U, A, F, G>(
	first: BitIter<T>,
	last: BitIter<T>,
	d_first: BitIter<'b, U>,
	init: A,
	mut word_op: F,
	mut subword_op: G,
) -> (BitIter<'b, U>, A)
where
	T: BitStore,
	U: BitAccess,
	F: FnMut(A, U::Mem) -> (U::Mem, A),
	G: FnMut(A, U::Mem, u8) -> (U::Mem, A),
{
	forward(first, last, d_first, init, |acc, word, len| {
		if len == <U::Mem as BitWord>::WIDTH {
			word_op(acc, word)
		}
		else {
			subword_op(acc, word, len)
		}
	})
}

/** Transforms a range while threading an accumulator from its most
significant unit to its least significant.

The partial most significant unit, if there is one, is visited first through
`subword_op`; the whole units follow in descending order through `word_op`.
Long division uses this order, carrying its remainder downward.
**/
pub fn transform_accumulate_backward<'b, T, U, A, F, G>(
	first: BitIter<T>,
	last: BitIter<T>,
	d_first: BitIter<'b, U>,
	init: A,
	mut word_op: F,
	mut subword_op: G,
) -> (BitIter<'b, U>, A)
where
	T: BitStore,
	U: BitAccess,
	F: FnMut(A, U::Mem) -> (U::Mem, A),
	G: FnMut(A, U::Mem, u8) -> (U::Mem, A),
{
	let len = super::range_len(first, last);
	let width = <U::Mem as BitWord>::WIDTH as usize;
	let (whole, rest) = (len / width, (len % width) as u8);
	let src = first.adapt::<U::Mem>();
	let dst = d_first.adapt::<U::Mem>();
	let mut acc = init;

	if rest != 0 {
		let at = (whole * width) as isize;
		let (out, next) = subword_op(acc, src.offset(at).read_bits(rest), rest);
		dst.offset(at).write_bits(rest, out);
		acc = next;
	}
	for unit in (0 .. whole).rev() {
		let at = (unit * width) as isize;
		let (out, next) = word_op(acc, src.offset(at).read_word());
		dst.offset(at).write_word(out);
		acc = next;
	}
	(d_first + len as isize, acc)
}

/// Drives a forward transformation, passing each unit and its length to
/// `step`.
fn forward<'b, T, U, A, S>(
	first: BitIter<T>,
	last: BitIter<T>,
	d_first: BitIter<'b, U>,
	init: A,
	mut step: S,
) -> (BitIter<'b, U>, A)
where
	T: BitStore,
	U: BitAccess,
	S: FnMut(A, U::Mem, u8) -> (U::Mem, A),
{
	let len = super::range_len(first, last);
	let width = <U::Mem as BitWord>::WIDTH as usize;
	let mut src = first.adapt::<U::Mem>();
	let mut dst = d_first.adapt::<U::Mem>();
	let mut acc = init;
	let mut left = len;
	while left > 0 {
		let n = left.min(width) as u8;
		let (out, next) = step(acc, src.read_bits(n), n);
		dst.write_bits(n, out);
		acc = next;
		src = src.offset(n as isize);
		dst = dst.offset(n as isize);
		left -= n as usize;
	}
	(d_first + len as isize, acc)
}
