/*! Bit-granular cursors and word-aligned range algorithms.

This crate makes the individual bits of ordinary word storage behave like the
elements of a slice. It borrows a slice of words (`u8`, `u16`, `u32`, `u64`, or
`usize`) and provides:

- [`BitRef`] and [`BitPtr`], a reference and a pointer to one bit;
- [`BitIter`], a random-access cursor over bit positions, and [`BitRange`], an
  iterator over the bits between two cursors;
- [`WordAdapter`], which views a slice of one word width as words of another;
- the range algorithms of the [`algorithm`] module: copy, move, comparison,
  population counts, directional folds, fills, and word-wise transformations;
- the scalar arithmetic of the [`arithmetic`] module, which treats a bit range
  as an unsigned integer.

Bits are numbered from the least significant end of each word, and a range
beginning at bit `n` of a word continues through bit `n + 1`, then into the
next word at its bit `0`. As an integer, the first bit of a range is its least
significant bit.

The algorithms work a word at a time. A range that does not begin or end on a
word edge is handled by masking its boundary words, so bits outside the range
are never modified, even when they share a word with it.

# Writing

Cursors only ever hold shared references. Storage that an algorithm writes must
be a slice of `Cell`s (or, with the `atomic` feature, atomics);
[`store::from_mut_slice`] converts an exclusively borrowed `&mut [W]` into one.
Plain words can be read but not written.

# Examples

```rust
use bitcursor::prelude::*;
use bitcursor::store;

let mut raw = [0u8; 3];
let dst = store::from_mut_slice(&mut raw);
let src = [0xABCDu16];

let (first, last) = BitIter::span(&src, 16);
let d_first = BitIter::at(dst, 4);
let d_last = copy(first, last, d_first);
assert!(equal(first, last, d_first));
assert_eq!(count(d_first, d_last, true), 10);
assert_eq!(raw, [0xD0, 0xBC, 0x0A]);
```

# Features

- `std` (default): implements `std::error::Error` for the error types.
- `atomic`: allows atomic words as writable storage.
- `portable`: uses only single-width integer arithmetic in the carry
  primitives.
- `tracing`: emits trace spans from the arithmetic functions.

[`BitIter`]: crate::iter::BitIter
[`BitPtr`]: crate::pointer::BitPtr
[`BitRange`]: crate::iter::BitRange
[`BitRef`]: crate::reference::BitRef
[`WordAdapter`]: crate::adapter::WordAdapter
!*/

#![cfg_attr(not(feature = "std"), no_std)]

pub mod adapter;
pub mod algorithm;
pub mod arithmetic;
pub mod carry;
pub mod index;
pub mod iter;
pub mod pointer;
pub mod prelude;
pub mod reference;
pub mod store;
pub mod word;
