/*! Symbol export.

This module collects the general public API into a single spot for inclusion, as
`use bitcursor::prelude::*;`, without polluting the root namespace of the crate.
!*/

pub use crate::{
	adapter::{
		AdaptedIter,
		WordAdapter,
	},
	algorithm::{
		accumulate,
		accumulate_backward,
		accumulate_backward_while,
		accumulate_while,
		copy,
		count,
		count_msb,
		equal,
		fill,
		move_bits,
		transform,
		transform_accumulate,
		transform_accumulate_backward,
		transform_binary,
	},
	arithmetic::{
		addition,
		division,
		multiplication,
		subtraction,
	},
	index::BitIdx,
	iter::{
		BitIter,
		BitRange,
	},
	pointer::BitPtr,
	reference::BitRef,
	store::{
		BitAccess,
		BitStore,
	},
	word::BitWord,
};
