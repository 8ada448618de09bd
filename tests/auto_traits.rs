//! Compile-time checks of the marker traits carried by the cursor types.

use core::cell::Cell;
#[cfg(feature = "atomic")]
use core::sync::atomic::AtomicU32;

use bitcursor::prelude::*;
use static_assertions::*;

#[test]
fn cursors_are_copy() {
	assert_impl_all!(BitIter<'static, u8>: Copy, Eq, Ord, core::fmt::Debug);
	assert_impl_all!(BitRef<'static, u16>: Copy, core::fmt::Debug);
	assert_impl_all!(BitPtr<u32>: Copy, Default, Eq, Ord, core::hash::Hash);
	assert_impl_all!(BitRange<'static, u64>: Clone, Iterator, DoubleEndedIterator);
	assert_impl_all!(BitIdx<u8>: Copy, Eq, Ord);
}

#[test]
fn shared_mutation_stays_on_one_thread() {
	assert_impl_all!(BitIter<'static, u8>: Send, Sync);
	assert_not_impl_any!(BitIter<'static, Cell<u8>>: Send, Sync);
	assert_not_impl_any!(BitRef<'static, Cell<u32>>: Send, Sync);
	assert_not_impl_any!(BitPtr<u8>: Send, Sync);
}

#[test]
#[cfg(feature = "atomic")]
fn atomic_cursors_cross_threads() {
	assert_impl_all!(BitIter<'static, AtomicU32>: Send, Sync);
	assert_impl_all!(BitRef<'static, AtomicU32>: Send, Sync);
}
