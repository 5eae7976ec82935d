//! Table storage: static descriptor arrays and dynamic slot buffers.
//!
//! # Role
//!
//! A [`StaticTable`] is the build-time half of the registry: one contiguous, fully packed,
//! order-stable array of descriptor references. It is produced by [`crate::vlan_table!`] and
//! never changes.
//!
//! A [`Slot`] is one record of a dynamic table. Slots are either occupied or empty; a dynamic
//! buffer is a caller-owned `[Slot]` of any length.
//!
//! # Invariants
//!
//! - A static table never contains empty records.
//! - A slot is exactly one pointer wide, so byte sizes convert to record counts through
//!   [`RECORD_SIZE`].

#[macro_use]
mod macros;

use core::mem::size_of;

use crate::desc::VlanDescriptor;

/// Byte size of one table record.
pub const RECORD_SIZE: usize = size_of::<Slot<'static>>();

/// Returns the byte size of a table holding `records` records.
pub const fn table_size(records: usize) -> usize {
	records * RECORD_SIZE
}

/// Returns how many whole records fit in `size_bytes`.
pub const fn record_count(size_bytes: usize) -> usize {
	size_bytes / RECORD_SIZE
}

/// One record of a dynamic table.
#[derive(Copy, Clone, Debug, Default)]
pub struct Slot<'a>(Option<&'a VlanDescriptor<'a>>);

impl<'a> Slot<'a> {
	/// A free record.
	pub const EMPTY: Self = Self(None);

	/// Creates a record referencing `desc`.
	pub const fn occupied(desc: &'a VlanDescriptor<'a>) -> Self {
		Self(Some(desc))
	}

	/// Returns the referenced descriptor, if any.
	pub const fn get(self) -> Option<&'a VlanDescriptor<'a>> {
		self.0
	}

	/// Returns true for a free record.
	pub const fn is_empty(self) -> bool {
		self.0.is_none()
	}
}

impl<'a> From<&'a VlanDescriptor<'a>> for Slot<'a> {
	fn from(desc: &'a VlanDescriptor<'a>) -> Self {
		Self::occupied(desc)
	}
}

/// Build-time table of descriptor references.
#[derive(Copy, Clone, Debug)]
pub struct StaticTable<'a> {
	records: &'a [&'a VlanDescriptor<'a>],
}

impl StaticTable<'static> {
	/// A table with no records.
	///
	/// Lookups against it report [`crate::VlanError::ObjectEmpty`].
	pub const EMPTY: Self = Self { records: &[] };
}

impl<'a> StaticTable<'a> {
	/// Wraps a packed array of descriptor references.
	pub const fn new(records: &'a [&'a VlanDescriptor<'a>]) -> Self {
		Self { records }
	}

	/// Returns the records in table order.
	pub const fn records(&self) -> &'a [&'a VlanDescriptor<'a>] {
		self.records
	}

	/// Number of records (always equal to the table's capacity).
	pub const fn len(&self) -> usize {
		self.records.len()
	}

	/// Returns true if the table holds no records.
	pub const fn is_empty(&self) -> bool {
		self.records.is_empty()
	}

	/// Iterates the records in table order.
	pub fn iter(&self) -> impl Iterator<Item = &'a VlanDescriptor<'a>> + use<'a> {
		self.records.iter().copied()
	}

	pub(crate) fn as_ptr(&self) -> *const () {
		self.records.as_ptr().cast()
	}
}

impl Default for StaticTable<'_> {
	fn default() -> Self {
		StaticTable::EMPTY
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::test_fixtures::{STATIC_PAIR, VLAN1, VLAN2};

	#[test]
	fn record_is_pointer_sized() {
		assert_eq!(RECORD_SIZE, size_of::<usize>());
		assert_eq!(table_size(3), 3 * RECORD_SIZE);
		assert_eq!(record_count(table_size(3) + RECORD_SIZE - 1), 3);
		assert_eq!(record_count(0), 0);
	}

	#[test]
	fn slots_track_occupancy() {
		assert!(Slot::EMPTY.is_empty());
		assert!(Slot::default().is_empty());

		let slot = Slot::occupied(&VLAN1);
		assert!(!slot.is_empty());
		assert!(core::ptr::eq(slot.get().unwrap(), &VLAN1));
	}

	#[test]
	fn static_table_keeps_declaration_order() {
		let ids: std::vec::Vec<u16> = STATIC_PAIR.iter().map(|d| d.id.get()).collect();
		assert_eq!(ids, [1, 2]);
		assert_eq!(STATIC_PAIR.len(), 2);
		assert!(core::ptr::eq(STATIC_PAIR.records()[1], &VLAN2));
	}

	#[test]
	fn empty_table_is_known_and_empty() {
		assert!(StaticTable::EMPTY.is_empty());
		assert_eq!(StaticTable::default().len(), 0);
	}
}
