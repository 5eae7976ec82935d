//! Runtime registry over the active table.
//!
//! # Role
//!
//! [`VlanRegistry`] owns the *active table*: either the build-time [`StaticTable`] or a
//! caller-supplied dynamic [`Slot`] buffer with an explicit used-count. Lookups scan whichever
//! is active; mutations are only defined once a dynamic table is installed.
//!
//! # State Machine
//!
//! | From | Operation | To |
//! |------|-----------|----|
//! | Static | [`VlanRegistry::setup`] (success) | Dynamic |
//! | Dynamic | [`VlanRegistry::setup`] (success) | Dynamic (replaced) |
//! | Dynamic | [`VlanRegistry::reset`] | Static |
//!
//! While static, `register`, `unregister`, `free_count` and `all_count` fail with
//! [`VlanError::TableNotSetup`]; `select` and `is_registered` scan the static table.
//!
//! # Invariants
//!
//! - Dynamic slots `[0, used)` are occupied and `[used, capacity)` are empty after every
//!   operation except [`VlanRegistry::force_set`], which trusts the caller's buffer.
//!   - Enforced in: `setup` (compacting copy), `register` (append at `used`), `unregister`
//!     (shift-left).
//!   - Tested by: `tests::unregister_preserves_order_and_clears_tail`.
//! - A failed `setup` leaves the active table untouched.
//!   - Tested by: `tests::short_setup_leaves_table_unchanged`.
//! - Lookups return the first match in storage order; duplicate ids are not rejected.
//!   - Tested by: `tests::duplicate_ids_resolve_to_first_match`.
//!
//! # Concurrency
//!
//! None. Readers take `&self`, mutators `&mut self`; callers sharing a registry across threads
//! wrap it in their own lock.

#[cfg(feature = "dfx")]
mod dfx;
#[cfg(feature = "dynamic")]
mod dynamic;


use core::fmt;
use core::slice;

#[cfg(feature = "dfx")]
pub use dfx::{TableKind, TableReport};

use crate::desc::{VlanDescriptor, VlanId};
use crate::error::{Result, VlanError};
use crate::table::{Slot, StaticTable};

/// Table currently serving lookups.
enum ActiveTable<'a> {
	/// No dynamic table installed; lookups use the static table.
	Static,
	#[cfg_attr(not(feature = "dynamic"), allow(dead_code))]
	Dynamic(DynamicTable<'a>),
}

/// Caller-owned dynamic buffer.
struct DynamicTable<'a> {
	slots: &'a mut [Slot<'a>],
	/// One past the last record written; slots from here on are empty.
	used: usize,
}

/// Registry of VLAN descriptors.
///
/// Borrows its static table, any installed dynamic buffer and every registered descriptor for
/// `'a`. It never allocates and never frees.
pub struct VlanRegistry<'a> {
	statics: StaticTable<'a>,
	active: ActiveTable<'a>,
}

impl<'a> VlanRegistry<'a> {
	/// Creates a registry serving lookups from `statics`.
	pub const fn new(statics: StaticTable<'a>) -> Self {
		Self {
			statics,
			active: ActiveTable::Static,
		}
	}

	/// Returns the build-time table this registry was created with.
	pub const fn statics(&self) -> StaticTable<'a> {
		self.statics
	}

	/// Returns true once a dynamic table has been installed.
	pub const fn is_dynamic(&self) -> bool {
		!matches!(self.active, ActiveTable::Static)
	}

	/// Iterates live records of the active table in storage order, skipping empty slots.
	pub fn records(&self) -> Records<'_, 'a> {
		let inner = match &self.active {
			ActiveTable::Static => RecordsInner::Static(self.statics.records().iter()),
			ActiveTable::Dynamic(table) => RecordsInner::Dynamic(table.slots.iter()),
		};
		Records { inner }
	}

	/// Resolves `id` to the stored descriptor reference.
	///
	/// # Errors
	///
	/// - [`VlanError::ObjectEmpty`] if the active table has zero capacity.
	/// - [`VlanError::InvalidParam`] if no live record carries `id`.
	pub fn lookup(&self, id: VlanId) -> Result<&'a VlanDescriptor<'a>> {
		if self.bounds() == 0 {
			return Err(VlanError::ObjectEmpty);
		}
		self.records()
			.find(|desc| desc.id == id)
			.ok_or(VlanError::InvalidParam)
	}

	/// Resolves `id` to a copy of its descriptor.
	///
	/// This is the routing layer's entry point. See [`Self::lookup`] for errors.
	pub fn select(&self, id: VlanId) -> Result<VlanDescriptor<'a>> {
		self.lookup(id).copied()
	}

	/// Checks whether a record with `desc.id` is live in the active table.
	///
	/// # Errors
	///
	/// [`VlanError::InvalidParam`] on a miss, the same error used for bad arguments.
	pub fn is_registered(&self, desc: &VlanDescriptor<'_>) -> Result<()> {
		if self.records().any(|live| live.id == desc.id) {
			Ok(())
		} else {
			Err(VlanError::InvalidParam)
		}
	}

	/// Records between the active table's bounds.
	fn bounds(&self) -> usize {
		match &self.active {
			ActiveTable::Static => self.statics.len(),
			ActiveTable::Dynamic(table) => table.slots.len(),
		}
	}

	/// Records that must be carried forward when the table is relocated.
	fn occupancy(&self) -> usize {
		match &self.active {
			ActiveTable::Static => self.statics.len(),
			ActiveTable::Dynamic(table) => table.used,
		}
	}
}

impl fmt::Debug for VlanRegistry<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("VlanRegistry")
			.field("dynamic", &self.is_dynamic())
			.field("capacity", &self.bounds())
			.field("used", &self.occupancy())
			.finish_non_exhaustive()
	}
}

/// Iterator over live records, see [`VlanRegistry::records`].
pub struct Records<'r, 'a> {
	inner: RecordsInner<'r, 'a>,
}

enum RecordsInner<'r, 'a> {
	Static(slice::Iter<'a, &'a VlanDescriptor<'a>>),
	#[cfg_attr(not(feature = "dynamic"), allow(dead_code))]
	Dynamic(slice::Iter<'r, Slot<'a>>),
}

impl<'a> Iterator for Records<'_, 'a> {
	type Item = &'a VlanDescriptor<'a>;

	fn next(&mut self) -> Option<Self::Item> {
		match &mut self.inner {
			RecordsInner::Static(iter) => iter.next().copied(),
			RecordsInner::Dynamic(iter) => iter.find_map(|slot| slot.get()),
		}
	}
}

impl fmt::Debug for Records<'_, '_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Records").finish_non_exhaustive()
	}
}
