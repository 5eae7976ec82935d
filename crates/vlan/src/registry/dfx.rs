//! Diagnostics and fault-injection accessors.
//!
//! These bypass the normal lifecycle. [`VlanRegistry::force_set`] in particular installs a
//! buffer as-is; keeping its contents consistent is entirely up to the caller.

use super::{ActiveTable, DynamicTable, VlanRegistry};
use crate::table::Slot;

/// Which table is serving lookups.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TableKind {
	Static,
	Dynamic,
}

/// Point-in-time occupancy of the active table.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableReport {
	pub kind: TableKind,
	/// Records between the table bounds.
	pub capacity: usize,
	/// Records in use. A static table is always full.
	pub used: usize,
	/// Records still available for registration.
	pub free: usize,
}

impl<'a> VlanRegistry<'a> {
	/// Returns the address of the active table's first record.
	pub fn table_addr(&self) -> *const () {
		match &self.active {
			ActiveTable::Static => self.statics.as_ptr(),
			ActiveTable::Dynamic(table) => table.slots.as_ptr().cast(),
		}
	}

	/// Returns the number of records between the active table's bounds.
	pub fn table_capacity(&self) -> usize {
		self.bounds()
	}

	/// Installs `buffer` as the dynamic table without copying or clearing anything.
	///
	/// The used-count becomes one past the last occupied slot. Returns the dynamic buffer that
	/// was active before, if any. Use [`Self::reset`] to force the static table back.
	pub fn force_set(&mut self, buffer: &'a mut [Slot<'a>]) -> Option<&'a mut [Slot<'a>]> {
		let used = buffer
			.iter()
			.rposition(|slot| !slot.is_empty())
			.map_or(0, |last| last + 1);
		tracing::debug!(capacity = buffer.len(), used, "vlan table force-set");
		self.install(DynamicTable {
			slots: buffer,
			used,
		})
	}

	/// Captures the active table's occupancy.
	pub fn report(&self) -> TableReport {
		let capacity = self.bounds();
		let used = self.occupancy();
		TableReport {
			kind: if self.is_dynamic() {
				TableKind::Dynamic
			} else {
				TableKind::Static
			},
			capacity,
			used,
			free: capacity.saturating_sub(used),
		}
	}
}
