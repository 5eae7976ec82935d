//! Dynamic table lifecycle: relocation, registration and removal.

use core::mem;

use super::{ActiveTable, DynamicTable, VlanRegistry};
use crate::desc::{VlanDescriptor, VlanId};
use crate::error::{Result, VlanError};
use crate::table::{Slot, record_count};

impl DynamicTable<'_> {
	fn capacity(&self) -> usize {
		self.slots.len()
	}

	fn position(&self, id: VlanId) -> Option<usize> {
		self.slots
			.iter()
			.position(|slot| slot.get().is_some_and(|desc| desc.id == id))
	}
}

impl<'a> VlanRegistry<'a> {
	/// Installs `buffer` as the dynamic table, carrying every live record forward.
	///
	/// The records preserved are the whole static table on first setup and the live dynamic
	/// records afterwards. They are copied by reference, in order, to the front of the zeroed
	/// buffer. The previously installed dynamic buffer, if any, is handed back.
	///
	/// # Errors
	///
	/// [`VlanError::TableTooShort`] if `buffer` cannot hold the preserved records. The active
	/// table is left untouched.
	pub fn setup(&mut self, buffer: &'a mut [Slot<'a>]) -> Result<Option<&'a mut [Slot<'a>]>> {
		let required = self.occupancy();
		let capacity = buffer.len();
		if capacity < required {
			return Err(VlanError::TableTooShort { capacity, required });
		}

		buffer.fill(Slot::EMPTY);
		let mut used = 0;
		for (slot, desc) in buffer.iter_mut().zip(self.records()) {
			*slot = Slot::occupied(desc);
			used += 1;
		}

		tracing::debug!(capacity, preserved = used, "vlan table relocated");
		Ok(self.install(DynamicTable {
			slots: buffer,
			used,
		}))
	}

	/// Byte-sized variant of [`Self::setup`] for integration layers that pass a raw buffer
	/// and its size.
	///
	/// Only the first `size_bytes / RECORD_SIZE` slots of `buffer` are used.
	///
	/// # Errors
	///
	/// - [`VlanError::InvalidParam`] if `buffer` is absent or `size_bytes` exceeds it.
	/// - [`VlanError::TableTooShort`] as for [`Self::setup`].
	pub fn setup_with_size(
		&mut self,
		buffer: Option<&'a mut [Slot<'a>]>,
		size_bytes: usize,
	) -> Result<Option<&'a mut [Slot<'a>]>> {
		let Some(buffer) = buffer else {
			return Err(VlanError::InvalidParam);
		};
		let records = record_count(size_bytes);
		if records > buffer.len() {
			return Err(VlanError::InvalidParam);
		}
		let (buffer, _) = buffer.split_at_mut(records);
		self.setup(buffer)
	}

	/// Appends `desc` to the dynamic table.
	///
	/// Identifiers are not checked for duplicates.
	///
	/// # Errors
	///
	/// - [`VlanError::TableNotSetup`] if no dynamic table is installed.
	/// - [`VlanError::TableOverflow`] if every slot is in use.
	pub fn register(&mut self, desc: &'a VlanDescriptor<'a>) -> Result<()> {
		let table = self.dynamic_mut()?;
		let capacity = table.capacity();
		if table.used >= capacity {
			return Err(VlanError::TableOverflow { capacity });
		}

		table.slots[table.used] = Slot::occupied(desc);
		table.used += 1;
		tracing::trace!(id = %desc.id, name = desc.name, used = table.used, "vlan registered");
		Ok(())
	}

	/// Registers each descriptor in turn, stopping at the first failure.
	///
	/// Descriptors registered before the failure stay registered. Returns how many were added.
	pub fn register_many<I>(&mut self, descs: I) -> Result<usize>
	where
		I: IntoIterator<Item = &'a VlanDescriptor<'a>>,
	{
		let mut added = 0;
		for desc in descs {
			self.register(desc)?;
			added += 1;
		}
		Ok(added)
	}

	/// Removes the first record carrying `id` and compacts the table.
	///
	/// Later records shift left by one slot, keeping their order, and the vacated trailing slot
	/// is cleared. Records copied from the static table are removable too; keeping them is the
	/// caller's responsibility.
	///
	/// # Errors
	///
	/// - [`VlanError::TableNotSetup`] if no dynamic table is installed.
	/// - [`VlanError::InvalidParam`] if no live record carries `id`.
	pub fn unregister(&mut self, id: VlanId) -> Result<()> {
		let table = self.dynamic_mut()?;
		let idx = table.position(id).ok_or(VlanError::InvalidParam)?;

		table.slots.copy_within(idx + 1.., idx);
		if let Some(last) = table.slots.last_mut() {
			*last = Slot::EMPTY;
		}
		table.used = table.used.saturating_sub(1);
		tracing::trace!(%id, used = table.used, "vlan unregistered");
		Ok(())
	}

	/// Returns how many slots are still free.
	///
	/// # Errors
	///
	/// [`VlanError::TableNotSetup`] if no dynamic table is installed.
	pub fn free_count(&self) -> Result<usize> {
		let table = self.dynamic()?;
		Ok(table.capacity().saturating_sub(table.used))
	}

	/// Returns the dynamic table's capacity in records.
	///
	/// # Errors
	///
	/// [`VlanError::TableNotSetup`] if no dynamic table is installed.
	pub fn all_count(&self) -> Result<usize> {
		Ok(self.dynamic()?.capacity())
	}

	/// Drops the dynamic table and returns to serving lookups from the static table.
	///
	/// Hands the dynamic buffer back; records registered into it are forgotten.
	pub fn reset(&mut self) -> Option<&'a mut [Slot<'a>]> {
		let previous = match mem::replace(&mut self.active, ActiveTable::Static) {
			ActiveTable::Static => None,
			ActiveTable::Dynamic(table) => Some(table.slots),
		};
		tracing::debug!(had_dynamic = previous.is_some(), "vlan table reset to static");
		previous
	}

	/// Swaps in `table`, returning the buffer it replaces.
	pub(super) fn install(&mut self, table: DynamicTable<'a>) -> Option<&'a mut [Slot<'a>]> {
		match mem::replace(&mut self.active, ActiveTable::Dynamic(table)) {
			ActiveTable::Static => None,
			ActiveTable::Dynamic(previous) => Some(previous.slots),
		}
	}

	fn dynamic(&self) -> Result<&DynamicTable<'a>> {
		match &self.active {
			ActiveTable::Dynamic(table) => Ok(table),
			ActiveTable::Static => Err(VlanError::TableNotSetup),
		}
	}

	fn dynamic_mut(&mut self) -> Result<&mut DynamicTable<'a>> {
		match &mut self.active {
			ActiveTable::Dynamic(table) => Ok(table),
			ActiveTable::Static => Err(VlanError::TableNotSetup),
		}
	}
}
