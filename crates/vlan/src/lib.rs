//! VLAN descriptor registry.
//!
//! Maps a 16-bit [`VlanId`] to the [`VlanDescriptor`] of a pluggable delivery channel, so the
//! routing layer can resolve an identifier to the [`VlanInterface`] it must invoke without
//! knowing how or when the channel was registered.
//!
//! # Mental Model
//!
//! 1. **Build time:** [`vlan_table!`] declares descriptors as `static`s and packs references to
//!    them into one contiguous [`StaticTable`], in declaration order.
//! 2. **Boot:** a [`VlanRegistry`] starts out serving lookups from the static table.
//! 3. **Relocation:** [`VlanRegistry::setup`] moves the active table into a caller-supplied
//!    [`Slot`] buffer, carrying every live record forward. From then on the table is dynamic.
//! 4. **Runtime:** [`VlanRegistry::register`] appends, [`VlanRegistry::unregister`] removes and
//!    compacts. [`VlanRegistry::select`] always scans whichever table is active.
//!
//! The registry never allocates. Buffers and descriptors are borrowed for the registry's
//! lifetime and handed back when the registry stops using them.
//!
//! # Features
//!
//! | Feature | Effect |
//! |---------|--------|
//! | `dynamic` (default) | Dynamic table operations. Without it the registry is static-only. |
//! | `dfx` (default) | Diagnostic and fault-injection accessors. |
//! | `distributed` | Link-time collection via `inventory` ([`vlan_submit!`]). |
//! | `serde` | Serialization of ids, status codes and table reports. |
//! | `std` | Enables `std` in `thiserror` and `tracing`. |
//!
//! # Example
//!
//! ```
//! use rti_vlan::{Handle, Slot, VlanId, VlanInterface, VlanRegistry};
//!
//! struct Loopback;
//!
//! impl VlanInterface for Loopback {
//! 	fn create(&self) -> Option<Handle> { None }
//! 	fn delete(&self, _vlan: Handle) {}
//! 	fn create_producer(&self) -> Option<Handle> { None }
//! 	fn delete_producer(&self, _producer: Handle) {}
//! 	fn create_consumer(&self) -> Option<Handle> { None }
//! 	fn delete_consumer(&self, _consumer: Handle) {}
//! }
//!
//! static LOOPBACK: Loopback = Loopback;
//!
//! rti_vlan::vlan_table! {
//! 	static STATIC_VLANS = [
//! 		LOOP => (&LOOPBACK, 1),
//! 	];
//! }
//! rti_vlan::vlan_descriptor!(LATE, &LOOPBACK, 9);
//!
//! let mut buffer = [Slot::EMPTY; 4];
//! let mut registry = VlanRegistry::new(STATIC_VLANS);
//! assert_eq!(registry.select(VlanId(1))?.name, "LOOP");
//!
//! registry.setup(&mut buffer)?;
//! registry.register(&RTI_VLAN_LATE)?;
//! assert_eq!(registry.select(VlanId(9))?.name, "LATE");
//! assert_eq!(registry.free_count()?, 2);
//! # Ok::<(), rti_vlan::VlanError>(())
//! ```

#![no_std]

#[cfg(test)]
extern crate std;

pub mod desc;
#[cfg(feature = "distributed")]
pub mod distributed;
pub mod error;
pub mod registry;
pub mod table;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use desc::{Handle, VlanDescriptor, VlanId, VlanInterface};
pub use error::{ErrorCode, Result, VlanError};
#[cfg(feature = "dfx")]
pub use registry::{TableKind, TableReport};
pub use registry::{Records, VlanRegistry};
pub use table::{RECORD_SIZE, Slot, StaticTable, record_count, table_size};

/// Macro support; not public API.
#[doc(hidden)]
pub mod __private {
	#[cfg(feature = "distributed")]
	pub use inventory;
	pub use paste;
}
