//! Link-time descriptor collection.
//!
//! # Role
//!
//! Lets any crate in the final binary contribute a descriptor with [`vlan_submit!`](crate::vlan_submit)
//! without editing a central [`vlan_table!`](crate::vlan_table). The submissions are gathered by
//! `inventory` and loaded into the dynamic table by [`VlanRegistry::register_distributed`].
//!
//! # Invariants
//!
//! - Collection order follows the linker and is unspecified. Callers that need a stable order
//!   use a static table instead.
//! - Submitted descriptors are plain `static`s; they can also be registered by hand.

use crate::desc::VlanDescriptor;
use crate::error::Result;
use crate::registry::VlanRegistry;

/// Registry wrapper for link-time submitted descriptors.
pub struct VlanReg(pub &'static VlanDescriptor<'static>);
inventory::collect!(VlanReg);

/// Iterates every descriptor submitted with [`vlan_submit!`](crate::vlan_submit).
pub fn iter() -> impl Iterator<Item = &'static VlanDescriptor<'static>> {
	inventory::iter::<VlanReg>.into_iter().map(|reg| reg.0)
}

impl<'a> VlanRegistry<'a> {
	/// Appends every link-time submitted descriptor to the dynamic table.
	///
	/// Returns how many were added. Stops at the first failure like
	/// [`Self::register_many`]; descriptors added before it stay registered.
	///
	/// # Errors
	///
	/// - [`VlanError::TableNotSetup`](crate::VlanError::TableNotSetup) if no dynamic table is installed.
	/// - [`VlanError::TableOverflow`](crate::VlanError::TableOverflow) if the submissions do not fit.
	pub fn register_distributed(&mut self) -> Result<usize> {
		let submitted = iter().map(|desc| -> &'a VlanDescriptor<'a> { desc });
		let added = self.register_many(submitted).inspect_err(|err| {
			tracing::debug!(error = %err, "distributed vlan registration stopped");
		})?;
		tracing::debug!(added, "distributed vlans registered");
		Ok(added)
	}
}

/// Declares a descriptor and submits it for link-time collection.
///
/// The descriptor is also reachable as `RTI_VLAN_<NAME>`, exactly as with
/// [`vlan_descriptor!`](crate::vlan_descriptor).
///
/// ```ignore
/// rti_vlan::vlan_submit!(pub SPI, &SPI_IFX, 12);
/// registry.register_distributed()?;
/// ```
#[macro_export]
macro_rules! vlan_submit {
	($vis:vis $name:ident, $ifx:expr, $id:expr $(,)?) => {
		$crate::vlan_descriptor!($vis $name, $ifx, $id);

		$crate::__private::paste::paste! {
			$crate::__private::inventory::submit! {
				$crate::distributed::VlanReg(&[<RTI_VLAN_ $name>])
			}
		}
	};
}
