//! Channel descriptors and the interface they point at.

use core::fmt;

/// Numeric identifier of a delivery channel.
///
/// Identifiers carry no encoding beyond their value. Uniqueness among live entries is the
/// caller's contract; the registry resolves the first match in storage order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(transparent)]
pub struct VlanId(pub u16);

impl VlanId {
	/// Returns the raw identifier.
	pub const fn get(self) -> u16 {
		self.0
	}
}

impl From<u16> for VlanId {
	fn from(raw: u16) -> Self {
		Self(raw)
	}
}

impl From<VlanId> for u16 {
	fn from(id: VlanId) -> Self {
		id.0
	}
}

impl fmt::Display for VlanId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// Opaque token minted by a channel implementation.
///
/// The registry never creates or inspects handles; they only travel between the routing layer
/// and the [`VlanInterface`] that produced them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Handle(pub usize);

/// Operations a delivery channel exposes to the routing layer.
///
/// Stored by reference in a [`VlanDescriptor`]. The registry compares interface references but
/// never calls any of these methods.
pub trait VlanInterface: Sync {
	/// Creates a channel instance.
	fn create(&self) -> Option<Handle>;
	/// Destroys a channel instance returned by [`Self::create`].
	fn delete(&self, vlan: Handle);
	/// Creates a producer handle.
	fn create_producer(&self) -> Option<Handle>;
	/// Destroys a producer handle.
	fn delete_producer(&self, producer: Handle);
	/// Creates a consumer handle.
	fn create_consumer(&self) -> Option<Handle>;
	/// Destroys a consumer handle.
	fn delete_consumer(&self, consumer: Handle);
}

/// Record identifying one delivery channel.
///
/// Tables hold references to descriptors; [`crate::VlanRegistry::select`] hands out copies.
#[derive(Copy, Clone)]
pub struct VlanDescriptor<'a> {
	/// Channel operations.
	pub interface: &'a dyn VlanInterface,
	/// Diagnostic label.
	pub name: &'a str,
	/// Lookup key.
	pub id: VlanId,
}

impl<'a> VlanDescriptor<'a> {
	/// Creates a descriptor. Usable in `static` initializers.
	pub const fn new(interface: &'a dyn VlanInterface, name: &'a str, id: VlanId) -> Self {
		Self {
			interface,
			name,
			id,
		}
	}

	/// Returns true if this descriptor points at `interface` (address identity).
	pub fn uses_interface(&self, interface: &dyn VlanInterface) -> bool {
		core::ptr::addr_eq(self.interface, interface)
	}
}

impl PartialEq for VlanDescriptor<'_> {
	fn eq(&self, other: &Self) -> bool {
		self.id == other.id && self.name == other.name && self.uses_interface(other.interface)
	}
}

impl Eq for VlanDescriptor<'_> {}

impl fmt::Debug for VlanDescriptor<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("VlanDescriptor")
			.field("id", &self.id)
			.field("name", &self.name)
			.field("interface", &core::ptr::from_ref(self.interface).cast::<()>())
			.finish()
	}
}
