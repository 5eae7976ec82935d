use crate::desc::{Handle, VlanInterface};

/// No-op channel; the tag keeps every instance at a distinct address.
pub(crate) struct MockInterface {
	#[allow(dead_code)]
	tag: u8,
}

impl MockInterface {
	pub(crate) const fn new(tag: u8) -> Self {
		Self { tag }
	}
}

impl VlanInterface for MockInterface {
	fn create(&self) -> Option<Handle> {
		None
	}

	fn delete(&self, _vlan: Handle) {}

	fn create_producer(&self) -> Option<Handle> {
		None
	}

	fn delete_producer(&self, _producer: Handle) {}

	fn create_consumer(&self) -> Option<Handle> {
		None
	}

	fn delete_consumer(&self, _consumer: Handle) {}
}

pub(crate) static IFX1: MockInterface = MockInterface::new(1);
pub(crate) static IFX2: MockInterface = MockInterface::new(2);
pub(crate) static IFX3: MockInterface = MockInterface::new(3);
pub(crate) static IFX4: MockInterface = MockInterface::new(4);

crate::vlan_table! {
	pub(crate) static STATIC_PAIR = [
		VLAN1 => (&IFX1, 1),
		VLAN2 => (&IFX2, 2),
	];
}

crate::vlan_descriptor!(pub(crate) VLAN3, &IFX3, 3);
crate::vlan_descriptor!(pub(crate) VLAN4, &IFX4, 4);

pub(crate) use self::RTI_VLAN_VLAN1 as VLAN1;
pub(crate) use self::RTI_VLAN_VLAN2 as VLAN2;
pub(crate) use self::RTI_VLAN_VLAN3 as VLAN3;
pub(crate) use self::RTI_VLAN_VLAN4 as VLAN4;
