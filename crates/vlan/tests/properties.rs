//! Property tests over arbitrary identifier sets.

#![cfg(feature = "dynamic")]

use std::collections::BTreeSet;

use proptest::prelude::*;
use rti_vlan::{Handle, Slot, StaticTable, VlanDescriptor, VlanError, VlanId, VlanInterface, VlanRegistry};

struct Sink;

impl VlanInterface for Sink {
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

static SINK: Sink = Sink;

fn descriptors(ids: &BTreeSet<u16>) -> Vec<VlanDescriptor<'static>> {
	ids.iter()
		.map(|&id| VlanDescriptor::new(&SINK, "PROP", VlanId(id)))
		.collect()
}

fn arb_ids(max: usize) -> impl Strategy<Value = BTreeSet<u16>> {
	prop::collection::btree_set(0u16..64, 0..=max)
}

fn live_ids(registry: &VlanRegistry<'_>) -> Vec<u16> {
	registry.records().map(|desc| desc.id.get()).collect()
}

proptest! {
	/// Present ids resolve to themselves, absent ids miss, an empty table is always empty.
	#[test]
	fn prop_select_hits_exactly_present_ids(ids in arb_ids(8), probe in 0u16..64) {
		let descs = descriptors(&ids);
		let refs: Vec<&VlanDescriptor<'_>> = descs.iter().collect();
		let registry = VlanRegistry::new(StaticTable::new(&refs));

		let got = registry.select(VlanId(probe));
		if ids.is_empty() {
			prop_assert_eq!(got, Err(VlanError::ObjectEmpty));
		} else if ids.contains(&probe) {
			prop_assert_eq!(got.map(|desc| desc.id), Ok(VlanId(probe)));
		} else {
			prop_assert_eq!(got, Err(VlanError::InvalidParam));
		}
	}

	/// Relocating into a large enough buffer keeps every record reference resolvable.
	#[test]
	fn prop_setup_preserves_records(ids in arb_ids(8), spare in 0usize..4) {
		let descs = descriptors(&ids);
		let refs: Vec<&VlanDescriptor<'_>> = descs.iter().collect();
		let mut buffer = vec![Slot::EMPTY; ids.len() + spare];
		let mut registry = VlanRegistry::new(StaticTable::new(&refs));

		registry.setup(&mut buffer).unwrap();
		prop_assert_eq!(registry.free_count(), Ok(spare));
		for desc in &descs {
			let found = registry.lookup(desc.id).unwrap();
			prop_assert!(std::ptr::eq(found, desc));
		}
	}

	/// A short buffer is rejected and the static table keeps serving lookups.
	#[test]
	fn prop_short_setup_is_rejected(ids in arb_ids(8).prop_filter("non-empty", |ids| !ids.is_empty()), short in 0usize..8) {
		let short = short % ids.len();
		let descs = descriptors(&ids);
		let refs: Vec<&VlanDescriptor<'_>> = descs.iter().collect();
		let mut buffer = vec![Slot::EMPTY; short];
		let mut registry = VlanRegistry::new(StaticTable::new(&refs));

		let err = registry.setup(&mut buffer).unwrap_err();
		prop_assert_eq!(err, VlanError::TableTooShort { capacity: short, required: ids.len() });
		prop_assert!(!registry.is_dynamic());
		prop_assert_eq!(live_ids(&registry), ids.iter().copied().collect::<Vec<_>>());
	}

	/// Registering to capacity hands back the same references, then overflows.
	#[test]
	fn prop_register_until_overflow(ids in arb_ids(8)) {
		let descs = descriptors(&ids);
		let mut buffer = vec![Slot::EMPTY; descs.len()];
		let mut registry = VlanRegistry::new(StaticTable::EMPTY);
		registry.setup(&mut buffer).unwrap();

		for desc in &descs {
			registry.register(desc).unwrap();
			prop_assert!(std::ptr::eq(registry.lookup(desc.id).unwrap(), desc));
		}
		prop_assert_eq!(registry.free_count(), Ok(0));

		let extra = VlanDescriptor::new(&SINK, "EXTRA", VlanId(100));
		prop_assert_eq!(
			registry.register(&extra),
			Err(VlanError::TableOverflow { capacity: descs.len() })
		);
	}

	/// Removing one record frees exactly one slot and keeps the rest in order.
	#[test]
	fn prop_unregister_compacts_in_order(
		ids in arb_ids(8).prop_filter("non-empty", |ids| !ids.is_empty()),
		pick in any::<prop::sample::Index>(),
		spare in 0usize..3,
	) {
		let descs = descriptors(&ids);
		let mut buffer = vec![Slot::EMPTY; descs.len() + spare];
		let mut registry = VlanRegistry::new(StaticTable::EMPTY);
		registry.setup(&mut buffer).unwrap();
		for desc in &descs {
			registry.register(desc).unwrap();
		}

		let before = registry.free_count().unwrap();
		let victim = *pick.get(&descs);
		registry.unregister(victim.id).unwrap();

		prop_assert_eq!(registry.free_count(), Ok(before + 1));
		prop_assert_eq!(registry.select(victim.id).map(|desc| desc.id), Err(VlanError::InvalidParam));
		let expected: Vec<u16> = ids.iter().copied().filter(|&id| id != victim.id.get()).collect();
		prop_assert_eq!(live_ids(&registry), expected);
	}
}
