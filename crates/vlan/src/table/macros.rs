//! Registration macros for build-time descriptors.

/// Declares one descriptor as a `static` named `RTI_VLAN_<NAME>`.
///
/// The descriptor's name is the stringified identifier. Use this for channels that are
/// registered into the dynamic table after boot.
///
/// ```ignore
/// rti_vlan::vlan_descriptor!(pub UART, &UART_IFX, 7);
/// registry.register(&RTI_VLAN_UART)?;
/// ```
#[macro_export]
macro_rules! vlan_descriptor {
	($vis:vis $name:ident, $ifx:expr, $id:expr $(,)?) => {
		$crate::__private::paste::paste! {
			#[allow(non_upper_case_globals)]
			$vis static [<RTI_VLAN_ $name>]: $crate::VlanDescriptor<'static> =
				$crate::VlanDescriptor::new($ifx, stringify!($name), $crate::VlanId($id));
		}
	};
}

/// Declares a static table and the descriptors it references.
///
/// Each entry becomes a `RTI_VLAN_<NAME>` static (see [`vlan_descriptor!`]); the table keeps
/// the entries in declaration order.
///
/// ```ignore
/// rti_vlan::vlan_table! {
/// 	pub static STATIC_VLANS = [
/// 		VLAN1 => (&IFX1, 1),
/// 		VLAN2 => (&IFX2, 2),
/// 	];
/// }
/// let registry = VlanRegistry::new(STATIC_VLANS);
/// ```
#[macro_export]
macro_rules! vlan_table {
	($vis:vis static $table:ident = [
		$( $name:ident => ($ifx:expr, $id:expr) ),* $(,)?
	];) => {
		$( $crate::vlan_descriptor!($vis $name, $ifx, $id); )*

		$crate::__private::paste::paste! {
			#[doc(hidden)]
			#[allow(non_upper_case_globals)]
			static [<__RTI_VLAN_RECORDS_ $table>]: &[&$crate::VlanDescriptor<'static>] =
				&[$( &[<RTI_VLAN_ $name>] ),*];

			$vis static $table: $crate::StaticTable<'static> =
				$crate::StaticTable::new([<__RTI_VLAN_RECORDS_ $table>]);
		}
	};
}
