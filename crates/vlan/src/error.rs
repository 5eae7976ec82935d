//! Registry error taxonomy.
//!
//! Every operation returns [`Result`]. Failures go back to the immediate caller; the registry
//! never retries or escalates. [`ErrorCode`] flattens results into numeric status values for
//! callers that speak the routing layer's integer protocol.

/// Registry result alias.
pub type Result<T, E = VlanError> = core::result::Result<T, E>;

/// Failure modes of registry operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum VlanError {
	/// Bad argument, or a lookup/membership scan found no match.
	///
	/// The two meanings share one variant; callers cannot tell them apart.
	#[error("invalid parameter or no matching vlan")]
	InvalidParam,
	/// Reserved for operations compiled out of this build.
	#[error("operation not supported by this build")]
	NotSupported,
	/// Reserved for unspecified internal failures.
	#[error("internal failure")]
	Failed,
	/// The active table has zero capacity.
	#[error("vlan table is empty")]
	ObjectEmpty,
	/// The supplied buffer cannot hold the records that must survive relocation.
	#[error("vlan table too short: capacity={capacity} required={required}")]
	TableTooShort {
		/// Records the supplied buffer can hold.
		capacity: usize,
		/// Records that must be carried forward.
		required: usize,
	},
	/// No free slot is left in the dynamic table.
	#[error("vlan table overflow: capacity={capacity}")]
	TableOverflow {
		/// Capacity of the full table.
		capacity: usize,
	},
	/// No dynamic table has been installed.
	#[error("vlan table not set up")]
	TableNotSetup,
}

/// Numeric status values understood by the routing layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum ErrorCode {
	Ok = 0,
	InvalidParam = 1,
	NotSupported = 2,
	Failed = 3,
	ObjectEmpty = 4,
	TableTooShort = 5,
	TableOverflow = 6,
	TableNotSetup = 7,
}

impl VlanError {
	/// Returns the status code reported for this error.
	pub const fn code(self) -> ErrorCode {
		match self {
			Self::InvalidParam => ErrorCode::InvalidParam,
			Self::NotSupported => ErrorCode::NotSupported,
			Self::Failed => ErrorCode::Failed,
			Self::ObjectEmpty => ErrorCode::ObjectEmpty,
			Self::TableTooShort { .. } => ErrorCode::TableTooShort,
			Self::TableOverflow { .. } => ErrorCode::TableOverflow,
			Self::TableNotSetup => ErrorCode::TableNotSetup,
		}
	}
}

impl ErrorCode {
	/// Flattens a registry result into its status code.
	pub fn of<T>(result: &Result<T>) -> Self {
		match result {
			Ok(_) => Self::Ok,
			Err(e) => e.code(),
		}
	}

	/// Returns the raw status value.
	pub const fn as_u8(self) -> u8 {
		self as u8
	}

	/// Returns true for [`ErrorCode::Ok`].
	pub const fn is_ok(self) -> bool {
		matches!(self, Self::Ok)
	}
}

impl From<VlanError> for ErrorCode {
	fn from(err: VlanError) -> Self {
		err.code()
	}
}

impl TryFrom<u8> for ErrorCode {
	type Error = u8;

	fn try_from(raw: u8) -> Result<Self, u8> {
		Ok(match raw {
			0 => Self::Ok,
			1 => Self::InvalidParam,
			2 => Self::NotSupported,
			3 => Self::Failed,
			4 => Self::ObjectEmpty,
			5 => Self::TableTooShort,
			6 => Self::TableOverflow,
			7 => Self::TableNotSetup,
			other => return Err(other),
		})
	}
}
