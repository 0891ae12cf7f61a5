//! Strongly-typed identifiers for catalogue entities
//!
//! Using newtype wrappers around the storage-assigned integer keys provides
//! type safety and prevents accidental mixing of different identifier types.
//! Identity is assigned by the active storage module on `add`; a value of `0`
//! is the sentinel for a record that has not been persisted yet.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Sentinel identity carried by records the storage has not
            /// persisted yet (`create_new` output).
            pub const UNASSIGNED: Self = Self(0);

            /// Wraps an existing storage key
            pub fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the underlying storage key
            pub fn value(&self) -> i64 {
                self.0
            }

            /// Returns true once storage has assigned a real identity
            pub fn is_assigned(&self) -> bool {
                self.0 != 0
            }

            /// Returns the identifier prefix for display
            pub fn prefix() -> &'static str {
                $prefix
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::UNASSIGNED
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}-{}", $prefix, self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                // Strip prefix if present
                let raw = s.strip_prefix(concat!($prefix, "-")).unwrap_or(s);
                Ok(Self(raw.parse()?))
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> i64 {
                id.0
            }
        }
    };
}

define_id!(DirectorId, "DIR");
define_id!(MovieId, "MOV");
define_id!(StudioId, "STU");
