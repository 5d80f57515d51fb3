//! Type-safe identifier wrappers around [`Uuid`].
//!
//! Amebas and foods carry strongly-typed IDs so that movement records and
//! snapshots cannot mix them up. IDs use UUID v7 (time-ordered); they never
//! influence simulation outcomes, only bookkeeping.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Declares an entity ID newtype over a v7 [`Uuid`].
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
        #[ts(export, export_to = "bindings/")]
        pub struct $name(pub Uuid);

        impl $name {
            /// A fresh, time-ordered ID.
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_id! {
    /// Unique identifier for an ameba on the play desk.
    AmebaId
}

define_id! {
    /// Unique identifier for a food item on the play desk.
    FoodId
}
