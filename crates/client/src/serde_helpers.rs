//! Serde helpers for the alert API's loose JSON typing.
//!
//! Invariants:
//! - A JSON `null` in a non-optional field decodes to that field's empty value,
//!   the same as an absent field.

use serde::{Deserialize, Deserializer};

pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
