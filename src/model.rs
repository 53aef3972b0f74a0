//! The customer record.

use serde::{Deserialize, Deserializer, Serialize};

/// One row of the `customer` table. `id` is assigned by the store on insert;
/// any id sent in a request body is ignored.
///
/// Absent or `null` fields in a request body decode to their zero value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Customer {
    /// Stored as SERIAL (int4); widened so path ids past the int4 range still round-trip.
    #[serde(default, deserialize_with = "null_as_default")]
    #[sqlx(try_from = "i32")]
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
}

impl Customer {
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    /// Decode a request body. Content-Type is not inspected.
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
