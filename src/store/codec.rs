use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::store::error::StoreError;

/// Encode a collection value into its durable representation: pretty-printed
/// JSON with stable struct field order.
pub fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, StoreError> {
    let mut bytes = serde_json::to_vec_pretty(value)
        .map_err(|e| StoreError::Persistence(e.into()))?;
    bytes.push(b'\n');
    Ok(bytes)
}

/// Decode a collection value from its durable representation.
pub fn decode<T: DeserializeOwned>(name: &str, bytes: &[u8]) -> Result<T, StoreError> {
    serde_json::from_slice(bytes).map_err(|source| StoreError::CorruptCollection {
        name: name.to_string(),
        source,
    })
}
