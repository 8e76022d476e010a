use thiserror::Error;

/// Failures surfaced by the collection store and its backing layers.
///
/// Absence of a durable record is not an error; the store substitutes the
/// collection's initial value. Everything here aborts the request.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The durable bytes for a collection failed to decode.
    #[error("collection `{name}` holds corrupt data: {source}")]
    CorruptCollection {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    /// Byte-level read or write failed for a reason other than absence.
    #[error("storage I/O failed: {0}")]
    Persistence(#[from] std::io::Error),
}
