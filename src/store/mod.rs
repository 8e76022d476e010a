pub mod codec;
pub mod collection;
pub mod error;
pub mod fs;
pub mod locks;
pub mod traits;

pub use collection::{Collection, CollectionStore, Outcome};
pub use error::StoreError;
pub use fs::FsBacking;
pub use locks::LockRegistry;
pub use traits::CollectionBacking;
