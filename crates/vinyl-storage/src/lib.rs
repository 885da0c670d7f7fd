pub mod memory;
pub mod mongo;

pub use memory::InMemoryAlbumStore;
pub use mongo::MongoAlbumRepository;
pub use vinyl_core::{AlbumRepository, StorageError};
