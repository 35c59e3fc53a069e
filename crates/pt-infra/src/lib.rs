//! Adapters behind the Pet Thoughts ports: key/value storage, gallery
//! capture and platform directories.

pub mod capture;
pub mod fs;
pub mod storage;

pub use capture::FileGalleryCapture;
pub use fs::DirsAppDirsAdapter;
pub use storage::{FileKeyValueStore, InMemoryKeyValueStore};
