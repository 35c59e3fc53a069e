mod file_gallery;

pub use file_gallery::FileGalleryCapture;
