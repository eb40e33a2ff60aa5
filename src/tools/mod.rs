//! Tool handlers: argument validation, the API call, and rendering.

pub mod args;
pub mod get;
pub mod random;
pub mod search;

pub use get::{get_photo, GetPhotoArgs};
pub use random::{random_photo, Batch, RandomPhoto, RandomPhotoArgs};
pub use search::{search_photos, SearchPhotos, SearchPhotosArgs};
