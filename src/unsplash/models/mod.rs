use serde::{Deserialize, Deserializer};

mod photo;
mod search;

pub use photo::{Exif, Location, Photo, Tag, User};
pub use search::SearchResult;

/// Reads an explicit `null` as the type's default, the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
