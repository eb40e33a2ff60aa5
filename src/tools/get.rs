use rmcp::schemars;
use serde::Deserialize;
use tokio_util::sync::CancellationToken;

use super::args::non_empty;
use crate::format::photo_details;
use crate::unsplash::{self, Client, Error, Photo, Result};

/// Arguments of the `get_photo` tool.
#[derive(Debug, Clone, Default, Deserialize, schemars::JsonSchema)]
pub struct GetPhotoArgs {
    /// The photo ID to retrieve (required)
    #[serde(rename = "photoId")]
    pub photo_id: Option<String>,
}

pub async fn get_photo(
    client: &Client,
    args: GetPhotoArgs,
    cancel: &CancellationToken,
) -> Result<String> {
    let photo_id = non_empty(args.photo_id).ok_or_else(|| Error::missing("photoId"))?;
    if is_dot_segment(&photo_id) {
        return Err(Error::invalid(
            "photoId",
            format!("`{photo_id}` is not a photo ID"),
        ));
    }

    let body = client
        .get(&[unsplash::PHOTOS, photo_id.as_str()], &[], cancel)
        .await?;
    let photo: Photo = unsplash::decode(&body, "photo details")?;

    Ok(photo_details(&photo))
}

/// `.` and `..` (also percent-encoded) are dropped or resolved by URL
/// normalisation, so they can never address a single photo.
fn is_dot_segment(segment: &str) -> bool {
    let segment = segment.to_ascii_lowercase().replace("%2e", ".");
    segment == "." || segment == ".."
}
