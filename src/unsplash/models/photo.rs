use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::null_as_default;

/// A photo as returned by the `/photos/*` and `/search/photos` endpoints.
///
/// Upstream sends `null` for many fields. Optional strings decode to `None`
/// and the accessors report them as empty; everything else falls back to its
/// default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Photo {
    #[serde(deserialize_with = "null_as_default")]
    id: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    alt_description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    width: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    height: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    likes: u64,
    #[serde(default)]
    downloads: Option<u64>,
    #[serde(default, deserialize_with = "null_as_default")]
    urls: HashMap<String, String>,
    #[serde(default)]
    user: Option<User>,
    #[serde(default)]
    location: Option<Location>,
    #[serde(default)]
    exif: Option<Exif>,
    #[serde(default, deserialize_with = "null_as_default")]
    tags: Vec<Tag>,
}

impl Photo {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn description(&self) -> &str {
        text(&self.description)
    }

    pub fn alt_description(&self) -> &str {
        text(&self.alt_description)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn likes(&self) -> u64 {
        self.likes
    }

    /// Only present when the access key's scope allows it.
    pub fn downloads(&self) -> Option<u64> {
        self.downloads
    }

    pub fn urls(&self) -> &HashMap<String, String> {
        &self.urls
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    pub fn exif(&self) -> Option<&Exif> {
        self.exif.as_ref()
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    username: String,
    #[serde(default)]
    portfolio_url: Option<String>,
}

impl User {
    pub fn name(&self) -> &str {
        text(&self.name)
    }

    /// Handle without the leading `@`.
    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn portfolio_url(&self) -> &str {
        text(&self.portfolio_url)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    country: Option<String>,
}

impl Location {
    pub fn name(&self) -> &str {
        text(&self.name)
    }

    pub fn city(&self) -> &str {
        text(&self.city)
    }

    pub fn country(&self) -> &str {
        text(&self.country)
    }

    pub fn is_empty(&self) -> bool {
        self.name().is_empty() && self.city().is_empty() && self.country().is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exif {
    #[serde(default)]
    make: Option<String>,
    #[serde(default)]
    model: Option<String>,
    #[serde(default)]
    exposure_time: Option<String>,
    #[serde(default)]
    aperture: Option<String>,
    #[serde(default)]
    focal_length: Option<String>,
    #[serde(default)]
    iso: Option<u32>,
}

impl Exif {
    pub fn make(&self) -> &str {
        text(&self.make)
    }

    pub fn model(&self) -> &str {
        text(&self.model)
    }

    pub fn exposure_time(&self) -> &str {
        text(&self.exposure_time)
    }

    pub fn aperture(&self) -> &str {
        text(&self.aperture)
    }

    pub fn focal_length(&self) -> &str {
        text(&self.focal_length)
    }

    /// ISO 0 means upstream does not know it.
    pub fn iso(&self) -> Option<u32> {
        self.iso.filter(|&iso| iso > 0)
    }

    pub fn is_empty(&self) -> bool {
        self.make().is_empty()
            && self.model().is_empty()
            && self.exposure_time().is_empty()
            && self.aperture().is_empty()
            && self.focal_length().is_empty()
            && self.iso().is_none()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    #[serde(default, deserialize_with = "null_as_default")]
    title: String,
}

impl Tag {
    pub fn title(&self) -> &str {
        &self.title
    }
}

fn text(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or_default()
}
