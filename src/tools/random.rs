use std::fmt::Write;

use rmcp::schemars;
use serde::Deserialize;
use tokio_util::sync::CancellationToken;

use super::args::{int_or, non_empty, BoolArg, IntArg};
use crate::format::photo_summary;
use crate::unsplash::{self, Client, Photo, QueryParams, Result};

pub const MAX_COUNT: i64 = 30;

/// Arguments of the `random_photo` tool.
#[derive(Debug, Clone, Default, Deserialize, schemars::JsonSchema)]
pub struct RandomPhotoArgs {
    /// Number of photos (1-30)
    pub count: Option<IntArg>,
    /// Comma-separated public collection IDs
    pub collections: Option<String>,
    /// Comma-separated public topic IDs
    pub topics: Option<String>,
    /// Limit to a specific user's photos
    pub username: Option<String>,
    /// Limit results to matching photos
    pub query: Option<String>,
    /// Filter by orientation (landscape, portrait, squarish)
    #[schemars(extend("enum" = ["landscape", "portrait", "squarish"]))]
    pub orientation: Option<String>,
    /// Content safety filter (low or high)
    #[schemars(extend("enum" = ["low", "high"]))]
    pub content_filter: Option<String>,
    /// Limit to featured photos
    pub featured: Option<BoolArg>,
}

/// How many photos were asked for.
///
/// `/photos/random` answers with a bare object when `count` is absent and with
/// an array when it is present, so the same value decides both the query and
/// the decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Batch {
    Single,
    Many(u32),
}

impl Batch {
    pub fn from_count(count: i64) -> Self {
        match count.clamp(1, MAX_COUNT) {
            1 => Self::Single,
            count => Self::Many(count as u32),
        }
    }

    pub fn count(self) -> u32 {
        match self {
            Self::Single => 1,
            Self::Many(count) => count,
        }
    }

    pub fn decode(self, body: &[u8]) -> Result<Vec<Photo>> {
        match self {
            Self::Single => unsplash::decode(body, "single random photo").map(|photo| vec![photo]),
            Self::Many(_) => unsplash::decode(body, "multiple random photos"),
        }
    }
}

/// Validated random-photo request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomPhoto {
    pub batch: Batch,
    pub collections: Option<String>,
    pub topics: Option<String>,
    pub username: Option<String>,
    pub query: Option<String>,
    pub orientation: Option<String>,
    pub content_filter: Option<String>,
    pub featured: bool,
}

impl From<RandomPhotoArgs> for RandomPhoto {
    fn from(args: RandomPhotoArgs) -> Self {
        Self {
            batch: Batch::from_count(int_or(args.count.as_ref(), 1, None)),
            collections: non_empty(args.collections),
            topics: non_empty(args.topics),
            username: non_empty(args.username),
            query: non_empty(args.query),
            orientation: non_empty(args.orientation),
            content_filter: non_empty(args.content_filter),
            featured: args
                .featured
                .as_ref()
                .and_then(BoolArg::resolve)
                .unwrap_or(false),
        }
    }
}

impl RandomPhoto {
    pub fn query_params(&self) -> QueryParams {
        let mut params = QueryParams::new();

        if let Batch::Many(count) = self.batch {
            params.push(("count", count.to_string()));
        }

        let filters = [
            ("collections", &self.collections),
            ("topics", &self.topics),
            ("username", &self.username),
            ("query", &self.query),
            ("orientation", &self.orientation),
            ("content_filter", &self.content_filter),
        ];
        for (key, value) in filters {
            if let Some(value) = value {
                params.push((key, value.clone()));
            }
        }

        if self.featured {
            params.push(("featured", "true".to_string()));
        }

        params
    }
}

pub async fn random_photo(
    client: &Client,
    args: RandomPhotoArgs,
    cancel: &CancellationToken,
) -> Result<String> {
    let request = RandomPhoto::from(args);

    let body = client
        .get(unsplash::RANDOM_PHOTO, &request.query_params(), cancel)
        .await?;
    let photos = request.batch.decode(&body)?;

    tracing::debug!(
        requested = request.batch.count(),
        returned = photos.len(),
        "random photos fetched"
    );

    Ok(render(&photos))
}

pub fn render(photos: &[Photo]) -> String {
    let mut out = String::new();

    let _ = write!(out, "Random Photos ({}):\n\n", photos.len());
    for (index, photo) in photos.iter().enumerate() {
        let _ = writeln!(out, "Photo {}:", index + 1);
        out.push_str(&photo_summary(photo));
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn request(value: serde_json::Value) -> RandomPhoto {
        RandomPhoto::from(serde_json::from_value::<RandomPhotoArgs>(value).unwrap())
    }

    #[test]
    fn count_is_clamped_and_only_sent_above_one() {
        for (raw, batch) in [
            (json!(null), Batch::Single),
            (json!(1), Batch::Single),
            (json!("1"), Batch::Single),
            (json!(0), Batch::Single),
            (json!(-7), Batch::Single),
            (json!("nope"), Batch::Single),
            (json!(5), Batch::Many(5)),
            (json!("5"), Batch::Many(5)),
            (json!(99), Batch::Many(30)),
            (json!("99"), Batch::Many(30)),
        ] {
            let request = request(json!({"count": raw}));
            assert_eq!(request.batch, batch, "count {raw}");

            let sent = request
                .query_params()
                .into_iter()
                .find(|(key, _)| *key == "count")
                .map(|(_, value)| value);
            match batch {
                Batch::Single => assert_eq!(sent, None),
                Batch::Many(count) => assert_eq!(sent, Some(count.to_string())),
            }
        }
    }

    #[test]
    fn featured_only_sent_when_true() {
        for (raw, sent) in [
            (json!(true), true),
            (json!("true"), true),
            (json!("T"), true),
            (json!(false), false),
            (json!("false"), false),
            (json!("maybe"), false),
        ] {
            let params = request(json!({"featured": raw})).query_params();
            assert_eq!(
                params.contains(&("featured", "true".to_string())),
                sent,
                "featured {raw}"
            );
            assert!(!params.contains(&("featured", "false".to_string())));
        }
    }

    #[test]
    fn filters_pass_through_when_non_empty() {
        let params = request(json!({
            "collections": "1,2",
            "topics": "",
            "username": "jane",
            "content_filter": "high",
        }))
        .query_params();

        assert_eq!(
            params,
            vec![
                ("collections", "1,2".to_string()),
                ("username", "jane".to_string()),
                ("content_filter", "high".to_string()),
            ]
        );
    }

    #[test]
    fn decode_follows_batch() {
        let object = br#"{"id": "a", "urls": {}}"#;
        let array = br#"[{"id": "a", "urls": {}}, {"id": "b", "urls": {}}]"#;

        assert_eq!(Batch::Single.decode(object).unwrap().len(), 1);
        assert_eq!(Batch::Many(2).decode(array).unwrap().len(), 2);

        assert!(matches!(
            Batch::Single.decode(array),
            Err(unsplash::Error::Decode { .. })
        ));
        assert!(matches!(
            Batch::Many(2).decode(object),
            Err(unsplash::Error::Decode { .. })
        ));
    }

    #[test]
    fn render_numbers_photos_from_one() {
        let photos = Batch::Many(2)
            .decode(br#"[{"id": "a"}, {"id": "b"}]"#)
            .unwrap();

        let text = render(&photos);
        assert!(text.starts_with("Random Photos (2):\n\nPhoto 1:\n- ID: a\n"));
        assert!(text.contains("\nPhoto 2:\n- ID: b\n"));
    }
}
