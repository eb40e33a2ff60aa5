use std::fmt::Write;

use rmcp::schemars;
use serde::Deserialize;
use tokio_util::sync::CancellationToken;

use super::args::{int_or, non_empty, IntArg};
use crate::format::photo_summary;
use crate::unsplash::{self, query_params, Client, Error, QueryParams, Result, SearchResult};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PER_PAGE: i64 = 10;
pub const MAX_PER_PAGE: i64 = 30;
pub const DEFAULT_ORDER_BY: &str = "relevant";

/// Arguments of the `search_photos` tool as sent by the caller.
#[derive(Debug, Clone, Default, Deserialize, schemars::JsonSchema)]
pub struct SearchPhotosArgs {
    /// Search keyword (required)
    pub query: Option<String>,
    /// Page number (1-based)
    pub page: Option<IntArg>,
    /// Results per page (1-30)
    pub per_page: Option<IntArg>,
    /// Sort method (relevant or latest)
    #[schemars(extend("enum" = ["relevant", "latest"]))]
    pub order_by: Option<String>,
    /// Color filter (black_and_white, black, white, yellow, orange, red, purple, magenta, green, teal, blue)
    #[schemars(extend("enum" = [
        "black_and_white", "black", "white", "yellow", "orange", "red",
        "purple", "magenta", "green", "teal", "blue"
    ]))]
    pub color: Option<String>,
    /// Orientation filter (landscape, portrait, squarish)
    #[schemars(extend("enum" = ["landscape", "portrait", "squarish"]))]
    pub orientation: Option<String>,
}

/// Validated search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPhotos {
    pub query: String,
    pub page: i64,
    pub per_page: i64,
    /// Forwarded as given; upstream rejects unknown orderings.
    pub order_by: String,
    pub color: Option<String>,
    pub orientation: Option<String>,
}

impl TryFrom<SearchPhotosArgs> for SearchPhotos {
    type Error = Error;

    fn try_from(args: SearchPhotosArgs) -> Result<Self> {
        let query = non_empty(args.query).ok_or_else(|| Error::missing("query"))?;

        Ok(Self {
            query,
            page: int_or(args.page.as_ref(), DEFAULT_PAGE, None),
            per_page: int_or(args.per_page.as_ref(), DEFAULT_PER_PAGE, Some((1, MAX_PER_PAGE))),
            order_by: non_empty(args.order_by).unwrap_or_else(|| DEFAULT_ORDER_BY.to_string()),
            color: non_empty(args.color),
            orientation: non_empty(args.orientation),
        })
    }
}

impl SearchPhotos {
    pub fn query_params(&self) -> QueryParams {
        let mut params = query_params!(
            "query" => self.query,
            "page" => self.page,
            "per_page" => self.per_page,
            "order_by" => self.order_by,
        );

        if let Some(color) = &self.color {
            params.push(("color", color.clone()));
        }
        if let Some(orientation) = &self.orientation {
            params.push(("orientation", orientation.clone()));
        }

        params
    }
}

pub async fn search_photos(
    client: &Client,
    args: SearchPhotosArgs,
    cancel: &CancellationToken,
) -> Result<String> {
    let request = SearchPhotos::try_from(args)?;

    let body = client
        .get(unsplash::SEARCH_PHOTOS, &request.query_params(), cancel)
        .await?;
    let result: SearchResult = unsplash::decode(&body, "search response")?;

    tracing::debug!(
        query = %request.query,
        returned = result.results().len(),
        total = result.total(),
        "search finished"
    );

    Ok(render(&request, &result))
}

pub fn render(request: &SearchPhotos, result: &SearchResult) -> String {
    let mut out = String::new();

    let _ = write!(
        out,
        "Found {} photos (Page {}/{}):\n\n",
        result.results().len(),
        request.page,
        result.total_pages()
    );
    for photo in result.results() {
        out.push_str(&photo_summary(photo));
        out.push('\n');
    }

    out
}
