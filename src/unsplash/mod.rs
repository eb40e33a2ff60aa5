use bytes::Bytes;
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION},
    Client as HttpClient, Method, Request, StatusCode, Url,
};
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;

pub mod error;
pub mod models;
pub mod result;

pub use error::{Error, TransportError};
pub use models::{Exif, Location, Photo, SearchResult, Tag, User};
pub use result::Result;

pub const API_URL: &str = "https://api.unsplash.com";

pub const USER_AGENT: &str = concat!("unsplash-mcp-server/", env!("CARGO_PKG_VERSION"));

/// Endpoints are given as path segments; each one is percent-encoded on its
/// own, so caller data cannot add segments.
pub const SEARCH_PHOTOS: &[&str] = &["search", "photos"];
pub const RANDOM_PHOTO: &[&str] = &["photos", "random"];
pub const PHOTOS: &str = "photos";

macro_rules! query_params {
    ($($key:expr => $value:expr),* $(,)?) => {
        vec![
            $(($key, $value.to_string())),*
        ]
    };
}

pub(crate) use query_params;

/// Query parameters in the order they were added.
pub type QueryParams = Vec<(&'static str, String)>;

/// Unsplash REST client.
///
/// Holds no per-request state, so clones share the connection pool and can be
/// used from concurrent tool calls.
#[derive(Clone)]
pub struct Client {
    http: HttpClient,
    base_url: Url,
}

impl Client {
    pub fn new<T: AsRef<str>>(access_key: T) -> Result<Self> {
        Self::with_base_url(access_key, API_URL)
    }

    pub fn with_base_url<T: AsRef<str>, U: AsRef<str>>(access_key: T, base_url: U) -> Result<Self> {
        let access_key = access_key.as_ref().trim();
        if access_key.is_empty() {
            return Err(Error::Config("access key is empty".to_string()));
        }

        let base_url = Url::parse(base_url.as_ref())
            .map_err(|err| Error::Config(format!("invalid API url {}: {err}", base_url.as_ref())))?;
        if base_url.cannot_be_a_base() {
            return Err(Error::Config(format!("invalid API url {base_url}")));
        }

        let auth = format!("Client-ID {access_key}");
        let mut auth = HeaderValue::from_str(&auth)
            .map_err(|_| Error::Config("access key is not a valid header value".to_string()))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert("Accept-Version", HeaderValue::from_static("v1"));
        headers.insert(AUTHORIZATION, auth);

        let http = HttpClient::builder()
            .default_headers(headers)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|err| Error::Config(format!("failed to build HTTP client: {err}")))?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Sends a request and returns the undecoded body of a 2xx response.
    pub async fn request(
        &self,
        method: Method,
        path: &[&str],
        params: &[(&str, String)],
        cancel: &CancellationToken,
    ) -> Result<Bytes> {
        let url = self.url(path);
        let endpoint = url.path().to_string();

        let request = self
            .http
            .request(method, url)
            .query(params)
            .build()
            .map_err(|err| transport(&endpoint, err.into()))?;

        tracing::debug!(url = %request.url(), "making API request");

        let (status, body) = self
            .send_request(request, cancel)
            .await
            .map_err(|err| transport(&endpoint, err))?;

        if !status.is_success() {
            let body = String::from_utf8_lossy(&body).into_owned();
            tracing::warn!(%endpoint, status = status.as_u16(), %body, "API error");

            return Err(Error::Upstream {
                endpoint,
                status,
                body,
            });
        }

        Ok(body)
    }

    pub async fn get(
        &self,
        path: &[&str],
        params: &[(&str, String)],
        cancel: &CancellationToken,
    ) -> Result<Bytes> {
        self.request(Method::GET, path, params, cancel).await
    }

    fn url(&self, path: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(path);
        }

        url
    }

    async fn send_request(
        &self,
        request: Request,
        cancel: &CancellationToken,
    ) -> core::result::Result<(StatusCode, Bytes), TransportError> {
        let exchange = async {
            let response = self.http.execute(request).await?;
            let status = response.status();
            let body = response.bytes().await?;

            Ok::<_, reqwest::Error>((status, body))
        };

        tokio::select! {
            biased;

            _ = cancel.cancelled() => Err(TransportError::Cancelled),
            result = exchange => result.map_err(TransportError::Request),
        }
    }
}

/// Decodes a response body, naming what was expected on failure.
pub fn decode<T: DeserializeOwned>(body: &[u8], what: &'static str) -> Result<T> {
    serde_json::from_slice(body).map_err(|source| Error::Decode { what, source })
}

fn transport(endpoint: &str, source: TransportError) -> Error {
    Error::Transport {
        endpoint: endpoint.to_string(),
        source,
    }
}
