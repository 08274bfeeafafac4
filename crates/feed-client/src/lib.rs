//! Feed client for the remote movie catalog.
//!
//! This crate fetches the `movies.json` document and hands the body to the
//! catalog normalizer. It handles:
//! - HTTP GET against the feed endpoint (or reading a local JSON file)
//! - Classifying failures into `FeedError` (network, status, malformed)
//!
//! There are no retries and no timeout beyond the transport default: a
//! request that never answers leaves the caller waiting.

use catalog::{FeedError, MovieRecord, normalizer};
use std::fmt;
use std::path::PathBuf;
use tracing::{debug, info, instrument, warn};

/// Where the feed document comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedSource {
    /// An HTTP(S) endpoint serving the JSON document
    Http(String),
    /// A JSON document on disk
    File(PathBuf),
}

impl fmt::Display for FeedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedSource::Http(url) => write!(f, "{}", url),
            FeedSource::File(path) => write!(f, "file://{}", path.display()),
        }
    }
}

/// Client for the catalog feed.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct FeedClient {
    http: reqwest::Client,
    source: FeedSource,
}

impl FeedClient {
    /// Create a client for the given source
    pub fn new(source: FeedSource) -> Self {
        Self {
            http: reqwest::Client::new(),
            source,
        }
    }

    /// Shorthand for an HTTP feed
    pub fn http(url: impl Into<String>) -> Self {
        Self::new(FeedSource::Http(url.into()))
    }

    pub fn source(&self) -> &FeedSource {
        &self.source
    }

    /// Fetch the raw document body.
    ///
    /// Non-2xx responses are `FeedError::HttpStatus`; anything that stops
    /// the request or the body transfer is `FeedError::Network`.
    #[instrument(skip(self), fields(source = %self.source))]
    pub async fn fetch_body(&self) -> Result<Vec<u8>, FeedError> {
        match &self.source {
            FeedSource::Http(url) => {
                debug!("GET {}", url);
                let response = self.http.get(url).send().await.map_err(network_error)?;

                let status = response.status();
                if !status.is_success() {
                    warn!("Feed endpoint returned {}", status);
                    return Err(FeedError::HttpStatus {
                        status: status.as_u16(),
                    });
                }

                let body = response.bytes().await.map_err(network_error)?;
                debug!("Received {} bytes", body.len());
                Ok(body.to_vec())
            }
            FeedSource::File(path) => {
                tokio::fs::read(path).await.map_err(|err| FeedError::Io {
                    path: path.display().to_string(),
                    reason: err.to_string(),
                })
            }
        }
    }

    /// Fetch and normalize the whole catalog
    pub async fn fetch_catalog(&self) -> Result<Vec<MovieRecord>, FeedError> {
        let body = self.fetch_body().await?;
        let records = normalizer::load_feed(&body)?;
        info!("Fetched {} movies from {}", records.len(), self.source);
        Ok(records)
    }
}

fn network_error(err: reqwest::Error) -> FeedError {
    warn!("Feed request failed: {}", err);
    FeedError::Network(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Router;
    use axum::http::StatusCode;
    use axum::routing::get;
    use std::io::Write;

    const FEED: &str = r#"{
        "Movies": [
            { "title": "Heat", "genre": "Crime", "total_rating": 89 },
            { "title": "Up", "genre": ["Animation"], "screenings": { "Cinema X": ["10:00"] } }
        ]
    }"#;

    /// Serve a small router on a random local port and return its base URL
    async fn serve() -> String {
        let app = Router::new()
            .route("/movies.json", get(|| async { FEED }))
            .route(
                "/broken",
                get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
            )
            .route("/html", get(|| async { "<html>maintenance</html>" }))
            .route("/wrong-shape", get(|| async { r#"{"movies": []}"# }));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_fetch_catalog_ok() {
        let base = serve().await;
        let client = FeedClient::http(format!("{}/movies.json", base));

        let records = client.fetch_catalog().await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "Heat");
        assert_eq!(records[1].screenings["Cinema X"], vec!["10:00"]);
    }

    #[tokio::test]
    async fn test_http_500_is_status_failure() {
        let base = serve().await;
        let client = FeedClient::http(format!("{}/broken", base));

        let err = client.fetch_catalog().await.unwrap_err();
        assert_eq!(err, FeedError::HttpStatus { status: 500 });
    }

    #[tokio::test]
    async fn test_missing_route_is_status_failure() {
        let base = serve().await;
        let client = FeedClient::http(format!("{}/nope", base));

        let err = client.fetch_catalog().await.unwrap_err();
        assert_eq!(err, FeedError::HttpStatus { status: 404 });
    }

    #[tokio::test]
    async fn test_non_json_body_is_malformed() {
        let base = serve().await;

        for path in ["/html", "/wrong-shape"] {
            let client = FeedClient::http(format!("{}{}", base, path));
            let err = client.fetch_catalog().await.unwrap_err();
            assert!(matches!(err, FeedError::MalformedResponse(_)), "{}", path);
        }
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_network_failure() {
        // Grab a free port, then close it so nothing is listening
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = FeedClient::http(format!("http://{}/movies.json", addr));
        let err = client.fetch_catalog().await.unwrap_err();
        assert!(matches!(err, FeedError::Network(_)));
    }

    #[tokio::test]
    async fn test_file_source() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(FEED.as_bytes()).unwrap();

        let client = FeedClient::new(FeedSource::File(file.path().to_path_buf()));
        let records = client.fetch_catalog().await.unwrap();
        assert_eq!(records.len(), 2);
    }

    #[tokio::test]
    async fn test_missing_file_is_io_failure() {
        let client = FeedClient::new(FeedSource::File(PathBuf::from(
            "/definitely/not/here/movies.json",
        )));
        let err = client.fetch_catalog().await.unwrap_err();
        assert!(matches!(err, FeedError::Io { .. }));
    }

    #[test]
    fn test_source_display() {
        assert_eq!(
            FeedSource::Http("http://x/movies.json".to_string()).to_string(),
            "http://x/movies.json"
        );
        assert_eq!(
            FeedSource::File(PathBuf::from("/tmp/m.json")).to_string(),
            "file:///tmp/m.json"
        );
    }
}
