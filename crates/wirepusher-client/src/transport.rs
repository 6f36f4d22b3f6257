use std::future::Future;
use std::time::Duration;

use reqwest::StatusCode;
use url::Url;

pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

/// Default bound on a single request, connect included.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Something that can issue a GET and report the status code.
///
/// The relay's response body carries nothing we use, so only the status is
/// returned. Implementations must be reusable for sequential calls.
pub trait Transport {
    fn get(&self, url: &Url) -> impl Future<Output = Result<StatusCode, TransportError>> + Send;
}

/// reqwest-backed transport. Cloning shares the connection pool.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("wirepusher/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }

    /// Use a caller-configured client (proxies, custom TLS roots, ...).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    async fn get(&self, url: &Url) -> Result<StatusCode, TransportError> {
        let response = self.client.get(url.clone()).send().await?;
        Ok(response.status())
    }
}
