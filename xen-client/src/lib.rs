pub mod blog;
pub mod error;
pub mod http_client;
pub mod models;
pub mod pricing;
pub mod support;

pub use blog::{BlogApi, PostQuery};
pub use error::XenClientError;
pub use http_client::{HttpClient, BASE_URL_ENV, DEFAULT_BASE_URL};
pub use pricing::PricingApi;
pub use support::SupportApi;

/// Unified client for the Xen landing backend.
///
/// One instance per process is enough; it is cheap to clone and every request
/// goes through the same [`HttpClient`] choke point. Failures come back as
/// typed [`XenClientError`] values; each page decides for itself whether an
/// empty fallback shape is an acceptable substitute.
#[derive(Debug, Clone)]
pub struct XenClient {
    http: HttpClient,
}

impl XenClient {
    /// Create a client against an explicit base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: HttpClient::new(base_url),
        }
    }

    /// Create a client from `XEN_API_URL`, falling back to the default host.
    pub fn from_env() -> Self {
        Self {
            http: HttpClient::from_env(),
        }
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// Blog endpoints: posts, categories, tags, comments, newsletter.
    pub fn blog(&self) -> BlogApi<'_> {
        BlogApi::new(&self.http)
    }

    /// Pricing endpoints: plans, add-ons, FAQs.
    pub fn pricing(&self) -> PricingApi<'_> {
        PricingApi::new(&self.http)
    }

    /// Support endpoints: knowledge base, tickets, contact form.
    pub fn support(&self) -> SupportApi<'_> {
        SupportApi::new(&self.http)
    }
}
