use async_trait::async_trait;
use reqwest::{Request, Response};

/// Anything that can send a prepared request. Decorators such as
/// [`BrowserHeaders`](super::BrowserHeaders) wrap another `HttpClient`.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn execute(&self, req: Request) -> reqwest::Result<Response>;
}
