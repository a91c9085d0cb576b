use crate::config::BrowserProfile;
use crate::error::PollError;
use crate::fetch::client::HttpClient;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ORIGIN, REFERER, USER_AGENT};

/// An [`HttpClient`] wrapper that sets `User-Agent`, `Origin` and `Referer`
/// on every request, so the status API treats us like a browser visiting
/// chargefinder.com.
///
/// Header values are validated once in [`BrowserHeaders::new`]; sending never
/// fails on a bad header.
pub struct BrowserHeaders<C> {
    inner: C,
    headers: HeaderMap,
}

impl<C> BrowserHeaders<C> {
    pub fn new(inner: C, profile: &BrowserProfile) -> Result<Self, PollError> {
        let mut headers = HeaderMap::new();
        for (name, value) in [
            (USER_AGENT, &profile.user_agent),
            (ORIGIN, &profile.origin),
            (REFERER, &profile.referer),
        ] {
            let value = HeaderValue::from_str(value)
                .map_err(|e| PollError::Client(format!("invalid {name} header: {e}")))?;
            headers.insert(name, value);
        }
        Ok(Self { inner, headers })
    }
}

#[async_trait]
impl<C: HttpClient> HttpClient for BrowserHeaders<C> {
    async fn execute(&self, mut req: reqwest::Request) -> reqwest::Result<reqwest::Response> {
        req.headers_mut().extend(self.headers.clone());
        self.inner.execute(req).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::BasicClient;
    use std::time::Duration;

    #[test]
    fn test_rejects_header_with_newline() {
        let profile = BrowserProfile {
            user_agent: "bad\nagent".to_string(),
            ..BrowserProfile::default()
        };
        let client = BasicClient::new(Duration::from_secs(1)).unwrap();
        let result = BrowserHeaders::new(client, &profile);
        assert!(matches!(result, Err(PollError::Client(msg)) if msg.contains("user-agent")));
    }

    #[test]
    fn test_default_profile_is_valid() {
        let client = BasicClient::new(Duration::from_secs(1)).unwrap();
        let wrapped = BrowserHeaders::new(client, &BrowserProfile::default()).unwrap();
        assert_eq!(wrapped.headers.len(), 3);
        assert_eq!(wrapped.headers[ORIGIN], "https://chargefinder.com");
    }
}
