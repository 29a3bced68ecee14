use anyhow::Context;
use reqwest::Method;
use serde_json::Value;
use url::Url;

/// Thin HTTP client for the Terminology Hub API
pub struct HubClient {
    base_url: Url,
    http: reqwest::Client,
}

impl HubClient {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let base_url = Url::parse(base_url).with_context(|| format!("invalid server URL '{}'", base_url))?;
        if base_url.cannot_be_a_base() || !matches!(base_url.scheme(), "http" | "https") {
            anyhow::bail!("server URL must be an http(s) URL, got '{}'", base_url);
        }
        Ok(Self {
            base_url,
            http: reqwest::Client::new(),
        })
    }

    /// Build an endpoint URL; each segment is percent-encoded on its own
    pub fn endpoint(&self, segments: &[&str]) -> anyhow::Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow::anyhow!("server URL cannot take a path"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub async fn get(&self, segments: &[&str]) -> anyhow::Result<Value> {
        self.send(Method::GET, segments, None).await
    }

    /// Send a request and unwrap the `{success, data}` envelope
    pub async fn send(&self, method: Method, segments: &[&str], body: Option<Value>) -> anyhow::Result<Value> {
        let url = self.endpoint(segments)?;
        let mut request = self.http.request(method.clone(), url.clone());
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request
            .send()
            .await
            .with_context(|| format!("{} {} failed", method, url))?;
        let status = response.status();
        let payload: Value = response
            .json()
            .await
            .with_context(|| format!("{} {} returned a non-JSON body ({})", method, url, status))?;

        if payload.get("success").and_then(Value::as_bool) == Some(true) {
            return Ok(payload.get("data").cloned().unwrap_or(Value::Null));
        }

        let message = payload
            .get("error")
            .and_then(Value::as_str)
            .unwrap_or("request failed");
        anyhow::bail!("{} ({})", message, status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_endpoints_from_segments() {
        let client = HubClient::new("http://localhost:8000/").unwrap();
        let url = client.endpoint(&["all-concepts"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/all-concepts");

        let url = client.endpoint(&["update-status", "heart attack/acute"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/update-status/heart%20attack%2Facute");
    }

    #[test]
    fn rejects_non_http_servers() {
        assert!(HubClient::new("not a url").is_err());
        assert!(HubClient::new("ftp://example.com").is_err());
    }
}
