//! Blocking HTTP transport backed by ureq.

use std::time::Duration;

use url::Url;
use wordbook_core::{HttpRequest, HttpResponse, Transport};

/// Executes requests with ureq. 4xx/5xx responses come back as data rather
/// than `Err` so the core clients interpret the status.
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new(timeout: Duration) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(timeout))
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Transport for UreqTransport {
    fn execute(&self, req: &HttpRequest) -> Result<HttpResponse, String> {
        tracing::debug!(url = %redact_key(&req.url), "GET");
        let mut builder = self.agent.get(&req.url);
        for (name, value) in &req.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        let mut response = builder.call().map_err(|e| e.to_string())?;
        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| e.to_string())?;
        tracing::debug!(status, bytes = body.len(), "response");
        Ok(HttpResponse { status, body })
    }
}

/// Blank out the `key` query parameter so credentials never reach the log.
/// Other parameters are left alone, even ones named like `apikey` or whose
/// value contains `key=`.
fn redact_key(raw: &str) -> String {
    let Ok(mut url) = Url::parse(raw) else {
        return "<unparseable url>".to_string();
    };
    let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
    if !pairs.iter().any(|(name, _)| name == "key") {
        return raw.to_string();
    }
    {
        let mut query = url.query_pairs_mut();
        query.clear();
        for (name, value) in &pairs {
            let value = if name == "key" { "***" } else { value.as_str() };
            query.append_pair(name, value);
        }
    }
    url.to_string()
}
