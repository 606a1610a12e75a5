use std::sync::Mutex;

use async_trait::async_trait;
use runehook::adapters::WebhookTransport;
use url::Url;

#[derive(Debug, Clone)]
pub struct SentRequest {
    pub url: String,
    pub payload_json: String,
    pub image: Option<Vec<u8>>,
}

/// Records every delivery attempt; optionally fails for selected hosts.
pub struct MockTransport {
    sent: Mutex<Vec<SentRequest>>,
    failing_hosts: Vec<String>,
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            failing_hosts: Vec::new(),
        }
    }

    /// A transport that errors for the given hosts but still records the
    /// attempt.
    pub fn failing_for(hosts: &[&str]) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            failing_hosts: hosts.iter().map(|h| h.to_string()).collect(),
        }
    }

    pub fn sent_requests(&self) -> Vec<SentRequest> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl WebhookTransport for MockTransport {
    async fn deliver(
        &self,
        url: &Url,
        payload_json: &str,
        image: Option<&[u8]>,
    ) -> anyhow::Result<()> {
        self.sent.lock().unwrap().push(SentRequest {
            url: url.to_string(),
            payload_json: payload_json.to_string(),
            image: image.map(<[u8]>::to_vec),
        });

        let host = url.host_str().unwrap_or("");
        if self.failing_hosts.iter().any(|h| h == host) {
            anyhow::bail!("connection refused");
        }
        Ok(())
    }
}
