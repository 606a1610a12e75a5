use async_trait::async_trait;
use url::Url;

/// Interface for submitting one rendered notification to one endpoint.
#[async_trait]
pub trait WebhookTransport: Send + Sync {
    /// Submit the payload to a single endpoint.
    ///
    /// # Arguments
    ///
    /// * `url` - The endpoint to post to
    /// * `payload_json` - The serialized notification body, shared across
    ///   every endpoint of the same dispatch
    /// * `image` - PNG-encoded screenshot bytes, when one was captured
    ///
    /// # Returns
    ///
    /// `Err` on transport failure or a non-success response; the dispatcher
    /// logs it and never retries.
    async fn deliver(
        &self,
        url: &Url,
        payload_json: &str,
        image: Option<&[u8]>,
    ) -> anyhow::Result<()>;
}
