use std::time::Duration;

use anyhow::Context as _;
use async_trait::async_trait;
use url::Url;

use super::webhook_transport::WebhookTransport;
use crate::params::Params;

/// Implementation for delivering notifications over HTTP.
///
/// Each delivery is a multipart POST: a `payload_json` form field carrying
/// the serialized body, plus an optional `file` part with the PNG screenshot.
/// The dispatcher relies on the client's own timeouts; this type owns no
/// retry or cancellation policy.
pub struct HttpWebhookTransport {
    client: reqwest::Client,
}

impl HttpWebhookTransport {
    /// Create a new HttpWebhookTransport
    ///
    /// # Arguments
    ///
    /// * `params` - Supplies request/connect timeouts and whether to accept
    ///   invalid TLS certificates (insecure mode)
    pub fn new(params: &Params) -> anyhow::Result<Self> {
        let client = reqwest::ClientBuilder::new()
            .danger_accept_invalid_certs(params.insecure_mode)
            .timeout(Duration::from_secs(params.http_timeout))
            .connect_timeout(Duration::from_secs(params.http_connect_timeout))
            .build()
            .context("Building HTTP Client")?;

        Ok(Self { client })
    }
}

#[async_trait]
impl WebhookTransport for HttpWebhookTransport {
    async fn deliver(
        &self,
        url: &Url,
        payload_json: &str,
        image: Option<&[u8]>,
    ) -> anyhow::Result<()> {
        let mut form =
            reqwest::multipart::Form::new().text("payload_json", payload_json.to_string());

        if let Some(image) = image {
            let part = reqwest::multipart::Part::bytes(image.to_vec())
                .file_name("screenshot.png")
                .mime_str("image/png")
                .context("Building screenshot form part")?;
            form = form.part("file", part);
        }

        self.client
            .post(url.clone())
            .multipart(form)
            .send()
            .await
            .context("Sending webhook request")?
            .error_for_status()
            .context("Webhook endpoint returned an error status")?;

        Ok(())
    }
}
