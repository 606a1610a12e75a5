use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};
use url::Url;

use crate::adapters::{FrameCapture, GameState, WebhookTransport, encode_png};
use crate::message::payload::{Author, Embed, NotificationBody, UrlEmbed};
use crate::message::template::Evaluable as _;
use crate::params::Params;

/// Fans one notification out to every configured webhook endpoint.
///
/// Delivery is best-effort and at-most-once per endpoint: failures are
/// logged, never retried, and never surfaced to the notification producer.
/// Endpoints are contacted independently; a slow or broken endpoint cannot
/// delay or fail the others.
pub struct MessageDispatcher<G, C, T>
where
    G: GameState,
    C: FrameCapture,
    T: WebhookTransport,
{
    game_state: Arc<G>,
    capture: Arc<C>,
    transport: Arc<T>,
    params: Arc<Params>,
}

// Manual impl: cloning shares the services, regardless of their own Clone
impl<G, C, T> Clone for MessageDispatcher<G, C, T>
where
    G: GameState,
    C: FrameCapture,
    T: WebhookTransport,
{
    fn clone(&self) -> Self {
        Self {
            game_state: Arc::clone(&self.game_state),
            capture: Arc::clone(&self.capture),
            transport: Arc::clone(&self.transport),
            params: Arc::clone(&self.params),
        }
    }
}

impl<G, C, T> MessageDispatcher<G, C, T>
where
    G: GameState + 'static,
    C: FrameCapture + 'static,
    T: WebhookTransport + 'static,
{
    pub fn new(game_state: Arc<G>, capture: Arc<C>, transport: Arc<T>, params: Arc<Params>) -> Self {
        Self {
            game_state,
            capture,
            transport,
            params,
        }
    }

    /// Deliver a notification to every configured endpoint, fire-and-forget.
    ///
    /// Returns once the delivery future is scheduled; the caller never waits
    /// on screen capture or any network round trip.
    pub fn create_message<E>(&self, body: NotificationBody<E>)
    where
        E: Serialize + Send + Sync + 'static,
    {
        let dispatcher = self.clone();
        tokio::spawn(async move {
            dispatcher.deliver(body).await;
        });
    }

    /// Deliver a notification and wait for every submission to settle.
    ///
    /// [`Self::create_message`] runs this on a spawned task; tests await it
    /// directly. All failures are terminal-and-local: logged here or in the
    /// per-endpoint tasks, never returned.
    pub async fn deliver<E>(&self, mut body: NotificationBody<E>)
    where
        E: Serialize + Send + Sync,
    {
        let endpoints = parse_endpoints(&self.params.webhook_urls);
        if endpoints.is_empty() {
            debug!("No webhook endpoints configured, skipping notification");
            return;
        }

        if body.player_name.is_none() {
            body.player_name = self.game_state.player_name();
        }
        self.finalize(&mut body);

        // Serialized once; every endpoint shares the same bytes
        let payload: Arc<str> = match serde_json::to_string(&body) {
            Ok(payload) => payload.into(),
            Err(err) => {
                warn!(?err, kind = ?body.kind, "Failed to serialize notification body");
                return;
            }
        };

        // The capture completes before any endpoint is contacted, so the
        // image (when produced) is attached to every submission
        let image: Option<Arc<Vec<u8>>> = if body.screenshot {
            self.capture_screenshot().await.map(Arc::new)
        } else {
            None
        };

        let mut handles = Vec::with_capacity(endpoints.len());
        for url in endpoints {
            let transport = Arc::clone(&self.transport);
            let payload = Arc::clone(&payload);
            let image = image.clone();
            handles.push(tokio::spawn(async move {
                match transport
                    .deliver(&url, &payload, image.as_deref().map(Vec::as_slice))
                    .await
                {
                    Ok(()) => {
                        info!(host = url.host_str().unwrap_or(""), "Sent webhook notification");
                    }
                    Err(err) => {
                        warn!(
                            ?err,
                            host = url.host_str().unwrap_or(""),
                            "There was an error sending the webhook message"
                        );
                    }
                }
            }));
        }
        for handle in handles {
            let _ = handle.await;
        }
    }

    /// Turn the template into wire fields: a generated rich embed when rich
    /// embeds are enabled, plain `content` otherwise.
    ///
    /// Wiki-search placeholders are the producer's concern: whoever builds
    /// the body resolves or strips them before handing it over, so the
    /// evaluated text is final here.
    fn finalize<E: Serialize>(&self, body: &mut NotificationBody<E>) {
        if self.params.discord_rich_embeds {
            let description = body.text.evaluate(true);
            let embed = Embed {
                title: Some(body.kind.title().to_string()),
                description: Some(description),
                color: Some(body.kind.color()),
                author: body.player_name.clone().map(Author::new),
                thumbnail: body
                    .thumbnail_url
                    .clone()
                    .map(|url| UrlEmbed { url }),
                ..Embed::default()
            };
            body.embeds.insert(0, embed);
        } else {
            body.content = Some(body.text.evaluate(false));
        }
    }

    /// Await the next frame and encode it. Capture or encode failure
    /// degrades to a text-only notification.
    async fn capture_screenshot(&self) -> Option<Vec<u8>> {
        let frame = match self.capture.next_frame().await {
            Ok(frame) => frame,
            Err(err) => {
                warn!(?err, "Failed to capture a frame for the notification");
                return None;
            }
        };
        match encode_png(&frame) {
            Ok(bytes) => Some(bytes),
            Err(err) => {
                warn!(?err, "There was an error creating bytes from the captured frame");
                None
            }
        }
    }
}

/// Parse the newline-delimited endpoint configuration.
///
/// Blank lines and lines that do not parse as absolute HTTP(S) URLs are
/// dropped silently. `Url::parse` accepts many non-HTTP schemes, so the
/// scheme is checked explicitly.
pub fn parse_endpoints(webhook_urls: &str) -> Vec<Url> {
    webhook_urls
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| match Url::parse(line) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Some(url),
            Ok(url) => {
                debug!(scheme = url.scheme(), "Dropping non-HTTP webhook URL");
                None
            }
            Err(err) => {
                debug!(?err, "Dropping unparsable webhook URL");
                None
            }
        })
        .collect()
}
