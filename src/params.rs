use anyhow::Context as _;
use serde::Deserialize;

/// Default HTTP request timeout in seconds (5 minutes)
fn default_http_timeout() -> u64 {
    300
}

/// Default HTTP connection timeout in seconds
fn default_http_connect_timeout() -> u64 {
    10
}

/// Rich embeds are the default presentation
fn default_rich_embeds() -> bool {
    true
}

#[derive(Deserialize, Clone)]
pub struct Params {
    /// Destination webhook URLs, one per line.
    ///
    /// Blank lines and lines that fail to parse as absolute HTTP(S) URLs are
    /// dropped silently; an empty result makes every dispatch a no-op.
    #[serde(default)]
    pub webhook_urls: String,

    #[serde(default)]
    pub insecure_mode: bool,

    /// When enabled, the rendered message becomes a rich embed with title,
    /// color, and author; otherwise it is sent as plain `content`.
    #[serde(default = "default_rich_embeds")]
    pub discord_rich_embeds: bool,

    // HTTP Client Configuration
    #[serde(default = "default_http_timeout")]
    pub http_timeout: u64,
    #[serde(default = "default_http_connect_timeout")]
    pub http_connect_timeout: u64,
}

impl Default for Params {
    fn default() -> Self {
        Params {
            webhook_urls: String::new(),
            insecure_mode: false,
            discord_rich_embeds: default_rich_embeds(),
            http_timeout: default_http_timeout(),
            http_connect_timeout: default_http_connect_timeout(),
        }
    }
}

/// Mask a webhook URL, which typically embeds a secret token in its path.
/// Counts characters, not bytes, so multi-byte hosts cannot split a
/// character at the cut.
fn mask_url(s: &str) -> String {
    const VISIBLE_CHARS: usize = 12;

    if s.is_empty() {
        return "<empty>".to_string();
    }
    if s.chars().count() <= VISIBLE_CHARS {
        let first: String = s.chars().take(1).collect();
        return format!("{first}***");
    }

    let visible: String = s.chars().take(VISIBLE_CHARS).collect();
    format!("{visible}***")
}

impl std::fmt::Debug for Params {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let masked_urls: Vec<String> = self
            .webhook_urls
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(mask_url)
            .collect();

        f.debug_struct("Params")
            .field("webhook_urls", &masked_urls)
            .field("insecure_mode", &self.insecure_mode)
            .field("discord_rich_embeds", &self.discord_rich_embeds)
            .field("http_timeout", &self.http_timeout)
            .field("http_connect_timeout", &self.http_connect_timeout)
            .finish()
    }
}

impl Params {
    pub fn new() -> anyhow::Result<Params> {
        envy::from_env::<Params>().context("Failed to load configuration")
    }
}
