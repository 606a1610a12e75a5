use serde::ser::Serializer;
use serde::Serialize;

use crate::message::template::Template;

/// The kind of game event behind a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationType {
    Clue,
    Collection,
    Death,
    Level,
    Loot,
    Pet,
    Quest,
    Slayer,
    Speedrun,
    KillCount,
    CombatAchievement,
    AchievementDiary,
}

impl NotificationType {
    /// Human-readable embed title for this kind.
    pub fn title(self) -> &'static str {
        match self {
            NotificationType::Clue => "Clue Scroll",
            NotificationType::Collection => "Collection Log",
            NotificationType::Death => "Player Death",
            NotificationType::Level => "Level Up",
            NotificationType::Loot => "Loot Drop",
            NotificationType::Pet => "Pet Obtained",
            NotificationType::Quest => "Quest Completed",
            NotificationType::Slayer => "Slayer Task",
            NotificationType::Speedrun => "Quest Speedrunning",
            NotificationType::KillCount => "Completion Count",
            NotificationType::CombatAchievement => "Combat Achievement",
            NotificationType::AchievementDiary => "Achievement Diary",
        }
    }

    /// Accent color for the generated embed.
    pub fn color(self) -> Color {
        match self {
            NotificationType::Death => Color::RED,
            _ => Color::PINK,
        }
    }
}

/// 24-bit RGB color, serialized as the packed integer Discord expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub u32);

impl Color {
    // Analogous to RED in the CIELCh(uv) color space
    pub const PINK: Color = Color(0xF40098);
    pub const RED: Color = Color(0xCA2A2D);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.0 & 0xFF_FF_FF)
    }
}

/// Embed author line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Author {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

impl Author {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon_url: None,
        }
    }
}

/// A rich embed field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    pub name: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline: Option<bool>,
}

impl Field {
    /// An inline field; Discord renders up to three per row.
    pub fn inline(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            inline: Some(true),
        }
    }

    /// Render content as a fenced markdown code block.
    pub fn format_block(language: &str, content: &str) -> String {
        format!("```{language}\n{content}\n```")
    }

    /// Render `completed/total` progress inside a code block.
    pub fn format_progress(completed: u32, total: u32) -> String {
        let percent = 100.0 * f64::from(completed) / f64::from(total);
        Self::format_block("", &format!("{completed}/{total} ({percent:.1}%)"))
    }
}

/// Snippet and icon at the bottom of an embed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Footer {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

/// A bare URL object, used for embed images and thumbnails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlEmbed {
    pub url: String,
}

/// A Discord rich embed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Embed {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<UrlEmbed>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<UrlEmbed>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<Field>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<Footer>,
}

impl Embed {
    /// An embed consisting solely of an image.
    pub fn of_image(url: impl Into<String>) -> Self {
        Embed {
            image: Some(UrlEmbed { url: url.into() }),
            ..Embed::default()
        }
    }
}

/// One logical notification, prior to wire serialization.
///
/// The [`Template`] carries the message text in both output modes and is not
/// serialized itself; the dispatcher finalizes it into either `content`
/// (plain) or a generated embed description (rich) before sending. `extra`
/// holds kind-specific structured data consumed only by webhook handlers.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationBody<T: Serialize> {
    #[serde(rename = "type")]
    pub kind: NotificationType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_name: Option<String>,
    #[serde(skip)]
    pub text: Template,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<T>,
    pub embeds: Vec<Embed>,
    /// Overrides the generated embed's thumbnail; not serialized.
    #[serde(skip)]
    pub thumbnail_url: Option<String>,
    /// Marks that a screenshot should accompany this notification.
    #[serde(skip)]
    pub screenshot: bool,
}

impl<T: Serialize> NotificationBody<T> {
    pub fn new(kind: NotificationType, text: Template) -> Self {
        Self {
            kind,
            player_name: None,
            text,
            content: None,
            extra: None,
            embeds: Vec::new(),
            thumbnail_url: None,
            screenshot: false,
        }
    }

    pub fn player_name(mut self, player_name: impl Into<String>) -> Self {
        self.player_name = Some(player_name.into());
        self
    }

    pub fn extra(mut self, extra: T) -> Self {
        self.extra = Some(extra);
        self
    }

    pub fn embed(mut self, embed: Embed) -> Self {
        self.embeds.push(embed);
        self
    }

    pub fn thumbnail_url(mut self, url: impl Into<String>) -> Self {
        self.thumbnail_url = Some(url.into());
        self
    }

    pub fn screenshot(mut self, screenshot: bool) -> Self {
        self.screenshot = screenshot;
        self
    }
}
