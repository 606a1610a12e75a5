// Notification domain model
pub mod payload;
pub mod placeholder;
pub mod template;

// Re-exports for convenience
pub use payload::{Author, Color, Embed, Field, Footer, NotificationBody, NotificationType, UrlEmbed};
pub use template::{Evaluable, Replacement, Template};
