use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

use crate::message::placeholder::wiki_search_url;

/// Capability to render a piece of message content in two variants:
/// rich (markdown hyperlinks allowed) and plain (label text only).
///
/// Evaluation is pure and idempotent: the same value yields the same string
/// on every call, for either mode.
pub trait Evaluable {
    fn evaluate(&self, rich: bool) -> String;
}

/// A replacement value for a template token.
///
/// Closed set of content kinds; each degrades gracefully to its plain form
/// when rich output is not requested or no rich alternative exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Replacement {
    /// Constant text, identical in both modes.
    Text(String),
    /// A label with an optional hyperlink. Rich mode renders
    /// `[label](url)`; plain mode (or a missing URL) renders just the label.
    Link {
        label: String,
        url: Option<String>,
    },
    /// A plain value with an optional rich alternative.
    Simple {
        value: String,
        rich_value: Option<String>,
    },
    /// A fenced markdown code block in rich mode, bare content in plain mode.
    CodeBlock {
        language: String,
        content: String,
    },
    /// Other replacements concatenated with a delimiter between them.
    Joined {
        components: Vec<Replacement>,
        delimiter: String,
    },
}

impl Replacement {
    pub fn text(text: impl Into<String>) -> Self {
        Replacement::Text(text.into())
    }

    /// A hyperlinked label. A `None` link degrades to plain text.
    pub fn link(label: impl Into<String>, url: Option<String>) -> Self {
        match url {
            Some(url) => Replacement::Link {
                label: label.into(),
                url: Some(url),
            },
            None => Replacement::Text(label.into()),
        }
    }

    /// A label linking to the wiki search page for `search_phrase`.
    pub fn wiki_named(label: impl Into<String>, search_phrase: &str) -> Self {
        Replacement::link(label, Some(wiki_search_url(search_phrase)))
    }

    /// A phrase linking to its own wiki search page.
    pub fn wiki(phrase: &str) -> Self {
        Replacement::wiki_named(phrase, phrase)
    }

    pub fn simple(value: impl Into<String>, rich_value: Option<String>) -> Self {
        Replacement::Simple {
            value: value.into(),
            rich_value,
        }
    }

    pub fn block(language: impl Into<String>, content: impl Into<String>) -> Self {
        Replacement::CodeBlock {
            language: language.into(),
            content: content.into(),
        }
    }

    pub fn joined(delimiter: impl Into<String>, components: Vec<Replacement>) -> Self {
        Replacement::Joined {
            components,
            delimiter: delimiter.into(),
        }
    }
}

impl Evaluable for Replacement {
    fn evaluate(&self, rich: bool) -> String {
        match self {
            Replacement::Text(text) => text.clone(),
            Replacement::Link { label, url } => match url {
                Some(url) if rich => format!("[{label}]({url})"),
                _ => label.clone(),
            },
            Replacement::Simple { value, rich_value } => match rich_value {
                Some(rich_value) if rich => rich_value.clone(),
                _ => value.clone(),
            },
            Replacement::CodeBlock { language, content } => {
                if rich {
                    crate::message::payload::Field::format_block(language, content)
                } else {
                    content.clone()
                }
            }
            Replacement::Joined {
                components,
                delimiter,
            } => {
                // Empty input short-circuits without emitting any delimiter
                let mut it = components.iter();
                let Some(first) = it.next() else {
                    return String::new();
                };
                let mut out = first.evaluate(rich);
                for component in it {
                    out.push_str(delimiter);
                    out.push_str(&component.evaluate(rich));
                }
                out
            }
        }
    }
}

/// A message template: raw text containing placeholder tokens, plus the
/// replacement value for each token.
///
/// Built once per notification, evaluated at most twice (plain and rich),
/// then discarded. Unknown tokens are left verbatim in the output; callers
/// routinely supply partial replacement sets.
///
/// Two templates compare equal when their evaluated outputs match in both
/// modes, regardless of how they were constructed. This eases testing and is
/// not a general-purpose identity.
#[derive(Debug, Clone)]
pub struct Template {
    template: String,
    replacements: BTreeMap<String, Replacement>,
    replacement_boundary: Option<String>,
}

impl Template {
    pub fn builder() -> TemplateBuilder {
        TemplateBuilder::default()
    }
}

impl Evaluable for Template {
    /// Substitute every known token with its evaluated replacement.
    ///
    /// Without a replacement boundary this is a global replace per token,
    /// iterated over all tokens. If one replacement's output happens to
    /// contain a later token, that text is substituted again; tokens should
    /// be chosen so they do not overlap or prefix each other. With a boundary
    /// configured, a single left-to-right scan finds tokens directly and the
    /// cost drops to O(text + tokens found).
    fn evaluate(&self, rich: bool) -> String {
        match &self.replacement_boundary {
            Some(boundary) => self.evaluate_bounded(boundary, rich),
            None => self.evaluate_unbounded(rich),
        }
    }
}

impl Template {
    fn evaluate_unbounded(&self, rich: bool) -> String {
        let mut message = self.template.clone();
        for (token, replacement) in &self.replacements {
            message = message.replace(token, &replacement.evaluate(rich));
        }
        message
    }

    fn evaluate_bounded(&self, boundary: &str, rich: bool) -> String {
        let mut out = String::with_capacity(self.template.len());
        let mut rest = self.template.as_str();
        loop {
            let Some(open) = rest.find(boundary) else {
                out.push_str(rest);
                break;
            };
            out.push_str(&rest[..open]);
            rest = &rest[open..];

            let Some(close) = rest[boundary.len()..].find(boundary) else {
                // No closing marker: the tail cannot contain a token
                out.push_str(rest);
                break;
            };
            let second = boundary.len() + close;
            let candidate_end = second + boundary.len();
            let candidate = &rest[..candidate_end];
            if let Some(replacement) = self.replacements.get(candidate) {
                out.push_str(&replacement.evaluate(rich));
                rest = &rest[candidate_end..];
            } else {
                // Unknown candidate: the second marker may open the next
                // token, so resume scanning from it rather than past it
                out.push_str(&rest[..second]);
                rest = &rest[second..];
            }
        }
        out
    }
}

impl PartialEq for Template {
    fn eq(&self, other: &Self) -> bool {
        self.evaluate(false) == other.evaluate(false) && self.evaluate(true) == other.evaluate(true)
    }
}

impl Eq for Template {}

impl Hash for Template {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.evaluate(false).hash(state);
        self.evaluate(true).hash(state);
    }
}

#[derive(Debug, Default)]
pub struct TemplateBuilder {
    template: String,
    replacements: BTreeMap<String, Replacement>,
    replacement_boundary: Option<String>,
}

impl TemplateBuilder {
    /// Set the raw template text.
    pub fn template(mut self, template: impl Into<String>) -> Self {
        self.template = template.into();
        self
    }

    /// Register a replacement for `token`. Tokens must be unique; a repeated
    /// token overwrites the earlier replacement.
    pub fn replacement(mut self, token: impl Into<String>, replacement: Replacement) -> Self {
        self.replacements.insert(token.into(), replacement);
        self
    }

    /// Set the marker that starts and ends every token (e.g. `"%"` for
    /// `%TOKEN%`), enabling the single-pass evaluation algorithm.
    ///
    /// An empty marker cannot delimit tokens and selects the unbounded
    /// algorithm instead.
    pub fn replacement_boundary(mut self, boundary: impl Into<String>) -> Self {
        let boundary = boundary.into();
        self.replacement_boundary = (!boundary.is_empty()).then_some(boundary);
        self
    }

    pub fn build(self) -> Template {
        Template {
            template: self.template,
            replacements: self.replacements,
            replacement_boundary: self.replacement_boundary,
        }
    }
}
