//! Wiki search placeholder micro-syntax.
//!
//! Renderers sometimes need to emit a link whose final form depends on the
//! output mode, after the surrounding text has already been assembled. The
//! `[label](data)` placeholder defers that choice: [`resolve`] turns every
//! occurrence into a markdown wiki-search link, [`strip`] reduces it to the
//! bare label. Malformed syntax simply fails to match and stays literal.

use std::sync::OnceLock;

use fancy_regex::Regex;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

const WIKI_SEARCH_BASE: &str = "https://oldschool.runescape.wiki/w/Special:Search?search=";

/// URL path-segment escaping: RFC 3986 unreserved characters plus the
/// sub-delims and `:@` stay literal, so phrases like `Clue scroll (medium)`
/// keep their parentheses while spaces become `%20`.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'!')
    .remove(b'$')
    .remove(b'&')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b'+')
    .remove(b',')
    .remove(b';')
    .remove(b'=')
    .remove(b':')
    .remove(b'@');

/// The trailing `(?!\))` rejects a match whose closing parenthesis is
/// immediately followed by another, so the data group can itself contain a
/// parenthetical such as `Clue scroll (medium)`.
fn pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\[(?P<name>.+?)]\((?P<data>.+?)\)(?!\))").expect("placeholder pattern is valid")
    })
}

/// Build the wiki search URL for a phrase.
pub fn wiki_search_url(phrase: &str) -> String {
    format!("{WIKI_SEARCH_BASE}{}", utf8_percent_encode(phrase, PATH_SEGMENT))
}

/// Produce the raw placeholder for a label, searching for the label itself.
pub fn as_placeholder(label: &str) -> String {
    as_placeholder_with(label, label)
}

/// Produce the raw placeholder for a label with an explicit search phrase.
pub fn as_placeholder_with(label: &str, search_phrase: &str) -> String {
    format!("[{label}]({search_phrase})")
}

/// Replace every placeholder with a markdown link to the wiki search page
/// for its data. Non-placeholder text is preserved exactly.
pub fn resolve(text: &str) -> String {
    replace_placeholders_with(text, |name, data| {
        format!("[{name}]({})", wiki_search_url(data))
    })
}

/// Replace every placeholder with just its label, discarding the data.
pub fn strip(text: &str) -> String {
    replace_placeholders_with(text, |name, _| name.to_string())
}

/// Single left-to-right pass over all occurrences. Text between and after
/// matches is copied verbatim; a regex engine error leaves the remaining
/// tail untouched.
fn replace_placeholders_with(text: &str, replace: impl Fn(&str, &str) -> String) -> String {
    let pattern = pattern();
    let mut out = String::with_capacity(text.len());
    let mut pos = 0;
    while let Ok(Some(captures)) = pattern.captures_from_pos(text, pos) {
        let (Some(whole), Some(name), Some(data)) = (
            captures.get(0),
            captures.name("name"),
            captures.name("data"),
        ) else {
            break;
        };
        out.push_str(&text[pos..whole.start()]);
        out.push_str(&replace(name.as_str(), data.as_str()));
        pos = whole.end();
    }
    out.push_str(&text[pos..]);
    out
}
