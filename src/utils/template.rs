use std::sync::Arc;

use serde::Serialize;
use serde_json::{Map, Value};

/// Builds label markup for a place from its properties.
pub type HtmlTemplate<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;

pub const NAME_STYLE: &str = "color: black;";
pub const SUBTITLE_STYLE: &str = "color: black; opacity: 0.75;";

/// Wraps `content` in a styled span, the building block of the default labels.
pub fn span(style: &str, content: &str) -> String {
    format!("<span style=\"{}\">{}</span>", style, content)
}

/// Flattens a serializable record into template fields. Non-object values yield no fields.
pub fn to_fields<T: Serialize>(value: &T) -> Map<String, Value> {
    match serde_json::to_value(value) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    }
}

/// Replaces `{key}` placeholders (optionally padded with spaces) with values from `fields`.
///
/// Missing and null fields render as empty strings. With `escape` set, substituted values
/// are HTML-escaped; template text itself is emitted as-is.
pub fn render(template: &str, fields: &Map<String, Value>, escape: bool) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        match placeholder_key(after) {
            Some((key, consumed)) => {
                let value = field_text(fields.get(key));
                if escape {
                    out.push_str(&escape_html(&value));
                } else {
                    out.push_str(&value);
                }
                rest = &after[consumed..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

/// Parses ` key }` at the start of `s`, returning the key and the bytes consumed.
fn placeholder_key(s: &str) -> Option<(&str, usize)> {
    let close = s.find('}')?;
    let key = s[..close].trim_matches(' ');

    let valid = !key.is_empty() && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');

    valid.then_some((key, close + 1))
}

fn field_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '`' => out.push_str("&#x60;"),
            '=' => out.push_str("&#x3D;"),
            _ => out.push(c),
        }
    }
    out
}
