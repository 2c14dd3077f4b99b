//! Document text parsing.
//!
//! Inputs are usually strict JSON, but hand-edited custody documents often
//! carry `//` comments or trailing commas. Strict parsing is tried first;
//! on failure the text is rewritten without comments and trailing commas and
//! parsed once more. The rewrite is string-aware and never touches content
//! inside quoted strings.

use anyhow::Context;
use serde_json::Value;

/// Parse a document, accepting JSON-with-comments and trailing commas.
pub fn parse_document(text: &str) -> anyhow::Result<Value> {
    if let Ok(value) = serde_json::from_str::<Value>(text) {
        return Ok(value);
    }

    let relaxed = strip_relaxed_syntax(text);
    serde_json::from_str(&relaxed).context("parse document as JSON")
}

fn strip_relaxed_syntax(text: &str) -> String {
    let without_comments = strip_comments(text);
    strip_trailing_commas(&without_comments)
}

fn strip_comments(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    let mut in_string = false;

    while let Some(c) = chars.next() {
        if in_string {
            out.push(c);
            if c == '\\' {
                if let Some(escaped) = chars.next() {
                    out.push(escaped);
                }
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            '"' => {
                in_string = true;
                out.push('"');
            }
            '/' if chars.peek() == Some(&'/') => {
                for rest in chars.by_ref() {
                    if rest == '\n' {
                        out.push('\n');
                        break;
                    }
                }
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut prev = '\0';
                for rest in chars.by_ref() {
                    if prev == '*' && rest == '/' {
                        break;
                    }
                    prev = rest;
                }
            }
            _ => out.push(c),
        }
    }

    out
}

fn strip_trailing_commas(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    let mut in_string = false;
    let mut pending_ws = String::new();

    while let Some(c) = chars.next() {
        if in_string {
            out.push(c);
            if c == '\\' {
                if let Some(escaped) = chars.next() {
                    out.push(escaped);
                }
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        if c == '"' {
            in_string = true;
            out.push('"');
            continue;
        }

        if c == ',' {
            // Buffer whitespace after the comma; drop the comma when the next
            // significant character closes a container.
            pending_ws.clear();
            while let Some(&next) = chars.peek() {
                if next.is_whitespace() {
                    pending_ws.push(next);
                    chars.next();
                } else {
                    break;
                }
            }
            if !matches!(chars.peek(), Some('}') | Some(']')) {
                out.push(',');
            }
            out.push_str(&pending_ws);
            continue;
        }

        out.push(c);
    }

    out
}
