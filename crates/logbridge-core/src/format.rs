//! Message resolution and positional argument substitution

use crate::bundle::{BundleError, ResourceBundle};
use serde_json::Value;
use std::borrow::Cow;
use std::fmt::{Display, Write};

/// Resolve a message key against an optional bundle
///
/// Lookup failures never escape: a missing key falls back to the key itself
/// and a non-string entry falls back to its rendered value.
pub fn resolve_message<'a>(bundle: Option<&'a dyn ResourceBundle>, msg: &'a str) -> Cow<'a, str> {
    let Some(bundle) = bundle else {
        return Cow::Borrowed(msg);
    };

    match bundle.get_string(msg) {
        Ok(template) => Cow::Borrowed(template),
        Err(BundleError::NotAString { .. }) => match bundle.get_object(msg) {
            Ok(value) => Cow::Owned(render_value(value)),
            Err(_) => Cow::Borrowed(msg),
        },
        Err(_) => Cow::Borrowed(msg),
    }
}

/// Resolve a message and substitute arguments into it
///
/// With no arguments the resolved template is returned untouched, so literal
/// braces in argument-free messages survive as written.
pub fn message<'a>(
    bundle: Option<&'a dyn ResourceBundle>,
    msg: &'a str,
    args: &[&dyn Display],
) -> Cow<'a, str> {
    let template = resolve_message(bundle, msg);
    if args.is_empty() {
        return template;
    }
    Cow::Owned(format_message(&template, args))
}

/// Substitute `{N}` placeholders with the matching argument
///
/// Placeholders that are not a plain decimal index, or whose index is out of
/// range, are copied verbatim. Substituted text is never re-scanned.
pub fn format_message(template: &str, args: &[&dyn Display]) -> String {
    let mut out = String::with_capacity(template.len() + args.len() * 8);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        let (literal, tail) = rest.split_at(open);
        out.push_str(literal);

        let substituted = tail[1..].find('}').and_then(|close| {
            let arg = parse_index(&tail[1..=close]).and_then(|index| args.get(index))?;
            Some((arg, close + 2))
        });

        match substituted {
            Some((arg, consumed)) => {
                let _ = write!(out, "{arg}");
                rest = &tail[consumed..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

fn parse_index(inner: &str) -> Option<usize> {
    if inner.is_empty() || !inner.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    inner.parse().ok()
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
#[path = "format/format_tests.rs"]
mod format_tests;
