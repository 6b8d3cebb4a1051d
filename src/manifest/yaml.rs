//! YAML output that reads the same under YAML 1.1 and YAML 1.2
//!
//! `serde_yaml` only quotes strings that a YAML 1.2 parser would resolve to
//! something else. MyST tooling loads `myst.yml` with YAML 1.1 resolvers,
//! where plain `2024-01-01`, `yes` or `1_000` are a timestamp, a bool and an
//! int. [`to_string`] single-quotes those strings after serialization.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use serde_yaml::Value;

/// Plain scalars the YAML 1.1 implicit resolvers turn into bool, null,
/// int, float or timestamp
#[allow(clippy::expect_used)]
static YAML11_NON_STRING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?:",
        // bool
        r"y|Y|yes|Yes|YES|n|N|no|No|NO|true|True|TRUE|false|False|FALSE|on|On|ON|off|Off|OFF",
        // null
        r"|~|null|Null|NULL",
        // int
        r"|[-+]?0b[0-1_]+|[-+]?0[0-7_]+|[-+]?(?:0|[1-9][0-9_]*)|[-+]?0x[0-9a-fA-F_]+",
        r"|[-+]?[1-9][0-9_]*(?::[0-5]?[0-9])+",
        // float
        r"|[-+]?(?:[0-9][0-9_]*)\.[0-9_]*(?:[eE][-+][0-9]+)?|\.[0-9][0-9_]*(?:[eE][-+][0-9]+)?",
        r"|[-+]?[0-9][0-9_]*(?::[0-5]?[0-9])+\.[0-9_]*|[-+]?\.(?:inf|Inf|INF)|\.(?:nan|NaN|NAN)",
        // timestamp
        r"|[0-9]{4}-[0-9]{2}-[0-9]{2}",
        r"|[0-9]{4}-[0-9]{1,2}-[0-9]{1,2}(?:[Tt]|[ \t]+)[0-9]{1,2}:[0-9]{2}:[0-9]{2}(?:\.[0-9]*)?",
        r"(?:[ \t]*(?:Z|[-+][0-9]{1,2}(?::[0-9]{2})?))?",
        r")$",
    ))
    .expect("Invalid regex pattern for YAML 1.1 scalars")
});

/// Serialize `value` to YAML, quoting strings a YAML 1.1 reader would retype
pub fn to_string<T>(value: &T) -> Result<String, serde_yaml::Error>
where
    T: ?Sized + Serialize,
{
    let yaml = serde_yaml::to_string(value)?;
    Ok(quote_yaml11_scalars(&yaml))
}

/// Rewrite block-style YAML as emitted by `serde_yaml`, quoting ambiguous
/// plain keys and values
///
/// Block scalar bodies (`|`, `>`) are copied through untouched.
fn quote_yaml11_scalars(yaml: &str) -> String {
    let mut out = String::with_capacity(yaml.len());
    // Content of a block scalar is indented deeper than this column
    let mut block_scalar_parent: Option<usize> = None;

    for line in yaml.split_inclusive('\n') {
        let body = line.strip_suffix('\n').unwrap_or(line);

        if let Some(parent) = block_scalar_parent {
            if body.trim().is_empty() || indent_of(body) > parent {
                out.push_str(line);
                continue;
            }
            block_scalar_parent = None;
        }

        let (rewritten, block_parent) = rewrite_line(body);
        block_scalar_parent = block_parent;
        out.push_str(&rewritten);
        out.push_str(&line[body.len()..]);
    }

    out
}

/// Rewrite one line, returning the block scalar parent column if the line
/// opens a block scalar
fn rewrite_line(body: &str) -> (Cow<'_, str>, Option<usize>) {
    let mut column = indent_of(body);
    let mut rest = &body[column..];
    let mut dash_column = None;
    while let Some(item) = rest.strip_prefix("- ") {
        dash_column = Some(column);
        column += 2;
        rest = item;
    }

    let (key, value) = match split_entry(rest) {
        Some((key, value)) => (Some(key), value),
        None if dash_column.is_some() => (None, rest),
        None => return (Cow::Borrowed(body), None),
    };

    if value.starts_with(['|', '>']) {
        let parent = match key {
            Some(_) => column,
            None => dash_column.unwrap_or(column),
        };
        return (Cow::Borrowed(body), Some(parent));
    }

    let quoted_key = key.map(quote_if_ambiguous);
    let quoted_value = quote_if_ambiguous(value);
    let unchanged = matches!(quoted_value, Cow::Borrowed(_))
        && !matches!(quoted_key, Some(Cow::Owned(_)));
    if unchanged {
        return (Cow::Borrowed(body), None);
    }

    let mut rewritten = String::from(&body[..column]);
    if let Some(key) = quoted_key {
        rewritten.push_str(&key);
        rewritten.push(':');
        if !value.is_empty() {
            rewritten.push(' ');
        }
    }
    rewritten.push_str(&quoted_value);
    (Cow::Owned(rewritten), None)
}

/// Split `key: value` (or `key:` opening a nested collection)
fn split_entry(rest: &str) -> Option<(&str, &str)> {
    let key_end = match rest.chars().next()? {
        quote @ ('\'' | '"') => closing_quote(rest, quote)? + 1,
        _ => rest
            .find(": ")
            .or_else(|| rest.ends_with(':').then(|| rest.len() - 1))?,
    };

    let after = rest[key_end..].strip_prefix(':')?;
    let value = if after.is_empty() {
        after
    } else {
        after.strip_prefix(' ')?
    };
    Some((&rest[..key_end], value))
}

/// Byte index of the quote closing the quoted scalar that opens `s`
fn closing_quote(s: &str, quote: char) -> Option<usize> {
    let mut chars = s.char_indices().skip(1).peekable();
    while let Some((i, c)) = chars.next() {
        if quote == '"' && c == '\\' {
            chars.next();
        } else if c == quote {
            // '' is an escaped quote inside a single-quoted scalar
            if quote == '\'' && chars.peek().is_some_and(|&(_, next)| next == '\'') {
                chars.next();
            } else {
                return Some(i);
            }
        }
    }
    None
}

fn quote_if_ambiguous(scalar: &str) -> Cow<'_, str> {
    if is_yaml11_ambiguous(scalar) {
        // The pattern admits no quote characters, so no escaping is needed
        Cow::Owned(format!("'{scalar}'"))
    } else {
        Cow::Borrowed(scalar)
    }
}

/// A plain scalar that YAML 1.2 reads as a string but YAML 1.1 does not
fn is_yaml11_ambiguous(scalar: &str) -> bool {
    YAML11_NON_STRING.is_match(scalar)
        && matches!(serde_yaml::from_str::<Value>(scalar), Ok(Value::String(_)))
}

fn indent_of(line: &str) -> usize {
    line.len() - line.trim_start_matches(' ').len()
}
