use std::collections::HashMap;

use crate::types::{Ini, Section};

const LINE_TRIM: &[char] = &[' ', '\t', '\r', '\n'];
const SECTION_NAME_TRIM: &[char] = &[' ', '\t', '\r', '\n', ';', '[', ']'];

/// Cuts the line at the first `;` or `//`, whichever comes first.
fn strip_comment(line: &str) -> &str {
    let cut = match (line.find(';'), line.find("//")) {
        (Some(semi), Some(slashes)) => semi.min(slashes),
        (Some(semi), None) => semi,
        (None, Some(slashes)) => slashes,
        (None, None) => line.len(),
    };

    &line[..cut]
}

fn section_name(line: &str) -> Option<&str> {
    let trimmed = line.trim_matches(LINE_TRIM);

    if trimmed.starts_with('[') && trimmed.ends_with(']') {
        Some(trimmed.trim_matches(SECTION_NAME_TRIM))
    } else {
        None
    }
}

/// Comma separated tokens, each trimmed. A blank token ends the list.
fn split_values(text: &str) -> Vec<String> {
    let mut values = vec![];

    for token in text.split(',') {
        let token = token.trim_matches(LINE_TRIM);

        if token.is_empty() {
            break;
        }

        values.push(token.to_string());
    }

    values
}

/// `atoi` semantics. A token with no leading number reads as zero.
pub(crate) fn int_token(token: &str) -> i32 {
    let digits = token
        .char_indices()
        .take_while(|&(offset, c)| c.is_ascii_digit() || (offset == 0 && (c == '+' || c == '-')))
        .count();

    token[..digits].parse().unwrap_or(0)
}

/// Only the first character decides. `T`/`Y`/`1` and `F`/`N`/`0` in either
/// case, anything else falls back to `default`.
pub(crate) fn bool_token(token: &str, default: bool) -> bool {
    match token.chars().next().map(|c| c.to_ascii_uppercase()) {
        Some('T') | Some('Y') | Some('1') => true,
        Some('F') | Some('N') | Some('0') => false,
        _ => default,
    }
}

pub(crate) fn parse_ini(text: &str) -> Ini {
    let mut sections: HashMap<String, Section> = HashMap::new();
    let mut current = String::new();

    for line in text.lines() {
        let line = strip_comment(line);

        if let Some(name) = section_name(line) {
            current = name.to_string();
            continue;
        }

        let Some((key, rest)) = line.split_once('=') else {
            continue;
        };

        let key = key.trim_matches(LINE_TRIM);
        let values = split_values(rest);

        // lines without a usable key or any value are dropped, not reported
        if key.is_empty() || values.is_empty() {
            continue;
        }

        sections
            .entry(current.clone())
            .or_default()
            .insert(key.to_string(), values);
    }

    Ini { sections }
}
