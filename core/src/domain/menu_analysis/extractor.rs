//! Locates the JSON payload inside free-form model output.
//!
//! Models wrap their answer in prose or markdown fences, so the payload is
//! taken to be the first bracket-delimited value in the text. The scan tracks
//! string literals and escapes, which keeps dish names such as `Mix [Spicy]`
//! from closing the value early.

use serde_json::Value;

use crate::domain::menu_analysis::entities::MenuAnalysisError;

/// Returns the first top-level JSON array or object found in `text`.
pub fn extract_json_value(text: &str) -> Result<Value, MenuAnalysisError> {
    let start = text
        .find(['[', '{'])
        .ok_or(MenuAnalysisError::NoJsonFound)?;

    let candidate =
        delimited_candidate(&text[start..]).map_err(|reason| malformed(reason, text))?;

    serde_json::from_str(candidate).map_err(|e| malformed(e.to_string(), text))
}

/// Returns the shortest prefix of `text` whose brackets balance. `text` must
/// start with `[` or `{`.
fn delimited_candidate(text: &str) -> Result<&str, String> {
    let mut closers: Vec<char> = Vec::new();
    let mut in_string = false;
    let mut escaped = false;

    for (offset, c) in text.char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            '"' => in_string = true,
            '[' => closers.push(']'),
            '{' => closers.push('}'),
            ']' | '}' => {
                if closers.pop() != Some(c) {
                    return Err(format!("unexpected '{c}' at offset {offset}"));
                }
                if closers.is_empty() {
                    return Ok(&text[..offset + c.len_utf8()]);
                }
            }
            _ => {}
        }
    }

    Err("unterminated JSON value".to_string())
}

fn malformed(reason: String, raw_response: &str) -> MenuAnalysisError {
    MenuAnalysisError::MalformedJson {
        reason,
        raw_response: raw_response.to_string(),
    }
}
