//! Shaping free-form model output into lists and JSON objects.

use std::sync::LazyLock;

use regex::Regex;

static LIST_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\d\-*•·#]+[.):\s]+").expect("valid pattern"));

static CODE_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```(?:json)?").expect("valid pattern"));

static JSON_OBJECT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\{.*\}").expect("valid pattern"));

/// Lines shorter than this after marker stripping are treated as noise.
const MIN_ITEM_CHARS: usize = 11;

/// Split a numbered or bulleted reply into at most `max_items` entries.
///
/// Leading list markers (`1.`, `2)`, `-`, `*`, `•`) are removed. Lines that
/// are too short to be a real item, such as stray headings, are dropped.
pub fn parse_list(text: &str, max_items: usize) -> Vec<String> {
    let mut items = Vec::new();
    for line in text.trim().lines() {
        let item = LIST_MARKER.replace(line, "");
        let item = item.trim();
        if item.chars().count() >= MIN_ITEM_CHARS {
            items.push(item.to_string());
        }
        if items.len() >= max_items {
            break;
        }
    }
    items
}

/// Extract the outermost JSON object from a reply, ignoring code fences and
/// any prose around it.
pub fn parse_json_object(text: &str) -> Option<serde_json::Value> {
    let cleaned = CODE_FENCE.replace_all(text, "");
    let object = JSON_OBJECT.find(cleaned.trim())?;
    serde_json::from_str(object.as_str()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_strips_markers() {
        let reply = "1. Ask to remove the arbitration clause.\n2) Negotiate a 30-day refund window.\n- Cap the late fee at 5%.";
        assert_eq!(
            parse_list(reply, 5),
            vec![
                "Ask to remove the arbitration clause.",
                "Negotiate a 30-day refund window.",
                "Cap the late fee at 5%.",
            ]
        );
    }

    #[test]
    fn list_drops_short_lines() {
        let reply = "Tips:\n\n1. Ok\n2. Request written notice before any price change.";
        assert_eq!(
            parse_list(reply, 5),
            vec!["Request written notice before any price change."]
        );
    }

    #[test]
    fn list_respects_max_items() {
        let reply = (1..=6)
            .map(|i| format!("{i}. Question number {i} about the contract?"))
            .collect::<Vec<_>>()
            .join("\n");
        assert_eq!(parse_list(&reply, 4).len(), 4);
    }

    #[test]
    fn list_keeps_unmarked_prose() {
        let reply = "This looks like a fair document overall.";
        assert_eq!(parse_list(reply, 4), vec![reply]);
    }

    #[test]
    fn json_inside_code_fence() {
        let reply = "Sure!\n```json\n{\"better\": \"A\", \"reason\": \"fewer flags\"}\n```";
        let value = parse_json_object(reply).unwrap();
        assert_eq!(value["better"], "A");
        assert_eq!(value["reason"], "fewer flags");
    }

    #[test]
    fn json_missing_or_malformed() {
        assert!(parse_json_object("no object here").is_none());
        assert!(parse_json_object("{not: valid}").is_none());
    }
}
