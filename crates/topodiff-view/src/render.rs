//! Diff-result document to styled text.

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use topodiff_model::consts::DIFF_STATE_KEY;
use topodiff_model::{Classification, Networks};

use crate::config::ViewConfig;
use crate::styled::StyledText;

/// Render an annotated document (the serialized form of a diff result).
///
/// Objects take their color from their `_diff_state_` marker; objects
/// without one, and arrays, render as `kept`. Scalars take the color of
/// the collection holding them.
pub fn render(value: &Value, config: &ViewConfig) -> StyledText {
    let view = DiffView { config };
    let (text, state) = view.value(value, 0, false);
    debug!(root = %state, spans = text.spans().len(), "diff view rendered");
    text
}

/// Render a diff result directly.
pub fn render_networks(networks: &Networks, config: &ViewConfig) -> StyledText {
    render(&networks.to_value(), config)
}

struct DiffView<'a> {
    config: &'a ViewConfig,
}

impl DiffView<'_> {
    /// Render `value` at nesting `depth`. `after_key` suppresses the
    /// leading indent of a value printed right after `key: `.
    fn value(&self, value: &Value, depth: usize, after_key: bool) -> (StyledText, Classification) {
        match value {
            Value::Array(items) => (self.array(items, depth, after_key), Classification::Kept),
            Value::Object(map) => {
                let state = marker_state(map);
                (self.object(map, state, depth, after_key), state)
            }
            scalar => {
                let mut text = StyledText::new();
                if !after_key {
                    text.push_plain(self.config.indent(depth));
                }
                text.push(scalar_text(scalar), Classification::Kept);
                (text, Classification::Kept)
            }
        }
    }

    fn array(&self, items: &[Value], depth: usize, after_key: bool) -> StyledText {
        let state = Classification::Kept;
        let entries = items
            .iter()
            .map(|item| match item {
                Value::Array(_) | Value::Object(_) => self.value(item, depth + 1, false).0,
                scalar => {
                    let mut text = StyledText::new();
                    text.push_plain(self.config.indent(depth + 1));
                    text.push(scalar_text(scalar), state);
                    text
                }
            })
            .collect();
        self.bracketed(("[", "]"), entries, state, depth, after_key)
    }

    fn object(
        &self,
        map: &Map<String, Value>,
        state: Classification,
        depth: usize,
        after_key: bool,
    ) -> StyledText {
        let entries = map
            .iter()
            .filter(|(key, _)| key.as_str() != DIFF_STATE_KEY)
            .filter_map(|(key, value)| self.entry(key, value, state, depth + 1))
            .collect();
        self.bracketed(("{", "}"), entries, state, depth, after_key)
    }

    /// One `key: value` line of an object whose state is `state`, or `None`
    /// when the value is empty.
    fn entry(
        &self,
        key: &str,
        value: &Value,
        state: Classification,
        depth: usize,
    ) -> Option<StyledText> {
        let (key_style, rendered) = match value {
            Value::Array(items) => {
                if items.is_empty() {
                    return None;
                }
                let rendered = self.array(items, depth, true);
                let key_style = if rendered.has_color() {
                    state
                } else {
                    Classification::Kept
                };
                (key_style, rendered)
            }
            Value::Object(map) => {
                if is_empty_object(map) {
                    return None;
                }
                let child = marker_state(map);
                (child, self.object(map, child, depth, true))
            }
            scalar => {
                let mut rendered = StyledText::new();
                rendered.push(scalar_text(scalar), state);
                (state, rendered)
            }
        };

        let mut line = StyledText::new();
        line.push_plain(self.config.indent(depth));
        line.push(key, key_style);
        line.push_plain(": ");
        line.append(rendered);
        Some(line)
    }

    fn bracketed(
        &self,
        (open, close): (&str, &str),
        entries: Vec<StyledText>,
        state: Classification,
        depth: usize,
        after_key: bool,
    ) -> StyledText {
        let indent = self.config.indent(depth);
        let mut text = StyledText::new();
        if !after_key {
            text.push_plain(indent.clone());
        }
        text.push(open, state);
        text.push_plain("\n");
        let count = entries.len();
        for (i, entry) in entries.into_iter().enumerate() {
            text.append(entry);
            text.push_plain(if i + 1 < count { ",\n" } else { "\n" });
        }
        text.push_plain(indent);
        text.push(close, state);
        text
    }
}

fn marker_state(map: &Map<String, Value>) -> Classification {
    map.get(DIFF_STATE_KEY)
        .and_then(|marker| marker.get("forward"))
        .and_then(|forward| Classification::deserialize(forward).ok())
        .unwrap_or(Classification::Kept)
}

/// Empty, or holding nothing but the marker.
fn is_empty_object(map: &Map<String, Value>) -> bool {
    map.keys().all(|key| key == DIFF_STATE_KEY)
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => "\"\"".to_string(),
        Value::String(s) if s.is_empty() => "\"\"".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
