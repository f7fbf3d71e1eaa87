//! Styled JSON rendering
//!
//! Walks a parsed `serde_json::Value` and emits one styled span per token. The text of
//! the produced lines is the same as `serde_json::to_string_pretty` output.

use super::styling;
use ratatui::{
    style::Style,
    text::{Line, Span},
};
use serde_json::Value;

const INDENT: &str = "  ";

/// How object keys are colored
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyHighlight {
    /// Every key gets the default key color
    Plain,
    /// Known request body fields get their own color
    SchemaFields,
}

pub fn json_lines(value: &Value, keys: KeyHighlight) -> Vec<Line<'static>> {
    let mut writer = JsonLineWriter {
        lines: Vec::new(),
        current: Vec::new(),
        keys,
    };
    writer.write_value(value, 0);
    writer.finish()
}

struct JsonLineWriter {
    lines: Vec<Line<'static>>,
    current: Vec<Span<'static>>,
    keys: KeyHighlight,
}

impl JsonLineWriter {
    fn push(&mut self, text: String, style: Style) {
        self.current.push(Span::styled(text, style));
    }

    fn punct(&mut self, text: &str) {
        self.push(text.to_string(), Style::default().fg(styling::JSON_PUNCT));
    }

    fn indent(&mut self, depth: usize) {
        if depth > 0 {
            self.current.push(Span::raw(INDENT.repeat(depth)));
        }
    }

    fn newline(&mut self) {
        let spans = std::mem::take(&mut self.current);
        self.lines.push(Line::from(spans));
    }

    fn key(&mut self, key: &str) {
        let color = match self.keys {
            KeyHighlight::Plain => styling::JSON_KEY,
            KeyHighlight::SchemaFields => styling::schema_key_color(key),
        };
        self.push(quoted(key), Style::default().fg(color));
    }

    fn write_value(&mut self, value: &Value, depth: usize) {
        match value {
            Value::Object(map) if map.is_empty() => self.punct("{}"),
            Value::Array(items) if items.is_empty() => self.punct("[]"),
            Value::Object(map) => {
                self.punct("{");
                self.newline();
                let last = map.len() - 1;
                for (i, (key, item)) in map.iter().enumerate() {
                    self.indent(depth + 1);
                    self.key(key);
                    self.punct(": ");
                    self.write_value(item, depth + 1);
                    if i < last {
                        self.punct(",");
                    }
                    self.newline();
                }
                self.indent(depth);
                self.punct("}");
            }
            Value::Array(items) => {
                self.punct("[");
                self.newline();
                let last = items.len() - 1;
                for (i, item) in items.iter().enumerate() {
                    self.indent(depth + 1);
                    self.write_value(item, depth + 1);
                    if i < last {
                        self.punct(",");
                    }
                    self.newline();
                }
                self.indent(depth);
                self.punct("]");
            }
            Value::String(_) => {
                self.push(value.to_string(), Style::default().fg(styling::JSON_STRING));
            }
            Value::Number(_) => {
                self.push(value.to_string(), Style::default().fg(styling::JSON_NUMBER));
            }
            Value::Bool(_) | Value::Null => {
                self.push(value.to_string(), Style::default().fg(styling::JSON_LITERAL));
            }
        }
    }

    fn finish(mut self) -> Vec<Line<'static>> {
        if !self.current.is_empty() {
            self.newline();
        }
        self.lines
    }
}

/// JSON string literal with escapes
fn quoted(s: &str) -> String {
    Value::from(s).to_string()
}
