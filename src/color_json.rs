//! Purpose: Render pretty JSON with optional ANSI colorization for CLI output.
//! Exports: `colorize_json`.
//! Role: Small, pure formatter used by CLI emission paths.
//! Invariants: When color is disabled, output equals serde_json::to_string_pretty.
//! Invariants: ANSI escapes appear only when explicitly enabled.
use serde_json::Value;

const INDENT: &str = "  ";

// Conservative 8/16-color palette for broad terminal compatibility.
const COLOR_KEY: &str = "36";
const COLOR_STRING: &str = "32";
const COLOR_NUMBER: &str = "33";
const COLOR_BOOL: &str = "35";
const COLOR_NULL: &str = "39";
const COLOR_PUNCT: &str = "39";

pub fn colorize_json(value: &Value, use_color: bool) -> String {
    let mut painter = Painter {
        use_color,
        out: String::new(),
    };
    painter.value(value, 0);
    painter.out
}

struct Painter {
    use_color: bool,
    out: String,
}

impl Painter {
    fn value(&mut self, value: &Value, depth: usize) {
        match value {
            Value::Null => self.paint("null", COLOR_NULL),
            Value::Bool(flag) => {
                let text = if *flag { "true" } else { "false" };
                self.paint(text, COLOR_BOOL);
            }
            Value::Number(num) => {
                let text = num.to_string();
                self.paint(&text, COLOR_NUMBER);
            }
            Value::String(text) => self.string(text, COLOR_STRING),
            Value::Array(items) => self.array(items, depth),
            Value::Object(map) => self.object(map, depth),
        }
    }

    fn array(&mut self, items: &[Value], depth: usize) {
        if items.is_empty() {
            self.paint("[]", COLOR_PUNCT);
            return;
        }
        self.paint("[", COLOR_PUNCT);
        for (idx, item) in items.iter().enumerate() {
            if idx > 0 {
                self.paint(",", COLOR_PUNCT);
            }
            self.newline(depth + 1);
            self.value(item, depth + 1);
        }
        self.newline(depth);
        self.paint("]", COLOR_PUNCT);
    }

    fn object(&mut self, map: &serde_json::Map<String, Value>, depth: usize) {
        if map.is_empty() {
            self.paint("{}", COLOR_PUNCT);
            return;
        }
        self.paint("{", COLOR_PUNCT);
        for (idx, (key, item)) in map.iter().enumerate() {
            if idx > 0 {
                self.paint(",", COLOR_PUNCT);
            }
            self.newline(depth + 1);
            self.string(key, COLOR_KEY);
            self.paint(":", COLOR_PUNCT);
            self.out.push(' ');
            self.value(item, depth + 1);
        }
        self.newline(depth);
        self.paint("}", COLOR_PUNCT);
    }

    fn string(&mut self, text: &str, color: &str) {
        let encoded = serde_json::to_string(text).unwrap_or_else(|_| "\"\"".to_string());
        self.paint(&encoded, color);
    }

    fn newline(&mut self, depth: usize) {
        self.out.push('\n');
        for _ in 0..depth {
            self.out.push_str(INDENT);
        }
    }

    fn paint(&mut self, text: &str, color: &str) {
        if self.use_color {
            self.out.push_str("\x1b[");
            self.out.push_str(color);
            self.out.push('m');
            self.out.push_str(text);
            self.out.push_str("\x1b[0m");
        } else {
            self.out.push_str(text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::colorize_json;
    use serde_json::json;

    #[test]
    fn uncolored_output_matches_serde_pretty() {
        let cases = [
            json!(null),
            json!({}),
            json!([]),
            json!({"a": 1, "b": [true, null, "x"], "c": {"nested": -2.5}}),
            json!(["tab\there", "quote\"there"]),
        ];
        for value in cases {
            assert_eq!(
                colorize_json(&value, false),
                serde_json::to_string_pretty(&value).unwrap()
            );
        }
    }

    #[test]
    fn colored_output_contains_escapes_only_when_enabled() {
        let value = json!({"a": 1});
        assert!(colorize_json(&value, true).contains("\x1b["));
        assert!(!colorize_json(&value, false).contains("\x1b["));
    }
}
