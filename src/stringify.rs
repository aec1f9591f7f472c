//! The flattened list form used by page rendering.
//!
//! Writes a page's content list in a JSON-array-like textual form with
//! single-quote string delimiters, which [`Page::render`](crate::Page::render)
//! then normalizes into the double-quote convention the book grammar
//! requires. The normalization is a global character substitution; see the
//! warning on `Page::render`.

use serde_json::Value;

pub(crate) struct ListWriter<'a> {
    output: &'a mut String,
}

impl<'a> ListWriter<'a> {
    pub(crate) fn new(output: &'a mut String) -> Self {
        Self { output }
    }

    /// Writes the list separator.
    pub(crate) fn separator(&mut self) {
        self.output.push_str(", ");
    }

    // Strings are written with bare single-quote delimiters and no
    // escaping. The quote substitution in page rendering rewrites the
    // delimiters; a literal quote character inside `s` gets rewritten
    // along with them.
    fn write_string(&mut self, s: &str) {
        self.output.push('\'');
        self.output.push_str(s);
        self.output.push('\'');
    }

    fn write_list(&mut self, list: &[Value]) {
        self.output.push('[');
        for (i, v) in list.iter().enumerate() {
            if i > 0 {
                self.separator();
            }
            self.write_element(v);
        }
        self.output.push(']');
    }

    fn write_mapping(&mut self, map: &serde_json::Map<String, Value>) {
        self.output.push('{');
        let mut first = true;
        for (k, v) in map {
            if !first {
                self.separator();
            }
            first = false;
            self.write_string(k);
            self.output.push_str(": ");
            self.write_element(v);
        }
        self.output.push('}');
    }

    /// Writes a value to the output.
    pub(crate) fn write_element(&mut self, value: &Value) {
        match value {
            Value::Null => self.output.push_str("null"),
            Value::Bool(true) => self.output.push_str("true"),
            Value::Bool(false) => self.output.push_str("false"),
            Value::Number(n) => self.output.push_str(&n.to_string()),
            Value::String(s) => self.write_string(s),
            Value::Array(list) => self.write_list(list),
            Value::Object(map) => self.write_mapping(map),
        }
    }
}

/// Renders a page content list (placeholder slot first) and applies the
/// quote normalization.
pub(crate) fn render_content(content: &[Value]) -> String {
    let mut raw = String::from("[");

    {
        let mut w = ListWriter::new(&mut raw);

        // The reserved placeholder slot is always present and always
        // followed by its separator, components or not.
        w.write_element(&content[0]);
        w.separator();

        for (i, v) in content[1..].iter().enumerate() {
            if i > 0 {
                w.separator();
            }
            w.write_element(v);
        }
    }

    raw.push(']');

    raw.replace('\'', "\"")
}
