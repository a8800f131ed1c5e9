use crate::doc::{Document, Element};

impl Document {
    /// Renders the document as indented XML text.
    ///
    /// Deterministic: attributes and children appear in declaration order,
    /// so the same document always yields identical text.
    pub fn to_xml(&self) -> String {
        let mut out = String::new();
        out.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
        write_element(&mut out, &self.root, 0);
        out
    }
}

fn write_element(out: &mut String, element: &Element, depth: usize) {
    let pad = "  ".repeat(depth);

    out.push_str(&pad);
    out.push('<');
    out.push_str(element.name);
    for (name, value) in element.attrs() {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&xml_escape(value));
        out.push('"');
    }

    if element.children().is_empty() {
        out.push_str(" />\n");
        return;
    }

    out.push_str(">\n");
    for child in element.children() {
        write_element(out, child, depth + 1);
    }
    out.push_str(&pad);
    out.push_str("</");
    out.push_str(element.name);
    out.push_str(">\n");
}

fn xml_escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
