// Copyright 2026 the Tickmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! XML serialization of [`Element`] trees.

use alloc::format;
use alloc::string::String;
use core::fmt::{self, Write};

use crate::Element;

/// The SVG XML namespace.
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Creates a root `<svg>` element of the given size with a matching `viewBox`.
pub fn svg_document(width: f64, height: f64) -> Element {
    Element::new("svg")
        .with_attr("xmlns", SVG_NAMESPACE)
        .with_attr("width", format!("{width}"))
        .with_attr("height", format!("{height}"))
        .with_attr("viewBox", format!("0 0 {width} {height}"))
}

impl Element {
    /// Serializes this element and its subtree as indented XML.
    pub fn write_svg(&self, out: &mut impl Write) -> fmt::Result {
        self.write_at_depth(out, 0)
    }

    /// Serializes this element and its subtree into a new string.
    pub fn to_svg_string(&self) -> String {
        let mut out = String::new();
        // Writing into a `String` never fails.
        let _ = self.write_svg(&mut out);
        out
    }

    fn write_at_depth(&self, out: &mut impl Write, depth: usize) -> fmt::Result {
        write_indent(out, depth)?;
        write!(out, "<{}", self.tag)?;
        for (name, value) in &self.attributes {
            write!(out, r#" {name}=""#)?;
            write_escaped(out, value)?;
            out.write_char('"')?;
        }

        if self.children.is_empty() {
            return match &self.text {
                None => out.write_str("/>\n"),
                Some(text) => {
                    out.write_char('>')?;
                    write_escaped(out, text)?;
                    writeln!(out, "</{}>", self.tag)
                }
            };
        }

        out.write_str(">\n")?;
        if let Some(text) = &self.text {
            write_indent(out, depth + 1)?;
            write_escaped(out, text)?;
            out.write_char('\n')?;
        }
        for child in &self.children {
            child.write_at_depth(out, depth + 1)?;
        }
        write_indent(out, depth)?;
        writeln!(out, "</{}>", self.tag)
    }
}

fn write_indent(out: &mut impl Write, depth: usize) -> fmt::Result {
    for _ in 0..depth {
        out.write_str("  ")?;
    }
    Ok(())
}

fn write_escaped(out: &mut impl Write, s: &str) -> fmt::Result {
    for c in s.chars() {
        match c {
            '&' => out.write_str("&amp;")?,
            '<' => out.write_str("&lt;")?,
            '>' => out.write_str("&gt;")?,
            '"' => out.write_str("&quot;")?,
            '\'' => out.write_str("&apos;")?,
            _ => out.write_char(c)?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn serializes_nested_tree_with_indentation() {
        let mut root = Element::new("g").with_attr("class", "axis");
        let tick = root.sub_element("g");
        tick.set_attribute("class", "tick");
        tick.append(Element::new("line").with_attr("x1", "0"));
        tick.append(Element::new("text").with_attr("x", "1").with_text("5"));

        let expected = "<g class=\"axis\">\n  <g class=\"tick\">\n    <line x1=\"0\"/>\n    <text x=\"1\">5</text>\n  </g>\n</g>\n";
        assert_eq!(root.to_svg_string(), expected);
    }

    #[test]
    fn escapes_attribute_values_and_text() {
        let el = Element::new("text")
            .with_attr("font-family", "\"Fira\" & <Co>")
            .with_text("a<b & 'c'");
        assert_eq!(
            el.to_svg_string(),
            "<text font-family=\"&quot;Fira&quot; &amp; &lt;Co&gt;\">a&lt;b &amp; &apos;c&apos;</text>\n"
        );
    }

    #[test]
    fn svg_document_has_namespace_and_view_box() {
        let doc = svg_document(320.0, 240.5);
        assert_eq!(doc.attribute("xmlns"), Some(SVG_NAMESPACE));
        assert_eq!(doc.attribute("width"), Some("320"));
        assert_eq!(doc.attribute("viewBox"), Some("0 0 320 240.5"));
    }
}
