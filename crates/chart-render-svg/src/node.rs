// File: crates/chart-render-svg/src/node.rs
// Summary: Minimal SVG element builder: tag + attributes + children + text, with entry animations.

use std::fmt;

use chart_core::format::xml_escape;
use chart_core::geometry::round3;

/// One markup element. Built by value, appended to a surface, serialized
/// with `Display`.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub tag: String,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
    pub text: Option<String>,
}

impl Node {
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into(), attrs: Vec::new(), children: Vec::new(), text: None }
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.attrs.push((name.into(), value.to_string()));
        self
    }

    /// Pixel-coordinate attribute, rounded so markup stays readable.
    pub fn attr_px(self, name: impl Into<String>, value: f64) -> Self {
        self.attr(name, round3(value))
    }

    pub fn child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Append an <animate> child transitioning `attribute` from `from` to
    /// `to` over `dur_s` seconds, frozen at the end state.
    pub fn animate(
        self,
        attribute: &str,
        from: impl ToString,
        to: impl ToString,
        dur_s: f64,
    ) -> Self {
        self.child(
            Node::new("animate")
                .attr("attributeName", attribute)
                .attr("from", from)
                .attr("to", to)
                .attr("dur", format!("{}s", dur_s))
                .attr("fill", "freeze"),
        )
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Depth-first descendants (self included) with the given tag.
    pub fn find_all<'a>(&'a self, tag: &str) -> Vec<&'a Node> {
        let mut out = Vec::new();
        self.collect(tag, &mut out);
        out
    }

    fn collect<'a>(&'a self, tag: &str, out: &mut Vec<&'a Node>) {
        if self.tag == tag {
            out.push(self);
        }
        for c in &self.children {
            c.collect(tag, out);
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        for (k, v) in &self.attrs {
            write!(f, " {}=\"{}\"", k, xml_escape(v))?;
        }
        if self.children.is_empty() && self.text.is_none() {
            return write!(f, "/>");
        }
        write!(f, ">")?;
        if let Some(t) = &self.text {
            write!(f, "{}", xml_escape(t))?;
        }
        for c in &self.children {
            write!(f, "{}", c)?;
        }
        write!(f, "</{}>", self.tag)
    }
}
