//! Minimal immutable HTML document model.
//!
//! Markup is built as a tree of nodes via ordinary chained calls and
//! serialized once at the end. Untrusted content goes through `Text` nodes
//! (and attribute values), which are always escaped; `Raw` nodes are
//! reserved for deliberately inserted markup such as the embedded
//! stylesheet and `<br>`-split header cells.

/// A node of the document tree.
#[derive(Debug, Clone)]
pub enum Node {
    Element(Element),
    /// Escaped on serialization.
    Text(String),
    /// Serialized verbatim.
    Raw(String),
}

/// An element with a tag, attributes and children.
#[derive(Debug, Clone)]
pub struct Element {
    tag: &'static str,
    attrs: Vec<(&'static str, String)>,
    children: Vec<Node>,
}

/// Tags serialized without children or a closing tag.
const VOID_TAGS: [&str; 2] = ["br", "hr"];

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }

    pub fn text(self, content: impl Into<String>) -> Self {
        self.child(Node::Text(content.into()))
    }

    pub fn raw(self, markup: impl Into<String>) -> Self {
        self.child(Node::Raw(markup.into()))
    }

    /// Serializes the subtree rooted at this element.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_to(&mut out);
        out
    }

    fn write_to(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape(value));
            out.push('"');
        }
        out.push('>');

        if VOID_TAGS.contains(&self.tag) {
            return;
        }

        for child in &self.children {
            child.write_to(out);
        }

        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
    }
}

impl Node {
    fn write_to(&self, out: &mut String) {
        match self {
            Node::Element(element) => element.write_to(out),
            Node::Text(content) => out.push_str(&escape(content)),
            Node::Raw(markup) => out.push_str(markup),
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// A text node, escaped on serialization.
pub fn text(content: impl Into<String>) -> Node {
    Node::Text(content.into())
}

/// HTML-escape text content or an attribute value.
pub fn escape(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    for c in content.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
