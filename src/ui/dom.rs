//! Structured element tree for rendered page fragments.
//!
//! Renderers build `Element`s instead of concatenating markup. Text nodes
//! and attribute values are escaped when the tree is serialized, so catalog
//! data can never inject markup or break out of an attribute.

/// A node in the element tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    pub fn text(s: impl Into<String>) -> Self {
        Node::Text(s.into())
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Element(el) => el.write_html(out),
            Node::Text(t) => out.push_str(&escape_text(t)),
        }
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Element(el) => {
                for child in &el.children {
                    child.collect_text(out);
                }
            }
            Node::Text(t) => out.push_str(t),
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

/// An HTML element: tag, class list, `data-*` attributes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    classes: Vec<String>,
    data: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            classes: Vec::new(),
            data: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Shorthand for `Element::new(tag).class(class)`
    pub fn with_class(tag: impl Into<String>, class: impl Into<String>) -> Self {
        Self::new(tag).class(class)
    }

    // Builder methods

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.add_class(class);
        self
    }

    /// Set a `data-{key}` attribute
    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_data(key, value);
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn children<I: IntoIterator<Item = Node>>(mut self, children: I) -> Self {
        self.children.extend(children);
        self
    }

    // Accessors

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn get_data(&self, key: &str) -> Option<&str> {
        self.data.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    pub fn child_nodes(&self) -> &[Node] {
        &self.children
    }

    // Mutation

    pub fn add_class(&mut self, class: impl Into<String>) {
        let class = class.into();
        if !class.is_empty() && !self.has_class(&class) {
            self.classes.push(class);
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    pub fn set_data(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.data.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.data.push((key, value)),
        }
    }

    /// Replace all children (the `innerHTML =` of the element tree)
    pub fn replace_children<I: IntoIterator<Item = Node>>(&mut self, children: I) {
        self.children = children.into_iter().collect();
    }

    /// Replace all children with a single text node
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.children = vec![Node::Text(text.into())];
    }

    // Queries

    /// Concatenated text of all descendant text nodes
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.collect_text(&mut out);
        }
        out
    }

    /// Descendants (not self) matching the predicate, in document order
    pub fn find_all<F>(&self, pred: F) -> Vec<&Element>
    where
        F: Fn(&Element) -> bool,
    {
        let mut found = Vec::new();
        self.walk(&pred, &mut found);
        found
    }

    fn walk<'a, F>(&'a self, pred: &F, found: &mut Vec<&'a Element>)
    where
        F: Fn(&Element) -> bool,
    {
        for child in &self.children {
            if let Node::Element(el) = child {
                if pred(el) {
                    found.push(el);
                }
                el.walk(pred, found);
            }
        }
    }

    /// Descendants carrying a class
    pub fn find_by_class(&self, class: &str) -> Vec<&Element> {
        self.find_all(|el| el.has_class(class))
    }

    /// First descendant matching the predicate, mutably (depth-first, document order)
    pub fn find_first_mut<F>(&mut self, pred: &F) -> Option<&mut Element>
    where
        F: Fn(&Element) -> bool,
    {
        for child in &mut self.children {
            if let Node::Element(el) = child {
                if pred(el) {
                    return Some(el);
                }
                if let Some(found) = el.find_first_mut(pred) {
                    return Some(found);
                }
            }
        }
        None
    }

    // Serialization

    /// Serialize to HTML with all text and attribute values escaped
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    /// Serialize only the children (the `innerHTML` view)
    pub fn inner_html(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.write_html(&mut out);
        }
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        if !self.classes.is_empty() {
            out.push_str(&format!(" class=\"{}\"", escape_attr(&self.classes.join(" "))));
        }
        for (key, value) in &self.data {
            out.push_str(&format!(" data-{}=\"{}\"", key, escape_attr(value)));
        }
        out.push('>');
        if is_void(&self.tag) {
            return;
        }
        for child in &self.children {
            child.write_html(out);
        }
        out.push_str(&format!("</{}>", self.tag));
    }
}

fn is_void(tag: &str) -> bool {
    matches!(tag, "input" | "br" | "hr" | "img")
}

/// Escape text content
pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape a double-quoted attribute value
pub fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
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
