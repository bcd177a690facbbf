use crate::escape::{escape_attribute, escape_text};

/// Elements serialized without a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

const INDENT_STEP: usize = 2;

#[derive(Clone, Debug, PartialEq)]
pub enum Child {
    Tag(TagNode),
    Text(String),
    /// Emitted verbatim, no escaping. Caller owns the markup.
    Raw(String),
}

/// One node of the server-rendered markup tree: tag name, optional element
/// id, insertion-ordered attributes, and owned children.
#[derive(Clone, Debug, PartialEq)]
pub struct TagNode {
    tag: String,
    id: Option<String>,
    attributes: Vec<(String, String)>,
    children: Vec<Child>,
}

impl TagNode {
    pub fn new(tag: &str, id: Option<&str>) -> Self {
        Self {
            tag: tag.to_string(),
            id: id.filter(|s| !s.is_empty()).map(str::to_string),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Set or extend an attribute.
    ///
    /// `append` joins the new value to any existing one with a single space,
    /// preserving write order and keeping duplicates; otherwise the old value
    /// is replaced. The first write behaves the same either way.
    pub fn att(&mut self, name: &str, value: &str, append: bool) -> &mut Self {
        let Some(index) = self
            .attributes
            .iter()
            .position(|(existing, _)| existing == name)
        else {
            self.attributes.push((name.to_string(), value.to_string()));
            return self;
        };

        let slot = &mut self.attributes[index];
        if append && !slot.1.is_empty() {
            slot.1.push(' ');
            slot.1.push_str(value);
        } else {
            slot.1 = value.to_string();
        }
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Append a child element and return a borrow of it for further nesting.
    pub fn add(&mut self, child: TagNode) -> &mut TagNode {
        self.children.push(Child::Tag(child));
        let Some(Child::Tag(tag)) = self.children.last_mut() else {
            unreachable!("just pushed a tag child");
        };
        tag
    }

    pub fn add_text(&mut self, text: &str) -> &mut Self {
        self.children.push(Child::Text(text.to_string()));
        self
    }

    pub fn add_raw(&mut self, raw: &str) -> &mut Self {
        self.children.push(Child::Raw(raw.to_string()));
        self
    }

    pub fn children(&self) -> &[Child] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut Vec<Child> {
        &mut self.children
    }

    fn is_void(&self) -> bool {
        VOID_ELEMENTS
            .iter()
            .any(|v| self.tag.eq_ignore_ascii_case(v))
    }

    /// Serialize the subtree starting at the given nesting depth.
    pub fn render(&self, depth: usize) -> String {
        let mut out = String::new();
        self.render_into(depth, &mut out);
        out
    }

    fn render_into(&self, depth: usize, out: &mut String) {
        let indent = " ".repeat(depth.saturating_mul(INDENT_STEP));
        out.push_str(&indent);
        out.push('<');
        out.push_str(&self.tag);
        if let Some(id) = self.id.as_deref() {
            out.push_str(" id=\"");
            out.push_str(&escape_attribute(id));
            out.push('"');
        }
        for (name, value) in &self.attributes {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape_attribute(value));
            out.push('"');
        }
        out.push('>');

        if self.is_void() {
            return;
        }

        if self.children.is_empty() {
            out.push_str("</");
            out.push_str(&self.tag);
            out.push('>');
            return;
        }

        for child in &self.children {
            out.push('\n');
            match child {
                Child::Tag(tag) => tag.render_into(depth + 1, out),
                Child::Text(text) => {
                    out.push_str(&indent);
                    out.push_str(&" ".repeat(INDENT_STEP));
                    out.push_str(&escape_text(text));
                }
                Child::Raw(raw) => out.push_str(raw),
            }
        }
        out.push('\n');
        out.push_str(&indent);
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

#[cfg(test)]
mod tests {
    use super::TagNode;

    #[test]
    fn att_append_joins_with_space() {
        let mut node = TagNode::new("div", None);
        node.att("class", "a", true).att("class", "b", true);
        assert_eq!(node.attribute("class"), Some("a b"));
    }

    #[test]
    fn att_replace_overwrites() {
        let mut node = TagNode::new("div", None);
        node.att("class", "a", true).att("class", "b", false);
        assert_eq!(node.attribute("class"), Some("b"));
    }

    #[test]
    fn att_append_on_missing_attribute_sets_it() {
        let mut node = TagNode::new("div", None);
        node.att("class", "solo", true);
        assert_eq!(node.attribute("class"), Some("solo"));
    }

    #[test]
    fn render_nests_with_two_space_indent() {
        let mut root = TagNode::new("div", Some("wrap"));
        root.add(TagNode::new("span", None)).add_text("hi");
        assert_eq!(
            root.render(0),
            "<div id=\"wrap\">\n  <span>\n    hi\n  </span>\n</div>"
        );
    }

    #[test]
    fn render_starts_at_requested_depth() {
        let node = TagNode::new("p", None);
        assert_eq!(node.render(2), "    <p></p>");
    }

    #[test]
    fn void_elements_have_no_closing_tag() {
        let mut input = TagNode::new("input", Some("q"));
        input.att("placeholder", "search", false);
        assert_eq!(input.render(0), "<input id=\"q\" placeholder=\"search\">");
    }

    #[test]
    fn attribute_values_are_escaped() {
        let mut node = TagNode::new("div", None);
        node.att("title", "a \"b\" <c>", false);
        assert_eq!(
            node.render(0),
            "<div title=\"a &quot;b&quot; &lt;c&gt;\"></div>"
        );
    }

    #[test]
    fn empty_id_is_dropped() {
        let node = TagNode::new("div", Some(""));
        assert_eq!(node.id(), None);
        assert_eq!(node.render(0), "<div></div>");
    }
}
