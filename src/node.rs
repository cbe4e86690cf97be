use serde::Serialize;

/// Display-ready output tree. Every leaf carries literal text only;
/// nothing in this tree is ever re-parsed as markup, which is what
/// makes injection structurally impossible downstream.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    Document { children: Vec<Node> },
    Heading { level: u8, children: Vec<Node> },
    Paragraph { children: Vec<Node> },
    List { children: Vec<Node> },
    ListItem { children: Vec<Node> },
    CodeBlock { lang: String, code: String },
    Text { value: String },
    InlineCode { value: String },
    Link { label: String, href: String, external: bool },
}
