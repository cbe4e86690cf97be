use crate::config::Config;
use crate::node::Node;
use html_escape::{encode_double_quoted_attribute, encode_text};

// Fixed lookup indexed by clamped level; tag names are never
// synthesized from the level value.
const HEADING_TAGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

/// Serializes the node tree as HTML. Every text and attribute value
/// passes through an escaper; markup only ever comes from the fixed
/// strings below, never from document input.
pub fn to_html(node: &Node, config: &Config) -> String {
    let mut out = String::new();
    write_node(node, config, &mut out);
    out
}

fn write_node(node: &Node, config: &Config, out: &mut String) {
    match node {
        Node::Document { children } => {
            for child in children {
                write_node(child, config, out);
                out.push('\n');
            }
        }
        Node::Heading { level, children } => {
            let tag = HEADING_TAGS[((*level).clamp(1, 6) - 1) as usize];
            out.push_str(&format!("<{tag}>"));
            write_children(children, config, out);
            out.push_str(&format!("</{tag}>"));
        }
        Node::Paragraph { children } => {
            out.push_str("<p>");
            write_children(children, config, out);
            out.push_str("</p>");
        }
        Node::List { children } => {
            out.push_str("<ul>");
            write_children(children, config, out);
            out.push_str("</ul>");
        }
        Node::ListItem { children } => {
            out.push_str("<li>");
            write_children(children, config, out);
            out.push_str("</li>");
        }
        Node::CodeBlock { lang, code } => {
            write_code_block(lang, code, config, out);
        }
        Node::Text { value } => {
            out.push_str(&encode_text(value));
        }
        Node::InlineCode { value } => {
            out.push_str("<code>");
            out.push_str(&encode_text(value));
            out.push_str("</code>");
        }
        Node::Link {
            label,
            href,
            external,
        } => {
            out.push_str(&format!(
                "<a href=\"{}\"",
                encode_double_quoted_attribute(href)
            ));
            if *external {
                out.push_str(" target=\"_blank\" rel=\"noopener noreferrer\"");
            }
            out.push('>');
            out.push_str(&encode_text(label));
            out.push_str("</a>");
        }
    }
}

fn write_children(children: &[Node], config: &Config, out: &mut String) {
    for child in children {
        write_node(child, config, out);
    }
}

fn write_code_block(lang: &str, code: &str, config: &Config, out: &mut String) {
    let label = if lang.is_empty() { "text" } else { lang };
    let class = format!("{}{}", config.lang_class_prefix, label);
    out.push_str("<div class=\"code-block\">");
    if !lang.is_empty() {
        out.push_str(&format!(
            "<div class=\"code-language\">{}</div>",
            encode_text(lang)
        ));
    }
    if config.copy_button {
        out.push_str("<button class=\"copy-code\" type=\"button\">Copy</button>");
    }
    out.push_str(&format!(
        "<pre><code class=\"{}\">",
        encode_double_quoted_attribute(&class)
    ));
    out.push_str(&encode_text(code));
    out.push_str("</code></pre></div>");
}
