use crate::blocks::MAX_HEADING_LEVEL;
use crate::inline;
use crate::ir::{Block, Token};
use crate::node::Node;
use crate::sanitize::sanitize_href;

/// Maps a block sequence onto the output tree. Pure and total: one
/// exhaustive match per sum type, no branching beyond link sanitization.
pub fn render(blocks: &[Block]) -> Node {
    Node::Document {
        children: blocks.iter().map(render_block).collect(),
    }
}

fn render_block(block: &Block) -> Node {
    match block {
        Block::Heading { level, text } => Node::Heading {
            level: (*level).clamp(1, MAX_HEADING_LEVEL),
            children: render_inline(text),
        },
        Block::Paragraph { text } => Node::Paragraph {
            children: render_inline(text),
        },
        Block::List { items } => Node::List {
            children: items
                .iter()
                .map(|item| Node::ListItem {
                    children: render_inline(item),
                })
                .collect(),
        },
        // Verbatim: code bodies bypass the tokenizer entirely
        Block::CodeBlock { lang, code } => Node::CodeBlock {
            lang: lang.clone(),
            code: code.clone(),
        },
    }
}

fn render_inline(text: &str) -> Vec<Node> {
    inline::tokenize(text).into_iter().map(render_token).collect()
}

fn render_token(token: Token) -> Node {
    match token {
        Token::Text { value } => Node::Text { value },
        Token::Code { value } => Node::InlineCode { value },
        Token::Link { label, href } => {
            let safe = sanitize_href(&href);
            Node::Link {
                label,
                href: safe.href,
                external: safe.external,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_renders_tokenized_text() {
        let tree = render(&[Block::Heading {
            level: 2,
            text: "use `cargo`".to_string(),
        }]);
        let Node::Document { children } = &tree else {
            panic!("expected document root");
        };
        assert_eq!(
            children[0],
            Node::Heading {
                level: 2,
                children: vec![
                    Node::Text {
                        value: "use ".to_string()
                    },
                    Node::InlineCode {
                        value: "cargo".to_string()
                    },
                ]
            }
        );
    }

    #[test]
    fn test_heading_level_never_exceeds_max() {
        let tree = render(&[Block::Heading {
            level: 9,
            text: "x".to_string(),
        }]);
        let Node::Document { children } = &tree else {
            panic!("expected document root");
        };
        assert!(matches!(children[0], Node::Heading { level: 6, .. }));
    }

    #[test]
    fn test_list_items_are_tokenized() {
        let tree = render(&[Block::List {
            items: vec!["[a](/b)".to_string()],
        }]);
        let Node::Document { children } = &tree else {
            panic!("expected document root");
        };
        assert_eq!(
            children[0],
            Node::List {
                children: vec![Node::ListItem {
                    children: vec![Node::Link {
                        label: "a".to_string(),
                        href: "/b".to_string(),
                        external: false,
                    }]
                }]
            }
        );
    }

    #[test]
    fn test_unsafe_link_target_replaced() {
        let tree = render(&[Block::Paragraph {
            text: "[click](javascript:alert%281%29)".to_string(),
        }]);
        let Node::Document { children } = &tree else {
            panic!("expected document root");
        };
        assert_eq!(
            children[0],
            Node::Paragraph {
                children: vec![Node::Link {
                    label: "click".to_string(),
                    href: "#".to_string(),
                    external: false,
                }]
            }
        );
    }

    #[test]
    fn test_script_text_stays_literal() {
        let tree = render(&[Block::Paragraph {
            text: "<script>alert(1)</script>".to_string(),
        }]);
        let Node::Document { children } = &tree else {
            panic!("expected document root");
        };
        assert_eq!(
            children[0],
            Node::Paragraph {
                children: vec![Node::Text {
                    value: "<script>alert(1)</script>".to_string()
                }]
            }
        );
    }

    #[test]
    fn test_code_block_body_not_tokenized() {
        let tree = render(&[Block::CodeBlock {
            lang: "md".to_string(),
            code: "[not](a-link) `not code`".to_string(),
        }]);
        let Node::Document { children } = &tree else {
            panic!("expected document root");
        };
        assert_eq!(
            children[0],
            Node::CodeBlock {
                lang: "md".to_string(),
                code: "[not](a-link) `not code`".to_string()
            }
        );
    }
}
