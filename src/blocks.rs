use crate::ir::Block;
use regex::Regex;
use std::sync::LazyLock;

static RE_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#+)\s+(.*)$").unwrap());
static RE_LIST_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-*]\s+(.*)$").unwrap());

const FENCE: &str = "```";
pub const MAX_HEADING_LEVEL: u8 = 6;

/// Splits normalized source lines into an ordered block sequence.
/// Total over arbitrary input: every line is either consumed into a
/// block or skipped, and the cursor advances on every iteration.
pub fn segment(lines: &[String]) -> Vec<Block> {
    let mut blocks: Vec<Block> = Vec::new();
    let mut i = 0;
    let n = lines.len();

    while i < n {
        let t = lines[i].trim();

        if let Some(info) = t.strip_prefix(FENCE) {
            let lang = info.trim().to_string();
            let mut body: Vec<&str> = Vec::new();
            i += 1;
            while i < n {
                if lines[i].trim().starts_with(FENCE) {
                    i += 1;
                    break;
                }
                body.push(lines[i].as_str());
                i += 1;
            }
            // An unclosed fence still yields a block at end of input
            blocks.push(Block::CodeBlock {
                lang,
                code: body.join("\n"),
            });
            continue;
        }

        if let Some(caps) = RE_HEADING.captures(t) {
            let level = caps[1].len().min(MAX_HEADING_LEVEL as usize) as u8;
            blocks.push(Block::Heading {
                level,
                text: caps[2].trim().to_string(),
            });
            i += 1;
            continue;
        }

        if RE_LIST_ITEM.is_match(t) {
            let mut items: Vec<String> = Vec::new();
            while i < n {
                match RE_LIST_ITEM.captures(lines[i].trim()) {
                    Some(caps) => {
                        items.push(caps[1].trim().to_string());
                        i += 1;
                    }
                    None => break,
                }
            }
            blocks.push(Block::List { items });
            continue;
        }

        if t.is_empty() {
            i += 1;
            continue;
        }

        // Paragraph: merge following lines until blank or structural
        let mut para = vec![t.to_string()];
        i += 1;
        while i < n {
            let nt = lines[i].trim();
            if nt.is_empty()
                || nt.starts_with(FENCE)
                || RE_HEADING.is_match(nt)
                || RE_LIST_ITEM.is_match(nt)
            {
                break;
            }
            para.push(nt.to_string());
            i += 1;
        }
        blocks.push(Block::Paragraph {
            text: para.join(" "),
        });
    }

    blocks
}
