pub mod blocks;
pub mod clipboard;
pub mod config;
pub mod html;
pub mod inline;
pub mod ir;
pub mod node;
pub mod normalize;
pub mod render;
pub mod sanitize;

use config::Config;
use ir::Block;
use node::Node;
use std::io;
use std::path::PathBuf;

/// Segments raw text into the ordered block sequence.
pub fn parse(text: &str) -> Vec<Block> {
    let lines = normalize::split_lines(text);
    blocks::segment(&lines)
}

/// Full pipeline: text to display-ready node tree.
pub fn render_document(text: &str) -> Node {
    render::render(&parse(text))
}

/// Text straight to escaped HTML for a display collaborator.
pub fn render_html(text: &str, config: &Config) -> String {
    html::to_html(&render_document(text), config)
}

pub fn list_files(inputs: &[PathBuf]) -> io::Result<Vec<PathBuf>> {
    let re = regex::Regex::new(r"(?i)\.(md|markdown)$").unwrap();
    let mut out: Vec<PathBuf> = Vec::new();

    for p in inputs {
        if p.is_dir() {
            for entry in std::fs::read_dir(p)? {
                let entry = entry?;
                let sub_path = entry.path();
                if sub_path.is_dir() {
                    let sub_files = list_files(&[sub_path])?;
                    out.extend(sub_files);
                } else if sub_path.is_file() {
                    if let Some(path_str) = sub_path.to_str() {
                        if re.is_match(path_str) {
                            out.push(sub_path);
                        }
                    }
                }
            }
        } else if p.is_file() {
            if let Some(path_str) = p.to_str() {
                if re.is_match(path_str) {
                    out.push(p.clone());
                }
            }
        }
    }

    out.sort();
    Ok(out)
}
