use clap::Parser;
use safemark::config::Config;
use std::fs;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(
    name = "safemark",
    about = "Safe markdown-subset renderer — render documents to HTML or a JSON node tree"
)]
struct Cli {
    /// Input file(s) or directory
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format: html, json (default: html)
    #[arg(short, long)]
    format: Option<String>,

    /// Config file path
    #[arg(long)]
    config: Option<PathBuf>,
}

fn die(msg: &str) -> ! {
    eprintln!("error: {}", msg);
    process::exit(1);
}

fn load_config(path: &PathBuf) -> Config {
    let text =
        fs::read_to_string(path).unwrap_or_else(|e| die(&format!("cannot read config: {}", e)));
    serde_json::from_str(&text).unwrap_or_else(|e| die(&format!("invalid config JSON: {}", e)))
}

fn main() {
    let cli = Cli::parse();

    let config = if let Some(ref config_path) = cli.config {
        load_config(config_path)
    } else {
        let defaults = ["safemark.config.json", "config/safemark.config.json"];
        let mut loaded = None;
        for p in &defaults {
            let path = PathBuf::from(p);
            if path.is_file() {
                loaded = Some(load_config(&path));
                break;
            }
        }
        loaded.unwrap_or_default()
    };

    let format = cli.format.as_deref().unwrap_or("html");
    if format != "html" && format != "json" {
        die(&format!("invalid format: {}", format));
    }

    let files = safemark::list_files(&cli.inputs).unwrap_or_else(|e| die(&format!("{}", e)));
    if files.is_empty() {
        die("no input files found");
    }

    let mut all_text = String::new();
    for fp in &files {
        if !all_text.is_empty() {
            all_text.push('\n');
        }
        let content = fs::read_to_string(fp)
            .unwrap_or_else(|e| die(&format!("cannot read {}: {}", fp.display(), e)));
        all_text.push_str(&content);
    }

    let tree = safemark::render_document(&all_text);
    let mut result = match format {
        "json" => serde_json::to_string_pretty(&tree)
            .unwrap_or_else(|e| die(&format!("cannot serialize tree: {}", e))),
        _ => safemark::html::to_html(&tree, &config),
    };
    if !result.ends_with('\n') {
        result.push('\n');
    }

    if let Some(ref output_path) = cli.output {
        fs::write(output_path, &result)
            .unwrap_or_else(|e| die(&format!("cannot write {}: {}", output_path.display(), e)));
        eprintln!(
            "rendered {} file(s) -> {} ({})",
            files.len(),
            output_path.display(),
            format
        );
    } else {
        print!("{}", result);
    }
}
