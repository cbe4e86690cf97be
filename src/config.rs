use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Delay before the "copied" indicator auto-resets, in milliseconds.
    #[serde(default = "default_copy_reset_ms")]
    pub copy_reset_ms: u64,

    /// Class prefix for the code element's language label.
    #[serde(default = "default_lang_class_prefix")]
    pub lang_class_prefix: String,

    /// Emit the copy-affordance element on code blocks in HTML output.
    #[serde(default = "default_copy_button")]
    pub copy_button: bool,
}

fn default_copy_reset_ms() -> u64 {
    2000
}
fn default_lang_class_prefix() -> String {
    "language-".to_string()
}
fn default_copy_button() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Config {
            copy_reset_ms: 2000,
            lang_class_prefix: "language-".to_string(),
            copy_button: true,
        }
    }
}
