use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Config {
    /// Route error-site diagnostics to stderr.
    #[serde(default)]
    pub debug: bool,

    /// Spaces per nesting level in the output document.
    #[serde(default = "default_indent")]
    pub indent: usize,
}

fn default_indent() -> usize {
    2
}

impl Default for Config {
    fn default() -> Self {
        Config {
            debug: false,
            indent: 2,
        }
    }
}
