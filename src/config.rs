use std::path::PathBuf;

/// Default location of the graph description
pub const DEFAULT_INPUT: &str = "input.txt";

/// Default base name of the exported dot file
pub const DEFAULT_DOT_NAME: &str = "graph";

/// Configuration for a single run
#[derive(Debug, Clone)]
pub struct Config {
    pub input: PathBuf,
    pub dot_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            dot_name: DEFAULT_DOT_NAME.to_string(),
        }
    }
}

impl Config {
    /// Overrides the input file
    pub fn with_input(mut self, input: impl Into<PathBuf>) -> Self {
        self.input = input.into();
        self
    }

    /// Overrides the dot output name
    pub fn with_dot_name(mut self, dot_name: impl Into<String>) -> Self {
        self.dot_name = dot_name.into();
        self
    }
}
