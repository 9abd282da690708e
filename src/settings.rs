use std::path::PathBuf;

use anyhow::Result;
use config::{Config, Environment, File};
use serde::Deserialize;

pub const DEFAULT_INPUT: &str = "BOOK.md";
pub const DEFAULT_OUTPUT: &str = "app/src/main/res/raw/hexagram_data.json";
pub const DEFAULT_EXPECTED_COUNT: u32 = 64;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Hexagrams a complete book should yield.
    pub expected_count: u32,
}

/// Values passed on the command line; these win over file and env.
#[derive(Debug, Default)]
pub struct Overrides {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

impl Settings {
    /// Defaults, then `hexagram_parser.toml` if present, then `HEXAGRAM_*` env vars.
    pub fn load(overrides: Overrides) -> Result<Self> {
        let config = Config::builder()
            .set_default("input", DEFAULT_INPUT)?
            .set_default("output", DEFAULT_OUTPUT)?
            .set_default("expected_count", i64::from(DEFAULT_EXPECTED_COUNT))?
            .add_source(File::with_name("hexagram_parser").required(false))
            .add_source(Environment::with_prefix("HEXAGRAM"))
            .build()?;
        let mut settings: Settings = config.try_deserialize()?;
        settings.apply(overrides);
        Ok(settings)
    }

    fn apply(&mut self, overrides: Overrides) {
        if let Some(input) = overrides.input {
            self.input = input;
        }
        if let Some(output) = overrides.output {
            self.output = output;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_loaded_paths() {
        let mut settings = Settings {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            expected_count: DEFAULT_EXPECTED_COUNT,
        };
        settings.apply(Overrides {
            input: Some(PathBuf::from("other/BOOK.md")),
            output: None,
        });
        assert_eq!(settings.input, PathBuf::from("other/BOOK.md"));
        assert_eq!(settings.output, PathBuf::from(DEFAULT_OUTPUT));
    }
}
