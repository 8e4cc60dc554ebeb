use std::path::PathBuf;

use thiserror::Error;

pub const USAGE: &str = "\
Usage: rb-tree-demo [--count N] [--seed S] [--max K] [--delete K] [--out DIR]

  --count N   number of random keys to insert (default 31)
  --seed S    RNG seed (default 0)
  --max K     keys are drawn from [0, K) (default 2147)
  --delete K  key to delete (default: the median stored key)
  --out DIR   directory for before_delete.dot / after_delete.dot (default .)";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown argument `{0}`")]
    UnknownArgument(String),
    #[error("`{0}` expects a value")]
    MissingValue(String),
    #[error("invalid value `{value}` for `{flag}`")]
    InvalidValue { flag: String, value: String },
    #[error("`--max` must be positive, got {0}")]
    EmptyKeyRange(i64),
}

/// Demo settings, read from command-line flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub count: usize,
    pub seed: u64,
    pub max_key: i64,
    pub delete: Option<i64>,
    pub out_dir: PathBuf,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            count: 31,
            seed: 0,
            max_key: 2147,
            delete: None,
            out_dir: PathBuf::from("."),
        }
    }
}

impl DemoConfig {
    /// Parses flags (without the program name). Later flags override earlier
    /// ones.
    pub fn from_args<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();
        while let Some(flag) = args.next() {
            let value = match flag.as_str() {
                "--count" | "--seed" | "--max" | "--delete" | "--out" => args
                    .next()
                    .ok_or_else(|| ConfigError::MissingValue(flag.clone()))?,
                _ => return Err(ConfigError::UnknownArgument(flag)),
            };
            match flag.as_str() {
                "--count" => config.count = parse(&flag, &value)?,
                "--seed" => config.seed = parse(&flag, &value)?,
                "--max" => config.max_key = parse(&flag, &value)?,
                "--delete" => config.delete = Some(parse(&flag, &value)?),
                _ => config.out_dir = PathBuf::from(value),
            }
        }
        if config.max_key <= 0 {
            return Err(ConfigError::EmptyKeyRange(config.max_key));
        }
        Ok(config)
    }
}

fn parse<T: std::str::FromStr>(flag: &str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        flag: flag.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults_without_flags() {
        assert_eq!(DemoConfig::from_args(Vec::new()), Ok(DemoConfig::default()));
    }

    #[test]
    fn parses_every_flag() {
        let config = DemoConfig::from_args(args(&[
            "--count", "7", "--seed", "42", "--max", "100", "--delete", "-3", "--out", "/tmp/x",
        ]))
        .unwrap();
        assert_eq!(
            config,
            DemoConfig {
                count: 7,
                seed: 42,
                max_key: 100,
                delete: Some(-3),
                out_dir: PathBuf::from("/tmp/x"),
            }
        );
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(
            DemoConfig::from_args(args(&["--verbose"])),
            Err(ConfigError::UnknownArgument("--verbose".to_string()))
        );
        assert_eq!(
            DemoConfig::from_args(args(&["--count"])),
            Err(ConfigError::MissingValue("--count".to_string()))
        );
        assert_eq!(
            DemoConfig::from_args(args(&["--seed", "x"])),
            Err(ConfigError::InvalidValue {
                flag: "--seed".to_string(),
                value: "x".to_string()
            })
        );
        assert_eq!(
            DemoConfig::from_args(args(&["--max", "0"])),
            Err(ConfigError::EmptyKeyRange(0))
        );
    }
}
