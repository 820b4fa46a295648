#![forbid(unsafe_code)]

//! Parsing of `ccfmt.toml` and the resulting run configuration
//!
//! Every key in the file is optional. Anything left out falls back to the
//! built-in defaults: roots `src` and `test`, extensions `.cc` and `.hh`,
//! and `clang-format -i` as the formatter.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the configuration file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "ccfmt.toml";

const DEFAULT_ROOTS: [&str; 2] = ["src", "test"];
const DEFAULT_EXTENSIONS: [&str; 2] = [".cc", ".hh"];
const DEFAULT_FORMATTER: &str = "clang-format";
const IN_PLACE_FLAG: &str = "-i";

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("failed to read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML or has unexpected keys
    #[error("failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// An extension entry is not a single dot-prefixed suffix
    #[error("invalid extension '{0}': extensions must be a single suffix starting with '.' (e.g. \".cc\")")]
    InvalidExtension(String),
}

/// Resolved configuration for a formatting run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatConfig {
    /// Directories walked when no explicit paths are given, in order
    pub roots: Vec<PathBuf>,
    /// Extensions (with leading dot) eligible for formatting
    pub extensions: Vec<String>,
    /// Formatter executable, resolved through `PATH` unless it contains a separator
    pub formatter: String,
    /// Flag asking the formatter to rewrite the file in place
    pub in_place_flag: String,
}

impl Default for FormatConfig {
    fn default() -> Self {
        FormatConfig {
            roots: DEFAULT_ROOTS.iter().map(PathBuf::from).collect(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            formatter: DEFAULT_FORMATTER.to_string(),
            in_place_flag: IN_PLACE_FLAG.to_string(),
        }
    }
}

/// On-disk shape of `ccfmt.toml`
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    format: FormatSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FormatSection {
    roots: Option<Vec<PathBuf>>,
    extensions: Option<Vec<String>>,
    formatter: Option<String>,
}

impl FormatConfig {
    /// Parse configuration from a TOML string, filling gaps with defaults
    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config = FormatConfig::default();
        let section = file.format;

        if let Some(roots) = section.roots {
            config.roots = roots;
        }
        if let Some(extensions) = section.extensions {
            config.extensions = extensions;
        }
        if let Some(formatter) = section.formatter {
            config.formatter = formatter;
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from the given file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    /// Resolve the configuration for a run
    ///
    /// An explicit path must exist. Without one, `ccfmt.toml` in `dir` is
    /// used when present and the defaults otherwise.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "loading config");
            Self::load(&candidate)
        } else {
            Ok(FormatConfig::default())
        }
    }

    /// Replace the formatter executable (used for the `--formatter` flag)
    pub fn with_formatter(mut self, formatter: Option<String>) -> Self {
        if let Some(formatter) = formatter {
            self.formatter = formatter;
        }
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        // Only the final suffix of a file name is compared, so ".tar.gz" or a
        // bare "." could never match a real extension
        let invalid = |ext: &&String| match ext.strip_prefix('.') {
            Some(rest) => rest.is_empty() || rest.contains('.'),
            None => true,
        };
        match self.extensions.iter().find(invalid) {
            Some(bad) => Err(ConfigError::InvalidExtension(bad.clone())),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = FormatConfig::default();
        assert_eq!(
            config.roots,
            vec![PathBuf::from("src"), PathBuf::from("test")]
        );
        assert_eq!(config.extensions, vec![".cc", ".hh"]);
        assert_eq!(config.formatter, "clang-format");
        assert_eq!(config.in_place_flag, "-i");
    }

    #[test]
    fn test_parse_empty_file_uses_defaults() {
        let config = FormatConfig::parse("", Path::new("ccfmt.toml")).unwrap();
        assert_eq!(config, FormatConfig::default());
    }

    #[test]
    fn test_parse_overrides_some_keys() {
        let toml = r#"
[format]
roots = ["lib"]
formatter = "clang-format-17"
"#;
        let config = FormatConfig::parse(toml, Path::new("ccfmt.toml")).unwrap();
        assert_eq!(config.roots, vec![PathBuf::from("lib")]);
        assert_eq!(config.formatter, "clang-format-17");
        // Untouched keys keep their defaults
        assert_eq!(config.extensions, vec![".cc", ".hh"]);
        assert_eq!(config.in_place_flag, "-i");
    }

    #[test]
    fn test_parse_rejects_unknown_keys() {
        let toml = r#"
[format]
style = "llvm"
"#;
        let err = FormatConfig::parse(toml, Path::new("ccfmt.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_parse_rejects_extension_without_dot() {
        let toml = r#"
[format]
extensions = [".cc", "hh"]
"#;
        let err = FormatConfig::parse(toml, Path::new("ccfmt.toml")).unwrap_err();
        match err {
            ConfigError::InvalidExtension(ext) => assert_eq!(ext, "hh"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_rejects_multi_part_and_empty_extensions() {
        for bad in [".tar.gz", ".", ""] {
            let toml = format!("[format]\nextensions = [\".cc\", \"{bad}\"]\n");
            let err = FormatConfig::parse(&toml, Path::new("ccfmt.toml")).unwrap_err();
            match err {
                ConfigError::InvalidExtension(ext) => assert_eq!(ext, bad),
                other => panic!("unexpected error for {bad}: {other}"),
            }
        }
    }

    #[test]
    fn test_parse_accepts_single_suffix_extensions() {
        let toml = "[format]\nextensions = [\".cpp\", \".cxx\", \".h\"]\n";
        let config = FormatConfig::parse(toml, Path::new("ccfmt.toml")).unwrap();
        assert_eq!(config.extensions, vec![".cpp", ".cxx", ".h"]);
    }

    #[test]
    fn test_discover_without_file_returns_defaults() {
        let temp = TempDir::new().unwrap();
        let config = FormatConfig::discover(None, temp.path()).unwrap();
        assert_eq!(config, FormatConfig::default());
    }

    #[test]
    fn test_discover_reads_file_in_dir() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "[format]\nextensions = [\".cpp\"]\n",
        )
        .unwrap();

        let config = FormatConfig::discover(None, temp.path()).unwrap();
        assert_eq!(config.extensions, vec![".cpp"]);
    }

    #[test]
    fn test_discover_explicit_missing_file_is_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.toml");
        let err = FormatConfig::discover(Some(&missing), temp.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_with_formatter_overrides_only_when_set() {
        let config = FormatConfig::default().with_formatter(None);
        assert_eq!(config.formatter, "clang-format");

        let config = config.with_formatter(Some("/opt/llvm/bin/clang-format".to_string()));
        assert_eq!(config.formatter, "/opt/llvm/bin/clang-format");
    }
}
