//! Configuration loading for `dedentfmt`.
//!
//! Settings come from a `.dedentfmt.toml` file or a `[tool.dedentfmt]`
//! table in `pyproject.toml`, discovered by walking upward from the first
//! input path.

use serde::Deserialize;
use std::fs;
use std::path::Path;

/// File name of the dedicated configuration file.
pub const CONFIG_FILENAME: &str = ".dedentfmt.toml";
/// File name of the Python project file carrying a `[tool.dedentfmt]` table.
pub const PYPROJECT_FILENAME: &str = "pyproject.toml";

#[derive(Debug, Deserialize, Default, Clone)]
/// Top-level configuration struct.
pub struct Config {
    #[serde(default)]
    /// The main configuration section for dedentfmt.
    pub dedentfmt: DedentFmtConfig,
    /// The path to the configuration file this was loaded from.
    /// `None` when using defaults or programmatic config.
    #[serde(skip)]
    pub config_file_path: Option<std::path::PathBuf>,
}

#[derive(Debug, Deserialize, Default, Clone)]
/// Configuration options for dedentfmt.
pub struct DedentFmtConfig {
    /// Call names recognized as the dedent helper (default: `["dedent"]`).
    pub dedent_functions: Option<Vec<String>>,
    /// Module names that qualify the helper (default: `["textwrap"]`).
    pub dedent_modules: Option<Vec<String>>,
    /// Extra indentation used when the opening quote shares its line with
    /// other code (default: 4).
    pub indent_width: Option<usize>,
    /// Folder names excluded from directory traversal.
    pub exclude_folders: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, Clone)]
struct PyProject {
    tool: ToolConfig,
}

#[derive(Debug, Deserialize, Clone)]
struct ToolConfig {
    dedentfmt: DedentFmtConfig,
}

impl Config {
    /// Loads configuration from default locations in the current directory.
    #[must_use]
    pub fn load() -> Self {
        Self::load_from_path(Path::new("."))
    }

    /// Loads configuration starting from a specific path and traversing up.
    #[must_use]
    pub fn load_from_path(path: &Path) -> Self {
        let mut current = path.to_path_buf();
        if current.is_file() {
            current.pop();
        }

        loop {
            let dedentfmt_toml = current.join(CONFIG_FILENAME);
            if dedentfmt_toml.exists() {
                if let Ok(content) = fs::read_to_string(&dedentfmt_toml) {
                    if let Ok(mut config) = toml::from_str::<Config>(&content) {
                        config.config_file_path = Some(dedentfmt_toml);
                        return config;
                    }
                }
            }

            let pyproject_toml = current.join(PYPROJECT_FILENAME);
            if pyproject_toml.exists() {
                if let Ok(content) = fs::read_to_string(&pyproject_toml) {
                    if let Ok(pyproject) = toml::from_str::<PyProject>(&content) {
                        return Config {
                            dedentfmt: pyproject.tool.dedentfmt,
                            config_file_path: Some(pyproject_toml),
                        };
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        Config::default()
    }
}
