//! `.name-verify.yaml` discovery, loading and layering.
//!
//! A config file is looked up next to the working directory first and then
//! in the per-user config directory. Values given on the command line are
//! layered over the file as [`ConfigOverrides`].

use super::types::AppConfig;
use crate::reports::ReportFormat;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File names tried in each search directory, first hit wins.
const CONFIG_FILE_NAMES: [&str; 4] = [
    ".name-verify.yaml",
    ".name-verify.yml",
    "name-verify.yaml",
    "name-verify.yml",
];

/// Sub-directory of the platform config dir searched last.
const USER_CONFIG_DIR: &str = "name-verify";

/// Locate the config file to load.
///
/// An explicit path wins when it exists. Otherwise the working directory
/// is searched, then `<config dir>/name-verify/`.
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path.filter(|p| p.exists()) {
        return Some(path.to_path_buf());
    }

    let mut search_dirs = std::env::current_dir()
        .ok()
        .into_iter()
        .chain(dirs::config_dir().map(|dir| dir.join(USER_CONFIG_DIR)));

    search_dirs.find_map(|dir| first_config_in(&dir))
}

fn first_config_in(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|candidate| candidate.is_file())
}

/// Failure to read a config file.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("no config file at {}", .0.display())]
    Missing(PathBuf),

    #[error("cannot read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("malformed config file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Parse the YAML config at `path`. Absent keys take their defaults.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.is_file() {
        return Err(ConfigFileError::Missing(path.to_path_buf()));
    }
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&raw)?)
}

/// The discovered config, or defaults when there is none.
///
/// A file that fails to load is logged and ignored. The second element is
/// the path the config actually came from.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    let Some(path) = discover_config_file(explicit_path) else {
        return (AppConfig::default(), None);
    };
    match load_config_file(&path) {
        Ok(config) => (config, Some(path)),
        Err(err) => {
            tracing::warn!("Ignoring config {}: {err}", path.display());
            (AppConfig::default(), None)
        }
    }
}

/// Settings given on the command line.
///
/// `None` leaves the file value in place, so an explicitly passed default
/// (`--preset balanced`, `-o summary`) still wins over the file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub preset: Option<String>,
    pub threshold: Option<f64>,
    pub rules_file: Option<PathBuf>,
    pub storage_path: Option<PathBuf>,
    pub output_format: Option<ReportFormat>,
    /// Only ever switches color off
    pub no_color: bool,
}

impl AppConfig {
    /// Apply every override that was set.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(preset) = &overrides.preset {
            self.matching.preset.clone_from(preset);
        }
        if let Some(threshold) = overrides.threshold {
            self.matching.threshold = Some(threshold);
        }
        if let Some(rules_file) = &overrides.rules_file {
            self.matching.rules_file = Some(rules_file.clone());
        }
        if let Some(path) = &overrides.storage_path {
            self.storage.path.clone_from(path);
        }
        if let Some(format) = overrides.output_format {
            self.output.format = format;
        }
        self.output.no_color |= overrides.no_color;
    }

    /// Discover and load the config file, then apply `cli_overrides`.
    #[must_use]
    pub fn from_file_with_overrides(
        config_path: Option<&Path>,
        cli_overrides: &ConfigOverrides,
    ) -> (Self, Option<PathBuf>) {
        let (mut config, source) = load_or_default(config_path);
        config.apply_overrides(cli_overrides);
        (config, source)
    }
}

/// A commented `.name-verify.yaml` holding every default.
#[must_use]
pub fn generate_example_config() -> String {
    let body = serde_yaml::to_string(&AppConfig::default()).unwrap_or_default();
    format!(
        "# name-verify configuration\n\
         # Searched as .name-verify.yaml in the working directory, then in the\n\
         # user config directory under name-verify/. The generator API key falls\n\
         # back to the OPENAI_API_KEY environment variable.\n\n{body}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MatchingConfig;
    use tempfile::TempDir;

    #[test]
    fn test_dotfile_found_first() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("name-verify.yaml"), "").unwrap();
        std::fs::write(dir.path().join(".name-verify.yml"), "").unwrap();

        assert_eq!(
            first_config_in(dir.path()),
            Some(dir.path().join(".name-verify.yml"))
        );
    }

    #[test]
    fn test_empty_dir_has_no_config() {
        let dir = TempDir::new().unwrap();
        assert_eq!(first_config_in(dir.path()), None);
    }

    #[test]
    fn test_explicit_path_wins() {
        let dir = TempDir::new().unwrap();
        let custom = dir.path().join("team-settings.yaml");
        std::fs::write(&custom, "matching:\n  preset: strict\n").unwrap();

        assert_eq!(discover_config_file(Some(&custom)), Some(custom));
    }

    #[test]
    fn test_missing_explicit_path_falls_back_to_search() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("absent.yaml");
        assert_ne!(discover_config_file(Some(&missing)), Some(missing));
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("name-verify.yaml");

        let yaml = r"
matching:
  preset: strict
  threshold: 0.9
storage:
  path: /var/lib/name-verify/target.json
output:
  format: json
";
        std::fs::write(&config_path, yaml).unwrap();
        let config = load_config_file(&config_path).unwrap();

        assert_eq!(config.matching.preset, "strict");
        assert_eq!(config.matching.threshold, Some(0.9));
        assert_eq!(
            config.storage.path,
            PathBuf::from("/var/lib/name-verify/target.json")
        );
        assert_eq!(config.output.format, ReportFormat::Json);
        // unspecified sections keep their defaults
        assert_eq!(config.generator.timeout_secs, 30);
    }

    #[test]
    fn test_missing_file() {
        let result = load_config_file(Path::new("/nonexistent/name-verify.yaml"));
        assert!(matches!(result, Err(ConfigFileError::Missing(_))));
    }

    #[test]
    fn test_malformed_file_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("broken.yaml");
        std::fs::write(&config_path, "matching: [not, a, map").unwrap();

        assert!(matches!(
            load_config_file(&config_path),
            Err(ConfigFileError::Parse(_))
        ));
        let (config, source) = load_or_default(Some(&config_path));
        assert_eq!(config, AppConfig::default());
        assert!(source.is_none());
    }

    #[test]
    fn test_unset_overrides_change_nothing() {
        let mut base = AppConfig::builder().preset("strict").threshold(0.8).build();
        let before = base.clone();
        base.apply_overrides(&ConfigOverrides::default());
        assert_eq!(base, before);
    }

    #[test]
    fn test_set_overrides_win() {
        let mut base = AppConfig {
            matching: MatchingConfig {
                preset: "strict".to_string(),
                threshold: Some(0.8),
                ..MatchingConfig::default()
            },
            ..AppConfig::default()
        };
        let overrides = ConfigOverrides {
            threshold: Some(0.9),
            storage_path: Some(PathBuf::from("custom.json")),
            no_color: true,
            ..ConfigOverrides::default()
        };

        base.apply_overrides(&overrides);

        assert_eq!(base.matching.preset, "strict");
        assert_eq!(base.matching.threshold, Some(0.9));
        assert_eq!(base.storage.path, PathBuf::from("custom.json"));
        assert!(base.output.no_color);
        assert_eq!(base.output.format, ReportFormat::Summary);
    }

    #[test]
    fn test_default_valued_overrides_beat_file() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("name-verify.yaml");
        std::fs::write(
            &config_path,
            "matching:\n  preset: strict\noutput:\n  format: json\n",
        )
        .unwrap();

        let overrides = ConfigOverrides {
            preset: Some("balanced".to_string()),
            output_format: Some(ReportFormat::Summary),
            ..ConfigOverrides::default()
        };
        let (config, _) = AppConfig::from_file_with_overrides(Some(&config_path), &overrides);

        assert_eq!(config.matching.preset, "balanced");
        assert_eq!(config.output.format, ReportFormat::Summary);
    }

    #[test]
    fn test_file_then_cli_layering() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("name-verify.yaml");
        std::fs::write(&config_path, "matching:\n  preset: permissive\n").unwrap();

        let overrides = ConfigOverrides {
            output_format: Some(ReportFormat::Json),
            ..ConfigOverrides::default()
        };
        let (config, source) =
            AppConfig::from_file_with_overrides(Some(&config_path), &overrides);

        assert_eq!(source, Some(config_path));
        assert_eq!(config.matching.preset, "permissive");
        assert_eq!(config.output.format, ReportFormat::Json);
    }

    #[test]
    fn test_example_config_parses_to_defaults() {
        let example = generate_example_config();
        assert!(example.starts_with("# name-verify configuration"));
        assert!(example.contains("preset: balanced"));

        let parsed: AppConfig = serde_yaml::from_str(&example).unwrap();
        assert_eq!(parsed, AppConfig::default());
    }
}
