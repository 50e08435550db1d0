use log::debug;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// JSON file holding the repo -> local path index
    #[serde(deserialize_with = "deserialize_path")]
    pub index_file: PathBuf,
    pub git_program: String,
    pub python_program: String,
    /// Remote URLs are built as `{remote_base}/{repo}.git`
    pub remote_base: String,
    #[serde(deserialize_with = "deserialize_optional_path")]
    pub log_file: Option<PathBuf>,
}

fn deserialize_path<'de, D>(deserializer: D) -> Result<PathBuf, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(expand_tilde(&s))
}

fn deserialize_optional_path<'de, D>(deserializer: D) -> Result<Option<PathBuf>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = Option::<String>::deserialize(deserializer)?;
    Ok(s.map(|s| expand_tilde(&s)))
}

fn home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        home_dir().join(stripped)
    } else if path == "~" {
        home_dir()
    } else {
        PathBuf::from(path)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            index_file: home_dir().join(".quickclone_index.json"),
            git_program: "git".to_string(),
            python_program: "python3".to_string(),
            remote_base: "https://github.com".to_string(),
            log_file: None,
        }
    }
}

impl Config {
    pub fn load() -> Self {
        let config_path = dirs::config_dir().map(|p| p.join("quickclone").join("config.yaml"));

        if let Some(ref path) = config_path
            && path.exists()
            && let Ok(contents) = std::fs::read_to_string(path)
            && let Ok(config) = serde_yml::from_str::<Config>(&contents)
        {
            debug!("config: loaded from {}", path.display());
            return config;
        }

        debug!("config: using defaults (no config file found at {:?})", config_path);
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_tilde_home() {
        let home = dirs::home_dir().unwrap();
        assert_eq!(expand_tilde("~"), home);
    }

    #[test]
    fn test_expand_tilde_subpath() {
        let home = dirs::home_dir().unwrap();
        assert_eq!(expand_tilde("~/foo/bar"), home.join("foo").join("bar"));
    }

    #[test]
    fn test_expand_tilde_no_tilde() {
        assert_eq!(expand_tilde("/absolute/path"), PathBuf::from("/absolute/path"));
        assert_eq!(expand_tilde("relative/path"), PathBuf::from("relative/path"));
    }

    #[test]
    fn test_config_default_values() {
        let config = Config::default();
        let home = dirs::home_dir().unwrap();

        assert_eq!(config.index_file, home.join(".quickclone_index.json"));
        assert_eq!(config.git_program, "git");
        assert_eq!(config.python_program, "python3");
        assert_eq!(config.remote_base, "https://github.com");
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_config_yaml_partial() {
        let yaml = r#"
index_file: ~/projects/index.json
git_program: /usr/local/bin/git
"#;
        let config: Config = serde_yml::from_str(yaml).unwrap();
        let home = dirs::home_dir().unwrap();

        assert_eq!(config.index_file, home.join("projects").join("index.json"));
        assert_eq!(config.git_program, "/usr/local/bin/git");
        // unspecified fields fall back to defaults
        assert_eq!(config.python_program, "python3");
        assert_eq!(config.remote_base, "https://github.com");
    }

    #[test]
    fn test_config_yaml_log_file() {
        let yaml = "log_file: /var/tmp/quickclone.log\n";
        let config: Config = serde_yml::from_str(yaml).unwrap();
        assert_eq!(config.log_file, Some(PathBuf::from("/var/tmp/quickclone.log")));
    }
}
