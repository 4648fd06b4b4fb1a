//! Configuration loading and database path resolution

use std::path::PathBuf;

use anyhow::{anyhow, Result};

/// Database path resolution priority order:
/// 1. Command-line argument (highest priority)
/// 2. SONGKIN_DATABASE environment variable
/// 3. TOML config file (`database` key)
/// 4. OS-dependent compiled default (fallback)
pub fn resolve_database_path(cli_arg: Option<&str>) -> PathBuf {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return PathBuf::from(path);
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var("SONGKIN_DATABASE") {
        return PathBuf::from(path);
    }

    // Priority 3: TOML config file
    if let Ok(config_path) = locate_config_file() {
        if let Ok(toml_content) = std::fs::read_to_string(&config_path) {
            if let Ok(config) = toml::from_str::<toml::Value>(&toml_content) {
                if let Some(database) = config.get("database").and_then(|v| v.as_str()) {
                    return PathBuf::from(database);
                }
            }
        }
    }

    // Priority 4: OS-dependent compiled default
    default_database_path()
}

/// Get the configuration file path for the platform, if one exists
fn locate_config_file() -> Result<PathBuf> {
    if let Some(path) = dirs::config_dir().map(|d| d.join("songkin").join("config.toml")) {
        if path.exists() {
            return Ok(path);
        }
    }

    if cfg!(target_os = "linux") {
        let system_config = PathBuf::from("/etc/songkin/config.toml");
        if system_config.exists() {
            return Ok(system_config);
        }
    }

    Err(anyhow!("no config file found"))
}

/// Get OS-dependent default database path
fn default_database_path() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("songkin").join("songs.db"))
        .unwrap_or_else(|| PathBuf::from("./songs.db"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    // Env-var tests are serialized to avoid races on SONGKIN_DATABASE.

    #[test]
    #[serial]
    fn test_cli_argument_has_highest_priority() {
        std::env::set_var("SONGKIN_DATABASE", "/tmp/songkin-env/songs.db");
        let resolved = resolve_database_path(Some("/tmp/songkin-cli/songs.db"));
        assert_eq!(resolved, PathBuf::from("/tmp/songkin-cli/songs.db"));
        std::env::remove_var("SONGKIN_DATABASE");
    }

    #[test]
    #[serial]
    fn test_env_var_beats_default() {
        std::env::set_var("SONGKIN_DATABASE", "/tmp/songkin-env/songs.db");
        let resolved = resolve_database_path(None);
        assert_eq!(resolved, PathBuf::from("/tmp/songkin-env/songs.db"));
        std::env::remove_var("SONGKIN_DATABASE");
    }

    #[test]
    #[serial]
    #[cfg(target_os = "linux")]
    fn test_config_file_beats_default() {
        // dirs::config_dir() honors XDG_CONFIG_HOME on Linux, so the
        // config-file tier can be pointed at a scratch directory.
        std::env::remove_var("SONGKIN_DATABASE");
        let dir = tempfile::TempDir::new().unwrap();
        std::env::set_var("XDG_CONFIG_HOME", dir.path());

        let config_dir = dir.path().join("songkin");
        std::fs::create_dir_all(&config_dir).unwrap();
        std::fs::write(
            config_dir.join("config.toml"),
            "database = \"/tmp/songkin-conf/songs.db\"\n",
        )
        .unwrap();

        let resolved = resolve_database_path(None);
        assert_eq!(resolved, PathBuf::from("/tmp/songkin-conf/songs.db"));

        // Cleanup
        std::env::remove_var("XDG_CONFIG_HOME");
    }

    #[test]
    #[serial]
    fn test_default_used_without_overrides() {
        std::env::remove_var("SONGKIN_DATABASE");
        let resolved = resolve_database_path(None);
        assert!(
            resolved.ends_with("songs.db"),
            "default should point at a songs.db, got {:?}",
            resolved
        );
    }
}
