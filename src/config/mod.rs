//! Configuration management
//!
//! Shell settings are shared with the web UI. The bundle server's own
//! configuration is only compiled with the `server` feature.

use crate::nav::NavBreakpoints;

/// Signed-in user shown in the menubar.
#[derive(Clone, Debug, PartialEq)]
pub struct UserProfile {
    pub first_name: String,
    pub last_name: String,
    /// Avatar URL; the bundled avatar is used when absent.
    pub image_url: Option<String>,
    pub contact_count: u32,
}

impl UserProfile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            image_url: None,
            contact_count: 5,
        }
    }
}

/// Settings for the navigation shell.
#[derive(Clone, Debug, PartialEq)]
pub struct ShellSettings {
    pub breakpoints: NavBreakpoints,
    pub user: UserProfile,
    /// Unread conversations badge on the Inbox entry.
    pub unread_count: Option<u32>,
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            breakpoints: NavBreakpoints::default(),
            user: UserProfile::default(),
            unread_count: Some(10),
        }
    }
}

#[cfg(feature = "server")]
pub use serve::*;

#[cfg(feature = "server")]
mod serve {
    use anyhow::Result;
    use serde::Deserialize;
    use std::path::PathBuf;

    /// Config file name (without extension) looked up in the config directory.
    const CONFIG_FILE_STEM: &str = "keaz-dashboard";

    #[derive(Debug, Deserialize)]
    pub struct ServeConfig {
        #[serde(default = "default_port")]
        pub port: u16,

        /// Directory holding the compiled web bundle, used when the bundle
        /// was not embedded at build time.
        #[serde(default = "default_dist_dir")]
        pub dist_dir: PathBuf,
    }

    fn default_port() -> u16 {
        8080
    }

    fn default_dist_dir() -> PathBuf {
        PathBuf::from("dist")
    }

    /// Get config directory (KEAZ_CONFIG_DIR or platform default)
    pub fn get_config_dir() -> PathBuf {
        if let Ok(dir) = std::env::var("KEAZ_CONFIG_DIR") {
            return PathBuf::from(dir);
        }

        #[cfg(target_os = "macos")]
        {
            if let Ok(home) = std::env::var("HOME") {
                return PathBuf::from(home).join("Library/Application Support/keaz-dashboard");
            }
        }

        #[cfg(target_os = "linux")]
        {
            if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
                return PathBuf::from(xdg).join("keaz-dashboard");
            }
            if let Ok(home) = std::env::var("HOME") {
                return PathBuf::from(home).join(".config/keaz-dashboard");
            }
        }

        #[cfg(target_os = "windows")]
        {
            if let Ok(appdata) = std::env::var("APPDATA") {
                return PathBuf::from(appdata).join("keaz-dashboard");
            }
        }

        // Fallback to current directory
        PathBuf::from(".")
    }

    pub fn load_config() -> Result<ServeConfig> {
        let config_dir = get_config_dir();

        let mut builder = ::config::Config::builder()
            .set_default("port", default_port() as i64)?
            .set_default("dist_dir", "dist")?
            // Load from config file if it exists
            .add_source(
                ::config::File::with_name(&config_dir.join(CONFIG_FILE_STEM).to_string_lossy())
                    .required(false),
            )
            // Override with environment variables (KEAZ_PORT, KEAZ_DIST_DIR)
            .add_source(::config::Environment::with_prefix("KEAZ").try_parsing(true));

        // Explicit precedence: KEAZ_PORT > PORT > config > default
        if let Ok(port) = std::env::var("KEAZ_PORT") {
            if let Ok(port_num) = port.parse::<u16>() {
                builder = builder.set_override("port", port_num as i64)?;
            }
        } else if let Ok(port) = std::env::var("PORT") {
            // Container platforms set PORT
            if let Ok(port_num) = port.parse::<u16>() {
                builder = builder.set_override("port", port_num as i64)?;
            }
        }

        let config = builder.build()?;

        Ok(config.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_shell_settings() {
        let settings = ShellSettings::default();
        assert_eq!(settings.user.full_name(), "John Doe");
        assert_eq!(settings.user.contact_count, 5);
        assert_eq!(settings.unread_count, Some(10));
        assert_eq!(settings.breakpoints.collapse, 800.0);
        assert_eq!(settings.breakpoints.label, 1200.0);
    }

    #[cfg(feature = "server")]
    mod serve_config {
        use super::super::*;
        use serial_test::serial;
        use std::env;

        fn clear_env() {
            for key in ["KEAZ_PORT", "PORT", "KEAZ_DIST_DIR", "KEAZ_CONFIG_DIR"] {
                env::remove_var(key);
            }
        }

        #[test]
        #[serial]
        fn test_defaults_without_file() {
            clear_env();
            let dir = tempfile::tempdir().expect("tempdir");
            env::set_var("KEAZ_CONFIG_DIR", dir.path());

            let config = load_config().expect("config should load");
            clear_env();

            assert_eq!(config.port, 8080);
            assert_eq!(config.dist_dir, std::path::PathBuf::from("dist"));
        }

        #[test]
        #[serial]
        fn test_config_file_is_read() {
            clear_env();
            let dir = tempfile::tempdir().expect("tempdir");
            std::fs::write(
                dir.path().join("keaz-dashboard.toml"),
                "port = 9100\ndist_dir = \"/srv/keaz\"\n",
            )
            .expect("write config file");
            env::set_var("KEAZ_CONFIG_DIR", dir.path());

            let config = load_config().expect("config should load");
            clear_env();

            assert_eq!(config.port, 9100);
            assert_eq!(config.dist_dir, std::path::PathBuf::from("/srv/keaz"));
        }

        #[test]
        #[serial]
        fn test_port_env_precedence() {
            clear_env();
            let dir = tempfile::tempdir().expect("tempdir");
            std::fs::write(dir.path().join("keaz-dashboard.toml"), "port = 9100\n")
                .expect("write config file");
            env::set_var("KEAZ_CONFIG_DIR", dir.path());
            env::set_var("PORT", "7000");

            let legacy = load_config().expect("config should load");
            assert_eq!(legacy.port, 7000);

            env::set_var("KEAZ_PORT", "7001");
            let explicit = load_config().expect("config should load");
            clear_env();

            assert_eq!(explicit.port, 7001);
        }
    }
}
