//! Configuration loading from the platform config directory.

use std::fs;
use std::path::Path;

use bitbi_core::RainConfig;
use color_eyre::eyre::WrapErr;
use directories::ProjectDirs;

/// Load `config.toml` from the platform config directory.
///
/// A missing file (or an unresolvable config directory) yields the
/// defaults; a file that fails to parse or validate aborts startup.
pub fn load() -> color_eyre::Result<RainConfig> {
    let Some(dirs) = ProjectDirs::from("", "", "bitbi") else {
        return Ok(RainConfig::default());
    };
    let path = dirs.config_dir().join("config.toml");
    if !path.exists() {
        return Ok(RainConfig::default());
    }
    load_from(&path)
}

fn load_from(path: &Path) -> color_eyre::Result<RainConfig> {
    let raw = fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read config at {}", path.display()))?;
    let config: RainConfig = toml::from_str(&raw)
        .wrap_err_with(|| format!("failed to parse config at {}", path.display()))?;
    config
        .validate()
        .wrap_err_with(|| format!("invalid config at {}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicU32, Ordering};

    use super::*;

    /// A config file in the temp directory, removed on drop.
    struct TempConfig(PathBuf);

    impl Drop for TempConfig {
        fn drop(&mut self) {
            let _ = fs::remove_file(&self.0);
        }
    }

    fn write_config(contents: &str) -> TempConfig {
        static COUNTER: AtomicU32 = AtomicU32::new(0);
        let id = COUNTER.fetch_add(1, Ordering::Relaxed);
        let path = std::env::temp_dir().join(format!(
            "bitbi-config-test-{}-{id}.toml",
            std::process::id()
        ));
        fs::write(&path, contents).unwrap();
        TempConfig(path)
    }

    #[test]
    fn full_config_parses() {
        let file = write_config(
            r#"
            glyph_size = 16
            charset = "01"
            fade_alpha = 0.1
            reset_probability = 0.05
            accent = { r = 0, g = 255, b = 0 }
            background = { r = 0, g = 0, b = 0 }
            "#,
        );
        let config = load_from(&file.0).unwrap();
        assert_eq!(config.glyph_size, 16);
        assert_eq!(config.charset, "01");
        assert_eq!(config.fade_alpha, 0.1);
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let file = write_config("glyph_size = 10");
        let config = load_from(&file.0).unwrap();
        assert_eq!(config.glyph_size, 10);
        assert_eq!(config.reset_probability, 0.025);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let file = write_config("charset = \"\"");
        assert!(load_from(&file.0).is_err());
    }

    #[test]
    fn malformed_toml_is_rejected() {
        let file = write_config("glyph_size = \"not a number\"");
        assert!(load_from(&file.0).is_err());
    }
}
