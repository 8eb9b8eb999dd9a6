use serde::Deserialize;


#[derive(Deserialize, Debug, Default)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults
}

#[derive(Deserialize, Debug, Default)]
pub struct Defaults {
    pub webhook_url: Option<String>,
    pub username: Option<String>,
    pub avatar_url: Option<String>
}

pub fn read_config(config_file: String) -> Result<Config, String> {
    let config_str = match std::fs::read_to_string(config_file) {
        Ok(c) => c,
        Err(e) => return Err(format!("Error reading config: {}", e))
    };

    let config = match toml::from_str(config_str.as_str()) {
        Ok(c) => c,
        Err(e) => return Err(format!("Error parsing config: {}", e))
    };

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_defaults_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[defaults]\nwebhook_url = \"https://discord.com/api/webhooks/1/abc\"\nusername = \"Relay\"\n",
        ).unwrap();

        let config = read_config(path.to_string_lossy().into_owned()).unwrap();
        assert_eq!(
            config.defaults.webhook_url.as_deref(),
            Some("https://discord.com/api/webhooks/1/abc")
        );
        assert_eq!(config.defaults.username.as_deref(), Some("Relay"));
        assert_eq!(config.defaults.avatar_url, None);
    }

    #[test]
    fn empty_file_yields_empty_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "").unwrap();

        let config = read_config(path.to_string_lossy().into_owned()).unwrap();
        assert_eq!(config.defaults.webhook_url, None);
        assert_eq!(config.defaults.username, None);
        assert_eq!(config.defaults.avatar_url, None);
    }

    #[test]
    fn missing_file_is_reported() {
        let err = read_config("./does-not-exist.toml".to_string()).unwrap_err();
        assert!(err.starts_with("Error reading config"));
    }

    #[test]
    fn invalid_toml_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[defaults\nwebhook_url = 1").unwrap();

        let err = read_config(path.to_string_lossy().into_owned()).unwrap_err();
        assert!(err.starts_with("Error parsing config"));
    }
}
