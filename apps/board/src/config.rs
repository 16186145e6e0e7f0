use std::{collections::HashMap, fs};

#[derive(Debug)]
pub struct Settings {
    pub bind_addr: String,
    pub service_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8080".into(),
            service_url: "http://127.0.0.1:8000".into(),
        }
    }
}

pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("board.toml") {
        apply_file_overrides(&mut settings, &raw);
    }

    if let Ok(v) = std::env::var("BOARD_BIND") {
        settings.bind_addr = v;
    }
    if let Ok(v) = std::env::var("APP__BIND_ADDR") {
        settings.bind_addr = v;
    }

    if let Ok(v) = std::env::var("ACTIVITY_SERVICE_URL") {
        settings.service_url = v;
    }
    if let Ok(v) = std::env::var("APP__SERVICE_URL") {
        settings.service_url = v;
    }

    settings
}

fn apply_file_overrides(settings: &mut Settings, raw: &str) {
    if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(raw) {
        if let Some(v) = file_cfg.get("bind_addr") {
            settings.bind_addr = v.clone();
        }
        if let Some(v) = file_cfg.get("service_url") {
            settings.service_url = v.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_service() {
        let settings = Settings::default();
        assert_eq!(settings.bind_addr, "127.0.0.1:8080");
        assert_eq!(settings.service_url, "http://127.0.0.1:8000");
    }

    #[test]
    fn file_overrides_replace_both_addresses() {
        let mut settings = Settings::default();

        apply_file_overrides(
            &mut settings,
            "bind_addr = \"0.0.0.0:9090\"\nservice_url = \"http://activities:8000\"\n",
        );

        assert_eq!(settings.bind_addr, "0.0.0.0:9090");
        assert_eq!(settings.service_url, "http://activities:8000");
    }

    #[test]
    fn broken_toml_keeps_defaults() {
        let mut settings = Settings::default();

        apply_file_overrides(&mut settings, "][ nope");

        assert_eq!(settings.bind_addr, "127.0.0.1:8080");
    }
}
