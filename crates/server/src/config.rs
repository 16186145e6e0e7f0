use std::{collections::HashMap, fs};

#[derive(Debug)]
pub struct Settings {
    pub bind_addr: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8000".into(),
        }
    }
}

pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("server.toml") {
        apply_file_overrides(&mut settings, &raw);
    }

    if let Ok(v) = std::env::var("SERVER_BIND") {
        settings.bind_addr = v;
    }
    if let Ok(v) = std::env::var("APP__BIND_ADDR") {
        settings.bind_addr = v;
    }

    settings
}

fn apply_file_overrides(settings: &mut Settings, raw: &str) {
    if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(raw) {
        if let Some(v) = file_cfg.get("bind_addr") {
            settings.bind_addr = v.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_bind_to_local_port_8000() {
        assert_eq!(Settings::default().bind_addr, "127.0.0.1:8000");
    }

    #[test]
    fn file_override_replaces_bind_addr() {
        let mut settings = Settings::default();

        apply_file_overrides(&mut settings, "bind_addr = \"0.0.0.0:9000\"\n");

        assert_eq!(settings.bind_addr, "0.0.0.0:9000");
    }

    #[test]
    fn unknown_keys_and_broken_toml_are_ignored() {
        let mut settings = Settings::default();

        apply_file_overrides(&mut settings, "color = \"blue\"\n");
        apply_file_overrides(&mut settings, "not toml at all [");

        assert_eq!(settings.bind_addr, "127.0.0.1:8000");
    }
}
