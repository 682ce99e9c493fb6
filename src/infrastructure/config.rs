use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub api: ApiSettings,
    #[serde(default)]
    pub ui: UiSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    pub profile_url: String,
    pub chart_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UiSettings {
    #[serde(default = "default_initial_path")]
    pub initial_path: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            initial_path: default_initial_path(),
        }
    }
}

fn default_initial_path() -> String {
    "/".to_string()
}

pub fn load_app_config() -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/app"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(
                r#"
                [api]
                profile_url = "http://localhost:9000/api/userdata"
                chart_url = "http://localhost:9000/api/chartdata"

                [ui]
                initial_path = "/dashboard"
                "#,
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap();

        let cfg: AppConfig = settings.try_deserialize().unwrap();
        assert_eq!(cfg.api.profile_url, "http://localhost:9000/api/userdata");
        assert_eq!(cfg.ui.initial_path, "/dashboard");
    }

    #[test]
    fn test_initial_path_defaults_to_root() {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(
                r#"
                [api]
                profile_url = "http://localhost:9000/api/userdata"
                chart_url = "http://localhost:9000/api/chartdata"
                "#,
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap();

        let cfg: AppConfig = settings.try_deserialize().unwrap();
        assert_eq!(cfg.ui.initial_path, "/");
    }
}
