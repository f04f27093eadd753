use serde::Deserialize;

const CONFIG_FILE: &str = "config/dashboard";
const ENV_PREFIX: &str = "DASHBOARD";

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub demand: DemandSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Verbose logging and uncached responses.
    pub debug: bool,
}

impl ServerSettings {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct DemandSettings {
    pub seed: Option<u64>,
}

/// Defaults, then `config/dashboard.*` if present, then `DASHBOARD__*` environment variables.
pub fn load_settings() -> anyhow::Result<Settings> {
    build_settings(
        config::File::with_name(CONFIG_FILE).required(false),
        environment(),
    )
}

fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

fn build_settings<S>(file: S, env: config::Environment) -> anyhow::Result<Settings>
where
    S: config::Source + Send + Sync + 'static,
{
    let settings = config::Config::builder()
        .set_default("server.host", "127.0.0.1")?
        .set_default("server.port", 8050)?
        .set_default("server.debug", false)?
        .add_source(file)
        .add_source(env)
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn no_file() -> config::File<config::FileSourceString, config::FileFormat> {
        config::File::from_str("", config::FileFormat::Toml)
    }

    fn env_with(vars: &[(&str, &str)]) -> config::Environment {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        environment().source(Some(map))
    }

    #[test]
    fn test_defaults() {
        let settings = build_settings(no_file(), env_with(&[])).unwrap();
        assert_eq!(settings.server.bind_address(), "127.0.0.1:8050");
        assert!(!settings.server.debug);
        assert_eq!(settings.demand.seed, None);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let file = config::File::from_str(
            "[server]\nport = 9000\ndebug = true\n\n[demand]\nseed = 5\n",
            config::FileFormat::Toml,
        );
        let settings = build_settings(file, env_with(&[])).unwrap();
        assert_eq!(settings.server.port, 9000);
        assert!(settings.server.debug);
        assert_eq!(settings.demand.seed, Some(5));
    }

    #[test]
    fn test_environment_overrides_file() {
        let file = config::File::from_str("[server]\ndebug = true\n", config::FileFormat::Toml);
        let env = env_with(&[
            ("DASHBOARD__SERVER__DEBUG", "false"),
            ("DASHBOARD__SERVER__HOST", "0.0.0.0"),
            ("DASHBOARD__DEMAND__SEED", "42"),
        ]);
        let settings = build_settings(file, env).unwrap();
        assert!(!settings.server.debug);
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.demand.seed, Some(42));
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        let env = env_with(&[("DASHBOARD__SERVER__PORT", "not-a-port")]);
        assert!(build_settings(no_file(), env).is_err());
    }
}
