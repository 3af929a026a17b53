use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::env;
use std::net::{IpAddr, SocketAddr};

const DEFAULT_DB_PATH: &str = "data/lotto.db";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_LOG: &str = "info";

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub log_filter: String,
}

pub fn load() -> Result<Config> {
    Config::from_lookup(|key| env::var(key).ok())
}

impl Config {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Config> {
        let database_url = match (lookup("LOTTO_DB_PATH"), lookup("DATABASE_URL")) {
            (Some(path), _) => normalize_database_url("LOTTO_DB_PATH", &path)?,
            (None, Some(url)) => normalize_database_url("DATABASE_URL", &url)?,
            (None, None) => DEFAULT_DB_PATH.to_string(),
        };

        let host = lookup("LOTTO_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let host: IpAddr = host
            .trim()
            .parse()
            .with_context(|| format!("invalid LOTTO_HOST {host:?}"))?;

        let port = match lookup("PORT") {
            Some(port) => port
                .trim()
                .parse::<u16>()
                .with_context(|| format!("invalid PORT {port:?}"))?,
            None => DEFAULT_PORT,
        };

        let log_filter = lookup("LOTTO_LOG")
            .map(|level| level.trim().to_string())
            .filter(|level| !level.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG.to_string());

        Ok(Config {
            database_url,
            bind_addr: SocketAddr::new(host, port),
            log_filter,
        })
    }
}

/// Hosting platforms hand out `sqlite://` style URLs; rusqlite wants a path.
/// Any other `scheme://` names a database this service cannot open.
pub fn normalize_database_url(var: &str, url: &str) -> Result<String> {
    let url = url.trim();
    let path = match url
        .strip_prefix("sqlite://")
        .or_else(|| url.strip_prefix("sqlite:"))
    {
        Some(path) => path,
        None => {
            if let Some((scheme, _)) = url.split_once("://") {
                bail!(
                    "{var} uses unsupported scheme {scheme:?}; expected a sqlite path or sqlite:// URL"
                );
            }
            url
        }
    };

    if path.is_empty() {
        bail!("{var} is empty");
    }
    Ok(path.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use test_case::test_case;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_without_environment() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.database_url, "data/lotto.db");
        assert_eq!(config.bind_addr, "0.0.0.0:8000".parse().unwrap());
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn db_path_wins_over_database_url() {
        let config = config_from(&[
            ("LOTTO_DB_PATH", "/srv/lotto.db"),
            ("DATABASE_URL", "sqlite:///var/other.db"),
        ])
        .unwrap();
        assert_eq!(config.database_url, "/srv/lotto.db");
    }

    #[test]
    fn host_and_port_form_bind_address() {
        let config = config_from(&[("LOTTO_HOST", "127.0.0.1"), ("PORT", "3000")]).unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:3000".parse().unwrap());
    }

    #[test_case(&[("PORT", "eighty")]; "non numeric port")]
    #[test_case(&[("PORT", "70000")]; "port out of range")]
    #[test_case(&[("LOTTO_HOST", "not a host")]; "bad host")]
    fn invalid_bind_settings_fail(vars: &[(&str, &str)]) {
        assert!(config_from(vars).is_err());
    }

    #[test_case("sqlite:///var/data/lotto.db", "/var/data/lotto.db"; "url with slashes")]
    #[test_case("sqlite:lotto.db", "lotto.db"; "short scheme")]
    #[test_case("data/lotto.db", "data/lotto.db"; "plain path")]
    #[test_case(" :memory: ", ":memory:"; "memory with whitespace")]
    fn database_url_is_normalized(url: &str, expected: &str) {
        assert_eq!(normalize_database_url("DATABASE_URL", url).unwrap(), expected);
    }

    #[test_case("postgres://user:pw@db.example:5432/lotto"; "postgres url")]
    #[test_case("postgresql+asyncpg://postgres@localhost/lotto"; "driver qualified url")]
    #[test_case("mysql://root@localhost/lotto"; "mysql url")]
    #[test_case("   "; "blank value")]
    #[test_case("sqlite://"; "scheme without a path")]
    fn foreign_database_urls_are_rejected(url: &str) {
        let err = normalize_database_url("DATABASE_URL", url).unwrap_err();
        assert!(err.to_string().contains("DATABASE_URL"), "{err}");
    }

    #[test]
    fn postgres_database_url_fails_config_load() {
        let err = config_from(&[("DATABASE_URL", "postgres://user:pw@db.example:5432/lotto")])
            .unwrap_err();
        assert!(err.to_string().contains("postgres"), "{err}");
    }

    #[test]
    fn db_path_is_trimmed_like_database_url() {
        let config = config_from(&[("LOTTO_DB_PATH", "  /srv/lotto.db \n")]).unwrap();
        assert_eq!(config.database_url, "/srv/lotto.db");

        let config = config_from(&[("LOTTO_DB_PATH", " sqlite:///srv/lotto.db")]).unwrap();
        assert_eq!(config.database_url, "/srv/lotto.db");
    }

    #[test]
    fn blank_log_filter_falls_back_to_info() {
        let config = config_from(&[("LOTTO_LOG", "  ")]).unwrap();
        assert_eq!(config.log_filter, "info");
    }
}
