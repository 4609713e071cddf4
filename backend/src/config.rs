use std::net::SocketAddr;
use std::ops::RangeInclusive;
use std::path::PathBuf;
use shared::outcome_script::OutcomeScript;
use shared::rotation::{MAX_REVOLUTIONS, MIN_REVOLUTIONS};
use shared::shared_roulette_game::GameConfig;
use shared::ClientConfig;
use shared::constants::DEFAULT_REDIRECT_URL;
use strum::{Display, EnumString};

// Keeps stake * multiplier and the running balance far from i64 limits
const MAX_STAKE: i64 = 1_000_000;
const MAX_PAYOUT_MULTIPLIER: i64 = 1_000;
const MAX_INITIAL_BALANCE: i64 = 1_000_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum StorageBackend {
    Postgres,
    Memory,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub database_url: Option<String>,
    pub storage: StorageBackend,
    pub static_dir: PathBuf,
    pub client: ClientConfig,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Values that fail to parse fall back
    /// to their defaults with a warning instead of aborting startup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = parse_or_default(&lookup, "BIND_ADDR", || {
            SocketAddr::from(([127, 0, 0, 1], 3000))
        });

        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());
        let default_storage = if database_url.is_some() {
            StorageBackend::Postgres
        } else {
            StorageBackend::Memory
        };
        let mut storage = parse_or_default(&lookup, "ANALYTICS_STORE", || default_storage);
        if storage == StorageBackend::Postgres && database_url.is_none() {
            tracing::warn!("ANALYTICS_STORE=postgres but DATABASE_URL is not set, using memory store");
            storage = StorageBackend::Memory;
        }

        let static_dir = lookup("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(default_static_dir);

        let defaults = GameConfig::default();
        let game = GameConfig {
            stake: parse_in_range(&lookup, "ROULETTE_STAKE", 1..=MAX_STAKE, defaults.stake),
            initial_balance: parse_in_range(
                &lookup,
                "ROULETTE_INITIAL_BALANCE",
                0..=MAX_INITIAL_BALANCE,
                defaults.initial_balance,
            ),
            payout_multiplier: parse_in_range(
                &lookup,
                "ROULETTE_PAYOUT_MULTIPLIER",
                1..=MAX_PAYOUT_MULTIPLIER,
                defaults.payout_multiplier,
            ),
            min_revolutions: parse_in_range(
                &lookup,
                "ROULETTE_MIN_REVOLUTIONS",
                MIN_REVOLUTIONS..=MAX_REVOLUTIONS,
                defaults.min_revolutions,
            ),
        };
        let script = parse_or_default(&lookup, "ROULETTE_SCRIPT", OutcomeScript::default);
        let redirect_url = lookup("REDIRECT_URL")
            .filter(|url| url.starts_with("http"))
            .unwrap_or_else(|| DEFAULT_REDIRECT_URL.to_string());

        Self {
            bind_addr,
            database_url,
            storage,
            static_dir,
            client: ClientConfig { game, script, redirect_url },
        }
    }
}

fn parse_or_default<F, T, D>(lookup: &F, key: &str, default: D) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
    D: FnOnce() -> T,
{
    match lookup(key) {
        Some(raw) => match raw.trim().parse::<T>() {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Ignoring invalid {}={:?}: {}", key, raw, e);
                default()
            }
        },
        None => default(),
    }
}

/// Like `parse_or_default`, but values outside `range` also fall back.
fn parse_in_range<F, T>(lookup: &F, key: &str, range: RangeInclusive<T>, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr + PartialOrd + std::fmt::Display + Copy,
    T::Err: std::fmt::Display,
{
    let value = parse_or_default(lookup, key, || default);
    if range.contains(&value) {
        value
    } else {
        tracing::warn!(
            "Ignoring {}={}: must be between {} and {}",
            key, value, range.start(), range.end()
        );
        default
    }
}

fn default_static_dir() -> PathBuf {
    ["static", "backend/static", "../backend/static"]
        .into_iter()
        .map(PathBuf::from)
        .find(|path| path.exists())
        .unwrap_or_else(|| PathBuf::from("static"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:3000");
        assert_eq!(config.storage, StorageBackend::Memory);
        assert_eq!(config.client.game, GameConfig::default());
        assert_eq!(config.client.script, OutcomeScript::default());
        assert_eq!(config.client.redirect_url, DEFAULT_REDIRECT_URL);
    }

    #[test]
    fn test_database_url_selects_postgres() {
        let config = config_from(&[("DATABASE_URL", "postgres://localhost/roulette")]);
        assert_eq!(config.storage, StorageBackend::Postgres);

        let config = config_from(&[
            ("DATABASE_URL", "postgres://localhost/roulette"),
            ("ANALYTICS_STORE", "Memory"),
        ]);
        assert_eq!(config.storage, StorageBackend::Memory);
    }

    #[test]
    fn test_postgres_without_url_falls_back() {
        let config = config_from(&[("ANALYTICS_STORE", "postgres")]);
        assert_eq!(config.storage, StorageBackend::Memory);
    }

    #[test]
    fn test_out_of_range_game_values_fall_back() {
        let config = config_from(&[
            ("ROULETTE_MIN_REVOLUTIONS", "0"),
            ("ROULETTE_STAKE", "-100"),
            ("ROULETTE_PAYOUT_MULTIPLIER", "9223372036854775807"),
            ("ROULETTE_INITIAL_BALANCE", "-5"),
        ]);
        assert_eq!(config.client.game, GameConfig::default());

        let config = config_from(&[
            ("ROULETTE_MIN_REVOLUTIONS", "12"),
            ("ROULETTE_STAKE", "1000000"),
            ("ROULETTE_PAYOUT_MULTIPLIER", "1"),
        ]);
        assert_eq!(config.client.game.min_revolutions, 12);
        assert_eq!(config.client.game.stake, MAX_STAKE);
        assert_eq!(config.client.game.payout_multiplier, 1);
    }

    #[test]
    fn test_game_overrides() {
        let config = config_from(&[
            ("ROULETTE_STAKE", "50"),
            ("ROULETTE_SCRIPT", "win,lose"),
            ("ROULETTE_INITIAL_BALANCE", "not-a-number"),
            ("REDIRECT_URL", "https://example.com/join"),
        ]);
        assert_eq!(config.client.game.stake, 50);
        assert_eq!(config.client.game.initial_balance, 1000);
        assert_eq!(config.client.script, OutcomeScript::new(vec![true, false]));
        assert_eq!(config.client.redirect_url, "https://example.com/join");
    }
}
