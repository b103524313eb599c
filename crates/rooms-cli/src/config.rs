//! Host configuration, read from the environment at startup.

use std::path::PathBuf;

use crate::error::AppError;

/// Settings file used when `ROOMS_SETTINGS_PATH` is unset.
pub const DEFAULT_SETTINGS_PATH: &str = "rooms-settings.json";

/// Portal destination used when `ROOMS_PORTAL_ROOM` is unset.
pub const DEFAULT_PORTAL_ROOM: i64 = 25;

/// Host configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Where the previous session's offset is persisted.
    pub settings_path: PathBuf,
    /// Room the `portal` command jumps to.
    pub portal_room: i64,
    /// Fixed RNG seed for a reproducible offset draw.
    pub rng_seed: Option<u64>,
}

impl Config {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which maps a variable name to
    /// its value.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let settings_path = lookup("ROOMS_SETTINGS_PATH")
            .map_or_else(|| PathBuf::from(DEFAULT_SETTINGS_PATH), PathBuf::from);

        let portal_room = match lookup("ROOMS_PORTAL_ROOM") {
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .ok()
                .filter(|room| *room >= 1)
                .ok_or_else(|| {
                    AppError::Config(format!(
                        "ROOMS_PORTAL_ROOM must be a room number of at least 1, got `{raw}`"
                    ))
                })?,
            None => DEFAULT_PORTAL_ROOM,
        };

        let rng_seed = lookup("ROOMS_RNG_SEED")
            .map(|raw| {
                raw.trim().parse::<u64>().map_err(|e| {
                    AppError::Config(format!("ROOMS_RNG_SEED must be a valid u64: {e}"))
                })
            })
            .transpose()?;

        Ok(Self {
            settings_path,
            portal_room,
            rng_seed,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_from_lookup_uses_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.settings_path, PathBuf::from("rooms-settings.json"));
        assert_eq!(config.portal_room, 25);
        assert_eq!(config.rng_seed, None);
    }

    #[test]
    fn test_from_lookup_reads_all_variables() {
        let config = Config::from_lookup(lookup_from(&[
            ("ROOMS_SETTINGS_PATH", "/tmp/rooms/settings.json"),
            ("ROOMS_PORTAL_ROOM", " 40 "),
            ("ROOMS_RNG_SEED", "1234"),
        ]))
        .unwrap();

        assert_eq!(config.settings_path, PathBuf::from("/tmp/rooms/settings.json"));
        assert_eq!(config.portal_room, 40);
        assert_eq!(config.rng_seed, Some(1234));
    }

    #[test]
    fn test_from_lookup_rejects_portal_below_room_one() {
        for raw in ["0", "-5", "lobby"] {
            let result = Config::from_lookup(lookup_from(&[("ROOMS_PORTAL_ROOM", raw)]));

            match result.unwrap_err() {
                AppError::Config(msg) => assert!(msg.contains("ROOMS_PORTAL_ROOM"), "{msg}"),
                other => panic!("expected Config, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_from_lookup_rejects_invalid_seed() {
        let result = Config::from_lookup(lookup_from(&[("ROOMS_RNG_SEED", "-1")]));

        assert!(matches!(result, Err(AppError::Config(_))));
    }
}
