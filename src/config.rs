//! Runtime configuration from environment variables

use crate::runtime::DEFAULT_IDLE_TIMEOUT;
use crate::scheduler::PacingConfig;
use std::fmt::Display;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?} ({reason})")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
    #[error("Typing range is inverted: min {min_ms}ms > max {max_ms}ms")]
    InvertedTypingRange { min_ms: u64, max_ms: u64 },
    #[error("Follow-up probability must be within [0, 1], got {0}")]
    ProbabilityOutOfRange(f64),
}

/// Server address, turn pacing and session lifetime
#[derive(Debug, Clone, PartialEq)]
pub struct AssistantConfig {
    pub bind: IpAddr,
    pub port: u16,
    pub pacing: PacingConfig,
    /// Idle time after which an unwatched session is dropped
    pub session_idle: Duration,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            bind: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8000,
            pacing: PacingConfig::default(),
            session_idle: DEFAULT_IDLE_TIMEOUT,
        }
    }
}

impl AssistantConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys take their defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let typing_min_ms = parse(&lookup, "LUDO_TYPING_MIN_MS", millis(defaults.pacing.typing_min))?;
        let typing_max_ms = parse(&lookup, "LUDO_TYPING_MAX_MS", millis(defaults.pacing.typing_max))?;
        if typing_min_ms > typing_max_ms {
            return Err(ConfigError::InvertedTypingRange {
                min_ms: typing_min_ms,
                max_ms: typing_max_ms,
            });
        }

        let follow_up_probability = parse(
            &lookup,
            "LUDO_FOLLOW_UP_PROBABILITY",
            defaults.pacing.follow_up_probability,
        )?;
        if !(0.0..=1.0).contains(&follow_up_probability) {
            return Err(ConfigError::ProbabilityOutOfRange(follow_up_probability));
        }

        let pacing = PacingConfig {
            typing_min: Duration::from_millis(typing_min_ms),
            typing_max: Duration::from_millis(typing_max_ms),
            greeting_delay: Duration::from_millis(parse(
                &lookup,
                "LUDO_GREETING_DELAY_MS",
                millis(defaults.pacing.greeting_delay),
            )?),
            follow_up_delay: Duration::from_millis(parse(
                &lookup,
                "LUDO_FOLLOW_UP_DELAY_MS",
                millis(defaults.pacing.follow_up_delay),
            )?),
            follow_up_probability,
        };

        let session_idle_secs = parse(&lookup, "LUDO_SESSION_IDLE_SECS", defaults.session_idle.as_secs())?;
        if session_idle_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "LUDO_SESSION_IDLE_SECS",
                value: session_idle_secs.to_string(),
                reason: "must be at least one second".to_string(),
            });
        }

        Ok(Self {
            bind: parse(&lookup, "LUDO_BIND", defaults.bind)?,
            port: parse(&lookup, "LUDO_PORT", defaults.port)?,
            pacing,
            session_idle: Duration::from_secs(session_idle_secs),
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }
}

fn parse<T>(lookup: &impl Fn(&str) -> Option<String>, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            value: raw.clone(),
            reason: e.to_string(),
        }),
    }
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_pairs(pairs: &[(&str, &str)]) -> Result<AssistantConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
        AssistantConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = from_pairs(&[]).unwrap();
        assert_eq!(config, AssistantConfig::default());
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8000");
        assert_eq!(config.pacing.typing_min, Duration::from_millis(1200));
        assert_eq!(config.pacing.typing_max, Duration::from_millis(2500));
        assert_eq!(config.session_idle, Duration::from_secs(1800));
    }

    #[test]
    fn test_overrides() {
        let config = from_pairs(&[
            ("LUDO_PORT", "9090"),
            ("LUDO_BIND", "127.0.0.1"),
            ("LUDO_TYPING_MIN_MS", "10"),
            ("LUDO_TYPING_MAX_MS", " 20 "),
            ("LUDO_FOLLOW_UP_PROBABILITY", "1"),
        ])
        .unwrap();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:9090");
        assert_eq!(config.pacing.typing_max, Duration::from_millis(20));
        assert!((config.pacing.follow_up_probability - 1.0).abs() < f64::EPSILON);
        assert_eq!(config.pacing.greeting_delay, Duration::from_millis(500));
    }

    #[test]
    fn test_invalid_number_names_the_key() {
        let err = from_pairs(&[("LUDO_PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "LUDO_PORT", .. }));
        assert!(err.to_string().contains("eighty"));
    }

    #[test]
    fn test_inverted_typing_range() {
        let err = from_pairs(&[("LUDO_TYPING_MIN_MS", "3000")]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvertedTypingRange {
                min_ms: 3000,
                max_ms: 2500
            }
        );
    }

    #[test]
    fn test_probability_bounds() {
        assert!(matches!(
            from_pairs(&[("LUDO_FOLLOW_UP_PROBABILITY", "1.5")]),
            Err(ConfigError::ProbabilityOutOfRange(_))
        ));
        assert!(matches!(
            from_pairs(&[("LUDO_FOLLOW_UP_PROBABILITY", "NaN")]),
            Err(ConfigError::ProbabilityOutOfRange(_))
        ));
    }

    #[test]
    fn test_session_idle_timeout() {
        let config = from_pairs(&[("LUDO_SESSION_IDLE_SECS", "90")]).unwrap();
        assert_eq!(config.session_idle, Duration::from_secs(90));

        let err = from_pairs(&[("LUDO_SESSION_IDLE_SECS", "0")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "LUDO_SESSION_IDLE_SECS", .. }));
        assert!(from_pairs(&[("LUDO_SESSION_IDLE_SECS", "-5")]).is_err());
    }
}
