use crate::error::ConfigError;
use std::{env, fmt::Display, str::FromStr};

/// Required value. Unset and empty are treated the same.
pub fn must(key: &str) -> Result<String, ConfigError> {
    opt(key).ok_or_else(|| ConfigError::Missing(key.to_string()))
}

pub fn opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

pub fn parse<T: FromStr>(key: &str, default: T) -> Result<T, ConfigError>
where
    <T as FromStr>::Err: Display,
{
    match opt(key) {
        Some(s) => parse_value(key, &s),
        None => Ok(default),
    }
}

pub fn parse_str<T: FromStr>(key: &str, default: &str) -> Result<T, ConfigError>
where
    <T as FromStr>::Err: Display,
{
    match opt(key) {
        Some(s) => parse_value(key, &s),
        None => default.trim().parse::<T>().map_err(|e| ConfigError::InvalidDefault {
            key: key.to_string(),
            value: default.to_string(),
            reason: e.to_string(),
        }),
    }
}

fn parse_value<T: FromStr>(key: &str, s: &str) -> Result<T, ConfigError>
where
    <T as FromStr>::Err: Display,
{
    s.trim().parse::<T>().map_err(|e| ConfigError::Invalid {
        key: key.to_string(),
        value: s.to_string(),
        reason: e.to_string(),
    })
}
