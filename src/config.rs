use anyhow::{bail, Context, Result};
use dotenvy::dotenv;
use std::env;

pub const DEFAULT_POOL_MAX_SIZE: usize = 10;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub pool_max_size: usize,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            pool_max_size: parse_pool_max_size(env::var("DATABASE_POOL_MAX_SIZE").ok())?,
        })
    }
}

fn parse_pool_max_size(raw: Option<String>) -> Result<usize> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_POOL_MAX_SIZE);
    };
    let size: usize = raw
        .trim()
        .parse()
        .context("DATABASE_POOL_MAX_SIZE must be a valid number")?;
    if size == 0 {
        bail!("DATABASE_POOL_MAX_SIZE must be greater than zero");
    }
    Ok(size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, DEFAULT_POOL_MAX_SIZE)]
    #[case(Some("4"), 4)]
    #[case(Some(" 16 "), 16)]
    fn test_pool_max_size_should_parse(#[case] raw: Option<&str>, #[case] expected: usize) {
        let size = parse_pool_max_size(raw.map(str::to_string)).unwrap();
        assert_eq!(size, expected);
    }

    #[rstest]
    #[case("zero")]
    #[case("-1")]
    #[case("0")]
    fn test_pool_max_size_should_fail(#[case] raw: &str) {
        assert!(parse_pool_max_size(Some(raw.to_string())).is_err());
    }
}
