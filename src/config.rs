use crate::models::MONTHS;
use crate::progress::{clamp_age, DEFAULT_LIFE_EXPECTANCY};
use std::env;
use std::str::FromStr;
use tracing::warn;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_AGE: u8 = 22;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub life_expectancy: u8,
    pub default_age: u8,
    /// Periods shown on the goal board, in display order.
    pub timeline: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            life_expectancy: DEFAULT_LIFE_EXPECTANCY,
            default_age: DEFAULT_AGE,
            timeline: default_timeline(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let timeline = match lookup("VIBE_TIMELINE") {
            Some(raw) => parse_timeline(&raw).unwrap_or_else(|| {
                warn!("VIBE_TIMELINE has no periods, using months");
                defaults.timeline.clone()
            }),
            None => defaults.timeline.clone(),
        };
        let life_expectancy = parse_or(&lookup, "VIBE_LIFE_EXPECTANCY", defaults.life_expectancy);

        Self {
            port: parse_or(&lookup, "PORT", defaults.port),
            life_expectancy: if life_expectancy == 0 {
                warn!("VIBE_LIFE_EXPECTANCY must be positive, using default");
                defaults.life_expectancy
            } else {
                life_expectancy
            },
            default_age: clamp_age(parse_or(&lookup, "VIBE_DEFAULT_AGE", defaults.default_age)),
            timeline,
        }
    }
}

fn parse_or<T: FromStr + Copy>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    match lookup(key) {
        Some(raw) => raw.trim().parse::<T>().unwrap_or_else(|_| {
            warn!("invalid {key} value {raw:?}, using default");
            default
        }),
        None => default,
    }
}

fn parse_timeline(raw: &str) -> Option<Vec<String>> {
    let periods: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|period| !period.is_empty())
        .map(str::to_string)
        .collect();
    (!periods.is_empty()).then_some(periods)
}

fn default_timeline() -> Vec<String> {
    MONTHS.iter().map(|month| month.to_string()).collect()
}
