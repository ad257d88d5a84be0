use chrono::{Datelike, Local, NaiveDate};
use serde::Serialize;

pub const MIN_AGE: u8 = 1;
pub const MAX_AGE: u8 = 85;
pub const DEFAULT_LIFE_EXPECTANCY: u8 = 80;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YearProgress {
    pub year: i32,
    pub day_of_year: u32,
    pub days_in_year: u32,
    pub percent: f64,
    pub days_left: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LifeProgress {
    pub age: u8,
    pub life_expectancy: u8,
    pub years_lived: u8,
    pub years_remaining: u8,
    pub percent: f64,
}

pub fn year_progress() -> YearProgress {
    year_progress_at(Local::now().date_naive())
}

pub fn year_progress_at(today: NaiveDate) -> YearProgress {
    let day_of_year = today.ordinal();
    let days_in_year = if today.leap_year() { 366 } else { 365 };

    YearProgress {
        year: today.year(),
        day_of_year,
        days_in_year,
        percent: f64::from(day_of_year) / f64::from(days_in_year) * 100.0,
        days_left: days_in_year - day_of_year,
    }
}

/// Life lease math. `percent` is allowed past 100 for ages beyond the
/// expectancy; `years_remaining` bottoms out at zero.
pub fn life_progress(age: u8, life_expectancy: u8) -> LifeProgress {
    let denom = if life_expectancy == 0 { 1.0 } else { f64::from(life_expectancy) };

    LifeProgress {
        age,
        life_expectancy,
        years_lived: age,
        years_remaining: life_expectancy.saturating_sub(age),
        percent: f64::from(age) / denom * 100.0,
    }
}

pub fn clamp_age(age: u8) -> u8 {
    age.clamp(MIN_AGE, MAX_AGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_progress_counts_today() {
        let today = NaiveDate::from_ymd_opt(2025, 12, 25).unwrap();
        let progress = year_progress_at(today);
        assert_eq!(progress.year, 2025);
        assert_eq!(progress.day_of_year, 359);
        assert_eq!(progress.days_in_year, 365);
        assert_eq!(progress.days_left, 6);
        assert!((progress.percent - 359.0 / 365.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn year_progress_handles_leap_years() {
        let last_day = NaiveDate::from_ymd_opt(2028, 12, 31).unwrap();
        let progress = year_progress_at(last_day);
        assert_eq!(progress.days_in_year, 366);
        assert_eq!(progress.days_left, 0);
        assert!((progress.percent - 100.0).abs() < 1e-9);
    }

    #[test]
    fn life_progress_default_profile() {
        let life = life_progress(22, DEFAULT_LIFE_EXPECTANCY);
        assert_eq!(life.years_lived, 22);
        assert_eq!(life.years_remaining, 58);
        assert!((life.percent - 27.5).abs() < 1e-9);
    }

    #[test]
    fn life_progress_past_expectancy() {
        let life = life_progress(85, 80);
        assert_eq!(life.years_remaining, 0);
        assert!(life.percent > 100.0);
    }

    #[test]
    fn age_is_clamped_to_slider_range() {
        assert_eq!(clamp_age(0), MIN_AGE);
        assert_eq!(clamp_age(40), 40);
        assert_eq!(clamp_age(120), MAX_AGE);
    }
}
