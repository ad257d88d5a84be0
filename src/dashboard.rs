use crate::court::ResolutionCourt;
use crate::models::{CompletionRatio, Mode, PeriodGroup, Settings, MONTHS};
use crate::progress::{life_progress, year_progress_at, LifeProgress, YearProgress};
use chrono::{Local, NaiveDate};
use serde::Serialize;

const PRO_FORECAST: [u32; 12] = [30, 40, 45, 50, 55, 60, 55, 60, 70, 80, 90, 100];
const SILLY_FORECAST: [u32; 12] = [10, 90, 20, 100, 5, 50, 80, 10, 100, 20, 60, 99];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub background: &'static str,
    pub primary: &'static str,
}

impl Theme {
    pub fn for_mode(mode: Mode) -> Self {
        match mode {
            Mode::Pro => Self {
                background: "#F8FAFC",
                primary: "#1E3A8A",
            },
            Mode::Silly => Self {
                background: "#FFF5F5",
                primary: "#FF4B4B",
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricCard {
    pub label: String,
    pub value: String,
    pub delta: String,
    pub inverse: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastPoint {
    pub month: &'static str,
    pub intensity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub settings: Settings,
    pub theme: Theme,
    pub title: &'static str,
    pub year: YearProgress,
    pub year_caption: String,
    pub life: LifeProgress,
    pub metrics: Vec<MetricCard>,
    pub forecast: Vec<ForecastPoint>,
    pub completion: CompletionRatio,
    pub completion_percent: f64,
    pub goals: Vec<PeriodGroup>,
}

pub fn build_dashboard(
    settings: Settings,
    life_expectancy: u8,
    court: &ResolutionCourt,
    timeline: &[String],
) -> Dashboard {
    build_dashboard_at(Local::now().date_naive(), settings, life_expectancy, court, timeline)
}

pub fn build_dashboard_at(
    today: NaiveDate,
    settings: Settings,
    life_expectancy: u8,
    court: &ResolutionCourt,
    timeline: &[String],
) -> Dashboard {
    let mode = settings.mode;
    let year = year_progress_at(today);
    let life = life_progress(settings.age, life_expectancy);
    let completion = court.completion_ratio();

    Dashboard {
        settings,
        theme: Theme::for_mode(mode),
        title: title(mode),
        year_caption: year_caption(mode, &year),
        year,
        life,
        metrics: metric_cards(mode, &life),
        forecast: forecast(mode),
        completion_percent: completion.percent(),
        completion,
        goals: court.group_by_period(timeline),
    }
}

fn title(mode: Mode) -> &'static str {
    match mode {
        Mode::Pro => "Executive Life-OS: 2026 Strategy",
        Mode::Silly => "VibeCheck 2026: The Holiday Edition",
    }
}

fn year_caption(mode: Mode, year: &YearProgress) -> String {
    match mode {
        Mode::Pro => format!(
            "Q4 Status: {:.1}% Complete. {} days remaining to close annual targets.",
            year.percent, year.days_left
        ),
        Mode::Silly => format!(
            "Warning! The year is {:.1}% gone. Only {} days left to cause chaos!",
            year.percent, year.days_left
        ),
    }
}

fn metric_cards(mode: Mode, life: &LifeProgress) -> Vec<MetricCard> {
    let (fuel, focus) = match mode {
        Mode::Pro => (
            ("Caffeine Intake", "2,400 mg", "+15% vs Avg"),
            ("Deep Work Score", "87 / 100", "High Efficiency"),
        ),
        Mode::Silly => (
            ("Eggnog Level", "4.5 Liters", "Critical Levels"),
            ("Chaos Probability", "99.9%", "Impending Doom"),
        ),
    };

    let card = |(label, value, delta): (&str, &str, &str)| MetricCard {
        label: label.to_string(),
        value: value.to_string(),
        delta: delta.to_string(),
        inverse: false,
    };

    vec![
        card(fuel),
        card(focus),
        MetricCard {
            label: "Life Lease Used".to_string(),
            value: format!("{:.1}%", life.percent),
            delta: format!("{} Years Left", life.years_remaining),
            inverse: true,
        },
    ]
}

fn forecast(mode: Mode) -> Vec<ForecastPoint> {
    let values = if mode.is_pro() { PRO_FORECAST } else { SILLY_FORECAST };
    MONTHS
        .into_iter()
        .zip(values)
        .map(|(month, intensity)| ForecastPoint { month, intensity })
        .collect()
}
