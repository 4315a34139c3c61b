use crate::rating::collation::DEFAULT_LOCALE;

const DEFAULT_DATABASE_PATH: &str = "league_ranking.db";

/// Constants of the rating pipeline. `Default` carries the league's
/// published values; tests and tools may tweak individual fields.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingSettings {
    /// Absolute bound applied to a single result's saldo
    pub saldo_cap: f64,
    /// Share of the (capped) saldo that counts next to points
    pub saldo_factor: f64,
    /// Field size that earns a tournament full confidence weight
    pub reference_field_size: f64,
    /// Absolute bound on a z-score before it is scaled
    pub z_score_cap: f64,
    pub z_score_scale: f64,
    pub experience_slope: f64,
    pub experience_cap: f64,
    /// Pseudo-count pulling a single-result player toward the baseline
    pub shrinkage_strength: f64,
    /// BCP 47 tag used for the name tie-break and name clash checks
    pub collation_locale: String,
}

impl Default for RatingSettings {
    fn default() -> Self {
        Self {
            saldo_cap: 25.0,
            saldo_factor: 0.1,
            reference_field_size: 16.0,
            z_score_cap: 2.5,
            z_score_scale: 2.5,
            experience_slope: 0.05,
            experience_cap: 0.15,
            shrinkage_strength: 2.0,
            collation_locale: DEFAULT_LOCALE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrendSettings {
    /// How many of the most recent timeline points form the trend
    pub trend_limit: usize,
    /// Trailing window of the moving average
    pub window: usize,
}

impl Default for TrendSettings {
    fn default() -> Self {
        Self {
            trend_limit: 5,
            window: 3,
        }
    }
}

impl TrendSettings {
    /// Overrides the defaults with whatever the caller supplied.
    pub fn with_overrides(trend_limit: Option<usize>, window: Option<usize>) -> Self {
        let defaults = Self::default();
        Self {
            trend_limit: trend_limit.unwrap_or(defaults.trend_limit),
            window: window.unwrap_or(defaults.window),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub rating: RatingSettings,
    pub trend: TrendSettings,
    pub database_path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            rating: RatingSettings {
                collation_locale: resolve_locale(),
                ..RatingSettings::default()
            },
            trend: TrendSettings::default(),
            database_path: resolve_database_path(),
        }
    }
}

fn resolve_database_path() -> String {
    std::env::var("DATABASE_PATH").unwrap_or_else(|_| DEFAULT_DATABASE_PATH.to_string())
}

fn resolve_locale() -> String {
    std::env::var("LEAGUE_LOCALE").unwrap_or_else(|_| DEFAULT_LOCALE.to_string())
}
