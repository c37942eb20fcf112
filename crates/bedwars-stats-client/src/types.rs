//! Bedwars stat types
//!
//! Counters come back from the API per sub-mode (solo, doubles, 3v3v3v3,
//! 4v4v4v4). The overlay only shows the sums across those four modes.

use crate::format::group_thousands;
use serde_json::{Map, Value};
use std::fmt;

/// API prefixes of the four sub-modes whose counters are summed
pub const SUB_MODES: [&str; 4] = ["eight_one", "eight_two", "four_three", "four_four"];

/// A counter that is either known or unavailable ("no ranked history")
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stat {
    Known(u64),
    Unknown,
}

impl Stat {
    pub fn value(self) -> Option<u64> {
        match self {
            Stat::Known(value) => Some(value),
            Stat::Unknown => None,
        }
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stat::Known(value) => f.write_str(&group_thousands(*value)),
            Stat::Unknown => f.write_str("?"),
        }
    }
}

/// A derived ratio rounded to two decimals
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ratio {
    Value(f64),
    Unknown,
}

impl Ratio {
    /// Compute `numerator / denominator`
    ///
    /// A zero denominator yields 0 and an unknown input yields `Unknown`.
    pub fn of(numerator: Stat, denominator: Stat) -> Self {
        match (numerator, denominator) {
            (Stat::Known(_), Stat::Known(0)) => Ratio::Value(0.0),
            (Stat::Known(num), Stat::Known(den)) => {
                Ratio::Value(round_two_decimals(num as f64 / den as f64))
            }
            _ => Ratio::Unknown,
        }
    }

    pub fn value(self) -> Option<f64> {
        match self {
            Ratio::Value(value) => Some(value),
            Ratio::Unknown => None,
        }
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ratio::Value(value) => write!(f, "{:.2}", value),
            Ratio::Unknown => f.write_str("?"),
        }
    }
}

fn round_two_decimals(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Counters summed over `SUB_MODES`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BedwarsTotals {
    pub final_kills: u64,
    pub final_deaths: u64,
    pub wins: u64,
    pub losses: u64,
    pub beds_broken: u64,
}

impl BedwarsTotals {
    /// Reduce the raw `player.stats.Bedwars` object
    ///
    /// Absent counters count as zero.
    pub fn from_raw(stats: &Map<String, Value>) -> Self {
        Self {
            final_kills: sum_counter(stats, "final_kills"),
            final_deaths: sum_counter(stats, "final_deaths"),
            wins: sum_counter(stats, "wins"),
            losses: sum_counter(stats, "losses"),
            beds_broken: sum_counter(stats, "beds_broken"),
        }
    }
}

fn sum_counter(stats: &Map<String, Value>, counter: &str) -> u64 {
    SUB_MODES
        .iter()
        .filter_map(|mode| stats.get(&format!("{mode}_{counter}_bedwars")))
        .filter_map(counter_value)
        .fold(0, u64::saturating_add)
}

/// Counters are integers in practice, but tolerate floats and numeric strings
fn counter_value(value: &Value) -> Option<u64> {
    value
        .as_u64()
        .or_else(|| value.as_f64().map(|f| f.max(0.0) as u64))
        .or_else(|| value.as_str().and_then(|s| s.trim().parse().ok()))
}

/// Display-ready statistics for one player
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerStats {
    pub name: String,
    pub final_kills: Stat,
    pub final_deaths: Stat,
    pub fkdr: Ratio,
    pub wins: Stat,
    pub losses: Stat,
    pub wlr: Ratio,
    pub beds_broken: Stat,
}

impl PlayerStats {
    pub fn from_totals(name: impl Into<String>, totals: &BedwarsTotals) -> Self {
        let final_kills = Stat::Known(totals.final_kills);
        let final_deaths = Stat::Known(totals.final_deaths);
        let wins = Stat::Known(totals.wins);
        let losses = Stat::Known(totals.losses);

        Self {
            name: name.into(),
            final_kills,
            final_deaths,
            fkdr: Ratio::of(final_kills, final_deaths),
            wins,
            losses,
            wlr: Ratio::of(wins, losses),
            beds_broken: Stat::Known(totals.beds_broken),
        }
    }

    /// Stats for a player the API has no ranked history for
    pub fn unknown(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            final_kills: Stat::Unknown,
            final_deaths: Stat::Unknown,
            fkdr: Ratio::Unknown,
            wins: Stat::Unknown,
            losses: Stat::Unknown,
            wlr: Ratio::Unknown,
            beds_broken: Stat::Unknown,
        }
    }

    /// The seven table cells in display order:
    /// name, final kills, final deaths, FKDR, wins, W/L, beds broken
    pub fn display_cells(&self) -> [String; 7] {
        [
            self.name.clone(),
            self.final_kills.to_string(),
            self.final_deaths.to_string(),
            self.fkdr.to_string(),
            self.wins.to_string(),
            self.wlr.to_string(),
            self.beds_broken.to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_ratio_rounds_to_two_decimals() {
        assert_eq!(Ratio::of(Stat::Known(10), Stat::Known(7)), Ratio::Value(1.43));
        assert_eq!(Ratio::of(Stat::Known(1), Stat::Known(3)), Ratio::Value(0.33));
    }

    #[test]
    fn test_ratio_zero_denominator_is_zero() {
        assert_eq!(Ratio::of(Stat::Known(25), Stat::Known(0)), Ratio::Value(0.0));
    }

    #[test]
    fn test_ratio_unknown_input() {
        assert_eq!(Ratio::of(Stat::Unknown, Stat::Known(3)), Ratio::Unknown);
        assert_eq!(Ratio::of(Stat::Known(3), Stat::Unknown), Ratio::Unknown);
    }

    #[test]
    fn test_display() {
        assert_eq!(Stat::Known(12_345).to_string(), "12,345");
        assert_eq!(Stat::Unknown.to_string(), "?");
        assert_eq!(Ratio::Value(1.43).to_string(), "1.43");
        assert_eq!(Ratio::Value(0.0).to_string(), "0.00");
        assert_eq!(Ratio::Unknown.to_string(), "?");
    }

    #[test]
    fn test_totals_sum_sub_modes() {
        let raw = json!({
            "eight_one_final_kills_bedwars": 10,
            "eight_two_final_kills_bedwars": 20,
            "four_three_final_kills_bedwars": 30,
            "four_four_final_kills_bedwars": 40,
            "eight_one_final_deaths_bedwars": 5,
            "four_four_wins_bedwars": 7,
            "eight_two_losses_bedwars": 3.0,
            "four_three_beds_broken_bedwars": "12",
            // Not one of the four summed modes
            "two_four_final_kills_bedwars": 1000,
            "final_kills_bedwars": 5000
        });
        let totals = BedwarsTotals::from_raw(raw.as_object().unwrap());

        assert_eq!(
            totals,
            BedwarsTotals {
                final_kills: 100,
                final_deaths: 5,
                wins: 7,
                losses: 3,
                beds_broken: 12,
            }
        );
    }

    #[test]
    fn test_totals_saturate_on_huge_counters() {
        let raw = json!({
            "eight_one_wins_bedwars": 1e30,
            "eight_two_wins_bedwars": u64::MAX,
            "four_four_wins_bedwars": 1,
        });
        let totals = BedwarsTotals::from_raw(raw.as_object().unwrap());
        assert_eq!(totals.wins, u64::MAX);
    }

    #[test]
    fn test_totals_absent_counters_are_zero() {
        let totals = BedwarsTotals::from_raw(&Map::new());
        assert_eq!(totals, BedwarsTotals::default());
    }

    #[test]
    fn test_player_stats_from_totals() {
        let totals = BedwarsTotals {
            final_kills: 1_500,
            final_deaths: 1_000,
            wins: 40,
            losses: 0,
            beds_broken: 2_048,
        };
        let stats = PlayerStats::from_totals("Notch", &totals);

        assert_eq!(stats.fkdr, Ratio::Value(1.5));
        assert_eq!(stats.wlr, Ratio::Value(0.0));
        assert_eq!(
            stats.display_cells(),
            [
                "Notch".to_string(),
                "1,500".to_string(),
                "1,000".to_string(),
                "1.50".to_string(),
                "40".to_string(),
                "0.00".to_string(),
                "2,048".to_string(),
            ]
        );
    }

    #[test]
    fn test_unknown_stats_display_question_marks() {
        let cells = PlayerStats::unknown("ghost").display_cells();
        assert_eq!(cells[0], "ghost");
        assert!(cells[1..].iter().all(|cell| cell == "?"));
    }
}
