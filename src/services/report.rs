use std::fmt::Write as _;

use anyhow::Result;
use colored::Colorize;

use super::league::{LeagueService, PlayerTimeline};
use crate::config::{AppConfig, TrendSettings};
use crate::database;
use crate::rating::RankingEntry;

/// Terminal rendering of rankings and timelines
pub struct ReportService {
    league: LeagueService,
}

impl ReportService {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let pool = database::create_pool(&config.database_path)?;
        Ok(Self {
            league: LeagueService::new(pool, config.rating.clone()),
        })
    }

    pub fn print_ranking(&self, limit: Option<usize>) -> Result<()> {
        let ranking = self.league.ranking()?;
        print!("{}", format_ranking(&ranking, limit));
        Ok(())
    }

    pub fn print_timeline(&self, player_id: &str, trend: &TrendSettings) -> Result<()> {
        match self.league.player_timeline(player_id, trend)? {
            Some(timeline) => print!("{}", format_timeline(&timeline)),
            None => anyhow::bail!("Unknown player: {}", player_id),
        }
        Ok(())
    }
}

pub fn format_ranking(ranking: &[RankingEntry], limit: Option<usize>) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>4}  {:<28} {:>5} {:>9} {:>8} {:>9}",
        "#", "Player", "Plays", "Average", "Saldo", "Rating"
    );

    let shown = limit.unwrap_or(ranking.len()).min(ranking.len());
    for (idx, entry) in ranking.iter().take(shown).enumerate() {
        let rank = idx + 1;
        let line = format!(
            "{:>4}  {:<28} {:>5} {:>9.2} {:>8} {:>9.2}",
            rank,
            truncate(&entry.name, 28),
            entry.participations,
            entry.average,
            format_saldo(entry.saldo_total_raw),
            entry.rating
        );
        let _ = writeln!(out, "{}", highlight_podium(rank, line));
    }

    if shown < ranking.len() {
        let _ = writeln!(out, "{}", format!("... {} more", ranking.len() - shown).dimmed());
    }
    out
}

pub fn format_timeline(timeline: &PlayerTimeline) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", timeline.player.name.bold());

    for point in &timeline.points {
        let _ = writeln!(
            out,
            "  {}  {:<28} {:>7.1} {:>6} {:>8.2} {:>9.2}",
            point.date,
            truncate(&point.tournament_name, 28),
            point.points,
            format_saldo(point.saldo),
            point.tournament_score,
            point.rating
        );
    }

    let trend = &timeline.trend;
    if !trend.points.is_empty() {
        let _ = writeln!(
            out,
            "{}",
            format!("Trend (last {}, window {})", trend.trend_limit, trend.window).bold()
        );
        for point in &trend.points {
            let _ = writeln!(
                out,
                "  {}  rating {:>9.2}  avg {:>9.2}",
                point.date, point.rating, point.moving_average
            );
        }
    }
    out
}

fn highlight_podium(rank: usize, line: String) -> String {
    match rank {
        1 => line.yellow().bold().to_string(),
        2 => line.white().bold().to_string(),
        3 => line.red().to_string(),
        _ => line,
    }
}

fn format_saldo(saldo: f64) -> String {
    if saldo > 0.0 {
        format!("+{}", saldo)
    } else {
        format!("{}", saldo)
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let mut cut: String = s.chars().take(max_chars - 1).collect();
    cut.push('…');
    cut
}
