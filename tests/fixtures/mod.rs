//! Test fixtures and builders for integration testing

use chrono::NaiveDate;
use club_elo::types::{FfaMatch, FfaResult, SinglesMatch, TeamMatch};

/// Install a subscriber so traced skips show up under RUST_LOG
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn match_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
}

pub fn singles(a: &str, b: &str, score_a: u32, score_b: u32) -> SinglesMatch {
    SinglesMatch {
        date: match_date(),
        player_a: a.to_string(),
        player_b: b.to_string(),
        score_a,
        score_b,
    }
}

pub fn team(team_a: &[&str], team_b: &[&str], score_a: u32, score_b: u32) -> TeamMatch {
    TeamMatch {
        date: match_date(),
        team_a: team_a.iter().map(|p| p.to_string()).collect(),
        team_b: team_b.iter().map(|p| p.to_string()).collect(),
        score_a,
        score_b,
    }
}

pub fn ffa(results: &[(&str, i32, u32)]) -> FfaMatch {
    FfaMatch {
        date: match_date(),
        results: results
            .iter()
            .map(|(player, score, rank)| FfaResult {
                player: player.to_string(),
                score: *score,
                rank: *rank,
            })
            .collect(),
    }
}
