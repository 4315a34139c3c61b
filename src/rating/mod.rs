//! Rating and ranking engine.
//!
//! Everything here is a pure function of the snapshot it is handed: no I/O,
//! no state kept between calls.

pub mod aggregate;
pub mod baseline;
pub mod collation;
pub mod context;
pub mod contribution;
pub mod ranking;
pub mod score;
pub mod timeline;
pub mod trend;
pub mod types;

pub use aggregate::{aggregate_players, PlayerAggregate};
pub use baseline::compute_baseline;
pub use ranking::compute_ranking;
pub use timeline::get_player_timeline;
pub use trend::{build_trend, compute_moving_average};
pub use types::{RankingEntry, TimelinePoint, TournamentContext, Trend, TrendPoint};
