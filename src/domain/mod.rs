pub mod coercion;
pub mod models;

pub use coercion::{coerce_number, normalize_number};
pub use models::*;
