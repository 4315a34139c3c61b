pub mod import;
pub mod league;
pub mod report;
pub mod server;
