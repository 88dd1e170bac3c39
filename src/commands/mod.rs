//! Command implementations

pub mod play;
pub mod share;
pub mod today;

pub use play::run_play;
pub use share::run_share;
pub use today::run_today;
