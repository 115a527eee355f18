pub mod config;
pub mod error;
pub mod loyalty;
pub mod types;

pub use config::TieringConfig;
pub use error::{TieringError, TieringResult};
pub use loyalty::{CustomerTier, ScoreBreakdown};
pub use types::CustomerActivity;
