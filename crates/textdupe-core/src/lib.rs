pub mod config;
pub mod distance;
pub mod engine;
pub mod error;
pub mod matrix;
pub mod normalize;
pub mod progress;
pub mod report;
pub mod scanner;

pub use config::AppConfig;
pub use engine::{CompareEngine, CompareOutcome};
pub use error::Error;
pub use progress::{ProgressReporter, SilentReporter};
