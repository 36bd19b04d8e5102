pub mod benchmarks;
pub mod bounds;
pub mod error;
pub mod firefly;
pub mod objective;
pub mod population;
pub mod rng;
pub mod search;
pub mod strategy;

// Re-export commonly used types for convenience
pub use error::{FireflyError, Result};
