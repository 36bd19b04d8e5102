pub mod driver;
pub mod options;

pub use driver::{SearchDriver, SearchOutcome, Termination};
pub use options::{ConvergenceCriteria, SearchOptions, SearchOptionsBuilder};
