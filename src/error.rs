//! # Error Types
//!
//! This module defines the error types for the firefly search library. It
//! provides specific error variants for the failure scenarios that can occur
//! while configuring and running a search.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use fireflyalg::error::{FireflyError, Result};
//!
//! fn some_function() -> Result<()> {
//!     // Function implementation
//!     Ok(())
//! }
//!
//! fn caller() {
//!     match some_function() {
//!         Ok(_) => println!("Success!"),
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! Matching on a specific variant:
//!
//! ```rust
//! use fireflyalg::bounds::Bounds;
//! use fireflyalg::error::FireflyError;
//!
//! match Bounds::uniform(2, 5.0, -5.0) {
//!     Err(FireflyError::InvalidBounds(msg)) => assert!(msg.contains("exceeds")),
//!     _ => panic!("inverted bounds must be rejected"),
//! }
//! ```

use thiserror::Error;

/// Represents errors that can occur in the firefly search library.
///
/// Every fallible constructor and operation in the crate reports through
/// this enum; the search itself never fails once a run is validly
/// configured.
#[derive(Error, Debug)]
pub enum FireflyError {
    /// Error that occurs when an invalid run configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when bounds are degenerate: inverted, non-finite,
    /// or zero-dimensional.
    #[error("Bounds error: {0}")]
    InvalidBounds(String),

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,
}

/// A specialized Result type for firefly search operations.
///
/// This type is a convenience wrapper around `std::result::Result` with the
/// error type fixed to `FireflyError`.
///
/// ## Examples
///
/// ```rust
/// use fireflyalg::error::{FireflyError, Result};
///
/// fn may_fail() -> Result<i32> {
///     // Some operation that might fail
///     Ok(42)
/// }
/// ```
pub type Result<T> = std::result::Result<T, FireflyError>;
