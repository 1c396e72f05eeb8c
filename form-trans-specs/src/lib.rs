//! Fixture-driven testing infrastructure for form-trans.
//!
//! Test cases are declared in `.toml` fixture files that name two form exports, the
//! alignment to build the translation table with, and the translations expected from it.
//!
//! ## Modules
//!
//! - [`fixture`] - Fixture types and TOML parsing
//! - [`loader`] - Fixture file loading, including the referenced form exports
//! - [`runner`] - Builds the table and checks each expectation
//! - [`errors`] - Error types for the fixture harness
//! - [`formatter`] - Failure and summary formatting
//! - [`failures`] - Expected failures tracking via TOML

pub mod errors;
pub mod failures;
pub mod fixture;
pub mod formatter;
pub mod loader;
pub mod runner;

// Re-exports for convenient access to core types
pub use errors::{SpecError, SpecResult};
pub use failures::{ExpectedFailures, FailureEntry, FailureState, HarnessResult};
pub use fixture::{parse_fixture, ErrorKind, Expectation, FixtureSpec, TranslationFixture};
pub use formatter::{format_failure, format_summary};
pub use loader::{load_all_fixtures, load_fixture};
pub use runner::{check_expectation, run_fixture, CheckOutcome, CheckResult, FixtureReport};
