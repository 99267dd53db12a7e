//! Config integration tests
//!
//! Tests are split by operation: reads through paths, writes through paths,
//! and the typed accessors and merge helpers built on top of them.

mod accessor_tests;
mod read_tests;
