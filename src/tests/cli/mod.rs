//! CLI helper tests.

#[cfg(feature = "sarge")]
mod sarge_tests;
