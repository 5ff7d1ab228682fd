//! Emitters for synthesized schemas.
//!
//! Both emitters refuse to write output for a compilation with errors.

pub mod json;
pub mod rust;

#[cfg(test)]
mod json_tests;
