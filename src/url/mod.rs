//! URL handling module for Kumo
//!
//! Parsing, reference resolution against a base address, and the validity
//! check that gates admission to the frontier.

mod validate;

pub use validate::{is_fetchable, parse_address, parse_seed, resolve};
