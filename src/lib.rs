#![forbid(unsafe_code)]
//! mailgen_lib — génération de listes d'adresses e-mail candidates (MVP)

pub mod export;
pub mod generator;

pub use export::{ExportError, ExportFormat, export_patterns};
pub use generator::{
    Identity, IdentityError, MIN_PATTERNS, PatternSet, generate, generate_patterns,
};
