//! Team export parsing, validation, and formatting for Pokemon VGC teams.
//!
//! This crate handles the plain-text team notation popularized by Pokemon
//! Showdown: the block-per-Pokemon export listing species, held item,
//! ability, level, Tera type, nature, EV/IV spreads, and moves.
//!
//! # Overview
//!
//! ```text
//! raw text ──> looks_like_team (screening) ──> validate ──> Vec<TeamMember>
//!                                                               │
//!                       format_team <──────────────────────────┘
//! ```
//!
//! # Main Types
//!
//! - [`TeamMember`] - One structured Pokemon entry
//! - [`ValidationResult`] - Diagnostics plus the parsed team when clean
//! - [`LineKind`] - Classified line of an export, for the parser and sniffer
//!
//! All operations are pure functions over in-memory strings; nothing here
//! blocks or suspends, so they can be called freely from async code.
//!
//! # Example
//!
//! ```
//! use terascope_notation::validate;
//!
//! let result = validate("Flutter Mane @ Focus Sash\n- Moonblast");
//! assert!(result.is_valid);
//! assert_eq!(result.team.unwrap()[0].name, "Flutter Mane");
//! ```

pub mod format;
pub mod line;
pub mod parse;
pub mod sniff;
pub mod team;

pub use format::format_team;
pub use line::{LineKind, classify};
pub use parse::validate;
pub use sniff::looks_like_team;
pub use team::{TeamMember, ValidationResult};
