//! `fieldvoice-core`: shared building blocks for the FieldVoice record mapper.
//!
//! Holds the pieces every conversion relies on: identity/timestamp types, the
//! injectable [`clock::Clock`], lenient field decoding, the trade-list codec,
//! default-substitution helpers and the mapper configuration.

pub mod clock;
pub mod coerce;
pub mod config;
pub mod error;
pub mod lenient;
pub mod trades;
pub mod types;
