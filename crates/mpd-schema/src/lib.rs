//! # mpd-schema: Record Validation & Normalization
//!
//! Turns the raw text of one `.mpd` file into a
//! [`NormalizedRecord`](mpd_core::NormalizedRecord), or a
//! [`RecordError`](mpd_core::RecordError) explaining why it cannot.
//!
//! ## Stages
//!
//! - [`document`]: parses YAML into a JSON object. Anything that is not a
//!   well-formed mapping is a parse error.
//! - [`rules`]: checks required and optional fields, collecting every
//!   violation in the document before reporting.
//! - [`validate`]: [`RecordValidator`] ties the two together, fills
//!   defaults from its [`Clock`](mpd_core::Clock), and derives the id.
//!
//! ## Crate Policy
//!
//! - Depends only on `mpd-core` internally.
//! - Validation never fails fast: a file with five problems reports five.

pub mod document;
pub mod rules;
pub mod validate;

pub use rules::{
    ACCEPTED_URL_SCHEMES, DATE_RANGE, KNOWN_FIELDS, MONTH_RANGE, RESERVED_FIELDS, YEAR_RANGE,
};
pub use validate::RecordValidator;
