//! # rowpack Configuration Module
//!
//! This module centralizes the wire-format and sizing constants for rowpack.
//! Constants are grouped by functional area and interdependencies are
//! documented next to the values they constrain.
//!
//! ## Why Centralization?
//!
//! The packed-row layout is a byte-exact storage format: the marker byte,
//! the offset-slot width, and the varint reservation width must agree
//! between the packer, the remapper, and every reader. Co-locating them
//! keeps a format change a one-file affair.
//!
//! ## Module Organization
//!
//! - [`constants`]: All wire-format and sizing values with dependency notes

pub mod constants;
pub use constants::*;
