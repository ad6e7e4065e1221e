//! Analysis result types
//!
//! Shared musical vocabulary for the key estimation engine:
//! - Pitch classes (C through B)
//! - Keys (tonic + mode)

pub mod result;
