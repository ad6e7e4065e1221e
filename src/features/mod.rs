//! Feature modules
//!
//! This module contains the key estimation pipeline:
//! - Chroma input handling and pitch-class profile building
//! - Key template correlation

pub mod chroma;
pub mod key;
