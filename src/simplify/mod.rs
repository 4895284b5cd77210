//! Simplify linestrings.
//!
//! Linestrings are simplified by dropping points; every retained point is one of the originals.
pub mod rdp;

pub use rdp::{rdp_keep, rdp_keep_with, rdp_reduce, rdp_reduce_with, Simplifier};
