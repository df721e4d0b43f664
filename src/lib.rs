//! Cave generation library
//!
//! Cellular-automaton cave maps with room extraction, guaranteed
//! connectivity and carved passages. Re-exports modules for use by binaries
//! and tools.

pub mod anchors;
pub mod ascii;
pub mod automaton;
pub mod cave;
pub mod config;
pub mod connector;
pub mod grid;
pub mod noise_map;
pub mod passages;
pub mod regions;
pub mod rooms;
pub mod seeds;
