// ==============================================================================
// parsers/mod.rs - Input Parsers
// ==============================================================================
// Description: Parsers for delimited text sources
// Author: Matt Barham
// Created: 2026-06-02
// Modified: 2026-08-19
// Version: 1.0.0
// ==============================================================================

pub mod delimited;

pub use delimited::{DelimitedTextParser, ParseOptions};
