// ==============================================================================
// lib.rs - Genotype Report Library
// ==============================================================================
// Description: Library interface for genotype panel report modules
// Author: Matt Barham
// Created: 2026-06-02
// Modified: 2026-08-19
// Version: 1.0.0
// ==============================================================================

pub mod parsers;
pub mod models;
pub mod error;
pub mod equivalence;
pub mod reference;
pub mod reconciler;
pub mod validator;
pub mod loader;
pub mod session;
pub mod output;
