// ==============================================================================
// equivalence.rs - Genotype Strand Equivalence
// ==============================================================================
// Description: Equivalence classes of genotype codes across strand orientation
// Author: Matt Barham
// Created: 2026-06-02
// Modified: 2026-08-19
// Version: 1.0.0
// ==============================================================================
// Algorithm:
//   A two-letter genotype read from the opposite strand appears as its
//   complement (A<->T, C<->G), and the two alleles of a heterozygote may be
//   reported in either order. Each class is therefore
//     [self, reversed, complement, reversed complement]
//   with duplicates removed, e.g.
//     CT -> [CT, TC, GA, AG]
//     CC -> [CC, GG]
//   The table covers the eight codes the knowledge table uses; codes outside
//   it resolve to a singleton class.
// ==============================================================================

use std::collections::HashMap;

/// The eight genotype codes carried by the equivalence table, in the fixed
/// order their classes are defined.
const TABLE_CODES: [&str; 8] = ["CC", "CT", "TC", "TT", "GG", "GA", "AG", "AA"];

/// Complement a single allele. Unknown characters are kept as-is.
fn complement(allele: char) -> char {
    match allele {
        'A' => 'T',
        'T' => 'A',
        'C' => 'G',
        'G' => 'C',
        other => other,
    }
}

/// Flip a genotype to its opposite-strand reading (per-allele complement)
pub fn flip_strand(genotype: &str) -> String {
    genotype.chars().map(complement).collect()
}

/// Lookup table from a genotype code to its ordered equivalence class
#[derive(Debug, Clone)]
pub struct EquivalenceTable {
    classes: HashMap<String, Vec<String>>,
}

impl Default for EquivalenceTable {
    fn default() -> Self {
        Self::new()
    }
}

impl EquivalenceTable {
    /// Build the fixed eight-code table
    pub fn new() -> Self {
        let mut classes = HashMap::new();
        for code in TABLE_CODES {
            classes.insert(code.to_string(), Self::strand_class(code));
        }
        Self { classes }
    }

    /// Members equivalent to `code`, in class-definition order. Codes with
    /// no table entry map to a class containing only themselves.
    /// Lookup is case-insensitive; members are returned upper-cased.
    pub fn class_of(&self, code: &str) -> Vec<String> {
        let key = code.trim().to_ascii_uppercase();
        match self.classes.get(&key) {
            Some(members) => members.clone(),
            None => vec![key],
        }
    }

    /// Orderings and strand readings of one genotype, first occurrence wins
    fn strand_class(code: &str) -> Vec<String> {
        let reversed: String = code.chars().rev().collect();
        let flipped = flip_strand(code);
        let flipped_reversed: String = flipped.chars().rev().collect();

        let mut members = Vec::with_capacity(4);
        for candidate in [code.to_string(), reversed, flipped, flipped_reversed] {
            if !members.contains(&candidate) {
                members.push(candidate);
            }
        }
        members
    }
}
