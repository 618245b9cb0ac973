//! Deterministic worker resolution.
//!
//! A pure scoring function mapping a submitted node to a worker id in
//! [1, 72]: a Pythagorean letter-value sum over the title, a digit sum
//! over the arcana string, and the seed reduced modulo 72.

use serde::Deserialize;

/// Canonical request payload for the resolver.
///
/// Deserialization is permissive: every field has a default, so a
/// partial object still resolves.
#[derive(Debug, Clone, Deserialize)]
pub struct Node {
    #[serde(default)]
    pub title: String,
    #[serde(default = "default_arcana")]
    pub arcana: String,
    #[serde(default = "default_seed")]
    pub seed: i64,
}

fn default_arcana() -> String {
    "0".to_string()
}

fn default_seed() -> i64 {
    33
}

/// Maps alphabetic letters to their Pythagorean numbers (A=1 .. Z=26)
/// and sums them; everything else is ignored.
pub fn pythag_sum(s: &str) -> i64 {
    s.bytes()
        .map(|b| b.to_ascii_uppercase())
        .filter(|b| b.is_ascii_uppercase())
        .map(|b| i64::from(b - b'A' + 1))
        .sum()
}

/// Sums decimal digits embedded in the string.
pub fn digit_sum(s: &str) -> i64 {
    s.bytes()
        .filter(|b| b.is_ascii_digit())
        .map(|b| i64::from(b - b'0'))
        .sum()
}

/// Resolves a node to a worker id in [1, 72]. Pure and deterministic.
pub fn resolve(node: &Node) -> i64 {
    let a = pythag_sum(&node.title);
    let b = digit_sum(&node.arcana);
    let score = 3 * a + 2 * b + node.seed.rem_euclid(72);
    score % 72 + 1
}
