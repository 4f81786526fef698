//! Deterministic catalog shuffle.
//!
//! # Algorithm
//!
//! Fisher-Yates via `rand`'s `SliceRandom::shuffle`, driven by
//! `StdRng::seed_from_u64(seed)`. Same seed + same input sequence gives a
//! bit-identical ordering on every run. `rand` documents that `StdRng`'s
//! underlying algorithm may change between major/minor releases, so
//! orderings are stable per `rand` version but not across upgrades — the
//! weekly seed only needs to agree among processes built from the same
//! lockfile.
//!
//! Items are permuted by position; duplicate records are fine.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::models::CatalogItem;

/// Returns a seeded permutation of the catalog.
///
/// An empty catalog yields an empty permutation.
pub fn shuffle_catalog(catalog: &[CatalogItem], seed: u64) -> Vec<CatalogItem> {
    let mut shuffled = catalog.to_vec();
    let mut rng = StdRng::seed_from_u64(seed);
    shuffled.shuffle(&mut rng);
    shuffled
}
