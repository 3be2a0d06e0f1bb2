//! Working-pool curation
//!
//! The search never scans the whole dictionary per guess. Once per
//! generator a working pool is curated: mostly the highest-scored
//! ("informative") words in deterministic order, topped up with a random
//! tail from the rest of the dictionary for diversity. The full dictionary
//! is still what gets filtered; the pool only bounds which words are
//! considered as guesses.

use super::config::GeneratorConfig;
use crate::core::{Dictionary, WordId};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

/// Build the curated guess pool
///
/// The head is the top-scored share of the pool (score descending, word id
/// ascending on ties, so equal inputs curate identically); the tail is
/// sampled uniformly without replacement from the remaining words.
pub(crate) fn curate_pool(
    dictionary: &Dictionary,
    scores: &[f64],
    config: &GeneratorConfig,
    rng: &mut StdRng,
) -> Vec<WordId> {
    let pool_size = config.pool_size.min(dictionary.len());

    let mut ranked: Vec<WordId> = dictionary.ids().collect();
    ranked.sort_by(|&a, &b| {
        scores[b as usize]
            .total_cmp(&scores[a as usize])
            .then_with(|| a.cmp(&b))
    });

    let informative = ((pool_size as f64) * config.informative_share).round() as usize;
    let informative = informative.min(pool_size);

    let mut pool: Vec<WordId> = ranked[..informative].to_vec();

    let tail_len = pool_size - informative;
    if tail_len > 0 {
        let rest = &ranked[informative..];
        pool.extend(rest.choose_multiple(rng, tail_len).copied());
    }

    pool
}
