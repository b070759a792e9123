//! Ranking of pooled candidates and the final pick.

use std::cmp::Ordering;

use crate::score::score_url;

/// Maximum number of ranked entries kept for display.
pub const PREVIEW_LEN: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredCandidate {
    pub score: i32,
    pub url: String,
}

impl Ord for ScoredCandidate {
    /// Best first: higher score, then (arbitrary but stable) higher URL.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .cmp(&self.score)
            .then_with(|| other.url.cmp(&self.url))
    }
}

impl PartialOrd for ScoredCandidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Outcome of ranking one concept's pool.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    /// Top-ranked candidate, present only when its score is positive.
    pub chosen: Option<ScoredCandidate>,
    /// Up to [`PREVIEW_LEN`] best-ranked candidates, for display only.
    pub preview: Vec<ScoredCandidate>,
}

impl Selection {
    pub fn url(&self) -> Option<&str> {
        self.chosen.as_ref().map(|c| c.url.as_str())
    }
}

/// Scores every URL in `pool` and picks the best one if it scores above zero.
///
/// Ties on score are broken by descending URL string comparison. A pool
/// whose best score is `<= 0` stays unresolved: weak matches are rejected
/// rather than guessed.
pub fn select_best<'a, I, S>(pool: I, include: &[S], exclude: &[S]) -> Selection
where
    I: IntoIterator<Item = &'a String>,
    S: AsRef<str>,
{
    let mut ranked: Vec<ScoredCandidate> = pool
        .into_iter()
        .map(|url| ScoredCandidate {
            score: score_url(url, include, exclude),
            url: url.clone(),
        })
        .collect();
    ranked.sort();
    ranked.dedup();

    let chosen = ranked.first().filter(|top| top.score > 0).cloned();
    ranked.truncate(PREVIEW_LEN);
    Selection {
        chosen,
        preview: ranked,
    }
}
