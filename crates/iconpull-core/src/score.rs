//! Keyword relevance scoring for candidate URLs.

/// Points for each include token found in the URL.
pub const INCLUDE_WEIGHT: i32 = 4;
/// Points for each exclude token found in the URL (applied as a penalty).
pub const EXCLUDE_WEIGHT: i32 = 6;
/// Bonus for URLs under the `/premium/` tier.
pub const PREMIUM_BONUS: i32 = 1;

/// Scores `url` against a concept's keyword lists.
///
/// The URL is lower-cased; tokens are matched as plain substrings, each
/// contributing independently: `+4` per include hit, `-6` per exclude hit,
/// `+1` when the path has a `/premium/` segment.
pub fn score_url<S: AsRef<str>>(url: &str, include: &[S], exclude: &[S]) -> i32 {
    let lower = url.to_lowercase();
    let hits = |tokens: &[S]| tokens.iter().filter(|t| lower.contains(t.as_ref())).count() as i32;

    let mut score = INCLUDE_WEIGHT * hits(include) - EXCLUDE_WEIGHT * hits(exclude);
    if lower.contains("/premium/") {
        score += PREMIUM_BONUS;
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: &[&str] = &[];

    #[test]
    fn sums_include_hits() {
        let url = "https://cdn3d.iconscout.com/3d/free/thumb/ssd-solid-state-drive.png";
        assert_eq!(score_url(url, &["ssd", "solid-state"], NONE), 8);
    }

    #[test]
    fn exclude_hits_subtract_independently() {
        let url = "https://cdn3d.iconscout.com/3d/free/thumb/dvd-player-cd.png";
        assert_eq!(score_url(url, &["cd", "disc"], &["dvd-player"]), 4 - 6);
        assert_eq!(score_url(url, NONE, &["dvd", "player", "dvd-player"]), -18);
    }

    #[test]
    fn premium_bonus() {
        let url = "https://cdn3d.iconscout.com/3d/premium/thumb/floppy.png";
        assert_eq!(score_url(url, &["floppy"], NONE), 5);
        assert_eq!(score_url(url, NONE, NONE), 1);
    }

    #[test]
    fn url_is_lowercased_but_tokens_are_not() {
        let url = "https://cdn3d.iconscout.com/3d/free/thumb/GPU-Card.png";
        assert_eq!(score_url(url, &["gpu"], NONE), 4);
        assert_eq!(score_url(url, &["GPU"], NONE), 0);
    }

    #[test]
    fn overlapping_tokens_each_count() {
        // "graph" is an exclude for gpu-card and also a substring of "graphics-card".
        let url = "https://cdn3d.iconscout.com/3d/free/thumb/gpu-graphics-card.png";
        assert_eq!(
            score_url(url, &["gpu", "graphics-card", "graphic-card"], &["gift", "graph"]),
            4 + 4 - 6
        );
    }

    #[test]
    fn deterministic() {
        let url = "https://cdn3d.iconscout.com/3d/premium/thumb/cpu-chip.png";
        let inc = vec!["cpu".to_string(), "chip".to_string()];
        let exc = vec!["case-cpu".to_string()];
        assert_eq!(score_url(url, &inc, &exc), score_url(url, &inc, &exc));
        assert_eq!(score_url(url, &inc, &exc), 9);
    }
}
