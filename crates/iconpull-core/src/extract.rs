//! Candidate extraction from mirrored catalog pages.
//!
//! The mirror returns markdown-ish text, so URLs show up bare, inside
//! `(...)` link targets or `[...]` labels. The pattern below is the contract
//! for what counts as a candidate: the CDN host, the `3d/{premium,free}/thumb`
//! prefix, and a path that stops at whitespace, `)` or `]` and ends at the
//! first `.png`.

use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

pub const CANDIDATE_PATTERN: &str =
    r"https://cdn3d\.iconscout\.com/3d/(?:premium|free)/thumb/[^\s)\]]+?\.png";

fn candidate_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(CANDIDATE_PATTERN).expect("candidate regex is valid"))
}

/// Returns every distinct candidate URL found in `text`. Never fails; no match yields an empty set.
pub fn extract_candidates(text: &str) -> BTreeSet<String> {
    candidate_regex()
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FREE: &str = "https://cdn3d.iconscout.com/3d/free/thumb/free-ssd-drive-3d-icon-download-in-png-blend-fbx-gltf-file-formats--hardware-storage-pack-icons-123.png";
    const PREMIUM: &str = "https://cdn3d.iconscout.com/3d/premium/thumb/ram-module-3d-icon-download-in-png-456.png";

    #[test]
    fn empty_and_unrelated_text_yield_nothing() {
        assert!(extract_candidates("").is_empty());
        assert!(extract_candidates("no links here ))) ]]] \u{0}").is_empty());
        assert!(extract_candidates("https://example.com/a.png").is_empty());
    }

    #[test]
    fn finds_urls_in_markdown_links_and_images() {
        let text = format!("![ssd]({FREE}) and [ram]({PREMIUM}) plus [{FREE}]");
        let urls = extract_candidates(&text);
        assert_eq!(urls.len(), 2);
        assert!(urls.contains(FREE));
        assert!(urls.contains(PREMIUM));
    }

    #[test]
    fn deduplicates_repeated_urls() {
        let text = format!("{FREE}\n{FREE} {FREE}");
        assert_eq!(extract_candidates(&text).len(), 1);
    }

    #[test]
    fn stops_at_first_png_and_terminators() {
        let text = "https://cdn3d.iconscout.com/3d/free/thumb/a.png.png";
        let urls: Vec<_> = extract_candidates(text).into_iter().collect();
        assert_eq!(urls, vec!["https://cdn3d.iconscout.com/3d/free/thumb/a.png"]);

        // A terminator before `.png` means the shape is broken; no match.
        let broken = "https://cdn3d.iconscout.com/3d/free/thumb/a b.png";
        assert!(extract_candidates(broken).is_empty());
        let bracketed = "https://cdn3d.iconscout.com/3d/free/thumb/a](x).png";
        assert!(extract_candidates(bracketed).is_empty());
    }

    #[test]
    fn prefix_match_is_case_sensitive() {
        assert!(extract_candidates("HTTPS://cdn3d.iconscout.com/3d/free/thumb/a.png").is_empty());
        assert!(extract_candidates("https://CDN3D.iconscout.com/3d/free/thumb/a.png").is_empty());
        assert!(extract_candidates("https://cdn3d.iconscout.com/3d/Free/thumb/a.png").is_empty());
    }

    #[test]
    fn requires_thumb_segment_and_known_tier() {
        assert!(extract_candidates("https://cdn3d.iconscout.com/3d/free/preview/a.png").is_empty());
        assert!(extract_candidates("https://cdn3d.iconscout.com/3d/basic/thumb/a.png").is_empty());
        assert!(extract_candidates("http://cdn3d.iconscout.com/3d/free/thumb/a.png").is_empty());
    }
}
