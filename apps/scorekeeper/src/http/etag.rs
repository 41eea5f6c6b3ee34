//! ETag helpers for the game snapshot.

/// ETag for a game snapshot.
///
/// Format: `"game-{key}-{game_id}-v{revision}"` (quoted, as HTTP requires)
///
/// # Example
/// ```
/// # use scorekeeper::http::etag::game_etag;
/// assert_eq!(
///     game_etag("mahjong_game_state", "9b1d", 5),
///     r#""game-mahjong_game_state-9b1d-v5""#
/// );
/// ```
pub fn game_etag(key: &str, game_id: &str, revision: u64) -> String {
    format!(r#""game-{key}-{game_id}-v{revision}""#)
}

/// Whether an `If-None-Match` header value matches `etag`.
///
/// Handles the `*` wildcard and comma-separated lists; weak validators
/// (`W/"..."`) compare equal to their strong form.
pub fn if_none_match_hits(header: &str, etag: &str) -> bool {
    let header = header.trim();
    header == "*"
        || header
            .split(',')
            .map(|candidate| candidate.trim().trim_start_matches("W/"))
            .any(|candidate| candidate == etag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn etag_format() {
        assert_eq!(game_etag("k", "a1", 0), r#""game-k-a1-v0""#);
        assert_eq!(game_etag("club-night", "a1", 42), r#""game-club-night-a1-v42""#);
    }

    #[test]
    fn if_none_match_variants() {
        let etag = game_etag("k", "a1", 3);
        assert!(if_none_match_hits(r#""game-k-a1-v3""#, &etag));
        assert!(if_none_match_hits(r#""game-k-a1-v1", "game-k-a1-v3""#, &etag));
        assert!(if_none_match_hits(r#"W/"game-k-a1-v3""#, &etag));
        assert!(if_none_match_hits("*", &etag));
        assert!(!if_none_match_hits(r#""game-k-a1-v2""#, &etag));
        assert!(!if_none_match_hits("game-k-a1-v3", &etag));
    }

    #[test]
    fn same_revision_of_another_game_does_not_match() {
        let old = game_etag("k", "a1", 1);
        let new = game_etag("k", "b2", 1);
        assert!(!if_none_match_hits(&old, &new));
    }
}
