//! Fuzzy ranking of snippet identity strings.
//!
//! Matching is delegated to `frizbee`; this module only decides the options
//! and the final ordering. Candidates are always identity strings of the form
//! `folder/name.language`, never file contents.

use frizbee::{Config, match_indices, match_list};

/// A candidate that matched the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedMatch {
	/// Position of the candidate in the slice handed to [`rank`].
	pub index: usize,
	/// Matcher score; higher is better and always positive.
	pub score: u16,
	/// Whether the candidate equals the query exactly.
	pub exact: bool,
}

/// Builds fuzzy matching options for the provided query.
///
/// Typos are not tolerated: every query character must appear in order.
#[must_use]
pub fn config_for_query(_query: &str) -> Config {
	Config {
		prefilter: true,
		max_typos: Some(0),
		sort: false,
		..Config::default()
	}
}

/// Rank `candidates` against `query`.
///
/// Only positively scored candidates are returned, ordered by exactness, then
/// descending score, then original position. An empty (or whitespace-only)
/// query matches nothing.
#[must_use]
pub fn rank<S: AsRef<str>>(query: &str, candidates: &[S]) -> Vec<RankedMatch> {
	let needle = query.trim();
	if needle.is_empty() || candidates.is_empty() {
		return Vec::new();
	}

	let config = config_for_query(needle);
	let mut ranked: Vec<RankedMatch> = match_list(needle, candidates, &config)
		.into_iter()
		.filter(|entry| entry.score > 0)
		.map(|entry| {
			let index = entry.index as usize;
			let exact = candidates
				.get(index)
				.is_some_and(|candidate| candidate.as_ref() == needle);
			RankedMatch {
				index,
				score: entry.score,
				exact,
			}
		})
		.collect();

	ranked.sort_by(|a, b| {
		b.exact
			.cmp(&a.exact)
			.then_with(|| b.score.cmp(&a.score))
			.then_with(|| a.index.cmp(&b.index))
	});
	ranked
}

/// Index of the best candidate for `query`, if any matched.
#[must_use]
pub fn best_match<S: AsRef<str>>(query: &str, candidates: &[S]) -> Option<usize> {
	rank(query, candidates).first().map(|entry| entry.index)
}

/// Character positions in `text` matched by `query`, for row highlighting.
///
/// frizbee reports byte offsets; they are mapped to character positions and
/// returned in ascending order. Offsets inside a multi-byte character are
/// dropped.
#[must_use]
pub fn highlight_positions(query: &str, text: &str) -> Option<Vec<usize>> {
	let needle = query.trim();
	if text.is_empty() || needle.is_empty() {
		return None;
	}
	let found = match_indices(needle, text, &config_for_query(needle))?;
	let starts: Vec<usize> = text.char_indices().map(|(offset, _)| offset).collect();
	let mut positions: Vec<usize> = found
		.indices
		.into_iter()
		.filter_map(|offset| starts.binary_search(&offset).ok())
		.collect();
	positions.sort_unstable();
	positions.dedup();
	Some(positions)
}

#[cfg(test)]
mod tests {
	use super::*;

	const CANDIDATES: [&str; 4] = ["misc/a.go", "misc/b.py", "notes/c.md", "notes/go.md"];

	#[test]
	fn empty_query_matches_nothing() {
		assert!(rank("", &CANDIDATES).is_empty());
		assert!(rank("   ", &CANDIDATES).is_empty());
	}

	#[test]
	fn exact_identity_ranks_first() {
		for (position, candidate) in CANDIDATES.iter().enumerate() {
			let ranked = rank(candidate, &CANDIDATES);
			assert_eq!(
				ranked.first().map(|entry| entry.index),
				Some(position),
				"{candidate} should rank itself first"
			);
			assert!(ranked[0].exact);
		}
	}

	#[test]
	fn scores_are_monotonic() {
		let ranked = rank("md", &CANDIDATES);
		assert!(!ranked.is_empty());
		for pair in ranked.windows(2) {
			assert!(pair[0].exact >= pair[1].exact);
			if pair[0].exact == pair[1].exact {
				assert!(pair[0].score >= pair[1].score);
			}
		}
		assert!(ranked.iter().all(|entry| entry.score > 0));
	}

	#[test]
	fn best_match_picks_a_matching_candidate() {
		let best = best_match("b.py", &CANDIDATES).expect("match");
		assert_eq!(CANDIDATES[best], "misc/b.py");
		assert_eq!(best_match("", &CANDIDATES), None);
	}

	#[test]
	fn highlight_positions_count_characters_not_bytes() {
		let positions = highlight_positions("tea", "café/tea.go").expect("match");
		assert_eq!(positions, vec![5, 6, 7]);

		let ascii = highlight_positions("tea", "cafe/tea.go").expect("match");
		assert_eq!(ascii, vec![5, 6, 7]);
	}
}
