use std::collections::HashSet;

use regex::RegexBuilder;

use crate::index::CatalogIndex;
use crate::source::CatalogRecord;

/// One hit: the record plus the source file it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogMatch {
    pub source: String,
    pub record: CatalogRecord,
}

/// Case-insensitive literal-substring matcher over a catalog index.
///
/// Each candidate is escaped before compilation, so a candidate made of
/// regex metacharacters still matches literally. With `dedupe` off (the
/// default) a record matched by several candidates appears once per
/// matching candidate; with it on, each record appears at most once.
#[derive(Debug, Default)]
pub struct MatchEngine {
    pub dedupe: bool,
}

impl MatchEngine {
    pub fn new(dedupe: bool) -> Self {
        Self { dedupe }
    }

    /// Candidates outer, sources then records inner — a plain
    /// O(candidates × records) scan, fine at catalog scale.
    pub fn find_matches(&self, candidates: &[String], index: &CatalogIndex) -> Vec<CatalogMatch> {
        let mut matches = Vec::new();
        let mut seen = HashSet::new();

        for candidate in candidates {
            // The normalizer never emits empty candidates; guard anyway,
            // since an empty pattern matches every name.
            if candidate.is_empty() {
                continue;
            }
            let Ok(matcher) = RegexBuilder::new(&regex::escape(candidate))
                .case_insensitive(true)
                .build()
            else {
                continue;
            };

            for (position, (source, record)) in index.iter().enumerate() {
                if !matcher.is_match(&record.name) {
                    continue;
                }
                if self.dedupe && !seen.insert(position) {
                    continue;
                }
                matches.push(CatalogMatch {
                    source: source.to_string(),
                    record: record.clone(),
                });
            }
        }
        matches
    }

    /// Names only, in match order — what the detection surface returns.
    pub fn matched_names(&self, candidates: &[String], index: &CatalogIndex) -> Vec<String> {
        self.find_matches(candidates, index)
            .into_iter()
            .map(|m| m.record.name)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::CatalogSource;

    fn index(records: &[&str]) -> CatalogIndex {
        CatalogIndex::from_sources(vec![CatalogSource::from_names("test.json", records)])
    }

    fn candidates(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn substring_match_is_case_insensitive() {
        let engine = MatchEngine::default();
        let names = engine.matched_names(&candidates(&["etoile"]), &index(&["Etoile"]));
        assert_eq!(names, vec!["Etoile"]);
    }

    #[test]
    fn candidate_matching_nothing_contributes_nothing() {
        let engine = MatchEngine::default();
        let names =
            engine.matched_names(&candidates(&["etoile", "Concerto"]), &index(&["Etoile"]));
        assert_eq!(names, vec!["Etoile"]);
    }

    #[test]
    fn candidate_may_match_inside_a_longer_name() {
        let engine = MatchEngine::default();
        let names = engine.matched_names(&candidates(&["lune"]), &index(&["Eau de Lune"]));
        assert_eq!(names, vec!["Eau de Lune"]);
    }

    #[test]
    fn metacharacters_match_literally() {
        let engine = MatchEngine::default();
        // "." must not act as a wildcard.
        assert!(engine
            .matched_names(&candidates(&["A.B"]), &index(&["AxB"]))
            .is_empty());
        assert_eq!(
            engine.matched_names(&candidates(&["A.B"]), &index(&["A.B deluxe"])),
            vec!["A.B deluxe"]
        );
    }

    #[test]
    fn parenthesis_candidate_matches_literal_parenthesis() {
        let engine = MatchEngine::default();
        assert_eq!(
            engine.matched_names(&candidates(&["(edition"]), &index(&["Nuit (edition 2024)"])),
            vec!["Nuit (edition 2024)"]
        );
    }

    #[test]
    fn duplicates_are_kept_by_default() {
        let engine = MatchEngine::default();
        // Both candidates match the same record.
        let names =
            engine.matched_names(&candidates(&["eto", "ile"]), &index(&["Etoile"]));
        assert_eq!(names, vec!["Etoile", "Etoile"]);
    }

    #[test]
    fn dedupe_flag_collapses_repeat_hits() {
        let engine = MatchEngine::new(true);
        let names =
            engine.matched_names(&candidates(&["eto", "ile"]), &index(&["Etoile"]));
        assert_eq!(names, vec!["Etoile"]);
    }

    #[test]
    fn dedupe_keeps_same_name_from_different_sources() {
        let engine = MatchEngine::new(true);
        let index = CatalogIndex::from_sources(vec![
            CatalogSource::from_names("a.json", &["Etoile"]),
            CatalogSource::from_names("b.json", &["Etoile"]),
        ]);
        // Two distinct records, even though the names collide.
        assert_eq!(
            engine.matched_names(&candidates(&["etoile"]), &index),
            vec!["Etoile", "Etoile"]
        );
    }

    #[test]
    fn result_order_is_candidates_outer() {
        let engine = MatchEngine::default();
        let names = engine.matched_names(
            &candidates(&["concerto", "etoile"]),
            &index(&["Etoile", "Concerto"]),
        );
        assert_eq!(names, vec!["Concerto", "Etoile"]);
    }

    #[test]
    fn every_containing_record_is_found() {
        let engine = MatchEngine::default();
        let names = engine.matched_names(
            &candidates(&["eau"]),
            &index(&["Eau de Lune", "Etoile", "Beau Geste"]),
        );
        assert_eq!(names, vec!["Eau de Lune", "Beau Geste"]);
    }

    #[test]
    fn empty_inputs_match_nothing() {
        let engine = MatchEngine::default();
        assert!(engine.matched_names(&[], &index(&["Etoile"])).is_empty());
        assert!(engine
            .matched_names(&candidates(&["etoile"]), &index(&[]))
            .is_empty());
    }

    #[test]
    fn match_result_carries_the_source_name() {
        let engine = MatchEngine::default();
        let matches = engine.find_matches(&candidates(&["etoile"]), &index(&["Etoile"]));
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].source, "test.json");
    }
}
