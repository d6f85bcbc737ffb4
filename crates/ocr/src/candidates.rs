/// Clean raw OCR output into candidate lines for catalog matching.
///
/// Splits on line boundaries, trims each line, and drops lines that are
/// empty after trimming. Order follows the extraction order. Casing is
/// left untouched; the match engine folds case at comparison time.
pub fn candidate_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_drops_blank_lines() {
        let lines = candidate_lines("etoile\n\n  Concerto ");
        assert_eq!(lines, vec!["etoile", "Concerto"]);
    }

    #[test]
    fn whitespace_only_lines_are_dropped() {
        assert!(candidate_lines(" \n\t\n   \n").is_empty());
    }

    #[test]
    fn empty_input_yields_no_candidates() {
        assert!(candidate_lines("").is_empty());
    }

    #[test]
    fn order_is_preserved() {
        let lines = candidate_lines("b\na\nc");
        assert_eq!(lines, vec!["b", "a", "c"]);
    }

    #[test]
    fn idempotent_on_clean_input() {
        let once = candidate_lines("Etoile\nConcerto");
        let twice = candidate_lines(&once.join("\n"));
        assert_eq!(once, twice);
    }

    #[test]
    fn interior_whitespace_is_kept() {
        assert_eq!(candidate_lines("  Eau de Lune  "), vec!["Eau de Lune"]);
    }
}
