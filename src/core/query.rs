//! # Filter and Sort
//!
//! The working view is a list of indices into the catalog. Both operations
//! here are pure: they read the catalog and return a new index list, so the
//! catalog itself is never touched and every view element is guaranteed to
//! exist in it.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use super::country::Country;

/// Direction applied by the next sort activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn flipped(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Ascending => "A→Z",
            SortOrder::Descending => "Z→A",
        }
    }
}

/// Indices of every catalog entry whose official name contains `term`,
/// ignoring case. An empty term matches everything. Output is in catalog order.
pub fn filter_indices(catalog: &[Country], term: &str) -> Vec<usize> {
    let needle = term.to_lowercase();
    catalog
        .iter()
        .enumerate()
        .filter(|(_, c)| needle.is_empty() || c.official_name().to_lowercase().contains(&needle))
        .map(|(i, _)| i)
        .collect()
}

/// Returns `view` reordered by official name.
///
/// Descending is the exact reverse of ascending, so consecutive activations
/// alternate between two mirror-image orderings even when names tie.
pub fn sort_indices(catalog: &[Country], view: &[usize], order: SortOrder) -> Vec<usize> {
    let mut sorted = view.to_vec();
    sorted.sort_by(|&a, &b| compare_names(catalog[a].official_name(), catalog[b].official_name()));
    if order == SortOrder::Descending {
        sorted.reverse();
    }
    sorted
}

/// Dictionary order of two names.
///
/// Letters compare by their base form first, ignoring accents and case, so
/// "Åland" files under A and "Côte" before "Croatia". Accents, then case,
/// then the raw string break ties so the order is total.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| case_folded(a).cmp(case_folded(b)))
        .then_with(|| a.cmp(b))
}

fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|&c| !is_combining_mark(c))
        .flat_map(char::to_lowercase)
}

fn case_folded(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::country;

    fn names(catalog: &[Country], view: &[usize]) -> Vec<String> {
        view.iter()
            .map(|&i| catalog[i].official_name().to_string())
            .collect()
    }

    fn sample() -> Vec<Country> {
        vec![
            country("Republic of Albania"),
            country("Republic of Zambia"),
            country("Kingdom of Belgium"),
            country("Argentine Republic"),
            country("Islamic Republic of Afghanistan"),
        ]
    }

    #[test]
    fn test_filter_scenario_al_matches_albania_only() {
        let catalog = vec![country("Albania"), country("Zambia")];
        let view = filter_indices(&catalog, "al");
        assert_eq!(names(&catalog, &view), vec!["Albania"]);
    }

    #[test]
    fn test_filter_is_case_insensitive_and_complete() {
        let catalog = sample();
        for term in ["REPUBLIC", "republic", "Of", "ia", "an", "xyz", ""] {
            let view = filter_indices(&catalog, term);
            let needle = term.to_lowercase();

            for &i in &view {
                assert!(catalog[i].official_name().to_lowercase().contains(&needle));
            }
            let expected = catalog
                .iter()
                .filter(|c| c.official_name().to_lowercase().contains(&needle))
                .count();
            assert_eq!(view.len(), expected, "term {term:?}");
        }
    }

    #[test]
    fn test_empty_term_yields_full_catalog_in_order() {
        let catalog = sample();
        assert_eq!(filter_indices(&catalog, ""), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_filter_preserves_catalog_order() {
        let catalog = sample();
        let view = filter_indices(&catalog, "republic");
        assert_eq!(view, vec![0, 1, 3, 4]);
    }

    #[test]
    fn test_filter_handles_non_ascii_case() {
        let catalog = vec![country("Åland Islands"), country("Sweden")];
        let view = filter_indices(&catalog, "åLAND");
        assert_eq!(view, vec![0]);
    }

    #[test]
    fn test_sort_ascending_and_descending() {
        let catalog = sample();
        let all = filter_indices(&catalog, "");

        let asc = sort_indices(&catalog, &all, SortOrder::Ascending);
        assert_eq!(
            names(&catalog, &asc),
            vec![
                "Argentine Republic",
                "Islamic Republic of Afghanistan",
                "Kingdom of Belgium",
                "Republic of Albania",
                "Republic of Zambia",
            ]
        );

        let desc = sort_indices(&catalog, &asc, SortOrder::Descending);
        let mut reversed = asc.clone();
        reversed.reverse();
        assert_eq!(desc, reversed);
    }

    #[test]
    fn test_descending_mirrors_ascending_with_ties() {
        let catalog = vec![country("Same"), country("Other"), country("Same")];
        let all = filter_indices(&catalog, "");
        let asc = sort_indices(&catalog, &all, SortOrder::Ascending);
        let desc = sort_indices(&catalog, &asc, SortOrder::Descending);

        let mut reversed = asc.clone();
        reversed.reverse();
        assert_eq!(desc, reversed);
    }

    #[test]
    fn test_compare_names_folds_case() {
        assert_eq!(compare_names("albania", "Belgium"), Ordering::Less);
        assert_eq!(compare_names("Zambia", "argentina"), Ordering::Greater);
        assert_eq!(compare_names("France", "France"), Ordering::Equal);
        assert_ne!(compare_names("france", "France"), Ordering::Equal);
    }

    #[test]
    fn test_sort_files_accented_names_under_their_base_letter() {
        let catalog = vec![
            country("Republic of Zambia"),
            country("Åland Islands"),
            country("Republic of Croatia"),
            country("Republic of Côte d'Ivoire"),
            country("Republic of Cyprus"),
            country("Argentine Republic"),
        ];
        let all = filter_indices(&catalog, "");

        let asc = sort_indices(&catalog, &all, SortOrder::Ascending);
        assert_eq!(
            names(&catalog, &asc),
            vec![
                "Åland Islands",
                "Argentine Republic",
                "Republic of Côte d'Ivoire",
                "Republic of Croatia",
                "Republic of Cyprus",
                "Republic of Zambia",
            ]
        );

        let desc = sort_indices(&catalog, &asc, SortOrder::Descending);
        let mut reversed = asc.clone();
        reversed.reverse();
        assert_eq!(desc, reversed);
    }

    #[test]
    fn test_compare_names_ignores_accents_before_tie_break() {
        assert_eq!(compare_names("Curaçao", "Cyprus"), Ordering::Less);
        assert_eq!(
            compare_names("São Tomé and Príncipe", "Senegal"),
            Ordering::Less
        );
        assert_eq!(compare_names("Réunion", "Romania"), Ordering::Less);
        // Same base letters: unaccented first, and never equal
        assert_eq!(compare_names("Cote", "Côte"), Ordering::Less);
        assert_eq!(compare_names("Côte", "Côte"), Ordering::Equal);
    }

    #[test]
    fn test_sort_order_flip_and_label() {
        assert_eq!(SortOrder::default(), SortOrder::Ascending);
        assert_eq!(SortOrder::Ascending.flipped(), SortOrder::Descending);
        assert_eq!(SortOrder::Descending.flipped(), SortOrder::Ascending);
        assert_eq!(SortOrder::Ascending.label(), "A→Z");
    }
}
