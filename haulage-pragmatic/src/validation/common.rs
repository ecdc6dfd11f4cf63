use super::*;
use rustc_hash::FxHashSet;
use std::hash::Hash;

/// Returns duplicated items in order of their second appearance, each reported once.
pub fn get_duplicates<'a, T, I>(items: I) -> Option<Vec<String>>
where
    T: Hash + Eq + ToString + 'a,
    I: Iterator<Item = &'a T>,
{
    let mut seen = FxHashSet::default();
    let mut reported = FxHashSet::default();

    let duplicates = items
        .filter(|item| !seen.insert(*item))
        .filter(|item| reported.insert(*item))
        .map(|item| item.to_string())
        .collect::<Vec<_>>();

    if duplicates.is_empty() { None } else { Some(duplicates) }
}

/// Collects errors of separate checks.
pub fn combine_error_results(results: &[Result<(), FormatError>]) -> Result<(), Vec<FormatError>> {
    let errors = results.iter().cloned().filter_map(|result| result.err()).collect::<Vec<_>>();

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Checks whether the amount is a finite non-negative number.
pub fn is_non_negative(amount: f64) -> bool {
    amount.is_finite() && amount >= 0.
}
