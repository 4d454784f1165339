//! Name filtering for listings.

use crate::nav::listing::Listing;

/// Returns `true` if `name` contains `query` as a case-sensitive substring.
///
/// An empty query matches every name.
pub fn name_matches(name: &str, query: &str) -> bool {
    name.contains(query)
}

/// Returns the listing indices whose names match `query`, in listing order.
///
/// The parent marker takes part like any other row.
pub fn visible_indices(listing: &Listing, query: &str) -> Vec<usize> {
    listing
        .iter()
        .enumerate()
        .filter(|(_, e)| name_matches(e.name(), query))
        .map(|(i, _)| i)
        .collect()
}
