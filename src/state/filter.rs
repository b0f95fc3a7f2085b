use std::collections::HashSet;

use crate::catalog::CatalogItem;
use crate::state::screen::ListScreenState;

/// Derive the visible item sequence from the latest (state, query,
/// favorites) triple.
///
/// Blank queries pass the catalog through unchanged; otherwise the match
/// is a literal, case-sensitive substring test on the title. Catalog order
/// is preserved. The favorites set is part of the input triple so a
/// favorite flip re-runs the derivation, but membership does not affect
/// which titles match.
pub fn filter_catalog(
    state: &ListScreenState,
    query: &str,
    _favorites: &HashSet<String>,
) -> Vec<CatalogItem> {
    match state {
        ListScreenState::Success { items, .. } => {
            if query.trim().is_empty() {
                items.clone()
            } else {
                items
                    .iter()
                    .filter(|item| item.title.contains(query))
                    .cloned()
                    .collect()
            }
        }
        ListScreenState::Loading | ListScreenState::Error { .. } => Vec::new(),
    }
}
