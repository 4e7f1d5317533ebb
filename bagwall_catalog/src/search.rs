// Copyright 2026 the Bagwall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::CatalogItem;

/// Items selected by [`filter_catalog`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchResult {
    /// Indices into the searched items, in catalog order.
    pub indices: Vec<usize>,
    /// Nothing matched and `indices` is the whole catalog instead.
    pub fell_back: bool,
}

/// Selects the items matching `query`.
///
/// Matching is a case-insensitive substring test against the name, each tag,
/// and the decimal number. A blank query selects everything. A query that
/// matches nothing also selects everything, with
/// [`SearchResult::fell_back`] set, so the wall never goes empty.
#[must_use]
pub fn filter_catalog(items: &[CatalogItem], query: &str) -> SearchResult {
    let query = query.trim().to_lowercase();
    let everything = || (0..items.len()).collect::<Vec<_>>();
    if query.is_empty() {
        return SearchResult {
            indices: everything(),
            fell_back: false,
        };
    }

    let indices: Vec<usize> = items
        .iter()
        .enumerate()
        .filter(|(_, item)| matches(item, &query))
        .map(|(index, _)| index)
        .collect();
    if indices.is_empty() {
        tracing::debug!(%query, "no matches, showing full catalog");
        return SearchResult {
            indices: everything(),
            fell_back: true,
        };
    }
    SearchResult {
        indices,
        fell_back: false,
    }
}

fn matches(item: &CatalogItem, lowered_query: &str) -> bool {
    item.name
        .as_deref()
        .is_some_and(|name| name.to_lowercase().contains(lowered_query))
        || item
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(lowered_query))
        || item.number.to_string().contains(lowered_query)
}
