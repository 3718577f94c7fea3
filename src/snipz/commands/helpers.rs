use crate::error::{Result, SnipzError};
use crate::store::DataStore;

/// Normalizes user-typed identifiers and checks each one is present.
pub fn resolve_ids<S: DataStore>(store: &S, inputs: &[String]) -> Result<Vec<String>> {
    inputs
        .iter()
        .map(|input| {
            let id = store.normalize_id(input);
            if store.exists(&id) {
                Ok(id)
            } else {
                Err(SnipzError::NotFound(id))
            }
        })
        .collect()
}

/// Case-insensitive title order, identifier as the tie breaker.
pub fn sort_for_display(snippets: &mut [crate::model::Snippet]) {
    snippets.sort_by(|a, b| {
        a.title()
            .to_lowercase()
            .cmp(&b.title().to_lowercase())
            .then_with(|| a.uid.cmp(&b.uid))
    });
}
