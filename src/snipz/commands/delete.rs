use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;
use log::info;

use super::helpers::resolve_ids;

/// Removes snippets permanently. All ids are checked before anything is
/// deleted.
pub fn run<S: DataStore>(store: &mut S, ids: &[String]) -> Result<CmdResult> {
    let resolved = resolve_ids(store, ids)?;
    let mut result = CmdResult::default();

    for id in resolved {
        let snippet = store.read(&id)?;
        store.delete(&id)?;
        info!("deleted snippet {}", id);
        result.add_message(CmdMessage::success(format!(
            "Snippet deleted ({}): {}",
            id,
            snippet.title()
        )));
        result.affected_snippets.push(snippet);
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::list;
    use crate::error::SnipzError;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn deletes_for_good() {
        let mut fixture = StoreFixture::new()
            .with_snippet("Keep", &[], "")
            .with_snippet("Drop", &[], "");
        let id = fixture.id_of("Drop");

        let result = run(&mut fixture.store, &[id.clone()]).unwrap();
        assert_eq!(result.affected_snippets[0].title(), "Drop");
        assert!(!fixture.store.exists(&id));

        let listed = list::run(&fixture.store, None).unwrap();
        assert_eq!(listed.listed_snippets.len(), 1);
        assert_eq!(listed.listed_snippets[0].title(), "Keep");
    }

    #[test]
    fn unknown_id_deletes_nothing() {
        let mut fixture = StoreFixture::new().with_snippet("A", &[], "");
        let id = fixture.id_of("A");
        let err = run(&mut fixture.store, &[id.clone(), "missing".to_string()]).unwrap_err();
        assert!(matches!(err, SnipzError::NotFound(_)));
        assert!(fixture.store.exists(&id));
    }
}
