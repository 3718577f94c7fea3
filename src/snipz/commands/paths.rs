use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

use super::helpers::resolve_ids;

pub fn run<S: DataStore>(store: &S, ids: &[String]) -> Result<CmdResult> {
    let resolved = resolve_ids(store, ids)?;
    let mut paths = Vec::with_capacity(resolved.len());

    for id in resolved {
        paths.push(store.path_of(&id)?);
    }

    Ok(CmdResult::default().with_snippet_paths(paths))
}
