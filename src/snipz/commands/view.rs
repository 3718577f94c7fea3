use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

use super::helpers::resolve_ids;

pub fn run<S: DataStore>(store: &S, ids: &[String]) -> Result<CmdResult> {
    let snippets = resolve_ids(store, ids)?
        .iter()
        .map(|id| store.read(id))
        .collect::<Result<Vec<_>>>()?;
    Ok(CmdResult::default().with_listed_snippets(snippets))
}
