use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;
use log::info;

pub fn run<S: DataStore>(store: &mut S, title: &str, tags: &[String]) -> Result<CmdResult> {
    let (id, path) = store.create(title, tags)?;
    info!("created snippet {} at {}", id, path.display());
    let snippet = store.read(&id)?;

    let mut result = CmdResult::default()
        .with_affected_snippets(vec![snippet])
        .with_snippet_paths(vec![path]);
    result.add_message(CmdMessage::success(format!(
        "Snippet created ({}): {}",
        id, title
    )));
    Ok(result)
}
