use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

use super::helpers::sort_for_display;

pub fn run<S: DataStore>(store: &S, tag: Option<&str>) -> Result<CmdResult> {
    let mut snippets: Vec<_> = store
        .list()?
        .into_iter()
        .filter(|s| tag.map_or(true, |t| s.has_tag(t)))
        .collect();
    sort_for_display(&mut snippets);

    let mut result = CmdResult::default();
    if snippets.is_empty() {
        result.add_message(CmdMessage::info("No snippets found."));
    }
    Ok(result.with_listed_snippets(snippets))
}
