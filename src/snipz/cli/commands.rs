use super::print::{print_full_snippets, print_messages, print_snippet_table};
use super::prompt;
use super::setup::{Cli, Commands};
use clap::Parser;
use env_logger::{Builder, Env};
use log::debug;
use snipz::commands::{create, delete, list, paths, view, CmdMessage};
use snipz::config::{
    expand_home, validate_document_dir, SnipzConfig, CONFIG_ENV, DEFAULT_DOCUMENT_DIR,
};
use snipz::editor::{open_in_editor, resolve_editor};
use snipz::error::{Result, SnipzError};
use snipz::picker::{select_snippet, DEFAULT_PICKER};
use snipz::store::fs::FileStore;
use snipz::store::DataStore;
use std::path::{Path, PathBuf};

const DEFAULT_TITLE: &str = "untitled";
const DEFAULT_TAG: &str = "untagged";

struct AppContext {
    config: SnipzConfig,
    store: FileStore,
}

impl AppContext {
    fn editor(&self) -> Result<String> {
        resolve_editor(self.config.editor_binary.as_deref())
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let config_path = resolve_config_path(cli.config)?;
    debug!("using config {}", config_path.display());

    match cli.command {
        Commands::Init { dir, editor, force } => handle_init(&config_path, dir, editor, force),
        Commands::New {
            title,
            tags,
            no_editor,
        } => handle_new(&mut init_context(&config_path)?, title, tags, no_editor),
        Commands::List { tag, json } => handle_list(&init_context(&config_path)?, tag, json),
        Commands::Show { id, body_only } => {
            handle_show(&init_context(&config_path)?, id, body_only)
        }
        Commands::Edit { id } => handle_edit(&init_context(&config_path)?, id),
        Commands::Path { ids } => handle_paths(&init_context(&config_path)?, ids),
        Commands::Delete { id, yes } => handle_delete(&mut init_context(&config_path)?, id, yes),
    }
}

fn init_logger(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    Builder::from_env(Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

/// `--config`, then `$SNIPZ_CONFIG`, then `~/.snipz.yaml`.
fn resolve_config_path(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = flag {
        return expand_home(&path);
    }
    match std::env::var(CONFIG_ENV) {
        Ok(value) if !value.trim().is_empty() => expand_home(Path::new(value.trim())),
        _ => SnipzConfig::default_path(),
    }
}

fn init_context(config_path: &Path) -> Result<AppContext> {
    let config = SnipzConfig::load(config_path)?;
    let store = config.open_store()?;
    Ok(AppContext { config, store })
}

fn handle_init(
    config_path: &Path,
    dir: Option<String>,
    editor: Option<String>,
    force: bool,
) -> Result<()> {
    if config_path.exists() && !force {
        return Err(SnipzError::Config(format!(
            "config already exists at {}, use --force to overwrite",
            config_path.display()
        )));
    }

    let raw_dir = match dir {
        Some(dir) => dir,
        None => prompt::read_with_default("Snippet directory", DEFAULT_DOCUMENT_DIR)?,
    };
    let document_dir = validate_document_dir(&raw_dir)?;

    let editor = match editor {
        Some(editor) => Some(editor),
        None => match resolve_editor(None) {
            Ok(found) => Some(prompt::read_with_default("Editor", &found)?),
            Err(_) => Some(prompt::read_line("Editor: ")?),
        },
    };

    // The store resolves relative paths, so the saved config is always absolute.
    let store = FileStore::open(&document_dir)?;
    let mut config = SnipzConfig::new(store.root());
    if let Some(editor) = editor.map(|e| e.trim().to_string()).filter(|e| !e.is_empty()) {
        config = config.with_editor(editor);
    }
    config.save(config_path)?;

    print_messages(&[
        CmdMessage::success(format!("Config written to {}", config_path.display())),
        CmdMessage::info(format!("Snippets live in {}", store.root().display())),
    ]);
    Ok(())
}

fn handle_new(
    ctx: &mut AppContext,
    title: Option<String>,
    tags: Vec<String>,
    no_editor: bool,
) -> Result<()> {
    let title = match title {
        Some(title) => title,
        None => prompt::read_with_default("Title", DEFAULT_TITLE)?,
    };
    let title = match title.trim() {
        "" => DEFAULT_TITLE.to_string(),
        trimmed => trimmed.to_string(),
    };
    let tags = clean_tags(tags);

    let result = create::run(&mut ctx.store, &title, &tags)?;
    print_messages(&result.messages);

    for (snippet, path) in result.affected_snippets.iter().zip(&result.snippet_paths) {
        if !no_editor {
            open_in_editor(&ctx.editor()?, path)?;
            print_messages(&[read_back(ctx, &snippet.uid)?]);
        }
        println!("{}", path.display());
    }
    Ok(())
}

/// Trims, drops blanks and repeats; an empty result becomes `untagged`.
fn clean_tags(tags: Vec<String>) -> Vec<String> {
    let mut cleaned: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.trim();
        if !tag.is_empty() && !cleaned.iter().any(|t| t == tag) {
            cleaned.push(tag.to_string());
        }
    }
    if cleaned.is_empty() {
        cleaned.push(DEFAULT_TAG.to_string());
    }
    cleaned
}

fn handle_list(ctx: &AppContext, tag: Option<String>, json: bool) -> Result<()> {
    let result = list::run(&ctx.store, tag.as_deref())?;
    if json {
        println!("{}", serde_json::to_string_pretty(&result.listed_snippets)?);
        return Ok(());
    }
    print_snippet_table(&result.listed_snippets);
    print_messages(&result.messages);
    Ok(())
}

/// The given id, or one chosen in the fuzzy finder.
fn select_id(ctx: &AppContext, id: Option<String>) -> Result<String> {
    match id {
        Some(id) => Ok(id),
        None => {
            let snippets = list::run(&ctx.store, None)?.listed_snippets;
            select_snippet(DEFAULT_PICKER, &snippets)
        }
    }
}

fn handle_show(ctx: &AppContext, id: Option<String>, body_only: bool) -> Result<()> {
    let id = select_id(ctx, id)?;
    let result = view::run(&ctx.store, &[id])?;
    print_full_snippets(&result.listed_snippets, body_only);
    Ok(())
}

fn handle_edit(ctx: &AppContext, id: Option<String>) -> Result<()> {
    let id = ctx.store.normalize_id(&select_id(ctx, id)?);
    let result = paths::run(&ctx.store, &[id.clone()])?;
    let editor = ctx.editor()?;
    for path in &result.snippet_paths {
        open_in_editor(&editor, path)?;
    }

    print_messages(&[read_back(ctx, &id)?]);
    Ok(())
}

/// Re-reads a snippet after an editor session. A file the editor left
/// undecodable is reported, not treated as a failure.
fn read_back(ctx: &AppContext, id: &str) -> Result<CmdMessage> {
    match ctx.store.read(id) {
        Ok(snippet) => Ok(CmdMessage::success(format!(
            "Snippet saved ({}): {}",
            snippet.uid,
            snippet.title()
        ))),
        Err(e @ SnipzError::MalformedData { .. }) => Ok(CmdMessage::warning(format!(
            "Snippet {} no longer reads back: {}",
            id, e
        ))),
        Err(e) => Err(e),
    }
}

fn handle_paths(ctx: &AppContext, ids: Vec<String>) -> Result<()> {
    let ids = if ids.is_empty() {
        vec![select_id(ctx, None)?]
    } else {
        ids
    };
    let result = paths::run(&ctx.store, &ids)?;
    for path in &result.snippet_paths {
        println!("{}", path.display());
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, id: Option<String>, yes: bool) -> Result<()> {
    let id = select_id(ctx, id)?;
    let target = view::run(&ctx.store, &[id.clone()])?;

    if !yes {
        for snippet in &target.listed_snippets {
            let question = format!(
                "Delete '{}' ({})? This cannot be undone.",
                snippet.title(),
                snippet.uid
            );
            if !prompt::confirm(&question)? {
                print_messages(&[CmdMessage::info("Nothing deleted.")]);
                return Ok(());
            }
        }
    }

    let result = delete::run(&mut ctx.store, &[id])?;
    print_messages(&result.messages);
    Ok(())
}
