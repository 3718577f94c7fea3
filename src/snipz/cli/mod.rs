//! # CLI Behavior
//!
//! The `snipz` binary is one client of the library. It is the only place that
//! touches the terminal: prompts, colors, tables, exit codes.
//!
//! ## Config Resolution
//!
//! `--config PATH`, else `$SNIPZ_CONFIG`, else `~/.snipz.yaml`. Every command
//! except `init` needs an existing config.
//!
//! ## Selecting a Snippet
//!
//! `show`, `edit` and `delete` take an optional identifier. Without one, the
//! snippets are handed to `fzf` and the chosen line's identifier is used. A
//! file name with the store suffix works too, so shell completion on the
//! store directory gives usable arguments.
//!
//! ## Verbosity
//!
//! Warnings only by default. `-v` adds info, `-vv` debug, `-vvv` trace.
//! `RUST_LOG` overrides all of it.
//!
//! ## Module Structure
//!
//! - `commands`: dispatch and per-command handlers
//! - `print`: output formatting
//! - `prompt`: line input and confirmations
//! - `setup`: argument parsing via clap

mod commands;
mod print;
mod prompt;
pub mod setup;

pub use commands::run;
