//! # Snipz Architecture
//!
//! Snipz is a personal snippet manager: short pieces of text, each with a
//! title and some tags, kept as plain files in one directory. The library
//! owns the file format and the directory; the `snipz` binary is a client.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prompts, prints, picks exit codes      │
//! │  - Launches the editor and the fuzzy finder                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - create / list / view / paths / delete                    │
//! │  - Returns CmdResult, never prints                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait                                          │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Codec (codec.rs)                                           │
//! │  - Snippet <-> bytes, YAML front matter between `---` lines │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## File Format
//!
//! ```text
//! ---
//! title: Kernel version
//! tags:
//! - linux
//! - kernel
//! ---
//! uname -r
//! ```
//!
//! The identifier is the file name without its suffix and is not repeated
//! inside the file.
//!
//! ## No I/O Assumptions in Core
//!
//! Below the CLI, code takes and returns Rust values, never writes to
//! stdout/stderr and never exits the process. Logging goes through the `log`
//! facade; the binary decides whether anything is printed.
//!
//! ## Testing Strategy
//!
//! 1. **Codec and store**: unit tests next to the code, with `tempfile`
//!    directories for `FileStore`.
//! 2. **Commands**: unit tests against `InMemoryStore` through
//!    [`store::memory::fixtures::StoreFixture`].
//! 3. **Binary**: `tests/` drives `snipz` end to end with `assert_cmd`.
//!
//! ## Module Overview
//!
//! - [`codec`]: front-matter encoding and decoding
//! - [`commands`]: one module per user-facing operation
//! - [`config`]: the `~/.snipz.yaml` file
//! - [`editor`]: external editor resolution and launch
//! - [`error`]: error enum and `Result` alias
//! - [`model`]: `Snippet` and `Metadata`
//! - [`picker`]: fuzzy-finder selection
//! - [`store`]: storage abstraction and backends

pub mod codec;
pub mod commands;
pub mod config;
pub mod editor;
pub mod error;
pub mod model;
pub mod picker;
pub mod store;
