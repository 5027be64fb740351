//! NanoSeed - first-run seeding for agent workspaces
//!
//! An agent runtime reads its identity, configuration and memory from a
//! workspace directory. In a fresh container that directory may be empty, so
//! NanoSeed materialises sane defaults the first time it is used and never
//! touches a file once it exists.
//!
//! # Layout
//!
//! ```text
//! <workspace>/
//! ├── AGENTS.md
//! ├── SOUL.md
//! ├── USER.md
//! ├── TOOLS.md
//! ├── IDENTITY.md
//! ├── HEARTBEAT.md
//! ├── memory/
//! │   ├── MEMORY.md    # long-term memory, seeded with a header
//! │   └── HISTORY.md   # history log, seeded empty
//! └── skills/          # created empty
//! ```
//!
//! # Example
//!
//! ```ignore
//! use nanoseed::seed_workspace;
//!
//! let created = seed_workspace(Path::new("/data/workspace"), None);
//! for path in &created {
//!     println!("created {}", path);
//! }
//! ```
//!
//! Seeding is best-effort: no failure is ever returned to the caller. A
//! failure only shows up as a shorter list of created paths.

pub mod cli;
pub mod config;
mod error;
pub mod layout;
mod loader;
mod resolver;
mod seeder;

pub use config::{Config, TemplatesConfig};
pub use error::SeedError;
pub use layout::{REQUIRED_FILES, TEMPLATE_DIR_ENV, fallback_content};
pub use loader::load_template;
pub use resolver::{TemplateCandidate, TemplateResolver, resolve_template_dir};
pub use seeder::{PathState, WorkspaceSeeder, WorkspaceStatus, inspect_workspace, seed_workspace};
