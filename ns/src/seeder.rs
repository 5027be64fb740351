//! Workspace seeding
//!
//! Creates whichever managed files are missing and leaves everything else
//! alone. Every step is best-effort: a failure narrows the result instead of
//! aborting the caller.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::SeedError;
use crate::layout::{
    HISTORY_FILE, HISTORY_HEADER, MEMORY_DIR, MEMORY_FILE, MEMORY_HEADER, REQUIRED_FILES, SKILLS_DIR,
    fallback_content, memory_relative,
};
use crate::loader::load_template;
use crate::resolver::TemplateResolver;

/// Seeds workspaces, resolving templates through its resolver
#[derive(Debug, Clone, Default)]
pub struct WorkspaceSeeder {
    resolver: TemplateResolver,
}

impl WorkspaceSeeder {
    pub fn new(resolver: TemplateResolver) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &TemplateResolver {
        &self.resolver
    }

    /// Create missing workspace files.
    ///
    /// Returns the workspace-relative paths written by this call, required
    /// files first (in [`REQUIRED_FILES`] order) then the memory logs. Files
    /// that already exist are never rewritten and never reported.
    pub fn seed(&self, workspace: &Path, template_override: Option<&Path>) -> Vec<String> {
        debug!(workspace = %workspace.display(), ?template_override, "seed: called");
        let mut created = Vec::new();

        if let Err(e) = create_dir(workspace) {
            warn!(error = %e, "seed: cannot create workspace, nothing seeded");
            return created;
        }

        let template_dir = match template_override {
            Some(dir) => Some(dir.to_path_buf()),
            None => self.resolver.resolve(),
        };
        debug!(?template_dir, "seed: template directory");

        for filename in REQUIRED_FILES {
            let dst = workspace.join(filename);
            if dst.exists() {
                debug!(%filename, "seed: already present, skipping");
                continue;
            }

            let content = template_dir
                .as_deref()
                .and_then(|dir| load_template(dir, filename))
                .unwrap_or_else(|| {
                    debug!(%filename, "seed: no template, using fallback header");
                    fallback_content(filename)
                });

            match write_new(&dst, &content) {
                Ok(()) => created.push(filename.to_string()),
                Err(e) => log_skip(&e),
            }
        }

        let memory_dir = workspace.join(MEMORY_DIR);
        if let Err(e) = create_dir(&memory_dir) {
            warn!(error = %e, "seed: cannot create memory directory");
            return created;
        }

        for (filename, content) in [(MEMORY_FILE, MEMORY_HEADER), (HISTORY_FILE, HISTORY_HEADER)] {
            let dst = memory_dir.join(filename);
            if dst.exists() {
                debug!(%filename, "seed: memory file present, skipping");
                continue;
            }
            match write_new(&dst, content) {
                Ok(()) => created.push(memory_relative(filename)),
                Err(e) => log_skip(&e),
            }
        }

        if let Err(e) = create_dir(&workspace.join(SKILLS_DIR)) {
            debug!(error = %e, "seed: skills directory not created");
        }

        if created.is_empty() {
            debug!("seed: workspace already seeded");
        } else {
            info!(count = created.len(), workspace = %workspace.display(), "Seeded workspace");
        }
        created
    }
}

/// Seed `workspace` using the built-in template search order.
///
/// With `template_override` set, that directory is used instead of searching.
pub fn seed_workspace(workspace: &Path, template_override: Option<&Path>) -> Vec<String> {
    WorkspaceSeeder::default().seed(workspace, template_override)
}

fn create_dir(path: &Path) -> Result<(), SeedError> {
    fs::create_dir_all(path).map_err(|source| SeedError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}

/// Another seeder (or a dangling symlink) got there first; only real failures warn
fn log_skip(e: &SeedError) {
    if e.is_already_exists() {
        debug!(path = %e.path().display(), "seed: path already exists, skipping");
    } else {
        warn!(error = %e, path = %e.path().display(), "seed: skipping file");
    }
}

/// Write `content` to a file that must not exist yet
fn write_new(path: &Path, content: &str) -> Result<(), SeedError> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|source| {
            if source.kind() == ErrorKind::AlreadyExists {
                SeedError::AlreadyExists(path.to_path_buf())
            } else {
                SeedError::Write {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

    file.write_all(content.as_bytes()).map_err(|source| SeedError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Whether a managed path exists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathState {
    Present,
    Missing,
}

impl PathState {
    fn of(path: &Path) -> Self {
        if path.exists() { Self::Present } else { Self::Missing }
    }
}

/// Snapshot of which managed paths exist in a workspace
#[derive(Debug, Clone)]
pub struct WorkspaceStatus {
    pub workspace: PathBuf,
    /// Workspace-relative file paths in seeding order
    pub files: Vec<(String, PathState)>,
    pub skills_dir: PathState,
}

impl WorkspaceStatus {
    /// True when every managed path exists
    pub fn is_complete(&self) -> bool {
        self.skills_dir == PathState::Present && self.files.iter().all(|(_, s)| *s == PathState::Present)
    }

    pub fn missing(&self) -> Vec<&str> {
        self.files
            .iter()
            .filter(|(_, s)| *s == PathState::Missing)
            .map(|(p, _)| p.as_str())
            .collect()
    }
}

/// Report which managed paths exist, without changing anything
pub fn inspect_workspace(workspace: &Path) -> WorkspaceStatus {
    debug!(workspace = %workspace.display(), "inspect_workspace: called");
    let mut files: Vec<(String, PathState)> = REQUIRED_FILES
        .iter()
        .map(|f| (f.to_string(), PathState::of(&workspace.join(f))))
        .collect();

    let memory_dir = workspace.join(MEMORY_DIR);
    for filename in [MEMORY_FILE, HISTORY_FILE] {
        files.push((memory_relative(filename), PathState::of(&memory_dir.join(filename))));
    }

    WorkspaceStatus {
        workspace: workspace.to_path_buf(),
        files,
        skills_dir: if workspace.join(SKILLS_DIR).is_dir() {
            PathState::Present
        } else {
            PathState::Missing
        },
    }
}
