//! Template directory resolution
//!
//! Probes an ordered list of candidate locations and picks the first one that
//! is an existing directory. Probing has no side effects, so resolving twice
//! against an unchanged filesystem gives the same answer.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::TemplatesConfig;
use crate::layout::{DEFAULT_TEMPLATE_PATHS, TEMPLATE_DIR_ENV};

/// One place a template directory might live
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateCandidate {
    /// Directory named by an environment variable (trimmed, `~/` expanded)
    Env(String),
    /// Fixed location
    Path(PathBuf),
    /// Location relative to the current working directory at probe time
    CwdRelative(PathBuf),
}

impl TemplateCandidate {
    /// Parse a configured search path
    ///
    /// `~/x` expands against the home directory, absolute paths are taken as
    /// is, anything else is relative to the current directory.
    pub fn parse(raw: &str) -> Self {
        debug!(%raw, "TemplateCandidate::parse: called");
        if let Some(rest) = raw.strip_prefix("~/")
            && let Some(home) = dirs::home_dir()
        {
            return Self::Path(home.join(rest));
        }
        let path = PathBuf::from(raw);
        if path.is_absolute() {
            Self::Path(path)
        } else {
            Self::CwdRelative(path)
        }
    }

    /// The concrete path this candidate points at right now, if any
    pub fn location(&self) -> Option<PathBuf> {
        match self {
            Self::Env(var) => {
                let value = std::env::var(var).ok()?;
                let value = value.trim();
                if value.is_empty() {
                    debug!(%var, "TemplateCandidate::location: env override empty");
                    return None;
                }
                Some(expand_home(value))
            }
            Self::Path(path) => Some(path.clone()),
            Self::CwdRelative(path) => match std::env::current_dir() {
                Ok(cwd) => Some(cwd.join(path)),
                Err(e) => {
                    debug!(error = %e, "TemplateCandidate::location: no current directory");
                    None
                }
            },
        }
    }

    /// The location, but only when it exists and is a directory
    pub fn probe(&self) -> Option<PathBuf> {
        let path = self.location()?;
        if path.is_dir() {
            debug!(?self, path = %path.display(), "TemplateCandidate::probe: hit");
            Some(path)
        } else {
            debug!(?self, path = %path.display(), "TemplateCandidate::probe: miss");
            None
        }
    }
}

fn expand_home(value: &str) -> PathBuf {
    if value == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    } else if let Some(rest) = value.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(value)
}

/// Finds the template directory from an ordered candidate list
#[derive(Debug, Clone)]
pub struct TemplateResolver {
    candidates: Vec<TemplateCandidate>,
    #[cfg(test)]
    resolve_calls: std::sync::Arc<std::sync::atomic::AtomicUsize>,
}

impl TemplateResolver {
    /// Create a resolver over explicit candidates (probed in the given order)
    pub fn new(candidates: Vec<TemplateCandidate>) -> Self {
        debug!(count = candidates.len(), "TemplateResolver::new: called");
        Self {
            candidates,
            #[cfg(test)]
            resolve_calls: Default::default(),
        }
    }

    /// Build the candidate list from configuration: env override first, then the configured paths
    pub fn from_config(config: &TemplatesConfig) -> Self {
        debug!(?config, "TemplateResolver::from_config: called");
        let mut candidates = Vec::with_capacity(config.paths.len() + 1);
        if !config.env_var.trim().is_empty() {
            candidates.push(TemplateCandidate::Env(config.env_var.clone()));
        }
        candidates.extend(config.paths.iter().map(|p| TemplateCandidate::parse(p)));
        Self::new(candidates)
    }

    pub fn candidates(&self) -> &[TemplateCandidate] {
        &self.candidates
    }

    /// First candidate that is an existing directory, or `None`
    pub fn resolve(&self) -> Option<PathBuf> {
        debug!("TemplateResolver::resolve: called");
        #[cfg(test)]
        self.resolve_calls.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        let found = self.candidates.iter().find_map(TemplateCandidate::probe);
        match &found {
            Some(dir) => debug!(dir = %dir.display(), "TemplateResolver::resolve: resolved"),
            None => debug!("TemplateResolver::resolve: no template directory found"),
        }
        found
    }
}

impl Default for TemplateResolver {
    fn default() -> Self {
        let mut candidates = vec![TemplateCandidate::Env(TEMPLATE_DIR_ENV.to_string())];
        candidates.extend(DEFAULT_TEMPLATE_PATHS.iter().map(|p| {
            let path = Path::new(p);
            if path.is_absolute() {
                TemplateCandidate::Path(path.to_path_buf())
            } else {
                TemplateCandidate::CwdRelative(path.to_path_buf())
            }
        }));
        Self::new(candidates)
    }
}

#[cfg(test)]
impl TemplateResolver {
    pub(crate) fn resolve_calls(&self) -> usize {
        self.resolve_calls.load(std::sync::atomic::Ordering::SeqCst)
    }
}

/// Resolve with the built-in candidate list
pub fn resolve_template_dir() -> Option<PathBuf> {
    TemplateResolver::default().resolve()
}
