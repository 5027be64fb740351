//! Names and default content of everything the seeder manages

/// Files the agent runtime expects at the workspace root, in seeding order
pub const REQUIRED_FILES: [&str; 6] = [
    "AGENTS.md",
    "SOUL.md",
    "USER.md",
    "TOOLS.md",
    "IDENTITY.md",
    "HEARTBEAT.md",
];

/// Subdirectory holding the memory logs
pub const MEMORY_DIR: &str = "memory";

/// Long-term memory log, under [`MEMORY_DIR`]
pub const MEMORY_FILE: &str = "MEMORY.md";

/// History log, under [`MEMORY_DIR`]
pub const HISTORY_FILE: &str = "HISTORY.md";

/// Subdirectory for agent skills (created empty)
pub const SKILLS_DIR: &str = "skills";

/// Initial content of the long-term memory log
pub const MEMORY_HEADER: &str = "# Long-term Memory\n\n";

/// Initial content of the history log
pub const HISTORY_HEADER: &str = "";

/// Environment variable naming an explicit template directory
pub const TEMPLATE_DIR_ENV: &str = "NANOBOT_WORKSPACE_TEMPLATE_DIR";

/// Template locations probed after the environment override, in order.
///
/// Absolute entries are image-bake and legacy locations; relative entries are
/// joined to the current directory when probed.
pub const DEFAULT_TEMPLATE_PATHS: [&str; 4] = [
    "/app/openclaw-identity",
    "/app/workspace",
    "openclaw-identity",
    "workspace",
];

/// Minimal content for a required file when no template provides one
pub fn fallback_content(filename: &str) -> String {
    format!("# {}\n", filename)
}

/// Workspace-relative path of a file under the memory directory, `/`-separated
pub fn memory_relative(filename: &str) -> String {
    format!("{}/{}", MEMORY_DIR, filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_content_is_header_line() {
        assert_eq!(fallback_content("SOUL.md"), "# SOUL.md\n");
    }

    #[test]
    fn test_memory_relative() {
        assert_eq!(memory_relative(MEMORY_FILE), "memory/MEMORY.md");
        assert_eq!(memory_relative(HISTORY_FILE), "memory/HISTORY.md");
    }

    #[test]
    fn test_required_files_are_unique_markdown() {
        for (i, name) in REQUIRED_FILES.iter().enumerate() {
            assert!(name.ends_with(".md"), "{} is not markdown", name);
            assert!(!REQUIRED_FILES[i + 1..].contains(name), "{} listed twice", name);
        }
    }
}
