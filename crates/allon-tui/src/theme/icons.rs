//! Icon set for the TUI.
//!
//! Provides `IconSet` which resolves icons at runtime based on `IconMode`.
//! - `IconMode::Emoji` - colored emoji badges
//! - `IconMode::Unicode` - single-width glyphs that work in all terminals

use allon_app::config::IconMode;
use allon_core::ProjectStatus;

/// Braille spinner frames shown while a request is outstanding
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Runtime icon resolver.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    /// Badge for a project status
    pub fn status(&self, status: ProjectStatus) -> &'static str {
        match (self.mode, status) {
            (IconMode::Emoji, ProjectStatus::Active) => "🟢",
            (IconMode::Emoji, ProjectStatus::Completed) => "✅",
            (IconMode::Emoji, ProjectStatus::Inactive) => "🔴",
            (IconMode::Emoji, ProjectStatus::Pending) => "🟡",
            (IconMode::Emoji, ProjectStatus::Unknown) => "❓",
            (IconMode::Unicode, ProjectStatus::Active) => "\u{25cf}", // ●
            (IconMode::Unicode, ProjectStatus::Completed) => "\u{2713}", // ✓
            (IconMode::Unicode, ProjectStatus::Inactive) => "\u{25cb}", // ○
            (IconMode::Unicode, ProjectStatus::Pending) => "\u{25d0}", // ◐
            (IconMode::Unicode, ProjectStatus::Unknown) => "?",
        }
    }

    pub fn selected(&self) -> &'static str {
        match self.mode {
            IconMode::Emoji => "📌",
            IconMode::Unicode => "[x]",
        }
    }

    pub fn unselected(&self) -> &'static str {
        match self.mode {
            IconMode::Emoji => "  ",
            IconMode::Unicode => "[ ]",
        }
    }

    pub fn cursor(&self) -> &'static str {
        "\u{25b8}" // ▸
    }

    pub fn warning(&self) -> &'static str {
        "\u{26a0}" // ⚠
    }

    pub fn dot(&self) -> &'static str {
        "\u{25cf}" // ●
    }
}

/// Human-readable label for a status badge
pub fn status_label(status: ProjectStatus) -> &'static str {
    match status {
        ProjectStatus::Active => "Active",
        ProjectStatus::Completed => "Completed",
        ProjectStatus::Inactive => "Inactive",
        ProjectStatus::Pending => "Pending",
        ProjectStatus::Unknown => "Unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emoji_status_badges() {
        let icons = IconSet::new(IconMode::Emoji);
        assert_eq!(icons.status(ProjectStatus::Active), "🟢");
        assert_eq!(icons.status(ProjectStatus::Completed), "✅");
        assert_eq!(icons.status(ProjectStatus::Inactive), "🔴");
        assert_eq!(icons.status(ProjectStatus::Pending), "🟡");
    }

    #[test]
    fn test_unicode_badges_are_not_emoji() {
        let icons = IconSet::new(IconMode::Unicode);
        assert_eq!(icons.status(ProjectStatus::Active), "●");
        assert_eq!(icons.unselected(), "[ ]");
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(status_label(ProjectStatus::Pending), "Pending");
        assert_eq!(status_label(ProjectStatus::Unknown), "Unknown");
    }
}
