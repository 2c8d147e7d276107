use crossterm::style::{Color, Stylize};

/// Design tokens for the installer output.
pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const PROGRESS: &str = "●";
    pub const PENDING: &str = "○";
    pub const DIFF: &str = "Δ";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const PROGRESS: &str = "[..]";
    pub const PENDING: &str = "[ ]";
    pub const DIFF: &str = "[DIFF]";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Progress,
    Pending,
    Diff,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => icons::SUCCESS,
            (true, Icon::Error) => icons::ERROR,
            (true, Icon::Warning) => icons::WARNING,
            (true, Icon::Progress) => icons::PROGRESS,
            (true, Icon::Pending) => icons::PENDING,
            (true, Icon::Diff) => icons::DIFF,
            (false, Icon::Success) => icons_ascii::SUCCESS,
            (false, Icon::Error) => icons_ascii::ERROR,
            (false, Icon::Warning) => icons_ascii::WARNING,
            (false, Icon::Progress) => icons_ascii::PROGRESS,
            (false, Icon::Pending) => icons_ascii::PENDING,
            (false, Icon::Diff) => icons_ascii::DIFF,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success => colors::SUCCESS,
            Icon::Error => colors::ERROR,
            Icon::Warning | Icon::Progress => colors::WARNING,
            Icon::Pending => colors::DIM,
            Icon::Diff => colors::INFO,
        };
        format!("{}", s.with(color))
    }
}

/// Color a whole line, or leave it alone
pub fn paint(s: &str, color: Color, supports_color: bool) -> String {
    if supports_color {
        format!("{}", s.with(color))
    } else {
        s.to_string()
    }
}
