//! Terminal styling for `skein plan` text reports.
//!
//! Fields are named after what they mark in a report, not after the hue,
//! so the report code reads `{name}Pet{reset}` and the palette can change
//! without touching it.

/// Escape sequences for each report role. Empty strings when disabled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Colors {
    /// Logical file paths and declaration names (blue).
    pub name: &'static str,
    /// Module specifiers in import/export lines (green).
    pub specifier: &'static str,
    /// Final names that differ from the requested name (yellow).
    pub renamed: &'static str,
    /// Keywords, arrows and renderer tags (dim).
    pub muted: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    pub const ON: Self = Self {
        name: "\x1b[34m",
        specifier: "\x1b[32m",
        renamed: "\x1b[33m",
        muted: "\x1b[2m",
        reset: "\x1b[0m",
    };

    pub const OFF: Self = Self {
        name: "",
        specifier: "",
        renamed: "",
        muted: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    pub fn is_enabled(&self) -> bool {
        !self.reset.is_empty()
    }

    /// Wrap `text` in `style`, closing with `reset`.
    ///
    /// ```
    /// use skein_core::Colors;
    ///
    /// let on = Colors::ON;
    /// assert_eq!(on.paint(on.name, "Pet"), "\x1b[34mPet\x1b[0m");
    /// assert_eq!(Colors::OFF.paint("", "Pet"), "Pet");
    /// ```
    pub fn paint(&self, style: &str, text: impl std::fmt::Display) -> String {
        format!("{style}{text}{}", self.reset)
    }
}
