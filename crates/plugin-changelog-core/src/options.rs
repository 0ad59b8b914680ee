//! Changelog generation options.

/// What to generate a changelog for.
///
/// Empty strings mean "unset".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogOptions {
    /// Plugin name, used as tag prefix and commit scope.
    pub plugin: String,

    /// Range start. Inferred from the latest plugin tag when empty.
    pub from: String,

    /// Range end.
    pub to: String,

    /// Separator between plugin name and version in tag names.
    pub tag_separator: String,
}

impl Default for ChangelogOptions {
    fn default() -> Self {
        Self {
            plugin: String::new(),
            from: String::new(),
            to: "HEAD".to_string(),
            tag_separator: "-".to_string(),
        }
    }
}

impl ChangelogOptions {
    /// Creates options with the defaults: every commit up to `HEAD`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the plugin name.
    #[must_use]
    pub fn plugin(mut self, plugin: impl Into<String>) -> Self {
        self.plugin = plugin.into();
        self
    }

    /// Sets the range start.
    #[must_use]
    pub fn from(mut self, from: impl Into<String>) -> Self {
        self.from = from.into();
        self
    }

    /// Sets the range end.
    #[must_use]
    pub fn to(mut self, to: impl Into<String>) -> Self {
        self.to = to.into();
        self
    }

    /// Sets the tag separator.
    #[must_use]
    pub fn tag_separator(mut self, separator: impl Into<String>) -> Self {
        self.tag_separator = separator.into();
        self
    }

    /// Returns the prefix the plugin's release tags start with.
    ///
    /// Empty when no plugin is set, so any tag qualifies.
    #[must_use]
    pub fn tag_prefix(&self) -> String {
        if self.plugin.is_empty() {
            String::new()
        } else {
            format!("{}{}", self.plugin, self.tag_separator)
        }
    }
}
