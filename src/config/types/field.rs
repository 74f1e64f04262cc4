//! Config field path used in diagnostics.

/// A dotted path to a config field, e.g. `site.url`.
///
/// Sections expose their field paths as associated constants:
///
/// ```ignore
/// diag.warn(PluginSectionConfig::TW_SITE_NAME, "should start with `@`");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}
