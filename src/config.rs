//! Construction options for the live preview controller.

/// Bootstrap document loaded into the frame before any content arrives.
pub const DEFAULT_PREVIEW_LOADER: &str = "/templates/previewloader.html";

/// Recognized construction options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewOptions {
    /// URL of the frame's bootstrap document.
    pub preview_loader: String,
    /// Forward snapshots to the frame even when the editor reports a
    /// parse error.
    pub ignore_errors: bool,
}

impl PreviewOptions {
    /// Options with the default loader URL and error suppression on.
    pub fn new() -> Self {
        Self {
            preview_loader: DEFAULT_PREVIEW_LOADER.to_string(),
            ignore_errors: false,
        }
    }

    /// Use an alternate bootstrap document URL.
    #[must_use]
    pub fn with_preview_loader(mut self, url: impl Into<String>) -> Self {
        self.preview_loader = url.into();
        self
    }

    /// Forward snapshots even on parse errors.
    #[must_use]
    pub const fn with_ignore_errors(mut self, ignore: bool) -> Self {
        self.ignore_errors = ignore;
        self
    }
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_PREVIEW_LOADER, PreviewOptions};

    #[test]
    fn test_defaults() {
        let options = PreviewOptions::default();
        assert_eq!(options.preview_loader, DEFAULT_PREVIEW_LOADER);
        assert!(!options.ignore_errors);
    }

    #[test]
    fn test_builder_overrides() {
        let options = PreviewOptions::new()
            .with_preview_loader("/alt/loader.html")
            .with_ignore_errors(true);
        assert_eq!(options.preview_loader, "/alt/loader.html");
        assert!(options.ignore_errors);
    }
}
