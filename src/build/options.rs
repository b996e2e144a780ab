use std::path::PathBuf;

use crate::sitemap::SitemapOptions;

/// Build options. Passed to [`publish()`](crate::publish).
pub struct BuildOptions {
    /// Base URL for the site, e.g. `https://example.com`. Required for
    /// sitemap generation; without it the sitemap step is skipped.
    pub base_url: Option<String>,

    pub output_dir: PathBuf,
    pub static_dir: PathBuf,

    /// Whether to clean the output directory before building.
    pub clean_output_dir: bool,

    /// Options for sitemap generation. See [`SitemapOptions`].
    pub sitemap: SitemapOptions,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            base_url: None,
            output_dir: "dist".into(),
            static_dir: "static".into(),
            clean_output_dir: true,
            sitemap: SitemapOptions::default(),
        }
    }
}
