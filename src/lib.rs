//! Gazette generates a small static news site: a listing page, one
//! detail page per article, and a not-found page.
//!
//! The core is the [`resolver`]: given a raw identifier from a route,
//! it resolves the matching article and selects up to three related
//! articles from an injected, read-only [`articles::ArticleProvider`].
//! [`publish()`] drives that resolver over every enumerated identifier
//! and writes the rendered pages to disk.
//!
//! ## Example
//! ```no_run
//! use gazette::{BuildOptions, BuildOutput, publish};
//! use gazette::articles::load_articles;
//! use gazette::errors::GazetteError;
//!
//! fn main() -> Result<BuildOutput, GazetteError> {
//!     let articles = load_articles("content/articles.json")?;
//!     publish(&articles, BuildOptions::default())
//! }
//! ```

// Modules the end-user will interact directly or indirectly with
pub mod articles;
pub mod errors;
pub mod pages;
pub mod resolver;
pub mod routes;
pub mod sitemap;

// Internal modules
mod build;
mod logging;

// Exports for end-users
pub use build::metadata::{BuildOutput, PageOutput, StaticFileOutput};
pub use build::options::BuildOptions;

use articles::ArticleProvider;
use errors::GazetteError;

/// The version of Gazette being used.
///
/// Rendered as a generator tag into the output HTML.
pub const GENERATOR: &str = concat!("Gazette v", env!("CARGO_PKG_VERSION"));

/// 🗞️ Gazette entrypoint. Renders every page of the site and writes
/// the output files.
///
/// ## Example
/// Should be called from the main function of the binary crate.
/// ```no_run
/// use gazette::{BuildOptions, publish};
/// use gazette::articles::InMemoryArticles;
///
/// # fn main() -> Result<(), gazette::errors::GazetteError> {
/// let articles = InMemoryArticles::new(vec![]);
/// publish(&articles, BuildOptions::default())?;
/// # Ok(())
/// # }
/// ```
pub fn publish(
    articles: &dyn ArticleProvider,
    options: BuildOptions,
) -> Result<BuildOutput, GazetteError> {
    logging::init_logging();

    build::execute_build(articles, &options)
}
