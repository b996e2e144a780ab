//! The article detail resolver.
//!
//! Maps a raw identifier (as it arrives from a route) to an article
//! plus the related articles shown alongside it, and enumerates every
//! valid identifier for build-time rendering.
use crate::articles::{Article, ArticleProvider};
use crate::errors::ResolveError;

/// How many related articles a detail view carries at most.
pub const RELATED_LIMIT: usize = 3;

/// A resolved article detail view.
///
/// `related` holds up to [`RELATED_LIMIT`] other articles, in
/// collection order, with the resolved article excluded. No padding,
/// no reordering.
#[derive(Debug, PartialEq)]
pub struct ResolvedView<'a> {
    pub article: &'a Article,
    pub related: Vec<&'a Article>,
}

/// Resolves raw identifiers against an injected, read-only article
/// provider. Pure: both operations are functions of the identifier
/// and the collection, with no side effects.
pub struct Resolver<'a> {
    articles: &'a dyn ArticleProvider,
}

impl<'a> Resolver<'a> {
    pub fn new(articles: &'a dyn ArticleProvider) -> Self {
        Self { articles }
    }

    /// Resolves `raw_id` to a detail view, or reports that no article
    /// matches. The caller owns the user-visible not-found behavior.
    pub fn resolve(&self, raw_id: &str) -> Result<ResolvedView<'a>, ResolveError> {
        let article = parse_article_id(raw_id)
            .and_then(|id| u32::try_from(id).ok())
            .and_then(|id| self.articles.get_by_id(id))
            .ok_or_else(|| ResolveError::ArticleNotFound {
                raw_id: raw_id.to_string(),
            })?;

        let related = self
            .articles
            .all()
            .iter()
            .filter(|item| item.id != article.id)
            .take(RELATED_LIMIT)
            .collect();

        Ok(ResolvedView { article, related })
    }

    /// The string form of every article id, in collection order.
    ///
    /// Consumed by the build pipeline (one page per id) and the
    /// sitemap generator.
    pub fn enumerate_ids(&self) -> Vec<String> {
        self.articles
            .all()
            .iter()
            .map(|article| article.id.to_string())
            .collect()
    }
}

/// Parses the leading numeric prefix of an identifier.
///
/// Deliberately loose, matching the documented contract for incoming
/// identifiers: leading whitespace is skipped, an optional `+`/`-`
/// sign is accepted, then decimal digits are consumed up to the first
/// non-digit. `"42abc"` parses as `42`. Returns `None` when no digit
/// is consumed or the value does not fit an `i64`; either way such an
/// identifier can never equal an article id.
pub fn parse_article_id(raw: &str) -> Option<i64> {
    let rest = raw.trim_start();
    let (negative, rest) = match rest.as_bytes().first() {
        Some(b'+') => (false, &rest[1..]),
        Some(b'-') => (true, &rest[1..]),
        _ => (false, rest),
    };

    let mut value: i64 = 0;
    let mut digits = 0usize;
    for c in rest.chars() {
        let Some(digit) = c.to_digit(10) else { break };
        value = value.checked_mul(10)?.checked_add(digit as i64)?;
        digits += 1;
    }

    if digits == 0 {
        return None;
    }

    Some(if negative { -value } else { value })
}
