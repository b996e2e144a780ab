//! The article collection and the data provider contract.
//!
//! The collection is supplied once by an external data source and is
//! read-only from the rest of the crate's perspective: nothing here
//! creates, mutates, or destroys article records after construction.
use std::fs;
use std::path::Path;

use log::warn;
use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::errors::ContentError;

/// A single news record.
///
/// `content` is pre-formatted HTML and is treated as opaque by the
/// whole crate: it is neither parsed nor sanitized here. Templates
/// inject it as-is, which means the data source must be trusted.
///
/// Field names follow the upstream data shape on the wire
/// (`readTime`, not `read_time`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Unique, stable, assigned by the data source.
    pub id: u32,
    pub title: String,
    pub category: String,
    pub author: String,
    pub date: String,
    pub read_time: String,
    /// URL or path of the hero image.
    pub image: String,
    /// Pre-formatted HTML body.
    pub content: String,
}

/// Read-only access to the article collection.
///
/// Implementations must return articles from [`all`](Self::all) in a
/// stable order; that order defines related-article selection.
pub trait ArticleProvider: Send + Sync {
    /// Every article, in collection order.
    fn all(&self) -> &[Article];

    /// The article whose id equals `id`, if any.
    fn get_by_id(&self, id: u32) -> Option<&Article> {
        self.all().iter().find(|article| article.id == id)
    }
}

/// The provided [`ArticleProvider`] implementation: a vector in
/// collection order plus an id index for lookups.
#[derive(Debug)]
pub struct InMemoryArticles {
    entries: Vec<Article>,
    by_id: FxHashMap<u32, usize>,
}

impl InMemoryArticles {
    /// Builds the store from articles in collection order.
    ///
    /// Ids are expected to be unique. If a duplicate slips in, the
    /// first occurrence wins and the rest are dropped with a warning,
    /// so that lookups stay single-valued.
    pub fn new(entries: Vec<Article>) -> Self {
        let mut by_id = FxHashMap::default();
        let mut kept: Vec<Article> = Vec::with_capacity(entries.len());

        for article in entries {
            if by_id.contains_key(&article.id) {
                warn!(
                    target: "content",
                    "Duplicate article id {} (`{}`), keeping the first occurrence",
                    article.id,
                    article.title
                );
                continue;
            }
            by_id.insert(article.id, kept.len());
            kept.push(article);
        }

        Self {
            entries: kept,
            by_id,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ArticleProvider for InMemoryArticles {
    fn all(&self) -> &[Article] {
        &self.entries
    }

    fn get_by_id(&self, id: u32) -> Option<&Article> {
        self.by_id.get(&id).map(|&index| &self.entries[index])
    }
}

/// Loads an article collection from a JSON array file.
///
/// The order of the array defines the collection order.
pub fn load_articles(path: impl AsRef<Path>) -> Result<InMemoryArticles, ContentError> {
    let path = path.as_ref();

    let raw = fs::read_to_string(path).map_err(|source| ContentError::ReadFailed {
        path: path.to_path_buf(),
        source,
    })?;

    let entries: Vec<Article> =
        serde_json::from_str(&raw).map_err(|source| ContentError::ParseFailed {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(InMemoryArticles::new(entries))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::io::Write;

    pub(crate) fn article(id: u32, title: &str) -> Article {
        Article {
            id,
            title: title.to_string(),
            category: "Business".to_string(),
            author: "Jo Writer".to_string(),
            date: "March 15, 2024".to_string(),
            read_time: "5 min read".to_string(),
            image: format!("/images/news-{id}.jpg"),
            content: format!("<h2>Heading</h2><p>Body of {title}.</p>"),
        }
    }

    #[test]
    fn get_by_id_hits_and_misses() {
        let store = InMemoryArticles::new(vec![article(1, "One"), article(2, "Two")]);

        assert_eq!(store.get_by_id(2).unwrap().title, "Two");
        assert!(store.get_by_id(3).is_none());
    }

    #[test]
    fn all_preserves_collection_order() {
        let store = InMemoryArticles::new(vec![
            article(5, "Five"),
            article(1, "One"),
            article(3, "Three"),
        ]);

        let ids: Vec<u32> = store.all().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![5, 1, 3]);
    }

    #[test]
    fn duplicate_ids_keep_the_first_occurrence() {
        let store = InMemoryArticles::new(vec![
            article(1, "First"),
            article(1, "Shadowed"),
            article(2, "Two"),
        ]);

        assert_eq!(store.len(), 2);
        assert_eq!(store.get_by_id(1).unwrap().title, "First");
    }

    #[test]
    fn load_articles_reads_a_json_array() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{
                "id": 7,
                "title": "Launch day",
                "category": "Tech",
                "author": "Sam Pen",
                "date": "June 2, 2024",
                "readTime": "3 min read",
                "image": "/images/launch.jpg",
                "content": "<p>We launched.</p>"
            }}]"#
        )
        .unwrap();

        let store = load_articles(file.path()).unwrap();
        assert_eq!(store.len(), 1);
        let entry = store.get_by_id(7).unwrap();
        assert_eq!(entry.read_time, "3 min read");
    }

    #[test]
    fn load_articles_reports_missing_file() {
        let error = load_articles("does/not/exist.json").unwrap_err();
        assert!(matches!(error, ContentError::ReadFailed { .. }));
    }

    #[test]
    fn load_articles_reports_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let error = load_articles(file.path()).unwrap_err();
        assert!(matches!(error, ContentError::ParseFailed { .. }));
    }
}
