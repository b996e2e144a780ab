//! Route patterns and their mapping to URLs and output files.
//!
//! Patterns use bracket placeholders (`/news/[id]`). A pattern whose
//! last segment has an extension is an endpoint and keeps its
//! filename; every other pattern maps to `…/index.html`.
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;

pub const INDEX_ROUTE: &str = "/news";
pub const ARTICLE_ROUTE: &str = "/news/[id]";
pub const NOT_FOUND_ROUTE: &str = "404.html";

/// Raw values for the placeholders of a route pattern.
#[derive(Clone, Default, Debug)]
pub struct RouteParams(pub FxHashMap<String, String>);

impl RouteParams {
    pub fn single(key: &str, value: impl Into<String>) -> Self {
        let mut map = FxHashMap::default();
        map.insert(key.to_string(), value.into());
        Self(map)
    }
}

#[derive(Debug, PartialEq)]
struct ParameterDef {
    key: String,
    index: usize,
    length: usize,
}

fn extract_params(raw_route: &str) -> Vec<ParameterDef> {
    let mut params = Vec::new();
    let mut start = 0;

    while let Some(bracket_pos) = raw_route[start..].find('[') {
        let abs_pos = start + bracket_pos;

        let Some(end_bracket) = raw_route[abs_pos + 1..].find(']') else {
            break;
        };
        let end_pos = abs_pos + 1 + end_bracket;

        params.push(ParameterDef {
            key: raw_route[abs_pos + 1..end_pos].to_string(),
            index: abs_pos,
            length: end_pos - abs_pos + 1,
        });

        start = end_pos + 1;
    }

    params
}

fn is_endpoint(raw_route: &str) -> bool {
    Path::new(raw_route).extension().is_some()
}

/// Substitutes every placeholder of `raw_route` with its value.
///
/// Panics when a placeholder has no value; a route built with missing
/// parameters is a programming error, not a recoverable condition.
pub fn url_for(raw_route: &str, params: &RouteParams) -> String {
    let mut route = raw_route.to_string();

    // Right-to-left so earlier indices stay valid after replacement
    for def in extract_params(raw_route).into_iter().rev() {
        let value = params.0.get(&def.key).unwrap_or_else(|| {
            panic!("Route {:?} is missing parameter {:?}", raw_route, def.key)
        });
        route.replace_range(def.index..def.index + def.length, value);
    }

    route
}

/// Convenience for the one dynamic route of the site.
pub fn article_url(id: u32) -> String {
    url_for(ARTICLE_ROUTE, &RouteParams::single("id", id.to_string()))
}

/// The output file a route renders to, under `output_dir`.
pub fn file_path_for(raw_route: &str, params: &RouteParams, output_dir: &Path) -> PathBuf {
    let route = url_for(raw_route, params);
    let cleaned = route.trim_start_matches('/');

    if is_endpoint(raw_route) {
        output_dir.join(cleaned)
    } else if cleaned.is_empty() {
        output_dir.join("index.html")
    } else {
        output_dir.join(cleaned).join("index.html")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_substitutes_a_single_parameter() {
        let params = RouteParams::single("id", "42");
        assert_eq!(url_for("/news/[id]", &params), "/news/42");
    }

    #[test]
    fn url_substitutes_parameters_of_different_lengths() {
        let mut map = FxHashMap::default();
        map.insert("category".to_string(), "development-experience".to_string());
        map.insert("page".to_string(), "1".to_string());
        let params = RouteParams(map);

        assert_eq!(
            url_for("/news/[category]/[page]", &params),
            "/news/development-experience/1"
        );
    }

    #[test]
    fn url_without_parameters_is_unchanged() {
        assert_eq!(url_for("/news", &RouteParams::default()), "/news");
    }

    #[test]
    #[should_panic(expected = "missing parameter")]
    fn url_panics_on_a_missing_parameter() {
        url_for("/news/[id]", &RouteParams::default());
    }

    #[test]
    fn file_path_maps_pages_to_index_html() {
        let params = RouteParams::single("id", "7");
        assert_eq!(
            file_path_for("/news/[id]", &params, Path::new("dist")),
            Path::new("dist/news/7/index.html")
        );
        assert_eq!(
            file_path_for("/news", &RouteParams::default(), Path::new("dist")),
            Path::new("dist/news/index.html")
        );
    }

    #[test]
    fn file_path_maps_the_root_to_index_html() {
        assert_eq!(
            file_path_for("/", &RouteParams::default(), Path::new("dist")),
            Path::new("dist/index.html")
        );
    }

    #[test]
    fn file_path_keeps_endpoint_filenames() {
        assert_eq!(
            file_path_for("404.html", &RouteParams::default(), Path::new("dist")),
            Path::new("dist/404.html")
        );
    }

    #[test]
    fn extract_params_finds_every_placeholder() {
        let params = extract_params("/news/[category]/[page]");
        assert_eq!(params.len(), 2);
        assert_eq!(params[0].key, "category");
        assert_eq!(params[1].key, "page");
    }
}
