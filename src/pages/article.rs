use maud::{Markup, PreEscaped, html};

use crate::pages::layout;
use crate::resolver::ResolvedView;
use crate::routes;

/// Detail page for a single article: hero image, metadata, the HTML
/// body, an inert share section, and a sidebar of related articles.
///
/// The body is trusted markup from the data source and is injected
/// without sanitization.
pub fn article_page(view: &ResolvedView) -> Markup {
    let article = view.article;

    layout(
        &article.title,
        &article.category,
        html! {
            section.hero {
                img.hero-image src=(article.image) alt=(article.title);
                div.hero-overlay {
                    span.category-badge { (article.category) }
                    span.read-time { (article.read_time) }
                    h1 { (article.title) }
                }
            }
            div.article-container {
                p.back-link {
                    a href=(routes::INDEX_ROUTE) { "← Back to News" }
                }
                article.article-body {
                    div.article-meta {
                        span.article-date { (article.date) }
                        span.article-author { "By " (article.author) }
                    }
                    div.article-content {
                        (PreEscaped(&article.content))
                    }
                    div.share-section {
                        h3 { "Share this article" }
                        div.share-buttons {
                            button type="button" { "Share on Facebook" }
                            button type="button" { "Share on Twitter" }
                            button type="button" { "Share on LinkedIn" }
                        }
                    }
                }
                aside.related-news {
                    h3 { "Related News" }
                    @for related in &view.related {
                        a.related-item href=(routes::article_url(related.id)) {
                            img src=(related.image) alt=(related.title);
                            div {
                                h4 { (related.title) }
                                span.related-date { (related.date) }
                            }
                        }
                    }
                    a.view-all href=(routes::INDEX_ROUTE) { "View All News" }
                }
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::articles::{ArticleProvider, InMemoryArticles, tests::article};
    use crate::resolver::Resolver;

    fn render(store: &InMemoryArticles, raw_id: &str) -> String {
        let resolver = Resolver::new(store);
        article_page(&resolver.resolve(raw_id).unwrap()).into_string()
    }

    #[test]
    fn body_markup_is_injected_unescaped() {
        let store = InMemoryArticles::new(vec![article(1, "One")]);
        let html = render(&store, "1");

        assert!(html.contains("<h2>Heading</h2>"));
        assert!(!html.contains("&lt;h2&gt;"));
    }

    #[test]
    fn hero_and_metadata_come_from_the_article() {
        let store = InMemoryArticles::new(vec![article(1, "One")]);
        let entry = store.get_by_id(1).unwrap().clone();
        let html = render(&store, "1");

        assert!(html.contains(&entry.image));
        assert!(html.contains(&entry.category));
        assert!(html.contains(&entry.read_time));
        assert!(html.contains("By Jo Writer"));
        assert!(html.contains("Share this article"));
    }

    #[test]
    fn sidebar_links_only_non_self_related_articles() {
        let store = InMemoryArticles::new(
            (1..=5).map(|id| article(id, &format!("Article {id}"))).collect(),
        );
        let html = render(&store, "3");

        for id in [1, 2, 4] {
            assert!(html.contains(&format!("href=\"/news/{id}\"")));
        }
        assert!(!html.contains("href=\"/news/3\""));
        assert!(!html.contains("href=\"/news/5\""));
    }
}
