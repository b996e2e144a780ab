use maud::{Markup, html};

use crate::articles::ArticleProvider;
use crate::pages::layout;
use crate::routes;

/// News listing: every article, in collection order.
pub fn index_page(articles: &dyn ArticleProvider) -> Markup {
    layout(
        "News",
        "Latest news from The Gazette",
        html! {
            div.news-index {
                h1 { "News" }
                ul.news-list {
                    @for article in articles.all() {
                        li.news-entry {
                            a href=(routes::article_url(article.id)) {
                                img src=(article.image) alt=(article.title);
                                div {
                                    span.category-badge { (article.category) }
                                    h2 { (article.title) }
                                    p.entry-meta { (article.date) " · " (article.read_time) }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::articles::{InMemoryArticles, tests::article};

    #[test]
    fn lists_every_article_in_collection_order() {
        let store = InMemoryArticles::new(vec![
            article(3, "Third"),
            article(1, "First"),
            article(2, "Second"),
        ]);

        let html = index_page(&store).into_string();

        let positions: Vec<usize> = ["Third", "First", "Second"]
            .iter()
            .map(|title| html.find(title).unwrap())
            .collect();
        assert!(positions[0] < positions[1] && positions[1] < positions[2]);
        assert!(html.contains("href=\"/news/3\""));
    }
}
