use gazette::articles::load_articles;
use gazette::errors::GazetteError;
use gazette::sitemap::SitemapOptions;
use gazette::{BuildOptions, BuildOutput, publish};

fn main() -> Result<BuildOutput, GazetteError> {
    let articles = load_articles("content/articles.json")?;

    publish(
        &articles,
        BuildOptions {
            base_url: Some("https://gazette.example.com".to_string()),
            sitemap: SitemapOptions {
                enabled: true,
                ..Default::default()
            },
            ..Default::default()
        },
    )
}
