use std::fs;
use std::io::Write;
use std::path::Path;

/// Options for sitemap generation.
#[derive(Debug, Clone)]
pub struct SitemapOptions {
    /// Whether to generate a sitemap. Default: `false`
    pub enabled: bool,
    /// Output filename. Default: `"sitemap.xml"`
    pub filename: String,
}

impl Default for SitemapOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            filename: "sitemap.xml".to_string(),
        }
    }
}

/// A single URL entry in the sitemap.
#[derive(Debug)]
pub struct SitemapEntry {
    pub loc: String,
}

impl SitemapEntry {
    fn to_xml(&self) -> String {
        format!("<url><loc>{}</loc></url>", escape_xml(&self.loc))
    }
}

/// Escapes XML special characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Writes a sitemap for the given entries into `output_dir`.
///
/// Entries are sorted by URL for consistency. Does nothing when
/// disabled or when there are no entries.
pub fn generate_sitemap(
    entries: Vec<SitemapEntry>,
    output_dir: &Path,
    options: &SitemapOptions,
) -> Result<(), std::io::Error> {
    if !options.enabled || entries.is_empty() {
        return Ok(());
    }

    let mut sorted_entries = entries;
    sorted_entries.sort_by(|a, b| a.loc.cmp(&b.loc));

    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">");
    for entry in &sorted_entries {
        xml.push_str(&entry.to_xml());
    }
    xml.push_str("</urlset>");

    let sitemap_path = output_dir.join(&options.filename);
    let mut file = fs::File::create(&sitemap_path)?;
    file.write_all(xml.as_bytes())?;

    log::info!(
        target: "sitemap",
        "Generated sitemap with {} URLs at {}",
        sorted_entries.len(),
        sitemap_path.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("hello"), "hello");
        assert_eq!(escape_xml("a&b"), "a&amp;b");
        assert_eq!(escape_xml("<tag>"), "&lt;tag&gt;");
        assert_eq!(
            escape_xml("it's \"quoted\""),
            "it&apos;s &quot;quoted&quot;"
        );
    }

    #[test]
    fn test_sitemap_entry_to_xml() {
        let entry = SitemapEntry {
            loc: "https://example.com/news/1".to_string(),
        };

        assert_eq!(
            entry.to_xml(),
            "<url><loc>https://example.com/news/1</loc></url>"
        );
    }

    #[test]
    fn test_generate_sitemap_writes_sorted_entries() {
        let dir = tempfile::tempdir().unwrap();
        let entries = vec![
            SitemapEntry {
                loc: "https://example.com/news/2".to_string(),
            },
            SitemapEntry {
                loc: "https://example.com/news/1".to_string(),
            },
        ];
        let options = SitemapOptions {
            enabled: true,
            ..Default::default()
        };

        generate_sitemap(entries, dir.path(), &options).unwrap();

        let xml = fs::read_to_string(dir.path().join("sitemap.xml")).unwrap();
        let first = xml.find("https://example.com/news/1").unwrap();
        let second = xml.find("https://example.com/news/2").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_generate_sitemap_disabled_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let entries = vec![SitemapEntry {
            loc: "https://example.com/news/1".to_string(),
        }];

        generate_sitemap(entries, dir.path(), &SitemapOptions::default()).unwrap();

        assert!(!dir.path().join("sitemap.xml").exists());
    }
}
