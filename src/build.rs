use std::{
    fs, io,
    path::{Path, PathBuf},
    time::Instant,
};

use colored::{ColoredString, Colorize};
use log::info;

use crate::{
    articles::ArticleProvider,
    build::{metadata::BuildOutput, options::BuildOptions},
    errors::GazetteError,
    logging::{FormatElapsedTimeOptions, format_elapsed_time, print_title},
    pages,
    resolver::Resolver,
    routes::{self, RouteParams},
    sitemap::{SitemapEntry, generate_sitemap},
};

pub mod metadata;
pub mod options;

/// Renders every page of the site and writes the output tree.
///
/// Detail pages go through the same `resolve` path a request for that
/// identifier would take, so what gets built is exactly what the
/// resolver contract promises.
pub fn execute_build(
    articles: &dyn ArticleProvider,
    options: &BuildOptions,
) -> Result<BuildOutput, GazetteError> {
    let build_start = Instant::now();
    let mut build_metadata = BuildOutput::new(build_start);

    if options.clean_output_dir && options.output_dir.exists() {
        fs::remove_dir_all(&options.output_dir)?;
    }
    fs::create_dir_all(&options.output_dir)?;

    info!(target: "build", "Output directory: {}", options.output_dir.display());

    print_title("generating pages");
    let pages_start = Instant::now();

    let route_format_options = FormatElapsedTimeOptions {
        additional_fn: Some(&|msg: ColoredString| {
            let formatted_msg = format!("(+{})", msg);
            if msg.fgcolor.is_none() {
                formatted_msg.dimmed()
            } else {
                formatted_msg.normal()
            }
        }),
        ..Default::default()
    };

    let section_format_options = FormatElapsedTimeOptions {
        sec_red_threshold: 5,
        sec_yellow_threshold: 1,
        millis_red_threshold: None,
        millis_yellow_threshold: None,
        ..Default::default()
    };

    // News index
    let index_start = Instant::now();
    let index_path =
        routes::file_path_for(routes::INDEX_ROUTE, &RouteParams::default(), &options.output_dir);
    write_route_file(pages::index_page(articles).into_string().as_bytes(), &index_path)?;
    info!(
        target: "pages",
        "{} -> {} {}",
        routes::INDEX_ROUTE,
        index_path.to_string_lossy().dimmed(),
        format_elapsed_time(index_start.elapsed(), &route_format_options)
    );
    build_metadata.add_page(
        routes::INDEX_ROUTE.to_string(),
        index_path.to_string_lossy().to_string(),
        None,
    );

    // One detail page per enumerated identifier
    let resolver = Resolver::new(articles);
    let ids = resolver.enumerate_ids();

    if ids.is_empty() {
        log::warn!(
            target: "build",
            "{} has no articles to render. No detail pages will be generated.",
            routes::ARTICLE_ROUTE.bold()
        );
    } else {
        info!(target: "build", "{}", routes::ARTICLE_ROUTE.bold());
    }

    for raw_id in &ids {
        let page_start = Instant::now();

        let view = resolver.resolve(raw_id)?;
        let params = RouteParams::single("id", raw_id.clone());
        let file_path = routes::file_path_for(routes::ARTICLE_ROUTE, &params, &options.output_dir);

        write_route_file(pages::article_page(&view).into_string().as_bytes(), &file_path)?;

        info!(
            target: "pages",
            "├─ {} {}",
            file_path.to_string_lossy().dimmed(),
            format_elapsed_time(page_start.elapsed(), &route_format_options)
        );
        build_metadata.add_page(
            routes::ARTICLE_ROUTE.to_string(),
            file_path.to_string_lossy().to_string(),
            Some(params.0),
        );
    }

    // Not-found page
    let not_found_start = Instant::now();
    let not_found_path = routes::file_path_for(
        routes::NOT_FOUND_ROUTE,
        &RouteParams::default(),
        &options.output_dir,
    );
    write_route_file(pages::not_found_page().into_string().as_bytes(), &not_found_path)?;
    info!(
        target: "pages",
        "{} -> {} {}",
        routes::NOT_FOUND_ROUTE,
        not_found_path.to_string_lossy().dimmed(),
        format_elapsed_time(not_found_start.elapsed(), &route_format_options)
    );
    build_metadata.add_page(
        routes::NOT_FOUND_ROUTE.to_string(),
        not_found_path.to_string_lossy().to_string(),
        None,
    );

    info!(
        target: "pages",
        "{}",
        format!(
            "generated {} pages in {}",
            build_metadata.pages.len(),
            format_elapsed_time(pages_start.elapsed(), &section_format_options)
        )
        .bold()
    );

    if let Some(base_url) = &options.base_url {
        let base = base_url.trim_end_matches('/');
        let mut entries = vec![SitemapEntry {
            loc: format!("{base}{}", routes::INDEX_ROUTE),
        }];
        entries.extend(ids.iter().map(|raw_id| SitemapEntry {
            loc: format!(
                "{base}{}",
                routes::url_for(routes::ARTICLE_ROUTE, &RouteParams::single("id", raw_id.clone()))
            ),
        }));

        generate_sitemap(entries, &options.output_dir, &options.sitemap)?;
    }

    if options.static_dir.exists() {
        let static_start = Instant::now();
        print_title("copying static files");

        copy_recursively(&options.static_dir, &options.output_dir, &mut build_metadata)?;

        info!(
            target: "build",
            "{}",
            format!(
                "Static files copied in {}",
                format_elapsed_time(static_start.elapsed(), &FormatElapsedTimeOptions::default())
            )
            .bold()
        );
    }

    info!(target: "SKIP_FORMAT", "{}", "");
    info!(
        target: "build",
        "{}",
        format!(
            "Build completed in {}",
            format_elapsed_time(build_start.elapsed(), &section_format_options)
        )
        .bold()
    );

    Ok(build_metadata)
}

fn copy_recursively(
    source: impl AsRef<Path>,
    destination: impl AsRef<Path>,
    build_metadata: &mut BuildOutput,
) -> io::Result<()> {
    fs::create_dir_all(&destination)?;
    for entry in fs::read_dir(source)? {
        let entry = entry?;
        let filetype = entry.file_type()?;
        if filetype.is_dir() {
            copy_recursively(
                entry.path(),
                destination.as_ref().join(entry.file_name()),
                build_metadata,
            )?;
        } else {
            fs::copy(entry.path(), destination.as_ref().join(entry.file_name()))?;

            build_metadata.add_static_file(
                destination
                    .as_ref()
                    .join(entry.file_name())
                    .to_string_lossy()
                    .to_string(),
                entry.path().to_string_lossy().to_string(),
            );
        }
    }
    Ok(())
}

fn write_route_file(content: &[u8], file_path: &PathBuf) -> Result<(), io::Error> {
    if let Some(parent_dir) = file_path.parent() {
        fs::create_dir_all(parent_dir)?
    }

    fs::write(file_path, content)?;

    Ok(())
}
