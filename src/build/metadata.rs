use std::{process::Termination, time::Instant};

use rustc_hash::FxHashMap;

/// Metadata returned by [`publish()`](crate::publish) for a single
/// page after a successful build.
#[derive(Debug)]
pub struct PageOutput {
    pub route: String,
    pub file_path: String,
    pub params: Option<FxHashMap<String, String>>,
}

/// Metadata returned by [`publish()`](crate::publish) for a single
/// static file copied to the output directory without processing.
#[derive(Debug)]
pub struct StaticFileOutput {
    pub file_path: String,
    pub original_path: String,
}

/// Metadata returned by [`publish()`](crate::publish) after a
/// successful build.
#[derive(Debug)]
pub struct BuildOutput {
    pub start_time: Instant,
    pub pages: Vec<PageOutput>,
    pub static_files: Vec<StaticFileOutput>,
}

impl BuildOutput {
    pub fn new(start_time: Instant) -> Self {
        Self {
            start_time,
            pages: Vec::new(),
            static_files: Vec::new(),
        }
    }

    pub(crate) fn add_page(
        &mut self,
        route: String,
        file_path: String,
        params: Option<FxHashMap<String, String>>,
    ) {
        self.pages.push(PageOutput {
            route,
            file_path,
            params,
        });
    }

    pub(crate) fn add_static_file(&mut self, file_path: String, original_path: String) {
        self.static_files.push(StaticFileOutput {
            file_path,
            original_path,
        });
    }
}

impl Default for BuildOutput {
    fn default() -> Self {
        Self::new(Instant::now())
    }
}

impl Termination for BuildOutput {
    fn report(self) -> std::process::ExitCode {
        0.into()
    }
}
