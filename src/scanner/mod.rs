//! Media directory scanner.
//!
//! Walks a directory tree, keeps files with a media extension, and computes
//! path fragments for each one in parallel. Leading-number stripping is
//! decided per directory from the names of its media files.

use crate::config::Config;
use rayon::prelude::*;
use romtag_common::paths::matches_extensions;
use romtag_common::{Error, MediaKind, Result};
use romtag_parser::config::ParserConfig;
use romtag_parser::{path_fragments, PathFragments};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// One scanned media file.
#[derive(Debug, Clone, Serialize)]
pub struct ScanEntry {
    #[serde(flatten)]
    pub fragments: PathFragments,
    pub kind: Option<MediaKind>,
}

/// Result of scanning a directory tree.
#[derive(Debug, Default)]
pub struct ScanReport {
    /// Entries sorted by path.
    pub entries: Vec<ScanEntry>,
    /// Directories that held at least one media file.
    pub directories: usize,
    /// Directories detected as list-numbered.
    pub numbered_directories: usize,
}

/// Scanner for discovering media files and deriving their fragments.
pub struct Scanner {
    config: Config,
}

impl Scanner {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Scan `root` recursively.
    pub fn scan(&self, root: &Path) -> Result<ScanReport> {
        let metadata = match fs::metadata(root) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(Error::not_found(root.display().to_string()));
            }
            Err(e) => return Err(e.into()),
        };
        if !metadata.is_dir() {
            return Err(Error::invalid_input(format!(
                "not a directory: {}",
                root.display()
            )));
        }

        let by_dir = self.discover(root);
        let directories = by_dir.len();

        let base = self.config.parser.parser_config();
        let stripping = ParserConfig {
            strip_leading_numbers: true,
            ..base.clone()
        };

        let mut numbered_directories = 0;
        let mut jobs: Vec<(PathBuf, &ParserConfig)> = Vec::new();
        for (dir, files) in by_dir {
            let strip = self.strip_numbers_in(&dir, &files);
            if strip && !self.config.parser.strip_leading_numbers {
                numbered_directories += 1;
            }
            let config = if strip { &stripping } else { &base };
            jobs.extend(files.into_iter().map(|file| (file, config)));
        }

        let mut entries = self.build_entries(jobs)?;
        entries.sort_by(|a, b| a.fragments.path.cmp(&b.fragments.path));

        info!(
            "Scanned {} media files in {} directories ({} list-numbered)",
            entries.len(),
            directories,
            numbered_directories
        );

        Ok(ScanReport {
            entries,
            directories,
            numbered_directories,
        })
    }

    /// Media files under `root`, grouped by parent directory.
    fn discover(&self, root: &Path) -> BTreeMap<PathBuf, Vec<PathBuf>> {
        let scan = &self.config.scan;
        let mut walker = WalkDir::new(root).follow_links(scan.follow_links);
        if let Some(depth) = scan.max_depth {
            walker = walker.max_depth(depth);
        }

        let mut by_dir: BTreeMap<PathBuf, Vec<PathBuf>> = BTreeMap::new();
        for entry in walker.into_iter().filter_map(|e| match e {
            Ok(entry) => Some(entry),
            Err(err) => {
                warn!("Skipping unreadable entry: {}", err);
                None
            }
        }) {
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.into_path();
            if !matches_extensions(&path, &scan.extensions) {
                continue;
            }
            let dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
            by_dir.entry(dir).or_default().push(path);
        }

        by_dir
    }

    fn strip_numbers_in(&self, dir: &Path, files: &[PathBuf]) -> bool {
        let names: Vec<String> = files
            .iter()
            .filter_map(|f| f.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .collect();
        let strip = self.config.parser.strips_leading_numbers(&names);
        if strip && !self.config.parser.strip_leading_numbers {
            debug!("List numbering detected in {:?}", dir);
        }
        strip
    }

    fn build_entries(&self, jobs: Vec<(PathBuf, &ParserConfig)>) -> Result<Vec<ScanEntry>> {
        let build = || {
            jobs.into_par_iter()
                .map(|(path, config)| ScanEntry {
                    kind: MediaKind::from_path(&path),
                    fragments: path_fragments(&path.to_string_lossy(), config),
                })
                .collect::<Vec<ScanEntry>>()
        };

        match self.config.scan.threads {
            0 => Ok(build()),
            threads => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| Error::internal(format!("failed to build thread pool: {e}")))?;
                Ok(pool.install(build))
            }
        }
    }
}
