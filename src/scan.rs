//! Project file census used by the scan_project tool.

use ignore::WalkBuilder;
use std::collections::HashMap;
use std::path::Path;

/// Per-extension file counts over a project tree.
#[derive(Debug, Default)]
pub struct ScanReport {
    pub total: usize,
    /// `(".cpp", 3)` pairs, sorted by count descending then extension name.
    pub by_extension: Vec<(String, usize)>,
}

impl ScanReport {
    /// Count of files matching any of the given `*.ext` patterns.
    pub fn matching(&self, patterns: &[&str]) -> usize {
        patterns
            .iter()
            .filter_map(|p| p.strip_prefix('*'))
            .map(|suffix| {
                self.by_extension
                    .iter()
                    .find(|(ext, _)| ext == suffix)
                    .map_or(0, |(_, count)| *count)
            })
            .sum()
    }
}

/// Walks the tree rooted at `path`, counting files per extension.
///
/// Respects .gitignore and skips hidden entries, so build output and VCS
/// internals don't distort the census. Extensions compare case-insensitively.
pub fn scan_project(path: &Path) -> ScanReport {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut total = 0;

    for entry in WalkBuilder::new(path).build().flatten() {
        let is_file = entry.file_type().is_some_and(|t| t.is_file());
        if !is_file {
            continue;
        }
        total += 1;

        let ext = entry.path().extension().map_or_else(
            || "(no extension)".to_string(),
            |e| format!(".{}", e.to_string_lossy().to_lowercase()),
        );
        *counts.entry(ext).or_default() += 1;
    }

    let mut by_extension: Vec<_> = counts.into_iter().collect();
    by_extension.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    ScanReport {
        total,
        by_extension,
    }
}
