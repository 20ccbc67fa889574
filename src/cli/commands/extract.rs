//! Record extraction from saved pages.

use std::io::Write;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::Serialize;
use tracing::{info, warn};

use crate::config::Config;
use crate::document::RawDocument;
use crate::error::{Error, Result, ResultExt};
use crate::record::CanonicalRecord;
use crate::sites::{Resolved, SiteAdapter, SiteName, SiteRegistry};

/// JSON shape printed for each extracted page
#[derive(Debug, Serialize)]
pub struct ExtractOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    #[serde(flatten)]
    pub source: Option<Resolved>,
    pub metadata: CanonicalRecord,
}

/// Extract a single saved page
pub fn cmd_extract(
    config: &Config,
    path: &Path,
    url: Option<&str>,
    pretty: bool,
) -> anyhow::Result<()> {
    let registry = SiteRegistry::with_defaults(&config.extraction);

    let (adapter, source) = match url {
        Some(url) => {
            let resolved = registry.resolve(url)?;
            let adapter = registry
                .by_site(resolved.site)
                .ok_or_else(|| Error::UnknownSite(url.to_string()))?;
            (adapter, Some(resolved))
        }
        None => (default_adapter(&registry)?, None),
    };

    let metadata = extract_file(adapter, path)?;
    let output = ExtractOutput {
        path: None,
        source,
        metadata,
    };

    let json = if pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{json}");
    Ok(())
}

/// Extract every HTML file under a directory in parallel
pub fn cmd_batch(config: &Config, path: &Path, recursive: bool) -> anyhow::Result<()> {
    let registry = SiteRegistry::with_defaults(&config.extraction);
    let adapter = default_adapter(&registry)?;

    let files = collect_html_files(path, recursive)?;
    if files.is_empty() {
        eprintln!("No HTML files found in {}", path.display());
        return Ok(());
    }
    info!(count = files.len(), path = %path.display(), "Extracting pages");

    let results: Vec<(PathBuf, Result<CanonicalRecord>)> = files
        .par_iter()
        .map(|file| (file.clone(), extract_file(adapter, file)))
        .collect();

    let mut stdout = std::io::stdout().lock();
    let mut errors = 0usize;
    for (file, result) in results {
        match result {
            Ok(metadata) => {
                let output = ExtractOutput {
                    path: Some(file),
                    source: None,
                    metadata,
                };
                writeln!(stdout, "{}", serde_json::to_string(&output)?)?;
            }
            Err(e) => {
                errors += 1;
                warn!(path = %file.display(), error = %e, "Skipping page");
            }
        }
    }

    eprintln!(
        "Extracted {} of {} pages ({} errors)",
        files.len() - errors,
        files.len(),
        errors
    );
    Ok(())
}

fn default_adapter(registry: &SiteRegistry) -> Result<&dyn SiteAdapter> {
    registry
        .by_site(SiteName::RateYourMusic)
        .ok_or_else(|| Error::config("no site adapters registered"))
}

/// Read, parse and extract one saved page.
pub(crate) fn extract_file(adapter: &dyn SiteAdapter, path: &Path) -> Result<CanonicalRecord> {
    let html = std::fs::read_to_string(path)
        .with_context(format!("reading {}", path.display()))?;
    if html.trim().is_empty() {
        return Err(Error::document(path, "file is empty"));
    }
    let document = RawDocument::parse(&html);
    adapter.scrape(Some(&document))
}

/// Collect `.html` / `.htm` files, sorted for stable output
pub(crate) fn collect_html_files(path: &Path, recursive: bool) -> Result<Vec<PathBuf>> {
    if !path.is_dir() {
        return Ok(if is_html_file(path) {
            vec![path.to_path_buf()]
        } else {
            Vec::new()
        });
    }

    let walker = walkdir::WalkDir::new(path);
    let walker = if recursive { walker } else { walker.max_depth(1) };

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| Error::document(path, e.to_string()))?;
        if entry.file_type().is_file() && is_html_file(entry.path()) {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}

/// Check if a path has an HTML file extension
fn is_html_file(path: &Path) -> bool {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_lowercase());
    matches!(ext.as_deref(), Some("html" | "htm"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sites::RateYourMusic;
    use crate::test_utils::KIND_OF_BLUE_HTML;

    #[test]
    fn test_collect_html_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.html"), "x").unwrap();
        std::fs::write(dir.path().join("a.HTM"), "x").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "x").unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        std::fs::write(dir.path().join("nested").join("c.html"), "x").unwrap();

        let flat = collect_html_files(dir.path(), false).unwrap();
        let names: Vec<_> = flat
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["a.HTM", "b.html"]);

        let deep = collect_html_files(dir.path(), true).unwrap();
        assert_eq!(deep.len(), 3);
    }

    #[test]
    fn test_extract_file() {
        let dir = tempfile::tempdir().unwrap();
        let page = dir.path().join("kind-of-blue.html");
        std::fs::write(&page, KIND_OF_BLUE_HTML).unwrap();

        let record = extract_file(&RateYourMusic::new(), &page).unwrap();
        assert_eq!(record.title, "Kind of Blue");
    }

    #[test]
    fn test_extract_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let rym = RateYourMusic::new();

        let missing = extract_file(&rym, &dir.path().join("missing.html")).unwrap_err();
        assert!(missing.to_string().contains("missing.html"));

        let empty = dir.path().join("empty.html");
        std::fs::write(&empty, "  \n").unwrap();
        assert!(matches!(
            extract_file(&rym, &empty),
            Err(Error::Document { .. })
        ));
    }

    #[test]
    fn test_output_shape_with_source() {
        let output = ExtractOutput {
            path: None,
            source: Some(Resolved {
                site: SiteName::RateYourMusic,
                id_type: crate::sites::IdType::RateYourMusicAlbum,
                identifier: "can/tago-mago".into(),
                url: "https://rateyourmusic.com/release/album/can/tago-mago/".into(),
            }),
            metadata: CanonicalRecord::default(),
        };
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["site"], "rateyourmusic");
        assert_eq!(json["identifier"], "can/tago-mago");
        assert_eq!(json["metadata"]["title"], "Unknown Album");
        assert!(json.get("path").is_none());
    }
}
