use crate::directory::Directory;
use crate::errors::AppError;
use crate::model::RepeaterRecord;
use crate::xml_out::write_atomic;
use chrono::{DateTime, Local};
use log::info;
use std::fs;
use std::path::Path;

pub const DEFAULT_CACHE_FILE: &str = "BM.json";

/// Returns the repeater catalog, downloading it only when forced or not cached yet.
pub fn load(cache_path: &Path, force_refresh: bool, source: &dyn Directory) -> Result<Vec<RepeaterRecord>, AppError> {
    if force_refresh || !cache_path.exists() {
        info!("Downloading repeater list");
        let body = source.fetch_catalog()?;
        write_atomic(cache_path, &body)?;
        info!("Saved to {}", cache_path.display());
        return parse(&body);
    }

    if let Ok(modified) = fs::metadata(cache_path).and_then(|m| m.modified()) {
        let at: DateTime<Local> = modified.into();
        info!("Using cached {} from {}", cache_path.display(), at.format("%Y-%m-%d %H:%M"));
    }
    let body = fs::read(cache_path)
        .map_err(|e| AppError::IO(format!("read cache {}: {}", cache_path.display(), e)))?;
    parse(&body)
}

pub fn parse(body: &[u8]) -> Result<Vec<RepeaterRecord>, AppError> {
    serde_json::from_slice(body).map_err(|e| AppError::MalformedCatalog(format!("{}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::fake::FakeDirectory;

    const CATALOG: &str = r#"[
        {"id": 260101, "callsign": "SR5WA", "rx": "439.4125", "tx": "431.8125",
         "colorcode": 1, "lat": 52.2, "lng": 21.0, "city": "Warszawa", "last_seen": "", "pep": 25}
    ]"#;

    fn online() -> FakeDirectory {
        FakeDirectory { catalog: Some(CATALOG.into()), ..Default::default() }
    }

    #[test]
    fn downloads_and_caches_when_absent() {
        let dir = tempfile::tempdir().unwrap();
        let cache = dir.path().join("BM.json");
        let src = online();

        let list = load(&cache, false, &src).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(src.catalog_calls.get(), 1);
        assert_eq!(fs::read_to_string(&cache).unwrap(), CATALOG);

        // second load comes from the cache
        let list = load(&cache, false, &src).unwrap();
        assert_eq!(list[0].callsign, "SR5WA");
        assert_eq!(src.catalog_calls.get(), 1);
    }

    #[test]
    fn force_refetches() {
        let dir = tempfile::tempdir().unwrap();
        let cache = dir.path().join("BM.json");
        fs::write(&cache, "[]").unwrap();
        let src = online();
        let list = load(&cache, true, &src).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(src.catalog_calls.get(), 1);
    }

    #[test]
    fn refresh_replaces_cache_whole() {
        let dir = tempfile::tempdir().unwrap();
        let cache = dir.path().join("cache/BM.json");
        fs::create_dir_all(cache.parent().unwrap()).unwrap();
        fs::write(&cache, "[{\"id\": 1").unwrap();

        load(&cache, true, &online()).unwrap();
        assert_eq!(fs::read_to_string(&cache).unwrap(), CATALOG);
        let left: Vec<_> = fs::read_dir(cache.parent().unwrap()).unwrap().collect();
        assert_eq!(left.len(), 1);
    }

    #[test]
    fn failed_refresh_keeps_old_cache() {
        let dir = tempfile::tempdir().unwrap();
        let cache = dir.path().join("BM.json");
        fs::write(&cache, "[]").unwrap();
        let err = load(&cache, true, &FakeDirectory::default()).unwrap_err();
        assert!(matches!(err, AppError::SourceUnavailable(_)));
        assert_eq!(fs::read_to_string(&cache).unwrap(), "[]");
    }

    #[test]
    fn unavailable_source_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let cache = dir.path().join("BM.json");
        let err = load(&cache, false, &FakeDirectory::default()).unwrap_err();
        assert!(matches!(err, AppError::SourceUnavailable(_)));
        assert!(!cache.exists());
    }

    #[test]
    fn garbage_cache_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let cache = dir.path().join("BM.json");
        fs::write(&cache, "<html>maintenance</html>").unwrap();
        let err = load(&cache, false, &FakeDirectory::default()).unwrap_err();
        assert!(matches!(err, AppError::MalformedCatalog(_)));
    }
}
