use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use super::*;

const REGULAR: &[u8] = include_bytes!("../data/fonts/DejaVuSans-Regular.ttf");
const BOLD: &[u8] = include_bytes!("../data/fonts/DejaVuSans-Bold.ttf");

struct CountingSource {
    reads: Arc<AtomicUsize>,
    fail_bold: bool,
}

impl FontSource for CountingSource {
    fn read(&self, weight: FontWeight) -> Result<Vec<u8>, AssetLoadError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        std::thread::sleep(Duration::from_millis(20));
        if self.fail_bold && weight == FontWeight::Bold {
            return Err(AssetLoadError {
                path: "fonts/Test-Bold.ttf".to_string(),
                message: "missing".to_string(),
            });
        }
        Ok(match weight {
            FontWeight::Regular => REGULAR.to_vec(),
            FontWeight::Bold => BOLD.to_vec(),
        })
    }
}

fn temp_dir(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "ogimage_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

#[test]
fn weights_map_to_numeric_values() {
    assert_eq!(FontWeight::Regular.numeric(), 400);
    assert_eq!(FontWeight::Bold.numeric(), 700);
    assert_eq!(FontWeight::from_numeric(700), Some(FontWeight::Bold));
    assert_eq!(FontWeight::from_numeric(500), None);
}

#[test]
fn dir_source_uses_filename_convention() {
    let src = DirFontSource::new("public/fonts", "Inter", "ttf");
    assert_eq!(
        src.path_for(FontWeight::Regular),
        std::path::Path::new("public/fonts").join("Inter-Regular.ttf")
    );
    assert_eq!(
        src.path_for(FontWeight::Bold),
        std::path::Path::new("public/fonts").join("Inter-Bold.ttf")
    );
}

#[test]
fn concurrent_first_calls_read_once() {
    let reads = Arc::new(AtomicUsize::new(0));
    let cache = FontCache::new(CountingSource {
        reads: reads.clone(),
        fail_bold: false,
    });

    let sets: Vec<Arc<FontSet>> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| s.spawn(|| cache.ensure_loaded().unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(reads.load(Ordering::SeqCst), 2);
    for set in &sets {
        assert!(Arc::ptr_eq(set, &sets[0]));
    }
    assert!(cache.is_loaded());

    cache.ensure_loaded().unwrap();
    assert_eq!(reads.load(Ordering::SeqCst), 2);
}

#[test]
fn concurrent_callers_share_the_failure() {
    let reads = Arc::new(AtomicUsize::new(0));
    let cache = FontCache::new(CountingSource {
        reads: reads.clone(),
        fail_bold: true,
    });

    let errors: Vec<OgError> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..6)
            .map(|_| s.spawn(|| cache.ensure_loaded().unwrap_err()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(reads.load(Ordering::SeqCst), 2);
    for err in &errors {
        let OgError::AssetLoad(e) = err else {
            panic!("expected asset load error, got {err:?}");
        };
        assert_eq!(e.path, "fonts/Test-Bold.ttf");
    }
    assert!(!cache.is_loaded());
}

#[test]
fn missing_dir_font_reports_path_and_never_loads() {
    let tmp = temp_dir("fonts_missing");
    std::fs::create_dir_all(&tmp).unwrap();
    std::fs::write(tmp.join("Test-Regular.ttf"), REGULAR).unwrap();

    let cache = FontCache::new(DirFontSource::new(&tmp, "Test", "ttf"));
    let err = cache.ensure_loaded().unwrap_err();
    let OgError::AssetLoad(e) = &err else {
        panic!("expected asset load error, got {err:?}");
    };
    assert!(e.path.ends_with("Test-Bold.ttf"));
    assert!(!cache.is_loaded());

    // The outcome is fixed even if the file shows up later.
    std::fs::write(tmp.join("Test-Bold.ttf"), BOLD).unwrap();
    assert!(cache.ensure_loaded().is_err());

    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn dir_source_loads_both_weights() {
    let tmp = temp_dir("fonts_ok");
    std::fs::create_dir_all(&tmp).unwrap();
    std::fs::write(tmp.join("Test-Regular.otf"), REGULAR).unwrap();
    std::fs::write(tmp.join("Test-Bold.otf"), BOLD).unwrap();

    let cache = FontCache::new(DirFontSource::new(&tmp, "Test", "otf"));
    let set = cache.ensure_loaded().unwrap();
    assert_eq!(set.bytes(FontWeight::Regular), REGULAR);
    assert_eq!(set.bytes(FontWeight::Bold), BOLD);

    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn memory_source_rejects_empty_data() {
    let cache = FontCache::new(MemoryFontSource::new(REGULAR, Vec::<u8>::new()));
    let err = cache.ensure_loaded().unwrap_err();
    let OgError::AssetLoad(e) = &err else {
        panic!("expected asset load error, got {err:?}");
    };
    assert_eq!(e.path, "<memory:Bold>");
}

#[test]
fn non_font_data_is_an_asset_error_and_never_loads() {
    let cache = FontCache::new(MemoryFontSource::new(REGULAR, b"not a font".to_vec()));
    let err = cache.ensure_loaded().unwrap_err();
    let OgError::AssetLoad(e) = &err else {
        panic!("expected asset load error, got {err:?}");
    };
    assert_eq!(e.path, "<memory:Bold>");
    assert!(!cache.is_loaded());
}

#[test]
fn non_font_file_names_its_path() {
    let tmp = temp_dir("fonts_garbage");
    std::fs::create_dir_all(&tmp).unwrap();
    std::fs::write(tmp.join("Test-Regular.ttf"), b"<html>404</html>").unwrap();
    std::fs::write(tmp.join("Test-Bold.ttf"), BOLD).unwrap();

    let cache = FontCache::new(DirFontSource::new(&tmp, "Test", "ttf"));
    let err = cache.ensure_loaded().unwrap_err();
    let OgError::AssetLoad(e) = &err else {
        panic!("expected asset load error, got {err:?}");
    };
    assert!(e.path.ends_with("Test-Regular.ttf"));
    assert!(!cache.is_loaded());

    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn sha256_is_stable() {
    let set = FontSet::new(b"abc".to_vec(), Vec::new());
    assert_eq!(
        set.sha256_hex(FontWeight::Regular),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}
