use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static COUNTER: AtomicU64 = AtomicU64::new(0);

/// Writes `files` into a fresh directory under the system temp dir and
/// returns its path. Tests run in parallel, so every call gets its own dir.
pub fn temp_export_dir(files: &[(&str, &str)]) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "hotel_ops_test_{}_{}",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos(),
        COUNTER.fetch_add(1, Ordering::SeqCst)
    ));
    std::fs::create_dir_all(&dir).unwrap_or_else(|e| panic!("Creating {dir:?} failed: {e}"));

    for (name, contents) in files {
        std::fs::write(dir.join(name), contents)
            .unwrap_or_else(|e| panic!("Writing fixture {name} failed: {e}"));
    }

    dir
}
