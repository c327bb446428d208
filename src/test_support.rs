use std::path::PathBuf;

/// Unique temp directory for file-backed tests; not created.
pub(crate) fn fixture_root(label: &str) -> PathBuf {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::SystemTime::UNIX_EPOCH)
        .map_or(0, |d| d.as_nanos());
    let pid = std::process::id();
    std::env::temp_dir().join(format!("m3-theme-{label}-{pid}-{nanos}"))
}
