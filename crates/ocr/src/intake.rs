use sha2::{Digest, Sha256};
use std::io;
use std::path::{Path, PathBuf};

/// Hex-encoded SHA-256 of the uploaded bytes — the storage key for a paste.
pub fn content_key(data: &[u8]) -> String {
    Sha256::digest(data)
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect()
}

/// Where an upload with the given key and extension lives.
/// Layout: `<uploads>/<first two hex chars>/<key>.<ext>`
pub fn upload_path(uploads_dir: &Path, key: &str, ext: &str) -> PathBuf {
    uploads_dir.join(&key[..2]).join(format!("{key}.{ext}"))
}

/// Persist pasted image bytes under their content hash. Re-pasting the
/// same image overwrites the same file, so the store holds no duplicates.
pub fn store_upload(uploads_dir: &Path, data: &[u8], ext: &str) -> io::Result<PathBuf> {
    let key = content_key(data);
    let dest = upload_path(uploads_dir, &key, ext);
    if let Some(parent) = dest.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&dest, data)?;
    Ok(dest)
}
