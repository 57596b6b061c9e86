//! Upload preconditions and object key generation.
//!
//! Preconditions run before any network call: a rejected file never reaches
//! the object store. Keys carry a random component plus a millisecond time
//! component so concurrent uploads from different sessions cannot collide.

use rand::Rng;

use crate::error::CoreError;

/// Maximum accepted upload size (5 MiB).
pub const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

/// Cache-control window applied to stored objects, in seconds.
pub const CACHE_CONTROL_SECS: u32 = 3600;

/// Length of the random base-36 token in object keys.
const TOKEN_LEN: usize = 11;

const TOKEN_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Which record kind an upload belongs to. Each kind has its own bucket and
/// key prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    Hero,
    Product,
}

impl UploadKind {
    /// Bucket name for this kind.
    pub fn bucket(self) -> &'static str {
        match self {
            UploadKind::Hero => "hero-images",
            UploadKind::Product => "product-images",
        }
    }

    /// Key prefix for this kind.
    pub fn key_prefix(self) -> &'static str {
        match self {
            UploadKind::Hero => "",
            UploadKind::Product => "product-",
        }
    }
}

/// Check the declared media type and size before any store call.
pub fn validate_upload(content_type: &str, size_bytes: u64) -> Result<(), CoreError> {
    if !content_type.starts_with("image/") {
        return Err(CoreError::Validation(
            "Only image uploads are accepted".into(),
        ));
    }
    if size_bytes > MAX_UPLOAD_BYTES {
        return Err(CoreError::Validation(
            "Image size should be less than 5 MiB".into(),
        ));
    }
    Ok(())
}

/// Build an object key from explicit components:
/// `{prefix}{token}-{millis}.{ext}`.
///
/// Exposed separately from [`new_object_key`] so key layout is testable
/// without randomness.
pub fn object_key(kind: UploadKind, original_filename: &str, token: &str, millis: i64) -> String {
    let ext = file_extension(original_filename);
    format!("{}{token}-{millis}.{ext}", kind.key_prefix())
}

/// Build a fresh collision-resistant object key for an upload.
pub fn new_object_key(kind: UploadKind, original_filename: &str) -> String {
    object_key(
        kind,
        original_filename,
        &random_token(),
        chrono::Utc::now().timestamp_millis(),
    )
}

/// Random base-36 token of [`TOKEN_LEN`] characters.
fn random_token() -> String {
    let mut rng = rand::rng();
    (0..TOKEN_LEN)
        .map(|_| TOKEN_ALPHABET[rng.random_range(0..TOKEN_ALPHABET.len())] as char)
        .collect()
}

/// Extension of the original filename, defaulting to `bin` when absent.
fn file_extension(filename: &str) -> &str {
    match filename.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => ext,
        _ => "bin",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_image_within_limit() {
        assert!(validate_upload("image/png", 4 * 1024 * 1024).is_ok());
        assert!(validate_upload("image/jpeg", MAX_UPLOAD_BYTES).is_ok());
    }

    #[test]
    fn rejects_oversized_file() {
        assert!(validate_upload("image/png", 6 * 1024 * 1024).is_err());
        assert!(validate_upload("image/png", MAX_UPLOAD_BYTES + 1).is_err());
    }

    #[test]
    fn rejects_non_image_media_type() {
        assert!(validate_upload("video/mp4", 1024).is_err());
        assert!(validate_upload("application/octet-stream", 1024).is_err());
        assert!(validate_upload("", 1024).is_err());
    }

    #[test]
    fn hero_key_layout() {
        assert_eq!(
            object_key(UploadKind::Hero, "banner.png", "abc123def45", 1_700_000_000_000),
            "abc123def45-1700000000000.png"
        );
    }

    #[test]
    fn product_key_layout() {
        assert_eq!(
            object_key(UploadKind::Product, "tv.JPG", "abc123def45", 1_700_000_000_000),
            "product-abc123def45-1700000000000.JPG"
        );
    }

    #[test]
    fn extension_falls_back_when_missing() {
        assert_eq!(
            object_key(UploadKind::Hero, "no-extension", "t0k3n", 1),
            "t0k3n-1.bin"
        );
        assert_eq!(object_key(UploadKind::Hero, "trailing.", "t0k3n", 1), "t0k3n-1.bin");
    }

    #[test]
    fn fresh_keys_do_not_collide() {
        let a = new_object_key(UploadKind::Hero, "x.png");
        let b = new_object_key(UploadKind::Hero, "x.png");
        assert_ne!(a, b);
    }

    #[test]
    fn buckets_are_distinct_per_kind() {
        assert_eq!(UploadKind::Hero.bucket(), "hero-images");
        assert_eq!(UploadKind::Product.bucket(), "product-images");
    }
}
