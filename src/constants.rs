pub const CACHE: &str = "Cache";
pub const CODE_CACHE: &str = "Code Cache";
pub const GPU_CACHE: &str = "GPUCache";
pub const MEDIA_CACHE: &str = "Media Cache";
pub const INDEXED_DB: &str = "IndexedDB";
pub const BLOB_STORAGE: &str = "blob_storage";
pub const SERVICE_WORKER_CACHE_STORAGE: &str = "Service Worker/CacheStorage";

/// Vendor directories that hold Chromium-family instance trees under the
/// platform's application-data bases.
pub const CHROMIUM_VENDOR_DIRS: &[&str] = &[
    "Google",
    "Chromium",
    "BraveSoftware",
    "Microsoft",
    "Vivaldi",
    "Opera Software",
];
