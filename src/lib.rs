//! Cache inventory and cleanup engine for Chromium-family browser
//! profiles.
//!
//! The engine walks a fixed three-level hierarchy under a caller-chosen
//! root — instance directory (one browser installation/channel), profile
//! directory, cache folder — and produces a [`CacheInventory`] snapshot
//! of every allow-listed cache folder it finds, with per-folder disk
//! usage. The caller can then reclaim space at three granularities:
//! [`clear_folder`], [`clear_profile`], or [`clear_instance`].
//!
//! All operations are best-effort and infallible: unreadable entries are
//! skipped and counted, missing deletion targets report zero, and a bad
//! root scans as empty. Presentation (pickers, trees, dialogs) is the
//! caller's business; this crate only produces and consumes data.

pub mod allowlist;
pub mod cleaner;
pub mod constants;
pub mod measure;
pub mod model;
pub mod scanner;

pub use allowlist::{CACHE_FOLDERS, cache_folder_path, is_cache_folder};
pub use cleaner::{ClearOutcome, clear_folder, clear_instance, clear_profile};
pub use measure::{Measurement, measure};
pub use model::{CacheEntry, CacheInventory, InstanceCaches, ProfileCaches};
pub use scanner::{default_roots, scan};
