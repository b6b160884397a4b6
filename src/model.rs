use crate::measure::to_megabytes;
use humansize::{BINARY, format_size};

/// One discovered cache folder under a profile. `folder` is the
/// allow-list entry that matched; `skipped` carries over the count of
/// entries the measurement could not read.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub folder: String,
    pub size: u64,
    pub skipped: usize,
}

impl CacheEntry {
    pub fn size_mb(&self) -> f64 {
        to_megabytes(self.size)
    }

    pub fn display_size(&self) -> String {
        format_size(self.size, BINARY)
    }
}

/// One profile directory and the cache folders found inside it.
#[derive(Debug, Clone)]
pub struct ProfileCaches {
    pub name: String,
    pub entries: Vec<CacheEntry>,
}

impl ProfileCaches {
    pub fn entry(&self, folder: &str) -> Option<&CacheEntry> {
        self.entries.iter().find(|entry| entry.folder == folder)
    }

    pub fn total_size(&self) -> u64 {
        self.entries.iter().map(|entry| entry.size).sum()
    }
}

/// One browser installation/channel directory and its profiles.
#[derive(Debug, Clone)]
pub struct InstanceCaches {
    pub name: String,
    pub profiles: Vec<ProfileCaches>,
}

impl InstanceCaches {
    pub fn profile(&self, name: &str) -> Option<&ProfileCaches> {
        self.profiles.iter().find(|profile| profile.name == name)
    }

    pub fn total_size(&self) -> u64 {
        self.profiles.iter().map(ProfileCaches::total_size).sum()
    }
}

/// Snapshot of every instance, profile, and cache folder found under one
/// root. Rebuilt wholesale by each scan; deletion does not refresh it.
/// Instances and profiles are kept in name order, entries in allow-list
/// order, so rendering the snapshot is deterministic.
#[derive(Debug, Clone, Default)]
pub struct CacheInventory {
    pub instances: Vec<InstanceCaches>,
}

impl CacheInventory {
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn instance(&self, name: &str) -> Option<&InstanceCaches> {
        self.instances.iter().find(|instance| instance.name == name)
    }

    pub fn total_size(&self) -> u64 {
        self.instances.iter().map(InstanceCaches::total_size).sum()
    }

    /// Entries the scan could not fully read, summed over the snapshot.
    pub fn skipped(&self) -> usize {
        self.instances
            .iter()
            .flat_map(|instance| &instance.profiles)
            .flat_map(|profile| &profile.entries)
            .map(|entry| entry.skipped)
            .sum()
    }

    pub fn display_total(&self) -> String {
        format_size(self.total_size(), BINARY)
    }
}
