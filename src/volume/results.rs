//! Volume result types
//!
//! Defines result structures returned by volume enumeration.

use std::path::PathBuf;

/// A mounted filesystem partition as reported by the OS.
///
/// Rebuilt fresh on every report request, never cached. `total_mb` is `None`
/// when the capacity query yields nothing for the partition.
#[derive(Debug, Clone)]
pub struct VolumeInfo {
    pub device: String,
    pub mount_point: PathBuf,
    pub fs_type: String,
    pub total_mb: Option<u64>,
}
