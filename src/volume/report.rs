//! Volume enumeration
//!
//! Queries the OS for mounted partitions. A partition whose capacity cannot
//! be determined is still listed, with its size reported as unknown.

use log::info;
use sysinfo::Disks;

use crate::volume::results::VolumeInfo;

const BYTES_PER_MB: u64 = 1024 * 1024;

/// Lists all mounted partitions with device, mount point, filesystem type,
/// and total capacity in MB.
pub fn list_volumes() -> Vec<VolumeInfo> {
    let disks = Disks::new_with_refreshed_list();

    let volumes: Vec<VolumeInfo> = disks
        .list()
        .iter()
        .map(|disk| {
            let total = disk.total_space();
            VolumeInfo {
                device: disk.name().to_string_lossy().into_owned(),
                mount_point: disk.mount_point().to_path_buf(),
                fs_type: disk.file_system().to_string_lossy().into_owned(),
                // Zero total space means the capacity query returned nothing
                // for this partition
                total_mb: (total > 0).then(|| total / BYTES_PER_MB),
            }
        })
        .collect();

    info!("Enumerated {} mounted volumes", volumes.len());
    volumes
}
