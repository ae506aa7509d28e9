//! `ceph.rook.io/v1` resources

pub mod block_pool;
pub mod bucket_notification;
pub mod cluster;
pub mod common;
pub mod daemons;
pub mod filesystem;
pub mod nfs;
pub mod object_multisite;
pub mod object_store;

pub use block_pool::{CephBlockPool, CephBlockPoolRadosNamespace};
pub use bucket_notification::{CephBucketNotification, CephBucketTopic};
pub use cluster::CephCluster;
pub use daemons::{CephCOSIDriver, CephClient, CephRBDMirror};
pub use filesystem::{CephFilesystem, CephFilesystemMirror, CephFilesystemSubVolumeGroup};
pub use nfs::CephNFS;
pub use object_multisite::{CephObjectRealm, CephObjectZone, CephObjectZoneGroup};
pub use object_store::{CephObjectStore, CephObjectStoreUser};
