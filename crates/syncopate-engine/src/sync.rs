//! Outbound synchronization seam

/// Post-commit notification that the local catalog changed.
///
/// No payload travels through this path: the transport reads the oplog
/// itself and ships records to connected peers. Delivery is
/// fire-and-forget; transport failures are the transport's concern.
pub trait SyncTrigger: Send + Sync {
    fn catalog_changed(&self);
}

/// Trigger that drops the signal, for contexts without a transport.
#[derive(Debug, Default)]
pub struct NullSyncTrigger;

impl SyncTrigger for NullSyncTrigger {
    fn catalog_changed(&self) {}
}
