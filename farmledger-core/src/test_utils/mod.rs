// File: farmledger-core/src/test_utils/mod.rs
//
// Shared helpers for the integration tests in tests/.

use std::sync::Arc;

use tempfile::TempDir;

use crate::FarmLedger;
use crate::storage::JsonStore;

/// A fresh store in a temp directory. Keep the `TempDir` alive for the test's
/// duration or the directory disappears under the store.
pub async fn temp_store() -> (TempDir, Arc<JsonStore>) {
    let dir = TempDir::new().expect("create temp dir");
    let store = JsonStore::open(dir.path()).await.expect("open json store");
    (dir, Arc::new(store))
}

/// A fully wired ledger over a temp directory.
pub async fn temp_ledger() -> (TempDir, FarmLedger) {
    let dir = TempDir::new().expect("create temp dir");
    let ledger = FarmLedger::open(dir.path()).await.expect("open farm ledger");
    (dir, ledger)
}
