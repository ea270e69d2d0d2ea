#![allow(dead_code)]

pub mod fixtures;
pub mod mocks;

use dw_core::{EventSink, MemoryEventSink};
use dw_db::CacheStore;

use std::sync::Arc;

pub async fn create_test_store() -> CacheStore {
    CacheStore::in_memory()
        .await
        .expect("in-memory store should open")
}

pub fn memory_sink() -> (Arc<MemoryEventSink>, Arc<dyn EventSink>) {
    let sink = Arc::new(MemoryEventSink::default());
    let dyn_sink: Arc<dyn EventSink> = sink.clone();
    (sink, dyn_sink)
}
