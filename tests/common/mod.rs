#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;
use tempfile::TempDir;

use shortly::prelude::*;

pub const STORAGE_KEY: &str = "shortened-urls";

pub type FileLinkService = LinkService<FileSlot, NoLatency, StdRng>;

pub fn file_slot(dir: &TempDir) -> Arc<FileSlot> {
    Arc::new(FileSlot::new(dir.path(), STORAGE_KEY))
}

pub fn open_file_service(dir: &TempDir, seed: u64) -> FileLinkService {
    let history = HistoryService::open(file_slot(dir));
    LinkService::new(history, Arc::new(NoLatency), StdRng::seed_from_u64(seed))
}

pub fn memory_service() -> LinkService<MemorySlot, NoLatency, StdRng> {
    let history = HistoryService::new(Arc::new(MemorySlot::new()));
    LinkService::new(history, Arc::new(NoLatency), StdRng::seed_from_u64(0))
}

pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 5, 15, 7, 0).unwrap()
}

pub fn test_record(id: &str, long_url: &str, code: &str) -> ShortenedUrl {
    ShortenedUrl::new(
        id,
        long_url,
        format!("https://short.ly/{code}"),
        fixed_time(),
    )
}

pub fn write_slot_file(dir: &TempDir, contents: &str) {
    std::fs::write(dir.path().join(format!("{STORAGE_KEY}.json")), contents).unwrap();
}

pub fn read_slot_file(dir: &TempDir) -> String {
    std::fs::read_to_string(dir.path().join(format!("{STORAGE_KEY}.json"))).unwrap()
}
