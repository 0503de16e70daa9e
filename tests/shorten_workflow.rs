mod common;

use regex::Regex;
use shortly::AppError;
use shortly::prelude::*;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

fn short_url_pattern() -> Regex {
    Regex::new(r"^https://short\.ly/[A-Za-z0-9]{7}$").unwrap()
}

#[tokio::test]
async fn test_end_to_end_scenario() {
    let mut service = common::memory_service();

    let short_url = service.submit("https://example.com/a/b").await.unwrap();

    assert!(short_url_pattern().is_match(&short_url));
    assert_eq!(service.history().len(), 1);
    assert!(
        service
            .history()
            .find_by_long_url("https://example.com/a/b")
            .is_some()
    );

    let err = service.submit("not a url").await.unwrap_err();
    assert!(matches!(err, AppError::InvalidUrl { .. }));
    assert_eq!(err.to_string(), "Please enter a valid URL");
    assert_eq!(service.history().len(), 1);
}

#[tokio::test]
async fn test_duplicate_law() {
    let mut service = common::memory_service();

    let first = service.shorten("https://example.com/dup").await;
    let second = service.shorten("https://example.com/dup").await;

    assert!(first.is_ok());
    assert!(matches!(second, Err(AppError::DuplicateUrl { .. })));
    assert_eq!(service.history().len(), 1);
}

#[tokio::test]
async fn test_many_urls_all_match_format() {
    let mut service = common::memory_service();
    let pattern = short_url_pattern();

    for i in 0..50 {
        let short_url = service
            .shorten(&format!("https://example.com/page/{i}"))
            .await
            .unwrap();
        assert!(pattern.is_match(&short_url), "unexpected: {short_url}");
    }

    assert_eq!(service.history().len(), 50);
}

#[tokio::test]
async fn test_rejections_leave_persisted_history_untouched() {
    let dir = TempDir::new().unwrap();
    let mut service = common::open_file_service(&dir, 3);
    service.shorten("https://example.com").await.unwrap();
    let before = common::read_slot_file(&dir);

    assert!(service.submit("").await.is_err());
    assert!(service.submit("mailto:a@b.c").await.is_err());
    assert!(service.submit("https://example.com").await.is_err());

    assert_eq!(common::read_slot_file(&dir), before);
}

#[tokio::test]
async fn test_duplicates_detected_across_sessions() {
    let dir = TempDir::new().unwrap();

    let mut first = common::open_file_service(&dir, 1);
    first.shorten("https://example.com/kept").await.unwrap();
    drop(first);

    let mut second = common::open_file_service(&dir, 2);
    let result = second.shorten("https://example.com/kept").await;

    assert!(matches!(result, Err(AppError::DuplicateUrl { .. })));
}

#[tokio::test(start_paused = true)]
async fn test_simulated_latency_is_awaited() {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    let history = HistoryService::new(Arc::new(MemorySlot::new()));
    let mut service = LinkService::new(
        history,
        Arc::new(SimulatedLatency::default()),
        StdRng::seed_from_u64(9),
    );

    let start = tokio::time::Instant::now();
    service.shorten("https://example.com/slow").await.unwrap();
    assert!(start.elapsed() >= Duration::from_millis(800));

    let start = tokio::time::Instant::now();
    let _ = service.shorten("not a url").await;
    assert_eq!(start.elapsed(), Duration::ZERO);
}
