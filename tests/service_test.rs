//! End-to-end tests for the logger service and its primitives.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use diaglog::{LogLevel, LoggerConfig, LoggerService, TaskQueue, VerbosityMode};

mod common;
use common::CaptureSink;

async fn settle() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}

#[tokio::test(start_paused = true)]
async fn console_line_matches_documented_format() {
    let sink = CaptureSink::default();
    let service = LoggerService::with_sink(LoggerConfig::default(), sink.clone());

    service.log(LogLevel::Info, "ui", "boot", None);

    let lines = sink.lines();
    assert_eq!(lines.len(), 1);
    let (line, data) = &lines[0];
    assert!(data.is_none());
    assert!(
        line.ends_with("] [INFO] [ui] boot"),
        "unexpected line: {line}"
    );

    // [HH:MM:SS.mmm] prefix
    assert!(line.starts_with('['));
    let time = &line[1..line.find(']').unwrap()];
    assert_eq!(time.len(), 12, "unexpected time token: {time}");
    assert_eq!(&time[2..3], ":");
    assert_eq!(&time[5..6], ":");
    assert_eq!(&time[8..9], ".");
}

#[tokio::test(start_paused = true)]
async fn detailed_console_line_carries_payload() {
    let sink = CaptureSink::default();
    let service = LoggerService::with_sink(
        LoggerConfig {
            mode: VerbosityMode::Detailed,
            ..LoggerConfig::default()
        },
        sink.clone(),
    );

    let payload = serde_json::json!({ "component": "gallery", "retries": 2 });
    service.log(LogLevel::Warn, "images", "retrying load", Some(payload.clone()));

    let lines = sink.lines();
    assert_eq!(lines[0].1.as_ref(), Some(&payload));
    assert!(lines[0].0.contains("[WARN] [images]"));
}

#[tokio::test(start_paused = true)]
async fn queued_work_reaches_subscribers_in_order() {
    let service = LoggerService::with_sink(
        LoggerConfig {
            log_to_console: false,
            ..LoggerConfig::default()
        },
        CaptureSink::default(),
    );

    let snapshots = Arc::new(Mutex::new(Vec::new()));
    let observed = snapshots.clone();
    let _subscription = service.subscribe(move |entries| {
        observed.lock().unwrap().push(entries.len());
    });

    let queue = TaskQueue::new();
    for i in 0..3u32 {
        let worker = service.for_source("worker");
        queue.enqueue(async move {
            // Stagger settlement so overlap would reorder entries.
            tokio::time::sleep(Duration::from_millis(5 * (3 - i) as u64)).await;
            worker.info(format!("task {i}"));
            Ok(())
        });
    }

    while queue.is_processing() {
        tokio::time::sleep(Duration::from_millis(1)).await;
    }
    tokio::time::advance(Duration::from_millis(310)).await;
    settle().await;

    let logs = service.get_logs();
    let messages: Vec<&str> = logs.iter().map(|e| e.message.as_str()).collect();
    assert_eq!(messages, vec!["task 0", "task 1", "task 2"]);

    let snapshots = snapshots.lock().unwrap();
    assert_eq!(snapshots.last(), Some(&3));
}

#[tokio::test(start_paused = true)]
async fn disabling_mid_run_gates_both_buffer_and_console() {
    let sink = CaptureSink::default();
    let service = LoggerService::with_sink(LoggerConfig::default(), sink.clone());
    let ui = service.for_source("ui");

    ui.info("visible");
    service.set_enabled(false);
    ui.error("invisible");
    service.set_enabled(true);
    ui.info("visible again");

    let logs = service.get_logs();
    assert_eq!(logs.len(), 2);
    assert!(logs.iter().all(|e| e.level == LogLevel::Info));
    assert_eq!(sink.lines().len(), 2);
}
