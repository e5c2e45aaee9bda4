//! Integration tests for the stdio bridge: JSON event lines in, JSON
//! command lines out.

mod helpers;

use std::sync::Arc;

use serde_json::Value;
use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::sync::watch;

use helpers::{HOUR, T0};
use reado::run_bridge;
use reado_core::config::ReminderConfig;
use reado_entity::SavedItem;
use reado_host::ManualClock;
use reado_store::StoreManager;
use reado_store::memory::MemoryKeyValueStore;

const URL: &str = "https://example.com/article";

fn memory_stores() -> StoreManager {
    StoreManager::from_backend(Arc::new(MemoryKeyValueStore::new()))
}

fn parse_lines(output: &str) -> Vec<Value> {
    output
        .lines()
        .map(|line| serde_json::from_str(line).expect("Output line is not JSON"))
        .collect()
}

#[tokio::test]
async fn test_bridge_handles_input_until_eof() {
    let stores = memory_stores();
    stores
        .items()
        .put(&SavedItem::new(URL, "An Article", T0))
        .await
        .unwrap();

    let input = format!(
        "{}\n\nnot json\n{}\n",
        r#"{"type":"installed"}"#,
        serde_json::json!({ "type": "page_loaded", "url": URL }),
    );
    let (writer, mut output) = tokio::io::duplex(64 * 1024);
    let (_shutdown_tx, shutdown_rx) = watch::channel(false);

    let handled = run_bridge(
        ReminderConfig::default(),
        &stores,
        Arc::new(ManualClock::new(T0)),
        input.as_bytes(),
        writer,
        shutdown_rx,
    )
    .await
    .unwrap();
    assert_eq!(handled, 2);

    let mut text = String::new();
    output.read_to_string(&mut text).await.unwrap();
    let lines = parse_lines(&text);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["command"], "create_context_menu");
    assert_eq!(lines[0]["id"], "save-page");

    let item = stores.items().get(URL).await.unwrap().unwrap();
    assert!(item.read);
    assert_eq!(item.read_at, Some(T0));
}

#[tokio::test(start_paused = true)]
async fn test_restored_reminder_fires_and_click_opens_page() {
    let stores = memory_stores();
    let mut item = SavedItem::new(URL, "An Article", T0 - HOUR);
    item.set_reminder(T0 + 1_000);
    stores.items().put(&item).await.unwrap();

    let (mut input, input_rx) = tokio::io::duplex(4096);
    let (writer, output) = tokio::io::duplex(64 * 1024);
    let (_shutdown_tx, shutdown_rx) = watch::channel(false);

    let bridge = run_bridge(
        ReminderConfig::default(),
        &stores,
        Arc::new(ManualClock::new(T0)),
        BufReader::new(input_rx),
        writer,
        shutdown_rx,
    );

    let driver = async move {
        let mut lines = BufReader::new(output).lines();

        let shown: Value = serde_json::from_str(&lines.next_line().await.unwrap().unwrap()).unwrap();
        assert_eq!(shown["command"], "show_notification");
        assert_eq!(shown["id"], URL);
        assert_eq!(shown["options"]["title"], "Reado: 该阅读了!");
        assert_eq!(shown["options"]["message"], "An Article");

        let click = serde_json::json!({
            "type": "notification_button_clicked",
            "notificationId": URL,
            "buttonIndex": 0,
        });
        input
            .write_all(format!("{click}\n").as_bytes())
            .await
            .unwrap();

        let opened: Value = serde_json::from_str(&lines.next_line().await.unwrap().unwrap()).unwrap();
        assert_eq!(opened, serde_json::json!({ "command": "open_tab", "url": URL }));
        let cleared: Value = serde_json::from_str(&lines.next_line().await.unwrap().unwrap()).unwrap();
        assert_eq!(
            cleared,
            serde_json::json!({ "command": "clear_notification", "id": URL })
        );

        drop(input);
        assert!(lines.next_line().await.unwrap().is_none());
    };

    let (handled, ()) = tokio::join!(bridge, driver);
    assert_eq!(handled.unwrap(), 2);

    let item = stores.items().get(URL).await.unwrap().unwrap();
    assert!(item.read);
    assert_eq!(item.reminder, None);
    assert_eq!(item.reminder_count, 0);
    assert_eq!(item.last_notification_time, Some(T0));
}
