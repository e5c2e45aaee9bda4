//! Integration tests for the reminder lifecycle: fire, recur, snooze,
//! open and passive reads, driven through host events.

mod helpers;

use helpers::*;
use reado_service::{ReminderPreset, SaveRequest, describe_timing};

const URL: &str = "https://example.com/article";

async fn save_with_later(app: &TestApp) {
    app.library
        .save(SaveRequest {
            url: URL.to_string(),
            title: "An Article".to_string(),
            tags: String::new(),
            reminder: Some(ReminderPreset::Later),
        })
        .await
        .expect("Save failed");
}

#[tokio::test]
async fn test_reminders_repeat_until_cap() {
    let app = TestApp::new();
    save_with_later(&app).await;

    for n in 1..=10 {
        let fire_at = T0 + n * HOUR;
        assert_eq!(app.run_until(fire_at).await, 1);

        let item = app.item(URL).await;
        assert_eq!(item.reminder_count, n as u32);
        assert_eq!(item.last_notification_time, Some(fire_at));
        assert_eq!(item.reminder, Some(fire_at + HOUR));
        assert_eq!(item.original_reminder, Some(T0 + HOUR));
        assert!(app.notifications.open_notification(URL).is_some());

        // Auto-dismiss 30 seconds after showing.
        assert_eq!(app.run_until(fire_at + 30_000).await, 1);
        assert_eq!(app.notifications.open_count(), 0);
    }

    // The last scheduled reminder still shows, but nothing further is armed.
    assert_eq!(app.run_until(T0 + 11 * HOUR).await, 1);
    let item = app.item(URL).await;
    assert_eq!(item.reminder_count, 10);
    assert_eq!(item.reminder, None);
    assert_eq!(app.alarms.names(), vec![format!("dismiss-{URL}")]);
    assert_eq!(app.notifications.shown().await.len(), 11);

    // A restarted host has nothing to re-arm.
    app.run_until(T0 + 11 * HOUR + 30_000).await;
    assert_eq!(app.scheduler.restore_alarms().await.unwrap(), 0);
    assert_eq!(app.run_until(T0 + 12 * HOUR).await, 0);
    assert_eq!(app.notifications.shown().await.len(), 11);
}

#[tokio::test]
async fn test_alarm_outliving_read_shows_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reado.json");

    let host = TestApp::with_file(&path).await;
    save_with_later(&host).await;

    // Marked read by another process sharing the store; the host's alarm
    // is still live.
    let cli = TestApp::with_file(&path).await;
    cli.library.mark_read(URL).await.unwrap();

    assert_eq!(host.run_until(T0 + HOUR).await, 1);

    let item = host.item(URL).await;
    assert!(item.read);
    assert_eq!(item.reminder, None);
    assert_eq!(item.reminder_count, 0);
    assert!(host.notifications.shown().await.is_empty());
    assert!(host.alarms.is_empty());
}

#[tokio::test]
async fn test_snooze_replaces_optimistic_reminder() {
    let app = TestApp::new();
    save_with_later(&app).await;
    app.run_until(T0 + HOUR).await;
    assert_eq!(app.alarm_time(&format!("reminder-{URL}")).await, Some(T0 + 2 * HOUR));

    app.clock.set(T0 + HOUR + 10 * MINUTE);
    app.send(button(URL, 1)).await;

    let item = app.item(URL).await;
    assert_eq!(item.reminder, Some(T0 + 2 * HOUR + 10 * MINUTE));
    assert_eq!(item.reminder_count, 0);
    assert!(!item.read);
    assert_eq!(app.alarms.names(), vec![format!("reminder-{URL}")]);
    assert_eq!(
        app.alarm_time(&format!("reminder-{URL}")).await,
        Some(T0 + 2 * HOUR + 10 * MINUTE)
    );
    assert_eq!(app.notifications.open_count(), 0);
    assert!(app.tabs.opened().await.is_empty());
}

#[tokio::test]
async fn test_click_opens_page_and_marks_read() {
    let app = TestApp::new();
    save_with_later(&app).await;
    app.run_until(T0 + HOUR).await;

    app.clock.set(T0 + 2 * HOUR + 30 * MINUTE);
    app.send(clicked(URL)).await;

    let item = app.item(URL).await;
    assert!(item.read);
    assert_eq!(item.read_at, Some(T0 + 2 * HOUR + 30 * MINUTE));
    assert_eq!(item.reminder, None);
    assert_eq!(item.reminder_count, 0);
    assert!(app.alarms.is_empty());
    assert_eq!(app.notifications.open_count(), 0);
    assert_eq!(app.tabs.opened().await, vec![URL.to_string()]);

    let timing = describe_timing(&item);
    assert_eq!(timing.delta.map(|d| d.to_string()).as_deref(), Some("延迟1小时30分"));
}

#[tokio::test]
async fn test_open_button_matches_click() {
    let app = TestApp::new();
    save_with_later(&app).await;
    app.run_until(T0 + HOUR).await;

    app.send(button(URL, 0)).await;

    assert!(app.item(URL).await.read);
    assert!(app.alarms.is_empty());
    assert_eq!(app.tabs.opened().await, vec![URL.to_string()]);
}

#[tokio::test]
async fn test_passive_visit_keeps_count() {
    let app = TestApp::new();
    save_with_later(&app).await;
    app.run_until(T0 + HOUR).await;
    app.run_until(T0 + 2 * HOUR).await;

    app.send(page_loaded(URL)).await;

    let item = app.item(URL).await;
    assert!(item.read);
    assert_eq!(item.reminder_count, 2);
    assert_eq!(item.reminder, None);
    assert!(!app.alarms.names().contains(&format!("reminder-{URL}")));
}

#[tokio::test]
async fn test_visit_to_unsaved_page_is_ignored() {
    let app = TestApp::new();
    app.send(page_loaded("https://elsewhere.test")).await;
    assert!(!app.library.is_saved("https://elsewhere.test").await.unwrap());
}

#[tokio::test]
async fn test_stale_alarm_for_deleted_item_does_nothing() {
    let app = TestApp::new();
    save_with_later(&app).await;
    assert!(app.library.delete(URL).await.unwrap());
    assert!(app.alarms.is_empty());

    // An alarm that outlived its record.
    app.scheduler
        .schedule_reminder(URL, T0 + HOUR)
        .await
        .unwrap();
    assert_eq!(app.run_until(T0 + HOUR).await, 1);

    assert!(app.notifications.shown().await.is_empty());
    assert!(app.alarms.is_empty());
    assert!(!app.library.is_saved(URL).await.unwrap());
}

#[tokio::test]
async fn test_file_store_shared_between_processes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reado.json");

    let cli = TestApp::with_file(&path).await;
    save_with_later(&cli).await;

    // A host started later re-arms what the first process saved.
    let host = TestApp::with_file(&path).await;
    assert_eq!(host.scheduler.restore_alarms().await.unwrap(), 1);
    assert_eq!(host.alarm_time(&format!("reminder-{URL}")).await, Some(T0 + HOUR));

    assert_eq!(host.run_until(T0 + HOUR).await, 1);
    assert_eq!(cli.item(URL).await.reminder_count, 1);
}
