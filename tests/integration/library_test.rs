//! Integration tests for the library: saving with presets, re-saves,
//! listing, settings and the context-menu save path.

mod helpers;

use helpers::*;
use reado_core::events::HostEvent;
use reado_core::traits::store::KeyValueStore;
use reado_reminder::handler::SAVE_PAGE_MENU_ID;
use reado_service::{ListFilter, ListTab, ReminderPreset, SaveRequest};
use reado_store::keys;
use serde_json::json;

fn request(url: &str, tags: &str, reminder: Option<ReminderPreset>) -> SaveRequest {
    SaveRequest {
        url: url.to_string(),
        title: format!("Title of {url}"),
        tags: tags.to_string(),
        reminder,
    }
}

#[tokio::test]
async fn test_tonight_and_tomorrow_presets_are_in_future() {
    let app = TestApp::new();

    let tonight = app
        .library
        .save(request("https://a.test", "", Some(ReminderPreset::Tonight)))
        .await
        .unwrap();
    let tomorrow = app
        .library
        .save(request("https://b.test", "", Some(ReminderPreset::Tomorrow)))
        .await
        .unwrap();

    let at = tonight.reminder.expect("Tonight should resolve");
    assert!(at > T0 && at <= T0 + 24 * HOUR);
    let at = tomorrow.reminder.expect("Tomorrow should resolve");
    assert!(at > T0 && at <= T0 + 48 * HOUR);
    assert_eq!(app.alarms.len(), 2);
}

#[tokio::test]
async fn test_resave_keeps_original_reminder() {
    let app = TestApp::new();
    app.library
        .save(request("https://a.test", "one", Some(ReminderPreset::Later)))
        .await
        .unwrap();
    app.run_until(T0 + HOUR).await;
    app.send(page_loaded("https://a.test")).await;

    app.clock.set(T0 + 5 * HOUR);
    let item = app
        .library
        .save(request("https://a.test", "two", Some(ReminderPreset::Later)))
        .await
        .unwrap();

    assert!(!item.read);
    assert_eq!(item.read_at, None);
    assert_eq!(item.reminder_count, 0);
    assert_eq!(item.saved_at, T0 + 5 * HOUR);
    assert_eq!(item.reminder, Some(T0 + 6 * HOUR));
    assert_eq!(item.original_reminder, Some(T0 + HOUR));
    assert_eq!(item.tags, vec!["two"]);
    assert_eq!(
        app.alarm_time("reminder-https://a.test").await,
        Some(T0 + 6 * HOUR)
    );
}

#[tokio::test]
async fn test_list_tabs_and_tag_search() {
    let app = TestApp::new();
    app.library
        .save(request("https://a.test", "Rust, async", None))
        .await
        .unwrap();
    app.clock.advance(MINUTE);
    app.library
        .save(request("https://b.test", "go", Some(ReminderPreset::Later)))
        .await
        .unwrap();
    app.clock.advance(MINUTE);
    app.library
        .save(request("https://c.test", "rust", None))
        .await
        .unwrap();
    app.library.mark_read("https://c.test").await.unwrap();

    let unread = app.library.list(&ListFilter::default()).await.unwrap();
    let urls: Vec<&str> = unread.iter().map(|l| l.item.url.as_str()).collect();
    assert_eq!(urls, vec!["https://b.test", "https://a.test"]);

    let rust = app
        .library
        .list(&ListFilter::new(ListTab::Unread).with_search("rust"))
        .await
        .unwrap();
    assert_eq!(rust.len(), 1);
    assert_eq!(rust[0].item.url, "https://a.test");

    let read = app.library.list(&ListFilter::new(ListTab::Read)).await.unwrap();
    assert_eq!(read.len(), 1);
    assert_eq!(read[0].item.url, "https://c.test");

    // Overdue once the reminder passes without a fire being handled.
    app.clock.set(T0 + 2 * HOUR);
    let b = app.library.entry("https://b.test").await.unwrap();
    assert!(b.overdue);
}

#[tokio::test]
async fn test_set_tags_replaces_tags() {
    let app = TestApp::new();
    app.library
        .save(request("https://a.test", "old", None))
        .await
        .unwrap();
    let item = app
        .library
        .set_tags("https://a.test", " new ，other")
        .await
        .unwrap();
    assert_eq!(item.tags, vec!["new", "other"]);
    assert!(app.library.set_tags("https://missing.test", "x").await.is_err());
}

#[tokio::test]
async fn test_repeat_interval_drives_recurrence() {
    let app = TestApp::new();
    app.library.set_repeat_interval(15).await.unwrap();
    app.library
        .save(request("https://a.test", "", Some(ReminderPreset::Later)))
        .await
        .unwrap();

    app.run_until(T0 + HOUR).await;
    assert_eq!(
        app.item("https://a.test").await.reminder,
        Some(T0 + HOUR + 15 * MINUTE)
    );
}

#[tokio::test]
async fn test_legacy_interval_setting_is_honored() {
    let app = TestApp::new();
    app.stores
        .backend()
        .set(keys::SETTINGS, json!({ "secondReminderInterval": 45 }))
        .await
        .unwrap();
    assert_eq!(app.library.repeat_interval().await.unwrap(), 45);

    app.library
        .save(request("https://a.test", "", Some(ReminderPreset::Later)))
        .await
        .unwrap();
    app.run_until(T0 + HOUR).await;
    assert_eq!(
        app.item("https://a.test").await.reminder,
        Some(T0 + HOUR + 45 * MINUTE)
    );

    // Writing the new field takes precedence and drops the legacy one.
    app.library.set_repeat_interval(20).await.unwrap();
    let raw = app.stores.backend().get(keys::SETTINGS).await.unwrap().unwrap();
    assert_eq!(raw, json!({ "repeatReminderInterval": 20 }));
}

#[tokio::test]
async fn test_delete_clears_everything() {
    let app = TestApp::new();
    app.library
        .save(request("https://a.test", "", Some(ReminderPreset::Later)))
        .await
        .unwrap();
    app.run_until(T0 + HOUR).await;
    assert_eq!(app.notifications.open_count(), 1);

    assert!(app.library.delete("https://a.test").await.unwrap());
    assert!(app.alarms.is_empty());
    assert_eq!(app.notifications.open_count(), 0);
    assert!(app.library.list(&ListFilter::default()).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_context_menu_saves_page() {
    let app = TestApp::new();
    app.send(HostEvent::Installed).await;
    assert!(app.menus.entry(SAVE_PAGE_MENU_ID).is_some());

    app.send(HostEvent::ContextMenuClicked {
        menu_item_id: SAVE_PAGE_MENU_ID.to_string(),
        url: "https://a.test".to_string(),
        title: "From menu".to_string(),
    })
    .await;

    let item = app.item("https://a.test").await;
    assert_eq!(item.title, "From menu");
    assert_eq!(item.saved_at, T0);
    assert_eq!(item.reminder, None);
}
