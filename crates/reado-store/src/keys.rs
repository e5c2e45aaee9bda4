//! Key builders for every record Reado persists.
//!
//! Items and settings live in one flat namespace. Item keys carry a prefix
//! so that no URL, however odd, can land on the settings key.

/// Prefix applied to saved item keys.
const ITEM_PREFIX: &str = "item:";

/// Key of the global settings record.
pub const SETTINGS: &str = "settings";

/// Key of the saved item for `url`.
pub fn item(url: &str) -> String {
    format!("{ITEM_PREFIX}{url}")
}

/// The URL an item key refers to, or `None` for non-item keys.
pub fn item_url(key: &str) -> Option<&str> {
    key.strip_prefix(ITEM_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_url_does_not_collide() {
        assert_ne!(item("settings"), SETTINGS);
        assert_eq!(item_url(&item("settings")), Some("settings"));
        assert_eq!(item_url(SETTINGS), None);
    }
}
