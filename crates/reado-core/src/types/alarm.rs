//! Typed alarm names.
//!
//! The platform knows alarms only by string name. Reado uses two families,
//! `reminder-<url>` and `dismiss-<url>`; [`AlarmName`] keeps the family and
//! the URL apart so call sites never format or strip prefixes by hand.

use std::fmt;

/// Prefix of the alarm that fires a saved item's reminder.
pub const REMINDER_PREFIX: &str = "reminder-";

/// Prefix of the alarm that auto-clears a shown notification.
pub const DISMISS_PREFIX: &str = "dismiss-";

/// The two alarm families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlarmKind {
    /// Fires the reminder notification.
    Reminder,
    /// Clears a stale notification.
    Dismiss,
}

impl AlarmKind {
    /// Name prefix for this family.
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Reminder => REMINDER_PREFIX,
            Self::Dismiss => DISMISS_PREFIX,
        }
    }
}

/// A parsed alarm name: family plus the saved item's URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AlarmName {
    /// Alarm family.
    pub kind: AlarmKind,
    /// URL of the saved item the alarm belongs to.
    pub url: String,
}

impl AlarmName {
    /// Reminder alarm for `url`.
    pub fn reminder(url: impl Into<String>) -> Self {
        Self {
            kind: AlarmKind::Reminder,
            url: url.into(),
        }
    }

    /// Auto-dismiss alarm for `url`.
    pub fn dismiss(url: impl Into<String>) -> Self {
        Self {
            kind: AlarmKind::Dismiss,
            url: url.into(),
        }
    }

    /// Parse a platform alarm name. Returns `None` for names outside the
    /// two families.
    pub fn parse(name: &str) -> Option<Self> {
        if let Some(url) = name.strip_prefix(REMINDER_PREFIX) {
            Some(Self::reminder(url))
        } else {
            name.strip_prefix(DISMISS_PREFIX).map(Self::dismiss)
        }
    }
}

impl fmt::Display for AlarmName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind.prefix(), self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_and_parse() {
        let name = AlarmName::reminder("https://example.com/a?b=c");
        assert_eq!(name.to_string(), "reminder-https://example.com/a?b=c");
        assert_eq!(AlarmName::parse(&name.to_string()), Some(name));

        let dismiss = AlarmName::parse("dismiss-https://example.com").unwrap();
        assert_eq!(dismiss.kind, AlarmKind::Dismiss);
        assert_eq!(dismiss.url, "https://example.com");
    }

    #[test]
    fn test_only_leading_prefix_is_stripped() {
        let name = AlarmName::parse("reminder-https://x.test/reminder-notes").unwrap();
        assert_eq!(name.url, "https://x.test/reminder-notes");
    }

    #[test]
    fn test_unknown_family() {
        assert_eq!(AlarmName::parse("cleanup-https://example.com"), None);
        assert_eq!(AlarmName::parse(""), None);
    }
}
