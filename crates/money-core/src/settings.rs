//! Process-wide settings.
//!
//! [`Settings`] holds the **display locale override**: the locale a host
//! application wants localized prices rendered in when the caller does not
//! pass one explicitly.  It is a process-wide singleton accessed via a
//! `std::sync::OnceLock`.
//!
//! Thread safety: the override is stored behind an `RwLock` so that it can be
//! read concurrently and changed from any thread.  Tests that change it should
//! use [`ScopedDisplayLocale`], which restores the previous value on drop.

use std::sync::{OnceLock, PoisonError, RwLock};

/// Process-wide settings used by the formatting functions.
///
/// When no override is set, localized formatting uses each currency's own
/// default locale.
pub struct Settings {
    display_locale: RwLock<Option<String>>,
}

static INSTANCE: OnceLock<Settings> = OnceLock::new();

impl Settings {
    /// Return a reference to the global singleton.
    pub fn instance() -> &'static Settings {
        INSTANCE.get_or_init(|| Settings {
            display_locale: RwLock::new(None),
        })
    }

    /// Return the current display locale override, if any.
    pub fn display_locale(&self) -> Option<String> {
        self.display_locale
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Set the display locale override (e.g. `"de_DE"`).
    pub fn set_display_locale(&self, locale: impl Into<String>) {
        let locale = locale.into();
        tracing::debug!(%locale, "display locale override set");
        *self
            .display_locale
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(locale);
    }

    /// Clear the override, reverting to per-currency default locales.
    pub fn reset_display_locale(&self) {
        *self
            .display_locale
            .write()
            .unwrap_or_else(PoisonError::into_inner) = None;
    }

    fn replace_display_locale(&self, locale: Option<String>) -> Option<String> {
        std::mem::replace(
            &mut *self
                .display_locale
                .write()
                .unwrap_or_else(PoisonError::into_inner),
            locale,
        )
    }
}

/// RAII guard that sets the display locale and restores the previous value
/// when dropped.
#[must_use = "the override is reverted as soon as the guard is dropped"]
pub struct ScopedDisplayLocale {
    previous: Option<String>,
}

impl ScopedDisplayLocale {
    /// Install `locale` as the display locale override for this scope.
    pub fn new(locale: impl Into<String>) -> Self {
        let previous = Settings::instance().replace_display_locale(Some(locale.into()));
        Self { previous }
    }
}

impl Drop for ScopedDisplayLocale {
    fn drop(&mut self) {
        Settings::instance().replace_display_locale(self.previous.take());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scoped_override_is_restored() {
        let before = Settings::instance().display_locale();
        {
            let _guard = ScopedDisplayLocale::new("fr_FR");
            assert_eq!(
                Settings::instance().display_locale().as_deref(),
                Some("fr_FR")
            );
        }
        assert_eq!(Settings::instance().display_locale(), before);
    }
}
