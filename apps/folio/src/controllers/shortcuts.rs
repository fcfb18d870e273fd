use crate::controllers::theme::{ThemeController, ThemeStoreError};
use crate::view::document::Document;

#[derive(Debug, Clone, Default)]
pub struct KeyPress {
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    ToggleTheme,
}

/// Ctrl+K or Cmd+K, case-insensitive.
pub fn shortcut_for(press: &KeyPress) -> Option<Shortcut> {
    ((press.ctrl || press.meta) && press.key.eq_ignore_ascii_case("k")).then_some(Shortcut::ToggleTheme)
}

/// Runs the bound action. Returns `true` when the key was consumed and its
/// default action should be suppressed.
pub async fn dispatch(
    press: &KeyPress,
    theme: &mut ThemeController,
    doc: &mut Document,
) -> Result<bool, ThemeStoreError> {
    match shortcut_for(press) {
        Some(Shortcut::ToggleTheme) => {
            theme.toggle(doc).await?;
            Ok(true)
        }
        None => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::controllers::theme::{MemoryThemeStore, Theme};
    use crate::view::shell::host_page;

    fn press(key: &str, ctrl: bool, meta: bool) -> KeyPress {
        KeyPress { key: key.into(), ctrl, meta }
    }

    #[test]
    fn test_modifier_required() {
        assert_eq!(shortcut_for(&press("k", true, false)), Some(Shortcut::ToggleTheme));
        assert_eq!(shortcut_for(&press("K", false, true)), Some(Shortcut::ToggleTheme));
        assert_eq!(shortcut_for(&press("k", false, false)), None);
        assert_eq!(shortcut_for(&press("j", true, false)), None);
    }

    #[tokio::test]
    async fn test_dispatch_toggles_theme() {
        let mut doc = host_page();
        let mut theme = ThemeController::init(Arc::new(MemoryThemeStore::default()), &mut doc).await;

        assert!(dispatch(&press("k", true, false), &mut theme, &mut doc).await.unwrap());
        assert_eq!(theme.current(), Theme::Dark);

        assert!(!dispatch(&press("x", true, false), &mut theme, &mut doc).await.unwrap());
        assert_eq!(theme.current(), Theme::Dark);
    }
}
