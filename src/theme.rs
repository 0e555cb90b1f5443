//! Four-theme engine: CSS custom properties applied to the document root,
//! preference persisted in local storage, system dark-mode used as the
//! fallback. The DOM half degrades to no-ops when lookups fail (no storage,
//! no document); the enum half is plain data.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::config;

/// Local-storage key holding the explicit theme choice.
pub const STORAGE_KEY: &str = "javanova-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
    HighContrast,
    Sepia,
}

impl Theme {
    pub const ALL: [Theme; 4] = [Theme::Light, Theme::Dark, Theme::HighContrast, Theme::Sepia];

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::HighContrast => "high-contrast",
            Theme::Sepia => "sepia",
        }
    }

    pub fn from_str(id: &str) -> Option<Theme> {
        match id {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            "high-contrast" => Some(Theme::HighContrast),
            "sepia" => Some(Theme::Sepia),
            _ => None,
        }
    }

    /// Toggle order: light → dark → high-contrast → sepia → light.
    pub fn next(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::HighContrast,
            Theme::HighContrast => Theme::Sepia,
            Theme::Sepia => Theme::Light,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
            Theme::HighContrast => "High contrast",
            Theme::Sepia => "Sepia",
        }
    }

    /// Text glyph shown on the toggle button for the *current* theme.
    pub fn glyph(self) -> &'static str {
        match self {
            Theme::Light => "\u{2600}",      // ☀
            Theme::Dark => "\u{263E}",       // ☾
            Theme::HighContrast => "\u{25D0}", // ◐
            Theme::Sepia => "\u{273F}",      // ✿
        }
    }

    /// Custom-property table written onto `:root` when the theme applies.
    pub fn css_vars(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Theme::Light => &[
                ("--theme-bg-primary", "#ffffff"),
                ("--theme-bg-secondary", "#f6f7f9"),
                ("--theme-text-primary", "#10101f"),
                ("--theme-text-secondary", "#3a3a48"),
                ("--theme-accent-primary", "#ff8c42"),
                ("--theme-accent-secondary", "#8b5cf6"),
                ("--theme-navbar-bg", "rgba(255, 255, 255, 0.94)"),
                ("--theme-card-bg", "#ffffff"),
                ("--theme-border", "rgba(0, 0, 0, 0.12)"),
                ("--theme-footer-bg", "#f2f3f5"),
                ("--theme-footer-text", "#10101f"),
            ],
            Theme::Dark => &[
                ("--theme-bg-primary", "#0b0b1a"),
                ("--theme-bg-secondary", "#141432"),
                ("--theme-text-primary", "#ffffff"),
                ("--theme-text-secondary", "#d8d8e2"),
                ("--theme-accent-primary", "#ff8c42"),
                ("--theme-accent-secondary", "#8b5cf6"),
                ("--theme-navbar-bg", "rgba(11, 11, 26, 0.94)"),
                ("--theme-card-bg", "#141432"),
                ("--theme-border", "rgba(255, 255, 255, 0.12)"),
                ("--theme-footer-bg", "#06060f"),
                ("--theme-footer-text", "#ffffff"),
            ],
            Theme::HighContrast => &[
                ("--theme-bg-primary", "#000000"),
                ("--theme-bg-secondary", "#161616"),
                ("--theme-text-primary", "#ffffff"),
                ("--theme-text-secondary", "#ffffff"),
                ("--theme-accent-primary", "#ffff00"),
                ("--theme-accent-secondary", "#00ffff"),
                ("--theme-navbar-bg", "rgba(0, 0, 0, 0.98)"),
                ("--theme-card-bg", "#161616"),
                ("--theme-border", "#ffffff"),
                ("--theme-footer-bg", "#000000"),
                ("--theme-footer-text", "#ffffff"),
            ],
            Theme::Sepia => &[
                ("--theme-bg-primary", "#f4f1e6"),
                ("--theme-bg-secondary", "#eae5d2"),
                ("--theme-text-primary", "#3d382f"),
                ("--theme-text-secondary", "#4c453a"),
                ("--theme-accent-primary", "#d2691e"),
                ("--theme-accent-secondary", "#8b4513"),
                ("--theme-navbar-bg", "rgba(244, 241, 230, 0.94)"),
                ("--theme-card-bg", "#eae5d2"),
                ("--theme-border", "rgba(61, 56, 47, 0.2)"),
                ("--theme-footer-bg", "#e2dcc2"),
                ("--theme-footer-text", "#3d382f"),
            ],
        }
    }
}

/// Resolution order for the boot theme: an explicit saved choice wins,
/// then the OS preference, then light.
pub fn initial_theme(saved: Option<&str>, system_dark: bool) -> Theme {
    if let Some(theme) = saved.and_then(Theme::from_str) {
        return theme;
    }
    if system_dark {
        Theme::Dark
    } else {
        Theme::Light
    }
}

/// Saved identifier, if storage is reachable and holds a known theme id.
pub fn stored() -> Option<Theme> {
    let raw = web_sys::window()?
        .local_storage()
        .ok()
        .flatten()?
        .get_item(STORAGE_KEY)
        .ok()
        .flatten()?;
    Theme::from_str(&raw)
}

pub fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok())
        .flatten()
        .map(|mql| mql.matches())
        .unwrap_or(false)
}

/// Theme the document should show right now.
pub fn resolve() -> Theme {
    let saved = web_sys::window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
        .and_then(|storage| storage.get_item(STORAGE_KEY).ok())
        .flatten();
    initial_theme(saved.as_deref(), system_prefers_dark())
}

/// Write the theme onto the document: custom properties on `:root`, a
/// `data-theme` attribute and a `theme-<id>` class. Does not persist and
/// does not animate; silent applications (boot, other tabs, the OS) go
/// through here too.
pub fn apply(theme: Theme) {
    let root = match web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        Some(root) => root,
        None => return,
    };

    if let Ok(html) = root.clone().dyn_into::<HtmlElement>() {
        let style = html.style();
        for (name, value) in theme.css_vars() {
            let _ = style.set_property(name, value);
        }
    }

    let _ = root.set_attribute("data-theme", theme.as_str());
    let classes = root.class_list();
    for other in Theme::ALL {
        let _ = classes.remove_1(&format!("theme-{}", other.as_str()));
    }
    let _ = classes.add_1(&format!("theme-{}", theme.as_str()));
}

/// Persist an explicit choice. Cross-tab listeners fire off this write.
pub fn save(theme: Theme) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok()).flatten() {
        let _ = storage.set_item(STORAGE_KEY, theme.as_str());
    }
}

/// Spin the `.theme-toggle` buttons for one switch animation. Called on
/// explicit toggles only.
pub fn flash_toggle_buttons() {
    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(document) => document,
        None => return,
    };
    let buttons = match document.query_selector_all(".theme-toggle") {
        Ok(buttons) => buttons,
        Err(_) => return,
    };
    for i in 0..buttons.length() {
        let Some(node) = buttons.get(i) else { continue };
        let Ok(el) = node.dyn_into::<web_sys::Element>() else { continue };
        let _ = el.class_list().add_1("switching");
        let timeout = Timeout::new(config::THEME_SWITCH_ANIM_MS, move || {
            let _ = el.class_list().remove_1("switching");
        });
        timeout.forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_round_trip() {
        for theme in Theme::ALL {
            assert_eq!(Theme::from_str(theme.as_str()), Some(theme));
        }
        assert_eq!(Theme::from_str("midnight"), None);
        assert_eq!(Theme::from_str(""), None);
        assert_eq!(Theme::from_str("Dark"), None);
    }

    #[test]
    fn test_cycle_order_visits_every_theme_once() {
        let mut theme = Theme::Light;
        let mut seen = Vec::new();
        for _ in 0..Theme::ALL.len() {
            seen.push(theme);
            theme = theme.next();
        }
        assert_eq!(theme, Theme::Light);
        assert_eq!(seen, Theme::ALL.to_vec());
    }

    #[test]
    fn test_initial_theme_prefers_saved_choice() {
        assert_eq!(initial_theme(Some("sepia"), true), Theme::Sepia);
        assert_eq!(initial_theme(Some("light"), true), Theme::Light);
    }

    #[test]
    fn test_initial_theme_falls_back_to_system() {
        assert_eq!(initial_theme(None, true), Theme::Dark);
        assert_eq!(initial_theme(None, false), Theme::Light);
        // Garbage in storage is treated as no choice at all.
        assert_eq!(initial_theme(Some("neon"), true), Theme::Dark);
    }

    #[test]
    fn test_var_tables_cover_the_same_properties() {
        let names: Vec<&str> = Theme::Light.css_vars().iter().map(|(n, _)| *n).collect();
        for theme in Theme::ALL {
            let theirs: Vec<&str> = theme.css_vars().iter().map(|(n, _)| *n).collect();
            assert_eq!(theirs, names, "{:?} diverges", theme);
        }
    }

    #[test]
    fn test_backgrounds_differ_between_themes() {
        let bg = |t: Theme| t.css_vars()[0].1;
        assert_ne!(bg(Theme::Light), bg(Theme::Dark));
        assert_ne!(bg(Theme::Dark), bg(Theme::HighContrast));
        assert_ne!(bg(Theme::Light), bg(Theme::Sepia));
    }
}
