//! Fixed top navigation for the landing page: condensed style after a
//! little scroll, a scrollspy highlighting the section in view, smooth
//! scrolling with the navbar height compensated, the mobile slide-in
//! menu, and the theme toggle.

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    window, HtmlElement, KeyboardEvent, MediaQueryListEvent, MouseEvent, ScrollBehavior,
    ScrollToOptions, StorageEvent,
};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::theme::{self, Theme};
use crate::Route;

/// Section anchors in page order, with their link labels.
pub const SECTIONS: [(&str, &str); 6] = [
    ("hero", "Home"),
    ("about", "About"),
    ("courses", "Courses"),
    ("stats", "Outcomes"),
    ("pricing", "Pricing"),
    ("contact", "Contact"),
];

/// Scrollspy pick: the section whose `[top, top + height)` span contains
/// the probe line. Between spans, or past the last one, nothing is
/// highlighted. Sections come in document order; `(id, top, height)`.
pub fn active_section(probe_y: f64, sections: &[(String, f64, f64)]) -> Option<&str> {
    let mut current = None;
    for (id, top, height) in sections {
        if probe_y >= *top && probe_y < top + height {
            current = Some(id.as_str());
        }
    }
    current
}

/// Smooth-scroll so `id` lands just under the fixed navbar.
pub fn scroll_to_section(id: &str) {
    let window = match window() {
        Some(window) => window,
        None => return,
    };
    let document = match window.document() {
        Some(document) => document,
        None => return,
    };
    if let Some(el) = document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    {
        let top = el.offset_top() as f64 - config::HEADER_OFFSET_PX;
        let options = ScrollToOptions::new();
        options.set_top(top.max(0.0));
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Keep Tab cycling inside the open mobile menu.
fn trap_focus(document: &web_sys::Document, event: &KeyboardEvent) {
    let links = match document.query_selector_all(".mobile-menu a, .mobile-menu button") {
        Ok(links) => links,
        Err(_) => return,
    };
    if links.length() == 0 {
        return;
    }
    let first = links.get(0).and_then(|n| n.dyn_into::<HtmlElement>().ok());
    let last = links
        .get(links.length() - 1)
        .and_then(|n| n.dyn_into::<HtmlElement>().ok());
    let (first, last) = match (first, last) {
        (Some(first), Some(last)) => (first, last),
        _ => return,
    };

    let active = document.active_element();
    let focused_on = |el: &HtmlElement| -> bool {
        let node: &web_sys::Node = el.as_ref();
        active.as_ref().map_or(false, |a| {
            let a: &web_sys::Node = a.as_ref();
            a.is_same_node(Some(node))
        })
    };

    if event.shift_key() {
        if focused_on(&first) {
            event.prevent_default();
            let _ = last.focus();
        }
    } else if focused_on(&last) {
        event.prevent_default();
        let _ = first.focus();
    }
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);
    let active = use_state(|| None::<String>);
    let current_theme = use_state(theme::resolve);
    let theme_locked = use_state(|| false);

    // Write the theme onto the document whenever it changes, and once on
    // mount for the boot value.
    {
        let t = *current_theme;
        use_effect_with_deps(
            move |t| {
                theme::apply(*t);
                || ()
            },
            t,
        );
    }

    // Navbar style + scrollspy follow the scroll position.
    {
        let is_scrolled = is_scrolled.clone();
        let active = active.clone();
        use_effect_with_deps(
            move |_| {
                let window = window().unwrap();
                let document = window.document().unwrap();

                let win = window.clone();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    let y = win.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(y > config::NAV_SCROLLED_AFTER_PX);

                    let mut sections = Vec::new();
                    if let Ok(nodes) = document.query_selector_all("section[id]") {
                        for i in 0..nodes.length() {
                            if let Some(el) =
                                nodes.get(i).and_then(|n| n.dyn_into::<HtmlElement>().ok())
                            {
                                sections.push((
                                    el.id(),
                                    el.offset_top() as f64,
                                    el.offset_height() as f64,
                                ));
                            }
                        }
                    }
                    let probe = y + config::SCROLLSPY_PROBE_PX;
                    active.set(active_section(probe, &sections).map(str::to_string));
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    // React to theme changes made outside this tab or by the OS.
    {
        let current_theme = current_theme.clone();
        use_effect_with_deps(
            move |_| {
                let window = window().unwrap();
                let document = window.document().unwrap();

                let storage_theme = current_theme.clone();
                let on_storage = Closure::wrap(Box::new(move |e: StorageEvent| {
                    if e.key().as_deref() == Some(theme::STORAGE_KEY) {
                        if let Some(t) = e.new_value().as_deref().and_then(Theme::from_str) {
                            storage_theme.set(t);
                        }
                    }
                }) as Box<dyn FnMut(StorageEvent)>);
                window
                    .add_event_listener_with_callback(
                        "storage",
                        on_storage.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                // Only follows the OS while no explicit choice is saved.
                let media = window.match_media("(prefers-color-scheme: dark)").ok().flatten();
                let media_theme = current_theme.clone();
                let on_media = Closure::wrap(Box::new(move |e: MediaQueryListEvent| {
                    if theme::stored().is_none() {
                        media_theme.set(if e.matches() { Theme::Dark } else { Theme::Light });
                    }
                }) as Box<dyn FnMut(MediaQueryListEvent)>);
                if let Some(media) = &media {
                    let _ = media
                        .add_event_listener_with_callback("change", on_media.as_ref().unchecked_ref());
                }

                let vis_theme = current_theme.clone();
                let on_visibility = Closure::wrap(Box::new(move || {
                    vis_theme.set(theme::resolve());
                }) as Box<dyn FnMut()>);
                document
                    .add_event_listener_with_callback(
                        "visibilitychange",
                        on_visibility.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    let _ = window.remove_event_listener_with_callback(
                        "storage",
                        on_storage.as_ref().unchecked_ref(),
                    );
                    if let Some(media) = &media {
                        let _ = media.remove_event_listener_with_callback(
                            "change",
                            on_media.as_ref().unchecked_ref(),
                        );
                    }
                    let _ = document.remove_event_listener_with_callback(
                        "visibilitychange",
                        on_visibility.as_ref().unchecked_ref(),
                    );
                }
            },
            (),
        );
    }

    // Open menu: lock body scroll, close on Escape, trap Tab, and close
    // when the viewport grows past the mobile breakpoint.
    {
        let menu_open_handle = menu_open.clone();
        use_effect_with_deps(
            move |open: &bool| {
                let window = window().unwrap();
                let document = window.document().unwrap();
                if let Some(body) = document.body() {
                    if *open {
                        let _ = body.class_list().add_1("mobile-menu-open");
                    } else {
                        let _ = body.class_list().remove_1("mobile-menu-open");
                    }
                }

                // The scroll lock must not outlive the navbar.
                let mut cleanup: Box<dyn FnOnce()> = {
                    let document = document.clone();
                    Box::new(move || {
                        if let Some(body) = document.body() {
                            let _ = body.class_list().remove_1("mobile-menu-open");
                        }
                    })
                };
                if *open {
                    let close = menu_open_handle.clone();
                    let doc = document.clone();
                    let on_keydown = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                        match e.key().as_str() {
                            "Escape" => close.set(false),
                            "Tab" => trap_focus(&doc, &e),
                            _ => {}
                        }
                    }) as Box<dyn FnMut(KeyboardEvent)>);
                    document
                        .add_event_listener_with_callback(
                            "keydown",
                            on_keydown.as_ref().unchecked_ref(),
                        )
                        .unwrap();

                    let resize_close = menu_open_handle.clone();
                    let win = window.clone();
                    let on_resize = Closure::wrap(Box::new(move || {
                        let width = win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
                        if width >= config::MOBILE_BREAKPOINT_PX {
                            resize_close.set(false);
                        }
                    }) as Box<dyn FnMut()>);
                    window
                        .add_event_listener_with_callback(
                            "resize",
                            on_resize.as_ref().unchecked_ref(),
                        )
                        .unwrap();

                    cleanup = Box::new(move || {
                        let _ = document.remove_event_listener_with_callback(
                            "keydown",
                            on_keydown.as_ref().unchecked_ref(),
                        );
                        let _ = window.remove_event_listener_with_callback(
                            "resize",
                            on_resize.as_ref().unchecked_ref(),
                        );
                        if let Some(body) = document.body() {
                            let _ = body.class_list().remove_1("mobile-menu-open");
                        }
                    });
                }
                cleanup
            },
            *menu_open,
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let section_link = |id: &'static str, label: &'static str| -> Html {
        let onclick = {
            let menu_open = menu_open.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                scroll_to_section(id);
                menu_open.set(false);
            })
        };
        let is_active = (*active).as_deref() == Some(id);
        html! {
            <a
                href={format!("#{}", id)}
                class={classes!("nav-link", is_active.then(|| "active"))}
                {onclick}
            >
                { label }
            </a>
        }
    };

    let theme_button = {
        let current_theme = current_theme.clone();
        let theme_locked = theme_locked.clone();
        move || -> Html {
            let theme_now = *current_theme;
            let onclick = {
                let current_theme = current_theme.clone();
                let theme_locked = theme_locked.clone();
                Callback::from(move |_: MouseEvent| {
                    if *theme_locked {
                        return;
                    }
                    let next = (*current_theme).next();
                    theme::save(next);
                    current_theme.set(next);
                    theme::flash_toggle_buttons();

                    theme_locked.set(true);
                    let unlock = theme_locked.clone();
                    let timeout = Timeout::new(config::THEME_TOGGLE_LOCK_MS, move || {
                        unlock.set(false);
                    });
                    timeout.forget();
                })
            };
            html! {
                <button
                    class="theme-toggle"
                    title={format!("Theme: {}", theme_now.label())}
                    aria-label={format!("Switch theme, current is {}", theme_now.label())}
                    disabled={*theme_locked}
                    {onclick}
                >
                    { theme_now.glyph() }
                </button>
            }
        }
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <a class="nav-logo" href="#hero" onclick={{
                    let menu_open = menu_open.clone();
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        scroll_to_section("hero");
                        menu_open.set(false);
                    })
                }}>
                    { "JavaNova" }<span class="logo-accent">{ "Academy" }</span>
                </a>

                <div class="nav-links">
                    { for SECTIONS.iter().map(|&(id, label)| section_link(id, label)) }
                    <div class="nav-link-wrap" onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Presentation} classes="nav-link nav-deck-link">
                            { "Presentation" }
                        </Link<Route>>
                    </div>
                    { theme_button() }
                </div>

                <button
                    class="burger-menu"
                    aria-label="Open menu"
                    aria-expanded={(*menu_open).to_string()}
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>

            <div
                class={classes!("menu-overlay", (*menu_open).then(|| "active"))}
                onclick={close_menu.clone()}
            ></div>
            <div
                class={classes!("mobile-menu", (*menu_open).then(|| "active"))}
                aria-hidden={(!*menu_open).to_string()}
            >
                <button class="menu-close" aria-label="Close menu" onclick={close_menu.clone()}>
                    { "✕" }
                </button>
                { for SECTIONS.iter().map(|&(id, label)| section_link(id, label)) }
                <div class="nav-link-wrap" onclick={close_menu}>
                    <Link<Route> to={Route::Presentation} classes="nav-link nav-deck-link">
                        { "Presentation" }
                    </Link<Route>>
                </div>
                { theme_button() }
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<(String, f64, f64)> {
        vec![
            ("hero".to_string(), 0.0, 600.0),
            ("about".to_string(), 600.0, 800.0),
            ("courses".to_string(), 1400.0, 1000.0),
            ("pricing".to_string(), 2400.0, 900.0),
        ]
    }

    #[test]
    fn test_spy_picks_the_containing_section() {
        let s = sections();
        assert_eq!(active_section(0.0, &s), Some("hero"));
        assert_eq!(active_section(599.0, &s), Some("hero"));
        assert_eq!(active_section(600.0, &s), Some("about"));
        assert_eq!(active_section(2000.0, &s), Some("courses"));
        assert_eq!(active_section(3299.0, &s), Some("pricing"));
    }

    #[test]
    fn test_spy_clears_past_the_last_section() {
        let s = sections();
        // The footer sits below `pricing`; no link stays lit there.
        assert_eq!(active_section(3300.0, &s), None);
        assert_eq!(active_section(9000.0, &s), None);
    }

    #[test]
    fn test_spy_is_empty_above_the_first_section() {
        let s = vec![("about".to_string(), 600.0, 800.0)];
        assert_eq!(active_section(10.0, &s), None);
        assert_eq!(active_section(10.0, &[]), None);
    }
}
