//! Full-screen slide deck. A struct component owns the deck state and all
//! the document-level wiring: keyboard and swipe navigation, the
//! intersection observer that keeps the indicator honest when the user
//! free-scrolls, F11 detection, the `--vh` unit fix and the cursor
//! follower. Pure decisions live in [`crate::deck`].

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{
    Element, EventTarget, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, KeyboardEvent, MouseEvent, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition, TouchEvent, UrlSearchParams,
};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::content::Catalog;
use crate::deck::{self, DeckState, NavCommand};
use crate::Route;

/// Slide carrying the animated outcome chart.
const CHART_SLIDE: usize = 4;

/// Outcome chart bars: label, full height in px, grow-in delay in ms.
const BARS: [(&str, u32, u32); 4] = [
    ("Backend", 250, 0),
    ("Full-stack", 200, 200),
    ("Data", 150, 400),
    ("Platform", 230, 600),
];

/// Keys are ignored while one of these has focus.
fn is_text_input(tag: &str) -> bool {
    matches!(tag, "INPUT" | "TEXTAREA")
}

/// `slide-<n>` element ids back to deck indices.
fn slide_index(id: &str) -> Option<usize> {
    id.strip_prefix("slide-")?.parse().ok()
}

/// `?slide=N` uses the human numbering shown in the counter.
fn start_index(raw: &str) -> Option<usize> {
    raw.parse::<usize>().ok().map(|n| n.saturating_sub(1))
}

/// F11 fullscreen has no API signal, so compare the viewport to the
/// screen. An active fullscreen-API element is not F11 mode.
fn f11_fullscreen(
    inner_w: f64,
    inner_h: f64,
    screen_w: f64,
    screen_h: f64,
    has_fullscreen_element: bool,
) -> bool {
    if has_fullscreen_element {
        return false;
    }
    inner_h >= screen_h - config::F11_TOLERANCE_PX && inner_w >= screen_w - config::F11_TOLERANCE_PX
}

fn start_slide_from_query() -> Option<usize> {
    let search = web_sys::window()?.location().search().ok()?;
    let params = UrlSearchParams::new_with_str(&search).ok()?;
    start_index(&params.get("slide")?)
}

fn scroll_to_slide(index: usize, smooth: bool) {
    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(document) => document,
        None => return,
    };
    if let Some(el) = document.get_element_by_id(&format!("slide-{}", index)) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(if smooth {
            ScrollBehavior::Smooth
        } else {
            ScrollBehavior::Auto
        });
        options.set_block(ScrollLogicalPosition::Start);
        el.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

pub enum Msg {
    /// A navigation request from any input source.
    Command(NavCommand),
    /// The post-navigation cooldown elapsed.
    CooldownDone,
    /// The observer saw this slide dominate the viewport.
    AdoptVisible(usize),
    /// Viewport geometry changed: refresh `--vh` and the F11 heuristic.
    Viewport,
    /// The chart slide crossed its visibility threshold.
    ChartVisible(bool),
}

type ObserverPair = (
    IntersectionObserver,
    Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
);

pub struct Presentation {
    deck: DeckState,
    catalog: Catalog,
    chart_armed: bool,
    fullscreen: bool,
    cursor_ref: NodeRef,
    hooks: Vec<(EventTarget, &'static str, Closure<dyn FnMut(web_sys::Event)>)>,
    slide_observer: Option<ObserverPair>,
    chart_observer: Option<ObserverPair>,
    resize_debounce: Rc<RefCell<Option<Timeout>>>,
    touch_start: Rc<Cell<(f64, f64)>>,
    last_cursor_move: Rc<Cell<f64>>,
}

impl Component for Presentation {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let catalog = Catalog::load();
        let total = catalog.slides.len();
        let start = start_slide_from_query().unwrap_or(0);

        Self {
            deck: DeckState::with_start(total, start),
            catalog,
            chart_armed: false,
            fullscreen: false,
            cursor_ref: NodeRef::default(),
            hooks: Vec::new(),
            slide_observer: None,
            chart_observer: None,
            resize_debounce: Rc::new(RefCell::new(None)),
            touch_start: Rc::new(Cell::new((0.0, 0.0))),
            last_cursor_move: Rc::new(Cell::new(0.0)),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Command(cmd) => {
                if let Some(target) = self.deck.navigate(cmd) {
                    scroll_to_slide(target, true);
                    let link = ctx.link().clone();
                    let timeout = Timeout::new(config::NAV_COOLDOWN_MS, move || {
                        link.send_message(Msg::CooldownDone);
                    });
                    timeout.forget();
                    true
                } else {
                    false
                }
            }
            Msg::CooldownDone => {
                self.deck.finish_navigation();
                false
            }
            Msg::AdoptVisible(index) => self.deck.adopt_visible(index),
            Msg::Viewport => {
                self.apply_viewport();
                false
            }
            Msg::ChartVisible(armed) => {
                if self.chart_armed == armed {
                    false
                } else {
                    self.chart_armed = armed;
                    true
                }
            }
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }
        let window = match web_sys::window() {
            Some(window) => window,
            None => return,
        };
        let document = match window.document() {
            Some(document) => document,
            None => return,
        };

        self.attach_keyboard(ctx, &document);
        self.attach_touch(ctx, &document);
        self.attach_viewport_watchers(ctx, &window, &document);
        self.attach_cursor_follower(&document);
        self.install_slide_observer(ctx, &document);
        self.install_chart_observer(ctx, &document);

        ctx.link().send_message(Msg::Viewport);
        if self.deck.current() > 0 {
            scroll_to_slide(self.deck.current(), false);
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        for (target, kind, closure) in self.hooks.drain(..) {
            let _ = target
                .remove_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
        }
        if let Some((observer, _cb)) = self.slide_observer.take() {
            observer.disconnect();
        }
        if let Some((observer, _cb)) = self.chart_observer.take() {
            observer.disconnect();
        }
        *self.resize_debounce.borrow_mut() = None;

        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let _ = body.class_list().remove_1("fullscreen-mode");
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let current = self.deck.current();
        let total = self.deck.total();

        html! {
            <div class="deck">
                <style>{STYLE}</style>

                <header class="deck-topbar">
                    <span class="deck-brand">{ "JavaNova" }<span class="deck-brand-accent">{ "Academy" }</span></span>
                    <div class="deck-progress" aria-hidden="true">
                        <div
                            class="deck-progress-fill"
                            style={format!("width: {}%;", self.deck.progress_percent())}
                        ></div>
                    </div>
                    <Link<Route> to={Route::Home} classes="deck-exit">{ "Exit" }</Link<Route>>
                </header>

                <main class="slides">
                    { for (0..total).map(|i| self.render_slide(ctx, i)) }
                </main>

                {
                    // Nothing to steer on an empty deck.
                    if total > 0 {
                        html! {
                            <div class="deck-controls">
                                <button
                                    class="deck-arrow"
                                    aria-label="Previous slide"
                                    disabled={self.deck.at_first()}
                                    onclick={link.callback(|_| Msg::Command(NavCommand::Prev))}
                                >
                                    { "↑" }
                                </button>
                                <div class="deck-indicators" role="tablist">
                                    { for (0..total).map(|i| {
                                        let title = self.catalog.slides.get(i).map(|s| s.title.clone()).unwrap_or_default();
                                        html! {
                                            <button
                                                class={classes!("deck-dot", (i == current).then(|| "active"))}
                                                title={title}
                                                aria-label={format!("Go to slide {}", i + 1)}
                                                onclick={link.callback(move |_| Msg::Command(NavCommand::GoTo(i)))}
                                            ></button>
                                        }
                                    })}
                                </div>
                                <button
                                    class="deck-arrow"
                                    aria-label="Next slide"
                                    disabled={self.deck.at_last()}
                                    onclick={link.callback(|_| Msg::Command(NavCommand::Next))}
                                >
                                    { "↓" }
                                </button>
                                <span class="deck-counter">{ format!("{} / {}", current + 1, total) }</span>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }

                <div class="cursor-follower" ref={self.cursor_ref.clone()}></div>
            </div>
        }
    }
}

impl Presentation {
    fn hook(
        &mut self,
        target: &EventTarget,
        kind: &'static str,
        f: impl FnMut(web_sys::Event) + 'static,
    ) {
        let closure = Closure::wrap(Box::new(f) as Box<dyn FnMut(web_sys::Event)>);
        if target
            .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
            .is_ok()
        {
            self.hooks.push((target.clone(), kind, closure));
        }
    }

    fn attach_keyboard(&mut self, ctx: &Context<Self>, document: &web_sys::Document) {
        let link = ctx.link().clone();
        self.hook(document.as_ref(), "keydown", move |event| {
            let e = match event.dyn_ref::<KeyboardEvent>() {
                Some(e) => e.clone(),
                None => return,
            };
            let in_field = e
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .map(|el| is_text_input(&el.tag_name()))
                .unwrap_or(false);
            if in_field {
                return;
            }
            if e.key() == "F11" {
                // The window resizes a moment after the key lands.
                let link = link.clone();
                let timeout = Timeout::new(config::FULLSCREEN_RECHECK_MS, move || {
                    link.send_message(Msg::Viewport);
                });
                timeout.forget();
                return;
            }
            if let Some(cmd) = deck::command_for_key(&e.key()) {
                e.prevent_default();
                link.send_message(Msg::Command(cmd));
            }
        });
    }

    fn attach_touch(&mut self, ctx: &Context<Self>, document: &web_sys::Document) {
        let touch_start = self.touch_start.clone();
        self.hook(document.as_ref(), "touchstart", move |event| {
            if let Some(e) = event.dyn_ref::<TouchEvent>() {
                if let Some(touch) = e.changed_touches().get(0) {
                    touch_start.set((touch.screen_y() as f64, js_sys::Date::now()));
                }
            }
        });

        let touch_start = self.touch_start.clone();
        let link = ctx.link().clone();
        self.hook(document.as_ref(), "touchend", move |event| {
            if let Some(e) = event.dyn_ref::<TouchEvent>() {
                if let Some(touch) = e.changed_touches().get(0) {
                    let (start_y, started_at) = touch_start.get();
                    let delta = start_y - touch.screen_y() as f64;
                    let elapsed = js_sys::Date::now() - started_at;
                    if let Some(cmd) = deck::swipe_command(delta, elapsed) {
                        link.send_message(Msg::Command(cmd));
                    }
                }
            }
        });
    }

    fn attach_viewport_watchers(
        &mut self,
        ctx: &Context<Self>,
        window: &web_sys::Window,
        document: &web_sys::Document,
    ) {
        for kind in ["resize", "orientationchange"] {
            let link = ctx.link().clone();
            let debounce = self.resize_debounce.clone();
            self.hook(window.as_ref(), kind, move |_event| {
                let link = link.clone();
                let timeout = Timeout::new(config::RESIZE_DEBOUNCE_MS, move || {
                    link.send_message(Msg::Viewport);
                });
                // Replacing the handle cancels the pending one.
                *debounce.borrow_mut() = Some(timeout);
            });
        }

        let link = ctx.link().clone();
        self.hook(document.as_ref(), "fullscreenchange", move |_event| {
            link.send_message(Msg::Viewport);
        });
    }

    fn attach_cursor_follower(&mut self, document: &web_sys::Document) {
        let cursor = self.cursor_ref.clone();
        let last_move = self.last_cursor_move.clone();
        self.hook(document.as_ref(), "mousemove", move |event| {
            let e = match event.dyn_ref::<MouseEvent>() {
                Some(e) => e.clone(),
                None => return,
            };
            let now = js_sys::Date::now();
            if now - last_move.get() < config::CURSOR_THROTTLE_MS {
                return;
            }
            last_move.set(now);
            if let Some(el) = cursor.cast::<HtmlElement>() {
                let style = el.style();
                let _ = style.set_property("left", &format!("{}px", e.client_x()));
                let _ = style.set_property("top", &format!("{}px", e.client_y()));
            }
        });

        let cursor = self.cursor_ref.clone();
        self.hook(document.as_ref(), "mousedown", move |_event| {
            if let Some(el) = cursor.cast::<HtmlElement>() {
                let _ = el.class_list().add_1("click");
            }
        });

        let cursor = self.cursor_ref.clone();
        self.hook(document.as_ref(), "mouseup", move |_event| {
            if let Some(el) = cursor.cast::<HtmlElement>() {
                let _ = el.class_list().remove_1("click");
            }
        });
    }

    fn install_slide_observer(&mut self, ctx: &Context<Self>, document: &web_sys::Document) {
        let link = ctx.link().clone();
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                let mut visible = Vec::new();
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if !entry.is_intersecting() {
                        continue;
                    }
                    if let Some(index) = slide_index(&entry.target().id()) {
                        visible.push((index, entry.intersection_ratio()));
                    }
                }
                if let Some(index) = deck::most_visible(&visible) {
                    link.send_message(Msg::AdoptVisible(index));
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let thresholds = js_sys::Array::new();
        for t in [0.1, 0.3, 0.5, 0.7, 0.9] {
            thresholds.push(&JsValue::from_f64(t));
        }
        let options = IntersectionObserverInit::new();
        options.set_threshold(&thresholds.into());

        if let Ok(observer) =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
        {
            if let Ok(slides) = document.query_selector_all(".slide") {
                for i in 0..slides.length() {
                    if let Some(el) = slides.get(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                        observer.observe(&el);
                    }
                }
            }
            self.slide_observer = Some((observer, callback));
        }
    }

    fn install_chart_observer(&mut self, ctx: &Context<Self>, document: &web_sys::Document) {
        let chart_slide = match document.get_element_by_id(&format!("slide-{}", CHART_SLIDE)) {
            Some(el) => el,
            None => return,
        };

        let link = ctx.link().clone();
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    // Bars grow in view and collapse again off view.
                    link.send_message(Msg::ChartVisible(entry.is_intersecting()));
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(config::CHART_VISIBLE_RATIO));

        if let Ok(observer) =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
        {
            observer.observe(&chart_slide);
            self.chart_observer = Some((observer, callback));
        }
    }

    fn apply_viewport(&mut self) {
        let window = match web_sys::window() {
            Some(window) => window,
            None => return,
        };
        let inner_w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let inner_h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);

        // Mobile browser chrome makes 100vh lie; expose the real unit.
        if let Some(root) = window
            .document()
            .and_then(|d| d.document_element())
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        {
            let _ = root
                .style()
                .set_property("--vh", &format!("{}px", inner_h * 0.01));
        }

        let screen = window.screen().ok();
        let screen_w = screen.as_ref().and_then(|s| s.width().ok()).unwrap_or(0) as f64;
        let screen_h = screen.as_ref().and_then(|s| s.height().ok()).unwrap_or(0) as f64;
        let has_element = window
            .document()
            .map(|d| d.fullscreen_element().is_some())
            .unwrap_or(false);

        let fullscreen = f11_fullscreen(inner_w, inner_h, screen_w, screen_h, has_element);
        if fullscreen != self.fullscreen {
            self.fullscreen = fullscreen;
            if let Some(body) = window.document().and_then(|d| d.body()) {
                if fullscreen {
                    let _ = body.class_list().add_1("fullscreen-mode");
                } else {
                    let _ = body.class_list().remove_1("fullscreen-mode");
                }
            }
        }
    }

    fn render_slide(&self, ctx: &Context<Self>, index: usize) -> Html {
        let current = self.deck.current();
        let title = self
            .catalog
            .slides
            .get(index)
            .map(|s| s.title.as_str())
            .unwrap_or("");

        html! {
            <section
                id={format!("slide-{}", index)}
                class={classes!("slide", (index == current).then(|| "active"))}
            >
                <div class="slide-inner">
                    { self.slide_body(ctx, index, title) }
                </div>
            </section>
        }
    }

    fn slide_body(&self, ctx: &Context<Self>, index: usize, title: &str) -> Html {
        let link = ctx.link();
        match index {
            0 => html! {
                <>
                    <p class="slide-kicker">{ "JavaNova Academy" }</p>
                    <h1 class="slide-headline">{ "Java, taught like a job" }</h1>
                    <p class="slide-sub">
                        { "Eight slides on how we turn beginners into engineers \
                           that teams trust with production." }
                    </p>
                    <button
                        class="slide-cta"
                        onclick={link.callback(|_| Msg::Command(NavCommand::Next))}
                    >
                        { "Begin ↓" }
                    </button>
                </>
            },
            1 => html! {
                <>
                    <h2 class="slide-title">{ title }</h2>
                    <div class="slide-cards">
                        <div class="slide-card">
                            <h3>{ "Projects over quizzes" }</h3>
                            <p>{ "Every module ships runnable software." }</p>
                        </div>
                        <div class="slide-card">
                            <h3>{ "Weekly code review" }</h3>
                            <p>{ "Working engineers hold your code to their standards." }</p>
                        </div>
                        <div class="slide-card">
                            <h3>{ "Hiring partners" }</h3>
                            <p>{ "Capstones go straight to partner companies." }</p>
                        </div>
                    </div>
                </>
            },
            2 => html! {
                <>
                    <h2 class="slide-title">{ title }</h2>
                    <ul class="slide-course-list">
                        { for self.catalog.courses.iter().map(|course| html! {
                            <li key={course.title.clone()}>
                                <span class="slide-course-name">{ &course.title }</span>
                                <span class="slide-course-meta">
                                    { format!("{} · {} weeks", course.level.label(), course.weeks) }
                                </span>
                            </li>
                        })}
                    </ul>
                </>
            },
            3 => html! {
                <>
                    <h2 class="slide-title">{ title }</h2>
                    <ol class="slide-steps">
                        <li><strong>{ "Build" }</strong>{ " a weekly project from a real brief" }</li>
                        <li><strong>{ "Review" }</strong>{ " it line by line with a mentor" }</li>
                        <li><strong>{ "Refactor" }</strong>{ " until it would pass a team review" }</li>
                        <li><strong>{ "Ship" }</strong>{ " it to your public portfolio" }</li>
                    </ol>
                </>
            },
            4 => html! {
                <>
                    <h2 class="slide-title">{ title }</h2>
                    <p class="slide-sub">{ "Graduates placed per track, last cohort year." }</p>
                    <div class="chart">
                        { for BARS.iter().map(|&(label, height, delay)| {
                            let bar_style = if self.chart_armed {
                                format!("height: {}px; transition-delay: {}ms;", height, delay)
                            } else {
                                "height: 0px;".to_string()
                            };
                            html! {
                                <div class="chart-col" key={label}>
                                    <div class="chart-bar" style={bar_style}></div>
                                    <span class="chart-label">{ label }</span>
                                </div>
                            }
                        })}
                    </div>
                </>
            },
            5 => html! {
                <>
                    <h2 class="slide-title">{ title }</h2>
                    <div class="slide-cards">
                        <div class="slide-card">
                            <h3>{ "Elena Novak" }</h3>
                            <p>{ "Staff engineer, payments infrastructure" }</p>
                        </div>
                        <div class="slide-card">
                            <h3>{ "Marcus Webb" }</h3>
                            <p>{ "JVM performance consultant" }</p>
                        </div>
                        <div class="slide-card">
                            <h3>{ "Priya Sharma" }</h3>
                            <p>{ "Spring contributor, ex-SRE" }</p>
                        </div>
                    </div>
                </>
            },
            6 => html! {
                <>
                    <h2 class="slide-title">{ title }</h2>
                    <div class="slide-plans">
                        { for self.catalog.plans.iter().map(|plan| html! {
                            <div
                                class={classes!("slide-plan", plan.popular.then(|| "popular"))}
                                key={plan.name.clone()}
                            >
                                <span class="slide-plan-name">{ &plan.name }</span>
                                <span class="slide-plan-price">{ format!("${}/mo", plan.monthly) }</span>
                            </div>
                        })}
                    </div>
                    <p class="slide-sub">{ "Annual billing takes 20% off." }</p>
                </>
            },
            _ => html! {
                <>
                    <h2 class="slide-title">{ title }</h2>
                    <p class="slide-sub">{ "The next cohort starts soon. Save your seat." }</p>
                    <div class="slide-actions">
                        <Link<Route> to={Route::Home} classes="slide-cta">
                            { "Visit the site" }
                        </Link<Route>>
                        <button
                            class="slide-cta ghost"
                            onclick={link.callback(|_| Msg::Command(NavCommand::First))}
                        >
                            { "Restart deck" }
                        </button>
                    </div>
                </>
            },
        }
    }
}

const STYLE: &str = r#"
    body {
        margin: 0;
        background: #0b0b1a;
    }
    body.mobile-menu-open {
        overflow: hidden;
    }
    .deck {
        font-family: 'Inter', 'Segoe UI', system-ui, sans-serif;
        color: #f4f4fb;
        background:
            radial-gradient(circle at 15% 20%, rgba(139, 92, 246, 0.25), transparent 40%),
            radial-gradient(circle at 85% 80%, rgba(255, 140, 66, 0.18), transparent 40%),
            #0b0b1a;
    }
    .deck-topbar {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        display: flex;
        align-items: center;
        gap: 18px;
        padding: 14px 22px;
        z-index: 50;
        background: rgba(11, 11, 26, 0.82);
        backdrop-filter: blur(8px);
    }
    .deck-brand {
        font-weight: 800;
    }
    .deck-brand-accent {
        color: #ff8c42;
        margin-left: 4px;
    }
    .deck-progress {
        flex: 1;
        height: 4px;
        border-radius: 2px;
        background: rgba(255, 255, 255, 0.15);
        overflow: hidden;
    }
    .deck-progress-fill {
        height: 100%;
        background: linear-gradient(90deg, #ff8c42, #8b5cf6);
        transition: width 0.4s ease;
    }
    .deck-exit {
        color: rgba(244, 244, 251, 0.7);
        text-decoration: none;
        font-weight: 600;
    }
    .deck-exit:hover {
        color: #fff;
    }
    body.fullscreen-mode .deck-topbar {
        transform: translateY(-100%);
        transition: transform 0.3s ease;
    }

    .slide {
        min-height: calc(var(--vh, 1vh) * 100);
        display: flex;
        align-items: center;
        justify-content: center;
        padding: 90px 24px 60px;
        opacity: 0.45;
        transition: opacity 0.5s ease;
    }
    .slide.active {
        opacity: 1;
    }
    .slide-inner {
        max-width: 860px;
        width: 100%;
        text-align: center;
    }
    .slide-kicker {
        text-transform: uppercase;
        letter-spacing: 0.2em;
        color: #ff8c42;
        font-weight: 700;
        font-size: 0.85rem;
    }
    .slide-headline {
        font-size: clamp(2.2rem, 6vw, 4rem);
        margin: 10px 0 16px;
    }
    .slide-title {
        font-size: clamp(1.8rem, 4vw, 2.6rem);
        margin: 0 0 24px;
    }
    .slide-sub {
        color: rgba(244, 244, 251, 0.75);
        max-width: 560px;
        margin: 0 auto 26px;
    }
    .slide-cta {
        display: inline-block;
        padding: 13px 30px;
        border: none;
        border-radius: 8px;
        background: linear-gradient(90deg, #ff8c42, #8b5cf6);
        color: #fff;
        font-size: 1rem;
        font-weight: 700;
        cursor: pointer;
        text-decoration: none;
    }
    .slide-cta.ghost {
        background: none;
        border: 2px solid rgba(244, 244, 251, 0.4);
    }
    .slide-actions {
        display: flex;
        gap: 14px;
        justify-content: center;
        flex-wrap: wrap;
    }
    .slide-cards {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
        gap: 18px;
        text-align: left;
    }
    .slide-card {
        background: rgba(255, 255, 255, 0.06);
        border: 1px solid rgba(255, 255, 255, 0.12);
        border-radius: 12px;
        padding: 22px;
    }
    .slide-card h3 {
        margin: 0 0 8px;
    }
    .slide-card p {
        margin: 0;
        color: rgba(244, 244, 251, 0.75);
    }
    .slide-course-list {
        list-style: none;
        padding: 0;
        margin: 0;
        text-align: left;
        max-width: 560px;
        margin: 0 auto;
    }
    .slide-course-list li {
        display: flex;
        justify-content: space-between;
        gap: 16px;
        padding: 12px 4px;
        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
    }
    .slide-course-meta {
        color: rgba(244, 244, 251, 0.6);
        white-space: nowrap;
    }
    .slide-steps {
        text-align: left;
        max-width: 480px;
        margin: 0 auto;
        line-height: 2.1;
        font-size: 1.1rem;
    }
    .slide-plans {
        display: flex;
        gap: 16px;
        justify-content: center;
        flex-wrap: wrap;
        margin-bottom: 20px;
    }
    .slide-plan {
        display: flex;
        flex-direction: column;
        gap: 6px;
        padding: 18px 26px;
        border-radius: 12px;
        border: 1px solid rgba(255, 255, 255, 0.15);
    }
    .slide-plan.popular {
        border-color: #ff8c42;
        box-shadow: 0 0 24px rgba(255, 140, 66, 0.3);
    }
    .slide-plan-name {
        font-weight: 700;
    }
    .slide-plan-price {
        font-size: 1.4rem;
        font-weight: 800;
        color: #ff8c42;
    }

    .chart {
        display: flex;
        gap: 28px;
        justify-content: center;
        align-items: flex-end;
        height: 300px;
    }
    .chart-col {
        display: flex;
        flex-direction: column;
        align-items: center;
        gap: 10px;
        justify-content: flex-end;
        height: 100%;
    }
    .chart-bar {
        width: 62px;
        border-radius: 8px 8px 0 0;
        background: linear-gradient(180deg, #8b5cf6, #ff8c42);
        transition: height 0.8s ease;
    }
    .chart-label {
        color: rgba(244, 244, 251, 0.7);
        font-size: 0.9rem;
    }

    .deck-controls {
        position: fixed;
        right: 18px;
        top: 50%;
        transform: translateY(-50%);
        display: flex;
        flex-direction: column;
        align-items: center;
        gap: 12px;
        z-index: 50;
    }
    .deck-arrow {
        width: 40px;
        height: 40px;
        border-radius: 50%;
        border: 1px solid rgba(255, 255, 255, 0.25);
        background: rgba(255, 255, 255, 0.08);
        color: #fff;
        font-size: 1.1rem;
        cursor: pointer;
        transition: background 0.2s ease;
    }
    .deck-arrow:hover:not(:disabled) {
        background: rgba(255, 255, 255, 0.2);
    }
    .deck-arrow:disabled {
        opacity: 0.3;
        cursor: default;
    }
    .deck-indicators {
        display: flex;
        flex-direction: column;
        gap: 8px;
    }
    .deck-dot {
        width: 10px;
        height: 10px;
        border-radius: 50%;
        border: none;
        padding: 0;
        background: rgba(255, 255, 255, 0.3);
        cursor: pointer;
        transition: background 0.2s ease, transform 0.2s ease;
    }
    .deck-dot.active {
        background: #ff8c42;
        transform: scale(1.4);
    }
    .deck-counter {
        font-size: 0.8rem;
        color: rgba(244, 244, 251, 0.6);
        writing-mode: vertical-rl;
    }
    @media (max-width: 768px) {
        .deck-controls {
            right: 0;
            left: 0;
            top: auto;
            bottom: 10px;
            transform: none;
            flex-direction: row;
            justify-content: center;
        }
        .deck-indicators {
            flex-direction: row;
        }
        .deck-counter {
            writing-mode: horizontal-tb;
        }
        .cursor-follower {
            display: none;
        }
    }

    .cursor-follower {
        position: fixed;
        left: -100px;
        top: -100px;
        width: 26px;
        height: 26px;
        border: 2px solid rgba(255, 140, 66, 0.8);
        border-radius: 50%;
        pointer-events: none;
        transform: translate(-50%, -50%);
        transition: transform 0.12s ease;
        z-index: 200;
    }
    .cursor-follower.click {
        transform: translate(-50%, -50%) scale(0.6);
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slide_ids_parse_back_to_indices() {
        assert_eq!(slide_index("slide-0"), Some(0));
        assert_eq!(slide_index("slide-7"), Some(7));
        assert_eq!(slide_index("slide-"), None);
        assert_eq!(slide_index("slide-x"), None);
        assert_eq!(slide_index("hero"), None);
    }

    #[test]
    fn test_query_numbering_is_one_based() {
        assert_eq!(start_index("1"), Some(0));
        assert_eq!(start_index("3"), Some(2));
        assert_eq!(start_index("0"), Some(0));
        assert_eq!(start_index("nope"), None);
    }

    #[test]
    fn test_text_inputs_swallow_deck_keys() {
        assert!(is_text_input("INPUT"));
        assert!(is_text_input("TEXTAREA"));
        assert!(!is_text_input("BUTTON"));
        assert!(!is_text_input("DIV"));
    }

    #[test]
    fn test_f11_heuristic_tolerates_chrome_padding() {
        assert!(f11_fullscreen(1920.0, 1080.0, 1920.0, 1080.0, false));
        assert!(f11_fullscreen(1920.0, 1050.0, 1920.0, 1080.0, false));
        assert!(!f11_fullscreen(1920.0, 1049.0, 1920.0, 1080.0, false));
        assert!(!f11_fullscreen(1200.0, 800.0, 1920.0, 1080.0, false));
    }

    #[test]
    fn test_api_fullscreen_is_never_f11() {
        assert!(!f11_fullscreen(640.0, 480.0, 1920.0, 1080.0, true));
        assert!(!f11_fullscreen(1920.0, 1080.0, 1920.0, 1080.0, true));
    }
}
