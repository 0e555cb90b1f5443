//! Site-wide tuning constants. Page content lives in `data/catalog.json`,
//! everything time- or distance-shaped lives here.

/// Fixed navbar height compensated for when smooth-scrolling to a section.
pub const HEADER_OFFSET_PX: f64 = 80.0;

/// Probe depth below the viewport top used by the scrollspy.
pub const SCROLLSPY_PROBE_PX: f64 = 150.0;

/// Scroll depth past which the navbar switches to its condensed style.
pub const NAV_SCROLLED_AFTER_PX: f64 = 100.0;

/// Viewport width at and above which the mobile menu force-closes.
pub const MOBILE_BREAKPOINT_PX: f64 = 992.0;

/// Cooldown after a programmatic slide navigation during which further
/// navigation commands are ignored (smooth scroll settle time).
pub const NAV_COOLDOWN_MS: u32 = 600;

/// Delay after resize/orientation events before re-checking fullscreen mode.
pub const RESIZE_DEBOUNCE_MS: u32 = 150;

/// Lock window on the theme toggle to swallow rapid double-clicks.
pub const THEME_TOGGLE_LOCK_MS: u32 = 400;

/// How long theme-toggle buttons keep their `switching` class.
pub const THEME_SWITCH_ANIM_MS: u32 = 600;

// Typewriter pacing.
pub const TYPE_CHAR_MS: u32 = 100;
pub const DELETE_CHAR_MS: u32 = 50;
pub const HOLD_LINE_MS: u32 = 2_000;
pub const NEXT_LINE_REST_MS: u32 = 500;

// Stat counters: targets are reached in at most `COUNTER_STEPS` ticks.
pub const COUNTER_TICK_MS: u32 = 10;
pub const COUNTER_STEPS: u32 = 200;

/// Visibility ratio at which a stat counter starts animating.
pub const COUNTER_VISIBLE_RATIO: f64 = 0.5;

// Scroll-reveal sections: the margin widens the viewport so blocks start
// revealing slightly before they scroll in.
pub const REVEAL_VISIBLE_RATIO: f64 = 0.15;
pub const REVEAL_ROOT_MARGIN: &str = "50px";

/// Visibility ratio at which the outcome chart bars grow in.
pub const CHART_VISIBLE_RATIO: f64 = 0.3;

// Touch navigation in the presentation deck.
pub const SWIPE_MIN_DISTANCE_PX: f64 = 50.0;
pub const SWIPE_MAX_DURATION_MS: f64 = 300.0;

/// Minimum intersection ratio before a slide is adopted as current.
pub const SLIDE_ADOPT_RATIO: f64 = 0.5;

/// How close (px) the viewport must be to the screen size to call it F11
/// fullscreen when no fullscreen-API element is active.
pub const F11_TOLERANCE_PX: f64 = 30.0;

/// Wait after an F11 press before re-measuring the viewport; the browser
/// resizes the window a beat after the keydown.
pub const FULLSCREEN_RECHECK_MS: u32 = 100;

/// Minimum gap between cursor-follower position writes.
pub const CURSOR_THROTTLE_MS: f64 = 16.0;

/// Status banners (contact form) dismiss themselves after this long.
pub const BANNER_DISMISS_MS: u32 = 5_000;

/// The `preload` class is lifted from `<body>` this long after mount so
/// CSS transitions stay quiet during the initial paint.
pub const PRELOAD_LIFT_MS: u32 = 100;
