//! Slide-deck navigation state. Pure data so the whole thing is testable
//! off the browser; the presentation page owns scrolling, timers and
//! observers and feeds events in here.

use crate::config;

/// A single navigation request, however it arrived (button, key, swipe,
/// indicator dot).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    Next,
    Prev,
    First,
    Last,
    GoTo(usize),
}

/// Where the deck is and whether a scroll animation is still in flight.
///
/// While `navigating` is set every [`NavCommand`] is dropped; the owner
/// clears it via [`DeckState::finish_navigation`] once the cooldown timer
/// fires. Observer-driven adoption deliberately bypasses the flag so the
/// indicator always tracks whatever the user actually sees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckState {
    current: usize,
    total: usize,
    navigating: bool,
}

impl DeckState {
    pub fn new(total: usize) -> Self {
        Self::with_start(total, 0)
    }

    /// Deck opened at `start`, clamped into range. Used for `?slide=N`
    /// deep links. An empty deck stays at index zero.
    pub fn with_start(total: usize, start: usize) -> Self {
        let current = if total == 0 { 0 } else { start.min(total - 1) };
        Self {
            current,
            total,
            navigating: false,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_navigating(&self) -> bool {
        self.navigating
    }

    pub fn at_first(&self) -> bool {
        self.current == 0
    }

    pub fn at_last(&self) -> bool {
        self.current + 1 == self.total
    }

    /// Fill ratio for the progress bar, in percent of the full track.
    pub fn progress_percent(&self) -> f64 {
        if self.total <= 1 {
            return 100.0;
        }
        self.current as f64 / (self.total - 1) as f64 * 100.0
    }

    /// Apply a navigation request. Returns the target index when accepted;
    /// the caller scrolls there and arms the cooldown. Requests landing
    /// outside the deck, during the cooldown, or on an empty deck are
    /// dropped.
    pub fn navigate(&mut self, command: NavCommand) -> Option<usize> {
        if self.total == 0 || self.navigating {
            return None;
        }
        let target = match command {
            NavCommand::Next => self.current.checked_add(1).filter(|&i| i < self.total)?,
            NavCommand::Prev => self.current.checked_sub(1)?,
            NavCommand::First => 0,
            NavCommand::Last => self.total - 1,
            NavCommand::GoTo(index) => {
                if index >= self.total {
                    return None;
                }
                index
            }
        };
        self.current = target;
        self.navigating = true;
        Some(target)
    }

    /// Cooldown elapsed; commands flow again.
    pub fn finish_navigation(&mut self) {
        self.navigating = false;
    }

    /// Adopt the slide the intersection observer reports as dominant.
    /// Runs even mid-navigation so a scroll the deck did not start (drag,
    /// browser find-in-page) still lands in the state. Returns whether the
    /// index changed.
    pub fn adopt_visible(&mut self, index: usize) -> bool {
        if index >= self.total || index == self.current {
            return false;
        }
        self.current = index;
        true
    }
}

/// Pick the slide to adopt out of one observer callback: the entry with
/// the highest ratio, and only when it covers more than
/// [`config::SLIDE_ADOPT_RATIO`] of the viewport.
pub fn most_visible(entries: &[(usize, f64)]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for &(index, ratio) in entries {
        match best {
            Some((_, best_ratio)) if ratio <= best_ratio => {}
            _ => best = Some((index, ratio)),
        }
    }
    best.filter(|&(_, ratio)| ratio > config::SLIDE_ADOPT_RATIO)
        .map(|(index, _)| index)
}

/// Keyboard map for the deck. `key` is `KeyboardEvent::key`.
pub fn command_for_key(key: &str) -> Option<NavCommand> {
    match key {
        "ArrowUp" | "PageUp" => Some(NavCommand::Prev),
        "ArrowDown" | "PageDown" | " " => Some(NavCommand::Next),
        "Home" => Some(NavCommand::First),
        "End" => Some(NavCommand::Last),
        _ => None,
    }
}

/// Classify a vertical swipe. `delta` is start Y minus end Y, so a swipe
/// up (toward the next slide) is positive. Short flicks only: strictly
/// more than the distance floor, strictly under the time ceiling.
pub fn swipe_command(delta: f64, elapsed_ms: f64) -> Option<NavCommand> {
    if delta.abs() > config::SWIPE_MIN_DISTANCE_PX && elapsed_ms < config::SWIPE_MAX_DURATION_MS {
        if delta > 0.0 {
            Some(NavCommand::Next)
        } else {
            Some(NavCommand::Prev)
        }
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_index_is_clamped() {
        assert_eq!(DeckState::with_start(8, 3).current(), 3);
        assert_eq!(DeckState::with_start(8, 99).current(), 7);
        assert_eq!(DeckState::with_start(0, 99).current(), 0);
    }

    #[test]
    fn test_empty_deck_ignores_every_command() {
        let mut deck = DeckState::new(0);
        assert_eq!(deck.total(), 0);
        assert_eq!(deck.current(), 0);
        assert_eq!(deck.navigate(NavCommand::First), None);
        assert_eq!(deck.navigate(NavCommand::Last), None);
        assert_eq!(deck.navigate(NavCommand::Next), None);
        assert_eq!(deck.navigate(NavCommand::GoTo(0)), None);
        assert!(!deck.is_navigating());
        assert!(!deck.adopt_visible(0));
        assert_eq!(deck.progress_percent(), 100.0);
    }

    #[test]
    fn test_next_and_prev_stop_at_the_edges() {
        let mut deck = DeckState::new(3);
        assert_eq!(deck.navigate(NavCommand::Prev), None);
        assert!(deck.at_first());

        deck.finish_navigation();
        assert_eq!(deck.navigate(NavCommand::Next), Some(1));
        deck.finish_navigation();
        assert_eq!(deck.navigate(NavCommand::Next), Some(2));
        assert!(deck.at_last());

        deck.finish_navigation();
        assert_eq!(deck.navigate(NavCommand::Next), None);
        assert_eq!(deck.current(), 2);
    }

    #[test]
    fn test_commands_are_dropped_during_cooldown() {
        let mut deck = DeckState::new(8);
        assert_eq!(deck.navigate(NavCommand::Next), Some(1));
        assert!(deck.is_navigating());
        assert_eq!(deck.navigate(NavCommand::Next), None);
        assert_eq!(deck.navigate(NavCommand::Last), None);
        assert_eq!(deck.current(), 1);

        deck.finish_navigation();
        assert_eq!(deck.navigate(NavCommand::Last), Some(7));
    }

    #[test]
    fn test_goto_out_of_range_is_ignored() {
        let mut deck = DeckState::new(4);
        assert_eq!(deck.navigate(NavCommand::GoTo(4)), None);
        assert!(!deck.is_navigating());
        assert_eq!(deck.navigate(NavCommand::GoTo(3)), Some(3));
    }

    #[test]
    fn test_first_and_last_jump_from_anywhere() {
        let mut deck = DeckState::with_start(8, 4);
        assert_eq!(deck.navigate(NavCommand::Last), Some(7));
        deck.finish_navigation();
        assert_eq!(deck.navigate(NavCommand::First), Some(0));
    }

    #[test]
    fn test_adoption_ignores_the_cooldown() {
        let mut deck = DeckState::new(8);
        deck.navigate(NavCommand::Next);
        assert!(deck.is_navigating());
        assert!(deck.adopt_visible(5));
        assert_eq!(deck.current(), 5);
        // Still in cooldown afterwards.
        assert!(deck.is_navigating());
    }

    #[test]
    fn test_adoption_rejects_out_of_range_and_no_ops_in_place() {
        let mut deck = DeckState::new(4);
        assert!(!deck.adopt_visible(9));
        assert!(!deck.adopt_visible(0));
        assert_eq!(deck.current(), 0);
    }

    #[test]
    fn test_progress_spans_zero_to_hundred() {
        let mut deck = DeckState::new(8);
        assert_eq!(deck.progress_percent(), 0.0);
        deck.navigate(NavCommand::Last);
        assert_eq!(deck.progress_percent(), 100.0);

        let mid = DeckState::with_start(5, 2);
        assert_eq!(mid.progress_percent(), 50.0);
        assert_eq!(DeckState::new(1).progress_percent(), 100.0);
    }

    #[test]
    fn test_most_visible_takes_the_dominant_entry() {
        let entries = [(0, 0.1), (1, 0.9), (2, 0.3)];
        assert_eq!(most_visible(&entries), Some(1));
    }

    #[test]
    fn test_most_visible_requires_a_majority() {
        assert_eq!(most_visible(&[(0, 0.5), (1, 0.3)]), None);
        assert_eq!(most_visible(&[(2, 0.51)]), Some(2));
        assert_eq!(most_visible(&[]), None);
    }

    #[test]
    fn test_most_visible_keeps_the_first_of_a_tie() {
        assert_eq!(most_visible(&[(3, 0.7), (4, 0.7)]), Some(3));
    }

    #[test]
    fn test_keyboard_map() {
        assert_eq!(command_for_key("ArrowDown"), Some(NavCommand::Next));
        assert_eq!(command_for_key("PageDown"), Some(NavCommand::Next));
        assert_eq!(command_for_key(" "), Some(NavCommand::Next));
        assert_eq!(command_for_key("ArrowUp"), Some(NavCommand::Prev));
        assert_eq!(command_for_key("PageUp"), Some(NavCommand::Prev));
        assert_eq!(command_for_key("Home"), Some(NavCommand::First));
        assert_eq!(command_for_key("End"), Some(NavCommand::Last));
        assert_eq!(command_for_key("ArrowLeft"), None);
        assert_eq!(command_for_key("Enter"), None);
    }

    #[test]
    fn test_swipe_needs_distance_and_speed() {
        assert_eq!(swipe_command(120.0, 180.0), Some(NavCommand::Next));
        assert_eq!(swipe_command(-120.0, 180.0), Some(NavCommand::Prev));
        // Exactly at the floor or ceiling does not count.
        assert_eq!(swipe_command(50.0, 100.0), None);
        assert_eq!(swipe_command(80.0, 300.0), None);
        assert_eq!(swipe_command(51.0, 299.0), Some(NavCommand::Next));
        assert_eq!(swipe_command(-8.0, 40.0), None);
    }
}
