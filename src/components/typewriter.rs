//! Hero headline typewriter. The pacing logic is a plain state machine so
//! it can be tested without a browser; the component drives it with a
//! timeout re-armed on every render.

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Typing,
    Holding,
    Deleting,
    Resting,
}

/// One step of the cycle: type a line out, hold it, delete it, rest,
/// move to the next line, wrap at the end.
#[derive(Debug, Clone, PartialEq)]
pub struct TypingEngine {
    lines: Vec<String>,
    line: usize,
    chars: usize,
    phase: Phase,
}

impl TypingEngine {
    pub fn new(lines: Vec<String>) -> Self {
        Self {
            lines,
            line: 0,
            chars: 0,
            phase: Phase::Typing,
        }
    }

    /// Currently shown prefix of the active line.
    pub fn visible(&self) -> String {
        match self.lines.get(self.line) {
            Some(line) => line.chars().take(self.chars).collect(),
            None => String::new(),
        }
    }

    /// Advance one step and return the delay before the next one.
    pub fn tick(&mut self) -> u32 {
        if self.lines.is_empty() {
            return config::HOLD_LINE_MS;
        }
        match self.phase {
            Phase::Typing => self.type_step(),
            Phase::Holding => {
                self.phase = Phase::Deleting;
                self.delete_step()
            }
            Phase::Deleting => self.delete_step(),
            Phase::Resting => {
                self.phase = Phase::Typing;
                self.type_step()
            }
        }
    }

    fn line_len(&self) -> usize {
        self.lines[self.line].chars().count()
    }

    fn type_step(&mut self) -> u32 {
        let len = self.line_len();
        if self.chars < len {
            self.chars += 1;
        }
        if self.chars >= len {
            self.phase = Phase::Holding;
            config::HOLD_LINE_MS
        } else {
            config::TYPE_CHAR_MS
        }
    }

    fn delete_step(&mut self) -> u32 {
        if self.chars > 0 {
            self.chars -= 1;
        }
        if self.chars == 0 {
            self.line = (self.line + 1) % self.lines.len();
            self.phase = Phase::Resting;
            config::NEXT_LINE_REST_MS
        } else {
            config::DELETE_CHAR_MS
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct TypewriterProps {
    pub lines: Vec<String>,
}

#[function_component(Typewriter)]
pub fn typewriter(props: &TypewriterProps) -> Html {
    let engine = use_mut_ref(|| TypingEngine::new(props.lines.clone()));
    // Shown text plus the delay before the next engine step.
    let frame = use_state(|| (String::new(), config::TYPE_CHAR_MS));

    {
        let engine = engine.clone();
        let frame_setter = frame.setter();
        let delay = frame.1;
        use_effect(move || {
            let timeout = Timeout::new(delay, move || {
                let mut engine = engine.borrow_mut();
                let next_delay = engine.tick();
                frame_setter.set((engine.visible(), next_delay));
            });
            timeout.forget();

            || ()
        });
    }

    html! {
        <span class="typewriter" aria-live="polite">
            <span class="typewriter-text">{ frame.0.clone() }</span>
            <span class="typewriter-cursor" aria-hidden="true">{ "|" }</span>
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config;

    fn engine(lines: &[&str]) -> TypingEngine {
        TypingEngine::new(lines.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_types_one_char_per_tick() {
        let mut e = engine(&["abc"]);
        assert_eq!(e.visible(), "");
        assert_eq!(e.tick(), config::TYPE_CHAR_MS);
        assert_eq!(e.visible(), "a");
        assert_eq!(e.tick(), config::TYPE_CHAR_MS);
        assert_eq!(e.visible(), "ab");
    }

    #[test]
    fn test_holds_after_the_last_char() {
        let mut e = engine(&["ab"]);
        e.tick();
        assert_eq!(e.tick(), config::HOLD_LINE_MS);
        assert_eq!(e.visible(), "ab");
    }

    #[test]
    fn test_deletes_faster_than_it_types() {
        let mut e = engine(&["abc", "xy"]);
        for _ in 0..3 {
            e.tick();
        }
        // First delete comes out of the hold, later ones at delete speed.
        assert_eq!(e.tick(), config::DELETE_CHAR_MS);
        assert_eq!(e.visible(), "ab");
        assert_eq!(e.tick(), config::DELETE_CHAR_MS);
        assert_eq!(e.visible(), "a");
    }

    #[test]
    fn test_rests_then_starts_the_next_line() {
        let mut e = engine(&["ab", "cd"]);
        // Type both chars, then the first delete.
        for _ in 0..3 {
            e.tick();
        }
        // Second delete empties the line and moves on.
        assert_eq!(e.tick(), config::NEXT_LINE_REST_MS);
        assert_eq!(e.visible(), "");
        assert_eq!(e.tick(), config::TYPE_CHAR_MS);
        assert_eq!(e.visible(), "c");
    }

    #[test]
    fn test_wraps_back_to_the_first_line() {
        let mut e = engine(&["a", "b"]);
        e.tick(); // "a" typed in one step, holding
        e.tick(); // deleted, resting at the second line
        assert_eq!(e.tick(), config::HOLD_LINE_MS);
        assert_eq!(e.visible(), "b");
        e.tick(); // deleted, resting back at the first line
        assert_eq!(e.tick(), config::HOLD_LINE_MS);
        assert_eq!(e.visible(), "a");
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        let mut e = engine(&["žлуña"]);
        e.tick();
        assert_eq!(e.visible(), "ž");
        e.tick();
        assert_eq!(e.visible(), "žл");
    }

    #[test]
    fn test_no_lines_is_inert() {
        let mut e = engine(&[]);
        assert_eq!(e.tick(), config::HOLD_LINE_MS);
        assert_eq!(e.visible(), "");
    }
}
