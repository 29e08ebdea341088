//! Timed rotation of the two displayed words, with a click-driven pause.

use crate::constants::{BOB_AMPLITUDE, BOB_LETTER_PHASE, BOB_SPEED, FILLER_GLYPHS};
use std::borrow::Cow;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RotationState {
    Running,
    Paused,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Row {
    Top,
    Bottom,
}

#[derive(Clone, Debug)]
pub struct WordRotation {
    top: usize,
    bottom: usize,
    len: usize,
    interval_ms: f64,
    last_change_ms: Option<f64>,
    state: RotationState,
}

impl WordRotation {
    /// Starts at words 0 and 1 (both 0 for a single-word list). `len` must be
    /// non-zero; config validation guarantees it for scenes.
    pub fn new(len: usize, interval_ms: f64) -> Self {
        let len = len.max(1);
        Self {
            top: 0,
            bottom: 1 % len,
            len,
            interval_ms,
            last_change_ms: None,
            state: RotationState::Running,
        }
    }

    pub fn top(&self) -> usize {
        self.top
    }

    pub fn bottom(&self) -> usize {
        self.bottom
    }

    pub fn index(&self, row: Row) -> usize {
        match row {
            Row::Top => self.top,
            Row::Bottom => self.bottom,
        }
    }

    pub fn state(&self) -> RotationState {
        self.state
    }

    pub fn is_paused(&self) -> bool {
        self.state == RotationState::Paused
    }

    pub fn toggle_pause(&mut self) -> RotationState {
        self.state = match self.state {
            RotationState::Running => RotationState::Paused,
            RotationState::Paused => RotationState::Running,
        };
        log::debug!("word rotation {:?}", self.state);
        self.state
    }

    /// Advances both indices once the interval has elapsed. Returns true when
    /// a rotation happened.
    ///
    /// The first call only primes the clock. While paused the clock is held at
    /// `now_ms`, so a resume waits a full interval before the next change.
    pub fn update(&mut self, now_ms: f64) -> bool {
        let Some(last) = self.last_change_ms else {
            self.last_change_ms = Some(now_ms);
            return false;
        };
        if self.is_paused() {
            self.last_change_ms = Some(now_ms);
            return false;
        }
        if now_ms - last < self.interval_ms {
            return false;
        }
        self.top = (self.top + 1) % self.len;
        self.bottom = (self.bottom + 1) % self.len;
        self.last_change_ms = Some(now_ms);
        log::debug!("words rotated to {}/{}", self.top, self.bottom);
        true
    }

    /// Text shown for `row`: the word itself while running, otherwise filler
    /// glyphs of the same length.
    pub fn display<'a>(&self, words: &'a [String], row: Row) -> Cow<'a, str> {
        let word = words.get(self.index(row)).map(String::as_str).unwrap_or("");
        if self.is_paused() {
            Cow::Owned(filler(word.chars().count()))
        } else {
            Cow::Borrowed(word)
        }
    }

    /// Vertical bob for letter `index` at `time_ms`; zero while paused.
    pub fn bob_offset(&self, time_ms: f64, index: usize) -> f32 {
        if self.is_paused() {
            return 0.0;
        }
        let angle = time_ms * BOB_SPEED + index as f64 * BOB_LETTER_PHASE;
        angle.sin() as f32 * BOB_AMPLITUDE
    }
}

/// Cycles the filler alphabet out to `len` characters.
pub fn filler(len: usize) -> String {
    FILLER_GLYPHS.iter().cycle().take(len).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filler_cycles_and_truncates() {
        assert_eq!(filler(0), "");
        assert_eq!(filler(3), "+*-");
        assert_eq!(filler(6), "+*-/+*");
    }

    #[test]
    fn single_word_list_keeps_both_rows_on_it() {
        let mut r = WordRotation::new(1, 10.0);
        r.update(0.0);
        r.update(10.0);
        assert_eq!((r.top(), r.bottom()), (0, 0));
    }
}
