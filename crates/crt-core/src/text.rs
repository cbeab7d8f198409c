//! Typewriter reveal of decorative phrases, plus the blinking cursor.

use crate::constants::{DEFAULT_HEADLINE, DEFAULT_PHRASES};
use crate::error::{CrtError, Result};

/// Non-empty cyclic list of phrases.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhraseQueue {
    phrases: Vec<String>,
}

impl PhraseQueue {
    pub fn new<I, S>(phrases: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let phrases: Vec<String> = phrases.into_iter().map(Into::into).collect();
        if phrases.is_empty() {
            return Err(CrtError::EmptyPhraseQueue);
        }
        Ok(Self { phrases })
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Phrase at `index` modulo the queue length.
    pub fn get(&self, index: usize) -> &str {
        &self.phrases[index % self.phrases.len()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.phrases.iter().map(String::as_str)
    }
}

impl Default for PhraseQueue {
    fn default() -> Self {
        Self {
            phrases: DEFAULT_PHRASES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// First `chars` characters of `text`, cut on a char boundary.
pub fn char_prefix(text: &str, chars: usize) -> &str {
    match text.char_indices().nth(chars) {
        Some((byte, _)) => &text[..byte],
        None => text,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TyperState {
    Idle { index: usize },
    Typing { index: usize, prefix_len: usize },
    Complete { index: usize },
}

impl TyperState {
    pub fn index(self) -> usize {
        match self {
            TyperState::Idle { index }
            | TyperState::Typing { index, .. }
            | TyperState::Complete { index } => index,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypeStep {
    /// One more character is visible; carries the new prefix length.
    Revealed(usize),
    /// The previous phrase finished; typing restarts from zero at this index.
    Advanced(usize),
}

/// Cycles through a [`PhraseQueue`], one character per tick.
///
/// `Idle(i) -> Typing(i, n) -> Complete(i) -> Typing(i + 1 mod N, 0)`. The
/// tick after a phrase is fully shown advances to the next phrase.
#[derive(Clone, Debug)]
pub struct CyclingTyper {
    queue: PhraseQueue,
    state: TyperState,
    completions: u64,
}

impl CyclingTyper {
    pub fn new(queue: PhraseQueue) -> Self {
        Self {
            queue,
            state: TyperState::Idle { index: 0 },
            completions: 0,
        }
    }

    pub fn tick(&mut self) -> TypeStep {
        match self.state {
            TyperState::Idle { index } => self.reveal(index, 0),
            TyperState::Typing { index, prefix_len } => self.reveal(index, prefix_len),
            TyperState::Complete { index } => {
                let next = (index + 1) % self.queue.len();
                self.completions += 1;
                self.state = TyperState::Typing {
                    index: next,
                    prefix_len: 0,
                };
                log::debug!("[typer] phrase {} done, next {}", index, next);
                TypeStep::Advanced(next)
            }
        }
    }

    fn reveal(&mut self, index: usize, prefix_len: usize) -> TypeStep {
        let len = self.queue.get(index).chars().count();
        let next_len = (prefix_len + 1).min(len);
        self.state = if next_len == len {
            TyperState::Complete { index }
        } else {
            TyperState::Typing {
                index,
                prefix_len: next_len,
            }
        };
        TypeStep::Revealed(next_len)
    }

    /// Drop back to the first phrase with nothing revealed.
    pub fn reset(&mut self) {
        self.state = TyperState::Idle { index: 0 };
    }

    pub fn state(&self) -> TyperState {
        self.state
    }

    pub fn index(&self) -> usize {
        self.state.index()
    }

    pub fn prefix_len(&self) -> usize {
        match self.state {
            TyperState::Idle { .. } => 0,
            TyperState::Typing { prefix_len, .. } => prefix_len,
            TyperState::Complete { index } => self.queue.get(index).chars().count(),
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self.state, TyperState::Complete { .. })
    }

    pub fn phrase(&self) -> &str {
        self.queue.get(self.index())
    }

    pub fn revealed(&self) -> &str {
        char_prefix(self.phrase(), self.prefix_len())
    }

    /// Phrases finished since construction.
    pub fn completions(&self) -> u64 {
        self.completions
    }

    pub fn queue(&self) -> &PhraseQueue {
        &self.queue
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeadlineStep {
    Revealed(usize),
    /// Nothing left to reveal; the driving process should stop.
    Finished,
}

/// Reveals a single caller-supplied headline once.
#[derive(Clone, Debug)]
pub struct HeadlineTyper {
    text: String,
    prefix_len: usize,
}

impl HeadlineTyper {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            prefix_len: 0,
        }
    }

    pub fn tick(&mut self) -> HeadlineStep {
        if self.prefix_len < self.text.chars().count() {
            self.prefix_len += 1;
            HeadlineStep::Revealed(self.prefix_len)
        } else {
            HeadlineStep::Finished
        }
    }

    /// Replace the headline. A different string wipes the progress; the same
    /// string leaves it alone. Returns whether anything changed.
    pub fn set_text(&mut self, text: &str) -> bool {
        if self.text == text {
            return false;
        }
        self.text = text.to_string();
        self.prefix_len = 0;
        true
    }

    /// Start revealing the current headline again from nothing.
    pub fn restart(&mut self) {
        self.prefix_len = 0;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn prefix_len(&self) -> usize {
        self.prefix_len
    }

    pub fn revealed(&self) -> &str {
        char_prefix(&self.text, self.prefix_len)
    }

    pub fn is_finished(&self) -> bool {
        self.prefix_len >= self.text.chars().count()
    }
}

impl Default for HeadlineTyper {
    fn default() -> Self {
        Self::new(DEFAULT_HEADLINE)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorBlinker {
    visible: bool,
}

impl CursorBlinker {
    pub fn new() -> Self {
        Self { visible: true }
    }

    pub fn toggle(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

impl Default for CursorBlinker {
    fn default() -> Self {
        Self::new()
    }
}

/// Text-side state as seen by the overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TypedState {
    pub revealed_prefix_len: usize,
    pub cursor_visible: bool,
}
