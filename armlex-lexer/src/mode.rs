//! Provide the stack of scanner modes.
//!
//! # `ModeStack`
//!
//! The scanner's lexical context is an explicit stack rather than recursion.
//! `Root` sits at the bottom and can never be popped, so the stack always
//! holds at least one mode.

use nonempty::NonEmpty;

/// A lexical context selecting which rule table applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Mode {
    Root,
    /// Inside a double-quoted string.
    String,
    /// Whitespace rules. Only ever included by `Root`, never pushed.
    Whitespace,
}

/// A stack of modes with `Root` always at the bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeStack {
    modes: NonEmpty<Mode>,
}

impl ModeStack {
    /// Create a stack holding only `Root`.
    pub fn new() -> Self {
        Self { modes: NonEmpty::new(Mode::Root) }
    }

    /// Enter a nested mode.
    pub fn push(&mut self, mode: Mode) {
        self.modes.push(mode);
    }

    /// Leave the current mode. Popping `Root` does nothing and returns `None`.
    pub fn pop(&mut self) -> Option<Mode> {
        self.modes.pop()
    }

    /// Get the mode on top of the stack.
    pub fn current(&self) -> Mode {
        *self.modes.last()
    }

    /// Get the number of modes on the stack, root included.
    pub fn depth(&self) -> usize {
        self.modes.len()
    }
}

impl Default for ModeStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_root() {
        let stack = ModeStack::new();
        assert_eq!(stack.current(), Mode::Root);
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn push_then_pop() {
        let mut stack = ModeStack::new();
        stack.push(Mode::String);
        assert_eq!(stack.current(), Mode::String);
        assert_eq!(stack.depth(), 2);
        assert_eq!(stack.pop(), Some(Mode::String));
        assert_eq!(stack.current(), Mode::Root);
    }

    #[test]
    fn root_is_never_popped() {
        let mut stack = ModeStack::default();
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.current(), Mode::Root);
        assert_eq!(stack.depth(), 1);
    }
}
