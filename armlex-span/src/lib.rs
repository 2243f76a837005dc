//! Provide a way to hold the range of source text.
//!
//! # `Span` and `Spannable`
//!
//! `Span` holds the start byte offset of a lexeme and its length in bytes.
//! Two `Span`s can be concatenated with `+`, which yields the smallest span
//! covering both, so the range of a run of tokens is easy to compute.
//!
//! `Spannable` is a helper trait to get the `Span` of any item in the same
//! way, whether it holds the `Span` directly or derives it.

use derive_new::new;
use std::ops::{Add, Range};

/// A trait for object who have its `Span`.
pub trait Spannable {
    fn span(&self) -> Span;
}

/// A byte range of the source text where an item comes from.
#[derive(new)]
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    offset: usize,
    len: usize,
}

impl Span {
    /// Construct `Span` from start and end offsets.
    ///
    /// # Examples
    ///
    /// ```
    /// use armlex_span::Span;
    /// let span = Span::from_bounds(4, 9);
    /// assert_eq!(span, Span::new(4, 5));
    /// ```
    pub fn from_bounds(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self { offset: start, len: end - start }
    }

    /// Return start offset of the item on the source text.
    ///
    /// # Examples
    ///
    /// ```
    /// use armlex_span::Span;
    /// let span = Span::new(10, 20);
    /// assert_eq!(span.offset(), 10);
    /// ```
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Return the length of the item in bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use armlex_span::Span;
    /// let span = Span::new(10, 20);
    /// assert_eq!(span.len(), 20);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Return the offset one past the last byte of the item.
    ///
    /// # Examples
    ///
    /// ```
    /// use armlex_span::Span;
    /// let span = Span::new(10, 20);
    /// assert_eq!(span.end(), 30);
    /// ```
    pub fn end(&self) -> usize {
        self.offset + self.len
    }

    /// Return the span as a range usable for slicing the source text.
    ///
    /// # Examples
    ///
    /// ```
    /// use armlex_span::Span;
    /// let source = "mov r0, #5";
    /// assert_eq!(&source[Span::new(4, 2).range()], "r0");
    /// ```
    pub fn range(&self) -> Range<usize> {
        self.offset..self.end()
    }
}

impl Add for Span {
    type Output = Self;

    /// Concat two `Span` and return the `Span`.
    ///
    /// # Examples
    ///
    /// ```
    /// use armlex_span::Span;
    /// let lhs = Span::new(20, 31);
    /// let rhs = Span::new(50, 13);
    /// assert_eq!(lhs + rhs, Span::new(20, 43));
    /// assert_eq!(rhs + lhs, Span::new(20, 43));
    /// ```
    fn add(self, rhs: Self) -> Self::Output {
        if self.offset <= rhs.offset {
            Self::from_bounds(self.offset, self.end().max(rhs.end()))
        } else {
            rhs.add(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_keeps_enclosing_span() {
        let outer = Span::new(0, 10);
        let inner = Span::new(3, 2);
        assert_eq!(outer + inner, outer);
        assert_eq!(inner + outer, outer);
    }

    #[test]
    fn add_joins_adjacent_spans() {
        assert_eq!(Span::new(0, 3) + Span::new(3, 4), Span::new(0, 7));
    }

    #[test]
    fn empty_span_at_end() {
        let span = Span::from_bounds(5, 5);
        assert!(span.is_empty());
        assert_eq!(span.range(), 5..5);
    }
}
