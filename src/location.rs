use std::fmt;

/// A span of source text, given as 1-based character offsets.
///
/// Tokens, AST nodes and errors all carry a `Location` so that a front end can
/// underline the exact part of the input an error refers to. `begin` is the
/// offset of the first character and `end` the offset one past the last
/// character of the span, so a single character at offset `n` spans `n..n + 1`.
///
/// Nodes that were synthesized by the optimizer or the derivator have no
/// source text behind them; they carry [`Location::SYNTHETIC`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Location {
    /// Offset of the first character.
    pub begin: usize,
    /// Offset one past the last character.
    pub end:   usize,
}

impl Location {
    /// The zero/zero span used for nodes without a source.
    pub const SYNTHETIC: Self = Self { begin: 0, end: 0 };

    /// Creates a new span.
    ///
    /// ## Example
    /// ```
    /// use symcalc::location::Location;
    ///
    /// let location = Location::new(3, 7);
    /// assert_eq!(location.len(), 4);
    /// ```
    #[must_use]
    pub const fn new(begin: usize, end: usize) -> Self {
        debug_assert!(begin <= end);
        Self { begin, end }
    }

    /// Returns the span starting at `self` and ending where `other` ends.
    #[must_use]
    pub const fn to(self, other: Self) -> Self {
        Self::new(self.begin, if other.end > self.begin { other.end } else { self.begin })
    }

    /// Whether this is the sentinel for synthesized nodes.
    #[must_use]
    pub const fn is_synthetic(self) -> bool {
        self.begin == 0 && self.end == 0
    }

    /// Number of characters covered.
    #[must_use]
    pub const fn len(self) -> usize {
        self.end - self.begin
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.begin == self.end
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.begin, self.end)
    }
}
