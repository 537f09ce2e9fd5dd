//! Bounded output history.

use std::collections::VecDeque;

/// Default number of lines kept in the history.
pub const DEFAULT_HISTORY_SIZE: usize = 20;

/// Bounded log of console output lines, oldest first.
///
/// When a push would exceed the capacity, the oldest line is evicted.
///
/// # Examples
///
/// ```
/// use bevy_var_console::core::History;
///
/// let mut history = History::with_capacity(2);
/// history.push("A");
/// history.push("B");
/// history.push("C");
/// assert_eq!(history.lines(), vec!["B", "C"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    lines: VecDeque<String>,
    capacity: usize,
    /// Number of lines ever pushed, including evicted ones.
    total: u64,
}

impl Default for History {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_SIZE)
    }
}

impl History {
    /// Create an empty history with the default capacity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty history holding at most `capacity` lines.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            lines: VecDeque::new(),
            capacity,
            total: 0,
        }
    }

    /// Append a line, evicting the oldest lines if needed.
    ///
    /// With a capacity of zero the line is counted but not kept.
    pub fn push(&mut self, line: impl Into<String>) {
        self.total += 1;
        if self.capacity == 0 {
            return;
        }
        while self.lines.len() >= self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line.into());
    }

    /// Change the capacity, evicting the oldest lines immediately if it shrinks.
    pub fn set_capacity(&mut self, capacity: usize) {
        while self.lines.len() > capacity {
            self.lines.pop_front();
        }
        self.capacity = capacity;
    }

    /// Get the capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get the number of retained lines.
    #[inline]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if no lines are retained.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Remove all retained lines.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Iterate over retained lines, oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &str> + ExactSizeIterator {
        self.lines.iter().map(String::as_str)
    }

    /// Snapshot of the retained lines, oldest first.
    pub fn lines(&self) -> Vec<&str> {
        self.iter().collect()
    }

    /// Number of lines ever pushed.
    ///
    /// Use with [`History::since`] to find lines added after an earlier observation.
    #[inline]
    pub fn total_pushed(&self) -> u64 {
        self.total
    }

    /// Lines pushed after `mark` (an earlier [`History::total_pushed`]) that are still retained.
    pub fn since(&self, mark: u64) -> impl Iterator<Item = &str> {
        let added = self.total.saturating_sub(mark);
        let available = usize::try_from(added).unwrap_or(usize::MAX).min(self.lines.len());
        self.iter().skip(self.lines.len() - available)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_default_capacity() {
        let history = History::new();
        assert_eq!(history.capacity(), 20);
        assert!(history.is_empty());
    }

    #[test]
    fn test_history_fifo_eviction() {
        let mut history = History::with_capacity(2);
        history.push("A");
        history.push("B");
        history.push("C");
        assert_eq!(history.lines(), vec!["B", "C"]);
        assert_eq!(history.total_pushed(), 3);
    }

    #[test]
    fn test_history_never_exceeds_capacity() {
        let mut history = History::with_capacity(3);
        for i in 0..50 {
            history.push(format!("line {}", i));
            assert!(history.len() <= 3);
        }
        assert_eq!(history.lines(), vec!["line 47", "line 48", "line 49"]);
    }

    #[test]
    fn test_history_shrink_evicts_immediately() {
        let mut history = History::with_capacity(5);
        for line in ["1", "2", "3", "4", "5"] {
            history.push(line);
        }

        history.set_capacity(2);
        assert_eq!(history.lines(), vec!["4", "5"]);

        history.set_capacity(10);
        history.push("6");
        assert_eq!(history.lines(), vec!["4", "5", "6"]);
    }

    #[test]
    fn test_history_zero_capacity() {
        let mut history = History::with_capacity(1);
        history.push("kept");
        history.set_capacity(0);
        assert!(history.is_empty());

        history.push("dropped");
        assert!(history.is_empty());
        assert_eq!(history.total_pushed(), 2);
    }

    #[test]
    fn test_history_since() {
        let mut history = History::with_capacity(3);
        history.push("a");
        let mark = history.total_pushed();
        history.push("b");
        history.push("c");
        assert_eq!(history.since(mark).collect::<Vec<_>>(), vec!["b", "c"]);

        // Lines evicted before being observed are skipped.
        let mark = history.total_pushed();
        for line in ["d", "e", "f", "g"] {
            history.push(line);
        }
        assert_eq!(history.since(mark).collect::<Vec<_>>(), vec!["e", "f", "g"]);

        let mark = history.total_pushed();
        assert_eq!(history.since(mark).count(), 0);
    }

    #[test]
    fn test_history_owns_lines() {
        let mut history = History::new();
        let mut buffer = String::from("original");
        history.push(buffer.as_str());
        buffer.push_str(" changed");
        assert_eq!(history.lines(), vec!["original"]);
    }
}
