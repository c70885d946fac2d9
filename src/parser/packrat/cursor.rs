//! Code-point cursor with transactional backtracking

/// Saved cursor position. Reverting to a mark undoes everything consumed
/// since it was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Mark(usize);

impl Mark {
    pub fn offset(self) -> usize {
        self.0
    }
}

/// Cursor over the code points of one input.
#[derive(Debug, Clone)]
pub struct Cursor {
    chars: Vec<char>,
    pos: usize,
}

impl Cursor {
    pub fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            pos: 0,
        }
    }

    pub fn mark(&self) -> Mark {
        Mark(self.pos)
    }

    pub fn revert(&mut self, mark: Mark) {
        self.pos = mark.0;
    }

    pub fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    /// Consume and return the next code point.
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        Some(c)
    }

    pub fn at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Text between two marks.
    pub fn text(&self, start: Mark, end: Mark) -> String {
        self.chars[start.0..end.0].iter().collect()
    }
}
