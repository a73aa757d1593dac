/// A cursor position. `ch` counts Unicode scalar values within the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Position {
    pub line: usize,
    pub ch: usize,
}

impl Position {
    pub fn new(line: usize, ch: usize) -> Self {
        Self { line, ch }
    }
}

/// Instruction to replace `from..to` on one line with `text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub from: Position,
    pub to: Position,
    pub text: String,
}

/// Where the pending buffer stands between two edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Accumulating,
    /// ん was committed for a bare "n"; the next character decides
    /// whether it stays ん or becomes part of な/に/… or "nn".
    AwaitingLookahead,
}

/// The consonant whose reading depends on the next character.
pub(crate) const NASAL: char = 'n';
