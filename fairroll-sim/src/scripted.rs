//! Scripted die source.

use fairroll_core::DieSource;

/// What a [`ScriptedDieSource`] yields once its script runs out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptEnd {
    /// Keep returning this face.
    Repeat(u8),
    /// Start the script over.
    Cycle,
}

/// Die source that replays a fixed sequence of faces.
///
/// Faces are returned exactly as scripted, including illegal ones, so tests
/// can check how the roller treats a misbehaving source.
///
/// # Example
///
/// ```rust
/// use fairroll_core::DieSource;
/// use fairroll_sim::ScriptedDieSource;
///
/// let mut source = ScriptedDieSource::new([20, 3]);
/// assert_eq!(source.roll_die(), 20);
/// assert_eq!(source.roll_die(), 3);
/// assert_eq!(source.roll_die(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct ScriptedDieSource {
    faces: Vec<u8>,
    position: usize,
    end: ScriptEnd,
    draws: usize,
}

impl ScriptedDieSource {
    /// Replay `faces`, then return 1 forever.
    pub fn new(faces: impl Into<Vec<u8>>) -> Self {
        Self {
            faces: faces.into(),
            position: 0,
            end: ScriptEnd::Repeat(1),
            draws: 0,
        }
    }

    /// Replay `faces` in a loop. An empty script behaves like [`Self::new`].
    pub fn cycle(faces: impl Into<Vec<u8>>) -> Self {
        Self::new(faces).with_end(ScriptEnd::Cycle)
    }

    /// Set what happens after the last scripted face.
    pub fn with_end(mut self, end: ScriptEnd) -> Self {
        self.end = end;
        self
    }

    /// Faces handed out so far.
    pub fn draws(&self) -> usize {
        self.draws
    }

    /// Scripted faces not yet handed out in the current pass.
    pub fn remaining(&self) -> usize {
        self.faces.len().saturating_sub(self.position)
    }
}

impl DieSource for ScriptedDieSource {
    fn roll_die(&mut self) -> u8 {
        self.draws += 1;

        if self.position >= self.faces.len() {
            match self.end {
                ScriptEnd::Cycle if !self.faces.is_empty() => self.position = 0,
                ScriptEnd::Repeat(face) => return face,
                ScriptEnd::Cycle => return 1,
            }
        }

        let face = self.faces[self.position];
        self.position += 1;
        face
    }
}
