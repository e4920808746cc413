//! Die source provider abstraction.
//!
//! A die source is the only randomness the roller consumes. Production code
//! uses the sources in [`crate::source`]; tests inject deterministic ones.

/// Number of faces on the die.
pub const FACES: u8 = 20;

/// Bytes at or above this value are discarded before reducing modulo 20.
///
/// 240 is the largest multiple of 20 not exceeding 256.
pub const BYTE_ACCEPT_LIMIT: u8 = 240;

/// Provider trait for twenty-sided die rolls.
///
/// Implementations must return a face in `1..=FACES`, uniformly distributed,
/// each call independent of the previous ones. The roller validates every
/// face and fails with [`RollError::InvalidDieValue`](crate::RollError) when
/// a source breaks this contract.
pub trait DieSource {
    /// Roll the die once.
    fn roll_die(&mut self) -> u8;
}

impl<S: DieSource + ?Sized> DieSource for &mut S {
    fn roll_die(&mut self) -> u8 {
        (**self).roll_die()
    }
}

impl<S: DieSource + ?Sized> DieSource for Box<S> {
    fn roll_die(&mut self) -> u8 {
        (**self).roll_die()
    }
}

/// Die source backed by a closure. Created by [`from_fn`].
#[derive(Clone)]
pub struct FnDieSource<F> {
    f: F,
}

impl<F> std::fmt::Debug for FnDieSource<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnDieSource").finish_non_exhaustive()
    }
}

impl<F: FnMut() -> u8> DieSource for FnDieSource<F> {
    fn roll_die(&mut self) -> u8 {
        (self.f)()
    }
}

/// Adapt a plain callback into a [`DieSource`].
///
/// # Example
///
/// ```rust
/// use fairroll_core::{DieSource, from_fn};
///
/// let mut source = from_fn(|| 7);
/// assert_eq!(source.roll_die(), 7);
/// ```
pub fn from_fn<F: FnMut() -> u8>(f: F) -> FnDieSource<F> {
    FnDieSource { f }
}

/// Map a uniform byte onto a die face, or `None` when the byte must be
/// discarded to keep the faces unbiased.
pub fn face_from_byte(byte: u8) -> Option<u8> {
    if byte < BYTE_ACCEPT_LIMIT {
        Some(byte % FACES + 1)
    } else {
        None
    }
}

/// Whether `face` is a legal die face.
pub fn is_valid_face(face: u8) -> bool {
    (1..=FACES).contains(&face)
}
