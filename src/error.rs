use std::error::Error;
use std::fmt;

/// Error value indicating a position outside the occupied range of a list.
///
/// Returned by position-based removal when the position is `>= len`. The
/// check happens before any mutation, so the list is left untouched.
#[derive(Clone, Copy, Eq, Ord, PartialEq, PartialOrd)]
pub struct RangeError {
    /// The rejected position.
    pub index: usize,
    /// Length of the list at the time of the call.
    pub len: usize,
}

const RANGEERROR: &str = "position out of range";

impl Error for RangeError {}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}: the len is {} but the index is {}",
            RANGEERROR, self.len, self.index
        )
    }
}

impl fmt::Debug for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", "RangeError", RANGEERROR)
    }
}
