use std::fmt;
#[cfg(feature="std")]
use std::error::Error;

/// Error value indicating an index past the end of a view
///
/// Returned by [`FixedView::at`](crate::FixedView::at) and
/// [`FixedView::at_mut`](crate::FixedView::at_mut); carries the offending index.
#[derive(Clone, Copy, Eq, Ord, PartialEq, PartialOrd, Hash)]
pub struct OutOfRangeError {
    index: usize,
}

impl OutOfRangeError {
    /// Create an error for `index`.
    pub fn new(index: usize) -> Self {
        OutOfRangeError { index }
    }

    /// Return the index that was out of range
    pub fn index(&self) -> usize {
        self.index
    }
}

const RANGEERROR: &str = "Out of range";

#[cfg(feature="std")]
/// Requires `features="std"`.
impl Error for OutOfRangeError {}

impl fmt::Display for OutOfRangeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", RANGEERROR, self.index)
    }
}

impl fmt::Debug for OutOfRangeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}: {}", "OutOfRangeError", RANGEERROR, self.index)
    }
}
