//! Forcing a value out of a context.

use crate::error::Result;

/// Uniform access to the value of a single-value context.
///
/// `get_unsafe` never panics: the empty case is reported as an
/// [`Error`](crate::Error).
///
/// # Examples
///
/// ```rust
/// use funkit::control::{Either, Extract, Try};
/// use funkit::Error;
///
/// assert_eq!(Some(1).get_unsafe(), Ok(1));
/// assert_eq!(None::<i32>.get_unsafe(), Err(Error::EmptyResult { context: "None" }));
///
/// let left: Either<&str, i32> = Either::Left("reason");
/// assert_eq!(left.get_unsafe(), Err(Error::EmptyResult { context: "Left" }));
///
/// assert_eq!(Try::success(3).get_unsafe(), Ok(3));
/// ```
pub trait Extract {
    /// The type of the contained value.
    type Value;

    /// Returns the contained value, or the error describing why there is
    /// none.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyResult`](crate::Error::EmptyResult) for `None` and
    /// `Left`; the captured error for a failed `Try`.
    fn get_unsafe(self) -> Result<Self::Value>;
}
