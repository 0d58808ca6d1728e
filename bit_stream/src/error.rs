#[cfg(feature = "std")]
use byte_window::ByteBufError;
#[cfg(feature = "std")]
use thiserror::Error;

/// Errors a [`BitStream`](crate::BitStream) caller can hit at runtime.
///
/// Width-contract violations (asking for more bits than a value's storage
/// type holds) are programming errors and panic instead of returning a
/// variant here.
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug)]
pub enum BitStreamError {
    /// A read needed more unread bytes than the stream has left. The
    /// cursor is untouched when this is returned.
    #[cfg_attr(
        feature = "std",
        error("read needs {requested} unread bytes but only {available} remain")
    )]
    ReadPastEnd { requested: usize, available: usize },

    /// Failure at the file boundary.
    #[cfg(feature = "std")]
    #[error("buffer error: {0}")]
    Buffer(#[from] ByteBufError),
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for BitStreamError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BitStreamError::ReadPastEnd {
                requested,
                available,
            } => write!(
                f,
                "read needs {} unread bytes but only {} remain",
                requested, available
            ),
        }
    }
}
