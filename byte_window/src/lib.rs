#![cfg_attr(not(feature = "std"), no_std)]

//! Byte-level substrate for bit-granular streams: an owned append-only
//! buffer ([`ByteBuf`]), a boundable zero-copy window over it ([`Window`]),
//! and the whole-buffer file boundary.

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod buf;
#[cfg(feature = "std")]
pub mod error;
pub mod window;

pub use buf::ByteBuf;
#[cfg(feature = "std")]
pub use error::ByteBufError;
pub use window::Window;
