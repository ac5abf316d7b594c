//! **fixedview** provides the type [`FixedView`]: a fixed-length, non-owning
//! view over `N` contiguous elements that behaves like a `[T; N]` value.
//!
//! A `FixedView` binds to an existing array (or to a bare pointer known to
//! reference `N` elements) and exposes the full surface of a fixed-size
//! container on top of it: comparison by contents, checked and unchecked
//! element access, iteration, fill, and assignment and swap that write
//! through to the referenced storage instead of rebinding the view.
//!
//! ```
//! use fixedview::FixedView;
//!
//! let mut storage = [1, 3, 5, 7, 9];
//! let mut view = FixedView::new(&mut storage);
//!
//! assert_eq!(view.at(2), Ok(&5));
//! assert_eq!(view.at(5).unwrap_err().index(), 5);
//!
//! view.fill(0);
//! assert_eq!(storage, [0, 0, 0, 0, 0]);
//! ```
//!
//! The fixedview package has the following cargo features:
//!
//! - `std`
//!   - Optional, enabled by default
//!   - Use libstd; disable to use `no_std` instead.
//!
//! - `serde`
//!   - Optional
//!   - Enable serialization for FixedView using serde 1.x, and
//!     deserialization into the referenced storage
//!
//! - `borsh`
//!   - Optional
//!   - Enable serialization for FixedView using borsh 1.x, and
//!     deserialization into the referenced storage
//!
//! - `zeroize`
//!   - Optional
//!   - Implement `Zeroize` for FixedView
//!
//! ## Rust Version
//!
//! This version of fixedview requires Rust 1.57 or later.
//!
#![doc(html_root_url="https://docs.rs/fixedview/0.1/")]
#![cfg_attr(not(feature="std"), no_std)]

#[cfg(feature="serde")]
extern crate serde;

#[cfg(not(feature="std"))]
extern crate core as std;

mod errors;
mod len_check;
mod view;

#[cfg(feature="serde")]
mod serde_impls;
#[cfg(feature="borsh")]
mod borsh_impls;

pub use crate::errors::OutOfRangeError;
pub use crate::view::FixedView;
