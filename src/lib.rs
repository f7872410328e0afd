//! Interaction effects for the landing page: particle field, scroll reveals,
//! stat counters, mobile menu, navbar styling, anchor scrolling and pointer
//! parallax.
//!
//! Everything here is platform independent. The browser glue that feeds these
//! types with DOM events lives in the binary's `frontend` module.

pub mod config;
pub mod effects;
pub mod error;

pub use config::FxConfig;
pub use error::FxError;
