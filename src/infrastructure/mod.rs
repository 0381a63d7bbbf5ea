//! Concrete implementations of the domain ports.

pub mod locale;
