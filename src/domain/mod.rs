//! Domain types: the tip request, locales and their currency conventions, and
//! the formatting port the engine depends on.

pub mod currency;
pub mod ports;
pub mod tip;
