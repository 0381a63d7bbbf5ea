//! Front-end adapters: text coercion, the form state, the line-based session,
//! and CSV/JSON batch I/O.

pub mod csv;
pub mod form;
pub mod input;
pub mod session;
