//! Editor state and the view model derived from it.
//!
//! DESIGN
//! ======
//! `notes` owns the data and every mutation as plain methods; `table` turns
//! that state into the rows components render. Neither touches Leptos, so
//! both are exercised by ordinary unit tests.

pub mod notes;
pub mod table;
