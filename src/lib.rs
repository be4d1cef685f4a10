//! Konvert – permissive coercion and formatting helpers.
//!
//! The crate is a flat collection of pure, stateless functions that turn
//! loosely typed inputs into strings, numbers and dates with forgiving
//! defaults:
//! * A [`value::Value`] is an "anything, possibly absent" input whose
//!   textual projection drives every helper (empty for absent values).
//! * [`coerce`] – value to string/int/long/double with silent defaults for
//!   absent or empty inputs, plus emptiness predicates and regex split.
//! * [`member`] – linear membership queries over arrays, sequences and
//!   heterogeneous rows, matching on textual equality.
//! * [`text`] – left padding and filename-extension extraction.
//! * [`numeric`] – `#,###`-style decimal-format rendering and exact-decimal
//!   rounding with an explicit mode.
//! * [`calendar`] – date parsing/formatting with `yyyy-MM-dd`-style patterns
//!   in a fixed Korean locale, calendar-field arithmetic and differences,
//!   and Korean weekday names.
//!
//! ## Failure model
//! Absent, empty and shape-mismatched inputs never fail; they yield the
//! documented default (`""`, `0`, `-1`, `false`). Only strict parses fail:
//! explicit numeric text and date text that does not match its pattern
//! surface a [`error::ConvertError`].
//!
//! ## Quick Start
//! ```
//! use konvert::value::Value;
//! use konvert::{coerce, numeric, text};
//!
//! assert_eq!(coerce::to_long(&Value::from("3.6")).unwrap(), 4);
//! assert_eq!(coerce::to_str(&Value::Absent), "");
//! assert_eq!(numeric::add_comma(&Value::from(1234567)).unwrap(), "1,234,567");
//! assert_eq!(text::lpad(&Value::from(42), 5), "00042");
//! ```
//!
//! ## Concurrency
//! Everything is a pure function of its inputs except the helpers that read
//! the wall clock; there is no shared state and no blocking, so unrestricted
//! concurrent use is fine.
//!
//! ## License
//! Dual licensed under Apache-2.0 and MIT (see included `LICENSE.*` files).

pub mod calendar;
pub mod coerce;
pub mod error;
pub mod member;
pub mod numeric;
pub mod text;
pub mod value;

pub use error::{ConvertError, Result};
pub use value::{Row, Value};
