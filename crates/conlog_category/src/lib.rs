//! Severity levels, console color attributes, and logging categories.
//!
//! A [`Category`] is an immutable, named logging channel. Whether it is enabled
//! is part of its type (`Category<'_, true>` or `Category<'_, false>`), so the
//! disabled variant can be given an empty logging path that the compiler
//! removes entirely.

#![warn(missing_docs)]

pub mod category;
pub mod color;
pub mod severity;

pub use category::{category_active, Category, COMPILED_OUT};
pub use color::{BackgroundColor, CategoryColors, ColorAttributes, ColorPair, TextColor};
pub use severity::Severity;
