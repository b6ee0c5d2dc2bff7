//! Value types shared by the widgets.

pub mod email;
pub mod field;
pub mod price;

pub use email::{Email, EmailError};
pub use field::{Blank, Control, ControlKind, FieldSnapshot, form_entries, missing_required};
pub use price::{Price, PriceError};
