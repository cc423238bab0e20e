//! Data model for derived document representations.
//!
//! Everything in this module is a single-pass, immutable artifact of one
//! conversion: parsed records, the rectangular table projection, and the
//! line-oriented structured view. Nothing here persists across conversions.

mod line;
mod record;
mod representation;
mod table;

pub use line::{DocumentLine, LineKind};
pub use record::{Record, RecordGroup};
pub use representation::Representation;
pub use table::TableProjection;
