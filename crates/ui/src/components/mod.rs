//! UI components
//!
//! - `inputs`: typed cell editors (text, numeric, dropdown, timestamp)
//! - `table`: the generic table view driven by column descriptors

pub mod inputs;
pub mod table;

pub use inputs::{CellNumericInput, CellSelect, CellTextInput, TimestampInput};
pub use table::DataTable;
