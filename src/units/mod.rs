// Unit conversion over a fixed catalog of measurement categories
// Linear categories scale through a base unit, temperature routes through Celsius

pub mod catalog;
pub mod converter;
pub mod error;
pub mod formatter;
pub mod session;
pub mod types;


pub use catalog::{categories, category};
pub use converter::{convert, convert_request, convert_temperature, quick_reference, try_convert};
pub use error::ConversionError;
pub use formatter::{format_linear, format_temperature, parse_number};
pub use session::{ConverterAction, ConverterState};
pub use types::{Category, ConversionRequest, ReferenceRow, UnitCategory, UnitDefinition};
