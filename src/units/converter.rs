use crate::units::catalog::category;
use crate::units::error::ConversionError;
use crate::units::formatter::{format_linear, format_temperature, parse_number};
use crate::units::types::{Category, ConversionRequest, ReferenceRow, UnitCategory};

/// Number of units listed in a quick reference
const REFERENCE_ROWS: usize = 4;

/// Convert a typed value between two units of a category.
///
/// Never fails: an unparseable or non-finite value yields `"0"`, and an unknown
/// unit key in a linear category is treated as a factor of 1.
pub fn convert(value: &str, from_unit: &str, to_unit: &str, category_key: Category) -> String {
    let Some(number) = parse_number(value) else {
        log::debug!("Unparseable value {:?}, falling back to 0", value);
        return "0".to_string();
    };

    if category_key == Category::Temperature {
        return format_temperature(convert_temperature(number, from_unit, to_unit));
    }

    let table = category(category_key);
    let from_factor = factor_or_default(table, from_unit);
    let to_factor = factor_or_default(table, to_unit);

    format_linear(number * from_factor / to_factor)
}

/// Strict variant of [`convert`] returning the raw number.
/// Reports bad input instead of substituting defaults.
pub fn try_convert(
    value: &str,
    from_unit: &str,
    to_unit: &str,
    category_key: Category,
) -> Result<f64, ConversionError> {
    let number =
        parse_number(value).ok_or_else(|| ConversionError::InvalidNumber(value.to_string()))?;

    let table = category(category_key);
    for unit in [from_unit, to_unit] {
        if table.unit(unit).is_none() {
            return Err(ConversionError::UnknownUnit {
                category: category_key,
                unit: unit.to_string(),
            });
        }
    }

    if category_key == Category::Temperature {
        return Ok(convert_temperature(number, from_unit, to_unit));
    }

    Ok(number * factor_or_default(table, from_unit) / factor_or_default(table, to_unit))
}

pub fn convert_request(request: &ConversionRequest) -> String {
    convert(
        &request.value,
        &request.from_unit,
        &request.to_unit,
        request.category,
    )
}

/// Convert a temperature by way of Celsius.
/// Unrecognized scale keys are treated as Celsius on either side.
pub fn convert_temperature(value: f64, from_unit: &str, to_unit: &str) -> f64 {
    let celsius = match from_unit {
        "celsius" => value,
        "fahrenheit" => (value - 32.0) * 5.0 / 9.0,
        "kelvin" => value - 273.15,
        _ => value,
    };

    match to_unit {
        "celsius" => celsius,
        "fahrenheit" => celsius * 9.0 / 5.0 + 32.0,
        "kelvin" => celsius + 273.15,
        _ => celsius,
    }
}

/// "1 <unit> = N <first unit>" for the leading units of a category
pub fn quick_reference(category_key: Category) -> Vec<ReferenceRow> {
    let table = category(category_key);
    let base = table.first_unit();

    table
        .units
        .iter()
        .take(REFERENCE_ROWS)
        .map(|unit| ReferenceRow {
            unit: unit.key.to_string(),
            label: unit.label.to_string(),
            value: convert("1", unit.key, base.key, category_key),
            base_label: base.label.to_string(),
        })
        .collect()
}

fn factor_or_default(table: &UnitCategory, unit: &str) -> f64 {
    match table.unit(unit).and_then(|u| u.to_base) {
        Some(factor) if factor != 0.0 => factor,
        _ => {
            log::warn!(
                "No scale factor for unit '{}' in {}, using 1",
                unit,
                table.key
            );
            1.0
        }
    }
}
