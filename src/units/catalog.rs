use crate::units::types::{Category, UnitCategory, UnitDefinition};

const fn linear(key: &'static str, label: &'static str, to_base: f64) -> UnitDefinition {
    UnitDefinition {
        key,
        label,
        to_base: Some(to_base),
    }
}

const fn affine(key: &'static str, label: &'static str) -> UnitDefinition {
    UnitDefinition {
        key,
        label,
        to_base: None,
    }
}

const KIB: f64 = 1024.0;

// Base unit: meters
static LENGTH_UNITS: [UnitDefinition; 8] = [
    linear("meters", "Meters", 1.0),
    linear("kilometers", "Kilometers", 1000.0),
    linear("centimeters", "Centimeters", 0.01),
    linear("millimeters", "Millimeters", 0.001),
    linear("miles", "Miles", 1609.34),
    linear("yards", "Yards", 0.9144),
    linear("feet", "Feet", 0.3048),
    linear("inches", "Inches", 0.0254),
];

// Base unit: kilograms
static WEIGHT_UNITS: [UnitDefinition; 6] = [
    linear("kilograms", "Kilograms", 1.0),
    linear("grams", "Grams", 0.001),
    linear("milligrams", "Milligrams", 0.000001),
    linear("pounds", "Pounds", 0.453592),
    linear("ounces", "Ounces", 0.0283495),
    linear("tons", "Metric Tons", 1000.0),
];

static TEMPERATURE_UNITS: [UnitDefinition; 3] = [
    affine("celsius", "Celsius (°C)"),
    affine("fahrenheit", "Fahrenheit (°F)"),
    affine("kelvin", "Kelvin (K)"),
];

// Base unit: liters
static VOLUME_UNITS: [UnitDefinition; 7] = [
    linear("liters", "Liters", 1.0),
    linear("milliliters", "Milliliters", 0.001),
    linear("gallons", "Gallons (US)", 3.78541),
    linear("quarts", "Quarts", 0.946353),
    linear("pints", "Pints", 0.473176),
    linear("cups", "Cups", 0.236588),
    linear("cubicMeters", "Cubic Meters", 1000.0),
];

// Base unit: bytes (binary multiples)
static DATA_UNITS: [UnitDefinition; 6] = [
    linear("bytes", "Bytes", 1.0),
    linear("kilobytes", "Kilobytes (KB)", KIB),
    linear("megabytes", "Megabytes (MB)", KIB * KIB),
    linear("gigabytes", "Gigabytes (GB)", KIB * KIB * KIB),
    linear("terabytes", "Terabytes (TB)", KIB * KIB * KIB * KIB),
    linear("bits", "Bits", 0.125),
];

static CATEGORIES: [UnitCategory; 5] = [
    UnitCategory {
        key: Category::Length,
        label: "Length",
        units: &LENGTH_UNITS,
    },
    UnitCategory {
        key: Category::Weight,
        label: "Weight",
        units: &WEIGHT_UNITS,
    },
    UnitCategory {
        key: Category::Temperature,
        label: "Temperature",
        units: &TEMPERATURE_UNITS,
    },
    UnitCategory {
        key: Category::Volume,
        label: "Volume",
        units: &VOLUME_UNITS,
    },
    UnitCategory {
        key: Category::Data,
        label: "Data",
        units: &DATA_UNITS,
    },
];

/// All unit categories in display order
pub fn categories() -> &'static [UnitCategory] {
    &CATEGORIES
}

/// Look up the table for a category
pub fn category(key: Category) -> &'static UnitCategory {
    match key {
        Category::Length => &CATEGORIES[0],
        Category::Weight => &CATEGORIES[1],
        Category::Temperature => &CATEGORIES[2],
        Category::Volume => &CATEGORIES[3],
        Category::Data => &CATEGORIES[4],
    }
}
