//! Conversion tools for the registry

use toolbelt_plugin::prelude::*;
use crate::{convert, currency, Category, Strategy};

/// Default decimal places for unit results
pub const UNIT_PLACES: usize = 4;
/// Decimal places for currency results
pub const CURRENCY_PLACES: usize = 2;
/// Largest accepted `places` argument
pub const MAX_PLACES: usize = 12;

fn parse_category(args: &JsonValue, tool: &str) -> Result<Category, ToolError> {
    let name = require_text(args, tool, "category")?;
    Ok(name.parse::<Category>()?)
}

fn parse_places(args: &JsonValue, tool: &str) -> Result<usize, ToolError> {
    if args.get("places").map_or(true, JsonValue::is_null) {
        return Ok(UNIT_PLACES);
    }
    let places = require_number(args, tool, "places")?;
    if places < 0.0 || places.fract() != 0.0 || places > MAX_PLACES as f64 {
        return Err(ToolError::domain_error(format!(
            "{}(): places must be an integer between 0 and {}, got {}",
            tool, MAX_PLACES, places
        )));
    }
    Ok(places as usize)
}

// ============ convert_units ============

pub struct ConvertUnits;

static CONVERT_UNITS_ARGS: [ArgMeta; 5] = [
    ArgMeta::required("category", "Text", "One of: length, weight, volume, temperature"),
    ArgMeta::required("value", "Number", "Value to convert"),
    ArgMeta::required("from", "Text", "Source unit symbol (e.g., \"km\")"),
    ArgMeta::required("to", "Text", "Target unit symbol (e.g., \"m\")"),
    ArgMeta::optional("places", "Number", "Decimal places in the display text", "4"),
];

static CONVERT_UNITS_EXAMPLES: [&str; 3] = [
    "convert_units(\"length\", 1, \"km\", \"m\") → 1000",
    "convert_units(\"weight\", 1, \"kg\", \"lb\") → 2.20462",
    "convert_units(\"temperature\", 98.6, \"f\", \"c\") → 37",
];

impl ToolPlugin for ConvertUnits {
    fn meta(&self) -> ToolMeta {
        ToolMeta {
            name: "convert_units",
            description: "Convert length, weight, volume, and temperature.",
            usage: "convert_units(category, value, from, to, [places])",
            category: ToolCategory::Converter,
            keywords: &["measure", "metric", "imperial", "length", "weight", "volume", "temperature"],
            args: &CONVERT_UNITS_ARGS,
            returns: "Object {category, value, from, to, result, display}",
            examples: &CONVERT_UNITS_EXAMPLES,
        }
    }

    fn call(&self, args: &JsonValue) -> Result<JsonValue, ToolError> {
        let category = parse_category(args, "convert_units")?;
        let value = require_number(args, "convert_units", "value")?;
        let from = require_text(args, "convert_units", "from")?;
        let to = require_text(args, "convert_units", "to")?;
        let places = parse_places(args, "convert_units")?;

        let result = convert(category, value, from, to)?;

        Ok(json!({
            "category": category,
            "value": value,
            "from": from,
            "to": to,
            "result": result,
            "display": format!("{} {} = {} {}", value, from, format_fixed(result, places), to),
        }))
    }
}

// ============ list_units ============

pub struct ListUnits;

static LIST_UNITS_ARGS: [ArgMeta; 1] = [
    ArgMeta::optional("category", "Text", "Only list this category", "all"),
];

static LIST_UNITS_EXAMPLES: [&str; 1] = [
    "list_units(\"temperature\") → c, f, k",
];

fn describe_category(category: Category) -> JsonValue {
    let units: Vec<JsonValue> = match category.strategy() {
        Strategy::Linear(table) => table.units.iter()
            .map(|u| json!({"symbol": u.symbol, "name": u.name, "factor": u.factor}))
            .collect(),
        Strategy::Affine(scale) => scale.units.iter()
            .map(|u| json!({"symbol": u.symbol, "name": u.name}))
            .collect(),
    };
    let (default_from, default_to) = category.default_units();

    json!({
        "category": category,
        "reference": category.reference_unit(),
        "default_from": default_from,
        "default_to": default_to,
        "units": units,
    })
}

impl ToolPlugin for ListUnits {
    fn meta(&self) -> ToolMeta {
        ToolMeta {
            name: "list_units",
            description: "List unit categories and the units in each.",
            usage: "list_units([category])",
            category: ToolCategory::Converter,
            keywords: &["units", "symbols", "measure"],
            args: &LIST_UNITS_ARGS,
            returns: "Object {categories: [...]}",
            examples: &LIST_UNITS_EXAMPLES,
        }
    }

    fn call(&self, args: &JsonValue) -> Result<JsonValue, ToolError> {
        let categories: Vec<Category> = match optional_text(args, "list_units", "category")? {
            Some(name) => vec![name.parse::<Category>()?],
            None => Category::ALL.to_vec(),
        };

        Ok(json!({
            "categories": categories.into_iter().map(describe_category).collect::<Vec<_>>(),
        }))
    }
}

// ============ convert_currency ============

pub struct ConvertCurrency;

static CONVERT_CURRENCY_ARGS: [ArgMeta; 3] = [
    ArgMeta::required("amount", "Number", "Amount to convert"),
    ArgMeta::required("from", "Text", "Source currency code (e.g., \"USD\")"),
    ArgMeta::required("to", "Text", "Target currency code (e.g., \"EUR\")"),
];

static CONVERT_CURRENCY_EXAMPLES: [&str; 2] = [
    "convert_currency(1, \"USD\", \"EUR\") → 0.92",
    "convert_currency(100, \"GBP\", \"JPY\") → 19012.66",
];

impl ToolPlugin for ConvertCurrency {
    fn meta(&self) -> ToolMeta {
        ToolMeta {
            name: "convert_currency",
            description: "Convert between major currencies using static demonstration rates.",
            usage: "convert_currency(amount, from, to)",
            category: ToolCategory::Converter,
            keywords: &["money", "exchange", "forex", "rates"],
            args: &CONVERT_CURRENCY_ARGS,
            returns: "Object {amount, from, to, result, display}",
            examples: &CONVERT_CURRENCY_EXAMPLES,
        }
    }

    fn call(&self, args: &JsonValue) -> Result<JsonValue, ToolError> {
        let amount = require_number(args, "convert_currency", "amount")?;
        let from = require_text(args, "convert_currency", "from")?.trim().to_uppercase();
        let to = require_text(args, "convert_currency", "to")?.trim().to_uppercase();

        let result = currency::convert(amount, &from, &to)?;

        Ok(json!({
            "amount": amount,
            "from": from,
            "to": to,
            "result": result,
            "display": format!("{} {} = {} {}", amount, from, format_fixed(result, CURRENCY_PLACES), to),
        }))
    }
}

// ============ list_currencies ============

pub struct ListCurrencies;

impl ToolPlugin for ListCurrencies {
    fn meta(&self) -> ToolMeta {
        ToolMeta {
            name: "list_currencies",
            description: "List supported currency codes and their rates against USD.",
            usage: "list_currencies()",
            category: ToolCategory::Converter,
            keywords: &["money", "exchange", "codes"],
            args: &[],
            returns: "Object {codes, rates, default_from, default_to}",
            examples: &[],
        }
    }

    fn call(&self, _args: &JsonValue) -> Result<JsonValue, ToolError> {
        let rates: serde_json::Map<String, JsonValue> = currency::RATES.units.iter()
            .map(|u| (u.symbol.to_string(), json!(u.factor)))
            .collect();

        Ok(json!({
            "codes": currency::codes(),
            "rates": rates,
            "default_from": currency::DEFAULT_PAIR.0,
            "default_to": currency::DEFAULT_PAIR.1,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toolbelt_core::codes;

    #[test]
    fn test_convert_units() {
        let out = ConvertUnits.call(&json!({
            "category": "length", "value": 1, "from": "km", "to": "m"
        })).unwrap();
        assert_eq!(out["result"], json!(1000.0));
        assert_eq!(out["category"], "length");
        assert_eq!(out["display"], "1 km = 1000.0000 m");
    }

    #[test]
    fn test_convert_units_places_and_string_value() {
        let out = ConvertUnits.call(&json!({
            "category": "temperature", "value": "98.6", "from": "f", "to": "c", "places": 1
        })).unwrap();
        assert_eq!(out["display"], "98.6 f = 37.0 c");
    }

    #[test]
    fn test_convert_units_bad_places() {
        for places in [json!(-1), json!(2.5), json!(13)] {
            let err = ConvertUnits.call(&json!({
                "category": "length", "value": 1, "from": "m", "to": "m", "places": places
            })).unwrap_err();
            assert_eq!(err.code, codes::DOMAIN_ERROR);
        }
    }

    #[test]
    fn test_convert_units_errors() {
        let err = ConvertUnits.call(&json!({
            "category": "length", "value": 5, "from": "m", "to": "parsecs"
        })).unwrap_err();
        assert_eq!(err.code, codes::UNKNOWN_UNIT);

        let err = ConvertUnits.call(&json!({
            "category": "area", "value": 5, "from": "m", "to": "km"
        })).unwrap_err();
        assert_eq!(err.code, codes::UNKNOWN_CATEGORY);

        let err = ConvertUnits.call(&json!({"category": "length", "from": "m", "to": "km"})).unwrap_err();
        assert_eq!(err.code, codes::MISSING_ARG);
    }

    #[test]
    fn test_list_units() {
        let all = ListUnits.call(&json!({})).unwrap();
        assert_eq!(all["categories"].as_array().unwrap().len(), 4);

        let temp = ListUnits.call(&json!({"category": "temperature"})).unwrap();
        let entry = &temp["categories"][0];
        assert_eq!(entry["reference"], "c");
        assert_eq!(entry["default_from"], "c");
        assert_eq!(entry["default_to"], "f");
        assert_eq!(entry["units"].as_array().unwrap().len(), 3);
        assert!(entry["units"][0].get("factor").is_none());

        let length = ListUnits.call(&json!({"category": "length"})).unwrap();
        assert_eq!(length["categories"][0]["units"][1]["factor"], json!(0.001));

        let all = ListUnits.call(&json!({"category": null})).unwrap();
        assert_eq!(all["categories"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_list_units_rejects_non_text_category() {
        for category in [json!(5), json!(true), json!(["length"])] {
            let err = ListUnits.call(&json!({"category": category})).unwrap_err();
            assert_eq!(err.code, codes::ARG_TYPE);
            assert!(err.message.starts_with("list_units() argument 'category'"));
        }
    }

    #[test]
    fn test_convert_currency() {
        let out = ConvertCurrency.call(&json!({"amount": 1, "from": "usd", "to": "EUR"})).unwrap();
        assert_eq!(out["result"], json!(0.92));
        assert_eq!(out["display"], "1 USD = 0.92 EUR");

        let err = ConvertCurrency.call(&json!({"amount": 1, "from": "USD", "to": "XYZ"})).unwrap_err();
        assert_eq!(err.code, codes::UNKNOWN_CURRENCY);
    }

    #[test]
    fn test_list_currencies() {
        let out = ListCurrencies.call(&json!({})).unwrap();
        assert_eq!(out["codes"].as_array().unwrap().len(), 8);
        assert_eq!(out["rates"]["JPY"], json!(150.2));
        assert_eq!(out["default_from"], "USD");
        assert_eq!(out["default_to"], "EUR");
    }
}
