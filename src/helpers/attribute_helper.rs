use indexmap::IndexMap;
use xmltree::Element;
use crate::errors::{ReportError, ReportResult};
use crate::helpers::element_helper::ElementHelper;

/// Typed attribute extraction with default substitution.
///
/// Defaults apply only when the attribute is absent. A present attribute is
/// always taken as-is (strings, including the empty string) or must parse
/// (integers, booleans); a value that does not parse fails the whole report.
pub struct AttributeHelper;

impl AttributeHelper {
    pub fn string_or(element: &Element, key: &str, default: &str) -> String {
        element
            .attributes
            .get(key)
            .cloned()
            .unwrap_or_else(|| default.to_string())
    }

    pub fn int_or(element: &Element, key: &str, default: i64) -> ReportResult<i64> {
        match element.attributes.get(key) {
            None => Ok(default),
            Some(value) => value.trim().parse::<i64>().map_err(|_| {
                ReportError::malformed_number(&ElementHelper::describe(element), key, value)
            }),
        }
    }

    pub fn bool_or(element: &Element, key: &str, default: bool) -> ReportResult<bool> {
        match element.attributes.get(key) {
            None => Ok(default),
            Some(value) => match value.trim().to_ascii_lowercase().as_str() {
                "true" => Ok(true),
                "false" => Ok(false),
                _ => Err(ReportError::malformed_boolean(
                    &ElementHelper::describe(element),
                    key,
                    value,
                )),
            },
        }
    }

    pub fn attributes(element: &Element) -> IndexMap<String, String> {
        element
            .attributes
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}
