use xmltree::Element;
use crate::config::constants::{DEFAULT_COUNT, ERROR_TAG, MISSING_CLASS_TAG};
use crate::errors::ReportResult;
use crate::helpers::attribute_helper::AttributeHelper;
use crate::helpers::element_helper::ElementHelper;
use crate::structs::report::errors::{Errors, ReportErrorEntry};
use crate::traits::from_element::FromElement;

impl FromElement for Errors {
    fn from_element(element: &Element) -> ReportResult<Self> {
        Ok(Self {
            num_errors: AttributeHelper::int_or(element, "errors", DEFAULT_COUNT)?,
            num_missingclasses: AttributeHelper::int_or(element, "missingClasses", DEFAULT_COUNT)?,
            errors: ReportErrorEntry::from_elements(ElementHelper::children(element, ERROR_TAG))?,
            missingclasses: ElementHelper::children(element, MISSING_CLASS_TAG)
                .map(ElementHelper::text)
                .collect(),
        })
    }
}

impl FromElement for ReportErrorEntry {
    fn from_element(_element: &Element) -> ReportResult<Self> {
        Ok(Self {})
    }
}
