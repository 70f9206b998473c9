use xmltree::Element;
use crate::errors::ReportResult;
use crate::structs::report::placeholders::{ClassFeatures, History};
use crate::traits::from_element::FromElement;

// Content of these elements is not mapped; only their presence is observable.

impl FromElement for ClassFeatures {
    fn from_element(_element: &Element) -> ReportResult<Self> {
        Ok(Self {})
    }
}

impl FromElement for History {
    fn from_element(_element: &Element) -> ReportResult<Self> {
        Ok(Self {})
    }
}
