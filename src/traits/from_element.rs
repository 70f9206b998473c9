use xmltree::Element;
use crate::errors::ReportResult;

/// Single-step construction of a record from the element that roots it.
pub trait FromElement: Sized {
    fn from_element(element: &Element) -> ReportResult<Self>;

    /// Map every element in order, failing on the first error.
    fn from_elements<'a, I>(elements: I) -> ReportResult<Vec<Self>>
    where
        I: IntoIterator<Item = &'a Element>,
    {
        elements.into_iter().map(Self::from_element).collect()
    }
}
