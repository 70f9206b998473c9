use indexmap::IndexMap;
use xmltree::Element;
use crate::config::constants::{CLASS_TAG, DEFAULT_INT, DEFAULT_STRING, METHOD_TAG, SOURCE_LINE_TAG, STRING_TAG};
use crate::errors::ReportResult;
use crate::helpers::attribute_helper::AttributeHelper;
use crate::helpers::element_helper::ElementHelper;
use crate::structs::report::bug_class::BugClass;
use crate::structs::report::bug_instance::BugInstance;
use crate::structs::report::bug_method::BugMethod;
use crate::structs::report::source_line::SourceLine;
use crate::traits::from_element::FromElement;

impl FromElement for BugInstance {
    fn from_element(element: &Element) -> ReportResult<Self> {
        let class = ElementHelper::required_child(element, CLASS_TAG)?;
        let method = ElementHelper::required_child(element, METHOD_TAG)?;

        Ok(Self {
            bug_type: AttributeHelper::string_or(element, "type", DEFAULT_STRING),
            priority: AttributeHelper::string_or(element, "priority", DEFAULT_STRING),
            rank: AttributeHelper::string_or(element, "rank", DEFAULT_STRING),
            abbrev: AttributeHelper::string_or(element, "abbrev", DEFAULT_STRING),
            category: AttributeHelper::string_or(element, "category", DEFAULT_STRING),
            strings: role_strings(element),
            bug_class: BugClass::from_element(class)?,
            bug_method: BugMethod::from_element(method)?,
            sourcelines: SourceLine::from_elements(ElementHelper::children(element, SOURCE_LINE_TAG))?,
        })
    }
}

fn role_strings(element: &Element) -> IndexMap<String, String> {
    let mut strings = IndexMap::new();
    for string in ElementHelper::children(element, STRING_TAG) {
        // IndexMap::insert keeps the original slot for a repeated key.
        strings.insert(
            AttributeHelper::string_or(string, "role", DEFAULT_STRING),
            AttributeHelper::string_or(string, "value", DEFAULT_STRING),
        );
    }
    strings
}

impl FromElement for BugClass {
    fn from_element(element: &Element) -> ReportResult<Self> {
        Ok(Self {
            classname: AttributeHelper::string_or(element, "classname", DEFAULT_STRING),
            sourcelines: SourceLine::from_elements(ElementHelper::children(element, SOURCE_LINE_TAG))?,
        })
    }
}

impl FromElement for BugMethod {
    fn from_element(element: &Element) -> ReportResult<Self> {
        Ok(Self {
            classname: AttributeHelper::string_or(element, "classname", DEFAULT_STRING),
            name: AttributeHelper::string_or(element, "name", DEFAULT_STRING),
            signature: AttributeHelper::string_or(element, "signature", DEFAULT_STRING),
            is_static: AttributeHelper::bool_or(element, "isStatic", false)?,
            sourcelines: SourceLine::from_elements(ElementHelper::children(element, SOURCE_LINE_TAG))?,
        })
    }
}

impl FromElement for SourceLine {
    fn from_element(element: &Element) -> ReportResult<Self> {
        Ok(Self {
            classname: AttributeHelper::string_or(element, "classname", DEFAULT_STRING),
            start: AttributeHelper::int_or(element, "start", DEFAULT_INT)?,
            end: AttributeHelper::int_or(element, "end", DEFAULT_INT)?,
            start_bytecode: AttributeHelper::int_or(element, "startBytecode", DEFAULT_INT)?,
            end_bytecode: AttributeHelper::int_or(element, "endBytecode", DEFAULT_INT)?,
            sourcefile: AttributeHelper::string_or(element, "sourcefile", DEFAULT_STRING),
            sourcepath: AttributeHelper::string_or(element, "sourcepath", DEFAULT_STRING),
        })
    }
}
