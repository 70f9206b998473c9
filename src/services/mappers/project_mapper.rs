use xmltree::Element;
use crate::config::constants::{DEFAULT_STRING, JAR_TAG, PLUGIN_TAG};
use crate::errors::ReportResult;
use crate::helpers::attribute_helper::AttributeHelper;
use crate::helpers::element_helper::ElementHelper;
use crate::structs::report::project::Project;
use crate::traits::from_element::FromElement;

impl FromElement for Project {
    fn from_element(element: &Element) -> ReportResult<Self> {
        let jar = ElementHelper::required_child(element, JAR_TAG)?;
        let plugin = ElementHelper::required_child(element, PLUGIN_TAG)?;

        Ok(Self {
            project_name: AttributeHelper::string_or(element, "projectName", DEFAULT_STRING),
            jar: ElementHelper::text(jar),
            plugin: AttributeHelper::attributes(plugin),
        })
    }
}
