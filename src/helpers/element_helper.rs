use xmltree::{Element, XMLNode};
use crate::config::constants::IDENTIFYING_ATTRIBUTES;
use crate::errors::{ReportError, ReportResult};

/// Direct-child lookups. Nothing here searches below the immediate children.
pub struct ElementHelper;

impl ElementHelper {
    pub fn child<'a>(element: &'a Element, tag: &str) -> Option<&'a Element> {
        element
            .children
            .iter()
            .filter_map(XMLNode::as_element)
            .find(|child| child.name == tag)
    }

    pub fn required_child<'a>(element: &'a Element, tag: &str) -> ReportResult<&'a Element> {
        Self::child(element, tag)
            .ok_or_else(|| ReportError::missing_element(tag, &Self::describe(element)))
    }

    pub fn children<'a>(element: &'a Element, tag: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        element
            .children
            .iter()
            .filter_map(XMLNode::as_element)
            .filter(move |child| child.name == tag)
    }

    pub fn text(element: &Element) -> String {
        element
            .get_text()
            .map(|text| text.into_owned())
            .unwrap_or_default()
    }

    /// Short identity used in error messages, e.g. `<BugInstance type="XSS_SERVLET">`.
    pub fn describe(element: &Element) -> String {
        IDENTIFYING_ATTRIBUTES
            .iter()
            .find_map(|key| element.attributes.get(*key).map(|value| (key, value)))
            .map_or_else(
                || format!("<{}>", element.name),
                |(key, value)| format!("<{} {}=\"{}\">", element.name, key, value),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(xml: &str) -> Element {
        Element::parse(xml.as_bytes()).unwrap()
    }

    #[test]
    fn child_lookup_is_scoped_to_direct_children() {
        let el = element("<Root><Wrapper><Jar>nested.jar</Jar></Wrapper></Root>");
        assert!(ElementHelper::child(&el, "Jar").is_none());
        assert!(ElementHelper::child(&el, "Wrapper").is_some());
    }

    #[test]
    fn children_preserve_document_order() {
        let el = element(r#"<Root><A n="1"/><B/><A n="2"/><A n="3"/></Root>"#);
        let order: Vec<&str> = ElementHelper::children(&el, "A")
            .map(|a| a.attributes["n"].as_str())
            .collect();
        assert_eq!(order, vec!["1", "2", "3"]);
    }

    #[test]
    fn required_child_reports_tag_and_parent() {
        let el = element(r#"<BugInstance type="XSS_SERVLET"><Method/></BugInstance>"#);
        match ElementHelper::required_child(&el, "Class") {
            Err(ReportError::MissingElement { expected, parent }) => {
                assert_eq!(expected, "Class");
                assert_eq!(parent, "<BugInstance type=\"XSS_SERVLET\">");
            }
            other => panic!("expected MissingElement, got {:?}", other),
        }
    }

    #[test]
    fn text_is_empty_for_empty_element() {
        let el = element("<Project><Jar/><Other>x</Other></Project>");
        let jar = ElementHelper::child(&el, "Jar").unwrap();
        assert_eq!(ElementHelper::text(jar), "");
        assert_eq!(ElementHelper::describe(&el), "<Project>");
    }
}
