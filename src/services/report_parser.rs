use std::fs;
use std::io::Read;
use std::path::Path;
use xmltree::Element;
use crate::config::constants::{
    BUG_INSTANCE_TAG, CLASS_FEATURES_TAG, DEFAULT_INT, DEFAULT_STRING, ERRORS_TAG, FIND_BUGS_SUMMARY_TAG,
    HISTORY_TAG, PROJECT_TAG,
};
use crate::errors::{ReportError, ReportResult};
use crate::helpers::attribute_helper::AttributeHelper;
use crate::helpers::element_helper::ElementHelper;
use crate::structs::config::parser_config::ParserConfig;
use crate::structs::report::bug_collection::BugCollection;
use crate::structs::report::bug_instance::BugInstance;
use crate::structs::report::errors::Errors;
use crate::structs::report::find_bugs_summary::FindBugsSummary;
use crate::structs::report::placeholders::{ClassFeatures, History};
use crate::structs::report::project::Project;
use crate::traits::from_element::FromElement;

type Sections = (
    Option<Project>,
    Vec<BugInstance>,
    Option<Errors>,
    Option<FindBugsSummary>,
    Option<ClassFeatures>,
    Option<History>,
);

/// Maps a FindBugs / FindSecBugs XML report onto [`BugCollection`].
///
/// The whole document is loaded into an element tree before mapping starts.
/// A parse either returns a complete collection or the first error met in
/// document order; nothing partial is ever returned.
#[derive(Debug, Clone, Default)]
pub struct ReportParser {
    config: ParserConfig,
}

impl ReportParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> &ParserConfig {
        &self.config
    }

    pub fn parse_from_text(xml: &str) -> ReportResult<BugCollection> {
        Self::new().text(xml)
    }

    pub fn parse_from_file<P: AsRef<Path>>(path: P) -> ReportResult<BugCollection> {
        Self::new().file(path)
    }

    pub fn parse_from_reader<R: Read>(reader: R) -> ReportResult<BugCollection> {
        Self::new().reader(reader)
    }

    pub fn text(&self, xml: &str) -> ReportResult<BugCollection> {
        self.reader(xml.as_bytes())
    }

    pub fn file<P: AsRef<Path>>(&self, path: P) -> ReportResult<BugCollection> {
        let path = path.as_ref();
        let display = path.display().to_string();
        log::debug!("📋 Reading report from: {}", display);

        let content = fs::read_to_string(path).map_err(|e| ReportError::io_error(&display, e))?;
        let collection = self.text(&content)?;

        log::info!(
            "✅ Parsed {} ({} bug instances)",
            display,
            collection.buginstances.len()
        );
        Ok(collection)
    }

    pub fn reader<R: Read>(&self, reader: R) -> ReportResult<BugCollection> {
        let root = Element::parse(reader)?;
        self.parse(&root)
    }

    /// Map an already-built element tree. The root's own tag is not checked.
    pub fn parse(&self, root: &Element) -> ReportResult<BugCollection> {
        let version = AttributeHelper::string_or(root, "version", DEFAULT_STRING);
        let sequence = AttributeHelper::int_or(root, "sequence", DEFAULT_INT)?;
        let timestamp = AttributeHelper::int_or(root, "timestamp", DEFAULT_INT)?;
        let analysis_timestamp = AttributeHelper::int_or(root, "analysisTimestamp", DEFAULT_INT)?;
        let release = AttributeHelper::string_or(root, "release", DEFAULT_STRING);

        let (project, buginstances, errors, findbugssummary, classfeatures, history) = self.map_sections(root)?;

        log::debug!(
            "Mapped report version {}: {} bug instances, project={}, errors={}, summary={}",
            version,
            buginstances.len(),
            project.is_some(),
            errors.is_some(),
            findbugssummary.is_some()
        );

        Ok(BugCollection {
            version,
            sequence,
            timestamp,
            analysis_timestamp,
            release,
            project,
            buginstances,
            errors,
            findbugssummary,
            classfeatures,
            history,
        })
    }

    #[cfg(feature = "parallel-processing")]
    fn map_sections(&self, root: &Element) -> ReportResult<Sections> {
        if !self.config.parallel {
            return self.map_sections_sequential(root);
        }

        let ((project, buginstances), (errors, (summary, (classfeatures, history)))) = rayon::join(
            || {
                rayon::join(
                    || optional_section::<Project>(root, PROJECT_TAG),
                    || self.map_bug_instances(root),
                )
            },
            || {
                rayon::join(
                    || optional_section::<Errors>(root, ERRORS_TAG),
                    || {
                        rayon::join(
                            || optional_section::<FindBugsSummary>(root, FIND_BUGS_SUMMARY_TAG),
                            || {
                                (
                                    optional_section::<ClassFeatures>(root, CLASS_FEATURES_TAG),
                                    optional_section::<History>(root, HISTORY_TAG),
                                )
                            },
                        )
                    },
                )
            },
        );

        Ok((project?, buginstances?, errors?, summary?, classfeatures?, history?))
    }

    #[cfg(not(feature = "parallel-processing"))]
    fn map_sections(&self, root: &Element) -> ReportResult<Sections> {
        self.map_sections_sequential(root)
    }

    fn map_sections_sequential(&self, root: &Element) -> ReportResult<Sections> {
        Ok((
            optional_section::<Project>(root, PROJECT_TAG)?,
            self.map_bug_instances(root)?,
            optional_section::<Errors>(root, ERRORS_TAG)?,
            optional_section::<FindBugsSummary>(root, FIND_BUGS_SUMMARY_TAG)?,
            optional_section::<ClassFeatures>(root, CLASS_FEATURES_TAG)?,
            optional_section::<History>(root, HISTORY_TAG)?,
        ))
    }

    fn map_bug_instances(&self, root: &Element) -> ReportResult<Vec<BugInstance>> {
        let elements: Vec<&Element> = ElementHelper::children(root, BUG_INSTANCE_TAG).collect();

        if cfg!(feature = "parallel-processing")
            && self.config.parallel
            && elements.len() >= self.config.parallel_threshold
        {
            log::debug!("Mapping {} bug instances in parallel", elements.len());
            return map_bug_instances_parallel(&elements);
        }

        BugInstance::from_elements(elements)
    }
}

#[cfg(feature = "parallel-processing")]
fn map_bug_instances_parallel(elements: &[&Element]) -> ReportResult<Vec<BugInstance>> {
    use rayon::prelude::*;

    // Collected per element first so the reported error is the earliest in document order.
    let mapped: Vec<ReportResult<BugInstance>> = elements
        .par_iter()
        .map(|element| BugInstance::from_element(element))
        .collect();
    mapped.into_iter().collect()
}

#[cfg(not(feature = "parallel-processing"))]
fn map_bug_instances_parallel(elements: &[&Element]) -> ReportResult<Vec<BugInstance>> {
    BugInstance::from_elements(elements.iter().copied())
}

fn optional_section<T: FromElement>(root: &Element, tag: &str) -> ReportResult<Option<T>> {
    let section = ElementHelper::child(root, tag).map(T::from_element).transpose()?;
    if section.is_some() {
        log::debug!("Mapped <{}> section", tag);
    }
    Ok(section)
}
