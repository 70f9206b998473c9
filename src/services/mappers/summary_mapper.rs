use xmltree::Element;
use crate::config::constants::{CLASS_PROFILE_TAG, CLASS_STATS_TAG, DEFAULT_INT, DEFAULT_STRING, FIND_BUGS_PROFILE_TAG, PACKAGE_STATS_TAG};
use crate::errors::ReportResult;
use crate::helpers::attribute_helper::AttributeHelper;
use crate::helpers::element_helper::ElementHelper;
use crate::structs::report::class_profile::ClassProfile;
use crate::structs::report::class_stats::ClassStats;
use crate::structs::report::find_bugs_profile::FindBugsProfile;
use crate::structs::report::find_bugs_summary::FindBugsSummary;
use crate::structs::report::package_stats::PackageStats;
use crate::traits::from_element::FromElement;

impl FromElement for FindBugsSummary {
    fn from_element(element: &Element) -> ReportResult<Self> {
        let text = |key: &str| AttributeHelper::string_or(element, key, DEFAULT_STRING);
        let profile = ElementHelper::required_child(element, FIND_BUGS_PROFILE_TAG)?;

        Ok(Self {
            timestamp: text("timestamp"),
            total_classes: text("total_classes"),
            referenced_classes: text("referenced_classes"),
            total_bugs: text("total_bugs"),
            total_size: text("total_size"),
            num_packages: text("num_packages"),
            java_version: text("java_version"),
            vm_version: text("vm_version"),
            cpu_seconds: text("cpu_seconds"),
            clock_seconds: text("clock_seconds"),
            peak_mbytes: text("peak_mbytes"),
            alloc_mbytes: text("alloc_mbytes"),
            gc_seconds: text("gc_seconds"),
            priority_1: text("priority_1"),
            priority_2: text("priority_2"),
            priority_3: text("priority_3"),
            packagestats: PackageStats::from_elements(ElementHelper::children(element, PACKAGE_STATS_TAG))?,
            findbugsprofile: FindBugsProfile::from_element(profile)?,
        })
    }
}

impl FromElement for PackageStats {
    fn from_element(element: &Element) -> ReportResult<Self> {
        Ok(Self {
            package: AttributeHelper::string_or(element, "package", DEFAULT_STRING),
            total_bugs: AttributeHelper::string_or(element, "total_bugs", DEFAULT_STRING),
            total_types: AttributeHelper::string_or(element, "total_types", DEFAULT_STRING),
            total_size: AttributeHelper::string_or(element, "total_size", DEFAULT_STRING),
            classstats: ClassStats::from_elements(ElementHelper::children(element, CLASS_STATS_TAG))?,
        })
    }
}

impl FromElement for ClassStats {
    fn from_element(element: &Element) -> ReportResult<Self> {
        Ok(Self {
            class_name: AttributeHelper::string_or(element, "class", DEFAULT_STRING),
            source_file: AttributeHelper::string_or(element, "sourceFile", DEFAULT_STRING),
            interface: AttributeHelper::string_or(element, "interface", DEFAULT_STRING),
            size: AttributeHelper::int_or(element, "size", DEFAULT_INT)?,
            bugs: AttributeHelper::int_or(element, "bugs", DEFAULT_INT)?,
        })
    }
}

impl FromElement for FindBugsProfile {
    fn from_element(element: &Element) -> ReportResult<Self> {
        Ok(Self {
            classprofiles: ClassProfile::from_elements(ElementHelper::children(element, CLASS_PROFILE_TAG))?,
        })
    }
}

impl FromElement for ClassProfile {
    fn from_element(element: &Element) -> ReportResult<Self> {
        let int = |key: &str| AttributeHelper::int_or(element, key, DEFAULT_INT);

        Ok(Self {
            name: AttributeHelper::string_or(element, "name", DEFAULT_STRING),
            total_milliseconds: int("totalMilliseconds")?,
            invocations: int("invocations")?,
            avg_microseconds_per_invocation: int("avgMicrosecondsPerInvocation")?,
            max_microseconds_per_invocation: int("maxMicrosecondsPerInvocation")?,
            standard_deviation_microseconds_per_invocation: int("standardDeviationMicrosecondsPerInvocation")?,
        })
    }
}
