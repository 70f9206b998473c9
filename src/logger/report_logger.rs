use crate::config::constants::DEFAULT_STRING;
use crate::structs::report::bug_collection::BugCollection;

pub struct ReportLogger {}

impl ReportLogger {

    pub fn print_report_summary(collection: &BugCollection) {
        println!("\n📊 Report summary");
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        println!("Version:   {}", collection.version);
        if collection.release != DEFAULT_STRING && !collection.release.is_empty() {
            println!("Release:   {}", collection.release);
        }
        println!("Sequence:  {}", collection.sequence);
        if let Some(timestamp) = collection.timestamp_utc() {
            println!("Built:     {}", timestamp.to_rfc3339());
        }
        if let Some(analyzed) = collection.analysis_timestamp_utc() {
            println!("Analyzed:  {}", analyzed.to_rfc3339());
        }

        if let Some(project) = &collection.project {
            println!("Project:   {}", project.project_name);
            println!("Jar:       {}", project.jar.trim());
            if let Some(plugin_id) = project.plugin.get("id") {
                println!("Plugin:    {}", plugin_id);
            }
        }

        println!("\n🐛 Bug instances: {}", collection.buginstances.len());
        Self::print_counts("By category", &collection.count_by_category());
        Self::print_counts("By priority", &collection.count_by_priority());

        if let Some(errors) = &collection.errors {
            println!("\n⚠️  Analysis errors: {}, missing classes: {}", errors.num_errors, errors.num_missingclasses);
            for missing in &errors.missingclasses {
                println!("   • {}", missing);
            }
        }

        if let Some(summary) = &collection.findbugssummary {
            println!("\n📦 Packages: {} ({} classes analyzed)", summary.packagestats.len(), summary.total_classes);
            println!("⏱️  CPU {}s, clock {}s, peak {} MB", summary.cpu_seconds, summary.clock_seconds, summary.peak_mbytes);
            println!("🔬 Profiled classes: {}", summary.findbugsprofile.classprofiles.len());
        }
    }

    fn print_counts(title: &str, counts: &indexmap::IndexMap<String, usize>) {
        if counts.is_empty() {
            return;
        }
        println!("   {}:", title);
        for (key, count) in counts {
            println!("     {:<24} {}", key, count);
        }
    }
}
