//! Presentation collaborators for mission reports: plain-text summaries and
//! JSON sidecars. Nothing here validates; a well-formed report is assumed.

pub mod summary {
    use std::fmt::Write;

    use stellar_mission::report::MissionReport;

    const RULE: &str = "==================================================";

    /// Render the multi-line human-readable mission summary.
    pub fn render(report: &MissionReport) -> String {
        let mut out = String::new();

        // Writing to a String cannot fail.
        let _ = writeln!(out, "MISSION REPORT: {}", report.mission_id);
        let _ = writeln!(out, "Destination: {}", report.destination);
        let _ = writeln!(out, "Original distance: {} light-years", report.distance);
        let _ = writeln!(out, "{RULE}");

        for stage in &report.stages {
            let _ = writeln!(
                out,
                "Stage {}: speed {:.2}% c | distance {:.2} ly | time {:.2} yr | expansion +{:.4}%",
                stage.stage_number,
                stage.speed_percentage,
                stage.distance_covered,
                stage.time_elapsed,
                stage.expansion_effect,
            );
        }

        let _ = writeln!(out, "{RULE}");
        let _ = writeln!(out, "Total mission time: {:.2} years", report.total_time);
        let _ = writeln!(
            out,
            "Actual distance traveled: {:.2} light-years",
            report.total_distance
        );
        let _ = writeln!(
            out,
            "Expansion impact: +{:.4}% extra distance",
            report.expansion_addition
        );

        out
    }
}

pub mod json {
    use std::fs::{self, File};
    use std::io::{self, BufWriter, Write};
    use std::path::Path;

    use stellar_mission::report::MissionReport;

    /// Create a writer for the target path, handling stdout (`-`) by convention.
    pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
        if path == Path::new("-") {
            return Ok(Box::new(BufWriter::new(io::stdout())));
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(path)?;
        Ok(Box::new(BufWriter::new(file)))
    }

    /// Serialize the report as pretty JSON followed by a trailing newline.
    pub fn write_report(writer: &mut dyn Write, report: &MissionReport) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *writer, report)?;
        writeln!(writer)?;
        writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use stellar_mission::report::{MissionReport, TravelStage};

    fn sample_report() -> MissionReport {
        MissionReport {
            destination: "Barnard's Star".to_string(),
            distance: 6.0,
            mission_id: "BRN-007".to_string(),
            stages: vec![
                TravelStage {
                    stage_number: 1,
                    speed_percentage: 5.0,
                    distance_covered: 3.0,
                    time_elapsed: 60.0,
                    expansion_effect: 0.0004,
                },
                TravelStage {
                    stage_number: 2,
                    speed_percentage: 7.5,
                    distance_covered: 3.0,
                    time_elapsed: 40.0,
                    expansion_effect: 0.0003,
                },
            ],
            total_time: 100.0,
            total_distance: 6.0,
            expansion_addition: 0.0004,
        }
    }

    #[test]
    fn summary_lists_header_stages_and_totals() {
        let text = super::summary::render(&sample_report());
        assert!(text.starts_with("MISSION REPORT: BRN-007"));
        assert!(text.contains("Destination: Barnard's Star"));
        assert!(text.contains("Stage 1: speed 5.00% c"));
        assert!(text.contains("Stage 2: speed 7.50% c"));
        assert!(text.contains("Total mission time: 100.00 years"));
        assert!(text.contains("Expansion impact: +0.0004% extra distance"));
    }

    #[test]
    fn json_round_trips_through_serde_value() {
        let mut buffer = Vec::new();
        super::json::write_report(&mut buffer, &sample_report()).expect("write json");

        let value: serde_json::Value = serde_json::from_slice(&buffer).expect("parse json");
        assert_eq!(value["mission_id"], "BRN-007");
        assert_eq!(value["stages"].as_array().map(|s| s.len()), Some(2));
        assert_eq!(value["stages"][1]["stage_number"], 2);
    }
}
