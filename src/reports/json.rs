//! JSON format report generation

use std::fmt::Display;

use serde_json::json;

use super::ReportGenerator;
use crate::detector::CycleDetector;
use crate::error::FerrisCircuitsError;

pub struct JsonReportGenerator;

impl Default for JsonReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JsonReportGenerator {
    fn generate_report<N: Display, A: Display>(
        &self,
        detector: &CycleDetector<N, A>,
    ) -> Result<String, FerrisCircuitsError> {
        let cycles: Vec<_> = detector
            .cycles()
            .iter()
            .map(|cycle| {
                let nodes: Vec<String> = cycle.nodes().iter().map(|n| n.to_string()).collect();
                let edges: Vec<_> = cycle
                    .edges()
                    .iter()
                    .map(|edge| {
                        json!({
                            "from": edge.from().to_string(),
                            "to": edge.to().to_string(),
                            "attachment": edge.attachment().to_string(),
                        })
                    })
                    .collect();

                json!({
                    "nodes": nodes,
                    "edges": edges
                })
            })
            .collect();

        let report = json!({
            "has_cycles": detector.has_cycles(),
            "cycle_count": detector.cycle_count(),
            "limit_reached": detector.limit_reached(),
            "cycles": cycles,
        });

        serde_json::to_string_pretty(&report).map_err(FerrisCircuitsError::Json)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    use super::*;
    use crate::reports::test_support::detector_with_cycles;

    #[test]
    fn test_json_report_no_cycles() {
        let detector: CycleDetector<String, String> = CycleDetector::new();
        let report = JsonReportGenerator::new()
            .generate_report(&detector)
            .unwrap();
        let json: Value = serde_json::from_str(&report).unwrap();

        assert_eq!(json["has_cycles"], false);
        assert_eq!(json["cycle_count"], 0);
        assert_eq!(json["limit_reached"], false);
        assert_eq!(json["cycles"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_json_report_with_cycles() {
        let report = JsonReportGenerator::new()
            .generate_report(&detector_with_cycles())
            .unwrap();
        let json: Value = serde_json::from_str(&report).unwrap();

        assert_eq!(json["has_cycles"], true);
        assert_eq!(json["cycle_count"], 2);

        let cycles = json["cycles"].as_array().unwrap();
        assert_eq!(cycles.len(), 2);
        assert_eq!(cycles[0]["nodes"], json!(["api", "db"]));
        assert_eq!(cycles[1]["nodes"], json!(["api", "cache", "db"]));
    }

    #[test]
    fn test_json_report_edge_structure() {
        let report = JsonReportGenerator::new()
            .generate_report(&detector_with_cycles())
            .unwrap();
        let json: Value = serde_json::from_str(&report).unwrap();

        assert_eq!(
            json["cycles"][0]["edges"][0],
            json!({"from": "api", "to": "db", "attachment": "reads"})
        );
        assert_eq!(json["cycles"][1]["edges"][1]["attachment"], "");
    }

    #[test]
    fn test_json_report_pretty_formatting() {
        let detector: CycleDetector<String, String> = CycleDetector::new();
        let report = JsonReportGenerator::new()
            .generate_report(&detector)
            .unwrap();

        assert!(report.contains('\n'));
        assert!(report.contains("  "));
    }
}
