//! JUnit XML format report generation

use std::fmt::{Display, Write};

use super::{ReportGenerator, describe_edge, describe_nodes};
use crate::detector::CycleDetector;
use crate::error::FerrisCircuitsError;

pub struct JunitReportGenerator;

impl Default for JunitReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JunitReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

/// Escape the characters XML reserves in text and attribute values
fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

impl ReportGenerator for JunitReportGenerator {
    fn generate_report<N: Display, A: Display>(
        &self,
        detector: &CycleDetector<N, A>,
    ) -> Result<String, FerrisCircuitsError> {
        let mut output = String::new();
        let failures = if detector.has_cycles() { "1" } else { "0" };

        writeln!(output, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(
            output,
            r#"<testsuites name="ferris-circuits" tests="1" failures="{failures}">"#
        )?;
        writeln!(
            output,
            r#"  <testsuite name="dependency-cycles" tests="1" failures="{failures}">"#
        )?;

        if detector.has_cycles() {
            writeln!(
                output,
                r#"    <testcase name="check-dependency-cycles" classname="ferris-circuits">"#
            )?;
            writeln!(
                output,
                r#"      <failure message="Dependency cycles detected">"#
            )?;
            writeln!(
                output,
                "Found {} dependency cycles:",
                detector.cycle_count()
            )?;

            for (i, cycle) in detector.cycles().iter().enumerate() {
                writeln!(
                    output,
                    "\nCycle {}: {}",
                    i + 1,
                    escape_xml(&describe_nodes(&cycle.nodes()))
                )?;
                for edge in cycle.edges() {
                    writeln!(output, "  {}", escape_xml(&describe_edge(edge)))?;
                }
            }

            writeln!(output, r#"      </failure>"#)?;
            writeln!(output, r#"    </testcase>"#)?;
        } else {
            writeln!(
                output,
                r#"    <testcase name="check-dependency-cycles" classname="ferris-circuits" />"#
            )?;
        }

        writeln!(output, r#"  </testsuite>"#)?;
        writeln!(output, r#"</testsuites>"#)?;

        Ok(output)
    }
}
