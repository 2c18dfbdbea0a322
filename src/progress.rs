use console::{Term, style};
use indicatif::{ProgressBar, ProgressStyle};

use crate::constants::progress::{SPINNER_FRAMES, TICK_INTERVAL};
use crate::utils::string::pluralize;

const SPINNER_TEMPLATE: &str = "{spinner:.cyan} {msg} [{elapsed}]";

pub struct ProgressReporter {
    term: Term,
    current_spinner: Option<ProgressBar>,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
            current_spinner: None,
        }
    }

    /// Create a reporter only when stderr is an interactive terminal
    pub fn for_terminal() -> Option<Self> {
        Term::stderr().is_term().then(Self::new)
    }

    fn create_spinner(&self, message: &str) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template(SPINNER_TEMPLATE)
                .expect("Spinner template should be valid")
                .tick_strings(SPINNER_FRAMES),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(TICK_INTERVAL);
        pb
    }

    pub fn start_loading(&mut self, manifest_count: usize) {
        let _ = self.term.clear_line();
        eprintln!(
            "{} Loading {} graph {}...",
            style("🔍").cyan(),
            manifest_count,
            pluralize("manifest", manifest_count)
        );
    }

    pub fn finish_loading(&mut self, node_count: usize, edge_count: usize) {
        eprintln!(
            "{} Graph loaded: {} {}, {} {}",
            style("✓").green(),
            style(node_count).yellow().bold(),
            pluralize("node", node_count),
            style(edge_count).yellow().bold(),
            pluralize("edge", edge_count)
        );
    }

    pub fn start_cycle_detection(&mut self) {
        let spinner = self.create_spinner("Enumerating elementary cycles...");
        self.current_spinner = Some(spinner);
    }

    pub fn finish_cycle_detection(&mut self, cycles_found: usize, limit_reached: bool) {
        if let Some(pb) = self.current_spinner.take() {
            pb.finish_and_clear();
        }
        if cycles_found == 0 {
            eprintln!(
                "{} No cycles detected! {}",
                style("✓").green().bold(),
                style("🎉").dim()
            );
        } else {
            eprintln!(
                "{} Found {} {}{}",
                style("⚠").yellow().bold(),
                style(cycles_found).red().bold(),
                pluralize("cycle", cycles_found),
                if limit_reached {
                    " (cycle limit reached)"
                } else {
                    ""
                }
            );
        }
    }
}
