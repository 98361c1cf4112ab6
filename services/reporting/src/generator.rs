//! Report generation handoff
//!
//! The wizard hands the submitted `ReportConfiguration` to an external
//! report-generation collaborator. The handoff is synchronous and
//! fire-and-forget: the wizard awaits no acknowledgment and defines
//! nothing about the collaborator beyond the value shape.

use tracing::info;

use crate::config::ReportConfiguration;

/// The report-generation collaborator seam
pub trait ReportGenerator {
    /// Receive a submitted configuration. Must not block.
    fn generate(&mut self, config: ReportConfiguration);
}

/// Generator that only logs the handoff; useful as a default collaborator
/// in environments without a real generation service.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingGenerator;

impl ReportGenerator for LoggingGenerator {
    fn generate(&mut self, config: ReportConfiguration) {
        info!(
            standards = config.standards.len(),
            company = %config.company.name,
            "report configuration handed off"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CompanyProfile, CompanySize, ReportingPeriod};
    use chrono::NaiveDate;

    /// Records every handed-off configuration
    struct RecordingGenerator {
        received: Vec<ReportConfiguration>,
    }

    impl RecordingGenerator {
        fn new() -> Self {
            Self {
                received: Vec::new(),
            }
        }
    }

    impl ReportGenerator for RecordingGenerator {
        fn generate(&mut self, config: ReportConfiguration) {
            self.received.push(config);
        }
    }

    #[test]
    fn test_recording_generator_captures_config() {
        let mut generator = RecordingGenerator::new();
        generator.generate(ReportConfiguration {
            standards: vec!["gri".to_string()],
            period: ReportingPeriod {
                start: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                end: NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
            },
            company: CompanyProfile {
                name: "Acme".to_string(),
                industry: "Manufacturing".to_string(),
                size: CompanySize::Small,
            },
        });
        assert_eq!(generator.received.len(), 1);
        assert_eq!(generator.received[0].standards, vec!["gri"]);
    }
}
