//! Fixed reporting and compliance standard catalogs
//!
//! Catalogs are static configuration data, not computed. Ids are stable
//! strings so a collaborator can swap or extend a catalog without touching
//! engine logic. The wizard selects from `REPORTING_STANDARDS`; the
//! compliance dashboard reads `COMPLIANCE_STANDARDS`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A reporting standard the wizard can select
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StandardInfo {
    pub id: &'static str,
    pub name: &'static str,
}

/// Selectable reporting standards, in catalog order.
///
/// `ReportConfiguration.standards` is ordered by this catalog regardless
/// of selection order.
pub const REPORTING_STANDARDS: [StandardInfo; 4] = [
    StandardInfo {
        id: "gri",
        name: "Global Reporting Initiative (GRI)",
    },
    StandardInfo {
        id: "sasb",
        name: "Sustainability Accounting Standards Board (SASB)",
    },
    StandardInfo {
        id: "tcfd",
        name: "Task Force on Climate-related Financial Disclosures (TCFD)",
    },
    StandardInfo {
        id: "cdp",
        name: "Carbon Disclosure Project (CDP)",
    },
];

/// Look up a reporting standard by id
pub fn reporting_standard(id: &str) -> Option<&'static StandardInfo> {
    REPORTING_STANDARDS.iter().find(|s| s.id == id)
}

/// Whether an id belongs to the reporting-standard catalog
pub fn is_reporting_standard(id: &str) -> bool {
    reporting_standard(id).is_some()
}

/// Compliance posture against a standard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComplianceStatus {
    Compliant,
    Partial,
    NonCompliant,
}

impl ComplianceStatus {
    /// Stable display label
    pub fn as_str(&self) -> &'static str {
        match self {
            ComplianceStatus::Compliant => "compliant",
            ComplianceStatus::Partial => "partial",
            ComplianceStatus::NonCompliant => "non-compliant",
        }
    }
}

impl fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A compliance-dashboard standard with its current posture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComplianceStandard {
    pub id: &'static str,
    pub name: &'static str,
    pub status: ComplianceStatus,
}

/// Compliance-dashboard catalog
pub const COMPLIANCE_STANDARDS: [ComplianceStandard; 12] = [
    ComplianceStandard {
        id: "gri",
        name: "Global Reporting Initiative (GRI)",
        status: ComplianceStatus::Compliant,
    },
    ComplianceStandard {
        id: "sasb",
        name: "Sustainability Accounting Standards Board (SASB)",
        status: ComplianceStatus::Partial,
    },
    ComplianceStandard {
        id: "tcfd",
        name: "Task Force on Climate-related Financial Disclosures (TCFD)",
        status: ComplianceStatus::NonCompliant,
    },
    ComplianceStandard {
        id: "ungc",
        name: "UN Global Compact (UNGC)",
        status: ComplianceStatus::Compliant,
    },
    ComplianceStandard {
        id: "brsr",
        name: "Business Responsibility and Sustainability Report (BRSR)",
        status: ComplianceStatus::Partial,
    },
    ComplianceStandard {
        id: "lodr",
        name: "SEBI Listing Obligations and Disclosure Requirements (LODR)",
        status: ComplianceStatus::Compliant,
    },
    ComplianceStandard {
        id: "ccdr",
        name: "Canadian Climate-related Disclosure Requirements (CCDR)",
        status: ComplianceStatus::NonCompliant,
    },
    ComplianceStandard {
        id: "csrd",
        name: "Corporate Sustainability Reporting Directive (CSRD)",
        status: ComplianceStatus::Partial,
    },
    ComplianceStandard {
        id: "nfrd",
        name: "Non-Financial Reporting Directive (NFRD)",
        status: ComplianceStatus::Compliant,
    },
    ComplianceStandard {
        id: "sfdr",
        name: "Sustainable Finance Disclosure Regulation (SFDR)",
        status: ComplianceStatus::NonCompliant,
    },
    ComplianceStandard {
        id: "cdp",
        name: "Carbon Disclosure Project (CDP)",
        status: ComplianceStatus::Partial,
    },
    ComplianceStandard {
        id: "djsi",
        name: "Dow Jones Sustainability Indices (DJSI)",
        status: ComplianceStatus::Compliant,
    },
];

/// Look up a compliance standard by id
pub fn compliance_standard(id: &str) -> Option<&'static ComplianceStandard> {
    COMPLIANCE_STANDARDS.iter().find(|s| s.id == id)
}
