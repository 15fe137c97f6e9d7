//! The advisory formatter.
//!
//! Shapes each matcher's raw hit into the uniform [`Advisory`] record so
//! that callers never branch on matcher-specific result shapes. This is the
//! only module in the engine with policy beyond table lookup: it owns the
//! severity-to-escalation mapping and the bridge from interaction
//! severities onto the shared advisory scale.
//!
//! Policy summary:
//!
//! - Symptom results escalate when the entry says so OR the severity is
//!   Moderate or above. Unknown (fallback) always escalates.
//! - Interaction advisories take the maximum fired severity, bridged as
//!   Mild→Low, Moderate→Moderate, Severe→High; escalate at Moderate and
//!   above. A Severe match makes the detail lead with stopping the
//!   combination.
//! - Region advisories carry `Unknown` severity and never escalate on
//!   their own: a tap is localization, not a diagnosis.

use salus_contracts::advisory::{
    Advisory, AdvisoryPayload, AdvisorySource, InteractionMatch,
};
use salus_contracts::severity::{InteractionSeverity, Severity};
use salus_knowledge::{BodyRegion, SymptomEntry};

/// True when a severity bucket warrants recommending a clinician visit.
pub fn severity_escalates(severity: Severity) -> bool {
    matches!(
        severity,
        Severity::Moderate | Severity::ModerateHigh | Severity::High | Severity::Unknown
    )
}

/// Bridge an interaction severity onto the shared advisory scale.
pub fn bridge_interaction_severity(severity: InteractionSeverity) -> Severity {
    match severity {
        InteractionSeverity::Mild => Severity::Low,
        InteractionSeverity::Moderate => Severity::Moderate,
        InteractionSeverity::Severe => Severity::High,
    }
}

/// The advisory returned when no symptom keyword matches.
///
/// An unmatched description means "unmatched", never "no condition"; the
/// fallback always escalates.
pub fn fallback_advisory() -> Advisory {
    Advisory {
        source: AdvisorySource::Symptom,
        label: "Insufficient information".to_string(),
        severity: Severity::Unknown,
        detail: "The description did not match any known symptom pattern. \
                 This does not mean nothing is wrong; please consult a \
                 healthcare professional."
            .to_string(),
        escalate: true,
        payload: AdvisoryPayload::Symptom { matched_keyword: None },
    }
}

/// Shape a matched symptom entry into an advisory.
pub fn symptom_advisory(entry: &SymptomEntry) -> Advisory {
    Advisory {
        source: AdvisorySource::Symptom,
        label: entry.condition.clone(),
        severity: entry.severity,
        detail: entry.advice.clone(),
        escalate: entry.escalate || severity_escalates(entry.severity),
        payload: AdvisoryPayload::Symptom {
            matched_keyword: Some(entry.keyword.clone()),
        },
    }
}

/// Shape a located body region into an advisory.
pub fn region_advisory(region: &BodyRegion) -> Advisory {
    let mut detail = String::new();
    if !region.possible_conditions.is_empty() {
        detail.push_str("Commonly associated with: ");
        detail.push_str(&region.possible_conditions.join(", "));
        detail.push('.');
    }
    if !region.precautions.is_empty() {
        if !detail.is_empty() {
            detail.push(' ');
        }
        detail.push_str("Precautions: ");
        detail.push_str(&region.precautions.join("; "));
        detail.push('.');
    }
    if detail.is_empty() {
        detail.push_str("No additional guidance recorded for this region.");
    }

    Advisory {
        source: AdvisorySource::Region,
        label: region.name.clone(),
        severity: Severity::Unknown,
        detail,
        escalate: false,
        payload: AdvisoryPayload::Region {
            region_id: region.id.clone(),
            symptoms: region.symptoms.clone(),
            possible_conditions: region.possible_conditions.clone(),
            recommended_medicines: region.recommended_medicines.clone(),
            precautions: region.precautions.clone(),
        },
    }
}

/// Shape a set of fired interaction rules into an advisory.
///
/// Returns `None` when no rule fired.
pub fn interaction_advisory(matches: Vec<InteractionMatch>) -> Option<Advisory> {
    let max = matches.iter().map(|m| m.severity).max()?;

    let label = if matches.len() == 1 {
        "1 known drug interaction".to_string()
    } else {
        format!("{} known drug interactions", matches.len())
    };

    let detail = match max {
        InteractionSeverity::Severe => {
            "At least one combination is severe: stop taking it and contact \
             a clinician or pharmacist before the next dose."
        }
        InteractionSeverity::Moderate => {
            "Review the flagged combinations with a pharmacist before \
             continuing them together."
        }
        InteractionSeverity::Mild => {
            "Minor interactions noted; no urgent action is needed, but \
             mention them at your next appointment."
        }
    }
    .to_string();

    Some(Advisory {
        source: AdvisorySource::Interaction,
        label,
        severity: bridge_interaction_severity(max),
        detail,
        escalate: max >= InteractionSeverity::Moderate,
        payload: AdvisoryPayload::Interaction { matches },
    })
}
