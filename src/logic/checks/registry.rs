//! Check Registry
//!
//! Ordered catalog of verification checks. Order is significant: it is the
//! execution order for automated checks and the default display order.
//! The catalog is fixed for the lifetime of one pipeline run.

use std::collections::HashSet;

use super::types::{CheckCategory, CheckDefinition, CheckState};

// ============================================================================
// ERRORS
// ============================================================================

/// Registry construction errors
#[derive(Debug, Clone)]
pub enum RegistryError {
    DuplicateId(String),
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "Duplicate check id: {}", id),
        }
    }
}

impl std::error::Error for RegistryError {}

// ============================================================================
// REGISTRY
// ============================================================================

/// Ordered, duplicate-free catalog of check definitions
#[derive(Debug, Clone)]
pub struct CheckRegistry {
    checks: Vec<CheckDefinition>,
}

impl CheckRegistry {
    /// Build a registry, rejecting duplicate check ids
    pub fn new(checks: Vec<CheckDefinition>) -> Result<Self, RegistryError> {
        let mut seen = HashSet::new();
        for check in &checks {
            if !seen.insert(check.id.clone()) {
                return Err(RegistryError::DuplicateId(check.id.clone()));
            }
        }
        Ok(Self { checks })
    }

    /// All definitions, in execution order
    pub fn checks(&self) -> &[CheckDefinition] {
        &self.checks
    }

    /// Look up a definition by id
    pub fn get(&self, id: &str) -> Option<&CheckDefinition> {
        self.checks.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Number of checks the runner will actually execute
    pub fn automated_count(&self) -> usize {
        self.checks.iter().filter(|c| c.automated).count()
    }

    /// Fresh state set for one run: every check pending, registry order
    pub fn initial_states(&self) -> Vec<CheckState> {
        self.checks.iter().map(|c| CheckState::pending(&c.id)).collect()
    }
}

// ============================================================================
// DEFAULT CATALOG
// ============================================================================

/// The product's due-diligence catalog: 6 automated checks plus 2 manual
/// checks handled by the field team.
pub fn default_registry() -> CheckRegistry {
    CheckRegistry::new(vec![
        CheckDefinition {
            id: "business-registration".to_string(),
            category: CheckCategory::Legal,
            title: "Business Registration".to_string(),
            description: "Verify company registration with the provincial business registry"
                .to_string(),
            automated: true,
        },
        CheckDefinition {
            id: "tax-compliance".to_string(),
            category: CheckCategory::Compliance,
            title: "Tax Compliance Status".to_string(),
            description: "Confirm tax filings are current with the revenue authority".to_string(),
            automated: true,
        },
        CheckDefinition {
            id: "financial-statements".to_string(),
            category: CheckCategory::Financial,
            title: "Financial Statements Review".to_string(),
            description: "Assess submitted financial statements for completeness and consistency"
                .to_string(),
            automated: true,
        },
        CheckDefinition {
            id: "litigation-history".to_string(),
            category: CheckCategory::Legal,
            title: "Litigation History".to_string(),
            description: "Search court records for active or past litigation".to_string(),
            automated: true,
        },
        CheckDefinition {
            id: "sanctions-screening".to_string(),
            category: CheckCategory::Compliance,
            title: "Sanctions Screening".to_string(),
            description: "Screen principals against international sanctions lists".to_string(),
            automated: true,
        },
        CheckDefinition {
            id: "adverse-media".to_string(),
            category: CheckCategory::Reputational,
            title: "Adverse Media Scan".to_string(),
            description: "Scan regional media for negative coverage of the partner".to_string(),
            automated: true,
        },
        CheckDefinition {
            id: "site-visit".to_string(),
            category: CheckCategory::Operational,
            title: "Site Visit".to_string(),
            description: "On-site inspection of declared business premises".to_string(),
            automated: false,
        },
        CheckDefinition {
            id: "reference-interviews".to_string(),
            category: CheckCategory::Reputational,
            title: "Reference Interviews".to_string(),
            description: "Interviews with declared trade references".to_string(),
            automated: false,
        },
    ])
    .expect("default catalog ids are unique")
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::checks::types::CheckStatus;

    fn check(id: &str, automated: bool) -> CheckDefinition {
        CheckDefinition {
            id: id.to_string(),
            category: CheckCategory::Legal,
            title: id.to_string(),
            description: String::new(),
            automated,
        }
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = CheckRegistry::new(vec![check("a", true), check("b", true), check("a", false)]);
        match result {
            Err(RegistryError::DuplicateId(id)) => assert_eq!(id, "a"),
            Ok(_) => panic!("duplicate id must be rejected"),
        }
    }

    #[test]
    fn test_order_is_preserved() {
        let registry =
            CheckRegistry::new(vec![check("c", true), check("a", false), check("b", true)])
                .unwrap();
        let ids: Vec<_> = registry.checks().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["c", "a", "b"]);
        assert_eq!(registry.automated_count(), 2);
    }

    #[test]
    fn test_initial_states_all_pending_in_order() {
        let registry = default_registry();
        let states = registry.initial_states();
        assert_eq!(states.len(), registry.len());
        for (state, def) in states.iter().zip(registry.checks()) {
            assert_eq!(state.id, def.id);
            assert_eq!(state.status, CheckStatus::Pending);
        }
    }

    #[test]
    fn test_default_catalog_shape() {
        let registry = default_registry();
        assert_eq!(registry.len(), 8);
        assert_eq!(registry.automated_count(), 6);
        assert!(registry.get("sanctions-screening").is_some());
        assert!(registry.get("unknown-check").is_none());
        // Manual checks are part of the catalog but never executed
        assert!(!registry.get("site-visit").unwrap().automated);
    }
}
