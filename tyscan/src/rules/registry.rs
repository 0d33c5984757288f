use crate::config::Config;

use super::no_this_alias::NoThisAlias;
use super::require_await::RequireAwait;
use super::Rule;

/// Canonical high-level category for a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleCategory {
    /// Implicit-receiver hygiene rule.
    Receiver,
    /// Async/suspension correctness rule.
    Async,
}

impl RuleCategory {
    /// Returns the canonical display form for this category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            RuleCategory::Receiver => "Receiver",
            RuleCategory::Async => "Async",
        }
    }
}

/// Default severity for a rule when no override applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleSeverity {
    /// High severity.
    High,
    /// Medium severity.
    Medium,
    /// Low severity.
    Low,
}

impl RuleSeverity {
    /// Returns the canonical display form for this severity.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            RuleSeverity::High => "HIGH",
            RuleSeverity::Medium => "MEDIUM",
            RuleSeverity::Low => "LOW",
        }
    }
}

/// Strongly typed rule metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RuleDescriptor {
    /// Stable rule identifier (for example `TYS-R001`).
    pub id: &'static str,
    /// Rule category.
    pub category: RuleCategory,
    /// Default severity for the rule.
    pub default_severity: RuleSeverity,
    /// One-line end-user description.
    pub description: &'static str,
}

const fn rule(
    id: &'static str,
    category: RuleCategory,
    default_severity: RuleSeverity,
    description: &'static str,
) -> RuleDescriptor {
    RuleDescriptor {
        id,
        category,
        default_severity,
        description,
    }
}

/// Descriptor for the receiver-aliasing rule.
pub const NO_THIS_ALIAS: RuleDescriptor = rule(
    "TYS-R001",
    RuleCategory::Receiver,
    RuleSeverity::Medium,
    "Disallow aliasing the implicit receiver into a local binding",
);

/// Descriptor for the missing-await rule.
pub const REQUIRE_AWAIT: RuleDescriptor = rule(
    "TYS-A001",
    RuleCategory::Async,
    RuleSeverity::Medium,
    "Disallow async functions which have no await expression",
);

const ALL_RULES: &[RuleDescriptor] = &[NO_THIS_ALIAS, REQUIRE_AWAIT];

/// Returns all known rule descriptors.
#[must_use]
pub fn all_rule_descriptors() -> &'static [RuleDescriptor] {
    ALL_RULES
}

/// Looks up a rule descriptor by rule ID.
#[must_use]
pub fn get_rule_descriptor(rule_id: &str) -> Option<RuleDescriptor> {
    ALL_RULES.iter().find(|rule| rule.id == rule_id).copied()
}

/// Instantiates the built-in rules enabled by `config`.
#[must_use]
pub fn built_in_rules(config: &Config) -> Vec<Box<dyn Rule>> {
    let mut rules: Vec<Box<dyn Rule>> = Vec::with_capacity(ALL_RULES.len());
    if config.tyscan.no_this_alias.unwrap_or(true) {
        rules.push(Box::new(NoThisAlias::new(&config.tyscan.alias)));
    }
    if config.tyscan.require_await.unwrap_or(true) {
        rules.push(Box::new(RequireAwait::new()));
    }
    rules
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_contains_known_rules_with_metadata() {
        let descriptor =
            get_rule_descriptor("TYS-A001").expect("expected missing-await rule to be present");
        assert_eq!(descriptor.category, RuleCategory::Async);
        assert_eq!(descriptor.default_severity.as_str(), "MEDIUM");
        assert!(get_rule_descriptor("TYS-X999").is_none());
        assert_eq!(all_rule_descriptors().len(), 2);
    }

    #[test]
    fn test_config_switches_gate_rule_instantiation() {
        let config = Config::default();
        assert_eq!(built_in_rules(&config).len(), 2);

        let mut config = Config::default();
        config.tyscan.require_await = Some(false);
        let rules = built_in_rules(&config);
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].name(), "NoThisAlias");
    }
}
