//! Structured verdicts and the validation report.

use std::fmt;

use serde::Serialize;

use cdsf_core::EntityId;

/// Identifies one consistency rule of the battery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Rule {
    DecisionRelationTypes,
    OutcomeRelationTypes,
    DecisionRelationCombination,
    OutcomeAmountPerDecisionRelation,
    OutcomeTypePerDecisionRelation,
    DecisionSupportForOutcomeRelation,
    AffectingBindingSymmetryDecisions,
    AffectingBindingSymmetryOutcomes,
    InclusionAllowanceReciprocity,
    XorOutcomes,
    SingleOutcomeRelation,
}

impl Rule {
    /// Stable rule name used in reports.
    pub fn name(&self) -> &'static str {
        match self {
            Rule::DecisionRelationTypes => "decision-relation-types",
            Rule::OutcomeRelationTypes => "outcome-relation-types",
            Rule::DecisionRelationCombination => "decision-relation-combination",
            Rule::OutcomeAmountPerDecisionRelation => "outcome-amount-per-decision-relation",
            Rule::OutcomeTypePerDecisionRelation => "outcome-type-per-decision-relation",
            Rule::DecisionSupportForOutcomeRelation => "decision-support-for-outcome-relation",
            Rule::AffectingBindingSymmetryDecisions => "affecting-binding-symmetry-decisions",
            Rule::AffectingBindingSymmetryOutcomes => "affecting-binding-symmetry-outcomes",
            Rule::InclusionAllowanceReciprocity => "inclusion-allowance-reciprocity",
            Rule::XorOutcomes => "xor-outcomes",
            Rule::SingleOutcomeRelation => "single-outcome-relation",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One offending relation (or relation pair) found by a rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub source: EntityId,
    pub target: EntityId,
    /// What was found, when the rule can name it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observed: Option<String>,
    /// What the rule required instead, when the rule can name it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
}

impl Violation {
    /// A violation anchored at a (source, target) pair.
    pub fn new(source: EntityId, target: EntityId) -> Self {
        Self {
            source,
            target,
            observed: None,
            expected: None,
        }
    }

    /// Builder: record what was observed.
    pub fn observed(mut self, observed: impl Into<String>) -> Self {
        self.observed = Some(observed.into());
        self
    }

    /// Builder: record what was expected.
    pub fn expected(mut self, expected: impl Into<String>) -> Self {
        self.expected = Some(expected.into());
        self
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)?;
        if let Some(ref observed) = self.observed {
            write!(f, " (observed: {observed})")?;
        }
        if let Some(ref expected) = self.expected {
            write!(f, " (expected: {expected})")?;
        }
        Ok(())
    }
}

/// Outcome of running a single rule.
#[derive(Debug, Clone, Serialize)]
pub struct RuleVerdict {
    pub rule: Rule,
    pub passed: bool,
    pub violations: Vec<Violation>,
    /// One-line human summary of the verdict.
    pub summary: String,
}

impl RuleVerdict {
    /// Build a verdict; it passes iff there are no violations.
    pub fn new(rule: Rule, violations: Vec<Violation>, summary: impl Into<String>) -> Self {
        Self {
            rule,
            passed: violations.is_empty(),
            violations,
            summary: summary.into(),
        }
    }
}

/// The aggregated result of running the whole rule battery.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub verdicts: Vec<RuleVerdict>,
}

impl ValidationReport {
    pub fn new(verdicts: Vec<RuleVerdict>) -> Self {
        Self { verdicts }
    }

    /// True iff every rule passed.
    pub fn passed(&self) -> bool {
        self.verdicts.iter().all(|v| v.passed)
    }

    /// Verdicts of rules that failed.
    pub fn failures(&self) -> impl Iterator<Item = &RuleVerdict> {
        self.verdicts.iter().filter(|v| !v.passed)
    }

    /// Total number of violations across all rules.
    pub fn violation_count(&self) -> usize {
        self.verdicts.iter().map(|v| v.violations.len()).sum()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Consistency Report ===")?;
        for verdict in &self.verdicts {
            let status = if verdict.passed { "PASS" } else { "FAIL" };
            writeln!(f, "[{status}] {}: {}", verdict.rule, verdict.summary)?;
            for violation in &verdict.violations {
                writeln!(f, "  {violation}")?;
            }
        }
        let failed = self.failures().count();
        if failed == 0 {
            writeln!(f, "All {} rules passed.", self.verdicts.len())
        } else {
            writeln!(
                f,
                "{failed} of {} rules failed ({} violations).",
                self.verdicts.len(),
                self.violation_count(),
            )
        }
    }
}
