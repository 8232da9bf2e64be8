use super::{
    acidity::{AcidicSoilRule, AlkalineSoilRule},
    nitrogen::NitrogenRule,
    organic_matter::OrganicMatterRule,
    phosphorus::PhosphorusRule,
    potassium::PotassiumRule,
    SoilRule,
};
use crate::models::{FertilizerAction, Priority, SoilMeasurement};

/// Ordered fertilizer rule set.
///
/// Rules fire independently and the output keeps the evaluation order:
/// nitrogen, phosphorus, potassium, pH-low, pH-high, organic carbon.
/// Consumers that want priority ordering sort on their side.
pub struct FertilizerRuleSet {
    rules: Vec<Box<dyn SoilRule>>,
}

impl FertilizerRuleSet {
    pub fn new() -> Self {
        let rules: Vec<Box<dyn SoilRule>> = vec![
            Box::new(NitrogenRule),
            Box::new(PhosphorusRule),
            Box::new(PotassiumRule),
            Box::new(AcidicSoilRule),
            Box::new(AlkalineSoilRule),
            Box::new(OrganicMatterRule),
        ];

        Self { rules }
    }

    /// Evaluate every rule against the measurement. When nothing fires,
    /// emits exactly one low-priority maintenance action so the advisory
    /// output is never empty.
    pub fn recommend(&self, measurement: &SoilMeasurement) -> Vec<FertilizerAction> {
        let actions: Vec<FertilizerAction> = self
            .rules
            .iter()
            .filter_map(|rule| {
                let action = rule.evaluate(measurement);
                if action.is_some() {
                    tracing::debug!(rule = rule.id(), "fertilizer rule fired");
                }
                action
            })
            .collect();

        if actions.is_empty() {
            return vec![Self::maintenance_action()];
        }

        actions
    }

    pub fn list_rules(&self) -> Vec<(&'static str, &'static str)> {
        self.rules.iter().map(|r| (r.id(), r.name())).collect()
    }

    fn maintenance_action() -> FertilizerAction {
        FertilizerAction::new(
            "NPK Complex (15-15-15)",
            "Maintenance fertilization",
            "150-200 kg/hectare",
            Priority::Low,
        )
        .with_timing("Apply as base fertilizer")
    }
}

impl Default for FertilizerRuleSet {
    fn default() -> Self {
        Self::new()
    }
}
