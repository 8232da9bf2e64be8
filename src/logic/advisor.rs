use crate::models::{SoilAssessmentReport, SoilMeasurement};
use regex_lite::Regex;

/// What a free-text question is asking about. Classified by the first
/// matching pattern in a priority-ordered table: symptom phrasings first,
/// then bare nutrient names, then broader topics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Greeting,
    Ph,
    Nitrogen,
    Phosphorus,
    Potassium,
    Fertilizer,
    Crop,
    Season,
    Moisture,
    Help,
    General,
}

/// Stateless rule-based advisor over an assessment. Conversation history
/// and session handling live in the calling layer; this only classifies a
/// single message and renders a reply from whatever context it is given.
pub struct SoilAdvisor {
    patterns: Vec<(Regex, Intent)>,
}

/// Measurement plus derived report, when the caller has them.
pub type AdvisorContext<'a> = (&'a SoilMeasurement, &'a SoilAssessmentReport);

impl SoilAdvisor {
    pub fn new() -> Self {
        // Patterns are matched against the lowercased message, in order.
        let table: &[(&str, Intent)] = &[
            (r"yellow(ing)?\s+leaves", Intent::Nitrogen),
            (r"purple\s+leaves", Intent::Phosphorus),
            (r"brown\s+(edges|tips)", Intent::Potassium),
            (r"(what|which)\s+(crop|should\s+i\s+(grow|plant))", Intent::Crop),
            (r"\bnitrogen\b", Intent::Nitrogen),
            (r"\b(phosphorus|phosphate)\b", Intent::Phosphorus),
            (r"\b(potassium|potash)\b", Intent::Potassium),
            (r"\b(ph|acidity|acidic|alkaline)\b", Intent::Ph),
            (r"\b(fertilizer|fertiliser|nutrient|feed)\b", Intent::Fertilizer),
            (r"\b(crop|grow|plant)\b", Intent::Crop),
            (r"\b(season|seasonal|timing|when)\b", Intent::Season),
            (
                r"\b(moisture|water|irrigation|rain|drought)\b",
                Intent::Moisture,
            ),
            (r"\b(help|assist)\b", Intent::Help),
            (
                r"\b(hello|hi|hey|greetings|good\s+(morning|afternoon))\b",
                Intent::Greeting,
            ),
        ];

        let patterns = table
            .iter()
            .map(|(pattern, intent)| {
                // Table patterns are fixed and tested; a bad one is a bug.
                (Regex::new(pattern).expect("invalid intent pattern"), *intent)
            })
            .collect();

        Self { patterns }
    }

    pub fn classify(&self, message: &str) -> Intent {
        let lowered = message.to_lowercase();
        for (regex, intent) in &self.patterns {
            if regex.is_match(&lowered) {
                return *intent;
            }
        }
        Intent::General
    }

    pub fn reply(&self, message: &str, context: Option<AdvisorContext<'_>>) -> String {
        let intent = self.classify(message);
        tracing::debug!(?intent, "advisor classified message");

        match intent {
            Intent::Greeting => self.greeting(context),
            Intent::Ph => self.ph_reply(context),
            Intent::Nitrogen => self.nutrient_reply(
                context,
                "Nitrogen drives leaf and stem growth; deficiency shows as yellowing older leaves.",
                |m| m.nitrogen,
                100.0,
                "mg/kg",
            ),
            Intent::Phosphorus => self.nutrient_reply(
                context,
                "Phosphorus supports root development and flowering; deficiency can show as purple-tinged leaves.",
                |m| m.phosphorus,
                15.0,
                "mg/kg",
            ),
            Intent::Potassium => self.nutrient_reply(
                context,
                "Potassium regulates water uptake and disease resistance; deficiency shows as browning leaf edges.",
                |m| m.potassium,
                120.0,
                "mg/kg",
            ),
            Intent::Fertilizer => self.fertilizer_reply(context),
            Intent::Crop => self.crop_reply(context),
            Intent::Season => self.season_reply(context),
            Intent::Moisture => self.moisture_reply(context),
            Intent::Help => "I can explain your fertility score, interpret pH and N/P/K readings, \
                             walk through the recommended fertilizers, and suggest crops for your \
                             soil. Ask about any of those."
                .to_string(),
            Intent::General => "I'm not sure what you're asking. Try a question about pH, \
                                nitrogen, phosphorus, potassium, fertilizers, or which crops \
                                suit your soil."
                .to_string(),
        }
    }

    fn greeting(&self, context: Option<AdvisorContext<'_>>) -> String {
        match context {
            Some((_, report)) => format!(
                "Hello! I'm your soil advisor. Your latest assessment scored {:.0} ({} fertility) - ask me what to do about it.",
                report.fertility.score, report.fertility.level
            ),
            None => "Hello! I'm your soil advisor. Share a soil measurement and I can talk you \
                     through fertility, fertilizers, and crop choices."
                .to_string(),
        }
    }

    fn ph_reply(&self, context: Option<AdvisorContext<'_>>) -> String {
        let general = "Most crops do best between pH 6.0 and 7.5.";
        match context {
            Some((m, _)) if m.ph < 5.5 => format!(
                "{general} Your soil is acidic at pH {:.1}; agricultural lime will raise it.",
                m.ph
            ),
            Some((m, _)) if m.ph > 8.0 => format!(
                "{general} Your soil is alkaline at pH {:.1}; elemental sulfur will bring it down.",
                m.ph
            ),
            Some((m, _)) => format!("{general} Your pH of {:.1} is in a workable range.", m.ph),
            None => general.to_string(),
        }
    }

    fn nutrient_reply(
        &self,
        context: Option<AdvisorContext<'_>>,
        general: &str,
        read: fn(&SoilMeasurement) -> f64,
        adequate_above: f64,
        unit: &str,
    ) -> String {
        match context {
            Some((m, _)) => {
                let value = read(m);
                if value < adequate_above {
                    format!(
                        "{general} Your reading of {value:.0} {unit} is on the low side - check the fertilizer actions in your report."
                    )
                } else {
                    format!("{general} Your reading of {value:.0} {unit} looks adequate.")
                }
            }
            None => general.to_string(),
        }
    }

    fn fertilizer_reply(&self, context: Option<AdvisorContext<'_>>) -> String {
        match context {
            Some((_, report)) => {
                let names: Vec<&str> = report
                    .fertilizer_actions
                    .iter()
                    .map(|a| a.name.as_str())
                    .collect();
                format!(
                    "Based on your measurement I recommend: {}. Rates and timing are in the full report.",
                    names.join(", ")
                )
            }
            None => "Share a soil measurement and I can recommend specific fertilizers with \
                     rates and timing."
                .to_string(),
        }
    }

    fn crop_reply(&self, context: Option<AdvisorContext<'_>>) -> String {
        match context {
            Some((_, report)) => {
                let top: Vec<&str> = report
                    .crop_suggestions
                    .highly_suitable
                    .iter()
                    .map(|c| c.name.as_str())
                    .collect();
                if top.is_empty() {
                    "No crop in the catalog is highly suitable for this soil yet - address the \
                     fertilizer recommendations first, then reassess."
                        .to_string()
                } else {
                    format!("Your soil is a strong match for: {}.", top.join(", "))
                }
            }
            None => "Share a soil measurement and I can rank crops by how well they match your \
                     soil."
                .to_string(),
        }
    }

    fn season_reply(&self, context: Option<AdvisorContext<'_>>) -> String {
        match context {
            Some((_, report)) => report.application_timing.join(" "),
            None => "Application timing depends on the measurement; in general apply phosphorus \
                     at soil preparation, split nitrogen doses, and give potassium at flowering."
                .to_string(),
        }
    }

    fn moisture_reply(&self, context: Option<AdvisorContext<'_>>) -> String {
        match context {
            Some((m, _)) if m.moisture < 20.0 => format!(
                "Your soil moisture of {:.0}% is low; irrigate before fertilizing so nutrients dissolve and reach roots.",
                m.moisture
            ),
            Some((m, _)) if m.moisture > 35.0 => format!(
                "Your soil moisture of {:.0}% is high; check drainage before adding amendments, fertilizer may leach.",
                m.moisture
            ),
            Some((m, _)) => format!("Your soil moisture of {:.0}% is in a healthy range.", m.moisture),
            None => "Most field crops want 20-35% soil moisture; outside that range adjust \
                     irrigation or drainage first."
                .to_string(),
        }
    }
}

impl Default for SoilAdvisor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::RecommendationEngine;
    use crate::models::Season;

    fn measurement() -> SoilMeasurement {
        SoilMeasurement {
            ph: 4.8,
            nitrogen: 60.0,
            phosphorus: 10.0,
            potassium: 90.0,
            organic_carbon: 0.8,
            moisture: 18.0,
            season: Season::Spring,
            crop_type_hint: None,
        }
    }

    #[test]
    fn symptom_phrasings_beat_bare_keywords() {
        let advisor = SoilAdvisor::new();
        // "leaves" questions resolve to the nutrient behind the symptom
        assert_eq!(
            advisor.classify("why are my plants showing yellowing leaves?"),
            Intent::Nitrogen
        );
        assert_eq!(
            advisor.classify("purple leaves on my tomatoes"),
            Intent::Phosphorus
        );
        assert_eq!(
            advisor.classify("brown edges everywhere"),
            Intent::Potassium
        );
    }

    #[test]
    fn classification_covers_core_topics() {
        let advisor = SoilAdvisor::new();
        assert_eq!(advisor.classify("hello there"), Intent::Greeting);
        assert_eq!(advisor.classify("is my soil too acidic?"), Intent::Ph);
        assert_eq!(
            advisor.classify("which fertilizer should I use?"),
            Intent::Fertilizer
        );
        assert_eq!(advisor.classify("what crop should I grow?"), Intent::Crop);
        assert_eq!(advisor.classify("do I need irrigation?"), Intent::Moisture);
        assert_eq!(advisor.classify("qwerty"), Intent::General);
    }

    #[test]
    fn replies_quote_the_assessment_when_available() {
        let advisor = SoilAdvisor::new();
        let m = measurement();
        let engine = RecommendationEngine::with_defaults().unwrap();
        let report = engine.assess(&m);

        let reply = advisor.reply("tell me about my nitrogen", Some((&m, &report)));
        assert!(reply.contains("60"));
        assert!(reply.contains("low"));

        let reply = advisor.reply("which fertilizer do I need?", Some((&m, &report)));
        assert!(reply.contains("Urea"));

        let reply = advisor.reply("hello", Some((&m, &report)));
        assert!(reply.contains("Low fertility"));
    }

    #[test]
    fn replies_degrade_gracefully_without_context() {
        let advisor = SoilAdvisor::new();
        let reply = advisor.reply("what about phosphorus?", None);
        assert!(reply.contains("Phosphorus"));
        assert!(!reply.contains("mg/kg is"));
    }
}
