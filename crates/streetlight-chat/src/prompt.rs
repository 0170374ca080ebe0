//! The fixed domain prompt for the citizen report bot.
//!
//! Area-specific heuristics are kept out of the persona text as named
//! [`AdvisoryRule`] values so they can be swapped or extended without
//! touching the prompt body.

/// A named policy rule appended to the system prompt as an assumption the
/// assistant must apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvisoryRule {
    pub name: &'static str,
    pub guidance: &'static str,
}

/// Ring roads are treated as high-pollution, high-noise corridors.
pub const RING_ROAD_RULE: AdvisoryRule = AdvisoryRule {
    name: "ring-road-exposure",
    guidance: "Assume that a road named ring road has high pollution and high noise, \
               and is therefore not recommended for buying a house there.",
};

const PERSONA: &str = "\
You are an expert in analyzing data from smart streetlamp IoT systems. These streetlamps \
collect data on air pollution (PM2.5, PM10, CO2, NO2, VOCs) and noise pollution (dB levels, \
time patterns, peak sources).

Your role is to:
- Interpret noise and air quality data clearly and accurately.
- Highlight health, safety, and lifestyle impacts for residents based on collected IoT data.
- Provide insights into trends such as high traffic noise, industrial emissions, or evening \
nightlife disruptions.
- Recommend whether the user should consider buying or renting a house in that area, based on \
environmental quality indicators.
- Keep answers practical, evidence-based, and easy to understand, as if advising a potential \
homebuyer.";

const REDIRECT: &str = "If the user asks non-related questions, politely redirect to IoT \
streetlamp environmental analysis topics.";

/// Compose the system prompt from the persona and the active rules.
/// Deterministic: the output depends only on the rule list.
pub fn system_prompt(rules: &[AdvisoryRule]) -> String {
    let mut prompt = String::from(PERSONA);
    for rule in rules {
        prompt.push_str("\n- ");
        prompt.push_str(rule.guidance);
    }
    prompt.push_str("\n\n");
    prompt.push_str(REDIRECT);
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_includes_persona_and_redirect() {
        let prompt = system_prompt(&[]);
        assert!(prompt.contains("smart streetlamp IoT systems"));
        assert!(prompt.contains("politely redirect"));
    }

    #[test]
    fn ring_road_rule_is_spelled_out() {
        let prompt = system_prompt(&[RING_ROAD_RULE]);
        assert!(prompt.contains("ring road"));
        assert!(prompt.contains("not recommended for buying a house"));
    }

    #[test]
    fn prompt_is_deterministic() {
        let rules = [RING_ROAD_RULE];
        assert_eq!(system_prompt(&rules), system_prompt(&rules));
    }

    #[test]
    fn rules_are_swappable() {
        const QUIET_ZONE: AdvisoryRule = AdvisoryRule {
            name: "hospital-quiet-zone",
            guidance: "Treat roads adjacent to hospitals as enforced quiet zones.",
        };
        let prompt = system_prompt(&[QUIET_ZONE]);
        assert!(prompt.contains("enforced quiet zones"));
        assert!(!prompt.contains("ring road"));
    }
}
