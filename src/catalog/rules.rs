//! Named parameters of the fitness function that depend on the data set:
//! which activities form the two section groups, which facilitator is exempt
//! from the minimum-load penalty, and which building names count as the
//! "Roman/Beach" side of campus.

/// Data-set specific parameters consumed by the fitness evaluator.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FitnessRules {
    /// Two sections of the first base course.
    pub first_section_group: Vec<String>,
    /// Two sections of the second base course.
    pub second_section_group: Vec<String>,
    /// Facilitator who is not penalised for carrying fewer than three activities.
    pub load_exempt_facilitator: Option<String>,
    /// Substrings of room names that mark the far buildings.
    pub building_keywords: Vec<String>,
}

impl FitnessRules {
    pub fn new<A, B>(first_section_group: A, second_section_group: B) -> Self
    where
        A: IntoIterator,
        A::Item: Into<String>,
        B: IntoIterator,
        B::Item: Into<String>,
    {
        Self {
            first_section_group: first_section_group.into_iter().map(Into::into).collect(),
            second_section_group: second_section_group.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_load_exempt_facilitator<S: Into<String>>(mut self, name: S) -> Self {
        self.load_exempt_facilitator = Some(name.into());
        self
    }

    pub fn without_load_exemption(mut self) -> Self {
        self.load_exempt_facilitator = None;
        self
    }

    pub fn with_building_keywords<I>(mut self, keywords: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.building_keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Whether a room name contains any of the building keywords.
    pub fn is_far_building(&self, room_name: &str) -> bool {
        self.building_keywords
            .iter()
            .any(|keyword| room_name.contains(keyword.as_str()))
    }
}

impl Default for FitnessRules {
    fn default() -> Self {
        Self {
            first_section_group: vec!["SLA100A".to_string(), "SLA100B".to_string()],
            second_section_group: vec!["SLA191A".to_string(), "SLA191B".to_string()],
            load_exempt_facilitator: Some("Tyler".to_string()),
            building_keywords: vec!["Roman".to_string(), "Beach".to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_far_building_detection() {
        let rules = FitnessRules::default();

        assert!(rules.is_far_building("Roman 216"));
        assert!(rules.is_far_building("Beach 301"));
        assert!(!rules.is_far_building("Logos 325"));
        assert!(!rules.is_far_building("roman 216"));
    }

    #[test]
    fn test_builder_methods() {
        let rules = FitnessRules::new(["A1", "A2"], ["B1", "B2"])
            .without_load_exemption()
            .with_building_keywords(["North"]);

        assert_eq!(rules.first_section_group, vec!["A1", "A2"]);
        assert_eq!(rules.load_exempt_facilitator, None);
        assert!(rules.is_far_building("North 1"));
        assert!(!rules.is_far_building("Roman 216"));
    }
}
