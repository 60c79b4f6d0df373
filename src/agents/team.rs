//! Team Factory - the canned animal-health research roster
//!
//! Information Hiding:
//! - Roster composition and expertise assignments hidden behind one factory
//! - Thin convenience layer over `AgentBuilder`

use crate::agents::builder::AgentBuilder;
use crate::agents::coordinator::ResearchCoordinator;
use crate::agents::simulated;
use crate::config::Settings;
use once_cell::sync::Lazy;

struct TeamMember {
    name: &'static str,
    specialization: &'static str,
    expertise: &'static [&'static str],
}

static ANIMAL_HEALTH_TEAM: Lazy<Vec<TeamMember>> = Lazy::new(|| {
    vec![
        TeamMember {
            name: "Dr. Sarah Chen",
            specialization: simulated::VETERINARY_MEDICINE,
            expertise: &["diagnostics", "surgery", "preventive care"],
        },
        TeamMember {
            name: "Dr. James Wilson",
            specialization: simulated::ANIMAL_NUTRITION,
            expertise: &["dietary optimization", "supplements", "metabolic health"],
        },
        TeamMember {
            name: "Dr. Maria Rodriguez",
            specialization: simulated::ANIMAL_BEHAVIOR,
            expertise: &["stress reduction", "enrichment", "welfare assessment"],
        },
        TeamMember {
            name: "Dr. Li Zhang",
            specialization: simulated::GENETICS,
            expertise: &["gene therapy", "breeding", "hereditary diseases"],
        },
        TeamMember {
            name: "Dr. Ahmed Hassan",
            specialization: simulated::EPIDEMIOLOGY,
            expertise: &["disease tracking", "risk assessment", "population health"],
        },
    ]
});

/// Topics a default research session works through.
pub fn default_research_topics() -> Vec<String> {
    [
        "Innovative approaches to treating chronic pain in senior dogs",
        "Breakthrough nutrition strategies for extending feline lifespan",
        "Novel methods for early detection of cancer in pets",
        "Advanced therapies for managing diabetes in cats",
        "Emerging treatments for arthritis in aging horses",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// Assemble a coordinator pre-populated with the five-specialist animal
/// health team. Context windows and summary limits come from `settings`.
pub fn create_animal_health_team(settings: &Settings) -> ResearchCoordinator {
    let mut coordinator = ResearchCoordinator::new()
        .with_summary_content_limit(settings.discussion.max_summary_content_length);

    for member in ANIMAL_HEALTH_TEAM.iter() {
        coordinator.add_agent(
            AgentBuilder::new(member.name)
                .specialization(member.specialization)
                .expertise(member.expertise.iter().copied())
                .context_window(settings.discussion.max_context_messages)
                .build(),
        );
    }

    coordinator
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_has_five_specialists_in_roster_order() {
        let coordinator = create_animal_health_team(&Settings::default());
        let agents = coordinator.agents();

        assert_eq!(agents.len(), 5);
        assert_eq!(agents[0].name(), "Dr. Sarah Chen");
        assert_eq!(agents[0].specialization(), "Veterinary Medicine");
        assert_eq!(agents[4].name(), "Dr. Ahmed Hassan");
        assert_eq!(agents[4].specialization(), "Epidemiology");
    }

    #[test]
    fn test_default_topics() {
        let topics = default_research_topics();
        assert_eq!(topics.len(), 5);
        assert!(topics[0].contains("senior dogs"));
    }
}
