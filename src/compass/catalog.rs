//! Static Career Catalog
//!
//! Hard-coded recommendations, trend listings and the workplace scenario.
//! These stand in for a recommendation engine and a trend scanner.

use super::types::{
    CareerRecommendation, CareerTrendItem, MicroOpportunity, SimulationScenario, TrendStatus,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn recommendation(
    career: &str,
    required_skills: &[&str],
    salary: &str,
    growth_potential: &str,
    future_trends: &[&str],
) -> CareerRecommendation {
    CareerRecommendation {
        career: career.to_string(),
        required_skills: strings(required_skills),
        salary: salary.to_string(),
        growth_potential: growth_potential.to_string(),
        future_trends: strings(future_trends),
    }
}

fn trend(name: &str, summary: &str, status: TrendStatus, score: f64) -> CareerTrendItem {
    CareerTrendItem {
        trend_name: name.to_string(),
        summary: summary.to_string(),
        status,
        trend_score: score,
    }
}

/// Recommendations returned regardless of profile
pub fn career_recommendations() -> Vec<CareerRecommendation> {
    vec![
        recommendation(
            "AI Engineer",
            &["Python", "Machine Learning", "Deep Learning", "Cloud Platforms"],
            "$120,000 - $180,000",
            "High",
            &["Generative AI", "Ethical AI", "AI in Healthcare"],
        ),
        recommendation(
            "Data Scientist",
            &["Python/R", "Statistics", "Data Visualization", "SQL"],
            "$110,000 - $170,000",
            "High",
            &["Big Data Analytics", "Predictive Modeling", "Data Governance"],
        ),
        recommendation(
            "UX Designer",
            &["UI/UX Principles", "Wireframing", "Prototyping", "User Research"],
            "$80,000 - $130,000",
            "Medium-High",
            &["AI in UX", "Voice User Interfaces (VUI)", "Inclusive Design"],
        ),
    ]
}

pub fn career_trends() -> Vec<CareerTrendItem> {
    vec![
        trend(
            "AI Ethics Specialist",
            "Growing demand for ethical considerations in AI development.",
            TrendStatus::Rising,
            0.95,
        ),
        trend(
            "Green Energy Consultant",
            "Increasing focus on sustainable energy solutions.",
            TrendStatus::Rising,
            0.88,
        ),
        trend(
            "Blockchain Developer",
            "Continued, but more specialized, demand in decentralized technologies.",
            TrendStatus::Stable,
            0.75,
        ),
        trend(
            "Traditional Retail Manager",
            "Facing challenges due to e-commerce growth and automation.",
            TrendStatus::Falling,
            0.30,
        ),
    ]
}

pub fn simulation_scenario() -> SimulationScenario {
    SimulationScenario {
        description: "You are leading a project to develop a new AI-powered recommendation system. \
                      A critical deadline is approaching, and your team is facing unexpected technical challenges."
            .to_string(),
        micro_opportunities: vec![
            MicroOpportunity {
                opportunity: "Delegating tasks effectively to team members.".to_string(),
                action: "Delegate specific sub-tasks to optimize workflow.".to_string(),
            },
            MicroOpportunity {
                opportunity: "Communicating with stakeholders about potential delays.".to_string(),
                action: "Prepare a concise update for stakeholders outlining challenges and revised timeline."
                    .to_string(),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommendations() {
        let recs = career_recommendations();
        let careers: Vec<&str> = recs.iter().map(|r| r.career.as_str()).collect();
        assert_eq!(careers, vec!["AI Engineer", "Data Scientist", "UX Designer"]);
        assert_eq!(recs[2].growth_potential, "Medium-High");
    }

    #[test]
    fn test_trend_scores_in_range() {
        let trends = career_trends();
        assert_eq!(trends.len(), 4);
        assert!(trends.iter().all(|t| (0.0..=1.0).contains(&t.trend_score)));
        assert_eq!(trends[3].status, TrendStatus::Falling);
    }

    #[test]
    fn test_scenario_text() {
        let scenario = simulation_scenario();
        assert!(scenario.description.starts_with("You are leading a project"));
        assert!(scenario.description.contains("system. A critical deadline"));
        assert_eq!(scenario.micro_opportunities.len(), 2);
    }
}
