use super::domain::{
    GrowthPotential, IncomeRange, LiberationPotential, MarketDemand, Pathway, PathwayDifficulty,
    RealityCheck, VocationCategory, VocationOption, WorkArrangement,
};
use crate::assessment::CoreValue;
use std::sync::OnceLock;

/// Curated vocation catalog, built once per process.
pub fn vocation_catalog() -> &'static [VocationOption] {
    static CATALOG: OnceLock<Vec<VocationOption>> = OnceLock::new();
    CATALOG.get_or_init(standard_vocations)
}

pub fn find_vocation(id: &str) -> Option<&'static VocationOption> {
    vocation_catalog().iter().find(|vocation| vocation.id == id)
}

pub fn get_vocations_by_category(category: VocationCategory) -> Vec<&'static VocationOption> {
    vocation_catalog()
        .iter()
        .filter(|vocation| vocation.category == category)
        .collect()
}

pub fn get_vocations_by_arrangement(arrangement: WorkArrangement) -> Vec<&'static VocationOption> {
    vocation_catalog()
        .iter()
        .filter(|vocation| vocation.supports(arrangement))
        .collect()
}

/// Categories present in the catalog, in first-seen order.
pub fn get_all_categories() -> Vec<VocationCategory> {
    let mut categories = Vec::new();
    for vocation in vocation_catalog() {
        if !categories.contains(&vocation.category) {
            categories.push(vocation.category);
        }
    }
    categories
}

/// Arrangements offered by at least one vocation, in first-seen order.
pub fn get_all_work_arrangements() -> Vec<WorkArrangement> {
    let mut arrangements = Vec::new();
    for arrangement in vocation_catalog()
        .iter()
        .flat_map(|vocation| vocation.arrangements.iter().copied())
    {
        if !arrangements.contains(&arrangement) {
            arrangements.push(arrangement);
        }
    }
    arrangements
}

/// Vocations matching both optional filters, in catalog order.
pub fn filter_vocations(
    category: Option<VocationCategory>,
    arrangement: Option<WorkArrangement>,
) -> Vec<&'static VocationOption> {
    let mut vocations = match (category, arrangement) {
        (Some(category), _) => get_vocations_by_category(category),
        (None, Some(arrangement)) => get_vocations_by_arrangement(arrangement),
        (None, None) => vocation_catalog().iter().collect(),
    };
    if let Some(arrangement) = arrangement {
        vocations.retain(|vocation| vocation.supports(arrangement));
    }
    vocations
}

fn standard_vocations() -> Vec<VocationOption> {
    vec![
        VocationOption {
            id: "software_developer_freelance",
            title: "Freelance Software Developer",
            category: VocationCategory::Technology,
            description: "Build software solutions as an independent contractor with full autonomy over projects and schedule.",
            primary_values: vec![
                CoreValue::Autonomy,
                CoreValue::Creativity,
                CoreValue::Challenge,
                CoreValue::Mastery,
            ],
            secondary_values: vec![CoreValue::Growth, CoreValue::Variety, CoreValue::Balance],
            conflicting_values: vec![CoreValue::Security, CoreValue::Connection],
            arrangements: vec![
                WorkArrangement::Freelancer,
                WorkArrangement::Contractor,
                WorkArrangement::DigitalNomad,
                WorkArrangement::RemoteEmployee,
            ],
            skills_required: vec![
                "Programming languages",
                "Software architecture",
                "Problem-solving",
                "Client communication",
            ],
            pathways: vec![
                Pathway {
                    name: "Skill Building Path",
                    description: "Master programming fundamentals and build portfolio",
                    timeframe: "6-12 months",
                    difficulty: PathwayDifficulty::Beginner,
                    steps: vec![
                        "Learn a high-demand programming language (Python, JavaScript, Go)",
                        "Build 3-5 portfolio projects showcasing different skills",
                        "Contribute to open source projects",
                        "Create professional online presence (GitHub, portfolio site)",
                        "Start with small freelance projects to build reputation",
                    ],
                },
                Pathway {
                    name: "Corporate Escape Path",
                    description: "Transition from employed developer to freelance",
                    timeframe: "3-6 months",
                    difficulty: PathwayDifficulty::Intermediate,
                    steps: vec![
                        "Build freelance client base while employed",
                        "Save 6-month emergency fund",
                        "Establish business processes and contracts",
                        "Make transition when freelance income reaches 75% of salary",
                        "Scale to premium pricing and ideal clients",
                    ],
                },
            ],
            reality_check: RealityCheck {
                average_income: "$60-150/hour ($75k-300k annually)",
                income_range: IncomeRange::new(75, 300),
                time_to_viability: "6-18 months",
                difficulty_level: 6,
                market_demand: MarketDemand::High,
                growth_potential: GrowthPotential::Growing,
            },
            liberation_potential: LiberationPotential {
                autonomy_level: 9,
                flexibility_level: 10,
                income_stability: 6,
                growth_ceiling: 9,
                time_to_freedom: "1-2 years",
            },
        },
        VocationOption {
            id: "ux_designer_consultant",
            title: "UX Design Consultant",
            category: VocationCategory::Technology,
            description: "Create user-centered design solutions for apps and websites as an independent consultant.",
            primary_values: vec![
                CoreValue::Creativity,
                CoreValue::Impact,
                CoreValue::Challenge,
                CoreValue::Autonomy,
            ],
            secondary_values: vec![CoreValue::Growth, CoreValue::Variety, CoreValue::Recognition],
            conflicting_values: vec![CoreValue::Security, CoreValue::Variety],
            arrangements: vec![
                WorkArrangement::Consultant,
                WorkArrangement::Freelancer,
                WorkArrangement::Contractor,
                WorkArrangement::RemoteEmployee,
            ],
            skills_required: vec![
                "User research",
                "Design thinking",
                "Prototyping tools",
                "Visual design",
                "Client presentation",
            ],
            pathways: vec![
                Pathway {
                    name: "Design Foundation Path",
                    description: "Build UX skills from scratch",
                    timeframe: "9-15 months",
                    difficulty: PathwayDifficulty::Beginner,
                    steps: vec![
                        "Complete UX design certification or bootcamp",
                        "Master design tools (Figma, Adobe Creative Suite)",
                        "Create 3-4 case studies for portfolio",
                        "Network with local startups and agencies",
                        "Start with pro bono work to build experience",
                    ],
                },
            ],
            reality_check: RealityCheck {
                average_income: "$75-200/hour ($90k-250k annually)",
                income_range: IncomeRange::new(90, 250),
                time_to_viability: "12-24 months",
                difficulty_level: 7,
                market_demand: MarketDemand::High,
                growth_potential: GrowthPotential::Growing,
            },
            liberation_potential: LiberationPotential {
                autonomy_level: 8,
                flexibility_level: 9,
                income_stability: 7,
                growth_ceiling: 8,
                time_to_freedom: "1-3 years",
            },
        },
        VocationOption {
            id: "content_creator",
            title: "Content Creator & Educator",
            category: VocationCategory::CreativeArts,
            description: "Build audience and monetize expertise through courses, coaching, and content across multiple platforms.",
            primary_values: vec![
                CoreValue::Creativity,
                CoreValue::Autonomy,
                CoreValue::Impact,
                CoreValue::Authenticity,
            ],
            secondary_values: vec![CoreValue::Growth, CoreValue::Variety, CoreValue::Recognition],
            conflicting_values: vec![CoreValue::Security],
            arrangements: vec![
                WorkArrangement::Solopreneur,
                WorkArrangement::DigitalNomad,
                WorkArrangement::PortfolioCareer,
            ],
            skills_required: vec![
                "Content creation",
                "Video editing",
                "Audience building",
                "Marketing",
                "Teaching",
            ],
            pathways: vec![
                Pathway {
                    name: "Audience Building Path",
                    description: "Build audience while maintaining current income",
                    timeframe: "12-24 months",
                    difficulty: PathwayDifficulty::Intermediate,
                    steps: vec![
                        "Choose content niche based on expertise and passion",
                        "Create consistent content schedule (daily/weekly)",
                        "Build email list and social media following",
                        "Create first digital product or course",
                        "Scale to multiple income streams",
                    ],
                },
            ],
            reality_check: RealityCheck {
                average_income: "$30k-500k+ annually (highly variable)",
                income_range: IncomeRange::new(30, 500),
                time_to_viability: "18-36 months",
                difficulty_level: 8,
                market_demand: MarketDemand::Moderate,
                growth_potential: GrowthPotential::Exploding,
            },
            liberation_potential: LiberationPotential {
                autonomy_level: 10,
                flexibility_level: 10,
                income_stability: 4,
                growth_ceiling: 10,
                time_to_freedom: "2-4 years",
            },
        },
        VocationOption {
            id: "freelance_writer",
            title: "Freelance Writer & Copywriter",
            category: VocationCategory::CreativeArts,
            description: "Create compelling content, marketing copy, and editorial pieces for businesses and publications.",
            primary_values: vec![
                CoreValue::Creativity,
                CoreValue::Autonomy,
                CoreValue::Variety,
                CoreValue::Balance,
            ],
            secondary_values: vec![CoreValue::Mastery, CoreValue::Impact, CoreValue::Variety],
            conflicting_values: vec![CoreValue::Security, CoreValue::Security],
            arrangements: vec![
                WorkArrangement::Freelancer,
                WorkArrangement::Contractor,
                WorkArrangement::DigitalNomad,
                WorkArrangement::RemoteEmployee,
            ],
            skills_required: vec![
                "Writing",
                "Research",
                "Marketing psychology",
                "SEO",
                "Client management",
            ],
            pathways: vec![
                Pathway {
                    name: "Portfolio Building Path",
                    description: "Build writing portfolio and client base",
                    timeframe: "6-12 months",
                    difficulty: PathwayDifficulty::Beginner,
                    steps: vec![
                        "Identify writing niche (B2B, health, finance, etc.)",
                        "Create portfolio with 5-8 strong samples",
                        "Join freelance platforms and pitch consistently",
                        "Build relationships with content agencies",
                        "Transition to direct clients and premium rates",
                    ],
                },
            ],
            reality_check: RealityCheck {
                average_income: "$25-100/hour ($40k-120k annually)",
                income_range: IncomeRange::new(40, 120),
                time_to_viability: "6-12 months",
                difficulty_level: 5,
                market_demand: MarketDemand::High,
                growth_potential: GrowthPotential::Stable,
            },
            liberation_potential: LiberationPotential {
                autonomy_level: 8,
                flexibility_level: 9,
                income_stability: 6,
                growth_ceiling: 7,
                time_to_freedom: "1-2 years",
            },
        },
        VocationOption {
            id: "business_consultant",
            title: "Independent Business Consultant",
            category: VocationCategory::Consulting,
            description: "Provide strategic advice and solutions to businesses based on your industry expertise.",
            primary_values: vec![
                CoreValue::Challenge,
                CoreValue::Impact,
                CoreValue::Autonomy,
                CoreValue::Recognition,
            ],
            secondary_values: vec![CoreValue::Mastery, CoreValue::Variety, CoreValue::Growth],
            conflicting_values: vec![CoreValue::Security, CoreValue::Variety],
            arrangements: vec![
                WorkArrangement::Consultant,
                WorkArrangement::Contractor,
                WorkArrangement::PortfolioCareer,
            ],
            skills_required: vec![
                "Industry expertise",
                "Problem-solving",
                "Presentation skills",
                "Business analysis",
                "Networking",
            ],
            pathways: vec![
                Pathway {
                    name: "Expertise Monetization Path",
                    description: "Leverage existing corporate experience",
                    timeframe: "3-9 months",
                    difficulty: PathwayDifficulty::Intermediate,
                    steps: vec![
                        "Identify unique expertise and market demand",
                        "Create consulting framework and methodologies",
                        "Build professional brand and thought leadership",
                        "Network with former colleagues and industry contacts",
                        "Start with project work while maintaining employment",
                    ],
                },
            ],
            reality_check: RealityCheck {
                average_income: "$100-500/hour ($150k-400k annually)",
                income_range: IncomeRange::new(150, 400),
                time_to_viability: "6-18 months",
                difficulty_level: 7,
                market_demand: MarketDemand::Moderate,
                growth_potential: GrowthPotential::Stable,
            },
            liberation_potential: LiberationPotential {
                autonomy_level: 9,
                flexibility_level: 8,
                income_stability: 7,
                growth_ceiling: 9,
                time_to_freedom: "1-2 years",
            },
        },
        VocationOption {
            id: "social_entrepreneur",
            title: "Social Entrepreneur",
            category: VocationCategory::SocialImpact,
            description: "Create businesses or organizations that solve social problems while generating sustainable income.",
            primary_values: vec![
                CoreValue::Impact,
                CoreValue::Authenticity,
                CoreValue::Service,
                CoreValue::Challenge,
            ],
            secondary_values: vec![CoreValue::Creativity, CoreValue::Leadership, CoreValue::Growth],
            conflicting_values: vec![CoreValue::Security, CoreValue::Security],
            arrangements: vec![
                WorkArrangement::Entrepreneur,
                WorkArrangement::CoFounder,
                WorkArrangement::Solopreneur,
            ],
            skills_required: vec![
                "Business development",
                "Social impact measurement",
                "Fundraising",
                "Leadership",
                "Partnership building",
            ],
            pathways: vec![
                Pathway {
                    name: "Mission-First Path",
                    description: "Start with social mission and build sustainable model",
                    timeframe: "18-36 months",
                    difficulty: PathwayDifficulty::Advanced,
                    steps: vec![
                        "Identify social problem you're passionate about solving",
                        "Research existing solutions and gaps",
                        "Develop minimal viable solution or pilot program",
                        "Build partnerships with relevant organizations",
                        "Scale impact while ensuring financial sustainability",
                    ],
                },
            ],
            reality_check: RealityCheck {
                average_income: "$30k-150k annually (varies widely)",
                income_range: IncomeRange::new(30, 150),
                time_to_viability: "24-48 months",
                difficulty_level: 9,
                market_demand: MarketDemand::Moderate,
                growth_potential: GrowthPotential::Growing,
            },
            liberation_potential: LiberationPotential {
                autonomy_level: 10,
                flexibility_level: 7,
                income_stability: 4,
                growth_ceiling: 8,
                time_to_freedom: "3-5 years",
            },
        },
        VocationOption {
            id: "life_coach",
            title: "Life & Career Coach",
            category: VocationCategory::Coaching,
            description: "Help individuals navigate major life transitions, career changes, and personal development.",
            primary_values: vec![
                CoreValue::Service,
                CoreValue::Impact,
                CoreValue::Connection,
                CoreValue::Authenticity,
            ],
            secondary_values: vec![CoreValue::Growth, CoreValue::Variety, CoreValue::Balance],
            conflicting_values: vec![CoreValue::Challenge, CoreValue::Mastery],
            arrangements: vec![
                WorkArrangement::Solopreneur,
                WorkArrangement::Contractor,
                WorkArrangement::PartTimeMulti,
            ],
            skills_required: vec![
                "Active listening",
                "Coaching techniques",
                "Psychology basics",
                "Business development",
                "Online presence",
            ],
            pathways: vec![
                Pathway {
                    name: "Certification Path",
                    description: "Get certified and build practice",
                    timeframe: "9-18 months",
                    difficulty: PathwayDifficulty::Intermediate,
                    steps: vec![
                        "Complete accredited coaching certification program",
                        "Practice with pro bono clients to build skills",
                        "Develop coaching niche and methodology",
                        "Build online presence and marketing system",
                        "Scale to full practice with premium pricing",
                    ],
                },
            ],
            reality_check: RealityCheck {
                average_income: "$50-200/hour ($50k-150k annually)",
                income_range: IncomeRange::new(50, 150),
                time_to_viability: "12-24 months",
                difficulty_level: 6,
                market_demand: MarketDemand::Moderate,
                growth_potential: GrowthPotential::Growing,
            },
            liberation_potential: LiberationPotential {
                autonomy_level: 9,
                flexibility_level: 9,
                income_stability: 6,
                growth_ceiling: 7,
                time_to_freedom: "1-3 years",
            },
        },
        VocationOption {
            id: "craftsperson",
            title: "Independent Craftsperson/Artisan",
            category: VocationCategory::Trades,
            description: "Create handmade products or provide skilled services like woodworking, jewelry, or home renovation.",
            primary_values: vec![
                CoreValue::Mastery,
                CoreValue::Creativity,
                CoreValue::Authenticity,
                CoreValue::Balance,
            ],
            secondary_values: vec![CoreValue::Variety, CoreValue::Challenge, CoreValue::Autonomy],
            conflicting_values: vec![CoreValue::Security, CoreValue::Growth],
            arrangements: vec![
                WorkArrangement::Solopreneur,
                WorkArrangement::Contractor,
                WorkArrangement::SeasonalWork,
            ],
            skills_required: vec![
                "Craft-specific skills",
                "Quality control",
                "Customer service",
                "Basic business",
                "Marketing",
            ],
            pathways: vec![
                Pathway {
                    name: "Skill Mastery Path",
                    description: "Develop craft skills and build customer base",
                    timeframe: "12-36 months",
                    difficulty: PathwayDifficulty::Intermediate,
                    steps: vec![
                        "Master fundamental techniques through practice/apprenticeship",
                        "Create initial product line or service offerings",
                        "Build local customer base through markets/referrals",
                        "Develop online presence for broader reach",
                        "Scale through teaching, custom work, or premium products",
                    ],
                },
            ],
            reality_check: RealityCheck {
                average_income: "$30k-80k annually",
                income_range: IncomeRange::new(30, 80),
                time_to_viability: "18-36 months",
                difficulty_level: 6,
                market_demand: MarketDemand::Moderate,
                growth_potential: GrowthPotential::Stable,
            },
            liberation_potential: LiberationPotential {
                autonomy_level: 8,
                flexibility_level: 7,
                income_stability: 5,
                growth_ceiling: 6,
                time_to_freedom: "2-4 years",
            },
        },
        VocationOption {
            id: "health_practitioner",
            title: "Independent Health Practitioner",
            category: VocationCategory::Healthcare,
            description: "Provide health and wellness services like massage therapy, nutrition counseling, or alternative healing.",
            primary_values: vec![
                CoreValue::Service,
                CoreValue::Impact,
                CoreValue::Balance,
                CoreValue::Authenticity,
            ],
            secondary_values: vec![CoreValue::Connection, CoreValue::Mastery, CoreValue::Growth],
            conflicting_values: vec![CoreValue::Challenge, CoreValue::Variety],
            arrangements: vec![
                WorkArrangement::Solopreneur,
                WorkArrangement::Contractor,
                WorkArrangement::PartTimeMulti,
            ],
            skills_required: vec![
                "Health/wellness certification",
                "Client care",
                "Business basics",
                "Continuing education",
                "Professional networking",
            ],
            pathways: vec![
                Pathway {
                    name: "Certification Path",
                    description: "Get licensed and build practice",
                    timeframe: "12-24 months",
                    difficulty: PathwayDifficulty::Intermediate,
                    steps: vec![
                        "Complete required certification/licensing program",
                        "Gain supervised practice experience",
                        "Set up legal business structure and insurance",
                        "Build initial client base through referrals",
                        "Develop specialization and premium services",
                    ],
                },
            ],
            reality_check: RealityCheck {
                average_income: "$40-120/hour ($45k-100k annually)",
                income_range: IncomeRange::new(45, 100),
                time_to_viability: "12-24 months",
                difficulty_level: 5,
                market_demand: MarketDemand::Moderate,
                growth_potential: GrowthPotential::Growing,
            },
            liberation_potential: LiberationPotential {
                autonomy_level: 7,
                flexibility_level: 8,
                income_stability: 6,
                growth_ceiling: 6,
                time_to_freedom: "2-3 years",
            },
        },
        VocationOption {
            id: "real_estate_investor",
            title: "Real Estate Investor/Wholesaler",
            category: VocationCategory::RealEstate,
            description: "Buy, renovate, and sell properties or connect buyers with sellers for profit.",
            primary_values: vec![
                CoreValue::Autonomy,
                CoreValue::Challenge,
                CoreValue::Growth,
                CoreValue::Variety,
            ],
            secondary_values: vec![
                CoreValue::Mastery,
                CoreValue::Recognition,
                CoreValue::Adventure,
            ],
            conflicting_values: vec![CoreValue::Security, CoreValue::Service],
            arrangements: vec![
                WorkArrangement::Entrepreneur,
                WorkArrangement::Solopreneur,
                WorkArrangement::PortfolioCareer,
            ],
            skills_required: vec![
                "Market analysis",
                "Negotiation",
                "Finance basics",
                "Property evaluation",
                "Network building",
            ],
            pathways: vec![
                Pathway {
                    name: "Wholesaling Path",
                    description: "Start with low-capital wholesaling",
                    timeframe: "6-18 months",
                    difficulty: PathwayDifficulty::Intermediate,
                    steps: vec![
                        "Learn local real estate market and laws",
                        "Build network of investors and contractors",
                        "Find first wholesale deal with minimal capital",
                        "Reinvest profits into larger deals",
                        "Scale to buy-and-hold or fix-and-flip",
                    ],
                },
            ],
            reality_check: RealityCheck {
                average_income: "$40k-200k+ annually (highly variable)",
                income_range: IncomeRange::new(40, 200),
                time_to_viability: "6-24 months",
                difficulty_level: 8,
                market_demand: MarketDemand::Moderate,
                growth_potential: GrowthPotential::Stable,
            },
            liberation_potential: LiberationPotential {
                autonomy_level: 9,
                flexibility_level: 8,
                income_stability: 5,
                growth_ceiling: 9,
                time_to_freedom: "2-5 years",
            },
        },
        VocationOption {
            id: "digital_marketing_consultant",
            title: "Digital Marketing Consultant",
            category: VocationCategory::Business,
            description: "Help businesses grow through social media, content marketing, SEO, and paid advertising.",
            primary_values: vec![
                CoreValue::Variety,
                CoreValue::Challenge,
                CoreValue::Growth,
                CoreValue::Autonomy,
            ],
            secondary_values: vec![
                CoreValue::Creativity,
                CoreValue::Impact,
                CoreValue::Recognition,
            ],
            conflicting_values: vec![CoreValue::Security, CoreValue::Mastery],
            arrangements: vec![
                WorkArrangement::Consultant,
                WorkArrangement::Freelancer,
                WorkArrangement::Contractor,
                WorkArrangement::RemoteEmployee,
            ],
            skills_required: vec![
                "Digital marketing strategy",
                "Analytics",
                "Content creation",
                "Ad platform management",
                "Client communication",
            ],
            pathways: vec![
                Pathway {
                    name: "Specialist Path",
                    description: "Master one channel then expand",
                    timeframe: "9-18 months",
                    difficulty: PathwayDifficulty::Intermediate,
                    steps: vec![
                        "Choose one marketing channel to master (Facebook ads, SEO, etc.)",
                        "Get certified and practice on own projects",
                        "Offer services to local businesses at low rates",
                        "Build case studies and testimonials",
                        "Expand to additional channels and premium pricing",
                    ],
                },
            ],
            reality_check: RealityCheck {
                average_income: "$50-150/hour ($75k-200k annually)",
                income_range: IncomeRange::new(75, 200),
                time_to_viability: "9-18 months",
                difficulty_level: 6,
                market_demand: MarketDemand::High,
                growth_potential: GrowthPotential::Growing,
            },
            liberation_potential: LiberationPotential {
                autonomy_level: 8,
                flexibility_level: 9,
                income_stability: 7,
                growth_ceiling: 8,
                time_to_freedom: "1-3 years",
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn filters_combine_category_and_arrangement() {
        let ids = |vocations: Vec<&VocationOption>| -> Vec<&str> {
            vocations.iter().map(|vocation| vocation.id).collect()
        };

        assert_eq!(
            ids(filter_vocations(
                Some(VocationCategory::Technology),
                Some(WorkArrangement::Consultant)
            )),
            vec!["ux_designer_consultant"]
        );
        assert_eq!(
            ids(filter_vocations(None, Some(WorkArrangement::CoFounder))),
            vec!["social_entrepreneur"]
        );
        assert_eq!(
            filter_vocations(Some(VocationCategory::Technology), None).len(),
            2
        );
        assert_eq!(filter_vocations(None, None).len(), vocation_catalog().len());
    }

    #[test]
    fn catalog_entries_are_well_formed() {
        let mut ids = HashSet::new();
        for vocation in vocation_catalog() {
            assert!(ids.insert(vocation.id), "duplicate id {}", vocation.id);
            assert!(!vocation.primary_values.is_empty());
            assert!(!vocation.arrangements.is_empty());
            assert!(!vocation.pathways.is_empty());
            assert!((1..=10).contains(&vocation.reality_check.difficulty_level));
            let potential = &vocation.liberation_potential;
            for level in [
                potential.autonomy_level,
                potential.flexibility_level,
                potential.income_stability,
                potential.growth_ceiling,
            ] {
                assert!((1..=10).contains(&level));
            }
        }
        assert_eq!(ids.len(), 11);
    }

    #[test]
    fn low_income_floor_matches_quoted_thirty_k_bands() {
        for vocation in vocation_catalog() {
            let quoted = vocation.reality_check.average_income.contains("$30k");
            assert_eq!(
                vocation.reality_check.income_range.is_low_floor(),
                quoted,
                "{}",
                vocation.id
            );
        }
    }

    #[test]
    fn lookups_filter_by_category_and_arrangement() {
        let technology = get_vocations_by_category(VocationCategory::Technology);
        let ids: Vec<&str> = technology.iter().map(|vocation| vocation.id).collect();
        assert_eq!(ids, vec!["software_developer_freelance", "ux_designer_consultant"]);

        assert!(get_vocations_by_category(VocationCategory::Agriculture).is_empty());

        let co_founders = get_vocations_by_arrangement(WorkArrangement::CoFounder);
        assert_eq!(co_founders.len(), 1);
        assert_eq!(co_founders[0].id, "social_entrepreneur");
        assert!(get_vocations_by_arrangement(WorkArrangement::TraditionalEmployee).is_empty());
    }

    #[test]
    fn distinct_categories_and_arrangements_keep_first_seen_order() {
        let categories = get_all_categories();
        assert_eq!(categories.first(), Some(&VocationCategory::Technology));
        assert_eq!(categories.len(), 9);

        let arrangements = get_all_work_arrangements();
        assert_eq!(
            &arrangements[..4],
            &[
                WorkArrangement::Freelancer,
                WorkArrangement::Contractor,
                WorkArrangement::DigitalNomad,
                WorkArrangement::RemoteEmployee,
            ]
        );
        assert!(!arrangements.contains(&WorkArrangement::HybridEmployee));
    }

    #[test]
    fn find_vocation_by_id() {
        let vocation = find_vocation("life_coach").expect("life coach present");
        assert_eq!(vocation.category, VocationCategory::Coaching);
        assert!(find_vocation("astronaut").is_none());
    }
}
