use crate::assessment::CoreValue;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkArrangement {
    RemoteEmployee,
    HybridEmployee,
    TraditionalEmployee,
    Freelancer,
    Consultant,
    Contractor,
    Entrepreneur,
    Solopreneur,
    CoFounder,
    DigitalNomad,
    PortfolioCareer,
    PartTimeMulti,
    SeasonalWork,
    ProjectBased,
}

impl WorkArrangement {
    pub const fn ordered() -> [Self; 14] {
        [
            Self::RemoteEmployee,
            Self::HybridEmployee,
            Self::TraditionalEmployee,
            Self::Freelancer,
            Self::Consultant,
            Self::Contractor,
            Self::Entrepreneur,
            Self::Solopreneur,
            Self::CoFounder,
            Self::DigitalNomad,
            Self::PortfolioCareer,
            Self::PartTimeMulti,
            Self::SeasonalWork,
            Self::ProjectBased,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::RemoteEmployee => "remote_employee",
            Self::HybridEmployee => "hybrid_employee",
            Self::TraditionalEmployee => "traditional_employee",
            Self::Freelancer => "freelancer",
            Self::Consultant => "consultant",
            Self::Contractor => "contractor",
            Self::Entrepreneur => "entrepreneur",
            Self::Solopreneur => "solopreneur",
            Self::CoFounder => "co_founder",
            Self::DigitalNomad => "digital_nomad",
            Self::PortfolioCareer => "portfolio_career",
            Self::PartTimeMulti => "part_time_multi",
            Self::SeasonalWork => "seasonal_work",
            Self::ProjectBased => "project_based",
        }
    }

    pub fn from_key(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_ascii_lowercase().replace('-', "_");
        Self::ordered()
            .into_iter()
            .find(|arrangement| arrangement.key() == normalized)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::RemoteEmployee => "Remote Employee",
            Self::HybridEmployee => "Hybrid Employee",
            Self::TraditionalEmployee => "Traditional Employee",
            Self::Freelancer => "Freelancer",
            Self::Consultant => "Consultant",
            Self::Contractor => "Contractor",
            Self::Entrepreneur => "Entrepreneur",
            Self::Solopreneur => "Solopreneur",
            Self::CoFounder => "Co-Founder",
            Self::DigitalNomad => "Digital Nomad",
            Self::PortfolioCareer => "Portfolio Career",
            Self::PartTimeMulti => "Multiple Part-Time Roles",
            Self::SeasonalWork => "Seasonal Work",
            Self::ProjectBased => "Project-Based",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::RemoteEmployee => "Work for a company but from anywhere",
            Self::HybridEmployee => "Mix of office and remote work",
            Self::TraditionalEmployee => "Full-time role on an employer's site and schedule",
            Self::Freelancer => "Independent contractor working with multiple clients",
            Self::Consultant => "Provide expert advice to organizations",
            Self::Contractor => "Fixed-term engagements billed per contract",
            Self::Entrepreneur => "Start and scale your own business",
            Self::Solopreneur => "Solo business owner with minimal employees",
            Self::CoFounder => "Build a venture alongside partners",
            Self::DigitalNomad => "Work remotely while traveling",
            Self::PortfolioCareer => "Multiple part-time roles or projects",
            Self::PartTimeMulti => "Several part-time positions held at once",
            Self::SeasonalWork => "Work concentrated in specific seasons",
            Self::ProjectBased => "Engagements scoped to individual projects",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VocationCategory {
    Technology,
    CreativeArts,
    Healthcare,
    Education,
    Business,
    Science,
    SocialImpact,
    Trades,
    Hospitality,
    Finance,
    Legal,
    Media,
    Environment,
    Government,
    Manufacturing,
    Transportation,
    RealEstate,
    Agriculture,
    Consulting,
    Coaching,
}

impl VocationCategory {
    pub const fn ordered() -> [Self; 20] {
        [
            Self::Technology,
            Self::CreativeArts,
            Self::Healthcare,
            Self::Education,
            Self::Business,
            Self::Science,
            Self::SocialImpact,
            Self::Trades,
            Self::Hospitality,
            Self::Finance,
            Self::Legal,
            Self::Media,
            Self::Environment,
            Self::Government,
            Self::Manufacturing,
            Self::Transportation,
            Self::RealEstate,
            Self::Agriculture,
            Self::Consulting,
            Self::Coaching,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Technology => "technology",
            Self::CreativeArts => "creative_arts",
            Self::Healthcare => "healthcare",
            Self::Education => "education",
            Self::Business => "business",
            Self::Science => "science",
            Self::SocialImpact => "social_impact",
            Self::Trades => "trades",
            Self::Hospitality => "hospitality",
            Self::Finance => "finance",
            Self::Legal => "legal",
            Self::Media => "media",
            Self::Environment => "environment",
            Self::Government => "government",
            Self::Manufacturing => "manufacturing",
            Self::Transportation => "transportation",
            Self::RealEstate => "real_estate",
            Self::Agriculture => "agriculture",
            Self::Consulting => "consulting",
            Self::Coaching => "coaching",
        }
    }

    pub fn from_key(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_ascii_lowercase().replace('-', "_");
        Self::ordered()
            .into_iter()
            .find(|category| category.key() == normalized)
    }

    /// Lower-case display form used in narrative text.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Technology => "technology",
            Self::CreativeArts => "creative arts",
            Self::Healthcare => "healthcare",
            Self::Education => "education",
            Self::Business => "business",
            Self::Science => "science",
            Self::SocialImpact => "social impact",
            Self::Trades => "trades",
            Self::Hospitality => "hospitality",
            Self::Finance => "finance",
            Self::Legal => "legal",
            Self::Media => "media",
            Self::Environment => "environment",
            Self::Government => "government",
            Self::Manufacturing => "manufacturing",
            Self::Transportation => "transportation",
            Self::RealEstate => "real estate",
            Self::Agriculture => "agriculture",
            Self::Consulting => "consulting",
            Self::Coaching => "coaching",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathwayDifficulty {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketDemand {
    Low,
    Moderate,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrowthPotential {
    Declining,
    Stable,
    Growing,
    Exploding,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pathway {
    pub name: &'static str,
    pub description: &'static str,
    pub timeframe: &'static str,
    pub difficulty: PathwayDifficulty,
    pub steps: Vec<&'static str>,
}

/// Annual income band in thousands of USD, parsed from the quoted range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeRange {
    pub low_thousands: u32,
    pub high_thousands: u32,
}

impl IncomeRange {
    /// Floor at or below which a vocation counts as low-income when the
    /// caller prioritizes income.
    pub const LOW_INCOME_FLOOR_THOUSANDS: u32 = 30;

    pub const fn new(low_thousands: u32, high_thousands: u32) -> Self {
        Self {
            low_thousands,
            high_thousands,
        }
    }

    pub const fn is_low_floor(&self) -> bool {
        self.low_thousands <= Self::LOW_INCOME_FLOOR_THOUSANDS
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RealityCheck {
    pub average_income: &'static str,
    pub income_range: IncomeRange,
    pub time_to_viability: &'static str,
    /// 1 (easy) to 10 (very hard).
    pub difficulty_level: u8,
    pub market_demand: MarketDemand,
    pub growth_potential: GrowthPotential,
}

/// All levels are on a 1-10 scale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LiberationPotential {
    pub autonomy_level: u8,
    pub flexibility_level: u8,
    pub income_stability: u8,
    pub growth_ceiling: u8,
    pub time_to_freedom: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VocationOption {
    pub id: &'static str,
    pub title: &'static str,
    pub category: VocationCategory,
    pub description: &'static str,
    pub primary_values: Vec<CoreValue>,
    pub secondary_values: Vec<CoreValue>,
    pub conflicting_values: Vec<CoreValue>,
    pub arrangements: Vec<WorkArrangement>,
    pub skills_required: Vec<&'static str>,
    pub pathways: Vec<Pathway>,
    pub reality_check: RealityCheck,
    pub liberation_potential: LiberationPotential,
}

impl VocationOption {
    pub fn supports(&self, arrangement: WorkArrangement) -> bool {
        self.arrangements.contains(&arrangement)
    }
}
