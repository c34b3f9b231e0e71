//! Static vocation catalog and its lookup helpers.

mod catalog;
pub mod domain;

pub use catalog::{
    filter_vocations, find_vocation, get_all_categories, get_all_work_arrangements,
    get_vocations_by_arrangement, get_vocations_by_category, vocation_catalog,
};
pub use domain::{
    GrowthPotential, IncomeRange, LiberationPotential, MarketDemand, Pathway, PathwayDifficulty,
    RealityCheck, VocationCategory, VocationOption, WorkArrangement,
};
