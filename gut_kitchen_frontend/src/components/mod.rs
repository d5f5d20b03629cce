pub mod card;
pub mod icons;
pub mod insights;
pub mod recipe;

pub use card::RecipeCard;
pub use insights::{InsightAccordionItem, InsightsPanel};
pub use recipe::*;
