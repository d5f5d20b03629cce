pub mod home;
pub mod not_found;
pub mod recipe;

pub use home::{HomePage, HomeView};
pub use not_found::NotFound;
pub use recipe::{RecipeLoader, RecipePage, RecipeView};
