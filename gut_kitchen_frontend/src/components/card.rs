use crate::components::icons::{ClockIcon, LeafIcon};
use crate::routes::recipe_path;
use crate::util::minutes;
use gut_kitchen_model::RecipeSummary;
use leptos::*;
use leptos_router::A;

#[component]
pub fn RecipeCard(recipe: RecipeSummary) -> impl IntoView {
    let RecipeSummary {
        id,
        title,
        category,
        cook_time,
        image_url,
    } = recipe;

    view! {
        <A href=recipe_path(&id) class="recipe-card block bg-white rounded-2xl shadow-lg overflow-hidden group">
            <div class="overflow-hidden">
                <img
                    class="h-48 w-full object-cover group-hover:scale-110 transition-transform duration-300"
                    src=image_url
                    alt=title.clone()
                />
            </div>
            <div class="p-4">
                <p class="text-sm text-green-600 font-semibold flex items-center">
                    <LeafIcon class="h-4 w-4 mr-1.5"/>
                    {category}
                </p>
                <h3 class="mt-1 font-bold text-gray-900 truncate">{title}</h3>
                <div class="flex items-center mt-2 text-sm text-gray-500">
                    <ClockIcon class="h-4 w-4 mr-1"/>
                    <span>{minutes(cook_time)}</span>
                </div>
            </div>
        </A>
    }
}
