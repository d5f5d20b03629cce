use crate::components::icons::*;
use crate::components::insights::InsightsPanel;
use crate::util::{minutes, servings};
use gut_kitchen_model::{
    Chef, IngredientGroup, IngredientItem, RecipeDetail, RecipeId, RecipeMeta,
};
use leptos::ev::MouseEvent;
use leptos::logging::log;
use leptos::*;

pub const RECIPE_ERROR: &str = "Recipe not found or server error.";

/// Full detail page body for a recipe that has already been fetched.
#[component]
pub fn RecipeDetailView(recipe: RecipeDetail) -> impl IntoView {
    let RecipeDetail {
        title,
        category,
        description,
        image_url,
        chef,
        meta,
        ingredients,
        instructions,
        insights,
        ..
    } = recipe;

    view! {
        <div class="recipe-detail max-w-5xl mx-auto bg-white rounded-2xl shadow-lg overflow-hidden">
            <RecipeHeader title category description chef image_url/>
            <RecipeMetaBar meta/>
            <div class="p-8">
                <div class="grid grid-cols-1 lg:grid-cols-3 gap-8">
                    <IngredientsPanel ingredients/>
                    <div class="lg:col-span-2">
                        <InstructionsPanel instructions/>
                        {(!insights.is_empty()).then(|| view! { <InsightsPanel insights/> })}
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn RecipeHeader(
    title: String,
    category: String,
    description: String,
    chef: Chef,
    image_url: String,
) -> impl IntoView {
    let Chef {
        name,
        avatar_url,
        published_date,
    } = chef;

    view! {
        <div class="recipe-header md:flex">
            <div class="md:flex-shrink-0">
                <img class="h-64 w-full object-cover md:h-full md:w-64" src=image_url alt=title.clone()/>
            </div>
            <div class="p-8">
                <div class="uppercase tracking-wide text-sm text-green-600 font-semibold">{category}</div>
                <h1 class="mt-2 text-3xl md:text-4xl leading-tight font-extrabold text-gray-900">{title}</h1>
                <p class="mt-4 text-gray-600">{description}</p>
                <div class="mt-6 flex items-center">
                    <img class="h-12 w-12 rounded-full object-cover" src=avatar_url alt=name.clone()/>
                    <div class="ml-4">
                        <p class="font-semibold text-gray-800">"By " {name}</p>
                        <p class="text-gray-500 text-sm">"Published on " {published_date}</p>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn RecipeMetaBar(meta: RecipeMeta) -> impl IntoView {
    let RecipeMeta {
        prep_time,
        cook_time,
        servings: serving_count,
    } = meta;

    view! {
        <div class="recipe-meta bg-gray-100 border-t border-b border-gray-200 px-8 py-4 flex flex-wrap justify-around text-center">
            <div class="flex items-center m-2">
                <ClockIcon class="h-6 w-6 text-green-600 mr-2"/>
                <div>
                    <p class="font-bold text-gray-800">"Prep Time"</p>
                    <p class="text-gray-600">{minutes(prep_time)}</p>
                </div>
            </div>
            <div class="flex items-center m-2">
                <CameraIcon class="h-6 w-6 text-green-600 mr-2"/>
                <div>
                    <p class="font-bold text-gray-800">"Cook Time"</p>
                    <p class="text-gray-600">{minutes(cook_time)}</p>
                </div>
            </div>
            <div class="flex items-center m-2">
                <UsersIcon class="h-6 w-6 text-green-600 mr-2"/>
                <div>
                    <p class="font-bold text-gray-800">"Servings"</p>
                    <p class="text-gray-600">{servings(serving_count)}</p>
                </div>
            </div>
        </div>
    }
}

// Placeholder until a shopping integration exists: keeps the click target, goes nowhere.
#[component]
fn ShopLink(ingredient_id: RecipeId) -> impl IntoView {
    view! {
        <a
            href="#"
            class="shop-link ml-4 text-sm font-semibold text-green-700 hover:text-green-600 transition-colors flex-shrink-0"
            on:click=move |ev: MouseEvent| {
                ev.prevent_default();
                log!("Shop for {ingredient_id}");
            }
        >
            "Shop"
        </a>
    }
}

#[component]
fn IngredientItemRow(item: IngredientItem) -> impl IntoView {
    let IngredientItem { id, name, notes } = item;

    view! {
        <li class="ingredient flex items-center justify-between py-3 border-b border-gray-200 last:border-b-0">
            <div class="flex items-center">
                <CheckCircleIcon class="h-5 w-5 text-green-500 mr-3 flex-shrink-0"/>
                <div>
                    <span class="font-medium text-gray-800">{name}</span>
                    {notes.map(|notes| view! {
                        <span class="ingredient-notes text-gray-500 italic ml-2">"(" {notes} ")"</span>
                    })}
                </div>
            </div>
            <ShopLink ingredient_id=id/>
        </li>
    }
}

#[component]
fn IngredientGroupList(group: IngredientGroup) -> impl IntoView {
    let IngredientGroup { group, items } = group;

    view! {
        <div class="ingredient-group mb-4 last:mb-0">
            <h4 class="font-bold text-gray-700 mb-2">{group}</h4>
            <ul>
                {items
                    .into_iter()
                    .map(|item| view! { <IngredientItemRow item/> })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
pub fn IngredientsPanel(ingredients: Vec<IngredientGroup>) -> impl IntoView {
    view! {
        <div class="ingredients lg:col-span-1">
            <h3 class="text-2xl font-bold text-gray-900 flex items-center mb-4">
                <ShoppingCartIcon class="h-7 w-7 text-green-700 mr-3"/>
                "Ingredients"
            </h3>
            <div class="bg-gray-50 p-4 rounded-lg border border-gray-200">
                {ingredients
                    .into_iter()
                    .map(|group| view! { <IngredientGroupList group/> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn InstructionsPanel(instructions: Vec<String>) -> impl IntoView {
    view! {
        <div class="instructions">
            <h3 class="text-2xl font-bold text-gray-900 mb-4">"Instructions"</h3>
            <ol class="space-y-6">
                {instructions
                    .into_iter()
                    .enumerate()
                    .map(|(index, step)| view! {
                        <li class="instruction flex">
                            <span class="flex-shrink-0 bg-green-600 text-white font-bold rounded-full h-8 w-8 flex items-center justify-center mr-4">
                                {index + 1}
                            </span>
                            <p class="text-gray-700 leading-relaxed">{step}</p>
                        </li>
                    })
                    .collect_view()}
            </ol>
        </div>
    }
}

#[component]
pub fn RecipeLoading() -> impl IntoView {
    view! {
        <div class="recipe-loading text-center p-12">
            <h2 class="text-2xl font-semibold text-gray-700">"Loading recipe..."</h2>
        </div>
    }
}

#[component]
pub fn RecipeError() -> impl IntoView {
    view! {
        <div class="recipe-error text-center p-12 bg-red-50 rounded-lg">
            <AlertTriangleIcon class="h-12 w-12 text-red-500 mx-auto mb-4"/>
            <h2 class="text-2xl font-semibold text-red-800">{RECIPE_ERROR}</h2>
        </div>
    }
}
