use crate::api::Recipes;
use crate::components::RecipeCard;
use crate::state::{RequestGuard, ViewState};
use gut_kitchen_model::RecipeSummary;
use leptos::logging::{log, warn};
use leptos::*;

/// Recipe listing. Fetches once per mount; no refresh.
#[component]
pub fn HomePage() -> impl IntoView {
    let recipes = expect_context::<Recipes>();
    let (state, set_state) = create_signal(ViewState::<Vec<RecipeSummary>>::Loading);

    let guard = RequestGuard::default();
    let ticket = guard.begin();
    spawn_local(async move {
        let result = recipes.list_recipes().await;
        if let Err(err) = &result {
            warn!("Error loading recipes: {err}");
        }
        if ticket.is_current() {
            set_state.set(ViewState::from_result(result));
        } else {
            log!("Recipe list arrived after the page went away");
        }
    });
    on_cleanup(move || guard.cancel());

    view! {
        <HomeView state/>
    }
}

#[component]
pub fn HomeView(#[prop(into)] state: Signal<ViewState<Vec<RecipeSummary>>>) -> impl IntoView {
    let recipes = move || {
        state.with(|state| {
            state
                .loaded()
                .cloned()
                .unwrap_or_default()
                .into_iter()
                .enumerate()
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="home">
            <h1 class="text-4xl font-extrabold text-gray-900 mb-2">"Welcome to the Gut-Friendly Kitchen"</h1>
            <p class="text-lg text-gray-600 mb-6">"Delicious recipes designed to be gentle on your digestive system."</p>
            {move || state.with(|state| state.error().map(|message| view! {
                <p class="list-error text-red-500 font-semibold">{message.to_string()}</p>
            }))}
            {move || state.with(ViewState::is_loading).then(|| view! {
                <p class="list-loading text-gray-500">"Loading recipes..."</p>
            })}
            <div class="recipe-grid grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6">
                <For
                    each=recipes
                    key=|(index, recipe)| (*index, recipe.id.clone())
                    children=move |(_, recipe)| view! { <RecipeCard recipe/> }
                />
            </div>
        </div>
    }
}
