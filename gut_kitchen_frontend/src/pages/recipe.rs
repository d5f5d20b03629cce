use crate::api::Recipes;
use crate::components::{RecipeDetailView, RecipeError, RecipeLoading, RECIPE_ERROR};
use crate::routes::{recipe_id_from_param, RECIPE_PARAM};
use crate::state::{RequestGuard, ViewState};
use gut_kitchen_model::{RecipeDetail, RecipeId};
use leptos::logging::{log, warn};
use leptos::*;
use leptos_router::use_params_map;

/// Detail page for `/recipe/:id`.
#[component]
pub fn RecipePage() -> impl IntoView {
    let params = use_params_map();
    let recipe_id = create_memo(move |_| {
        params.with(|params| {
            params
                .get(RECIPE_PARAM)
                .map(|param| recipe_id_from_param(param))
        })
    });

    view! {
        <RecipeLoader recipe_id/>
    }
}

/// Refetches whenever `recipe_id` changes; a response for an id the user
/// already navigated away from is dropped.
#[component]
pub fn RecipeLoader(#[prop(into)] recipe_id: Signal<Option<RecipeId>>) -> impl IntoView {
    let recipes = expect_context::<Recipes>();
    let (state, set_state) = create_signal(ViewState::<RecipeDetail>::Loading);
    let guard = RequestGuard::default();

    create_effect({
        let guard = guard.clone();
        move |_| {
            let ticket = guard.begin();
            set_state.set(ViewState::Loading);
            let Some(id) = recipe_id.get() else {
                warn!("Recipe route matched without an id");
                set_state.set(ViewState::Failed(RECIPE_ERROR.to_string()));
                return;
            };
            let fetch = recipes.get_recipe(&id);
            spawn_local(async move {
                let result = fetch.await.map_err(|err| {
                    warn!("Error loading recipe {id}: {err}");
                    RECIPE_ERROR
                });
                if ticket.is_current() {
                    set_state.set(ViewState::from_result(result));
                } else {
                    log!("Dropping stale response for recipe {id}");
                }
            });
        }
    });
    on_cleanup(move || guard.cancel());

    view! {
        <RecipeView state/>
    }
}

#[component]
pub fn RecipeView(#[prop(into)] state: Signal<ViewState<RecipeDetail>>) -> impl IntoView {
    move || {
        state.with(|state| match state {
            ViewState::Loading => view! { <RecipeLoading/> }.into_view(),
            ViewState::Failed(_) => view! { <RecipeError/> }.into_view(),
            ViewState::Loaded(recipe) => {
                view! { <RecipeDetailView recipe=recipe.clone()/> }.into_view()
            }
        })
    }
}
