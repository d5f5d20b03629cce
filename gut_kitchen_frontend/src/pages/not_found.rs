use crate::routes::HOME;
use leptos::*;
use leptos_router::A;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found text-center p-12">
            <h2 class="text-2xl font-semibold text-gray-700">"Page not found."</h2>
            <A href=HOME class="mt-4 inline-block text-green-700 hover:text-green-600">
                "Back to all recipes"
            </A>
        </div>
    }
}
