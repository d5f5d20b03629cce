use crate::components::icons::{ChevronDownIcon, ChevronUpIcon, LeafIcon};
use crate::state::InsightState;
use gut_kitchen_model::Insight;
use leptos::*;

#[component]
pub fn InsightsPanel(insights: Vec<Insight>) -> impl IntoView {
    view! {
        <div class="insights mt-12">
            <h3 class="text-2xl font-bold text-gray-900 flex items-center mb-4">
                <LeafIcon class="h-7 w-7 text-green-500 mr-3"/>
                "Ingredient Insights"
            </h3>
            <div class="space-y-2">
                <For
                    each=move || insights.clone()
                    key=|insight| insight.id.clone()
                    children=move |insight| view! { <InsightAccordionItem insight/> }
                />
            </div>
        </div>
    }
}

/// Starts collapsed; each item keeps its own state and forgets it on remount.
#[component]
pub fn InsightAccordionItem(insight: Insight) -> impl IntoView {
    let (state, set_state) = create_signal(InsightState::default());
    let Insight { title, content, .. } = insight;

    let chevron = move || {
        if state.get().is_expanded() {
            view! { <ChevronUpIcon class="h-6 w-6 text-gray-500"/> }.into_view()
        } else {
            view! { <ChevronDownIcon class="h-6 w-6 text-gray-500"/> }.into_view()
        }
    };

    view! {
        <div class="insight border-b border-gray-200">
            <button
                class="w-full flex justify-between items-center py-4 text-left"
                on:click=move |_| set_state.update(|state| *state = state.toggled())
            >
                <h4 class="font-semibold text-lg text-gray-800">{title}</h4>
                {chevron}
            </button>
            {move || state.get().is_expanded().then(|| view! {
                <div class="insight-content pb-4 pr-6 text-gray-600">
                    <p>{content.clone()}</p>
                </div>
            })}
        </div>
    }
}
