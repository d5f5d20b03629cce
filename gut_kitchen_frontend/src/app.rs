use crate::api::{RecipeApi, Recipes};
use crate::config::ApiConfig;
use crate::pages::{HomePage, NotFound, RecipePage};
use crate::routes::{HOME, NOT_FOUND, RECIPE};
use leptos::*;
use leptos_router::*;

#[component]
pub fn App(config: ApiConfig) -> impl IntoView {
    provide_context(Recipes::from(RecipeApi::new(config)));

    view! {
        <Router>
            <Routes>
                <Route path=HOME view=Layout>
                    <Route path="" view=HomePage/>
                    <Route path=RECIPE view=RecipePage/>
                    <Route path=NOT_FOUND view=NotFound/>
                </Route>
            </Routes>
        </Router>
    }
}

#[component]
fn Layout() -> impl IntoView {
    view! {
        <div class="bg-green-50/50 min-h-screen font-sans flex flex-col">
            <Header/>
            <main class="flex-grow">
                <div class="container mx-auto p-4 sm:p-6 lg:p-8">
                    <Outlet/>
                </div>
            </main>
            <Footer/>
        </div>
    }
}

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="bg-white shadow-md">
            <nav class="container mx-auto px-6 py-4 flex justify-between items-center">
                <A href=HOME class="text-2xl font-bold text-green-700 hover:text-green-600">
                    "The Gut-Friendly Kitchen"
                </A>
                <div>
                    <A href=HOME class="text-gray-600 hover:text-green-600 mx-3">"Home"</A>
                </div>
            </nav>
        </header>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-800 text-white mt-12">
            <div class="container mx-auto px-6 py-4 text-center">
                <p>"© 2025 The Gut-Friendly Kitchen. Eat well, feel well."</p>
            </div>
        </footer>
    }
}
