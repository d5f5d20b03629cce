use gut_kitchen_frontend::config::ApiConfig;
use gut_kitchen_frontend::App;
use leptos::logging::log;
use leptos::*;

fn main() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
    let config = ApiConfig::from_document();
    log!("Using recipes API at {}", config.base_url());
    mount_to_body(move || {
        view! {
            <App config/>
        }
    })
}
