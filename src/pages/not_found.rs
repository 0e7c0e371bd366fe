// src/pages/not_found.rs
use gloo::console::warn;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    let path = use_location()
        .map(|loc| loc.path().to_string())
        .unwrap_or_default();

    {
        let path = path.clone();
        use_effect_with(path, |path| {
            warn!(format!("no view for path {path}"));
            || ()
        });
    }

    html! {
        <div class="not-found">
            <h1 class="list-title">{ "Page not found" }</h1>
            <p class="card-sub">{ format!("Nothing lives at {path}.") }</p>
            <Link<Route> to={Route::Home} classes={classes!("home-link")}>
                { "Back to the catalogue" }
            </Link<Route>>
        </div>
    }
}
