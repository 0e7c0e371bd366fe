// src/app.rs
use std::rc::Rc;

use gloo::console::{error, log, warn};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::catalogue::Catalogue;
use crate::routes::{switch, Route};

/// The catalogue provided by the nearest `App`. Empty outside one.
#[hook]
pub fn use_catalogue() -> Rc<Catalogue> {
    use_context::<Rc<Catalogue>>().unwrap_or_default()
}

fn load_catalogue() -> Catalogue {
    match Catalogue::builtin() {
        Ok(report) => {
            for reason in &report.rejected {
                warn!(format!("skipping catalogue entry: {reason}"));
            }
            let catalogue = report.catalogue;
            log!(format!(
                "catalogue ready: {} series, {} films",
                catalogue.series().len(),
                catalogue.films().len()
            ));
            catalogue
        }
        Err(e) => {
            error!(format!("catalogue unavailable: {e}"));
            Catalogue::default()
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let catalogue = use_memo((), |_| load_catalogue());

    html! {
        <ContextProvider<Rc<Catalogue>> context={catalogue}>
            <BrowserRouter>
                <div class="page">
                    <div class="shell">
                        <Switch<Route> render={switch} />
                    </div>
                </div>
            </BrowserRouter>
        </ContextProvider<Rc<Catalogue>>>
    }
}
