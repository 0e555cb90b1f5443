use gloo_timers::callback::Timeout;
use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod deck;
mod theme;
mod components {
    pub mod contact;
    pub mod counter;
    pub mod courses;
    pub mod navbar;
    pub mod pricing;
    pub mod reveal;
    pub mod typewriter;
}
mod pages {
    pub mod home;
    pub mod presentation;
}

use pages::{home::Home, presentation::Presentation};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/presentation")]
    Presentation,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Presentation => {
            info!("Rendering Presentation page");
            html! { <Presentation /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    use_effect_with_deps(
        move |_| {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();

            // index.html ships with body.preload so nothing animates during
            // the first paint. Lift it once the app is mounted.
            if let Some(body) = document.body() {
                let timeout = Timeout::new(config::PRELOAD_LIFT_MS, move || {
                    let _ = body.class_list().remove_1("preload");
                });
                timeout.forget();
            }

            let error_callback = Closure::wrap(Box::new(move |event: web_sys::ErrorEvent| {
                gloo_console::error!(format!("Unhandled error: {}", event.message()));
            }) as Box<dyn FnMut(web_sys::ErrorEvent)>);
            window
                .add_event_listener_with_callback("error", error_callback.as_ref().unchecked_ref())
                .unwrap();

            move || {
                window
                    .remove_event_listener_with_callback(
                        "error",
                        error_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();
            }
        },
        (),
    );

    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Readable panics in the browser console.
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
