//! Scroll-reveal wrapper: a `visible` class toggled by an intersection
//! observer, both on the way in and back out. The class is flipped on the
//! element directly so scrolling never re-renders the subtree.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();

    {
        let node = node.clone();
        use_effect_with_deps(
            move |_| {
                let mut cleanup: Box<dyn FnOnce()> = Box::new(|| {});
                if let Some(element) = node.cast::<web_sys::Element>() {
                    let callback = Closure::wrap(Box::new(
                        move |entries: js_sys::Array, _observer: IntersectionObserver| {
                            for entry in entries.iter() {
                                let entry: IntersectionObserverEntry = entry.unchecked_into();
                                let classes = entry.target().class_list();
                                if entry.is_intersecting() {
                                    let _ = classes.add_1("visible");
                                } else {
                                    let _ = classes.remove_1("visible");
                                }
                            }
                        },
                    )
                        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

                    let options = IntersectionObserverInit::new();
                    options.set_threshold(&JsValue::from_f64(config::REVEAL_VISIBLE_RATIO));
                    options.set_root_margin(config::REVEAL_ROOT_MARGIN);
                    match IntersectionObserver::new_with_options(
                        callback.as_ref().unchecked_ref(),
                        &options,
                    ) {
                        Ok(observer) => {
                            observer.observe(&element);
                            cleanup = Box::new(move || {
                                observer.disconnect();
                                drop(callback);
                            });
                        }
                        Err(_) => {
                            // No observer support: never hide the content.
                            let _ = element.class_list().add_1("visible");
                        }
                    }
                }
                cleanup
            },
            (),
        );
    }

    html! {
        <div ref={node} class={classes!("reveal", props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}
