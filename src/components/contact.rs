//! Contact form: per-field validation marks on blur, a status banner on
//! submit that dismisses itself. Nothing is sent anywhere; the page has
//! no backend.

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::{FocusEvent, HtmlInputElement, HtmlTextAreaElement, SubmitEvent};
use yew::prelude::*;

use crate::config;

/// Required-field check.
pub fn is_filled(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Loose shape check: some local part, one `@`, a domain with a dot on
/// both sides of it, no whitespace anywhere.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = value.split('@');
    let local = parts.next().unwrap_or("");
    let domain = match parts.next() {
        Some(domain) => domain,
        None => return false,
    };
    if parts.next().is_some() || local.is_empty() {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((head, tail)) => !head.is_empty() && !tail.is_empty(),
        None => false,
    }
}

/// Tri-state per field: untouched, valid, invalid.
fn field_class(mark: Option<bool>) -> Classes {
    match mark {
        None => classes!(),
        Some(true) => classes!("is-valid"),
        Some(false) => classes!("is-invalid"),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Banner {
    Success,
    Error,
}

/// Dismiss bookkeeping. Every shown banner takes a fresh ticket and only
/// the timer holding the newest ticket may clear the banner, so a
/// resubmit inside the dismiss window keeps its own banner on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct BannerTimers {
    latest: u32,
}

impl BannerTimers {
    fn arm(&mut self) -> u32 {
        self.latest = self.latest.wrapping_add(1);
        self.latest
    }

    fn should_dismiss(&self, ticket: u32) -> bool {
        self.latest == ticket
    }
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let message_ref = use_node_ref();

    let name_mark = use_state(|| None::<bool>);
    let email_mark = use_state(|| None::<bool>);
    let message_mark = use_state(|| None::<bool>);
    let banner = use_state(|| None::<Banner>);
    let dismiss_timers = use_mut_ref(BannerTimers::default);

    let blur_name = {
        let name_mark = name_mark.clone();
        Callback::from(move |e: FocusEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name_mark.set(Some(is_filled(&input.value())));
        })
    };
    let blur_email = {
        let email_mark = email_mark.clone();
        Callback::from(move |e: FocusEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email_mark.set(Some(is_valid_email(&input.value())));
        })
    };
    let blur_message = {
        let message_mark = message_mark.clone();
        Callback::from(move |e: FocusEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            message_mark.set(Some(is_filled(&input.value())));
        })
    };

    let onsubmit = {
        let name_ref = name_ref.clone();
        let email_ref = email_ref.clone();
        let message_ref = message_ref.clone();
        let name_mark = name_mark.clone();
        let email_mark = email_mark.clone();
        let message_mark = message_mark.clone();
        let banner = banner.clone();
        let dismiss_timers = dismiss_timers.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let name = name_ref.cast::<HtmlInputElement>();
            let email = email_ref.cast::<HtmlInputElement>();
            let message = message_ref.cast::<HtmlTextAreaElement>();
            let (name, email, message) = match (name, email, message) {
                (Some(n), Some(e), Some(m)) => (n, e, m),
                _ => return,
            };

            let name_ok = is_filled(&name.value());
            let email_ok = is_valid_email(&email.value());
            let message_ok = is_filled(&message.value());

            if name_ok && email_ok && message_ok {
                banner.set(Some(Banner::Success));
                name.set_value("");
                email.set_value("");
                message.set_value("");
                name_mark.set(None);
                email_mark.set(None);
                message_mark.set(None);
            } else {
                banner.set(Some(Banner::Error));
                name_mark.set(Some(name_ok));
                email_mark.set(Some(email_ok));
                message_mark.set(Some(message_ok));
            }

            let ticket = dismiss_timers.borrow_mut().arm();
            let banner = banner.clone();
            let dismiss_timers = dismiss_timers.clone();
            spawn_local(async move {
                TimeoutFuture::new(config::BANNER_DISMISS_MS).await;
                if dismiss_timers.borrow().should_dismiss(ticket) {
                    banner.set(None);
                }
            });
        })
    };

    html! {
        <form class="contact-form" novalidate=true {onsubmit}>
            if let Some(kind) = *banner {
                <div class={classes!("form-banner", match kind {
                    Banner::Success => "success",
                    Banner::Error => "error",
                })} role="status">
                    { match kind {
                        Banner::Success => "Thanks! We will get back to you within one business day.",
                        Banner::Error => "Please fix the highlighted fields.",
                    }}
                </div>
            }
            <label class="form-field">
                <span>{ "Name" }</span>
                <input
                    ref={name_ref}
                    type="text"
                    name="name"
                    class={field_class(*name_mark)}
                    placeholder="Ada Lovelace"
                    onblur={blur_name}
                />
            </label>
            <label class="form-field">
                <span>{ "Email" }</span>
                <input
                    ref={email_ref}
                    type="email"
                    name="email"
                    class={field_class(*email_mark)}
                    placeholder="you@example.com"
                    onblur={blur_email}
                />
            </label>
            <label class="form-field">
                <span>{ "Message" }</span>
                <textarea
                    ref={message_ref}
                    name="message"
                    rows="5"
                    class={field_class(*message_mark)}
                    placeholder="What would you like to learn?"
                    onblur={blur_message}
                />
            </label>
            <button type="submit" class="form-submit">{ "Send message" }</button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_rejects_blank_and_whitespace() {
        assert!(!is_filled(""));
        assert!(!is_filled("   "));
        assert!(!is_filled("\n\t"));
        assert!(is_filled("x"));
        assert!(is_filled("  x  "));
    }

    #[test]
    fn test_email_accepts_ordinary_addresses() {
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("ada.lovelace@example.com"));
        assert!(is_valid_email("a+tag@sub.example.co"));
    }

    #[test]
    fn test_email_requires_one_at_sign() {
        assert!(!is_valid_email("ab.c"));
        assert!(!is_valid_email("a@b@c.d"));
        assert!(!is_valid_email("@b.c"));
    }

    #[test]
    fn test_email_requires_a_dotted_domain() {
        assert!(!is_valid_email("a@bc"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("a@.c"));
        // Dots inside the domain are not audited further.
        assert!(is_valid_email("a@b..c"));
    }

    #[test]
    fn test_email_rejects_whitespace() {
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("a@c.d "));
        assert!(!is_valid_email(" a@c.d"));
    }

    #[test]
    fn test_resubmit_invalidates_the_older_dismiss_timer() {
        let mut timers = BannerTimers::default();
        let first = timers.arm();
        assert!(timers.should_dismiss(first));

        let second = timers.arm();
        assert!(!timers.should_dismiss(first));
        assert!(timers.should_dismiss(second));
    }
}
