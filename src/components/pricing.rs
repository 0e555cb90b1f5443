//! Pricing cards with the monthly/annual billing toggle. Annual prices
//! are computed from the monthly rate, not stored.

use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::Plan;

#[derive(Properties, PartialEq)]
pub struct PricingSectionProps {
    pub plans: Vec<Plan>,
}

#[function_component(PricingSection)]
pub fn pricing_section(props: &PricingSectionProps) -> Html {
    let annual = use_state(|| false);

    let toggle = {
        let annual = annual.clone();
        Callback::from(move |_: MouseEvent| {
            annual.set(!*annual);
        })
    };

    html! {
        <div class="pricing-wrap">
            <div class="billing-toggle">
                <span class={classes!("billing-label", (!*annual).then(|| "active"))}>
                    { "Monthly" }
                </span>
                <button
                    class={classes!("toggle-switch", (*annual).then(|| "on"))}
                    role="switch"
                    aria-checked={(*annual).to_string()}
                    aria-label="Toggle annual billing"
                    onclick={toggle}
                >
                    <span class="toggle-knob"></span>
                </button>
                <span class={classes!("billing-label", (*annual).then(|| "active"))}>
                    { "Annual" }
                    <span class="billing-save">{ "save 20%" }</span>
                </span>
            </div>
            <div class="pricing-grid">
                { for props.plans.iter().map(|plan| plan_card(plan, *annual)) }
            </div>
        </div>
    }
}

fn plan_card(plan: &Plan, annual: bool) -> Html {
    let (amount, period) = if annual {
        (plan.annual(), "/year")
    } else {
        (plan.monthly, "/month")
    };

    html! {
        <div class={classes!("plan-card", plan.popular.then(|| "popular"))}>
            if plan.popular {
                <span class="plan-badge">{ "Most popular" }</span>
            }
            <h3 class="plan-name">{ &plan.name }</h3>
            <div class="plan-price">
                <span class="plan-amount">{ format!("${}", amount) }</span>
                <span class="plan-period">{ period }</span>
            </div>
            <p class="plan-pitch">{ &plan.pitch }</p>
            <ul class="plan-features">
                { for plan.features.iter().map(|feature| html! { <li>{ feature }</li> }) }
            </ul>
            <a class="plan-cta" href="#contact">{ "Get started" }</a>
        </div>
    }
}
