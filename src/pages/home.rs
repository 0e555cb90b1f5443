//! Landing page: hero with the typewriter, about cards, course grid,
//! animated stats, pricing and the contact form, under the fixed navbar.

use web_sys::js_sys;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::contact::ContactForm;
use crate::components::counter::StatCounter;
use crate::components::courses::CourseGrid;
use crate::components::navbar::{scroll_to_section, Navbar};
use crate::components::pricing::PricingSection;
use crate::components::reveal::Reveal;
use crate::components::typewriter::Typewriter;
use crate::content::Catalog;

fn jump_link(id: &'static str, label: &'static str, class: &'static str) -> Html {
    let onclick = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        scroll_to_section(id);
    });
    html! {
        <a href={format!("#{}", id)} class={class} {onclick}>{ label }</a>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let catalog = use_state(Catalog::load);
    let year = js_sys::Date::new_0().get_full_year();

    html! {
        <div class="landing">
            <style>{STYLE}</style>
            <Navbar />
            <main>
                <section id="hero" class="hero">
                    <h1 class="hero-title">
                        { "Become the Java engineer" }
                        <br />
                        <span class="hero-accent">{ "teams fight to hire" }</span>
                    </h1>
                    <div class="hero-typing">
                        <Typewriter lines={catalog.typing_lines.clone()} />
                    </div>
                    <p class="hero-sub">
                        { "JavaNova Academy takes you from your first class file to \
                           production services, with working engineers reviewing every \
                           line you write." }
                    </p>
                    <div class="hero-ctas">
                        { jump_link("pricing", "Start learning", "cta primary") }
                        { jump_link("courses", "Browse courses", "cta secondary") }
                    </div>
                </section>

                <section id="about" class="section">
                    <Reveal>
                        <h2 class="section-title">{ "Why JavaNova" }</h2>
                        <div class="about-grid">
                            <div class="about-card">
                                <h3>{ "Project-first curriculum" }</h3>
                                <p>{ "Every module ends with software you can run, break \
                                      and put in a portfolio, not a quiz score." }</p>
                            </div>
                            <div class="about-card">
                                <h3>{ "Code review culture" }</h3>
                                <p>{ "Mentors who ship Java for a living review your work \
                                      weekly and hold it to production standards." }</p>
                            </div>
                            <div class="about-card">
                                <h3>{ "Hiring network" }</h3>
                                <p>{ "Partner companies source juniors straight from our \
                                      cohorts. Your capstone is your interview." }</p>
                            </div>
                        </div>
                    </Reveal>
                </section>

                <section id="courses" class="section">
                    <Reveal>
                        <h2 class="section-title">{ "Courses" }</h2>
                        <CourseGrid courses={catalog.courses.clone()} />
                    </Reveal>
                </section>

                <section id="stats" class="section stats-section">
                    <h2 class="section-title">{ "Outcomes" }</h2>
                    <div class="stats-grid">
                        { for catalog.stats.iter().map(|stat| html! {
                            <StatCounter
                                key={stat.label.clone()}
                                label={stat.label.clone()}
                                target={stat.target}
                                suffix={stat.suffix.clone()}
                            />
                        })}
                    </div>
                </section>

                <section id="pricing" class="section">
                    <Reveal>
                        <h2 class="section-title">{ "Pricing" }</h2>
                        <PricingSection plans={catalog.plans.clone()} />
                    </Reveal>
                </section>

                <section id="contact" class="section">
                    <Reveal>
                        <h2 class="section-title">{ "Talk to us" }</h2>
                        <p class="contact-lead">
                            { "Not sure which track fits? Write to us and a mentor will \
                               answer, not a sales bot." }
                        </p>
                        <ContactForm />
                    </Reveal>
                </section>
            </main>

            <footer class="footer">
                <div class="footer-content">
                    <div class="footer-brand">
                        <span class="footer-logo">{ "JavaNova Academy" }</span>
                        <p class="footer-tagline">{ "Java, taught like a job." }</p>
                    </div>
                    <div class="footer-links">
                        { jump_link("courses", "Courses", "footer-link") }
                        { jump_link("pricing", "Pricing", "footer-link") }
                        { jump_link("contact", "Contact", "footer-link") }
                    </div>
                </div>
                <div class="footer-bottom">
                    { format!("© {} JavaNova Academy. All rights reserved.", year) }
                </div>
            </footer>
        </div>
    }
}

const STYLE: &str = r#"
    :root {
        --nav-height: 72px;
    }
    * {
        box-sizing: border-box;
    }
    body {
        margin: 0;
        font-family: 'Inter', 'Segoe UI', system-ui, sans-serif;
        background: var(--theme-bg-primary, #ffffff);
        color: var(--theme-text-primary, #10101f);
        transition: background 0.4s ease, color 0.4s ease;
    }
    body.preload *, body.preload {
        transition: none !important;
    }
    body.mobile-menu-open {
        overflow: hidden;
    }

    .top-nav {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        height: var(--nav-height);
        z-index: 100;
        background: transparent;
        transition: background 0.3s ease, box-shadow 0.3s ease;
    }
    .top-nav.scrolled {
        background: var(--theme-navbar-bg, rgba(255, 255, 255, 0.94));
        backdrop-filter: blur(10px);
        box-shadow: 0 2px 16px rgba(0, 0, 0, 0.15);
    }
    .nav-content {
        max-width: 1140px;
        margin: 0 auto;
        height: 100%;
        display: flex;
        align-items: center;
        justify-content: space-between;
        padding: 0 20px;
    }
    .nav-logo {
        font-size: 1.3rem;
        font-weight: 800;
        text-decoration: none;
        color: var(--theme-text-primary);
    }
    .logo-accent {
        color: var(--theme-accent-primary, #ff8c42);
        margin-left: 6px;
    }
    .nav-links {
        display: flex;
        align-items: center;
        gap: 22px;
    }
    .nav-link {
        color: var(--theme-text-secondary);
        text-decoration: none;
        font-weight: 500;
        padding: 6px 2px;
        border-bottom: 2px solid transparent;
        transition: color 0.2s ease, border-color 0.2s ease;
        cursor: pointer;
    }
    .nav-link:hover,
    .nav-link.active {
        color: var(--theme-accent-primary);
        border-bottom-color: var(--theme-accent-primary);
    }
    .theme-toggle {
        border: 1px solid var(--theme-border);
        background: var(--theme-card-bg);
        color: var(--theme-text-primary);
        font-size: 1.1rem;
        width: 38px;
        height: 38px;
        border-radius: 50%;
        cursor: pointer;
        transition: transform 0.3s ease;
    }
    .theme-toggle.switching {
        animation: theme-spin 0.6s ease;
    }
    @keyframes theme-spin {
        from { transform: rotate(0deg) scale(0.8); }
        to   { transform: rotate(360deg) scale(1); }
    }
    .burger-menu {
        display: none;
        flex-direction: column;
        gap: 5px;
        background: none;
        border: none;
        cursor: pointer;
        padding: 8px;
    }
    .burger-menu span {
        width: 24px;
        height: 2px;
        background: var(--theme-text-primary);
    }
    .menu-overlay {
        position: fixed;
        inset: 0;
        background: rgba(0, 0, 0, 0.5);
        opacity: 0;
        pointer-events: none;
        transition: opacity 0.3s ease;
        z-index: 98;
    }
    .menu-overlay.active {
        opacity: 1;
        pointer-events: auto;
    }
    .mobile-menu {
        position: fixed;
        top: 0;
        right: 0;
        bottom: 0;
        width: min(320px, 80vw);
        background: var(--theme-bg-secondary);
        display: flex;
        flex-direction: column;
        gap: 8px;
        padding: calc(var(--nav-height) + 16px) 24px 24px;
        transform: translateX(100%);
        transition: transform 0.3s ease;
        z-index: 99;
    }
    .mobile-menu.active {
        transform: translateX(0);
    }
    .menu-close {
        position: absolute;
        top: 16px;
        right: 20px;
        background: none;
        border: none;
        font-size: 1.4rem;
        color: var(--theme-text-primary);
        cursor: pointer;
        padding: 8px;
    }
    @media (max-width: 991px) {
        .nav-links { display: none; }
        .burger-menu { display: flex; }
    }
    @media (min-width: 992px) {
        .menu-overlay, .mobile-menu { display: none; }
    }

    .hero {
        min-height: 100vh;
        display: flex;
        flex-direction: column;
        justify-content: center;
        align-items: center;
        text-align: center;
        padding: calc(var(--nav-height) + 40px) 20px 60px;
        background:
            radial-gradient(circle at 20% 30%, rgba(139, 92, 246, 0.18), transparent 45%),
            radial-gradient(circle at 80% 70%, rgba(255, 140, 66, 0.15), transparent 45%),
            var(--theme-bg-primary);
    }
    .hero-title {
        font-size: clamp(2rem, 5vw, 3.4rem);
        line-height: 1.15;
        margin: 0 0 18px;
    }
    .hero-accent {
        color: var(--theme-accent-primary);
    }
    .hero-typing {
        font-size: clamp(1.1rem, 2.5vw, 1.5rem);
        min-height: 2em;
        color: var(--theme-accent-secondary, #8b5cf6);
        font-family: 'JetBrains Mono', 'Fira Code', monospace;
    }
    .typewriter-cursor {
        animation: cursor-blink 1s step-end infinite;
    }
    @keyframes cursor-blink {
        50% { opacity: 0; }
    }
    .hero-sub {
        max-width: 560px;
        color: var(--theme-text-secondary);
        margin: 18px 0 30px;
    }
    .hero-ctas {
        display: flex;
        gap: 14px;
        flex-wrap: wrap;
        justify-content: center;
    }
    .cta {
        padding: 13px 28px;
        border-radius: 8px;
        text-decoration: none;
        font-weight: 600;
        transition: transform 0.2s ease, box-shadow 0.2s ease;
    }
    .cta:hover {
        transform: translateY(-2px);
    }
    .cta.primary {
        background: var(--theme-accent-primary);
        color: #fff;
        box-shadow: 0 8px 20px rgba(255, 140, 66, 0.35);
    }
    .cta.secondary {
        border: 2px solid var(--theme-accent-primary);
        color: var(--theme-accent-primary);
    }

    .section {
        max-width: 1140px;
        margin: 0 auto;
        padding: 80px 20px;
    }
    .section-title {
        font-size: 2rem;
        text-align: center;
        margin: 0 0 40px;
    }
    .reveal {
        opacity: 0;
        transform: translateY(24px);
        transition: opacity 0.6s ease, transform 0.6s ease;
    }
    .reveal.visible {
        opacity: 1;
        transform: translateY(0);
    }

    .about-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
        gap: 24px;
    }
    .about-card {
        background: var(--theme-card-bg);
        border: 1px solid var(--theme-border);
        border-radius: 12px;
        padding: 28px;
    }
    .about-card h3 {
        margin-top: 0;
    }
    .about-card p {
        color: var(--theme-text-secondary);
        margin-bottom: 0;
    }

    .course-filters {
        display: flex;
        gap: 10px;
        justify-content: center;
        flex-wrap: wrap;
        margin-bottom: 30px;
    }
    .filter-btn {
        padding: 8px 18px;
        border-radius: 20px;
        border: 1px solid var(--theme-border);
        background: var(--theme-card-bg);
        color: var(--theme-text-secondary);
        cursor: pointer;
        transition: all 0.2s ease;
    }
    .filter-btn.active {
        background: var(--theme-accent-primary);
        border-color: var(--theme-accent-primary);
        color: #fff;
    }
    .course-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
        gap: 24px;
    }
    .course-card {
        background: var(--theme-card-bg);
        border: 1px solid var(--theme-border);
        border-radius: 12px;
        padding: 24px;
        display: flex;
        flex-direction: column;
        gap: 10px;
        transition: transform 0.2s ease, box-shadow 0.2s ease;
    }
    .course-card:hover {
        transform: translateY(-4px);
        box-shadow: 0 12px 24px rgba(0, 0, 0, 0.12);
    }
    .level-badge {
        align-self: flex-start;
        font-size: 0.75rem;
        font-weight: 700;
        text-transform: uppercase;
        letter-spacing: 0.05em;
        padding: 4px 10px;
        border-radius: 12px;
    }
    .level-badge.beginner { background: rgba(34, 197, 94, 0.15); color: #16a34a; }
    .level-badge.intermediate { background: rgba(249, 115, 22, 0.15); color: #ea580c; }
    .level-badge.advanced { background: rgba(168, 85, 247, 0.15); color: #9333ea; }
    .course-title {
        margin: 0;
    }
    .course-blurb {
        color: var(--theme-text-secondary);
        flex: 1;
        margin: 0;
    }
    .course-weeks {
        font-size: 0.85rem;
        color: var(--theme-accent-secondary);
        font-weight: 600;
    }

    .stats-section {
        background: var(--theme-bg-secondary);
        max-width: none;
    }
    .stats-grid {
        max-width: 1140px;
        margin: 0 auto;
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
        gap: 24px;
        text-align: center;
    }
    .stat-value {
        font-size: 2.6rem;
        font-weight: 800;
        color: var(--theme-accent-primary);
    }
    .stat-label {
        color: var(--theme-text-secondary);
        margin-top: 6px;
    }

    .billing-toggle {
        display: flex;
        align-items: center;
        justify-content: center;
        gap: 14px;
        margin-bottom: 36px;
    }
    .billing-label {
        color: var(--theme-text-secondary);
        font-weight: 600;
    }
    .billing-label.active {
        color: var(--theme-text-primary);
    }
    .billing-save {
        display: inline-block;
        margin-left: 6px;
        font-size: 0.75rem;
        background: rgba(34, 197, 94, 0.15);
        color: #16a34a;
        padding: 2px 8px;
        border-radius: 10px;
    }
    .toggle-switch {
        width: 52px;
        height: 28px;
        border-radius: 14px;
        border: none;
        background: var(--theme-border);
        position: relative;
        cursor: pointer;
        transition: background 0.25s ease;
    }
    .toggle-switch.on {
        background: var(--theme-accent-primary);
    }
    .toggle-knob {
        position: absolute;
        top: 3px;
        left: 3px;
        width: 22px;
        height: 22px;
        border-radius: 50%;
        background: #fff;
        transition: transform 0.25s ease;
    }
    .toggle-switch.on .toggle-knob {
        transform: translateX(24px);
    }
    .pricing-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
        gap: 24px;
        align-items: stretch;
    }
    .plan-card {
        position: relative;
        background: var(--theme-card-bg);
        border: 1px solid var(--theme-border);
        border-radius: 14px;
        padding: 32px 26px;
        display: flex;
        flex-direction: column;
    }
    .plan-card.popular {
        border-color: var(--theme-accent-primary);
        box-shadow: 0 12px 32px rgba(255, 140, 66, 0.2);
    }
    .plan-badge {
        position: absolute;
        top: -12px;
        left: 50%;
        transform: translateX(-50%);
        background: var(--theme-accent-primary);
        color: #fff;
        font-size: 0.75rem;
        font-weight: 700;
        padding: 4px 14px;
        border-radius: 12px;
    }
    .plan-name {
        margin: 0 0 8px;
    }
    .plan-amount {
        font-size: 2.4rem;
        font-weight: 800;
    }
    .plan-period {
        color: var(--theme-text-secondary);
    }
    .plan-pitch {
        color: var(--theme-text-secondary);
    }
    .plan-features {
        list-style: none;
        padding: 0;
        margin: 0 0 24px;
        flex: 1;
    }
    .plan-features li {
        padding: 7px 0 7px 24px;
        position: relative;
        color: var(--theme-text-secondary);
    }
    .plan-features li::before {
        content: '✓';
        position: absolute;
        left: 0;
        color: var(--theme-accent-primary);
        font-weight: 700;
    }
    .plan-cta {
        text-align: center;
        padding: 12px;
        border-radius: 8px;
        background: var(--theme-accent-primary);
        color: #fff;
        text-decoration: none;
        font-weight: 600;
    }

    .contact-lead {
        text-align: center;
        color: var(--theme-text-secondary);
        max-width: 480px;
        margin: -20px auto 36px;
    }
    .contact-form {
        max-width: 560px;
        margin: 0 auto;
        display: flex;
        flex-direction: column;
        gap: 18px;
    }
    .form-field {
        display: flex;
        flex-direction: column;
        gap: 6px;
        font-weight: 600;
    }
    .form-field input,
    .form-field textarea {
        font: inherit;
        font-weight: 400;
        padding: 12px 14px;
        border-radius: 8px;
        border: 2px solid var(--theme-border);
        background: var(--theme-card-bg);
        color: var(--theme-text-primary);
        transition: border-color 0.2s ease;
    }
    .form-field input:focus,
    .form-field textarea:focus {
        outline: none;
        border-color: var(--theme-accent-secondary);
    }
    .form-field input.is-valid,
    .form-field textarea.is-valid {
        border-color: #16a34a;
    }
    .form-field input.is-invalid,
    .form-field textarea.is-invalid {
        border-color: #dc2626;
    }
    .form-banner {
        padding: 14px 16px;
        border-radius: 8px;
        font-weight: 600;
    }
    .form-banner.success {
        background: rgba(34, 197, 94, 0.15);
        color: #16a34a;
    }
    .form-banner.error {
        background: rgba(220, 38, 38, 0.12);
        color: #dc2626;
    }
    .form-submit {
        padding: 14px;
        border: none;
        border-radius: 8px;
        background: var(--theme-accent-primary);
        color: #fff;
        font-size: 1rem;
        font-weight: 700;
        cursor: pointer;
    }

    .footer {
        background: var(--theme-footer-bg, #f2f3f5);
        color: var(--theme-footer-text, inherit);
        padding: 48px 20px 24px;
        margin-top: 40px;
    }
    .footer-content {
        max-width: 1140px;
        margin: 0 auto;
        display: flex;
        justify-content: space-between;
        gap: 30px;
        flex-wrap: wrap;
    }
    .footer-logo {
        font-weight: 800;
        font-size: 1.1rem;
    }
    .footer-tagline {
        color: var(--theme-text-secondary);
        margin: 8px 0 0;
    }
    .footer-links {
        display: flex;
        gap: 20px;
        align-items: center;
    }
    .footer-link {
        color: var(--theme-text-secondary);
        text-decoration: none;
    }
    .footer-link:hover {
        color: var(--theme-accent-primary);
    }
    .footer-bottom {
        max-width: 1140px;
        margin: 36px auto 0;
        padding-top: 18px;
        border-top: 1px solid var(--theme-border);
        color: var(--theme-text-secondary);
        font-size: 0.85rem;
        text-align: center;
    }
"#;
