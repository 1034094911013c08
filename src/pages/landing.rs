use std::rc::Rc;

use yew::prelude::*;

use crate::components::nav::Nav;
use crate::components::sections::{About, Contact, Footer, Hero, Principles, Projects, Services, Testimonials};
use crate::content::SiteContent;
use crate::viewport::navigator::{go_to_section, WindowHost};
use crate::viewport::registry::{SectionId, SharedRegistry};
use crate::viewport::scroll::use_scroll_tracker;

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub content: Rc<SiteContent>,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let registry = use_memo(|_| SharedRegistry::default(), ());
    let scroll = use_scroll_tracker((*registry).clone());
    let menu_open = use_state_eq(|| false);

    let on_toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: ()| menu_open.set(!*menu_open))
    };

    let on_navigate = {
        let registry = (*registry).clone();
        let menu_open = menu_open.clone();
        Callback::from(move |id: SectionId| {
            let close = || menu_open.set(false);
            match WindowHost::current() {
                Some(host) => {
                    go_to_section(&registry, host, id.as_str(), close);
                }
                None => close(),
            }
        })
    };

    html! {
        <ContextProvider<SharedRegistry> context={(*registry).clone()}>
            <div class="landing-page">
                <Nav
                    active={scroll.active_section}
                    scrolled={scroll.is_past_threshold}
                    menu_open={*menu_open}
                    on_toggle_menu={on_toggle_menu}
                    on_navigate={on_navigate.clone()}
                />
                <Hero on_navigate={on_navigate} />
                <About content={props.content.clone()} />
                <Principles content={props.content.clone()} />
                <Services content={props.content.clone()} />
                <Projects content={props.content.clone()} />
                <Testimonials content={props.content.clone()} />
                <Contact content={props.content.clone()} />
                <Footer />
            </div>
            <style>
                {r#"
                    @keyframes tf-pulse {
                        0%, 100% { opacity: 1; }
                        50% { opacity: 0.5; }
                    }

                    @keyframes tf-bounce {
                        0%, 100% { transform: translate(-50%, 0); }
                        50% { transform: translate(-50%, -25%); }
                    }

                    html {
                        scroll-behavior: smooth;
                    }

                    body {
                        margin: 0;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                        background: #f9fafb;
                        color: #1f2937;
                    }

                    .accent {
                        color: #fbbf24;
                    }

                    .top-nav {
                        position: fixed;
                        top: 0;
                        width: 100%;
                        z-index: 50;
                        padding: 1rem 0;
                        background: transparent;
                        transition: all 0.3s ease;
                    }

                    .top-nav.scrolled {
                        background: white;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                        padding: 0.5rem 0;
                    }

                    .nav-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1rem;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }

                    .nav-logo {
                        font-size: 1.5rem;
                        font-weight: 700;
                        color: white;
                        transition: color 0.3s ease;
                    }

                    .top-nav.scrolled .nav-logo {
                        color: #d97706;
                    }

                    .nav-links {
                        display: flex;
                        align-items: center;
                        gap: 1.5rem;
                    }

                    .nav-link {
                        background: none;
                        border: none;
                        border-bottom: 2px solid transparent;
                        padding: 0.25rem 0.75rem;
                        font-size: 1rem;
                        color: white;
                        cursor: pointer;
                        transition: color 0.3s ease;
                    }

                    .nav-link:hover {
                        color: #fde68a;
                    }

                    .top-nav.scrolled .nav-link {
                        color: #1f2937;
                    }

                    .top-nav.scrolled .nav-link:hover,
                    .nav-link.active,
                    .top-nav.scrolled .nav-link.active {
                        color: #d97706;
                    }

                    .nav-link.active {
                        border-bottom-color: #d97706;
                    }

                    .nav-cta,
                    .hero-cta,
                    .send-button {
                        background: #d97706;
                        color: white;
                        border: none;
                        border-radius: 9999px;
                        padding: 0.5rem 1.5rem;
                        font-size: 1rem;
                        cursor: pointer;
                        transition: background 0.3s ease;
                    }

                    .nav-cta:hover,
                    .hero-cta:hover,
                    .send-button:hover {
                        background: #f59e0b;
                    }

                    .burger-menu {
                        display: none;
                        background: none;
                        border: none;
                        font-size: 1.5rem;
                        color: white;
                        cursor: pointer;
                    }

                    .top-nav.scrolled .burger-menu {
                        color: #d97706;
                    }

                    .mobile-menu {
                        display: none;
                        background: white;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                        padding: 1rem;
                    }

                    .mobile-link {
                        display: block;
                        width: 100%;
                        text-align: left;
                        padding: 0.5rem 0;
                        background: none;
                        border: none;
                        font-size: 1rem;
                        color: #1f2937;
                        cursor: pointer;
                    }

                    .mobile-cta {
                        width: 100%;
                        margin-top: 1rem;
                    }

                    @media (max-width: 1024px) {
                        .nav-links {
                            display: none;
                        }

                        .burger-menu,
                        .mobile-menu {
                            display: block;
                        }
                    }

                    .hero {
                        position: relative;
                        overflow: hidden;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        background: linear-gradient(to right, #111827, #1f2937);
                        color: white;
                    }

                    .hero-shapes {
                        position: absolute;
                        inset: 0;
                        opacity: 0.2;
                    }

                    .shape.ring {
                        position: absolute;
                        top: 25%;
                        right: 25%;
                        width: 16rem;
                        height: 16rem;
                        border: 8px solid #fbbf24;
                        border-radius: 50%;
                        animation: tf-pulse 2s ease-in-out infinite;
                    }

                    .shape.square {
                        position: absolute;
                        bottom: 25%;
                        left: 33%;
                        width: 12rem;
                        height: 12rem;
                        border: 2px solid #d97706;
                        opacity: 0.7;
                    }

                    .hero-content {
                        position: relative;
                        z-index: 10;
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 5rem 1rem;
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        align-items: center;
                    }

                    .hero-kicker {
                        display: flex;
                        align-items: center;
                        margin-bottom: 1rem;
                        color: #fbbf24;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        font-weight: 600;
                        font-size: 0.875rem;
                    }

                    .kicker-line {
                        height: 4px;
                        width: 3rem;
                        background: #f59e0b;
                        margin-right: 1rem;
                    }

                    .hero h1 {
                        font-size: 3.5rem;
                        line-height: 1.15;
                        margin: 0 0 1.5rem;
                    }

                    .hero-subtitle {
                        font-size: 1.5rem;
                        color: #d1d5db;
                        margin-bottom: 2rem;
                    }

                    .hero-cta-group {
                        display: flex;
                        gap: 1rem;
                        flex-wrap: wrap;
                    }

                    .hero-cta {
                        padding: 0.75rem 2rem;
                    }

                    .hero-cta.outline {
                        background: transparent;
                        border: 2px solid #fbbf24;
                        color: #fbbf24;
                    }

                    .hero-cta.outline:hover {
                        background: #fbbf24;
                        color: #111827;
                    }

                    .hero-visual {
                        position: relative;
                        display: flex;
                        justify-content: center;
                    }

                    .hero-image {
                        width: 100%;
                        max-width: 28rem;
                        height: 20rem;
                        border-radius: 0.75rem;
                        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.25);
                    }

                    .hero-badge {
                        position: absolute;
                        top: -1rem;
                        right: -1rem;
                        background: #d97706;
                        border-radius: 50%;
                        padding: 0.5rem;
                        animation: tf-pulse 2s ease-in-out infinite;
                    }

                    .scroll-hint {
                        position: absolute;
                        bottom: 2rem;
                        left: 50%;
                        background: none;
                        border: none;
                        color: white;
                        font-size: 2.25rem;
                        cursor: pointer;
                        animation: tf-bounce 1s infinite;
                    }

                    .page-section {
                        padding: 5rem 0;
                    }

                    .page-section.light {
                        background: white;
                    }

                    .page-section.dark {
                        background: #111827;
                        color: white;
                    }

                    .section-inner {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1rem;
                    }

                    .two-col {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        align-items: center;
                    }

                    .section-title {
                        margin-bottom: 3rem;
                    }

                    .section-title.center {
                        text-align: center;
                    }

                    .section-badge {
                        display: inline-block;
                        background: #fef3c7;
                        color: #92400e;
                        padding: 0.25rem 0.75rem;
                        border-radius: 0.5rem;
                        font-size: 0.875rem;
                        font-weight: 600;
                        margin-bottom: 1rem;
                    }

                    .section-title h2 {
                        font-size: 2.25rem;
                        margin: 0 0 1rem;
                    }

                    .section-description {
                        color: #4b5563;
                    }

                    .section-title.center .section-description {
                        max-width: 42rem;
                        margin: 0 auto;
                    }

                    .highlights {
                        list-style: none;
                        padding: 0;
                    }

                    .highlights li {
                        display: flex;
                        gap: 0.75rem;
                        margin-bottom: 1rem;
                    }

                    .check {
                        color: #d97706;
                    }

                    .stats-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1rem;
                    }

                    .grid {
                        display: grid;
                        gap: 2rem;
                    }

                    .grid.two { grid-template-columns: repeat(2, 1fr); }
                    .grid.three { grid-template-columns: repeat(3, 1fr); }
                    .grid.four { grid-template-columns: repeat(4, 1fr); }

                    .principle {
                        text-align: center;
                    }

                    .principle-icon {
                        width: 5rem;
                        height: 5rem;
                        margin: 0 auto 1rem;
                        border-radius: 50%;
                        background: #fffbeb;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 2rem;
                        transition: background 0.3s ease;
                    }

                    .principle:hover .principle-icon {
                        background: #d97706;
                    }

                    .card {
                        background: white;
                        border-radius: 0.75rem;
                        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                        transition: box-shadow 0.3s ease;
                    }

                    .card:hover {
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    }

                    .service-card,
                    .testimonial-card {
                        padding: 1.5rem;
                    }

                    .service-card {
                        border-left: 4px solid transparent;
                    }

                    .service-card:hover {
                        border-left-color: #f59e0b;
                    }

                    .card-icon {
                        width: 4rem;
                        height: 4rem;
                        border-radius: 0.5rem;
                        background: #fffbeb;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.75rem;
                        margin-bottom: 1rem;
                    }

                    .card-more {
                        color: #d97706;
                        font-weight: 500;
                        transition: transform 0.3s ease;
                    }

                    .service-card:hover .card-more {
                        transform: translateX(0.5rem);
                    }

                    .project-card {
                        overflow: hidden;
                    }

                    .project-media {
                        position: relative;
                        height: 14rem;
                    }

                    .project-image {
                        width: 100%;
                        height: 100%;
                        transition: transform 0.5s ease;
                    }

                    .project-card:hover .project-image {
                        transform: scale(1.05);
                    }

                    .project-overlay {
                        position: absolute;
                        inset: 0;
                        background: rgba(120, 53, 15, 0.7);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        opacity: 0;
                        transition: opacity 0.3s ease;
                    }

                    .project-card:hover .project-overlay {
                        opacity: 1;
                    }

                    .project-button {
                        background: white;
                        color: #d97706;
                        border: none;
                        border-radius: 9999px;
                        padding: 0.5rem 1rem;
                        font-weight: 500;
                    }

                    .project-body {
                        padding: 1.5rem;
                    }

                    .project-category {
                        color: #d97706;
                        font-size: 0.875rem;
                        font-weight: 500;
                        margin-bottom: 0.5rem;
                    }

                    .quote-mark {
                        color: #d97706;
                        font-size: 2.25rem;
                        font-family: Georgia, serif;
                    }

                    .quote {
                        font-style: italic;
                        color: #374151;
                    }

                    .author {
                        font-weight: 600;
                        margin: 0;
                    }

                    .position {
                        color: #6b7280;
                        font-size: 0.875rem;
                        margin: 0;
                    }

                    .contact-lead,
                    .contact-entry p {
                        color: #d1d5db;
                    }

                    .contact-entry {
                        display: flex;
                        gap: 1rem;
                        margin-bottom: 1.5rem;
                    }

                    .contact-entry h4 {
                        margin: 0;
                    }

                    .contact-entry p {
                        margin: 0.25rem 0 0;
                    }

                    .contact-icon,
                    .social-link {
                        background: #d97706;
                        border-radius: 0.5rem;
                        padding: 0.5rem;
                        height: fit-content;
                    }

                    .social-links {
                        display: flex;
                        gap: 1rem;
                        margin-top: 2rem;
                    }

                    .social-link {
                        color: white;
                        text-decoration: none;
                        min-width: 1.5rem;
                        text-align: center;
                    }

                    .social-link:hover {
                        background: #f59e0b;
                    }

                    .contact-form {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                    }

                    .contact-form input,
                    .contact-form textarea {
                        padding: 0.75rem;
                        background: #1f2937;
                        border: 1px solid #374151;
                        border-radius: 0.5rem;
                        color: white;
                        font-size: 1rem;
                    }

                    .contact-form input:focus,
                    .contact-form textarea:focus {
                        outline: none;
                        border-color: #f59e0b;
                    }

                    .send-button {
                        border-radius: 0.5rem;
                        padding: 0.75rem;
                        font-weight: 500;
                    }

                    .site-footer {
                        background: black;
                        color: white;
                        padding: 2rem 0;
                    }

                    .footer-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1rem;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }

                    .footer-legal {
                        color: #9ca3af;
                    }

                    .footer-legal .small {
                        font-size: 0.875rem;
                    }

                    @media (max-width: 1024px) {
                        .hero-content,
                        .two-col {
                            grid-template-columns: 1fr;
                        }

                        .hero-visual {
                            order: -1;
                        }

                        .grid.three,
                        .grid.four {
                            grid-template-columns: repeat(2, 1fr);
                        }

                        .grid.two {
                            grid-template-columns: 1fr;
                        }
                    }

                    @media (max-width: 640px) {
                        .hero h1 {
                            font-size: 2rem;
                        }

                        .hero-subtitle {
                            font-size: 1.125rem;
                        }

                        .page-section {
                            padding: 3rem 0;
                        }

                        .grid.three,
                        .grid.four {
                            grid-template-columns: 1fr;
                        }

                        .footer-content {
                            flex-direction: column;
                            text-align: center;
                            gap: 1rem;
                        }
                    }
                "#}
            </style>
        </ContextProvider<SharedRegistry>>
    }
}
