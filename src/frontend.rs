mod counters;
mod listeners;
mod reveal;
mod styles;

use landing_fx::{
    config::CONFIG_ELEMENT_ID,
    effects::{
        menu::MobileMenu,
        particles::{generate_particles, CONTAINER_ID, PARTICLE_CLASS},
    },
    FxConfig,
};
use web_sys::window;
use yew::prelude::*;

use reveal::RevealController;

const NAV_LINKS: [(&str, &str); 4] = [
    ("#services", "Services"),
    ("#process", "Process"),
    ("#results", "Results"),
    ("#contact", "Contact"),
];

const STATS: [(&str, &str); 3] = [
    ("150", "automations shipped"),
    ("98", "percent client retention"),
    ("40", "hours saved per week"),
];

const SERVICES: [(&str, &str); 3] = [
    (
        "Workflow automation",
        "Connect the tools you already use and remove the copy-paste work between them.",
    ),
    (
        "Lead handling",
        "Capture, qualify and route every inquiry the moment it arrives.",
    ),
    (
        "Reporting",
        "Dashboards that refresh themselves instead of spreadsheets that don't.",
    ),
];

fn load_config() -> FxConfig {
    let source = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());

    let Some(source) = source else {
        return FxConfig::default();
    };

    FxConfig::from_json(&source).unwrap_or_else(|error| {
        log::warn!("{error}; using default effect settings");
        FxConfig::default()
    })
}

fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn viewport_size() -> (f64, f64) {
    let Some(win) = window() else {
        return (1280.0, 720.0);
    };

    let width = win
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(1280.0);
    let height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(720.0);

    (width, height)
}

fn particle_rng() -> fastrand::Rng {
    fastrand::Rng::with_seed((js_sys::Math::random() * u64::MAX as f64) as u64)
}

#[function_component(ParticleField)]
fn particle_field(props: &ParticleFieldProps) -> Html {
    let particles = use_memo(props.count, |count| {
        generate_particles(&mut particle_rng(), *count)
    });

    html! {
        <div id={CONTAINER_ID} class="particles" aria-hidden="true">
            { for particles.iter().map(|particle| html! {
                <div class={PARTICLE_CLASS} style={particle.style()} />
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ParticleFieldProps {
    count: usize,
}

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| load_config());
    let menu = use_state_eq(MobileMenu::default);
    let navbar_class = use_state_eq(|| None::<&'static str>);

    {
        let config = *config;
        let navbar_class = navbar_class.clone();
        use_effect_with((), move |_| {
            let document = window().and_then(|w| w.document());
            let reduced_motion = prefers_reduced_motion();

            if let Some(document) = document.as_ref() {
                styles::inject_styles(document);
            }

            let navbar = listeners::watch_navbar(config.navbar_threshold, move |class| {
                navbar_class.set(class)
            });
            let anchors = listeners::smooth_anchor_scroll(config.anchor_offset, !reduced_motion);
            let parallax = (!reduced_motion)
                .then(|| listeners::track_parallax(config.parallax_factor))
                .flatten();
            let reveal = document
                .as_ref()
                .map(|document| RevealController::install(document, config.counter_duration_ms));

            log::info!(
                "page effects ready (parallax {}, {} particles)",
                if parallax.is_some() { "on" } else { "off" },
                config.particle_count
            );

            move || {
                drop(reveal);
                drop(parallax);
                drop(anchors);
                drop(navbar);
            }
        });
    }

    let on_toggle = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.set((*menu).toggled()))
    };

    let on_menu_link = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.set((*menu).closed()))
    };

    let icon = menu.icon();

    html! {
        <>
            <nav class={classes!("navbar", *navbar_class)}>
                <a class="brand" href="#top">{"Northwind Automation"}</a>
                <ul class="nav-links">
                    { for NAV_LINKS.iter().map(|(href, label)| html! {
                        <li><a href={*href}>{*label}</a></li>
                    })}
                </ul>
                <button
                    class="menu-toggle"
                    type="button"
                    aria-controls="mobile-menu"
                    aria-label={menu.toggle_label()}
                    aria-expanded={menu.aria_expanded()}
                    onclick={on_toggle}
                >
                    { for icon.iter().map(|segment| html! {
                        <span style={segment.css()} />
                    })}
                </button>
            </nav>

            <div id="mobile-menu" class={classes!("mobile-menu", menu.panel_class())}>
                { for NAV_LINKS.iter().map(|(href, label)| html! {
                    <a href={*href} onclick={on_menu_link.clone()}>{*label}</a>
                })}
            </div>

            <header id="top" class="hero">
                <ParticleField count={config.particle_count} />
                <div class="hero-copy">
                    <h1>{"Automation that runs while you sleep"}</h1>
                    <p>{"We design and maintain the workflows that keep small teams fast."}</p>
                    <a class="cta" href="#contact">{"Book a call"}</a>
                </div>
                <div class="sphere" aria-hidden="true" />
            </header>

            <main>
                <section id="services">
                    <h2>{"Services"}</h2>
                    <div class="card-grid">
                        { for SERVICES.iter().map(|(title, body)| html! {
                            <article class="card">
                                <h3>{*title}</h3>
                                <p>{*body}</p>
                            </article>
                        })}
                    </div>
                </section>

                <section id="process">
                    <h2>{"Process"}</h2>
                    <ol class="steps">
                        <li>{"Audit the work you repeat every week."}</li>
                        <li>{"Automate the highest-leverage piece first."}</li>
                        <li>{"Monitor, adjust and hand over the keys."}</li>
                    </ol>
                </section>

                <section id="results" class="stats">
                    { for STATS.iter().map(|(target, label)| html! {
                        <div class="stat">
                            <span class="stat-number" data-target={*target}>{"0"}</span>
                            <span class="stat-label">{*label}</span>
                        </div>
                    })}
                </section>

                <section id="contact">
                    <h2>{"Contact"}</h2>
                    <p>{"Tell us what slows your team down and we'll show you what to automate first."}</p>
                    <a class="cta" href="mailto:hello@example.com">{"hello@example.com"}</a>
                </section>
            </main>
        </>
    }
}

pub fn run() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
