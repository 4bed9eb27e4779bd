use yew::prelude::*;

use crate::components::animated::Animated;
use crate::config;
use crate::reveal::hooks::use_reveal;
use crate::reveal::motion::{Easing, Motion};
use crate::utils::scroll::use_scroll_top;

const TRUSTED_BY: usize = 0;

const PARTNERS: [(&str, &str); 5] = [
    ("☁", "AquaTrust"),
    ("🌀", "HydroForce"),
    ("✨", "WaterWise"),
    ("◔", "PureFlow"),
    ("🛢", "EcoWave"),
];

struct Feature {
    title: &'static str,
    body: &'static str,
    image: &'static str,
}

const FEATURES: [Feature; 4] = [
    Feature {
        title: "Real-Time Water Monitoring",
        body: "Advanced sensors and AI track water quality and usage, providing instant insights to prevent waste and contamination.",
        image: "https://d9s8a5p4.rocketcdn.me/wp-content/uploads/sites/3/2019/03/nanostationsmartphone_splash-Profile-image-1024x1024.jpg",
    },
    Feature {
        title: "Smart Conservation Tools",
        body: "AI-driven analytics optimize water distribution, reducing waste and ensuring equitable access for all.",
        image: "https://img.freepik.com/premium-photo/sustainable-water-conservation-smart-irrigation-technology-ecofriendly-setting-concept-water-conservation-smart-irrigation-sustainable-technology-ecofriendly-practices_918839-243633.jpg?w=1480",
    },
    Feature {
        title: "Community Empowerment",
        body: "Educational tools and real-time data empower communities to manage their water resources sustainably.",
        image: "https://climatewaterequity.org/sites/default/files/clean-water-advocacy.jpg",
    },
    Feature {
        title: "Global Impact Analytics",
        body: "Track and measure the impact of water conservation efforts globally with comprehensive data dashboards.",
        image: "https://as1.ftcdn.net/v2/jpg/10/15/68/10/1000_F_1015681036_x5N9nOhkflhcwKfRLRm5aT8rdqHvKKkq.jpg",
    },
];

const ABOUT_CSS: &str = r#"
    .about {
        display: flex;
        flex-direction: column;
        align-items: center;
        padding: 3rem 1rem;
        background: #f9fafb;
    }
    .trusted-by {
        max-width: 64rem;
        margin: 0 auto 3rem;
        text-align: center;
    }
    .trusted-by > p {
        font-size: 1.25rem;
        color: #4b5563;
        margin-bottom: 1.5rem;
    }
    .partners {
        display: flex;
        flex-wrap: wrap;
        justify-content: center;
        gap: 2rem;
        font-size: 1.25rem;
        font-weight: 600;
        color: #1f2937;
    }
    .partner {
        display: flex;
        align-items: center;
        gap: 0.5rem;
    }
    .partner-icon { color: #2563eb; }
    .about-headline {
        max-width: 48rem;
        margin: 0 auto 4rem;
        text-align: center;
    }
    .about-headline h1 {
        font-size: 3rem;
        font-weight: bold;
        color: #1e3a8a;
        margin: 0 0 1rem;
    }
    .about-headline p {
        font-size: 1.125rem;
        line-height: 1.6;
        color: #4b5563;
    }
    .features {
        display: grid;
        grid-template-columns: repeat(2, 1fr);
        gap: 2rem;
        width: 100%;
        max-width: 64rem;
    }
    .feature {
        display: flex;
        gap: 1rem;
        align-items: center;
        padding: 1.5rem;
        background: white;
        border-radius: 1rem;
        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
        transition: box-shadow 300ms;
    }
    .feature:hover { box-shadow: 0 10px 15px rgba(0, 0, 0, 0.15); }
    .feature-image {
        width: 50%;
        height: 12rem;
        border-radius: 0.75rem;
        background-size: cover;
        background-position: center;
    }
    .feature-text {
        display: flex;
        flex-direction: column;
        gap: 0.5rem;
        width: 50%;
    }
    .feature-text h2 {
        font-size: 1.5rem;
        color: #1f2937;
        margin: 0;
    }
    .feature-text p {
        color: #4b5563;
        margin: 0;
    }
    @media (max-width: 768px) {
        .about-headline h1 { font-size: 2rem; }
        .features { grid-template-columns: 1fr; }
        .feature { flex-direction: column; }
        .feature-image,
        .feature-text { width: 100%; }
    }
"#;

#[function_component(About)]
pub fn about() -> Html {
    use_scroll_top();
    let reveal = use_reveal(1, config::ABOUT_REVEAL_THRESHOLD);
    let trusted = reveal.state(TRUSTED_BY);

    let partners = PARTNERS
        .iter()
        .enumerate()
        .map(|(index, (icon, name))| {
            html! {
                <Animated
                    class="partner"
                    state={trusted}
                    motion={Motion::slide(100.0, 800).easing(Easing::EaseOut).stagger(0, 200, index)}
                >
                    <span class="partner-icon" aria-hidden="true">{*icon}</span>
                    <span>{*name}</span>
                </Animated>
            }
        })
        .collect::<Html>();

    let features = FEATURES
        .iter()
        .map(|feature| {
            html! {
                <div class="feature">
                    <div
                        class="feature-image"
                        style={format!("background-image: url(\"{}\");", feature.image)}
                    ></div>
                    <div class="feature-text">
                        <h2>{feature.title}</h2>
                        <p>{feature.body}</p>
                    </div>
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <>
            <style>{ABOUT_CSS}</style>
            <section class="about">
                <div class="trusted-by" ref={reveal.node(TRUSTED_BY)}>
                    <p>{"Trusted by 10,000+ environmental organizations & communities"}</p>
                    <div class="partners">{ partners }</div>
                </div>

                <div class="about-headline">
                    <h1>{"Addressing the Global Water Crisis with Innovative Solutions"}</h1>
                    <p>
                        {"Our platform leverages advanced technology to monitor, manage, and conserve water resources, ensuring sustainable access for communities worldwide."}
                    </p>
                </div>

                <div class="features">{ features }</div>
            </section>
        </>
    }
}
