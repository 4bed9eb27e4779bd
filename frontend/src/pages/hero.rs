use yew::prelude::*;

use crate::components::animated::{background, Animated};
use crate::config;
use crate::reveal::hooks::{use_mount_reveal, use_reveal};
use crate::reveal::motion::{Easing, Motion};
use crate::utils::scroll::{use_scroll_progress, use_scroll_top};

const TEXT: usize = 0;
const CARDS: usize = 1;

const INTRO: [&str; 2] = [
    "Our water tracker empowers you to monitor daily water usage, from drinking to showering, helping you make informed choices to conserve water and combat the global water crisis.",
    "At BlueDrop, we're dedicated to sustainable water management, providing tools that enable communities worldwide to reduce waste and ensure equitable access to this vital resource.",
];

const DROP_IMAGE: &str = "https://images.hdqwalls.com/wallpapers/water-drop-closeup-macro-4k-1x.jpg";
const RIVER_IMAGE: &str = "https://images.alphacoders.com/739/73931.jpg";
const WELL_IMAGE: &str =
    "https://tse1.mm.bing.net/th/id/OIP.grjtVHUTZyT7jutyMPmf6wHaEo?r=0&rs=1&pid=ImgDetMain&o=7&rm=3";

const HERO_CSS: &str = r#"
    .hero {
        position: relative;
        display: flex;
        flex-direction: column;
        align-items: center;
        min-height: 100vh;
        padding: 2rem 1rem;
        background: linear-gradient(to bottom, #f9fafb, white);
        box-sizing: border-box;
    }
    .scroll-track {
        position: fixed;
        top: 0;
        left: 0;
        width: 100%;
        height: 4px;
        background: #e5e7eb;
        z-index: 50;
    }
    .scroll-bar {
        height: 100%;
        background: #059669;
        transition: width 300ms linear;
    }
    .hero-text {
        max-width: 48rem;
        margin: 0 auto 3rem;
        text-align: center;
    }
    .hero-text h1 {
        font-size: 3rem;
        font-weight: bold;
        color: #047857;
        letter-spacing: -0.02em;
        margin: 0 0 1.5rem;
    }
    .hero-text p {
        font-size: 1.25rem;
        line-height: 1.6;
        color: #4b5563;
        margin: 0 0 1rem;
    }
    .hero-cards {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 1.5rem;
        width: 100%;
        max-width: 64rem;
        margin: 0 auto;
    }
    .hero-column {
        display: flex;
        flex-direction: column;
        gap: 1rem;
    }
    .stat-card {
        display: flex;
        flex-direction: column;
        justify-content: space-between;
        height: 12rem;
        padding: 1.5rem;
        border-radius: 1rem;
        color: #2e1065;
        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
        box-sizing: border-box;
    }
    .stat-card h2 {
        font-size: 1.875rem;
        margin: 0;
    }
    .stat-card.blue { background: #bfdbfe; }
    .stat-card.pink { background: #fbcfe8; }
    .photo {
        min-height: 16rem;
        height: 100%;
        border-radius: 1rem;
        background-size: cover;
        background-position: center;
        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
    }
    @media (max-width: 768px) {
        .hero-text h1 { font-size: 2rem; }
        .hero-text p { font-size: 1rem; }
        .hero-cards { grid-template-columns: 1fr; }
    }
"#;

#[function_component(Hero)]
pub fn hero() -> Html {
    use_scroll_top();
    let section = use_node_ref();
    let progress = use_scroll_progress(section.clone());
    let reveal = use_reveal(2, config::SECTION_REVEAL_THRESHOLD);
    let headline = use_mount_reveal();
    let text = reveal.state(TEXT);
    let cards = reveal.state(CARDS);

    let intro = INTRO
        .iter()
        .enumerate()
        .map(|(index, paragraph)| {
            let offset = if index % 2 == 0 { -50.0 } else { 50.0 };
            html! {
                <Animated state={text} motion={Motion::slide(offset, 800).stagger(0, 300, index)}>
                    <p>{*paragraph}</p>
                </Animated>
            }
        })
        .collect::<Html>();

    html! {
        <>
            <style>{HERO_CSS}</style>
            <section class="hero" ref={section}>
                <div class="scroll-track">
                    <div class="scroll-bar" style={format!("width: {}%;", progress)}></div>
                </div>

                <Animated
                    class="hero-text"
                    node_ref={reveal.node(TEXT)}
                    state={text}
                    motion={Motion::rise(50.0, 800).easing(Easing::STANDARD)}
                >
                    <Animated state={headline} motion={Motion::grow(0.9, 600).delay(200)}>
                        <h1>{"Every Drop Counts"}</h1>
                    </Animated>
                    { intro }
                </Animated>

                <div class="hero-cards" ref={reveal.node(CARDS)}>
                    <Animated class="hero-column" state={cards} motion={Motion::rise(50.0, 800).delay(200)}>
                        <Animated class="stat-card blue" state={cards} motion={Motion::grow(0.95, 600).delay(300)}>
                            <h2>{"10L"}</h2>
                            <p>{"We help to save up to 10L water through our water tracker"}</p>
                        </Animated>
                        <Animated
                            class="photo"
                            state={cards}
                            motion={Motion::slide(-50.0, 800).delay(400)}
                            style={background(DROP_IMAGE)}
                        />
                    </Animated>

                    <Animated
                        class="photo"
                        state={cards}
                        motion={Motion::rise(50.0, 800).delay(600)}
                        style={background(RIVER_IMAGE)}
                    />

                    <Animated class="hero-column" state={cards} motion={Motion::rise(50.0, 800).delay(800)}>
                        <Animated
                            class="photo"
                            state={cards}
                            motion={Motion::slide(50.0, 800).delay(900)}
                            style={background(WELL_IMAGE)}
                        />
                        <Animated class="stat-card pink" state={cards} motion={Motion::grow(0.95, 600).delay(1000)}>
                            <h2>{"1.5M+"}</h2>
                            <p>{"We empower 1.5 million+ users worldwide"}</p>
                        </Animated>
                    </Animated>
                </div>
            </section>
        </>
    }
}
