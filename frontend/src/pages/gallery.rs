use yew::prelude::*;

use crate::components::animated::{background, Animated};
use crate::config;
use crate::reveal::hooks::use_reveal;
use crate::reveal::motion::{Easing, Motion};
use crate::utils::scroll::use_scroll_top;

const HEADING: usize = 0;
const TOP: usize = 1;
const BOTTOM: usize = 2;

const SOLUTIONS: [(&str, &str); 3] = [
    (
        "Water Purification",
        "Our advanced filtration systems remove contaminants, ensuring safe drinking water for communities worldwide.",
    ),
    (
        "Smart Monitoring",
        "Real-time sensors track water quality and usage, empowering users to make data-driven conservation decisions.",
    ),
    (
        "Conservation Tools",
        "AI-driven analytics optimize water distribution, reducing waste and promoting equitable access.",
    ),
];

const MONITORING_IMAGE: &str =
    "https://5.imimg.com/data5/RT/UJ/MY-5455890/real-time-water-quality-monitoring-system--500x500.jpg";

const STRIP_IMAGES: [&str; 3] = [
    "https://tse2.mm.bing.net/th/id/OIP.DGH1f8k2fJ3DHhBk3TnA7AHaE8?r=0&rs=1&pid=ImgDetMain&o=7&rm=3",
    "https://th.bing.com/th/id/R.1cbd2e63e265c6343de8b19c08b640de?rik=sQYUMo04skhv4g&riu=http%3a%2f%2fwww.pixelstalk.net%2fwp-content%2fuploads%2f2016%2f04%2fNature-Water-Wallpapers-Desktop-download.jpg&ehk=AQf%2bX%2bpslN4pvCpGHvybOW0CgyFpq7Ur%2bvp2HaQmW9c%3d&risl=&pid=ImgRaw&r=0",
    "https://tse4.mm.bing.net/th/id/OIP.d8ppNfHucFcvb69ZVail8AHaE8?r=0&rs=1&pid=ImgDetMain&o=7&rm=3",
];

const GALLERY_CSS: &str = r#"
    .gallery {
        display: flex;
        flex-direction: column;
        align-items: center;
        padding: 3rem 1rem;
        background: #f9fafb;
    }
    .gallery-heading {
        text-align: center;
        margin-bottom: 3rem;
    }
    .gallery-heading h1 {
        font-size: 3.75rem;
        font-weight: 600;
        color: #1e3a8a;
        margin: 0 0 1.75rem;
    }
    .gallery-heading h2 {
        font-size: 3rem;
        font-weight: 600;
        color: #047857;
        margin: 0 0 1.25rem;
    }
    .gallery-frame {
        display: flex;
        flex-direction: column;
        gap: 1rem;
        width: 100%;
        max-width: 64rem;
        padding: 1rem;
        margin-bottom: 3rem;
        box-sizing: border-box;
    }
    .gallery-top {
        display: flex;
        justify-content: space-between;
        gap: 1rem;
        min-height: 12rem;
        padding: 1rem;
    }
    .solutions {
        display: flex;
        flex-direction: column;
        width: 50%;
        padding: 1rem 1.5rem;
        background: white;
        border-radius: 0.75rem;
        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
        box-sizing: border-box;
    }
    .solutions h3 {
        font-size: 2rem;
        font-weight: 600;
        color: #1e3a8a;
        margin: 1rem 0;
    }
    .solutions p {
        color: #4b5563;
        margin: 0;
    }
    .gallery-bottom {
        display: flex;
        justify-content: space-around;
        gap: 1rem;
        height: 50vmin;
        padding: 1rem;
    }
    .gallery-photo {
        border-radius: 0.75rem;
        background-size: cover;
        background-position: center;
        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
    }
    .gallery-top .gallery-photo { width: 50%; }
    .gallery-bottom .gallery-photo { width: 33%; }
    @media (max-width: 768px) {
        .gallery-heading h1 { font-size: 2.25rem; }
        .gallery-heading h2 { font-size: 1.875rem; }
        .gallery-top { flex-direction: column; }
        .solutions,
        .gallery-top .gallery-photo { width: 100%; min-height: 12rem; }
    }
    @media (max-width: 640px) {
        .gallery-bottom { flex-direction: column; height: auto; }
        .gallery-bottom .gallery-photo { width: 100%; height: 20vmin; }
    }
"#;

#[function_component(Gallery)]
pub fn gallery() -> Html {
    use_scroll_top();
    let reveal = use_reveal(3, config::SECTION_REVEAL_THRESHOLD);
    let top = reveal.state(TOP);
    let bottom = reveal.state(BOTTOM);

    let solutions = SOLUTIONS
        .iter()
        .map(|(title, body)| {
            html! {
                <>
                    <h3>{*title}</h3>
                    <p>{*body}</p>
                </>
            }
        })
        .collect::<Html>();

    let strip = STRIP_IMAGES
        .iter()
        .enumerate()
        .map(|(index, image)| {
            html! {
                <Animated
                    class="gallery-photo"
                    state={bottom}
                    motion={Motion::grow(0.9, 800).stagger(200, 200, index)}
                    style={background(image)}
                />
            }
        })
        .collect::<Html>();

    html! {
        <>
            <style>{GALLERY_CSS}</style>
            <section class="gallery">
                <Animated
                    class="gallery-heading"
                    node_ref={reveal.node(HEADING)}
                    state={reveal.state(HEADING)}
                    motion={Motion::rise(50.0, 800).easing(Easing::STANDARD)}
                >
                    <h1>{"Innovative Water Solutions"}</h1>
                    <h2>{"For a Sustainable Future"}</h2>
                </Animated>

                <Animated class="gallery-frame" state={top} motion={Motion::fade(800)}>
                    <div class="gallery-top" ref={reveal.node(TOP)}>
                        <Animated class="solutions" state={top} motion={Motion::slide(-50.0, 800).delay(200)}>
                            { solutions }
                        </Animated>
                        <Animated
                            class="gallery-photo"
                            state={top}
                            motion={Motion::slide(50.0, 800).delay(400)}
                            style={background(MONITORING_IMAGE)}
                        />
                    </div>

                    <div class="gallery-bottom" ref={reveal.node(BOTTOM)}>
                        { strip }
                    </div>
                </Animated>
            </section>
        </>
    }
}
