use yew::prelude::*;

use crate::components::animated::Animated;
use crate::config;
use crate::reveal::hooks::use_reveal;
use crate::reveal::motion::{Easing, Motion};
use crate::utils::scroll::use_scroll_top;

const HEADING: usize = 0;

struct Tip {
    title: &'static str,
    description: &'static str,
    image: &'static str,
}

const TIPS: [Tip; 3] = [
    Tip {
        title: "Reduce Shower Time",
        description: "Cut your shower time by a few minutes to save gallons of water daily. Use a low-flow showerhead to maximize efficiency.",
        image: "https://www.tolosauna.com/wp-content/uploads/2019/12/rain-shower-3-1.jpg",
    },
    Tip {
        title: "Fix Leaks Promptly",
        description: "A small leak can waste hundreds of liters monthly. Regularly check faucets and pipes to ensure every drop is conserved.",
        image: "https://pugetsoundplumbing.com/wp-content/uploads/2018/06/Water-running-from-faucet.jpg",
    },
    Tip {
        title: "Use Efficient Appliances",
        description: "Choose water-efficient dishwashers and washing machines to reduce usage while maintaining performance for daily tasks.",
        image: "https://tse1.mm.bing.net/th/id/OIP.fdBe_Lc0YlXy0JdZYl9_5QHaEH?r=0&w=900&h=500&rs=1&pid=ImgDetMain&o=7&rm=3",
    },
];

/// Section index of the `index`th tip card; the heading takes slot 0.
fn tip_section(index: usize) -> usize {
    HEADING + 1 + index
}

const TIPS_CSS: &str = r#"
    .tips {
        display: flex;
        flex-direction: column;
        align-items: center;
        padding: 3rem 1rem;
        background: #f9fafb;
    }
    .tips-heading {
        text-align: center;
        margin-bottom: 3rem;
    }
    .tips-heading h1 {
        font-size: 3.75rem;
        font-weight: 600;
        color: #1e3a8a;
        margin: 0 0 1.75rem;
    }
    .tips-heading p {
        max-width: 48rem;
        margin: 0 auto 1.25rem;
        font-size: 1.125rem;
        color: #4b5563;
    }
    .tip-list {
        display: flex;
        flex-direction: column;
        gap: 1.5rem;
        width: 100%;
        max-width: 64rem;
        margin-bottom: 3rem;
    }
    .tip {
        display: flex;
        justify-content: space-between;
        align-items: center;
        gap: 1rem;
        min-height: 10rem;
        padding: 1rem;
        border-radius: 0.75rem;
        background: white;
        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
        transition: box-shadow 300ms;
    }
    .tip:hover { box-shadow: 0 10px 15px rgba(0, 0, 0, 0.15); }
    .tip-text { padding: 1rem; }
    .tip-text h2 {
        font-size: 2.25rem;
        font-weight: 600;
        color: #1e3a8a;
        margin: 1rem 0;
    }
    .tip-text p { color: #4b5563; }
    .tip-image {
        height: 10rem;
        border-radius: 0.75rem;
        background-size: cover;
        background-position: center;
        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
    }
    .wide { width: 60%; }
    .narrow { width: 40%; }
    .tip.flipped .tip-text { order: -1; }
    @media (max-width: 768px) {
        .tips-heading h1 { font-size: 2.25rem; }
        .tip { flex-direction: column; }
        .wide,
        .narrow { width: 100%; }
        .tip.flipped .tip-text { order: 1; }
        .tip-image { height: 8rem; }
    }
"#;

#[function_component(Tips)]
pub fn tips() -> Html {
    use_scroll_top();
    let reveal = use_reveal(1 + TIPS.len(), config::SECTION_REVEAL_THRESHOLD);

    let cards = TIPS
        .iter()
        .enumerate()
        .map(|(index, tip)| {
            let section = tip_section(index);
            let (text_width, image_width) = if index % 2 == 0 {
                ("wide", "narrow")
            } else {
                ("narrow", "wide")
            };
            html! {
                <Animated
                    class={classes!("tip", (index % 2 == 1).then_some("flipped"))}
                    node_ref={reveal.node(section)}
                    state={reveal.state(section)}
                    motion={Motion::rise(50.0, 800).stagger(0, 200, index)}
                >
                    <div class={classes!("tip-text", text_width)}>
                        <h2>{tip.title}</h2>
                        <p>{tip.description}</p>
                    </div>
                    <div
                        class={classes!("tip-image", image_width)}
                        style={format!("background-image: url(\"{}\");", tip.image)}
                    ></div>
                </Animated>
            }
        })
        .collect::<Html>();

    html! {
        <>
            <style>{TIPS_CSS}</style>
            <section class="tips">
                <Animated
                    class="tips-heading"
                    node_ref={reveal.node(HEADING)}
                    state={reveal.state(HEADING)}
                    motion={Motion::rise(50.0, 800).easing(Easing::STANDARD)}
                >
                    <h1>{"Core Water Conservation Tips"}</h1>
                    <p>
                        {"Discover practical ways to reduce water usage and contribute to a sustainable future with our actionable tips."}
                    </p>
                </Animated>
                <div class="tip-list">{ cards }</div>
            </section>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_tip_gets_its_own_section_after_the_heading() {
        let sections: Vec<_> = (0..TIPS.len()).map(tip_section).collect();
        assert_eq!(sections, vec![1, 2, 3]);
        assert!(!sections.contains(&HEADING));
    }
}
