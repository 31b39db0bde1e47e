use web_sys::MouseEvent;
use yew::prelude::*;
use yew::{Children, Properties};

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: String,
    open: bool,
    ontoggle: Callback<MouseEvent>,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    html! {
        <div class={classes!("faq-item", props.open.then(|| "active"))}>
            <button class="faq-question" onclick={props.ontoggle.clone()}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if props.open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                { for props.children.iter() }
            </div>
        </div>
    }
}

/// Accordion with at most one item expanded at a time: opening an item
/// collapses the rest, activating the open item collapses everything.
#[function_component(FaqSection)]
pub fn faq_section() -> Html {
    let open = use_state(|| None::<usize>);

    let toggle = |index: usize| {
        let open = open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            open.set(if *open == Some(index) { None } else { Some(index) });
        })
    };

    html! {
        <section id="faq" class="faq-section">
            <h2 class="section-title">{"Frequently Asked Questions"}</h2>

            <FaqItem
                question="What time is check-in and check-out?"
                open={*open == Some(0)}
                ontoggle={toggle(0)}
            >
                <p>{"Check-in opens at 3:00 PM and check-out is by 11:00 AM. Early \
                    check-in and late check-out can be arranged with the front desk, \
                    subject to availability."}</p>
            </FaqItem>

            <FaqItem
                question="Is breakfast included in the room rate?"
                open={*open == Some(1)}
                ontoggle={toggle(1)}
            >
                <p>{"All rates include our full harbour-view breakfast, served daily \
                    between 7:00 and 10:30 AM in the Lantern Room."}</p>
            </FaqItem>

            <FaqItem
                question="Do you offer parking?"
                open={*open == Some(2)}
                ontoggle={toggle(2)}
            >
                <p>{"Secure underground parking is available for 25 € per night. \
                    Electric vehicle charging points are free for hotel guests."}</p>
            </FaqItem>

            <FaqItem
                question="Are pets welcome?"
                open={*open == Some(3)}
                ontoggle={toggle(3)}
            >
                <p>{"Dogs up to 20 kg stay free in our ground-floor rooms. Please \
                    mention your companion when booking so we can prepare a bed and \
                    bowls."}</p>
            </FaqItem>

            <FaqItem
                question="What is your cancellation policy?"
                open={*open == Some(4)}
                ontoggle={toggle(4)}
            >
                <p>{"Reservations can be cancelled free of charge up to 48 hours \
                    before arrival. Later cancellations are charged the first \
                    night."}</p>
            </FaqItem>
        </section>
    }
}
