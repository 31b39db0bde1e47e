use yew::prelude::*;

use crate::components::booking_form::BookingForm;
use crate::components::faq::FaqSection;
use crate::components::lazy_bg::{use_eager_background, use_lazy_background};
use crate::components::reveal::use_reveal_on_scroll;
use crate::components::scroll::use_scroll_link;
use crate::config;

#[function_component(Home)]
pub fn home() -> Html {
    let hero_ref = use_node_ref();
    let cta_ref = use_node_ref();

    use_reveal_on_scroll();
    use_eager_background(hero_ref.clone(), config::HERO_BACKGROUND_URL);
    use_lazy_background(cta_ref.clone(), config::CTA_BACKGROUND_URL);

    let book_link = use_scroll_link("booking");
    let rooms_link = use_scroll_link("rooms");

    html! {
        <div class="landing-page">
            <header id="top" class="hero" ref={hero_ref}>
                <div class="hero-overlay"></div>
                <div class="hero-content">
                    <h1>{"Lanternbay Hotel"}</h1>
                    <p class="hero-subtitle">
                        {"A quiet harbour, a warm light, and the sea at your window."}
                    </p>
                    <div class="hero-cta-group">
                        <a href="#booking" class="hero-cta" onclick={book_link.clone()}>
                            {"Book Your Stay"}
                        </a>
                        <a href="#rooms" class="hero-link" onclick={rooms_link}>
                            {"See the rooms"}
                        </a>
                    </div>
                </div>
            </header>

            <section id="services" class="services-section">
                <h2 class="section-title">{"At Your Service"}</h2>
                <div class="card-grid">
                    <div class="service-card">
                        <span class="card-icon">{"🌊"}</span>
                        <h3>{"Seaside Spa"}</h3>
                        <p>{"Saltwater pool, sauna and massages overlooking the bay, \
                            open daily until late."}</p>
                    </div>
                    <div class="service-card">
                        <span class="card-icon">{"🍽"}</span>
                        <h3>{"The Lantern Room"}</h3>
                        <p>{"Our restaurant serves what the morning boats bring in, \
                            from breakfast through dinner."}</p>
                    </div>
                    <div class="service-card">
                        <span class="card-icon">{"🚲"}</span>
                        <h3>{"Coastal Trails"}</h3>
                        <p>{"Complimentary bicycles and picnic hampers for the cliff \
                            path to the old lighthouse."}</p>
                    </div>
                    <div class="service-card">
                        <span class="card-icon">{"🛎"}</span>
                        <h3>{"Concierge"}</h3>
                        <p>{"The front desk arranges boat charters, tide tables \
                            and dinner reservations."}</p>
                    </div>
                </div>
            </section>

            <section id="rooms" class="rooms-section">
                <h2 class="section-title">{"Rooms & Suites"}</h2>
                <div class="card-grid">
                    <div class="room-card">
                        <h3>{"Standard Room"}</h3>
                        <p>{"Garden-facing double with everything you need and \
                            nothing you don't."}</p>
                        <span class="room-rate">{"from 120 € / night"}</span>
                    </div>
                    <div class="room-card">
                        <h3>{"Deluxe Harbour View"}</h3>
                        <p>{"Corner room over the marina; watch the fishing fleet \
                            leave at dawn from your bay window."}</p>
                        <span class="room-rate">{"from 180 € / night"}</span>
                    </div>
                    <div class="room-card">
                        <h3>{"Lighthouse Suite"}</h3>
                        <p>{"Top-floor suite with a private terrace, freestanding \
                            bath and a telescope for the night sky."}</p>
                        <span class="room-rate">{"from 290 € / night"}</span>
                    </div>
                </div>
            </section>

            <section id="packages" class="packages-section">
                <h2 class="section-title">{"Packages"}</h2>
                <div class="card-grid">
                    <div class="package-card">
                        <h3>{"Weekend Escape"}</h3>
                        <p>{"Two nights, late check-out and a bottle of the local \
                            sparkling on arrival."}</p>
                    </div>
                    <div class="package-card">
                        <h3>{"Spa Retreat"}</h3>
                        <p>{"Daily spa access, one signature massage each and \
                            breakfast in bed."}</p>
                    </div>
                    <div class="package-card">
                        <h3>{"Winter by the Sea"}</h3>
                        <p>{"Off-season rates, storm-watching blankets and mulled \
                            wine by the fire."}</p>
                    </div>
                </div>
            </section>

            <section id="about" class="about-section">
                <div class="about-image">
                    <img src="/assets/lanternbay_facade.jpg" loading="lazy"
                        alt="The Lanternbay Hotel facade at dusk" />
                </div>
                <div class="about-content">
                    <h2>{"A Harbour House Since 1924"}</h2>
                    <p>{"The Lanternbay began as a shipowner's home and has kept its \
                        habit of looking after travellers ever since. Three \
                        generations on, we still light the lamp over the door every \
                        evening the way the first keeper did."}</p>
                    <p>{"Twenty-six rooms, one long breakfast table, and the same \
                        view the gulls get."}</p>
                </div>
            </section>

            <FaqSection />

            <BookingForm />

            <section class="cta" ref={cta_ref}>
                <div class="cta-content">
                    <h2>{"The light is on."}</h2>
                    <p>{"Rooms fill quickly in the sailing season. Reserve yours \
                        while the harbour view is still yours to pick."}</p>
                    <a href="#booking" class="hero-cta" onclick={book_link}>
                        {"Check Availability"}
                    </a>
                </div>
            </section>

            <footer class="site-footer">
                <p>{"Lanternbay Hotel · 4 Harbour Walk · Lanternbay"}</p>
                <p>{"+358 40 123 4567 · stay@lanternbay.example"}</p>
            </footer>

            <style>
                {r#"
                :root {
                    --color-ink: #1d2733;
                    --color-sea: #1e6f8e;
                    --color-sand: #f6f1e7;
                    --color-white: #ffffff;
                    --shadow-md: 0 8px 24px rgba(29, 39, 51, 0.12);
                }

                .landing-page {
                    color: var(--color-ink);
                    background: var(--color-sand);
                }

                .section-title {
                    text-align: center;
                    font-size: 2.4rem;
                    margin: 0 0 2.5rem;
                }

                /* Hero: background arrives only after the image has loaded. */
                .hero {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    position: relative;
                    background-color: var(--color-ink);
                    background-size: cover;
                    background-position: center;
                }

                .hero-overlay {
                    position: absolute;
                    inset: 0;
                    background: rgba(29, 39, 51, 0.45);
                }

                .hero-content {
                    position: relative;
                    color: var(--color-white);
                    padding: 2rem;
                }

                .hero-content h1 {
                    font-size: 3.5rem;
                    margin-bottom: 1rem;
                }

                .hero-subtitle {
                    font-size: 1.3rem;
                    margin-bottom: 2.5rem;
                }

                .hero-cta-group {
                    display: flex;
                    gap: 1.5rem;
                    justify-content: center;
                    align-items: center;
                }

                .hero-cta {
                    background: var(--color-sea);
                    color: var(--color-white);
                    padding: 0.9rem 2.2rem;
                    border-radius: 6px;
                    text-decoration: none;
                    font-weight: 600;
                    transition: background 0.3s ease;
                }

                .hero-cta:hover {
                    background: #15566e;
                }

                .hero-link {
                    color: var(--color-white);
                    text-decoration: underline;
                }

                .services-section,
                .rooms-section,
                .packages-section,
                .booking-section,
                .faq-section {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 5rem 2rem;
                }

                .card-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 1.5rem;
                }

                .service-card,
                .room-card,
                .package-card {
                    background: var(--color-white);
                    border-radius: 12px;
                    padding: 2rem;
                    box-shadow: var(--shadow-md);
                }

                .card-icon {
                    font-size: 2rem;
                }

                .room-rate {
                    display: block;
                    margin-top: 1rem;
                    font-weight: 600;
                    color: var(--color-sea);
                }

                .about-section {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 5rem 2rem;
                    align-items: center;
                }

                .about-image img {
                    width: 100%;
                    border-radius: 12px;
                    box-shadow: var(--shadow-md);
                }

                /* FAQ accordion */
                .faq-item {
                    background: var(--color-white);
                    border-radius: 12px;
                    margin-bottom: 1rem;
                    overflow: hidden;
                    box-shadow: var(--shadow-md);
                }

                .faq-question {
                    width: 100%;
                    padding: 1.25rem 1.5rem;
                    background: none;
                    border: none;
                    font-size: 1.1rem;
                    text-align: left;
                    cursor: pointer;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }

                .toggle-icon {
                    color: var(--color-sea);
                    font-size: 1.4rem;
                }

                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.4s ease;
                    padding: 0 1.5rem;
                }

                .faq-item.active .faq-answer {
                    max-height: 400px;
                    padding: 0 1.5rem 1.25rem;
                }

                /* Booking form */
                .booking-form {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                    gap: 1.25rem;
                    background: var(--color-white);
                    border-radius: 12px;
                    padding: 2rem;
                    box-shadow: var(--shadow-md);
                }

                .form-row {
                    display: flex;
                    flex-direction: column;
                    gap: 0.4rem;
                }

                .form-row input,
                .form-row select {
                    padding: 0.7rem;
                    border: 1px solid #d5cfc2;
                    border-radius: 6px;
                    font-size: 1rem;
                }

                .submit-button {
                    grid-column: 1 / -1;
                    padding: 1rem;
                    background: var(--color-sea);
                    color: var(--color-white);
                    border: none;
                    border-radius: 6px;
                    font-size: 1.1rem;
                    cursor: pointer;
                }

                /* CTA banner: background arrives lazily, near the viewport. */
                .cta {
                    text-align: center;
                    padding: 6rem 2rem;
                    color: var(--color-white);
                    background-color: var(--color-ink);
                    background-size: cover;
                    background-position: center;
                }

                .cta-content h2 {
                    font-size: 2.4rem;
                    margin-bottom: 1rem;
                }

                .cta-content p {
                    max-width: 540px;
                    margin: 0 auto 2rem;
                }

                .site-footer {
                    text-align: center;
                    padding: 2.5rem 1rem;
                    background: var(--color-ink);
                    color: rgba(255, 255, 255, 0.7);
                }

                /* Entrance animation: the off-state class is only ever added
                   by the reveal observer, never statically, so content stays
                   visible when the observer is not installed. */
                .animate-ready {
                    opacity: 0;
                    transform: translateY(30px);
                    transition: opacity 0.6s ease, transform 0.6s ease;
                }

                .animate-in {
                    opacity: 1;
                    transform: translateY(0);
                }

                @media (max-width: 768px) {
                    .about-section {
                        grid-template-columns: 1fr;
                    }

                    .hero-content h1 {
                        font-size: 2.4rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
