use log::{info, Level};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, MouseEvent};
use yew::prelude::*;
use yew_router::prelude::*;

mod booking;
mod config;
mod components {
    pub mod booking_form;
    pub mod faq;
    pub mod lazy_bg;
    pub mod reveal;
    pub mod scroll;
}
mod pages {
    pub mod home;
}

use components::scroll::use_scroll_link;
use pages::home::Home;

/// Shared mobile-menu flag. The navbar's burger button toggles it, and
/// any in-page anchor closes it when its fragment resolves.
#[derive(Clone, PartialEq)]
pub struct MobileMenu(pub UseStateHandle<bool>);

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

/// Scroll offset past which the navbar switches to its solid style.
const NAV_SCROLL_THRESHOLD: f64 = 50.0;

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu = use_context::<MobileMenu>().expect("mobile menu context not set");
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let ticking = Rc::new(Cell::new(false));

                let frame = Rc::new(Closure::wrap(Box::new({
                    let window = window.clone();
                    let ticking = ticking.clone();
                    move || {
                        let offset = window.scroll_y().unwrap_or(0.0);
                        is_scrolled.set(offset > NAV_SCROLL_THRESHOLD);
                        ticking.set(false);
                    }
                }) as Box<dyn FnMut()>));

                // Coalesce bursts of scroll events into at most one state
                // update per rendered frame.
                let scroll_callback = Closure::wrap(Box::new({
                    let window = window.clone();
                    let frame = frame.clone();
                    let ticking = ticking.clone();
                    move || {
                        if !ticking.get() {
                            ticking.set(true);
                            let _ = window
                                .request_animation_frame(frame.as_ref().as_ref().unchecked_ref());
                        }
                    }
                }) as Box<dyn FnMut()>);

                let options = AddEventListenerOptions::new();
                options.set_passive(true);
                window
                    .add_event_listener_with_callback_and_add_event_listener_options(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                        &options,
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                    drop(frame);
                }
            },
            (),
        );
    }

    let top_link = use_scroll_link("top");
    let rooms_link = use_scroll_link("rooms");
    let services_link = use_scroll_link("services");
    let about_link = use_scroll_link("about");
    let faq_link = use_scroll_link("faq");
    let booking_link = use_scroll_link("booking");

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.0.set(!*menu.0);
        })
    };

    let menu_open = *menu.0;

    html! {
        <nav class={classes!("navbar", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#top" class="nav-logo" onclick={top_link}>
                    {"Lanternbay"}
                </a>
                <button
                    class={classes!("mobile-menu-btn", menu_open.then(|| "active"))}
                    aria-expanded={if menu_open { "true" } else { "false" }}
                    aria-label="Toggle navigation menu"
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={classes!("nav-links", menu_open.then(|| "active"))}>
                    <a href="#rooms" onclick={rooms_link}>{"Rooms"}</a>
                    <a href="#services" onclick={services_link}>{"Services"}</a>
                    <a href="#about" onclick={about_link}>{"About"}</a>
                    <a href="#faq" onclick={faq_link}>{"FAQ"}</a>
                    <a href="#booking" class="nav-book" onclick={booking_link}>
                        {"Book Now"}
                    </a>
                </div>
            </div>

            <style>
                {r#"
                .navbar {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 10;
                    padding: 1rem 2rem;
                    transition: background 0.3s ease, box-shadow 0.3s ease;
                }

                .navbar.scrolled {
                    background: #ffffff;
                    box-shadow: 0 2px 12px rgba(29, 39, 51, 0.15);
                }

                .navbar.scrolled .nav-links a,
                .navbar.scrolled .nav-logo {
                    color: #1d2733;
                }

                .nav-content {
                    max-width: 1100px;
                    margin: 0 auto;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .nav-logo {
                    font-size: 1.4rem;
                    font-weight: 700;
                    color: #ffffff;
                    text-decoration: none;
                }

                .nav-links {
                    display: flex;
                    gap: 1.5rem;
                }

                .nav-links a {
                    color: #ffffff;
                    text-decoration: none;
                    font-weight: 500;
                }

                .nav-book {
                    border: 1px solid currentColor;
                    border-radius: 6px;
                    padding: 0.4rem 1rem;
                }

                .mobile-menu-btn {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 6px;
                }

                .mobile-menu-btn span {
                    width: 24px;
                    height: 2px;
                    background: currentColor;
                    color: #ffffff;
                    transition: transform 0.3s ease, opacity 0.3s ease;
                }

                .navbar.scrolled .mobile-menu-btn span {
                    color: #1d2733;
                }

                @media (max-width: 768px) {
                    .mobile-menu-btn {
                        display: flex;
                    }

                    .nav-links {
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        background-color: #ffffff;
                        flex-direction: column;
                        padding: 20px;
                        gap: 16px;
                        box-shadow: 0 8px 24px rgba(29, 39, 51, 0.12);
                        display: none;
                    }

                    .nav-links.active {
                        display: flex;
                    }

                    .nav-links a {
                        color: #1d2733 !important;
                        padding: 10px 0;
                    }

                    .mobile-menu-btn.active span:nth-child(1) {
                        transform: rotate(45deg) translate(5px, 5px);
                    }

                    .mobile-menu-btn.active span:nth-child(2) {
                        opacity: 0;
                    }

                    .mobile-menu-btn.active span:nth-child(3) {
                        transform: rotate(-45deg) translate(5px, -5px);
                    }
                }
                "#}
            </style>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    let menu_open = use_state(|| false);

    html! {
        <BrowserRouter>
            <ContextProvider<MobileMenu> context={MobileMenu(menu_open)}>
                <Nav />
                <Switch<Route> render={switch} />
            </ContextProvider<MobileMenu>>
        </BrowserRouter>
    }
}

fn main() {
    // Readable panic messages in the browser console.
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
