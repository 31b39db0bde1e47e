use chrono::Local;
use log::info;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::booking::{self, BookingRequest};

const DEFAULT_GUESTS: &str = "1";
const DEFAULT_ROOM: &str = "Standard";

/// Booking request form. Dates are validated on submit; until a backend is
/// wired up, a successful submission ends in a confirmation alert and a
/// form reset.
#[function_component(BookingForm)]
pub fn booking_form() -> Html {
    let checkin = use_state(String::new);
    let checkout = use_state(String::new);
    let guests = use_state(|| DEFAULT_GUESTS.to_string());
    let room_type = use_state(|| DEFAULT_ROOM.to_string());
    // Earliest selectable checkout, updated whenever checkin changes.
    let checkout_min = use_state(String::new);

    // No past dates bookable.
    let today = Local::now().date_naive().format("%Y-%m-%d").to_string();

    let on_checkin_change = {
        let checkin = checkin.clone();
        let checkout = checkout.clone();
        let checkout_min = checkout_min.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            if let Some(date) = booking::parse_date(&value) {
                let min = booking::min_checkout(date);
                if booking::checkout_is_stale(&*checkout, min) {
                    checkout.set(String::new());
                }
                checkout_min.set(min.format("%Y-%m-%d").to_string());
            }
            checkin.set(value);
        })
    };

    let on_checkout_change = {
        let checkout = checkout.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            checkout.set(input.value());
        })
    };

    let on_guests_change = {
        let guests = guests.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            guests.set(select.value());
        })
    };

    let on_room_change = {
        let room_type = room_type.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            room_type.set(select.value());
        })
    };

    let onsubmit = {
        let checkin = checkin.clone();
        let checkout = checkout.clone();
        let guests = guests.clone();
        let room_type = room_type.clone();
        let checkout_min = checkout_min.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let request = BookingRequest {
                checkin: (*checkin).clone(),
                checkout: (*checkout).clone(),
                guests: (*guests).clone(),
                room_type: (*room_type).clone(),
            };

            let window = web_sys::window().unwrap();
            match booking::validate(&request) {
                Err(err) => {
                    // Entered values stay put so the user can correct them.
                    let _ = window.alert_with_message(&err.to_string());
                }
                Ok(()) => {
                    if let Ok(payload) = serde_json::to_string(&request) {
                        info!("booking request accepted (no backend wired): {}", payload);
                    }
                    let _ = window.alert_with_message(&booking::confirmation_message(&request));
                    checkin.set(String::new());
                    checkout.set(String::new());
                    guests.set(DEFAULT_GUESTS.to_string());
                    room_type.set(DEFAULT_ROOM.to_string());
                    checkout_min.set(String::new());
                }
            }
        })
    };

    html! {
        <section id="booking" class="booking-section">
            <h2 class="section-title">{"Reserve Your Stay"}</h2>
            <form id="booking-form" class="booking-form" onsubmit={onsubmit}>
                <div class="form-row">
                    <label for="checkin">{"Check-in"}</label>
                    <input
                        type="date"
                        id="checkin"
                        name="checkin"
                        min={today}
                        value={(*checkin).clone()}
                        onchange={on_checkin_change}
                    />
                </div>
                <div class="form-row">
                    <label for="checkout">{"Check-out"}</label>
                    <input
                        type="date"
                        id="checkout"
                        name="checkout"
                        min={(*checkout_min).clone()}
                        value={(*checkout).clone()}
                        onchange={on_checkout_change}
                    />
                </div>
                <div class="form-row">
                    <label for="guests">{"Guests"}</label>
                    <select id="guests" name="guests" onchange={on_guests_change}>
                        <option value="1" selected={*guests == "1"}>{"1 Guest"}</option>
                        <option value="2" selected={*guests == "2"}>{"2 Guests"}</option>
                        <option value="3" selected={*guests == "3"}>{"3 Guests"}</option>
                        <option value="4" selected={*guests == "4"}>{"4 Guests"}</option>
                        <option value="5+" selected={*guests == "5+"}>{"5+ Guests"}</option>
                    </select>
                </div>
                <div class="form-row">
                    <label for="room-type">{"Room"}</label>
                    <select id="room-type" name="room-type" onchange={on_room_change}>
                        <option value="Standard" selected={*room_type == "Standard"}>{"Standard Room"}</option>
                        <option value="Deluxe" selected={*room_type == "Deluxe"}>{"Deluxe Harbour View"}</option>
                        <option value="Suite" selected={*room_type == "Suite"}>{"Lighthouse Suite"}</option>
                    </select>
                </div>
                <button type="submit" class="submit-button">{"Check Availability"}</button>
            </form>
        </section>
    }
}
