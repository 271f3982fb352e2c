//! Update function for the weather dashboard component.
//!
//! Elm-style: receives the current `WeatherDashboard` state, the `Context`,
//! and a `Msg`, mutates the state accordingly, and returns whether the view
//! should re-render.
//!
//! Key behaviors
//! - Submitting re-fetches every time; nothing is cached client-side.
//! - Overlapping requests are not cancelled; the last response to resolve
//!   wins.
//! - A failed lookup clears any prior result and shows a fixed message.
//! - The history panel is refreshed after every successful search.

use gloo_console::error;
use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::forecast::ForecastResponse;
use common::model::record::SearchRecord;

use super::messages::Msg;
use super::state::{FetchState, WeatherDashboard};

/// Fixed user-facing message for any failed lookup.
const LOOKUP_FAILED: &str = "City not found or server error. Please try again.";

pub fn update(
    component: &mut WeatherDashboard,
    ctx: &Context<WeatherDashboard>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::UpdateCity(value) => {
            component.city_input = value;
            true
        }
        Msg::Submit => {
            // Ignore blank input; the typed value is otherwise sent verbatim.
            if component.city_input.trim().is_empty() {
                return false;
            }
            ctx.link()
                .send_message(Msg::SubmitCity(component.city_input.clone()));
            false
        }
        Msg::SubmitCity(city) => {
            component.city_input = city.clone();
            component.fetch = FetchState::Loading;

            let link = ctx.link().clone();
            spawn_local(async move {
                let response = Request::get(&format!("/api/weather/{}", city)).send().await;
                match response {
                    Ok(resp) if resp.status() == 200 => {
                        match resp.json::<ForecastResponse>().await {
                            Ok(forecast) => link.send_message(Msg::ForecastLoaded(forecast)),
                            Err(err) => {
                                error!(format!("Failed to decode forecast: {}", err));
                                link.send_message(Msg::ForecastFailed);
                            }
                        }
                    }
                    _ => link.send_message(Msg::ForecastFailed),
                }
            });
            true
        }
        Msg::ForecastLoaded(forecast) => {
            component.fetch = FetchState::Success(forecast);
            ctx.link().send_message(Msg::LoadHistory);
            true
        }
        Msg::ForecastFailed => {
            component.fetch = FetchState::Error(LOOKUP_FAILED.to_string());
            true
        }
        Msg::LoadHistory => {
            let link = ctx.link().clone();
            spawn_local(async move {
                match Request::get("/api/weather/history").send().await {
                    // A degraded backend answers 500 with an empty array
                    // body, which decodes like any other history payload.
                    Ok(resp) => match resp.json::<Vec<SearchRecord>>().await {
                        Ok(records) => link.send_message(Msg::HistoryLoaded(records)),
                        Err(err) => error!(format!("Failed to decode history: {}", err)),
                    },
                    Err(err) => error!(format!("History request failed: {}", err)),
                }
            });
            false
        }
        Msg::HistoryLoaded(records) => {
            component.history = records;
            true
        }
    }
}
