//! View rendering for the weather dashboard component.
//!
//! The UI is a single column: search form on top, then either a busy
//! indicator, the fixed error message, or the forecast panel (current
//! conditions plus two inline SVG charts), and finally the recent-search
//! history panel. The charts plot the daily series sampled from the
//! 3-hour forecast list via `common::model::forecast::daily_samples`.

use common::model::forecast::{daily_samples, precipitation_mm, ForecastEntry, ForecastResponse};
use web_sys::{HtmlInputElement, InputEvent, KeyboardEvent};
use yew::html::Scope;
use yew::prelude::*;

use super::helpers::{format_day, icon_url};
use super::messages::Msg;
use super::state::{FetchState, WeatherDashboard};

const CHART_WIDTH: f64 = 420.0;
const CHART_HEIGHT: f64 = 180.0;
const CHART_PAD: f64 = 28.0;

/// Main view function for the dashboard component.
pub fn view(component: &WeatherDashboard, ctx: &Context<WeatherDashboard>) -> Html {
    let link = ctx.link();
    let loading = matches!(component.fetch, FetchState::Loading);

    html! {
        <div class="dashboard-root">
            <h1>{"Weather Dashboard"}</h1>
            { build_search_form(component, link, loading) }
            {
                match &component.fetch {
                    FetchState::Idle => html! {},
                    FetchState::Loading => html! {
                        <p class="busy-indicator">{"Fetching forecast…"}</p>
                    },
                    FetchState::Success(forecast) => build_forecast_panel(forecast),
                    FetchState::Error(message) => html! {
                        <p class="error-message">{ message.clone() }</p>
                    },
                }
            }
            { build_history_panel(component, link) }
        </div>
    }
}

/// Builds the city input and search button. Both are disabled while a
/// lookup is in flight; Enter in the input submits like the button.
fn build_search_form(
    component: &WeatherDashboard,
    link: &Scope<WeatherDashboard>,
    loading: bool,
) -> Html {
    let oninput = link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::UpdateCity(input.value())
    });
    let onkeydown =
        link.batch_callback(|e: KeyboardEvent| (e.key() == "Enter").then_some(Msg::Submit));

    html! {
        <div class="search-form">
            <input
                type="text"
                placeholder="Enter a city"
                value={component.city_input.clone()}
                disabled={loading}
                {oninput}
                {onkeydown}
            />
            <button onclick={link.callback(|_| Msg::Submit)} disabled={loading}>
                { if loading { "Searching…" } else { "Search" } }
            </button>
        </div>
    }
}

fn build_forecast_panel(forecast: &ForecastResponse) -> Html {
    let samples = daily_samples(&forecast.list);

    html! {
        <div class="forecast-panel">
            { build_current_conditions(forecast) }
            <div class="charts">
                { build_temperature_chart(&samples) }
                { build_precipitation_chart(&samples) }
            </div>
        </div>
    }
}

/// Current conditions card, taken from the first forecast slot.
fn build_current_conditions(forecast: &ForecastResponse) -> Html {
    let Some(current) = forecast.list.first() else {
        return html! {
            <p class="error-message">{"The provider returned an empty forecast."}</p>
        };
    };

    html! {
        <div class="current-conditions">
            <h2>{ format!("{}, {}", forecast.city.name, forecast.city.country) }</h2>
            {
                match current.weather.first() {
                    Some(condition) => html! {
                        <div class="condition">
                            <img src={icon_url(&condition.icon)} alt={condition.description.clone()} />
                            <span>{ condition.description.clone() }</span>
                        </div>
                    },
                    None => html! {},
                }
            }
            <p class="temperature">{ format!("{:.0} °C", current.main.temp) }</p>
            <ul class="readings">
                <li>{ format!("Feels like {:.0} °C", current.main.feels_like) }</li>
                <li>{ format!("Humidity {:.0} %", current.main.humidity) }</li>
                <li>{ format!("Pressure {:.0} hPa", current.main.pressure) }</li>
                <li>{ format!("Wind {:.1} m/s", current.wind.speed) }</li>
            </ul>
        </div>
    }
}

/// Horizontal position of sample `index` out of `count` on the plot.
fn chart_x(index: usize, count: usize) -> f64 {
    let span = CHART_WIDTH - 2.0 * CHART_PAD;
    let step = span / count.saturating_sub(1).max(1) as f64;
    CHART_PAD + index as f64 * step
}

fn build_temperature_chart(samples: &[&ForecastEntry]) -> Html {
    if samples.is_empty() {
        return html! {};
    }

    let temps: Vec<f64> = samples.iter().map(|entry| entry.main.temp).collect();
    let min = temps.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = temps.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let span = (max - min).max(1.0);
    let plot_height = CHART_HEIGHT - 2.0 * CHART_PAD;
    let y_of = move |temp: f64| CHART_HEIGHT - CHART_PAD - (temp - min) / span * plot_height;

    let points = temps
        .iter()
        .enumerate()
        .map(|(i, temp)| format!("{:.1},{:.1}", chart_x(i, temps.len()), y_of(*temp)))
        .collect::<Vec<_>>()
        .join(" ");

    html! {
        <div class="chart">
            <h3>{"Daily temperature (°C)"}</h3>
            <svg viewBox={format!("0 0 {} {}", CHART_WIDTH, CHART_HEIGHT)}>
                <polyline points={points} fill="none" stroke="#93c5fd" stroke-width="2" />
                {
                    for samples.iter().enumerate().map(|(i, entry)| {
                        let x = chart_x(i, samples.len());
                        let y = y_of(entry.main.temp);
                        html! {
                            <>
                                <circle
                                    cx={format!("{:.1}", x)}
                                    cy={format!("{:.1}", y)}
                                    r="4"
                                    fill="#93c5fd"
                                />
                                <text
                                    x={format!("{:.1}", x)}
                                    y={format!("{:.1}", y - 8.0)}
                                    text-anchor="middle"
                                    class="chart-value"
                                >
                                    { format!("{:.0}", entry.main.temp) }
                                </text>
                                <text
                                    x={format!("{:.1}", x)}
                                    y={format!("{:.1}", CHART_HEIGHT - 8.0)}
                                    text-anchor="middle"
                                    class="chart-label"
                                >
                                    { format_day(entry.dt) }
                                </text>
                            </>
                        }
                    })
                }
            </svg>
        </div>
    }
}

fn build_precipitation_chart(samples: &[&ForecastEntry]) -> Html {
    if samples.is_empty() {
        return html! {};
    }

    let values: Vec<f64> = samples.iter().map(|entry| precipitation_mm(entry)).collect();
    // Scale against at least 1 mm so a dry week stays flat instead of
    // dividing by zero.
    let max = values.iter().cloned().fold(0.0_f64, f64::max).max(1.0);
    let plot_height = CHART_HEIGHT - 2.0 * CHART_PAD;
    let bar_width = (CHART_WIDTH - 2.0 * CHART_PAD) / values.len() as f64 * 0.6;

    html! {
        <div class="chart">
            <h3>{"Daily precipitation (mm)"}</h3>
            <svg viewBox={format!("0 0 {} {}", CHART_WIDTH, CHART_HEIGHT)}>
                {
                    for samples.iter().enumerate().map(|(i, entry)| {
                        let value = precipitation_mm(entry);
                        let height = value / max * plot_height;
                        let x = chart_x(i, samples.len());
                        let y = CHART_HEIGHT - CHART_PAD - height;
                        html! {
                            <>
                                <rect
                                    x={format!("{:.1}", x - bar_width / 2.0)}
                                    y={format!("{:.1}", y)}
                                    width={format!("{:.1}", bar_width)}
                                    height={format!("{:.1}", height)}
                                    fill="#93c5fd"
                                />
                                <text
                                    x={format!("{:.1}", x)}
                                    y={format!("{:.1}", y - 6.0)}
                                    text-anchor="middle"
                                    class="chart-value"
                                >
                                    { format!("{:.1}", value) }
                                </text>
                                <text
                                    x={format!("{:.1}", x)}
                                    y={format!("{:.1}", CHART_HEIGHT - 8.0)}
                                    text-anchor="middle"
                                    class="chart-label"
                                >
                                    { format_day(entry.dt) }
                                </text>
                            </>
                        }
                    })
                }
            </svg>
        </div>
    }
}

/// Recent-search panel. Clicking an entry re-runs that search.
fn build_history_panel(component: &WeatherDashboard, link: &Scope<WeatherDashboard>) -> Html {
    if component.history.is_empty() {
        return html! {};
    }

    html! {
        <div class="history-panel">
            <h3>{"Recent searches"}</h3>
            <ul>
                {
                    for component.history.iter().map(|record| {
                        let city = record.city.clone();
                        let onclick = link.callback(move |_| Msg::SubmitCity(city.clone()));
                        html! {
                            <li>
                                <button {onclick}>
                                    <span class="history-city">{ record.city.clone() }</span>
                                    <span class="history-when">{ format_day(record.timestamp) }</span>
                                </button>
                            </li>
                        }
                    })
                }
            </ul>
        </div>
    }
}
