//! Component state for the weather dashboard.

use common::model::forecast::ForecastResponse;
use common::model::record::SearchRecord;

/// Where the current forecast lookup stands. Advances
/// `Idle → Loading → Success | Error` and returns to `Loading` on the
/// next submit.
pub enum FetchState {
    Idle,
    Loading,
    Success(ForecastResponse),
    Error(String),
}

/// Main state container for the `WeatherDashboard` component.
///
/// Fields are `pub` because they are accessed by the `view` and `update`
/// modules.
pub struct WeatherDashboard {
    /// Current content of the city input, exactly as typed.
    pub city_input: String,

    /// State of the in-flight or finished forecast lookup.
    pub fetch: FetchState,

    /// Recent searches shown in the history panel, newest first.
    pub history: Vec<SearchRecord>,

    /// Guard to avoid running first-render initialization more than once.
    pub loaded: bool,
}

impl WeatherDashboard {
    pub fn new() -> Self {
        Self {
            city_input: String::new(),
            fetch: FetchState::Idle,
            history: Vec::new(),
            loaded: false,
        }
    }
}
