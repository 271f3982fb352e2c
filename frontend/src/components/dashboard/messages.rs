use common::model::forecast::ForecastResponse;
use common::model::record::SearchRecord;

pub enum Msg {
    /// The city input changed.
    UpdateCity(String),
    /// Submit the current input (search button or Enter key).
    Submit,
    /// Start a lookup for the given city, from the form or the history panel.
    SubmitCity(String),
    /// The forecast request resolved successfully.
    ForecastLoaded(ForecastResponse),
    /// The forecast request failed (any transport or server failure).
    ForecastFailed,
    /// Refresh the history panel from the backend.
    LoadHistory,
    /// The history request resolved.
    HistoryLoaded(Vec<SearchRecord>),
}
