//! Small presentation helpers for the dashboard view.

use js_sys::{Date, Object, Reflect};
use wasm_bindgen::JsValue;

/// Formats a unix-seconds timestamp as a short day label, e.g. "Sat, Aug 23".
pub fn format_day(unix_seconds: i64) -> String {
    let date = Date::new(&JsValue::from_f64(unix_seconds as f64 * 1000.0));
    let options = Object::new();
    let _ = Reflect::set(
        &options,
        &JsValue::from_str("weekday"),
        &JsValue::from_str("short"),
    );
    let _ = Reflect::set(
        &options,
        &JsValue::from_str("month"),
        &JsValue::from_str("short"),
    );
    let _ = Reflect::set(
        &options,
        &JsValue::from_str("day"),
        &JsValue::from_str("numeric"),
    );
    date.to_locale_date_string("en-US", &options).into()
}

/// URL of the provider's icon image for an icon code.
pub fn icon_url(icon: &str) -> String {
    format!("https://openweathermap.org/img/wn/{}@2x.png", icon)
}
