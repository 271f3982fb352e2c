use actix_web::{web, HttpResponse, Responder};
use common::model::record::SearchRecord;
use log::error;

use crate::config::Config;
use crate::storage;

/// Maximum number of records the history endpoint returns.
const HISTORY_LIMIT: u32 = 10;

/// Actix web handler for the `GET /api/weather/history` endpoint.
///
/// Returns the most recent searches, newest first. A storage failure
/// degrades to an empty list so the dashboard always has something to
/// render; the error itself only reaches the log.
pub async fn process(config: web::Data<Config>) -> impl Responder {
    match storage::recent_searches(&config.database_path, HISTORY_LIMIT) {
        Ok(records) => HttpResponse::Ok().json(records),
        Err(e) => {
            error!("History read failed: {}", e);
            HttpResponse::InternalServerError().json(Vec::<SearchRecord>::new())
        }
    }
}
