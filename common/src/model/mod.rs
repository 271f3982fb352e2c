pub mod forecast;
pub mod record;
