pub mod dashboard;
pub mod fetch;
pub mod models;
pub mod output;
pub mod present;
pub mod reports;
