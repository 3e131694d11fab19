pub mod covid_csv;
pub mod run_log;
