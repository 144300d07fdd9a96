pub mod job_card;
pub mod loading_state;
pub mod navbar;
pub mod results_view;
pub mod upload_zone;
