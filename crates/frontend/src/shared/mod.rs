pub mod api_utils;
pub mod components;
pub mod controller_signal;
pub mod details_form;
pub mod export;
pub mod icons;
pub mod list_page;
pub mod list_utils;
pub mod rest_api;
pub mod storage;
