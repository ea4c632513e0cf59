pub mod common;
pub mod h001_meal_allocation;
pub mod h002_sales_executive;
pub mod h003_pos_center;
pub mod h004_rate_plan;
pub mod h005_reservation_source;
pub mod h006_tax_table;
pub mod h007_event_type;
pub mod h008_venue;
pub mod h009_market;
pub mod h010_season;
pub mod h011_employee;
pub mod h012_supplier;
pub mod h013_agent;
pub mod h014_guest_profile;
