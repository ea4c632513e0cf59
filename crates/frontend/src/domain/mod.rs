//! Page registry: one generic list page per hotel entity

use contracts::domain::h001_meal_allocation::MealAllocation;
use contracts::domain::h002_sales_executive::SalesExecutive;
use contracts::domain::h003_pos_center::PosCenter;
use contracts::domain::h004_rate_plan::RatePlan;
use contracts::domain::h005_reservation_source::ReservationSource;
use contracts::domain::h006_tax_table::TaxTable;
use contracts::domain::h007_event_type::EventType;
use contracts::domain::h008_venue::Venue;
use contracts::domain::h009_market::Market;
use contracts::domain::h010_season::Season;
use contracts::domain::h011_employee::Employee;
use contracts::domain::h012_supplier::Supplier;
use contracts::domain::h013_agent::TravelAgent;
use contracts::domain::h014_guest_profile::GuestProfile;
use contracts::shared::list_resource::ListResource;
use leptos::prelude::AnyView;

use crate::shared::list_page::resource_list_page;

#[derive(Clone, Copy)]
pub struct PageEntry {
    pub key: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
    pub render: fn() -> AnyView,
}

fn entry<R: ListResource>(icon: &'static str) -> PageEntry {
    PageEntry {
        key: R::KEY,
        title: R::TITLE,
        icon,
        render: resource_list_page::<R>,
    }
}

/// Sidebar groups: (label, pages)
pub fn menu() -> Vec<(&'static str, Vec<PageEntry>)> {
    vec![
        (
            "Front office",
            vec![
                entry::<RatePlan>("tag"),
                entry::<Season>("calendar"),
                entry::<MealAllocation>("utensils"),
                entry::<ReservationSource>("globe"),
                entry::<Market>("globe"),
                entry::<GuestProfile>("contact"),
            ],
        ),
        (
            "Sales & events",
            vec![
                entry::<SalesExecutive>("user"),
                entry::<TravelAgent>("briefcase"),
                entry::<EventType>("calendar"),
                entry::<Venue>("building"),
            ],
        ),
        (
            "Finance & back office",
            vec![
                entry::<TaxTable>("percent"),
                entry::<PosCenter>("store"),
                entry::<Supplier>("truck"),
                entry::<Employee>("users"),
            ],
        ),
    ]
}

pub fn find_page(key: &str) -> Option<PageEntry> {
    menu()
        .into_iter()
        .flat_map(|(_, pages)| pages)
        .find(|page| page.key == key)
}
