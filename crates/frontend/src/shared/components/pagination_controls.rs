use crate::shared::icons::icon;
use contracts::shared::list_resource::PageSize;
use leptos::prelude::*;

/// Prev/next navigation with a page-size selector.
///
/// `current_page` is 1-based. Navigation is disabled while a fetch is in flight.
#[component]
pub fn PaginationControls(
    #[prop(into)]
    current_page: Signal<usize>,

    #[prop(into)]
    total_pages: Signal<usize>,

    /// Number of rows after filtering
    #[prop(into)]
    total_count: Signal<usize>,

    #[prop(into)]
    page_size: Signal<PageSize>,

    #[prop(into)]
    can_go_prev: Signal<bool>,

    #[prop(into)]
    can_go_next: Signal<bool>,

    on_prev: Callback<()>,

    on_next: Callback<()>,

    on_page_size_change: Callback<PageSize>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_prev.run(())
                disabled=move || !can_go_prev.get()
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || format!(
                    "Page {} of {} ({})",
                    current_page.get(),
                    total_pages.get(),
                    total_count.get()
                )}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_next.run(())
                disabled=move || !can_go_next.get()
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    let parsed = event_target_value(&ev)
                        .parse::<usize>()
                        .ok()
                        .and_then(|n| PageSize::try_from(n).ok());
                    if let Some(size) = parsed {
                        on_page_size_change.run(size);
                    }
                }
                prop:value=move || page_size.get().get().to_string()
            >
                {PageSize::ALL.iter().map(|&size| {
                    view! {
                        <option value=size.get().to_string() selected=move || page_size.get() == size>
                            {size.get().to_string()}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
