use crate::domain::find_page;
use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

/// Renders the active page; a new page instance is created on every switch
#[component]
pub fn Center() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    move || match ctx.active.get().as_deref().and_then(find_page) {
        Some(page) => (page.render)(),
        None => view! {
            <div class="page page--empty">
                <p>"Select a directory in the menu"</p>
            </div>
        }
        .into_any(),
    }
}
