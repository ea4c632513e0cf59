use crate::layout::center::Center;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::sidebar::Sidebar;
use crate::layout::Shell;
use crate::system::pages::SignInPage;
use crate::system::session::use_session;
use contracts::shared::session::Theme;
use leptos::prelude::*;
// Router components are not used; the active page lives in AppGlobalContext (?active=)

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Initialize router integration. This runs once when the component is created.
    ctx.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <Center /> }.into_any()
        />
    }
}

/// Session gate: the sign-in page until a user and hotel are selected
#[component]
pub fn AppRoutes() -> impl IntoView {
    let session = use_session();
    let ready = move || {
        let current = session.session.get();
        current.actor.is_some() && current.hotel_id.is_some()
    };
    let theme = move || match session.session.get().preferences.theme {
        Theme::Dark => "dark",
        Theme::Light => "light",
    };
    let accent = move || format!("--color-accent: {}", session.session.get().preferences.accent_color);

    view! {
        <div class="app-root" data-theme=theme style=accent>
            <Show when=ready fallback=|| view! { <SignInPage /> }>
                <MainLayout />
            </Show>
        </div>
    }
}
