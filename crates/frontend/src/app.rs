use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::system::session::SessionService;
use contracts::shared::config::load_config;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = match load_config(None) {
        Ok(config) => config,
        Err(e) => {
            log::error!("invalid client configuration: {:#}", e);
            return view! {
                <div class="warning-box warning-box--error">
                    {format!("Configuration error: {}", e)}
                </div>
            }
            .into_any();
        }
    };

    // Session is loaded once here and injected; pages never read storage themselves
    provide_context(SessionService::load(&config.session.storage_prefix));
    provide_context(AppGlobalContext::new());
    provide_context(config);

    view! {
        <AppRoutes />
    }
    .into_any()
}
