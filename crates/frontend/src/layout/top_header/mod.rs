//! Top bar: sidebar toggle, application title and the session bar
//! (hotel, user, theme, sign-out).

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::session::use_session;
use contracts::shared::session::Theme;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let session = use_session();

    let hotel = move || session.session.get().hotel_id.clone().unwrap_or_default();
    let user = move || {
        session
            .session
            .get()
            .actor
            .clone()
            .unwrap_or_else(|| "Guest".to_string())
    };
    let is_dark = move || session.session.get().preferences.theme == Theme::Dark;

    let on_hotel_change = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev).trim().to_string();
        if !value.is_empty() && Some(&value) != session.current().hotel_id.as_ref() {
            log::info!("switching hotel to '{}'", value);
            session.switch_hotel(value);
        }
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if ctx.left_open.get() { "Hide menu" } else { "Show menu" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"Hotel PMS Administration"</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__hotel" title="Hotel">
                    {icon("building")}
                    <input
                        type="text"
                        class="top-header__hotel-input"
                        prop:value=hotel
                        on:change=on_hotel_change
                    />
                </div>

                <button
                    class="top-header__icon-btn"
                    on:click=move |_| session.set_theme(if is_dark() { Theme::Light } else { Theme::Dark })
                    title="Theme"
                >
                    {move || if is_dark() { "☀" } else { "☾" }}
                </button>

                <div class="top-header__user">
                    {icon("user")}
                    <span>{user}</span>
                </div>

                <button class="top-header__icon-btn" on:click=move |_| session.sign_out() title="Sign out">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
