use leptos::prelude::*;

use crate::system::session::use_session;

/// Who is working, on which hotel.
///
/// Credentials are checked by the external sign-on service; this page only
/// records the user name and the property to work on.
#[component]
pub fn SignInPage() -> impl IntoView {
    let session = use_session();
    let initial = session.current();

    let (username, set_username) = signal(initial.actor.clone().unwrap_or_default());
    let (hotel_id, set_hotel_id) = signal(initial.hotel_id.clone().unwrap_or_default());
    let (remember_me, set_remember_me) = signal(initial.remember_me);
    let (error_message, set_error_message) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let username_val = username.get().trim().to_string();
        let hotel_val = hotel_id.get().trim().to_string();
        if username_val.is_empty() {
            set_error_message.set(Some("User name is required".to_string()));
            return;
        }
        if hotel_val.is_empty() {
            set_error_message.set(Some("Hotel is required".to_string()));
            return;
        }

        set_error_message.set(None);
        session.start(username_val, hotel_val, remember_me.get());
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Hotel PMS"</h1>
                <h2>"Administration"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="username">"User"</label>
                        <input
                            type="text"
                            id="username"
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label for="hotel">"Hotel"</label>
                        <input
                            type="text"
                            id="hotel"
                            placeholder="H001"
                            prop:value=move || hotel_id.get()
                            on:input=move |ev| set_hotel_id.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group form-group--inline">
                        <input
                            type="checkbox"
                            id="remember"
                            prop:checked=move || remember_me.get()
                            on:change=move |ev| set_remember_me.set(event_target_checked(&ev))
                        />
                        <label for="remember">"Remember me"</label>
                    </div>

                    <button type="submit" class="btn-primary">"Continue"</button>
                </form>
            </div>
        </div>
    }
}
