//! Create/edit dialog generated from `ListResource::FORM_FIELDS`

use contracts::shared::list_resource::{DraftValue, EditMode, FieldKind, FieldSpec, ListResource};
use leptos::prelude::*;

use crate::shared::controller_signal::ControllerSignal;

/// Dialog bound to the controller's edit session. Save and Cancel are disabled while
/// the mutation is in flight; a failed save shows its message above the fields.
pub fn details_form<R: ListResource>(controller: ControllerSignal<R>, on_save: Callback<()>) -> AnyView {
    let title = move || match controller.read(|c| c.editor().mode()) {
        Some(EditMode::Update) => format!("Edit: {}", R::TITLE),
        _ => format!("New: {}", R::TITLE),
    };
    let submitting = move || controller.read(|c| c.editor().is_submitting());
    let error = move || controller.read(|c| c.editor().error().map(str::to_string));

    view! {
        <div class="modal-overlay">
            <div class="modal-surface details-form">
                <div class="details-form__header">
                    <h2 class="details-form__title">{title}</h2>
                </div>

                {move || error().map(|e| view! {
                    <div class="warning-box warning-box--error">
                        <span class="warning-box__icon">"⚠"</span>
                        <span class="warning-box__text">{e}</span>
                    </div>
                })}

                <div class="details-form__body">
                    {R::FORM_FIELDS.iter().map(|spec| field_input(controller, spec)).collect_view()}
                </div>

                <div class="details-form__actions">
                    <button
                        class="button button--primary"
                        disabled=submitting
                        on:click=move |_| on_save.run(())
                    >
                        {move || if submitting() { "Saving..." } else { "Save" }}
                    </button>
                    <button
                        class="button button--secondary"
                        disabled=submitting
                        on:click=move |_| controller.update(|c| {
                            c.cancel_edit();
                        })
                    >
                        "Cancel"
                    </button>
                </div>
            </div>
        </div>
    }
    .into_any()
}

fn field_input<R: ListResource>(controller: ControllerSignal<R>, spec: &'static FieldSpec) -> AnyView {
    let name = spec.name;
    let label = if spec.required {
        format!("{} *", spec.label)
    } else {
        spec.label.to_string()
    };
    let disabled = move || controller.read(|c| c.editor().is_submitting());

    let set = move |value: DraftValue| {
        controller.update(|c| {
            c.set_field(name, value);
        })
    };

    let input = match spec.kind {
        FieldKind::Flag => view! {
            <input
                type="checkbox"
                id=name
                prop:checked=move || controller.read(|c| {
                    c.editor().field(name).map(|v| v.as_flag()).unwrap_or(false)
                })
                disabled=disabled
                on:change=move |ev| set(DraftValue::Flag(event_target_checked(&ev)))
            />
        }
        .into_any(),
        kind => {
            let input_type = match kind {
                FieldKind::Number => "number",
                FieldKind::Date => "date",
                _ => "text",
            };
            view! {
                <input
                    type=input_type
                    id=name
                    class="form__input"
                    prop:value=move || controller.read(|c| {
                        c.editor().field(name).map(|v| v.as_text()).unwrap_or_default()
                    })
                    disabled=disabled
                    on:input=move |ev| set(DraftValue::Text(event_target_value(&ev)))
                />
            }
            .into_any()
        }
    };

    view! {
        <div class="form-group">
            <label for=name>{label}</label>
            {input}
        </div>
    }
    .into_any()
}
