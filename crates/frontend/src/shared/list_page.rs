//! Generic admin list page
//!
//! Renders any `ListResource`: header actions, search, fetch-error banner, sortable
//! table, pagination and the create/edit dialog. All state lives in one
//! `ListController`; this module only wires it to the DOM and the REST binding.

use contracts::shared::config::ClientConfig;
use contracts::shared::list_resource::export::to_csv;
use contracts::shared::list_resource::{
    refresh, submit, ListController, ListResource, PageSize, Searchable, SubmitOutcome,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::Arc;

use crate::shared::api_utils::api_base;
use crate::shared::components::PaginationControls;
use crate::shared::controller_signal::ControllerSignal;
use crate::shared::details_form::details_form;
use crate::shared::export::download_csv;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::shared::rest_api::RestResourceApi;
use crate::system::session::use_session;

/// One table row, already formatted
#[derive(Clone, PartialEq)]
struct RowView {
    id: String,
    cells: Vec<(String, bool)>,
}

fn row_view<R: ListResource>(row: &R) -> RowView {
    let projected = R::search_value(row);
    RowView {
        id: row.row_id(),
        cells: R::COLUMNS
            .iter()
            .map(|column| (column.cell(&projected), R::SEARCH_FIELDS.contains(&column.field)))
            .collect(),
    }
}

pub fn resource_list_page<R: ListResource>() -> AnyView {
    let config = use_context::<ClientConfig>().expect("ClientConfig not found in context");
    let session = use_session();
    let base_url = api_base(&config);

    let controller = ControllerSignal::new(ListController::<R>::new(
        session.current(),
        config.list.default_page_size,
    ));
    let api = StoredValue::new(Arc::new(RestResourceApi::<R>::new(
        base_url.clone(),
        session.current(),
    )));
    let (export_error, set_export_error) = signal(Option::<String>::None);

    let fetch = move || {
        let api = api.get_value();
        spawn_local(async move {
            if let Some(outcome) = refresh(&controller, api.as_ref()).await {
                log::debug!("{} fetch: {:?}", R::TITLE, outcome);
            }
        });
    };

    // Runs on mount and again whenever the session changes (hotel switch)
    Effect::new(move |_| {
        let current = session.session.get();
        controller.update(|c| c.replace_session(current.clone()));
        api.set_value(Arc::new(RestResourceApi::new(base_url.clone(), current)));
        fetch();
    });

    let save = Callback::new(move |_: ()| {
        let api = api.get_value();
        spawn_local(async move {
            match submit(&controller, api.as_ref()).await {
                Ok(SubmitOutcome::Saved) => log::info!("{} saved", R::TITLE),
                Ok(outcome) => log::debug!("{} save: {:?}", R::TITLE, outcome),
                Err(e) => log::debug!("{} save not sent: {}", R::TITLE, e),
            }
        });
    });

    let export = move |_| {
        let csv = controller.read(|c| to_csv(&c.filtered_rows(), R::COLUMNS));
        let result = download_csv(&csv, &format!("{}.csv", R::KEY));
        if let Err(e) = &result {
            log::warn!("{} export failed: {}", R::TITLE, e);
        }
        set_export_error.set(result.err());
    };

    let rows = Memo::new(move |_| {
        controller.read(|c| c.visible_rows().iter().map(row_view::<R>).collect::<Vec<_>>())
    });
    let query = Memo::new(move |_| controller.read(|c| c.query().to_string()));
    let loading = Memo::new(move |_| controller.read(|c| c.loading()));
    let fetch_error = Memo::new(move |_| controller.read(|c| c.fetch_error().map(str::to_string)));
    let dialog_open = Memo::new(move |_| controller.read(|c| c.editor().is_open()));
    let column_count = R::COLUMNS.len().to_string();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{R::TITLE}</h1>
                    <Show when=move || loading.get()>
                        <span class="header__badge">"Loading..."</span>
                    </Show>
                </div>
                <div class="header__actions">
                    <SearchInput
                        value=Signal::derive(move || query.get())
                        on_change=Callback::new(move |value: String| controller.update(|c| c.set_query(value)))
                    />
                    <button class="button button--primary" on:click=move |_| controller.update(|c| {
                        c.open_create();
                    })>
                        {icon("plus")}
                        "Create"
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        "Refresh"
                    </button>
                    <button class="button button--secondary" on:click=export>
                        {icon("download")}
                        "Export"
                    </button>
                </div>
            </div>

            {move || fetch_error.get().or_else(|| export_error.get()).map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            {R::COLUMNS.iter().map(|column| {
                                let field = column.field;
                                view! {
                                    <th
                                        class="table__header-cell table__header-cell--sortable"
                                        on:click=move |_| controller.update(|c| c.toggle_sort(field))
                                    >
                                        {column.label}
                                        {move || controller.read(|c| c.sort().indicator(field))}
                                    </th>
                                }
                            }).collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = rows.get();
                            if rows.is_empty() {
                                let text = if loading.get() { "Loading..." } else { "No results" };
                                return view! {
                                    <tr>
                                        <td class="table__cell table__cell--empty" colspan=column_count.clone()>{text}</td>
                                    </tr>
                                }.into_any();
                            }
                            let query = query.get();
                            rows.into_iter().map(|row| {
                                let id = row.id;
                                view! {
                                    <tr
                                        class="table__row"
                                        on:click=move |_| controller.update(|c| {
                                            c.open_edit(&id);
                                        })
                                    >
                                        {row.cells.into_iter().map(|(text, searchable)| {
                                            let content = if searchable {
                                                highlight_matches(&text, &query)
                                            } else {
                                                view! { <span>{text}</span> }.into_any()
                                            };
                                            view! { <td class="table__cell">{content}</td> }
                                        }).collect_view()}
                                    </tr>
                                }
                            }).collect_view().into_any()
                        }}
                    </tbody>
                </table>
            </div>

            <PaginationControls
                current_page=Signal::derive(move || controller.read(|c| c.page_index()))
                total_pages=Signal::derive(move || controller.read(|c| c.total_pages()))
                total_count=Signal::derive(move || controller.read(|c| c.filtered_count()))
                page_size=Signal::derive(move || controller.read(|c| c.page_size()))
                can_go_prev=Signal::derive(move || controller.read(|c| c.can_go_prev()))
                can_go_next=Signal::derive(move || controller.read(|c| c.can_go_next()))
                on_prev=Callback::new(move |_| controller.update(|c| {
                    c.prev_page();
                }))
                on_next=Callback::new(move |_| controller.update(|c| {
                    c.next_page();
                }))
                on_page_size_change=Callback::new(move |size: PageSize| controller.update(|c| c.set_page_size(size)))
            />

            <Show when=move || dialog_open.get()>
                {move || details_form::<R>(controller, save)}
            </Show>
        </div>
    }
    .into_any()
}
