//! Search box and match highlighting shared by every list page
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Delay between the last keystroke and the query update
const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Byte ranges of case-insensitive occurrences of `query` in `text`.
///
/// Empty when the query is blank, or when lowercasing changes the byte length of
/// `text` (offsets would no longer line up).
pub fn match_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    let query = query.trim().to_lowercase();
    let text_lower = text.to_lowercase();
    if query.is_empty() || text_lower.len() != text.len() {
        return Vec::new();
    }

    let mut ranges = Vec::new();
    let mut last_pos = 0;
    while let Some(pos) = text_lower[last_pos..].find(&query) {
        let start = last_pos + pos;
        let end = start + query.len();
        ranges.push((start, end));
        last_pos = end;
    }
    ranges
}

/// Wraps every occurrence of `filter` in a highlight span
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let ranges = match_ranges(text, filter);
    if ranges.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;
    for (start, end) in ranges {
        if start > last_pos {
            parts.push(view! { <span>{text[last_pos..start].to_string()}</span> }.into_any());
        }
        parts.push(view! {
            <span class="search-highlight">{text[start..end].to_string()}</span>
        }.into_any());
        last_pos = end;
    }
    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Search input with debounce and a clear button
#[component]
pub fn SearchInput(
    /// Applied query (after debounce)
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    let (input_value, set_input_value) = signal(value.get_untracked());

    // Replacing the pending timeout drops (cancels) the previous one
    let pending = StoredValue::new_local(None::<Timeout>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        let timeout = Timeout::new(SEARCH_DEBOUNCE_MS, move || on_change.run(new_value));
        pending.set_value(Some(timeout));
    };

    let is_filter_active = move || !value.get().trim().is_empty();

    let clear_filter = move |_| {
        pending.set_value(None);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                class="search-input__field"
                class:search-input__field--active=is_filter_active
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear_filter title="Clear">
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_every_occurrence_ignoring_case() {
        assert_eq!(match_ranges("Deluxe Double deluxe", "DELUXE"), vec![(0, 6), (14, 20)]);
    }

    #[test]
    fn single_character_query_highlights() {
        assert_eq!(match_ranges("abcab", "b"), vec![(1, 2), (4, 5)]);
    }

    #[test]
    fn blank_query_or_no_match_gives_nothing() {
        assert!(match_ranges("Suite", "  ").is_empty());
        assert!(match_ranges("Suite", "villa").is_empty());
    }
}
