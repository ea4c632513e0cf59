use super::edit_session::EditMode;
use super::error::ApiError;

/// Identity of one in-flight request. Only the most recently issued token of each kind
/// may apply its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestToken(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Rows replaced
    Applied,
    /// Request failed; previous rows kept, `error` set
    Failed(String),
    /// A newer fetch was issued meanwhile; result dropped
    Stale,
}

/// Canonical copy of one entity collection plus request flags
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceStore<T> {
    rows: Vec<T>,
    loading: bool,
    error: Option<String>,
    creating: bool,
    updating: bool,
    fetch_seq: u64,
    mutation_seq: u64,
}

impl<T> Default for ResourceStore<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            loading: false,
            error: None,
            creating: false,
            updating: false,
            fetch_seq: 0,
            mutation_seq: 0,
        }
    }
}

impl<T> ResourceStore<T> {
    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn creating(&self) -> bool {
        self.creating
    }

    pub fn updating(&self) -> bool {
        self.updating
    }

    /// Start a list request; any fetch still in flight becomes stale
    pub fn begin_fetch(&mut self) -> RequestToken {
        self.fetch_seq += 1;
        self.loading = true;
        RequestToken(self.fetch_seq)
    }

    pub fn finish_fetch(&mut self, token: RequestToken, result: Result<Vec<T>, ApiError>) -> FetchOutcome {
        if token.0 != self.fetch_seq {
            log::debug!("discarding stale list response #{} (latest #{})", token.0, self.fetch_seq);
            return FetchOutcome::Stale;
        }
        self.loading = false;
        match result {
            Ok(rows) => {
                self.rows = rows;
                self.error = None;
                FetchOutcome::Applied
            }
            Err(e) => {
                let message = e.to_string();
                log::warn!("list request failed: {}", message);
                self.error = Some(message.clone());
                FetchOutcome::Failed(message)
            }
        }
    }

    /// Start a create/update; any mutation still in flight becomes stale
    pub fn begin_mutation(&mut self, mode: EditMode) -> RequestToken {
        self.mutation_seq += 1;
        match mode {
            EditMode::Create => self.creating = true,
            EditMode::Update => self.updating = true,
        }
        RequestToken(self.mutation_seq)
    }

    /// Clears the mutation flags; `false` if the token is stale
    pub fn finish_mutation(&mut self, token: RequestToken) -> bool {
        if token.0 != self.mutation_seq {
            log::debug!("discarding stale mutation response #{} (latest #{})", token.0, self.mutation_seq);
            return false;
        }
        self.creating = false;
        self.updating = false;
        true
    }

    /// Forget rows and error, and drop every in-flight request (hotel switch, sign-out)
    pub fn clear(&mut self) {
        self.invalidate();
        self.rows.clear();
        self.error = None;
    }

    /// Drop every in-flight request
    pub fn invalidate(&mut self) {
        self.fetch_seq += 1;
        self.mutation_seq += 1;
        self.loading = false;
        self.creating = false;
        self.updating = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_replaces_rows_and_clears_error() {
        let mut store = ResourceStore::default();
        let t = store.begin_fetch();
        assert!(store.loading());
        store.finish_fetch(t, Err(ApiError::Network("offline".into())));
        assert!(store.error().is_some());

        let t = store.begin_fetch();
        assert_eq!(store.finish_fetch(t, Ok(vec![1, 2, 3])), FetchOutcome::Applied);
        assert_eq!(store.rows(), &[1, 2, 3]);
        assert_eq!(store.error(), None);
        assert!(!store.loading());
    }

    #[test]
    fn failure_keeps_previous_rows() {
        let mut store = ResourceStore::default();
        let t = store.begin_fetch();
        store.finish_fetch(t, Ok(vec!["a", "b"]));
        let t = store.begin_fetch();
        let outcome = store.finish_fetch(t, Err(ApiError::http(500, "")));
        assert_eq!(outcome, FetchOutcome::Failed("HTTP 500".into()));
        assert_eq!(store.rows(), &["a", "b"]);
        assert_eq!(store.error(), Some("HTTP 500"));
    }

    #[test]
    fn out_of_order_responses_keep_the_latest_request() {
        let mut store = ResourceStore::default();
        let first = store.begin_fetch();
        let second = store.begin_fetch();

        assert_eq!(store.finish_fetch(second, Ok(vec![2])), FetchOutcome::Applied);
        assert_eq!(store.finish_fetch(first, Ok(vec![1])), FetchOutcome::Stale);
        assert_eq!(store.rows(), &[2]);
        assert!(!store.loading());
    }

    #[test]
    fn loading_stays_until_latest_fetch_returns() {
        let mut store: ResourceStore<u8> = ResourceStore::default();
        let first = store.begin_fetch();
        let second = store.begin_fetch();
        store.finish_fetch(first, Ok(vec![1]));
        assert!(store.loading());
        assert!(store.rows().is_empty());
        store.finish_fetch(second, Ok(vec![]));
        assert!(!store.loading());
    }

    #[test]
    fn mutation_flags_follow_their_token() {
        let mut store: ResourceStore<u8> = ResourceStore::default();
        let create = store.begin_mutation(EditMode::Create);
        assert!(store.creating());
        assert!(store.finish_mutation(create));
        assert!(!store.creating());

        let stale = store.begin_mutation(EditMode::Update);
        store.invalidate();
        assert!(!store.updating());
        assert!(!store.finish_mutation(stale));
    }
}
