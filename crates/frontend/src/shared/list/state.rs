use super::envelope::ListPayload;
use super::paging;
use super::ListEntity;

/// Snapshot of one collection view.
///
/// All transitions keep the invariants `total_pages == max(1,
/// ceil(total_count / page_size))` and `1 <= page <= total_pages`; a
/// renderer never observes a half-updated snapshot because every transition
/// happens inside a single signal update.
#[derive(Debug, Clone, PartialEq)]
pub struct ListState<T> {
    /// Rows of the currently displayed page.
    pub items: Vec<T>,
    /// Full result set when the client paginates; `None` when the server
    /// sent a real paginator.
    pub all_items: Option<Vec<T>>,
    pub search_text: String,
    /// 1-based.
    pub page: usize,
    pub page_size: usize,
    pub total_count: usize,
    pub total_pages: usize,
    pub loading: bool,
    pub is_loaded: bool,
}

impl<T> ListState<T> {
    pub fn new(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            all_items: None,
            search_text: String::new(),
            page: 1,
            page_size: page_size.max(1),
            total_count: 0,
            total_pages: 1,
            loading: false,
            is_loaded: false,
        }
    }

    pub fn is_client_paginated(&self) -> bool {
        self.all_items.is_some()
    }

    /// Whether `go_to_page(n)` may proceed. Out-of-bounds targets, the
    /// current page, and navigation during a fetch are all silent no-ops.
    pub fn can_go_to(&self, n: usize) -> bool {
        !self.loading && n >= 1 && n <= self.total_pages && n != self.page
    }
}

impl<T: Clone> ListState<T> {
    /// Commit a successful fetch.
    ///
    /// The server paginator is trusted verbatim only when it says there is
    /// more than one page; otherwise the returned array is taken as the
    /// complete result set and sliced locally. Some endpoints send paginator
    /// fields even when they return everything, so `last_page > 1` is the
    /// trigger, not mere presence of metadata.
    pub fn apply_page(&mut self, payload: ListPayload<T>, requested_page: usize) {
        self.loading = false;
        self.is_loaded = true;
        match payload.meta {
            Some(meta) if meta.last_page > 1 => {
                self.items = payload.rows;
                self.all_items = None;
                self.total_count = meta.total;
                self.total_pages = meta.last_page;
                self.page = paging::clamp_page(meta.current_page, self.total_pages);
            }
            _ => {
                let all = payload.rows;
                self.total_count = all.len();
                self.total_pages = paging::total_pages(all.len(), self.page_size);
                self.page = paging::clamp_page(requested_page, self.total_pages);
                self.items = paging::slice_page(&all, self.page, self.page_size);
                self.all_items = Some(all);
            }
        }
    }

    /// Reset to the empty-but-valid state after a failed fetch. The view must
    /// never keep showing rows from before the failure.
    pub fn apply_fetch_error(&mut self) {
        self.items.clear();
        self.all_items = None;
        self.total_count = 0;
        self.total_pages = 1;
        self.page = 1;
        self.loading = false;
        self.is_loaded = true;
    }

    /// Record a new filter value. Any search change lands on page 1; the
    /// refetch itself is debounced by the controller.
    pub fn set_search(&mut self, text: String) {
        self.search_text = text;
        self.page = 1;
    }

    /// Synchronous page change in client mode; no network involved.
    pub fn reslice(&mut self, page: usize) {
        if let Some(all) = &self.all_items {
            self.page = paging::clamp_page(page, self.total_pages);
            self.items = paging::slice_page(all, self.page, self.page_size);
        }
    }

    /// Change the page size and land back on page 1.
    pub fn apply_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 1;
        if let Some(all) = &self.all_items {
            self.total_pages = paging::total_pages(all.len(), self.page_size);
            self.items = paging::slice_page(all, 1, self.page_size);
        }
    }
}

impl<T: ListEntity> ListState<T> {
    /// Drop a row from the visible page and from the client-side result set.
    ///
    /// Totals are deliberately left alone: they resync from the server right
    /// after, and the window where the count is stale is accepted.
    pub fn remove_item(&mut self, id: &str) {
        self.items.retain(|item| item.entity_id() != id);
        if let Some(all) = &mut self.all_items {
            all.retain(|item| item.entity_id() != id);
        }
    }
}

/// Monotonic fetch sequence: the commit gate that makes fetches
/// last-request-wins instead of last-response-wins.
///
/// Every fetch takes a token from [`FetchSeq::begin`]; a response may only
/// commit while its token is still current. A stale response that arrives
/// after a newer fetch began fails the gate and is discarded, regardless of
/// arrival order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchSeq {
    current: u64,
}

impl FetchSeq {
    pub fn begin(&mut self) -> u64 {
        self.current += 1;
        self.current
    }

    pub fn is_current(&self, token: u64) -> bool {
        self.current == token
    }

    /// Invalidate all outstanding tokens without starting a new fetch (view
    /// teardown, explicit cancellation).
    pub fn invalidate(&mut self) {
        self.current += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::pagination::PageMeta;
    use serde::Serialize;

    #[derive(Debug, Clone, PartialEq, Serialize)]
    struct Item {
        id: String,
    }

    impl ListEntity for Item {
        fn entity_id(&self) -> &str {
            &self.id
        }
    }

    fn items(ids: &[&str]) -> Vec<Item> {
        ids.iter().map(|id| Item { id: id.to_string() }).collect()
    }

    fn ids(rows: &[Item]) -> Vec<&str> {
        rows.iter().map(|i| i.id.as_str()).collect()
    }

    fn client_payload(rows: Vec<Item>) -> ListPayload<Item> {
        ListPayload { rows, meta: None }
    }

    #[test]
    fn full_array_is_paginated_locally() {
        // {data:{data:[1,2,3]}} with page_size 2: page 1 = [1,2], totals (3, 2)
        let mut state = ListState::<Item>::new(2);
        state.apply_page(client_payload(items(&["1", "2", "3"])), 1);

        assert_eq!(ids(&state.items), vec!["1", "2"]);
        assert_eq!(state.total_count, 3);
        assert_eq!(state.total_pages, 2);
        assert_eq!(state.page, 1);
        assert!(state.is_client_paginated());

        state.reslice(2);
        assert_eq!(ids(&state.items), vec!["3"]);
        assert_eq!(state.page, 2);
    }

    #[test]
    fn server_paginator_is_trusted_verbatim() {
        let mut state = ListState::<Item>::new(2);
        let payload = ListPayload {
            rows: items(&["21", "22"]),
            meta: Some(PageMeta {
                total: 45,
                current_page: 11,
                last_page: 23,
            }),
        };
        state.apply_page(payload, 11);

        assert_eq!(ids(&state.items), vec!["21", "22"]);
        assert_eq!(state.total_count, 45);
        assert_eq!(state.total_pages, 23);
        assert_eq!(state.page, 11);
        assert!(!state.is_client_paginated());
    }

    #[test]
    fn single_page_paginator_falls_back_to_client_mode() {
        // last_page == 1 means the array already holds everything.
        let mut state = ListState::<Item>::new(2);
        let payload = ListPayload {
            rows: items(&["1", "2", "3"]),
            meta: Some(PageMeta {
                total: 3,
                current_page: 1,
                last_page: 1,
            }),
        };
        state.apply_page(payload, 1);

        assert!(state.is_client_paginated());
        assert_eq!(ids(&state.items), vec!["1", "2"]);
        assert_eq!(state.total_pages, 2);
    }

    #[test]
    fn requested_page_is_clamped_into_bounds() {
        let mut state = ListState::<Item>::new(10);
        state.apply_page(client_payload(items(&["1", "2"])), 7);
        assert_eq!(state.page, 1);
        assert_eq!(ids(&state.items), vec!["1", "2"]);
    }

    #[test]
    fn fetch_error_resets_to_empty_valid() {
        let mut state = ListState::<Item>::new(2);
        state.apply_page(client_payload(items(&["1", "2", "3"])), 2);
        state.loading = true;
        state.apply_fetch_error();

        assert!(state.items.is_empty());
        assert_eq!(state.all_items, None);
        assert_eq!(state.total_count, 0);
        assert_eq!(state.total_pages, 1);
        assert_eq!(state.page, 1);
        assert!(!state.loading);
    }

    #[test]
    fn search_change_always_returns_to_first_page() {
        let mut state = ListState::<Item>::new(2);
        state.apply_page(client_payload(items(&["1", "2", "3", "4", "5"])), 3);
        assert_eq!(state.page, 3);

        state.set_search("молоко".to_string());
        assert_eq!(state.page, 1);
        assert_eq!(state.search_text, "молоко");

        state.set_search(String::new());
        assert_eq!(state.page, 1);
    }

    #[test]
    fn page_bounds_reject_out_of_range_targets() {
        let mut state = ListState::<Item>::new(2);
        state.apply_page(client_payload(items(&["1", "2", "3", "4", "5"])), 1);
        assert_eq!(state.total_pages, 3);

        assert!(!state.can_go_to(0));
        assert!(!state.can_go_to(4));
        assert!(!state.can_go_to(1)); // current page
        assert!(state.can_go_to(2));

        state.loading = true;
        assert!(!state.can_go_to(2));
    }

    #[test]
    fn page_size_change_resets_to_first_page() {
        let mut state = ListState::<Item>::new(2);
        state.apply_page(client_payload(items(&["1", "2", "3", "4", "5"])), 3);
        assert_eq!(state.page, 3);

        state.apply_page_size(4);
        assert_eq!(state.page, 1);
        assert_eq!(state.total_pages, 2);
        assert_eq!(ids(&state.items), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn remove_item_leaves_totals_for_resync() {
        let mut state = ListState::<Item>::new(2);
        state.apply_page(client_payload(items(&["1", "2", "3"])), 1);

        state.remove_item("2");
        assert_eq!(ids(&state.items), vec!["1"]);
        assert!(!state
            .all_items
            .as_ref()
            .is_some_and(|all| all.iter().any(|i| i.id == "2")));
        // stale until the resync fetch lands
        assert_eq!(state.total_count, 3);

        // resync against server data that no longer has id 2
        state.apply_page(client_payload(items(&["1", "3"])), 1);
        assert_eq!(ids(&state.items), vec!["1", "3"]);
        assert_eq!(state.total_count, 2);
    }

    #[test]
    fn stale_response_never_overwrites_newer_request() {
        let mut state = ListState::<Item>::new(10);
        let mut seq = FetchSeq::default();

        let token_a = seq.begin();
        let token_b = seq.begin();

        // B's response arrives first and commits.
        assert!(seq.is_current(token_b));
        state.apply_page(client_payload(items(&["b"])), 1);

        // A's response arrives late; the gate rejects it before any commit.
        assert!(!seq.is_current(token_a));
        assert_eq!(ids(&state.items), vec!["b"]);
    }

    #[test]
    fn invalidate_cancels_all_outstanding_tokens() {
        let mut seq = FetchSeq::default();
        let token = seq.begin();
        seq.invalidate();
        assert!(!seq.is_current(token));
    }
}
