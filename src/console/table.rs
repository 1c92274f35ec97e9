//! Loading the grievance list and the filter/pagination transitions.

use chrono::{DateTime, Utc};

use crate::console::{GrievanceConsole, next_generation};
use crate::domain::filter::{FilterState, parse_page_size};
use crate::domain::grievance::GrievanceRecord;
use crate::dto::api::Page;
use crate::errors::{ConsoleError, ConsoleResult};
use crate::http::{ApiResult, Transport};
use crate::query::build_query;
use crate::render::LOAD_FAILED_MESSAGE;
use crate::view::ConsoleView;

pub(crate) const LIST_PATH: &str = "grievances/";

impl<T: Transport, V: ConsoleView> GrievanceConsole<T, V> {
    /// Loads `page` with the filters currently entered in the view.
    ///
    /// Failures are rendered as an inline error row; a response that was
    /// overtaken by a newer reload is dropped unrendered.
    pub async fn reload(&self, page: usize) {
        let state = self.read_state(page);
        *self.state.borrow_mut() = state.clone();
        let generation = next_generation(&self.list_generation);

        self.bound_rows.borrow_mut().clear();
        match self.renderer.skeleton() {
            Ok(html) => self.view.replace_table_body(&html, &[]),
            Err(e) => log::error!("Failed to render loading rows: {e}"),
        }

        let result = self.fetch_page(&state).await;

        if generation != self.list_generation.get() {
            log::debug!("Discarding stale grievance list response (generation {generation})");
            return;
        }

        let rendered = result
            .map_err(ConsoleError::from)
            .and_then(|page| self.render_page(&page, &state));
        if let Err(e) = rendered {
            log::error!("Failed to load grievances: {e}");
            self.render_load_error();
        }
    }

    pub async fn set_page(&self, page: usize) {
        self.reload(page).await;
    }

    pub async fn go_to_page(&self, page: usize) {
        self.set_page(page).await;
    }

    pub async fn next_page(&self) {
        self.reload(self.current_page() + 1).await;
    }

    /// Does nothing on the first page.
    pub async fn prev_page(&self) {
        let page = self.current_page();
        if page > 1 {
            self.reload(page - 1).await;
        }
    }

    pub async fn apply_filters(&self) {
        self.debounce.borrow_mut().cancel();
        self.reload(1).await;
    }

    /// Clears every filter control and reloads the first page.
    pub async fn reset(&self) {
        self.view.clear_filter_inputs();
        self.debounce.borrow_mut().cancel();
        self.reload(1).await;
    }

    pub async fn change_page_size(&self) {
        self.reload(1).await;
    }

    /// Records a keystroke in the search box.
    pub fn search_input(&self, now: DateTime<Utc>) {
        self.debounce.borrow_mut().arm(now);
    }

    /// Applies the search immediately, dropping any pending debounce.
    pub async fn search_now(&self) {
        self.apply_filters().await;
    }

    /// Applies the search once typing has paused. Returns whether it fired.
    pub async fn tick(&self, now: DateTime<Utc>) -> bool {
        let due = self.debounce.borrow_mut().fire(now);
        if due {
            self.reload(1).await;
        }
        due
    }

    /// `true` while a debounced search is waiting to fire.
    pub fn search_pending(&self) -> bool {
        self.debounce.borrow().deadline().is_some()
    }

    pub(crate) async fn fetch_page(
        &self,
        state: &FilterState,
    ) -> ApiResult<Page<GrievanceRecord>> {
        let path = format!("{LIST_PATH}{}", build_query(state));
        self.api.get_json(&path).await
    }

    fn read_state(&self, page: usize) -> FilterState {
        let inputs = self.view.filter_inputs();
        let page_size = parse_page_size(self.view.page_size_input().as_deref())
            .unwrap_or(self.config.default_page_size);
        FilterState::from_inputs(page, page_size, &inputs)
    }

    fn render_page(&self, page: &Page<GrievanceRecord>, state: &FilterState) -> ConsoleResult<()> {
        let table = self
            .renderer
            .table(page, state.page(), state.page_size())?;

        self.view.replace_table_body(&table.html, &table.rows);
        *self.bound_rows.borrow_mut() = table.rows.iter().map(|row| row.grievance_id).collect();
        self.view.set_total_count(table.page_info.total);
        self.view.set_page_info(&table.page_info);
        Ok(())
    }

    fn render_load_error(&self) {
        match self.renderer.message_row(LOAD_FAILED_MESSAGE) {
            Ok(html) => self.view.replace_table_body(&html, &[]),
            Err(e) => log::error!("Failed to render error row: {e}"),
        }
    }
}
