//! The grievance console controller.
//!
//! [`GrievanceConsole`] owns the filter and pagination state, sequences
//! requests against the admin API and pushes rendered markup to the
//! [`ConsoleView`]. Every operation takes `&self` and is safe to run
//! concurrently with others on a single thread: state lives in cells and
//! no borrow is held across an `.await`.

use std::cell::{Cell, RefCell};

use chrono::{DateTime, Utc};

use crate::domain::filter::FilterState;
use crate::domain::types::GrievanceId;
use crate::dto::filters::{AnalyticsResponse, UserStatusResponse};
use crate::errors::ConsoleResult;
use crate::http::{ApiClient, Transport};
use crate::models::config::ConsoleConfig;
use crate::render::Renderer;
use crate::view::ConsoleView;

pub mod bindings;
pub mod debounce;
pub mod detail;
pub mod export;
pub mod remark;
pub mod rows;
pub mod table;

use bindings::Action;
use debounce::SearchDebounce;

const ANALYTICS_PATH: &str = "analytics/";
const USER_STATUS_PATH: &str = "user-status/";

pub struct GrievanceConsole<T, V> {
    api: ApiClient<T>,
    view: V,
    renderer: Renderer,
    config: ConsoleConfig,
    state: RefCell<FilterState>,
    list_generation: Cell<u64>,
    detail_generation: Cell<u64>,
    /// Grievances whose rows are currently rendered and bound.
    bound_rows: RefCell<Vec<GrievanceId>>,
    remark_target: Cell<Option<GrievanceId>>,
    assign_target: Cell<Option<GrievanceId>>,
    debounce: RefCell<SearchDebounce>,
}

impl<T: Transport, V: ConsoleView> GrievanceConsole<T, V> {
    pub fn new(api: ApiClient<T>, view: V, config: ConsoleConfig) -> ConsoleResult<Self> {
        let renderer = Renderer::new(config.remark_preview_limit)?;
        Ok(Self {
            api,
            view,
            renderer,
            state: RefCell::new(FilterState::new(1, config.default_page_size)),
            list_generation: Cell::new(0),
            detail_generation: Cell::new(0),
            bound_rows: RefCell::new(Vec::new()),
            remark_target: Cell::new(None),
            assign_target: Cell::new(None),
            debounce: RefCell::new(SearchDebounce::new(config.search_debounce_ms)),
            config,
        })
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn api(&self) -> &ApiClient<T> {
        &self.api
    }

    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    /// Canonical state of the last reload.
    pub fn state(&self) -> FilterState {
        self.state.borrow().clone()
    }

    pub fn current_page(&self) -> usize {
        self.state.borrow().page()
    }

    /// Grievances whose row events are currently accepted.
    pub fn bound_rows(&self) -> Vec<GrievanceId> {
        self.bound_rows.borrow().clone()
    }

    /// Populates the filter selects, then loads the first page.
    pub async fn init(&self) {
        self.load_filter_options().await;
        self.reload(1).await;
    }

    /// Fills the category and officer selects. Failures leave the selects as they are.
    pub async fn load_filter_options(&self) {
        match self.api.get_json::<AnalyticsResponse>(ANALYTICS_PATH).await {
            Ok(analytics) => self.view.set_category_options(&analytics.category_options()),
            Err(e) => log::warn!("Failed to load category options: {e}"),
        }

        match self.api.get_json::<UserStatusResponse>(USER_STATUS_PATH).await {
            Ok(status) => self.view.set_officer_options(&status.officer_options()),
            Err(e) => log::warn!("Failed to load officer options: {e}"),
        }
    }

    /// Runs the action bound to an operator event.
    ///
    /// `now` drives the search debounce.
    pub async fn dispatch(&self, action: Action, now: DateTime<Utc>) {
        match action {
            Action::ApplyFilters => self.apply_filters().await,
            Action::ResetFilters => self.reset().await,
            Action::NextPage => self.next_page().await,
            Action::PrevPage => self.prev_page().await,
            Action::GoToPage(page) => self.go_to_page(page).await,
            Action::ChangePageSize => self.change_page_size().await,
            Action::SearchInput => self.search_input(now),
            Action::SearchNow => self.search_now().await,
            Action::Export => self.export().await,
            Action::CloseDetail => self.close_detail(),
            Action::SaveRemark => self.save_remark().await,
            Action::CloseRemark => self.close_remark(),
            Action::ConfirmAssign => self.confirm_assign().await,
            Action::CancelAssign => self.cancel_assign(),
            Action::Row(event) => self.on_row_event(event).await,
        }
    }
}

fn next_generation(counter: &Cell<u64>) -> u64 {
    let generation = counter.get().wrapping_add(1);
    counter.set(generation);
    generation
}
