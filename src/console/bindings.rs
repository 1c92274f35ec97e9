//! Declarative wiring of page controls to console actions.
//!
//! The host evaluates [`default_bindings`] once at startup and attaches a
//! listener per entry. Row controls are not listed here: they are bound per
//! render from [`crate::render::RenderedTable::rows`] and produce
//! [`Action::Row`].

use crate::domain::types::GrievanceId;
use crate::view::ids;

/// A DOM event on a static control.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Trigger {
    Click(&'static str),
    /// Enter pressed inside a text input.
    Enter(&'static str),
    /// Text input changed.
    Input(&'static str),
    /// Select value changed.
    Change(&'static str),
}

/// Event raised by a control inside a rendered table row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RowEvent {
    OpenDetail(GrievanceId),
    /// Status select changed; the value is the raw select value.
    ChangeStatus(GrievanceId, String),
    Assign(GrievanceId),
    OpenRemark(GrievanceId),
}

impl RowEvent {
    pub fn grievance_id(&self) -> GrievanceId {
        match self {
            RowEvent::OpenDetail(id)
            | RowEvent::ChangeStatus(id, _)
            | RowEvent::Assign(id)
            | RowEvent::OpenRemark(id) => *id,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    ApplyFilters,
    ResetFilters,
    NextPage,
    PrevPage,
    GoToPage(usize),
    ChangePageSize,
    SearchInput,
    SearchNow,
    Export,
    CloseDetail,
    SaveRemark,
    CloseRemark,
    ConfirmAssign,
    CancelAssign,
    Row(RowEvent),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Binding {
    pub trigger: Trigger,
    pub action: Action,
}

fn bind(trigger: Trigger, action: Action) -> Binding {
    Binding { trigger, action }
}

/// Every static control of the admin page and the action it raises.
pub fn default_bindings() -> Vec<Binding> {
    vec![
        bind(Trigger::Click(ids::APPLY_FILTERS), Action::ApplyFilters),
        bind(Trigger::Click(ids::RESET_FILTERS), Action::ResetFilters),
        bind(Trigger::Click(ids::NEXT_PAGE), Action::NextPage),
        bind(Trigger::Click(ids::PREV_PAGE), Action::PrevPage),
        bind(Trigger::Change(ids::PAGE_SIZE), Action::ChangePageSize),
        bind(Trigger::Input(ids::SEARCH), Action::SearchInput),
        bind(Trigger::Enter(ids::SEARCH), Action::SearchNow),
        bind(Trigger::Click(ids::SEARCH_BUTTON), Action::SearchNow),
        bind(Trigger::Click(ids::EXPORT_CSV), Action::Export),
        bind(Trigger::Click(ids::CLOSE_DRAWER), Action::CloseDetail),
        bind(Trigger::Click(ids::REMARK_SAVE), Action::SaveRemark),
        bind(Trigger::Click(ids::REMARK_CANCEL), Action::CloseRemark),
        bind(Trigger::Click(ids::REMARK_CLOSE), Action::CloseRemark),
        bind(Trigger::Click(ids::ASSIGN_CONFIRM), Action::ConfirmAssign),
        bind(Trigger::Enter(ids::ASSIGN_INPUT), Action::ConfirmAssign),
        bind(Trigger::Click(ids::ASSIGN_CANCEL), Action::CancelAssign),
    ]
}

/// Action bound to `trigger`, if any.
pub fn resolve(bindings: &[Binding], trigger: Trigger) -> Option<Action> {
    bindings
        .iter()
        .find(|binding| binding.trigger == trigger)
        .map(|binding| binding.action.clone())
}
