//! Shared helpers for integration tests.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;

use futures::channel::oneshot;
use grievance_console::console::GrievanceConsole;
use grievance_console::domain::filter::FilterInputs;
use grievance_console::domain::types::GrievanceId;
use grievance_console::dto::filters::FilterOption;
use grievance_console::http::csrf::CsrfToken;
use grievance_console::http::{ApiClient, ApiRequest, Method, RawResponse, Transport, TransportError};
use grievance_console::models::config::ConsoleConfig;
use grievance_console::pagination::PageInfo;
use grievance_console::render::{DetailView, RowBinding};
use grievance_console::view::{ConsoleView, Download};
use serde_json::Value;

pub const API_BASE: &str = "/adminpanel/api/";

/// Reply handed out for the next request.
pub enum Reply {
    Ready(Result<RawResponse, TransportError>),
    /// Completes when the test sends on the paired channel.
    Deferred(oneshot::Receiver<RawResponse>),
}

impl Reply {
    pub fn json(status: u16, body: Value) -> Self {
        Reply::Ready(Ok(RawResponse {
            status,
            content_type: Some("application/json".into()),
            body: body.to_string().into_bytes(),
        }))
    }

    pub fn status(status: u16) -> Self {
        Reply::Ready(Ok(RawResponse {
            status,
            content_type: Some("text/html".into()),
            body: b"<h1>Server Error</h1>".to_vec(),
        }))
    }

    pub fn network_error() -> Self {
        Reply::Ready(Err(TransportError("connection reset".into())))
    }

    /// A reply the test completes later, in any order.
    pub fn deferred() -> (Self, oneshot::Sender<RawResponse>) {
        let (sender, receiver) = oneshot::channel();
        (Reply::Deferred(receiver), sender)
    }
}

pub fn json_response(body: Value) -> RawResponse {
    RawResponse {
        status: 200,
        content_type: Some("application/json".into()),
        body: body.to_string().into_bytes(),
    }
}

/// In-memory transport answering requests in order from a script.
#[derive(Default)]
pub struct ScriptedTransport {
    replies: RefCell<VecDeque<Reply>>,
    requests: RefCell<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    pub fn new(replies: impl IntoIterator<Item = Reply>) -> Self {
        Self {
            replies: RefCell::new(replies.into_iter().collect()),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn push(&self, reply: Reply) {
        self.replies.borrow_mut().push_back(reply);
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    /// `METHOD url` of every request sent so far.
    pub fn calls(&self) -> Vec<String> {
        self.requests
            .borrow()
            .iter()
            .map(|request| format!("{} {}", request.method, request.url))
            .collect()
    }

    pub fn body_json(&self, index: usize) -> Value {
        let requests = self.requests.borrow();
        serde_json::from_slice(requests[index].body.as_deref().unwrap()).unwrap()
    }
}

impl Transport for ScriptedTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, TransportError> {
        self.requests.borrow_mut().push(request);
        let reply = self.replies.borrow_mut().pop_front();
        match reply {
            Some(Reply::Ready(result)) => result,
            Some(Reply::Deferred(receiver)) => receiver
                .await
                .map_err(|_| TransportError("reply dropped".into())),
            None => Err(TransportError("no scripted reply".into())),
        }
    }
}

/// Everything the console did to the page, in order.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewEvent {
    ClearInputs,
    CategoryOptions(Vec<FilterOption>),
    OfficerOptions(Vec<FilterOption>),
    TableBody { html: String, rows: Vec<GrievanceId> },
    TotalCount(u64),
    PageInfo(String),
    ShowDetail(DetailView),
    DetailBody(String),
    HideDetail,
    OpenRemark(GrievanceId),
    CloseRemark,
    OpenAssign(GrievanceId),
    CloseAssign,
    Alert(String),
    Download(Download),
}

/// View double with settable controls that records every call.
#[derive(Default)]
pub struct RecordingView {
    pub inputs: RefCell<FilterInputs>,
    pub page_size: RefCell<Option<String>>,
    pub remark: RefCell<String>,
    pub assign: RefCell<String>,
    events: RefCell<Vec<ViewEvent>>,
}

impl RecordingView {
    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.borrow().clone()
    }

    pub fn clear_events(&self) {
        self.events.borrow_mut().clear();
    }

    pub fn alerts(&self) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                ViewEvent::Alert(message) => Some(message.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn downloads(&self) -> Vec<Download> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                ViewEvent::Download(file) => Some(file.clone()),
                _ => None,
            })
            .collect()
    }

    /// Last table body written, with the rows bound to it.
    pub fn table(&self) -> Option<(String, Vec<GrievanceId>)> {
        self.events.borrow().iter().rev().find_map(|event| match event {
            ViewEvent::TableBody { html, rows } => Some((html.clone(), rows.clone())),
            _ => None,
        })
    }

    pub fn page_info(&self) -> Option<String> {
        self.events.borrow().iter().rev().find_map(|event| match event {
            ViewEvent::PageInfo(label) => Some(label.clone()),
            _ => None,
        })
    }

    pub fn detail(&self) -> Option<DetailView> {
        self.events.borrow().iter().rev().find_map(|event| match event {
            ViewEvent::ShowDetail(detail) => Some(detail.clone()),
            _ => None,
        })
    }

    fn record(&self, event: ViewEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl ConsoleView for RecordingView {
    fn filter_inputs(&self) -> FilterInputs {
        self.inputs.borrow().clone()
    }

    fn page_size_input(&self) -> Option<String> {
        self.page_size.borrow().clone()
    }

    fn clear_filter_inputs(&self) {
        *self.inputs.borrow_mut() = FilterInputs::default();
        self.record(ViewEvent::ClearInputs);
    }

    fn set_category_options(&self, options: &[FilterOption]) {
        self.record(ViewEvent::CategoryOptions(options.to_vec()));
    }

    fn set_officer_options(&self, options: &[FilterOption]) {
        self.record(ViewEvent::OfficerOptions(options.to_vec()));
    }

    fn replace_table_body(&self, html: &str, rows: &[RowBinding]) {
        self.record(ViewEvent::TableBody {
            html: html.to_string(),
            rows: rows.iter().map(|row| row.grievance_id).collect(),
        });
    }

    fn set_total_count(&self, total: u64) {
        self.record(ViewEvent::TotalCount(total));
    }

    fn set_page_info(&self, info: &PageInfo) {
        self.record(ViewEvent::PageInfo(info.label()));
    }

    fn show_detail(&self, detail: &DetailView) {
        self.record(ViewEvent::ShowDetail(detail.clone()));
    }

    fn set_detail_body(&self, html: &str) {
        self.record(ViewEvent::DetailBody(html.to_string()));
    }

    fn hide_detail(&self) {
        self.record(ViewEvent::HideDetail);
    }

    fn open_remark_modal(&self, id: GrievanceId) {
        self.remark.borrow_mut().clear();
        self.record(ViewEvent::OpenRemark(id));
    }

    fn close_remark_modal(&self) {
        self.record(ViewEvent::CloseRemark);
    }

    fn remark_text(&self) -> String {
        self.remark.borrow().clone()
    }

    fn open_assign_prompt(&self, id: GrievanceId) {
        self.record(ViewEvent::OpenAssign(id));
    }

    fn assign_input(&self) -> String {
        self.assign.borrow().clone()
    }

    fn close_assign_prompt(&self) {
        self.record(ViewEvent::CloseAssign);
    }

    fn alert(&self, message: &str) {
        self.record(ViewEvent::Alert(message.to_string()));
    }

    fn download(&self, file: &Download) {
        self.record(ViewEvent::Download(file.clone()));
    }
}

pub type TestConsole = GrievanceConsole<ScriptedTransport, RecordingView>;

pub fn console(replies: impl IntoIterator<Item = Reply>) -> TestConsole {
    console_with_view(replies, RecordingView::default())
}

pub fn console_with_view(replies: impl IntoIterator<Item = Reply>, view: RecordingView) -> TestConsole {
    let api = ApiClient::new(
        ScriptedTransport::new(replies),
        API_BASE,
        Some(CsrfToken {
            header: "X-CSRFToken".into(),
            value: "tok".into(),
        }),
    );
    GrievanceConsole::new(api, view, ConsoleConfig::default()).unwrap()
}

pub fn transport(console: &TestConsole) -> &ScriptedTransport {
    console.api().transport()
}

pub fn id(value: i64) -> GrievanceId {
    GrievanceId::new(value).unwrap()
}

pub fn grievance(id: i64, title: &str) -> Value {
    serde_json::json!({
        "id": id,
        "tracking_id": format!("GRV-{id}"),
        "title": title,
        "description": format!("Details of {title}"),
        "status": "new",
        "user": { "id": 100 + id, "username": format!("citizen{id}") },
        "category": { "id": 1, "name": "Roads" },
        "created_at": "2024-03-01T10:15:00+00:00",
    })
}

pub fn list(ids: &[i64]) -> Value {
    Value::Array(ids.iter().map(|id| grievance(*id, &format!("Case {id}"))).collect())
}

/// `true` for requests that change server state.
pub fn is_mutation(request: &ApiRequest) -> bool {
    request.method != Method::Get
}

impl RecordingView {
    pub fn remark_text_value(&self) -> String {
        self.remark.borrow().clone()
    }
}
