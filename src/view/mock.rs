use mockall::mock;

use crate::domain::filter::FilterInputs;
use crate::domain::types::GrievanceId;
use crate::dto::filters::FilterOption;
use crate::pagination::PageInfo;
use crate::render::{DetailView, RowBinding};
use crate::view::{ConsoleView, Download};

mock! {
    pub View {}

    impl ConsoleView for View {
        fn filter_inputs(&self) -> FilterInputs;
        fn page_size_input(&self) -> Option<String>;
        fn clear_filter_inputs(&self);
        fn set_category_options(&self, options: &[FilterOption]);
        fn set_officer_options(&self, options: &[FilterOption]);
        fn replace_table_body(&self, html: &str, rows: &[RowBinding]);
        fn set_total_count(&self, total: u64);
        fn set_page_info(&self, info: &PageInfo);
        fn show_detail(&self, detail: &DetailView);
        fn set_detail_body(&self, html: &str);
        fn hide_detail(&self);
        fn open_remark_modal(&self, id: GrievanceId);
        fn close_remark_modal(&self);
        fn remark_text(&self) -> String;
        fn open_assign_prompt(&self, id: GrievanceId);
        fn assign_input(&self) -> String;
        fn close_assign_prompt(&self);
        fn alert(&self, message: &str);
        fn download(&self, file: &Download);
    }
}
