mod format;
mod json;
mod table;

pub(crate) use json::render_report_json;
pub(crate) use table::render_check_table;
