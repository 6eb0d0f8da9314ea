use crate::core::{CheckReport, CheckStatus};
use crate::output::format::{
    create_styled_table, header_cell, one_line, status_color, styled_cell,
};

/// Render one run as a title, a table of results and a count line
pub(crate) fn render_check_table(report: &CheckReport, use_color: bool) -> String {
    let c = use_color;
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Check", c),
        header_cell("Status", c),
        header_cell("Detail", c),
    ]);

    for result in &report.results {
        let color = c.then(|| status_color(result.status));
        table.add_row(vec![
            styled_cell(&result.check, None, false),
            styled_cell(result.status.label(), color, result.status == CheckStatus::Error),
            styled_cell(&one_line(&result.detail), None, false),
        ]);
    }

    let summary = format!(
        "{} ok, {} missing, {} error",
        report.count(CheckStatus::Ok),
        report.count(CheckStatus::Missing),
        report.count(CheckStatus::Error)
    );

    format!(
        "\n  Check run {} at {}\n\n{table}\n\n  {summary}\n",
        report.run, report.timestamp
    )
}
