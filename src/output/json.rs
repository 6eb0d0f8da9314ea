use crate::core::CheckReport;

/// One compact JSON object per run, so successive runs form JSON Lines
pub(crate) fn render_report_json(report: &CheckReport) -> Result<String, serde_json::Error> {
    serde_json::to_string(report)
}
