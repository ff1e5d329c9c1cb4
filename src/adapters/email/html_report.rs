//! HTML report rendering for emailed results.

use crate::domain::topsis::ScoredRow;

/// Subject line used for result emails.
pub const REPORT_SUBJECT: &str = "TOPSIS Analysis Result";

const CELL_STYLE: &str = "border: 1px solid black; padding: 8px;";

/// Renders ranked results as an HTML email body.
pub struct HtmlReport;

impl HtmlReport {
    /// Renders every row, in the given order, as a bordered table.
    ///
    /// The header row comes from the first result's columns (original
    /// columns, then `score` and `rank`).
    pub fn render(results: &[ScoredRow]) -> String {
        let header = results
            .first()
            .map(|first| {
                first
                    .columns()
                    .iter()
                    .map(|column| format!("<th style=\"{}\">{}</th>", CELL_STYLE, html_escape(column)))
                    .collect::<String>()
            })
            .unwrap_or_default();

        let body = results
            .iter()
            .map(|row| {
                let cells = row
                    .display_values()
                    .iter()
                    .map(|value| format!("<td style=\"{}\">{}</td>", CELL_STYLE, html_escape(value)))
                    .collect::<String>();
                format!("<tr>{}</tr>", cells)
            })
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            r#"<h1>Your TOPSIS Analysis is Complete</h1>
<p>Dear User,</p>
<p>Your TOPSIS analysis of {count} alternatives has been successfully completed. Please find the results below:</p>
<table style="border-collapse: collapse;">
<tr>{header}</tr>
{body}
</table>
<p>Thank you for using our TOPSIS service!</p>"#,
            count = results.len(),
            header = header,
            body = body,
        )
    }
}

/// Escape HTML special characters.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
