use std::fmt::{self, Write};

use crate::report::{AnalyteRow, PanelSection, Report, escape_html};

pub const DEFAULT_HEADER_HEIGHT_PX: u32 = 300;
pub const DEFAULT_LAB_NAME: &str = "Reliable path lab logo";
pub const END_MARKER: &str = "*** END OF REPORT ***";

const ABNORMAL_COLOR: &str = "red";
const NORMAL_COLOR: &str = "black";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub header_height_px: u32,
    pub lab_name: String,
    /// Force a printed page break after every panel table.
    pub page_break_per_panel: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            header_height_px: DEFAULT_HEADER_HEIGHT_PX,
            lab_name: DEFAULT_LAB_NAME.to_string(),
            page_break_per_panel: false,
        }
    }
}

pub fn render_report_html(report: &Report, opts: &RenderOptions) -> Result<String, fmt::Error> {
    let mut out = String::with_capacity(16 * 1024);

    writeln!(out, "<!doctype html>\n<html>\n<head>")?;
    writeln!(out, "<meta charset=\"utf-8\">")?;
    writeln!(out, "<title>Lab Report</title>")?;
    push_style(&mut out, opts.header_height_px)?;
    writeln!(out, "</head>\n<body>")?;

    writeln!(out, "<div class=\"header\">")?;
    writeln!(
        out,
        "    <div class=\"title\">{}</div>",
        escape_html(&opts.lab_name)
    )?;
    writeln!(out, "</div>\n")?;

    writeln!(out, "<div class=\"content\">")?;
    push_patient_table(&mut out, report)?;
    for section in &report.sections {
        push_panel_table(&mut out, section)?;
        if opts.page_break_per_panel {
            writeln!(out, "<div class=\"page-break\"></div>")?;
        }
    }
    writeln!(out, "<div class=\"report-footer\">{}</div>", END_MARKER)?;
    writeln!(out, "</div>\n</body>\n</html>")?;

    Ok(out)
}

fn push_patient_table(out: &mut String, report: &Report) -> fmt::Result {
    let p = &report.patient;
    let received = p.received_on.format("%Y-%m-%d").to_string();
    let reported = p.reported_on.format("%Y-%m-%d").to_string();

    writeln!(out, "<table class=\"patient-table\">")?;
    push_patient_row(out, "Patient Name", &p.name, "Received", &received)?;
    push_patient_row(out, "Age / Sex", &p.age_sex, "Reported", &reported)?;
    push_patient_row(
        out,
        "Referred By",
        &p.referring_doctor,
        "Sample",
        &p.sample_type,
    )?;
    writeln!(out, "</table>")
}

fn push_patient_row(
    out: &mut String,
    l_label: &str,
    l_value: &str,
    r_label: &str,
    r_value: &str,
) -> fmt::Result {
    writeln!(
        out,
        "<tr>\n    <td><b>{}</b></td><td>{}</td>\n    <td><b>{}</b></td><td>{}</td>\n</tr>",
        l_label,
        escape_html(l_value),
        r_label,
        escape_html(r_value)
    )
}

fn push_panel_table(out: &mut String, section: &PanelSection) -> fmt::Result {
    writeln!(out, "<table>")?;
    writeln!(
        out,
        "<tr><th colspan='3'>{}</th></tr>",
        escape_html(&section.name)
    )?;
    writeln!(out, "<tr>")?;
    writeln!(out, "    <th class=\"col-test\">Test</th>")?;
    writeln!(out, "    <th class=\"col-result\">Result</th>")?;
    writeln!(out, "    <th class=\"col-normal\">Normal Range</th>")?;
    writeln!(out, "</tr>")?;
    for row in &section.rows {
        push_analyte_row(out, row)?;
    }
    writeln!(out, "</table>")
}

fn push_analyte_row(out: &mut String, row: &AnalyteRow) -> fmt::Result {
    let color = if row.is_abnormal() {
        ABNORMAL_COLOR
    } else {
        NORMAL_COLOR
    };
    let value = if row.value.is_empty() {
        "&nbsp;".to_string()
    } else {
        escape_html(&row.value)
    };
    writeln!(
        out,
        "<tr>\n    <td class=\"col-test\">{}</td>\n    <td class=\"col-result\" style=\"color:{}; font-weight:bold;\">{}</td>\n    <td class=\"col-normal\">{}</td>\n</tr>",
        escape_html(&row.name),
        color,
        value,
        escape_html(&row.range_text)
    )
}

fn push_style(out: &mut String, header_height_px: u32) -> fmt::Result {
    writeln!(out, "<style>")?;
    writeln!(
        out,
        ":root {{\n    --header-height: {}px;\n    --page-padding-left: 20px;\n    --page-padding-right: 20px;\n}}",
        header_height_px
    )?;
    out.push_str(
        "body {
    font-family: Arial, Helvetica, sans-serif;
    margin: 0;
    padding: 0;
    -webkit-font-smoothing: antialiased;
    -moz-osx-font-smoothing: grayscale;
}
.header {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    height: var(--header-height);
    background: linear-gradient(90deg, #1e7a1e, #2fa02f);
    color: white;
    display: flex;
    align-items: center;
    justify-content: center;
    z-index: 9999;
    box-shadow: 0 2px 6px rgba(0,0,0,0.2);
}
.header .title {
    font-size: 28px;
    font-weight: 700;
    letter-spacing: 1px;
}
.content {
    margin-top: var(--header-height);
    padding: 20px;
    box-sizing: border-box;
}
table {
    width: 100%;
    border-collapse: collapse;
    margin-bottom: 20px;
    table-layout: fixed;
    page-break-inside: avoid;
}
th, td {
    border: 1px solid #333;
    padding: 8px;
    vertical-align: middle;
    word-wrap: break-word;
}
th {
    background-color: #f0f0f0;
    font-weight: 600;
}
.col-test { width: 50%; text-align: left; }
.col-result { width: 25%; text-align: right; }
.col-normal { width: 25%; text-align: center; }
.patient-table td { width: 25%; }
.report-footer {
    margin-top: 40px;
    text-align: center;
    font-weight: 700;
}
@page {
    size: A4;
    margin: 0mm;
}
@media print {
    html, body {
        width: 210mm;
        height: 297mm;
    }
    .header {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
    }
    .content {
        margin-top: var(--header-height);
        padding-left: 15mm;
        padding-right: 15mm;
    }
    table {
        page-break-inside: avoid;
    }
    .page-break {
        page-break-after: always;
    }
}
",
    );
    writeln!(out, "</style>")
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/html.rs"]
mod tests;
