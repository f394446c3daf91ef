pub mod html;
pub mod json;

use crate::model::range::{Classification, ReferenceRange};
use crate::model::session::{FormSession, PatientRecord};

#[derive(Debug, Clone)]
pub struct AnalyteRow {
    pub name: String,
    pub value: String,
    pub range_text: String,
    pub range: ReferenceRange,
    pub status: Classification,
}

impl AnalyteRow {
    pub fn is_abnormal(&self) -> bool {
        self.range.is_abnormal(&self.value)
    }
}

#[derive(Debug, Clone)]
pub struct PanelSection {
    pub name: String,
    pub rows: Vec<AnalyteRow>,
}

/// Snapshot of a session taken at generation time.
#[derive(Debug, Clone)]
pub struct Report {
    pub patient: PatientRecord,
    pub sections: Vec<PanelSection>,
}

impl Report {
    pub fn from_session(session: &FormSession<'_>) -> Self {
        let mut sections = Vec::with_capacity(session.selections().len());
        for selection in session.selections() {
            let mut rows = Vec::with_capacity(selection.entries.len());
            for (entry, analyte) in selection
                .entries
                .iter()
                .zip(selection.panel.analytes.iter())
            {
                rows.push(AnalyteRow {
                    name: analyte.name.to_string(),
                    value: entry.value.clone(),
                    range_text: analyte.range_text.to_string(),
                    range: analyte.range,
                    status: analyte.range.classify(&entry.value),
                });
            }
            sections.push(PanelSection {
                name: selection.panel.name.to_string(),
                rows,
            });
        }
        Self {
            patient: session.patient.clone(),
            sections,
        }
    }

    pub fn abnormal_count(&self) -> usize {
        self.rows().filter(|r| r.is_abnormal()).count()
    }

    pub fn unparsed_count(&self) -> usize {
        self.rows()
            .filter(|r| r.status == Classification::Unparsed)
            .count()
    }

    fn rows(&self) -> impl Iterator<Item = &AnalyteRow> {
        self.sections.iter().flat_map(|s| s.rows.iter())
    }
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
