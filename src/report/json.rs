use serde_json::{Value, json};

use crate::report::Report;

pub fn render_summary_json(report: &Report) -> Value {
    let p = &report.patient;
    let panels = report
        .sections
        .iter()
        .map(|section| {
            let analytes = section
                .rows
                .iter()
                .map(|row| {
                    json!({
                        "name": row.name,
                        "value": row.value,
                        "reference_range": row.range_text,
                        "status": row.status.as_str(),
                    })
                })
                .collect::<Vec<_>>();
            json!({ "name": section.name, "analytes": analytes })
        })
        .collect::<Vec<_>>();

    json!({
        "tool": "kira-labreport",
        "version": env!("CARGO_PKG_VERSION"),
        "patient": {
            "name": p.name,
            "age_sex": p.age_sex,
            "referred_by": p.referring_doctor,
            "sample": p.sample_type,
            "received_on": p.received_on.format("%Y-%m-%d").to_string(),
            "reported_on": p.reported_on.format("%Y-%m-%d").to_string(),
        },
        "panels": panels,
        "counts": {
            "abnormal": report.abnormal_count(),
            "unparsed": report.unparsed_count(),
        },
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/json.rs"]
mod tests;
