use super::*;
use crate::catalog::Catalog;
use chrono::NaiveDate;

fn session(catalog: &Catalog) -> FormSession<'_> {
    let mut s = FormSession::new(catalog, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
    s.patient.name = "R. Iyer".to_string();
    s.select_panel("Lipid Profile").unwrap();
    s.set_value("Lipid Profile", "Total Cholesterol", "210").unwrap();
    s.set_value("Lipid Profile", "HDL", "55").unwrap();
    s.set_value("Lipid Profile", "LDL", "n/a").unwrap();
    s
}

#[test]
fn test_report_snapshot_classifies_rows() {
    let catalog = Catalog::builtin();
    let report = Report::from_session(&session(&catalog));
    assert_eq!(report.patient.name, "R. Iyer");
    assert_eq!(report.sections.len(), 1);
    let rows = &report.sections[0].rows;
    let statuses = rows.iter().map(|r| r.status).collect::<Vec<_>>();
    assert_eq!(
        statuses,
        vec![
            Classification::Abnormal,
            Classification::Unparsed,
            Classification::Normal,
            Classification::Unparsed,
        ]
    );
    assert_eq!(rows[2].range_text, ">40");
    assert_eq!(report.abnormal_count(), 1);
    assert_eq!(report.unparsed_count(), 2);
}

#[test]
fn test_row_highlight_agrees_with_status() {
    let catalog = Catalog::builtin();
    let report = Report::from_session(&session(&catalog));
    for row in &report.sections[0].rows {
        assert_eq!(row.is_abnormal(), row.status == Classification::Abnormal);
        assert_eq!(row.range, ReferenceRange::parse(&row.range_text));
    }
}

#[test]
fn test_report_is_detached_from_session() {
    let catalog = Catalog::builtin();
    let mut s = session(&catalog);
    let report = Report::from_session(&s);
    s.set_value("Lipid Profile", "Total Cholesterol", "150").unwrap();
    s.patient.name.clear();
    assert_eq!(report.sections[0].rows[0].value, "210");
    assert_eq!(report.patient.name, "R. Iyer");
    assert_eq!(Report::from_session(&s).abnormal_count(), 0);
}

#[test]
fn test_escape_html() {
    assert_eq!(
        escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
        "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
    );
    assert_eq!(escape_html("13-17"), "13-17");
}
