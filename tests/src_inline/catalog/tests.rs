use super::Catalog;
use super::defs::{AnalyteDef, PanelDef, builtin_panels};
use crate::model::range::ReferenceRange;

#[test]
fn test_builtin_panel_order() {
    let catalog = Catalog::builtin();
    let names = catalog.panel_names().collect::<Vec<_>>();
    assert_eq!(
        names,
        vec![
            "CBC",
            "Diabetes Profile",
            "Lipid Profile",
            "Liver Function Test",
            "Kidney Function Test",
            "Thyroid Profile",
        ]
    );
}

#[test]
fn test_panel_sizes() {
    for def in builtin_panels() {
        assert!(
            (3..=4).contains(&def.analytes.len()),
            "{} has {} analytes",
            def.name,
            def.analytes.len()
        );
    }
}

#[test]
fn test_all_builtin_ranges_recognized() {
    let catalog = Catalog::builtin();
    for panel in &catalog.panels {
        for analyte in &panel.analytes {
            assert_ne!(
                analyte.range,
                ReferenceRange::Unrecognized,
                "{}/{}",
                panel.name,
                analyte.name
            );
        }
    }
}

#[test]
fn test_lookup_by_name() {
    let catalog = Catalog::builtin();
    let lipid = catalog.panel("Lipid Profile").unwrap();
    let hdl = lipid.analyte("HDL").unwrap();
    assert_eq!(hdl.range_text, ">40");
    assert_eq!(hdl.range, ReferenceRange::LowerBound(40.0));
    assert!(lipid.analyte("Hemoglobin").is_none());
    assert!(catalog.panel("cbc").is_none());
}

#[test]
fn test_analyte_order_follows_defs() {
    let catalog = Catalog::builtin();
    let cbc = catalog.panel("CBC").unwrap();
    let names = cbc.analytes.iter().map(|a| a.name).collect::<Vec<_>>();
    assert_eq!(
        names,
        vec!["Hemoglobin", "RBC Count", "WBC Count", "Platelet Count"]
    );
}

#[test]
fn test_custom_defs_keep_unrecognized_text() {
    const ODD: &[AnalyteDef] = &[AnalyteDef {
        name: "Color",
        range: "pale yellow",
    }];
    let catalog = Catalog::from_defs(&[PanelDef {
        name: "Urine",
        analytes: ODD,
    }]);
    let color = catalog.panel("Urine").unwrap().analyte("Color").unwrap();
    assert_eq!(color.range, ReferenceRange::Unrecognized);
    assert_eq!(color.range_text, "pale yellow");
}
