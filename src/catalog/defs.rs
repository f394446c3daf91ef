#[derive(Debug, Clone, Copy)]
pub struct AnalyteDef {
    pub name: &'static str,
    pub range: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct PanelDef {
    pub name: &'static str,
    pub analytes: &'static [AnalyteDef],
}

const fn analyte(name: &'static str, range: &'static str) -> AnalyteDef {
    AnalyteDef { name, range }
}

const CBC: &[AnalyteDef] = &[
    analyte("Hemoglobin", "13-17"),
    analyte("RBC Count", "4.5-5.5"),
    analyte("WBC Count", "4000-11000"),
    analyte("Platelet Count", "150000-450000"),
];
const DIABETES_PROFILE: &[AnalyteDef] = &[
    analyte("Fasting Blood Sugar", "70-110"),
    analyte("Postprandial Sugar", "70-140"),
    analyte("HbA1c", "4-5.6"),
];
const LIPID_PROFILE: &[AnalyteDef] = &[
    analyte("Total Cholesterol", "<200"),
    analyte("Triglycerides", "<150"),
    analyte("HDL", ">40"),
    analyte("LDL", "<100"),
];
const LIVER_FUNCTION: &[AnalyteDef] = &[
    analyte("SGPT (ALT)", "7-56"),
    analyte("SGOT (AST)", "10-40"),
    analyte("Bilirubin Total", "0.1-1.2"),
];
const KIDNEY_FUNCTION: &[AnalyteDef] = &[
    analyte("Urea", "7-20"),
    analyte("Creatinine", "0.6-1.3"),
    analyte("Uric Acid", "3.5-7.2"),
];
const THYROID_PROFILE: &[AnalyteDef] = &[
    analyte("TSH", "0.4-4.0"),
    analyte("T3", "80-200"),
    analyte("T4", "5-12"),
];

const BUILTIN_PANELS: &[PanelDef] = &[
    PanelDef {
        name: "CBC",
        analytes: CBC,
    },
    PanelDef {
        name: "Diabetes Profile",
        analytes: DIABETES_PROFILE,
    },
    PanelDef {
        name: "Lipid Profile",
        analytes: LIPID_PROFILE,
    },
    PanelDef {
        name: "Liver Function Test",
        analytes: LIVER_FUNCTION,
    },
    PanelDef {
        name: "Kidney Function Test",
        analytes: KIDNEY_FUNCTION,
    },
    PanelDef {
        name: "Thyroid Profile",
        analytes: THYROID_PROFILE,
    },
];

pub fn builtin_panels() -> &'static [PanelDef] {
    BUILTIN_PANELS
}
