use chrono::NaiveDate;
use thiserror::Error;

use crate::catalog::{Catalog, Panel};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("unknown panel: {0}")]
    UnknownPanel(String),
    #[error("panel {panel} has no analyte {analyte}")]
    UnknownAnalyte { panel: String, analyte: String },
    #[error("panel not selected: {0}")]
    PanelNotSelected(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientRecord {
    pub name: String,
    pub age_sex: String,
    pub referring_doctor: String,
    pub sample_type: String,
    pub received_on: NaiveDate,
    pub reported_on: NaiveDate,
}

impl PatientRecord {
    pub fn blank(today: NaiveDate) -> Self {
        Self {
            name: String::new(),
            age_sex: String::new(),
            referring_doctor: String::new(),
            sample_type: String::new(),
            received_on: today,
            reported_on: today,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReportEntry {
    pub analyte: &'static str,
    pub value: String,
}

#[derive(Debug, Clone)]
pub struct PanelSelection<'c> {
    pub panel: &'c Panel,
    /// One entry per analyte, in catalog order.
    pub entries: Vec<ReportEntry>,
}

/// Editable state of one report: patient fields plus the selected panels.
#[derive(Debug, Clone)]
pub struct FormSession<'c> {
    catalog: &'c Catalog,
    pub patient: PatientRecord,
    selections: Vec<PanelSelection<'c>>,
}

impl<'c> FormSession<'c> {
    pub fn new(catalog: &'c Catalog, today: NaiveDate) -> Self {
        Self {
            catalog,
            patient: PatientRecord::blank(today),
            selections: Vec::new(),
        }
    }

    pub fn selections(&self) -> &[PanelSelection<'c>] {
        &self.selections
    }

    pub fn is_selected(&self, panel: &str) -> bool {
        self.selections.iter().any(|s| s.panel.name == panel)
    }

    pub fn select_panel(&mut self, name: &str) -> Result<(), SessionError> {
        let catalog = self.catalog;
        let panel = catalog
            .panel(name)
            .ok_or_else(|| SessionError::UnknownPanel(name.to_string()))?;
        if self.is_selected(name) {
            return Ok(());
        }
        let entries = panel
            .analytes
            .iter()
            .map(|a| ReportEntry {
                analyte: a.name,
                value: String::new(),
            })
            .collect();
        self.selections.push(PanelSelection { panel, entries });
        Ok(())
    }

    pub fn deselect_panel(&mut self, name: &str) -> bool {
        let before = self.selections.len();
        self.selections.retain(|s| s.panel.name != name);
        self.selections.len() != before
    }

    pub fn set_value(
        &mut self,
        panel: &str,
        analyte: &str,
        value: impl Into<String>,
    ) -> Result<(), SessionError> {
        let catalog = self.catalog;
        let known = catalog
            .panel(panel)
            .ok_or_else(|| SessionError::UnknownPanel(panel.to_string()))?;
        let analyte = known
            .analyte(analyte)
            .ok_or_else(|| SessionError::UnknownAnalyte {
                panel: panel.to_string(),
                analyte: analyte.to_string(),
            })?;
        let selection = self
            .selections
            .iter_mut()
            .find(|s| s.panel.name == panel)
            .ok_or_else(|| SessionError::PanelNotSelected(panel.to_string()))?;
        if let Some(entry) = selection
            .entries
            .iter_mut()
            .find(|e| e.analyte == analyte.name)
        {
            entry.value = value.into();
        }
        Ok(())
    }

    pub fn value(&self, panel: &str, analyte: &str) -> Option<&str> {
        self.selections
            .iter()
            .find(|s| s.panel.name == panel)?
            .entries
            .iter()
            .find(|e| e.analyte == analyte)
            .map(|e| e.value.as_str())
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/session.rs"]
mod tests;
