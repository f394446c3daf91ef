use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::catalog::Catalog;
use crate::model::session::{FormSession, SessionError};

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid session: {0}")]
    Session(#[from] SessionError),
    #[error("value for {panel}/{analyte} must be a string or a number")]
    InvalidValue { panel: String, analyte: String },
}

/// On-disk form of one report session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionFile {
    #[serde(default)]
    pub patient: PatientFields,
    #[serde(default)]
    pub panels: Vec<PanelValues>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatientFields {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub age_sex: String,
    #[serde(default)]
    pub referred_by: String,
    #[serde(default)]
    pub sample: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub received_on: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reported_on: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelValues {
    pub name: String,
    /// Analyte name to entered value, kept in file order.
    #[serde(default)]
    pub values: Map<String, Value>,
}

pub fn load_session<'c>(
    path: &Path,
    catalog: &'c Catalog,
    today: NaiveDate,
) -> Result<FormSession<'c>, InputError> {
    let text = fs::read_to_string(path)?;
    let file: SessionFile = serde_json::from_str(&text)?;
    tracing::debug!(path = %path.display(), panels = file.panels.len(), "session file read");
    build_session(&file, catalog, today)
}

pub fn build_session<'c>(
    file: &SessionFile,
    catalog: &'c Catalog,
    today: NaiveDate,
) -> Result<FormSession<'c>, InputError> {
    let mut session = FormSession::new(catalog, today);

    let fields = &file.patient;
    session.patient.name = fields.name.clone();
    session.patient.age_sex = fields.age_sex.clone();
    session.patient.referring_doctor = fields.referred_by.clone();
    session.patient.sample_type = fields.sample.clone();
    if let Some(date) = fields.received_on {
        session.patient.received_on = date;
    }
    if let Some(date) = fields.reported_on {
        session.patient.reported_on = date;
    }

    for panel in &file.panels {
        if session.is_selected(&panel.name) {
            tracing::warn!(panel = %panel.name, "panel listed twice; merging values");
        }
        session.select_panel(&panel.name)?;
        for (analyte, value) in &panel.values {
            let text = match value {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                Value::Null => String::new(),
                _ => {
                    return Err(InputError::InvalidValue {
                        panel: panel.name.clone(),
                        analyte: analyte.clone(),
                    });
                }
            };
            if let Some(previous) = session.value(&panel.name, analyte)
                && !previous.is_empty()
                && previous != text
            {
                tracing::warn!(
                    panel = %panel.name,
                    analyte = %analyte,
                    previous,
                    "value entered twice; keeping the later one"
                );
            }
            session.set_value(&panel.name, analyte, text)?;
        }
    }

    Ok(session)
}

/// Blank session for the given panels, every analyte present with an
/// empty value.
pub fn session_template(
    catalog: &Catalog,
    panels: &[String],
    today: NaiveDate,
) -> Result<SessionFile, SessionError> {
    let mut out = SessionFile {
        patient: PatientFields {
            received_on: Some(today),
            reported_on: Some(today),
            ..PatientFields::default()
        },
        panels: Vec::with_capacity(panels.len()),
    };
    for name in panels {
        let Some(panel) = catalog.panel(name) else {
            let available = catalog.panel_names().collect::<Vec<_>>().join(", ");
            tracing::warn!(panel = %name, %available, "no such panel");
            return Err(SessionError::UnknownPanel(name.clone()));
        };
        let values = panel
            .analytes
            .iter()
            .map(|a| (a.name.to_string(), Value::String(String::new())))
            .collect();
        out.panels.push(PanelValues {
            name: panel.name.to_string(),
            values,
        });
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
