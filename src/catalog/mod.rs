pub mod defs;

use crate::model::range::ReferenceRange;
use defs::{PanelDef, builtin_panels};

#[derive(Debug, Clone)]
pub struct Analyte {
    pub name: &'static str,
    pub range_text: &'static str,
    pub range: ReferenceRange,
}

#[derive(Debug, Clone)]
pub struct Panel {
    pub name: &'static str,
    pub analytes: Vec<Analyte>,
}

impl Panel {
    pub fn analyte(&self, name: &str) -> Option<&Analyte> {
        self.analytes.iter().find(|a| a.name == name)
    }
}

/// Read-only panel table with every range expression parsed up front.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub panels: Vec<Panel>,
}

impl Catalog {
    pub fn builtin() -> Self {
        Self::from_defs(builtin_panels())
    }

    pub fn from_defs(defs: &[PanelDef]) -> Self {
        let panels = defs.iter().map(load_panel).collect::<Vec<_>>();
        tracing::debug!(panels = panels.len(), "catalog loaded");
        Self { panels }
    }

    pub fn panel(&self, name: &str) -> Option<&Panel> {
        self.panels.iter().find(|p| p.name == name)
    }

    pub fn panel_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.panels.iter().map(|p| p.name)
    }
}

fn load_panel(def: &PanelDef) -> Panel {
    let analytes = def
        .analytes
        .iter()
        .map(|a| {
            let range = ReferenceRange::parse(a.range);
            if range == ReferenceRange::Unrecognized {
                tracing::warn!(
                    panel = def.name,
                    analyte = a.name,
                    range = a.range,
                    "reference range not recognized; results will always read as normal"
                );
            }
            Analyte {
                name: a.name,
                range_text: a.range,
                range,
            }
        })
        .collect();
    Panel {
        name: def.name,
        analytes,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/catalog/tests.rs"]
mod tests;
