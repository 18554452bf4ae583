//! Static program dataset.

use crate::domain::a001_program::{Program, ProgramId};
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;

/// Bundled dataset produced by the CSV conversion script.
const EMBEDDED_PROGRAMS: &str = include_str!("../../data/programs.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse program dataset: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate program id {0}")]
    DuplicateId(ProgramId),
}

/// Read-only, ordered program collection. Cheap to clone.
#[derive(Debug, Clone)]
pub struct Catalog {
    programs: Arc<[Program]>,
}

impl Catalog {
    pub fn new(programs: Vec<Program>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(programs.len());
        for p in &programs {
            if !seen.insert(p.id) {
                return Err(CatalogError::DuplicateId(p.id));
            }
            check_dates(p);
        }
        log::debug!("catalog loaded: {} programs", programs.len());
        Ok(Self {
            programs: programs.into(),
        })
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let programs: Vec<Program> = serde_json::from_str(json)?;
        Self::new(programs)
    }

    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_PROGRAMS)
    }

    pub fn programs(&self) -> &[Program] {
        &self.programs
    }

    pub fn shared(&self) -> Arc<[Program]> {
        Arc::clone(&self.programs)
    }

    pub fn find(&self, id: ProgramId) -> Option<&Program> {
        self.programs.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.programs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }
}

// Odd dates are reported, never dropped.
fn check_dates(p: &Program) {
    if let Some(raw) = p.start_date.as_deref() {
        if p.start().is_none() {
            log::warn!("program {}: unparseable startDate '{}'", p.id, raw);
        }
    }
    if let Some(raw) = p.end_date.as_deref() {
        match (p.start(), p.end()) {
            (_, None) => log::warn!("program {}: unparseable endDate '{}'", p.id, raw),
            (Some(start), Some(end)) if end < start => {
                log::warn!("program {}: endDate {} before startDate {}", p.id, end, start)
            }
            _ => {}
        }
    }
}
