//! Application state of the browser, owned by a single controller.

use super::view_mode::{ViewMode, ViewTransition};
use crate::domain::a001_program::{Program, ProgramId};
use crate::projections::p900_program_filter::{apply_filters, FilterKey, FilterState};
use crate::projections::p901_program_list::{list_cards, results_summary, ProgramCard};
use crate::projections::p902_program_calendar::{build_month, CalendarCursor, CalendarMonth};
use crate::projections::p903_program_map::{build_markers, MapProjection};
use crate::shared::catalog::Catalog;
use crate::shared::cost::CostConvention;
use std::sync::Arc;

/// Filters, view mode, calendar cursor and the cached filtered subset.
///
/// The subset is recomputed only when the filters change; switching views
/// or moving the calendar reuses it.
#[derive(Debug, Clone)]
pub struct BrowserState {
    programs: Arc<[Program]>,
    convention: CostConvention,
    filters: FilterState,
    view: ViewMode,
    cursor: CalendarCursor,
    filtered: Vec<Program>,
}

impl BrowserState {
    pub fn new(catalog: &Catalog, convention: CostConvention, cursor: CalendarCursor) -> Self {
        let programs = catalog.shared();
        let filters = FilterState::default();
        let filtered = apply_filters(&programs, &filters, convention);
        Self {
            programs,
            convention,
            filters,
            view: ViewMode::default(),
            cursor,
            filtered,
        }
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn cursor(&self) -> CalendarCursor {
        self.cursor
    }

    pub fn convention(&self) -> CostConvention {
        self.convention
    }

    pub fn filtered(&self) -> &[Program] {
        &self.filtered
    }

    pub fn total_count(&self) -> usize {
        self.programs.len()
    }

    pub fn results_summary(&self) -> String {
        results_summary(self.filtered.len(), self.programs.len())
    }

    /// Lookup across the whole dataset, not just the filtered subset.
    pub fn find(&self, id: ProgramId) -> Option<&Program> {
        self.programs.iter().find(|p| p.id == id)
    }

    /// Returns `true` when the filters (and so the subset) changed.
    pub fn on_filter_change(&mut self, key: FilterKey, raw: &str) -> bool {
        let next = self.filters.with_value(key, raw);
        self.set_filters(next)
    }

    pub fn set_filters(&mut self, filters: FilterState) -> bool {
        if filters == self.filters {
            return false;
        }
        self.filters = filters;
        self.filtered = apply_filters(&self.programs, &self.filters, self.convention);
        true
    }

    pub fn reset_filters(&mut self) -> bool {
        self.set_filters(FilterState::default())
    }

    pub fn select_view(&mut self, mode: ViewMode) -> ViewTransition {
        if mode == self.view {
            return ViewTransition::Unchanged;
        }
        log::debug!("view: {:?} -> {:?}", self.view, mode);
        self.view = mode;
        ViewTransition::Enter(mode)
    }

    pub fn next_month(&mut self) {
        self.cursor = self.cursor.next();
    }

    pub fn previous_month(&mut self) {
        self.cursor = self.cursor.previous();
    }

    pub fn list_cards(&self) -> Vec<ProgramCard> {
        list_cards(&self.filtered)
    }

    pub fn calendar_month(&self) -> CalendarMonth {
        build_month(&self.filtered, self.cursor)
    }

    pub fn map_projection(&self) -> MapProjection {
        build_markers(&self.filtered)
    }
}
