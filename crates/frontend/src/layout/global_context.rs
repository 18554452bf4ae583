use chrono::Local;
use contracts::domain::a001_program::{Program, ProgramId};
use contracts::projections::p900_program_filter::FilterKey;
use contracts::projections::p902_program_calendar::CalendarCursor;
use contracts::projections::p904_filter_options::FilterOptions;
use contracts::shared::catalog::Catalog;
use contracts::shared::config::DeploymentConfig;
use contracts::system::browser::{BrowserState, ViewMode, ViewTransition};
use leptos::prelude::*;

/// Single owner of the browser state. Every mutation goes through the
/// methods below, in direct response to a user action.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub browser: RwSignal<BrowserState>,
    pub options: StoredValue<FilterOptions>,
    pub config: StoredValue<DeploymentConfig>,
    pub filters_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new(catalog: Catalog, config: DeploymentConfig) -> Self {
        let today = Local::now().date_naive();
        let cursor = config
            .calendar_start()
            .map(|(year, month)| CalendarCursor::new(year, month - 1))
            .unwrap_or_else(|| CalendarCursor::initial(catalog.programs(), today));
        let options = FilterOptions::derive(catalog.programs(), &config);
        let browser = BrowserState::new(&catalog, config.filters.cost_unit, cursor);

        Self {
            browser: RwSignal::new(browser),
            options: StoredValue::new(options),
            config: StoredValue::new(config),
            filters_open: RwSignal::new(true),
        }
    }

    pub fn set_filter(&self, key: FilterKey, raw: String) {
        self.browser.maybe_update(|state| {
            let changed = state.on_filter_change(key, &raw);
            if changed {
                leptos::logging::log!(
                    "🔎 filter {:?}='{}': {} results",
                    key,
                    raw,
                    state.filtered().len()
                );
            }
            changed
        });
    }

    pub fn reset_filters(&self) {
        self.browser.maybe_update(|state| state.reset_filters());
    }

    pub fn select_view(&self, mode: ViewMode) -> ViewTransition {
        let mut transition = ViewTransition::Unchanged;
        self.browser.maybe_update(|state| {
            transition = state.select_view(mode);
            transition != ViewTransition::Unchanged
        });
        transition
    }

    pub fn next_month(&self) {
        self.browser.update(|state| state.next_month());
    }

    pub fn previous_month(&self) {
        self.browser.update(|state| state.previous_month());
    }

    pub fn view_mode(&self) -> ViewMode {
        self.browser.with(|state| state.view())
    }

    pub fn filter_value(&self, key: FilterKey) -> String {
        self.browser.with(|state| state.filters().raw_value(key))
    }

    pub fn find_program(&self, id: ProgramId) -> Option<Program> {
        self.browser.with_untracked(|state| state.find(id).cloned())
    }

    pub fn toggle_filters(&self) {
        self.filters_open.update(|open| *open = !*open);
    }
}
