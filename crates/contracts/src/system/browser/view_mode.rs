/// Result view of the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewMode {
    #[default]
    List,
    Calendar,
    Map,
}

impl ViewMode {
    pub fn all() -> [ViewMode; 3] {
        [ViewMode::List, ViewMode::Calendar, ViewMode::Map]
    }

    pub fn code(&self) -> &'static str {
        match self {
            ViewMode::List => "list",
            ViewMode::Calendar => "calendar",
            ViewMode::Map => "map",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::List => "List",
            ViewMode::Calendar => "Calendar",
            ViewMode::Map => "Map",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "list" => Some(ViewMode::List),
            "calendar" => Some(ViewMode::Calendar),
            "map" => Some(ViewMode::Map),
            _ => None,
        }
    }
}

/// What the UI has to do after a view selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewTransition {
    /// Already in the requested view
    Unchanged,
    /// Run the projector of this view against the cached subset
    Enter(ViewMode),
}

impl ViewTransition {
    /// Map drawing has to wait until the container has a committed layout,
    /// then the widget's size is re-validated.
    pub fn needs_deferred_draw(&self) -> bool {
        matches!(self, ViewTransition::Enter(ViewMode::Map))
    }
}
