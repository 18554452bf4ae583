use contracts::domain::a001_program::ProgramId;
use leptos::prelude::*;

/// Сервис модального окна с карточкой программы
#[derive(Clone, Copy)]
pub struct ModalService {
    program: RwSignal<Option<ProgramId>>,
}

impl ModalService {
    pub fn new() -> Self {
        Self {
            program: RwSignal::new(None),
        }
    }

    /// Открыть детали программы
    pub fn open(&self, id: ProgramId) {
        leptos::logging::log!("🔷 open program modal: {}", id);
        self.program.set(Some(id));
    }

    /// Закрыть модальное окно
    pub fn close(&self) {
        self.program.set(None);
    }

    pub fn current(&self) -> Option<ProgramId> {
        self.program.get()
    }

    pub fn is_open(&self) -> bool {
        self.program.with(Option::is_some)
    }
}

impl Default for ModalService {
    fn default() -> Self {
        Self::new()
    }
}
