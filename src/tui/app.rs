use crate::controller::ScreenController;
use crate::domain::Selection;
use crate::tui::event::Action;
use crate::tui::preview::PreviewCache;

pub struct TuiApp {
    pub controller: ScreenController,
    pub should_quit: bool,
    pub status_message: Option<String>,
    /// Fetches started but not yet observed as finished.
    pub pending: Vec<tokio::task::JoinHandle<()>>,
    pub preview: PreviewCache,
}

impl TuiApp {
    pub fn new(controller: ScreenController) -> Self {
        Self {
            controller,
            should_quit: false,
            status_message: None,
            pending: Vec::new(),
            preview: PreviewCache::default(),
        }
    }

    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::ToggleSource => self.controller.toggle(),
            Action::SelectCats => self.controller.select(Selection::Cat),
            Action::SelectDogs => self.controller.select(Selection::Dog),
            Action::More => {
                let handle = self.controller.more();
                self.pending.push(handle);
                self.clear_status();
            }
            Action::Reset => self.controller.reset(),
            Action::None => {}
        }
    }

    /// Drop handles of fetches that completed.
    pub fn reap_finished(&mut self) {
        self.pending.retain(|handle| !handle.is_finished());
    }

    pub fn is_loading(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
