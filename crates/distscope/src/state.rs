use distscope_core::Figure;

/// Shared UI state: the composed figures, which one is on screen, and the
/// status line.
///
/// Tabs follow the fixed composition order (Normal, Cauchy, Student-t,
/// Poisson, Uniform), so `active` doubles as the family index.
#[derive(Debug)]
pub struct AppState {
    pub figures: Vec<Figure>,
    pub active: usize,
    /// Sample sizes used for composition, kept for resampling
    pub sizes: Vec<usize>,
    pub error_message: Option<String>,
    pub exit: bool,
}

impl AppState {
    #[must_use]
    pub fn new(figures: Vec<Figure>, sizes: Vec<usize>) -> Self {
        Self {
            figures,
            active: 0,
            sizes,
            error_message: None,
            exit: false,
        }
    }

    /// Figure currently on screen.
    #[must_use]
    pub fn active_figure(&self) -> &Figure {
        &self.figures[self.active]
    }

    pub fn next_tab(&mut self) {
        self.active = (self.active + 1) % self.figures.len();
    }

    pub fn prev_tab(&mut self) {
        self.active = (self.active + self.figures.len() - 1) % self.figures.len();
    }

    /// Jump straight to a tab; out-of-range indices are ignored.
    pub fn jump_to(&mut self, index: usize) {
        if index < self.figures.len() {
            self.active = index;
        }
    }

    pub fn set_error(&mut self, message: String) {
        self.error_message = Some(message);
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }
}
