use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout},
};

use distscope_core::{DEFAULT_SAMPLE_SIZES, Distribution, DistributionError, Figure};

use crate::components::figure_view::FigureView;
use crate::components::{Component, EventResult, status_bar::StatusBar, tab_bar::TabBar};
use crate::state::AppState;

/// Front-end configuration assembled from the command line
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub sizes: Vec<usize>,
    pub df: f64,
    pub lambda: f64,
    pub seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SAMPLE_SIZES.to_vec(),
            df: Distribution::DEFAULT_DF,
            lambda: Distribution::DEFAULT_LAMBDA,
            seed: None,
        }
    }
}

#[derive(Debug)]
pub struct App {
    state: AppState,
    rng: SmallRng,
    tab_bar: TabBar,
    status_bar: StatusBar,
}

impl App {
    /// Compose all five family figures in their fixed presentation order.
    ///
    /// The first invalid parameter or sample size aborts the whole startup,
    /// so the caller never gets an app with a partial figure set.
    pub fn new(config: AppConfig) -> Result<Self, DistributionError> {
        let mut rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };

        let families = [
            Distribution::Normal,
            Distribution::Cauchy,
            Distribution::StudentT { df: config.df },
            Distribution::Poisson { lambda: config.lambda },
            Distribution::Uniform,
        ];

        let mut figures = Vec::with_capacity(families.len());
        for family in families {
            tracing::debug!("Composing {} figure", family.name());
            figures.push(Figure::compose(family, &config.sizes, &mut rng)?);
        }

        Ok(Self {
            state: AppState::new(figures, config.sizes),
            rng,
            tab_bar: TabBar::new(),
            status_bar: StatusBar::new(),
        })
    }

    /// runs the application's main loop until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        tracing::info!("Entering display loop");
        while !self.state.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    /// Read access to the UI state, for rendering and tests.
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub(crate) fn draw(&mut self, frame: &mut Frame) {
        // Main layout: tab bar, figure, status bar
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Tab bar
                Constraint::Min(0),    // Figure panels
                Constraint::Length(2), // Status bar
            ])
            .split(frame.area());

        self.tab_bar.render(frame, chunks[0], &self.state);
        FigureView::new(self.state.active_figure()).render(frame, chunks[1]);
        self.status_bar.render(frame, chunks[2], &self.state);
    }

    fn handle_events(&mut self) -> io::Result<()> {
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event)
            }
            _ => {}
        };
        Ok(())
    }

    pub(crate) fn handle_key_event(&mut self, key_event: KeyEvent) {
        // Global key bindings
        match key_event.code {
            KeyCode::Char('q') if key_event.modifiers.is_empty() => {
                self.state.exit = true;
                return;
            }
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.exit = true;
                return;
            }
            KeyCode::Char('r') => {
                self.resample();
                return;
            }
            KeyCode::Esc => {
                // Clear error message on Esc
                self.state.clear_error();
                return;
            }
            _ => {}
        }

        // Tab bar owns the navigation keys; moving tabs drops a stale error
        if self.tab_bar.handle_key(key_event, &mut self.state) == EventResult::Handled {
            self.state.clear_error();
        }
    }

    /// Redraw the active figure from fresh samples; family parameters and
    /// sample sizes stay as composed at startup.
    fn resample(&mut self) {
        let distribution = self.state.active_figure().distribution;
        tracing::debug!("Resampling {} figure", distribution.name());

        match Figure::compose(distribution, &self.state.sizes, &mut self.rng) {
            Ok(figure) => {
                let active = self.state.active;
                self.state.figures[active] = figure;
                self.state.clear_error();
            }
            Err(e) => {
                self.state.set_error(format!("Failed to resample: {}", e));
            }
        }
    }
}
