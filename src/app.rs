//! Core application state and frame loop of the visualizer.

use color_eyre::eyre::Result;
use log::debug;
use rand::{rngs::StdRng, SeedableRng as _};
use ratatui::DefaultTerminal;

use crate::{
    animation::FrameClock, barriers, config::Config, error::InvalidConfig, events,
    pathfinding::SearchEngine, ui,
};

/// Application state container for the visualizer.
///
/// This structure owns the search run being displayed together with everything needed to pace it
/// and to start it over. Ratatui renders from it and Crossterm events write to it.
pub struct App {
    /// Application exit flag.
    ///
    /// This field is set to `true` when the user asks to quit, which ends the frame loop.
    pub(crate) exit: bool,
    /// Pause flag.
    ///
    /// While set, the frame clock no longer advances the search; single steps can still be
    /// requested by the user.
    pub(crate) paused: bool,
    /// Options the application was started with.
    ///
    /// These are kept around so that a reset rebuilds the grid with the same geometry and
    /// barrier count.
    pub(crate) config: Config,
    /// Random source for barrier placement.
    ///
    /// Seeded once at startup, so a seeded run produces the same sequence of layouts across
    /// resets.
    pub(crate) rng: StdRng,
    /// Search run currently on screen.
    pub(crate) engine: SearchEngine,
    /// Clock pacing the search to one step per frame.
    pub(crate) clock: FrameClock,
}

impl App {
    /// Creates the application state for a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns the [`InvalidConfig`] raised by [`Config::validate`] if the configuration is
    /// unusable.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        let mut rng = config
            .seed
            .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        let engine = build_engine(&config, &mut rng)?;

        Ok(Self {
            exit: false,
            paused: false,
            clock: FrameClock::new(config.frame_delay()),
            config,
            rng,
            engine,
        })
    }

    /// Runs the main loop of the application.
    ///
    /// Each iteration draws the grid, handles pending input and, when the frame clock allows,
    /// expands one more cell. The loop continues until the exit flag is set.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`]
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.exit {
            let _ = terminal
                .try_draw(|frame| ui::draw(self, frame).map_err(std::io::Error::other))?;
            events::handle_events(self)?;
        }

        Ok(())
    }

    /// Advances the search by one step if the frame clock says it is due and the run is not
    /// paused.
    pub(crate) fn update(&mut self) {
        if !self.paused && self.clock.tick() {
            let _ = self.engine.step();
        }
    }

    /// Flips between running and paused.
    pub(crate) fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        self.clock.reset();
    }

    /// Starts a new run with freshly drawn barriers and the same geometry.
    ///
    /// # Errors
    ///
    /// Returns an [`InvalidConfig`] if the stored configuration stopped being valid, which cannot
    /// happen for a configuration that passed [`Config::validate`].
    pub(crate) fn reset(&mut self) -> Result<()> {
        self.engine = build_engine(&self.config, &mut self.rng)?;
        self.clock.reset();
        debug!("search reset with fresh barriers");

        Ok(())
    }
}

/// Draws barriers and sets up a search run for the given configuration.
fn build_engine(config: &Config, rng: &mut StdRng) -> Result<SearchEngine, InvalidConfig> {
    let barriers = barriers::sample(
        rng,
        config.size,
        config.start,
        config.target,
        config.barriers,
    )?;

    SearchEngine::new(config.size, config.start, config.target, &barriers)
}
