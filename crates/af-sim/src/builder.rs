//! Fluent builder for constructing a [`Sim`].

use tracing::debug;

use af_colony::{enumerate_paths, Colony, PathSelector};
use af_core::FarmConfig;

use crate::{assign_ants, Sim, SimResult, Violation};

/// Fluent builder for [`Sim`].
///
/// `build()` runs the three planning stages in order:
///
/// | Stage      | Source                                         |
/// |------------|------------------------------------------------|
/// | enumerate  | [`enumerate_paths`]                            |
/// | select     | `.selector(s)`, else `config.selection`        |
/// | assign     | [`assign_ants`]                                |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(&colony, 10, FarmConfig::default()).build()?;
/// let transcript = sim.run(&mut NoopObserver)?;
/// print!("{}", transcript.render(&colony, "L"));
/// ```
pub struct SimBuilder<'c> {
    colony:    &'c Colony,
    ant_count: u32,
    config:    FarmConfig,
    selector:  Option<Box<dyn PathSelector>>,
}

impl<'c> SimBuilder<'c> {
    pub fn new(colony: &'c Colony, ant_count: u32, config: FarmConfig) -> Self {
        Self { colony, ant_count, config, selector: None }
    }

    /// Use `selector` instead of the strategy named in the config.
    pub fn selector<S: PathSelector + 'static>(mut self, selector: S) -> Self {
        self.selector = Some(Box::new(selector));
        self
    }

    /// Validate the config, plan the paths and return a ready-to-run [`Sim`].
    ///
    /// # Errors
    ///
    /// `Config` for a bad config, then `NoPath` when no path connects start
    /// and end, then `NoAgents` for a zero ant count.
    pub fn build(self) -> SimResult<Sim<'c>> {
        self.config.validate()?;
        let colony = self.colony;

        let paths = enumerate_paths(colony);
        let selected = match &self.selector {
            Some(selector) => selector.select(colony, paths),
            None           => self.config.selection.select(colony, paths),
        };
        if let Some(path) = selected.iter().position(|p| !p.is_valid_in(colony)) {
            return Err(Violation::InvalidPath { path }.into());
        }

        let assignment = assign_ants(&selected, self.ant_count)?;
        for (path, load) in selected.iter().zip(&assignment.load) {
            debug!(path = %path.render(colony), ants = load, "path load");
        }
        Ok(Sim::new(colony, self.config, selected, assignment))
    }
}
