//! Traits describing the host collaborators the spawn controller consults.
//!
//! Oracles expose the live population, the aggregate difficulty pressure, the
//! boss-fight signal, the spawn boundary and randomness. The [`Env`] aggregate
//! bundles them so the controller can access everything it needs without hard
//! coupling to concrete implementations (or to global singletons).
mod boundary;
mod encounter;
mod error;
mod population;
mod pressure;
mod rng;

pub use boundary::{BoundaryOracle, FixedBoundary};
pub use encounter::EncounterOracle;
pub use error::OracleError;
pub use population::PopulationOracle;
pub use pressure::{FixedPressure, PressureOracle};
pub use rng::{PcgRng, RngOracle, compute_seed};

/// Aggregates the oracles required by the wave controller.
pub struct Env<'a, P, S, E, B, R>
where
    P: PopulationOracle + ?Sized,
    S: PressureOracle + ?Sized,
    E: EncounterOracle + ?Sized,
    B: BoundaryOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    population: Option<&'a P>,
    pressure: Option<&'a S>,
    encounter: Option<&'a E>,
    boundary: Option<&'a B>,
    rng: Option<&'a R>,
}

// Manual impls: derive would demand `P: Clone` even though only references are held.
impl<P, S, E, B, R> Clone for Env<'_, P, S, E, B, R>
where
    P: PopulationOracle + ?Sized,
    S: PressureOracle + ?Sized,
    E: EncounterOracle + ?Sized,
    B: BoundaryOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<P, S, E, B, R> Copy for Env<'_, P, S, E, B, R>
where
    P: PopulationOracle + ?Sized,
    S: PressureOracle + ?Sized,
    E: EncounterOracle + ?Sized,
    B: BoundaryOracle + ?Sized,
    R: RngOracle + ?Sized,
{
}

pub type SpawnEnv<'a> = Env<
    'a,
    dyn PopulationOracle + 'a,
    dyn PressureOracle + 'a,
    dyn EncounterOracle + 'a,
    dyn BoundaryOracle + 'a,
    dyn RngOracle + 'a,
>;

impl<'a, P, S, E, B, R> Env<'a, P, S, E, B, R>
where
    P: PopulationOracle + ?Sized,
    S: PressureOracle + ?Sized,
    E: EncounterOracle + ?Sized,
    B: BoundaryOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    pub fn new(
        population: Option<&'a P>,
        pressure: Option<&'a S>,
        encounter: Option<&'a E>,
        boundary: Option<&'a B>,
        rng: Option<&'a R>,
    ) -> Self {
        Self {
            population,
            pressure,
            encounter,
            boundary,
            rng,
        }
    }

    pub fn with_all(
        population: &'a P,
        pressure: &'a S,
        encounter: &'a E,
        boundary: &'a B,
        rng: &'a R,
    ) -> Self {
        Self::new(
            Some(population),
            Some(pressure),
            Some(encounter),
            Some(boundary),
            Some(rng),
        )
    }

    pub fn empty() -> Self {
        Self {
            population: None,
            pressure: None,
            encounter: None,
            boundary: None,
            rng: None,
        }
    }

    /// Returns the PopulationOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::PopulationNotAvailable` if no population oracle was provided.
    pub fn population(&self) -> Result<&'a P, OracleError> {
        self.population.ok_or(OracleError::PopulationNotAvailable)
    }

    /// Returns the PressureOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::PressureNotAvailable` if no pressure oracle was provided.
    pub fn pressure(&self) -> Result<&'a S, OracleError> {
        self.pressure.ok_or(OracleError::PressureNotAvailable)
    }

    /// Returns the EncounterOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::EncounterNotAvailable` if no encounter oracle was provided.
    pub fn encounter(&self) -> Result<&'a E, OracleError> {
        self.encounter.ok_or(OracleError::EncounterNotAvailable)
    }

    /// Returns the BoundaryOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::BoundaryNotAvailable` if no boundary oracle was provided.
    pub fn boundary(&self) -> Result<&'a B, OracleError> {
        self.boundary.ok_or(OracleError::BoundaryNotAvailable)
    }

    /// Returns the RngOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::RngNotAvailable` if no rng oracle was provided.
    pub fn rng(&self) -> Result<&'a R, OracleError> {
        self.rng.ok_or(OracleError::RngNotAvailable)
    }

    /// Checks that every oracle is present, reporting the first missing one.
    ///
    /// # Errors
    ///
    /// Returns the `OracleError` of the first absent oracle.
    pub fn ensure_complete(&self) -> Result<(), OracleError> {
        self.population()?;
        self.pressure()?;
        self.encounter()?;
        self.boundary()?;
        self.rng()?;
        Ok(())
    }
}

impl<'a, P, S, E, B, R> Env<'a, P, S, E, B, R>
where
    P: PopulationOracle + 'a,
    S: PressureOracle + 'a,
    E: EncounterOracle + 'a,
    B: BoundaryOracle + 'a,
    R: RngOracle + 'a,
{
    /// Converts this environment into a trait-object based `SpawnEnv` (borrows self).
    pub fn as_spawn_env(&self) -> SpawnEnv<'a> {
        let population: Option<&'a dyn PopulationOracle> = self.population.map(|p| p as _);
        let pressure: Option<&'a dyn PressureOracle> = self.pressure.map(|p| p as _);
        let encounter: Option<&'a dyn EncounterOracle> = self.encounter.map(|e| e as _);
        let boundary: Option<&'a dyn BoundaryOracle> = self.boundary.map(|b| b as _);
        let rng: Option<&'a dyn RngOracle> = self.rng.map(|r| r as _);
        Env::new(population, pressure, encounter, boundary, rng)
    }
}
