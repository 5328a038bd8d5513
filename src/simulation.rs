//! Bevy plugin that runs the physics engine for the interactive shell.
//!
//! The shell writes a [`RunImpactEvent`] once the operator's input has been
//! validated; the engine runs synchronously in the same frame and the
//! outcome is stored in [`CurrentImpact`] for the UI to render. A
//! [`ResetEvent`] starts the next run with a fresh detection.

use bevy::prelude::*;

use crate::detection::{Detection, DetectionRng};
use crate::hazard::{HazardAssessment, classify};
use crate::historical::{HistoricalEvent, nearest_historical};
use crate::report::{DEFAULT_REPORT_WIDTH, ImpactReport};
use crate::types::{ImpactParameters, SimulationResult};

/// Request to run the engine on validated parameters.
#[derive(Message, Clone, Copy, Debug)]
pub struct RunImpactEvent {
    pub parameters: ImpactParameters,
}

/// Discard the current outcome and detect a new object.
#[derive(Message, Clone, Copy, Debug, Default)]
pub struct ResetEvent;

/// Detection generator and the object currently being assessed.
#[derive(Resource)]
pub struct DetectionState {
    rng: DetectionRng,
    pub current: Detection,
}

impl Default for DetectionState {
    fn default() -> Self {
        Self::from_rng(DetectionRng::from_clock())
    }
}

impl DetectionState {
    /// Deterministic state for tests and reproducible sessions.
    pub fn with_seed(seed: u32) -> Self {
        Self::from_rng(DetectionRng::new(seed))
    }

    fn from_rng(mut rng: DetectionRng) -> Self {
        let current = rng.detect();
        Self { rng, current }
    }

    /// Replace the current detection with a new one.
    pub fn redetect(&mut self) -> &Detection {
        self.current = self.rng.detect();
        &self.current
    }
}

/// Everything produced by one engine run.
#[derive(Clone, Debug)]
pub struct ImpactOutcome {
    pub detection: Detection,
    pub parameters: ImpactParameters,
    pub result: SimulationResult,
    pub assessment: HazardAssessment,
    pub analogue: &'static HistoricalEvent,
    pub report: ImpactReport,
}

impl ImpactOutcome {
    /// Run the engine and classify the result.
    pub fn evaluate(detection: Detection, parameters: ImpactParameters) -> Self {
        let result = parameters.simulate();
        let assessment = classify(result.megatons);
        let analogue = nearest_historical(result.megatons);
        let report = ImpactReport::build(
            &detection.designation,
            &parameters,
            &result,
            &assessment,
            analogue,
        );
        Self {
            detection,
            parameters,
            result,
            assessment,
            analogue,
            report,
        }
    }
}

/// Latest outcome, `None` while the operator is still entering parameters.
#[derive(Resource, Default)]
pub struct CurrentImpact {
    pub outcome: Option<ImpactOutcome>,
    /// Number of completed runs this session.
    pub runs: u32,
}

/// Plugin wiring the engine into the app.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<RunImpactEvent>()
            .add_message::<ResetEvent>()
            .init_resource::<DetectionState>()
            .init_resource::<CurrentImpact>()
            .add_systems(Startup, announce_detection)
            .add_systems(Update, (handle_reset, run_impact_simulation).chain());
    }
}

fn announce_detection(detection: Res<DetectionState>) {
    info!(
        "ALERT: {} detected by {}",
        detection.current.designation, detection.current.observatory
    );
}

/// Run the engine for each pending request.
///
/// Only the last request of a frame is kept as the current outcome.
fn run_impact_simulation(
    mut requests: MessageReader<RunImpactEvent>,
    detection: Res<DetectionState>,
    mut current: ResMut<CurrentImpact>,
) {
    for request in requests.read() {
        let outcome = ImpactOutcome::evaluate(detection.current.clone(), request.parameters);

        info!(
            "{}: {:.3e} kg, {:.3} Mt, tier {}, analogue {}",
            outcome.detection.designation,
            outcome.result.mass_kg,
            outcome.result.megatons,
            outcome.assessment.tier.label(),
            outcome.analogue.name
        );
        debug!("\n{}", outcome.report.to_text(DEFAULT_REPORT_WIDTH));

        current.outcome = Some(outcome);
        current.runs += 1;
    }
}

fn handle_reset(
    mut resets: MessageReader<ResetEvent>,
    mut detection: ResMut<DetectionState>,
    mut current: ResMut<CurrentImpact>,
) {
    // Several resets in one frame still mean one new object
    if resets.read().count() == 0 {
        return;
    }

    current.outcome = None;
    let next = detection.redetect();
    info!("ALERT: {} detected by {}", next.designation, next.observatory);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hazard::HazardTier;
    use crate::material::MaterialClass;

    #[test]
    fn test_seeded_detection_is_reproducible() {
        let a = DetectionState::with_seed(99);
        let b = DetectionState::with_seed(99);
        assert_eq!(a.current, b.current);
    }

    #[test]
    fn test_redetect_changes_object() {
        let mut state = DetectionState::with_seed(3);
        let first = state.current.clone();
        let second = state.redetect().clone();
        assert_ne!(first, second);
    }

    #[test]
    fn test_evaluate_bundles_consistent_results() {
        let params = ImpactParameters::new(10_000.0, MaterialClass::Metallic, 20_000.0)
            .expect("valid parameters");
        let detection = DetectionState::with_seed(1).current;
        let outcome = ImpactOutcome::evaluate(detection.clone(), params);

        assert_eq!(outcome.result, params.simulate());
        assert_eq!(outcome.assessment.tier, HazardTier::ExtinctionLevelEvent);
        assert_eq!(outcome.analogue.name, "Chicxulub");
        let object = outcome.report.section("OBJECT").expect("object section");
        assert_eq!(object.lines[0], detection.designation);
    }
}
