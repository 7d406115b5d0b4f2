//! The scramble → translate → solve → verify pipeline.
//!
//! One call runs the whole request flow in a straight line: obtain a cube,
//! encode it for the solver, ask the backend for a solution, apply that
//! solution to the scrambled cube and check the result.

use std::sync::Arc;
use std::time::{Duration, Instant};

use rubik_core::{
    random_scramble, to_facelets, ColourMap, Cube, MoveSequence, DEFAULT_SCRAMBLE_LENGTH,
};

use crate::{PipelineError, SolverBackend};

/// Outcome of one solve.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct SolveReport {
    /// Moves that produced the cube; empty when a state was supplied directly.
    pub scramble: MoveSequence,
    /// Moves returned by the solver.
    pub solution: MoveSequence,
    /// Sticker colours before the solution was applied.
    pub pre_state: ColourMap,
    /// Sticker colours after the solution was applied.
    pub post_state: ColourMap,
    /// Whether every face shows a single colour after the solution.
    pub solved: bool,
    /// Wall-clock time from translation to verification.
    pub solve_time: Duration,
}

/// Runs solves against a shared [`SolverBackend`].
///
/// Holds no per-request state, so one pipeline serves every request.
pub struct SolvePipeline {
    backend: Arc<dyn SolverBackend>,
    scramble_length: usize,
}

impl SolvePipeline {
    /// Create a pipeline generating default-length scrambles.
    #[must_use]
    pub fn new(backend: impl SolverBackend + 'static) -> Self {
        Self::with_scramble_length(backend, DEFAULT_SCRAMBLE_LENGTH)
    }

    /// Create a pipeline generating scrambles of `scramble_length` moves.
    #[must_use]
    pub fn with_scramble_length(
        backend: impl SolverBackend + 'static,
        scramble_length: usize,
    ) -> Self {
        Self { backend: Arc::new(backend), scramble_length }
    }

    /// The backend solves are delegated to.
    #[must_use]
    pub fn backend(&self) -> &dyn SolverBackend {
        self.backend.as_ref()
    }

    /// Scramble a fresh cube and solve it.
    ///
    /// A missing or blank `scramble` is replaced by a random one.
    ///
    /// # Errors
    /// Returns [`PipelineError::InvalidScramble`] for malformed notation and
    /// [`PipelineError::Solver`] if the backend fails.
    pub async fn solve_scramble(
        &self,
        scramble: Option<&str>,
    ) -> Result<SolveReport, PipelineError> {
        let scramble = self.resolve_scramble(scramble)?;
        let mut cube = Cube::solved();
        cube.apply_all(&scramble);
        self.solve_cube(scramble, cube).await
    }

    /// Solve a cube given directly as sticker colours.
    ///
    /// # Errors
    /// Returns [`PipelineError::InvalidState`] if the map is not a 6 x 9 grid
    /// or its colours cannot be assigned to faces, and
    /// [`PipelineError::Solver`] if the backend fails.
    pub async fn solve_state(&self, state: &ColourMap) -> Result<SolveReport, PipelineError> {
        let cube = Cube::from_colour_map(state).map_err(PipelineError::InvalidState)?;
        self.solve_cube(MoveSequence::default(), cube).await
    }

    fn resolve_scramble(&self, text: Option<&str>) -> Result<MoveSequence, PipelineError> {
        match text.map(str::trim).filter(|t| !t.is_empty()) {
            Some(text) => text.parse().map_err(PipelineError::InvalidScramble),
            None => Ok(random_scramble(&mut rand::thread_rng(), self.scramble_length)),
        }
    }

    async fn solve_cube(
        &self,
        scramble: MoveSequence,
        cube: Cube,
    ) -> Result<SolveReport, PipelineError> {
        let start = Instant::now();
        let pre_state = cube.colour_map();
        let facelets = to_facelets(&cube).map_err(PipelineError::InvalidState)?;

        tracing::info!(%scramble, %facelets, "invoking solver");

        let solution = self.backend.solve(&facelets).await?;

        let mut after = cube;
        after.apply_all(&solution);
        // Verify on the face assignment the solver saw, not on raw labels.
        let mut check = Cube::from_facelets(&facelets);
        check.apply_all(&solution);
        let solved = check.is_solved();
        let solve_time = start.elapsed();

        if solved {
            tracing::info!(
                %solution,
                moves = solution.len(),
                elapsed_ms = solve_time.as_millis(),
                "solve complete"
            );
        } else {
            tracing::warn!(%facelets, %solution, "solver answer does not solve the cube");
        }

        Ok(SolveReport {
            scramble,
            solution,
            pre_state,
            post_state: after.colour_map(),
            solved,
            solve_time,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use rubik_core::{Colour, CoreError, Face, FaceletString, Move, Turn};

    use super::*;
    use crate::SolverError;

    /// Answers every solve with the same notation.
    struct FixedBackend(&'static str);

    #[async_trait]
    impl SolverBackend for FixedBackend {
        async fn solve(&self, _facelets: &FaceletString) -> Result<MoveSequence, SolverError> {
            self.0.parse().map_err(|source| SolverError::InvalidOutput {
                output: self.0.to_owned(),
                source,
            })
        }

        async fn health_check(&self) -> Result<(), SolverError> {
            Ok(())
        }
    }

    /// Records the facelets it is asked to solve and always fails.
    #[derive(Default)]
    struct RecordingFailBackend {
        seen: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl SolverBackend for RecordingFailBackend {
        async fn solve(&self, facelets: &FaceletString) -> Result<MoveSequence, SolverError> {
            if let Ok(mut seen) = self.seen.lock() {
                seen.push(facelets.to_string());
            }
            Err(SolverError::Rejected("mock always fails".to_owned()))
        }

        async fn health_check(&self) -> Result<(), SolverError> {
            Err(SolverError::SpawnFailed("mock".to_owned()))
        }
    }

    #[tokio::test]
    async fn correct_solution_is_verified_solved() {
        let pipeline = SolvePipeline::new(FixedBackend("U R U' R'"));
        let report = match pipeline.solve_scramble(Some("R U R' U'")).await {
            Ok(r) => r,
            Err(e) => panic!("unexpected error: {e}"),
        };
        assert_eq!(report.scramble.to_string(), "R U R' U'");
        assert_eq!(report.solution.to_string(), "U R U' R'");
        assert!(report.solved, "inverse of the scramble must solve the cube");
        assert_ne!(report.pre_state, report.post_state);
        assert_eq!(report.post_state, Cube::solved().colour_map());
    }

    #[tokio::test]
    async fn wrong_solution_is_reported_not_errored() {
        let pipeline = SolvePipeline::new(FixedBackend("F"));
        let report = match pipeline.solve_scramble(Some("R")).await {
            Ok(r) => r,
            Err(e) => panic!("unexpected error: {e}"),
        };
        assert!(!report.solved);
    }

    #[tokio::test]
    async fn blank_scramble_generates_random_one() {
        let pipeline = SolvePipeline::with_scramble_length(FixedBackend(""), 12);
        for input in [None, Some(""), Some("   ")] {
            let report = match pipeline.solve_scramble(input).await {
                Ok(r) => r,
                Err(e) => panic!("unexpected error for {input:?}: {e}"),
            };
            assert_eq!(report.scramble.len(), 12);
            assert!(report.solution.is_empty());
        }
    }

    #[tokio::test]
    async fn malformed_scramble_is_invalid_scramble() {
        let backend = RecordingFailBackend::default();
        let pipeline = SolvePipeline::new(backend);
        let result = pipeline.solve_scramble(Some("R Q2")).await;
        assert!(
            matches!(result, Err(PipelineError::InvalidScramble(CoreError::InvalidMove { .. }))),
            "got {result:?}"
        );
    }

    #[tokio::test]
    async fn solver_failure_propagates() {
        let pipeline = SolvePipeline::new(RecordingFailBackend::default());
        let result = pipeline.solve_scramble(Some("R")).await;
        assert!(
            matches!(result, Err(PipelineError::Solver(SolverError::Rejected(_)))),
            "got {result:?}"
        );
    }

    #[tokio::test]
    async fn solver_receives_scrambled_facelets() {
        let backend = Arc::new(RecordingFailBackend::default());
        let pipeline = SolvePipeline::new(SharedBackend(Arc::clone(&backend)));
        let _ = pipeline.solve_scramble(Some("R")).await;
        let seen = match backend.seen.lock() {
            Ok(seen) => seen.clone(),
            Err(e) => panic!("lock poisoned: {e}"),
        };
        assert_eq!(seen, vec!["UUFUUFUUFRRRRRRRRRFFDFFDFFDDDBDDBDDBLLLLLLLLLUBBUBBUBB".to_owned()]);
    }

    #[tokio::test]
    async fn supplied_state_is_solved_directly() {
        let mut cube = Cube::solved();
        cube.apply_all(&match "F2 D'".parse() {
            Ok(s) => s,
            Err(e) => panic!("bad sequence: {e}"),
        });
        let pipeline = SolvePipeline::new(FixedBackend("D F2"));
        let report = match pipeline.solve_state(&cube.colour_map()).await {
            Ok(r) => r,
            Err(e) => panic!("unexpected error: {e}"),
        };
        assert!(report.scramble.is_empty());
        assert!(report.solved);
    }

    #[tokio::test]
    async fn abbreviated_labels_verify_by_face_assignment() {
        let mut cube = Cube::solved();
        cube.apply(Move { face: Face::R, turn: Turn::Clockwise });
        let mut state = cube.colour_map();
        if let Some(stickers) = state.get_mut(&Face::F) {
            stickers[0] = Colour::new("gr");
            stickers[3] = Colour::new("Green ");
        }
        if let Some(stickers) = state.get_mut(&Face::U) {
            stickers[0] = Colour::new("yel");
        }
        let pipeline = SolvePipeline::new(FixedBackend("R'"));
        let report = match pipeline.solve_state(&state).await {
            Ok(r) => r,
            Err(e) => panic!("unexpected error: {e}"),
        };
        assert!(report.solved, "abbreviated labels must not fail verification");
        assert_eq!(report.post_state[&Face::F][0], Colour::new("gr"));
    }

    #[tokio::test]
    async fn blank_centre_state_is_solved() {
        let mut state = Cube::solved().colour_map();
        if let Some(stickers) = state.get_mut(&Face::R) {
            stickers[4] = Colour::new("");
        }
        let pipeline = SolvePipeline::new(FixedBackend(""));
        let report = match pipeline.solve_state(&state).await {
            Ok(r) => r,
            Err(e) => panic!("unexpected error: {e}"),
        };
        assert!(report.solved);
    }

    #[tokio::test]
    async fn unrecognized_colour_is_invalid_state() {
        let mut state = Cube::solved().colour_map();
        if let Some(stickers) = state.get_mut(&Face::U) {
            stickers[0] = Colour::new("magenta");
        }
        let pipeline = SolvePipeline::new(FixedBackend(""));
        let result = pipeline.solve_state(&state).await;
        assert!(
            matches!(
                result,
                Err(PipelineError::InvalidState(CoreError::UnrecognizedColour { .. }))
            ),
            "got {result:?}"
        );
    }

    /// Lets a test keep a handle on a backend owned by the pipeline.
    struct SharedBackend(Arc<RecordingFailBackend>);

    #[async_trait]
    impl SolverBackend for SharedBackend {
        async fn solve(&self, facelets: &FaceletString) -> Result<MoveSequence, SolverError> {
            self.0.solve(facelets).await
        }

        async fn health_check(&self) -> Result<(), SolverError> {
            self.0.health_check().await
        }
    }
}
