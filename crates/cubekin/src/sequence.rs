//! Playback of move sequences one quarter turn at a time.
//!
//! Solvers return moves such as `R2`, but a presentation layer animating the
//! solution needs to see the cube halfway through a half turn. Playback
//! therefore splits every move into quarter turns.

use std::ops::ControlFlow;

use cubekin_notation::Move;

use crate::{CubeError, Cubelet, Lattice};

/// Quarter turn produced during playback.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Step {
    /// Number of quarter turns produced before this one.
    pub index: usize,
    /// Index of the move this quarter turn came from.
    pub token_index: usize,
    /// Move this quarter turn came from.
    pub token: Move,
    /// Quarter turn to apply.
    pub primitive: Move,
    /// Whether this is the last quarter turn of `token`.
    pub ends_token: bool,
}

#[derive(Debug)]
struct PendingToken {
    token_index: usize,
    token: Move,
    remaining: u32,
}

/// Iterator over the quarter turns of a move sequence.
///
/// Moves are never reordered or merged. Once consumed, a playback cannot be
/// restarted.
#[derive(Debug)]
pub struct Playback<I> {
    tokens: std::iter::Enumerate<I>,
    pending: Option<PendingToken>,
    position: usize,
}

impl<I: Iterator<Item = Move>> Playback<I> {
    /// Constructs a playback of `moves`.
    pub fn new(moves: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            tokens: moves.into_iter().enumerate(),
            pending: None,
            position: 0,
        }
    }

    /// Returns the number of quarter turns produced so far.
    pub fn position(&self) -> usize {
        self.position
    }
}

impl<I: Iterator<Item = Move>> Iterator for Playback<I> {
    type Item = Step;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.pending.as_ref().is_some_and(|p| p.remaining > 0) {
            let (token_index, token) = self.tokens.next()?;
            self.pending = Some(PendingToken {
                token_index,
                token,
                remaining: token.quarter_turn_count(),
            });
        }
        let pending = self.pending.as_mut()?;

        pending.remaining -= 1;
        let step = Step {
            index: self.position,
            token_index: pending.token_index,
            token: pending.token,
            primitive: pending.token.quarter_turn(),
            ends_token: pending.remaining == 0,
        };
        self.position += 1;
        Some(step)
    }
}

/// Expands a move sequence into quarter turns.
///
/// `R` becomes `R`, `R'` becomes `R'`, and `R2` becomes `R R`.
pub fn expand<I: IntoIterator<Item = Move>>(moves: I) -> impl Iterator<Item = Move> {
    Playback::new(moves).map(|step| step.primitive)
}

/// Receiver of each intermediate state during [`Lattice::replay()`], such as a
/// renderer or animation recorder.
pub trait Presenter {
    /// Called after each quarter turn with the cubelets that moved and the
    /// whole cube. Returning [`ControlFlow::Break`] stops the replay before the
    /// next quarter turn.
    fn present(&mut self, step: &Step, affected: &[Cubelet], lattice: &Lattice)
    -> ControlFlow<()>;
}

impl Presenter for () {
    fn present(&mut self, _: &Step, _: &[Cubelet], _: &Lattice) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }
}

impl<F> Presenter for F
where
    F: FnMut(&Step, &[Cubelet], &Lattice) -> ControlFlow<()>,
{
    fn present(
        &mut self,
        step: &Step,
        affected: &[Cubelet],
        lattice: &Lattice,
    ) -> ControlFlow<()> {
        self(step, affected, lattice)
    }
}

/// Outcome of [`Lattice::replay()`].
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct ReplaySummary {
    /// Number of quarter turns applied.
    pub steps: usize,
    /// Number of moves fully applied.
    pub tokens: usize,
    /// Whether the whole sequence was applied.
    pub completed: bool,
}

impl Lattice {
    /// Applies `moves` one quarter turn at a time, reporting each step to
    /// `presenter`.
    pub fn replay(
        &mut self,
        moves: impl IntoIterator<Item = Move>,
        presenter: &mut impl Presenter,
    ) -> Result<ReplaySummary, CubeError> {
        let mut summary = ReplaySummary::default();
        for step in Playback::new(moves) {
            let affected = self.apply(step.primitive)?;
            summary.steps += 1;
            if step.ends_token {
                summary.tokens += 1;
            }
            if presenter.present(&step, &affected, self).is_break() {
                log::debug!("replay stopped after {} quarter turns", summary.steps);
                return Ok(summary);
            }
        }
        summary.completed = true;
        Ok(summary)
    }
}
