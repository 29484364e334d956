//! Observation of intermediate cipher states.
//!
//! The round engine reports a [`Snapshot`] after every transform it applies.
//! Observers only ever see copies of the state, so tracing cannot influence the
//! computation.

use core::fmt;

use crate::block::{column_major_index, Block};

/// Number of snapshots emitted by a full encryption (41): the input, the
/// initial whitening, four per main round and three for the final round.
pub const FULL_TRACE_LEN: usize = 1 + 1 + 4 * 9 + 3;

/// Transform that produced a snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stage {
    /// The untouched plaintext block.
    Input,
    /// After SubBytes.
    SubBytes,
    /// After ShiftRows.
    ShiftRows,
    /// After MixColumns.
    MixColumns,
    /// After AddRoundKey.
    AddRoundKey,
}

impl Stage {
    /// Transform name as used in trace labels.
    pub fn name(self) -> &'static str {
        match self {
            Stage::Input => "Input",
            Stage::SubBytes => "SubBytes",
            Stage::ShiftRows => "ShiftRows",
            Stage::MixColumns => "MixColumns",
            Stage::AddRoundKey => "AddRoundKey",
        }
    }
}

/// State of the block after one transform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Snapshot {
    /// Round number, 0 for the input and whitening steps.
    pub round: usize,
    /// Transform just applied.
    pub stage: Stage,
    /// Column-major state after the transform.
    pub state: Block,
}

impl Snapshot {
    /// Human-readable label, e.g. `Round 3 - MixColumns`.
    pub fn label(&self) -> String {
        match (self.round, self.stage) {
            (_, Stage::Input) => "Initial State".to_string(),
            (crate::ROUNDS, Stage::AddRoundKey) => {
                format!("Round {} - AddRoundKey (final)", crate::ROUNDS)
            }
            (round, stage) => format!("Round {round} - {}", stage.name()),
        }
    }

    /// Borrows the state for grid display.
    pub fn grid(&self) -> Grid<'_> {
        Grid(&self.state)
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.label())?;
        write!(f, "{}", self.grid())
    }
}

/// Displays a block as a 4x4 grid, one row per line.
#[derive(Clone, Copy, Debug)]
pub struct Grid<'a>(pub &'a Block);

impl fmt::Display for Grid<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..4 {
            f.write_str(" ")?;
            for column in 0..4 {
                write!(f, " {:02x}", self.0[column_major_index(column, row)])?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

/// Receives snapshots from the round engine in round order.
pub trait Observer {
    /// Called once per transform application.
    fn observe(&mut self, snapshot: &Snapshot);
}

impl<F> Observer for F
where
    F: FnMut(&Snapshot),
{
    fn observe(&mut self, snapshot: &Snapshot) {
        self(snapshot)
    }
}

/// Observer that keeps every snapshot it is given.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Trace {
    snapshots: Vec<Snapshot>,
}

impl Trace {
    /// Creates an empty trace sized for one full encryption.
    pub fn new() -> Self {
        Self {
            snapshots: Vec::with_capacity(FULL_TRACE_LEN),
        }
    }

    /// Recorded snapshots, oldest first.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Number of recorded snapshots.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Returns true if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Last recorded snapshot.
    pub fn last(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }
}

impl Observer for Trace {
    fn observe(&mut self, snapshot: &Snapshot) {
        self.snapshots.push(*snapshot);
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Snapshot;
    type IntoIter = core::slice::Iter<'a, Snapshot>;

    fn into_iter(self) -> Self::IntoIter {
        self.snapshots.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(round: usize, stage: Stage) -> Snapshot {
        Snapshot {
            round,
            stage,
            state: core::array::from_fn(|i| i as u8),
        }
    }

    #[test]
    fn labels() {
        assert_eq!(snapshot(0, Stage::Input).label(), "Initial State");
        assert_eq!(snapshot(0, Stage::AddRoundKey).label(), "Round 0 - AddRoundKey");
        assert_eq!(snapshot(4, Stage::MixColumns).label(), "Round 4 - MixColumns");
        assert_eq!(snapshot(10, Stage::ShiftRows).label(), "Round 10 - ShiftRows");
        assert_eq!(
            snapshot(10, Stage::AddRoundKey).label(),
            "Round 10 - AddRoundKey (final)"
        );
    }

    #[test]
    fn display_renders_rows_of_column_major_state() {
        let rendered = snapshot(1, Stage::SubBytes).to_string();
        assert_eq!(
            rendered,
            "Round 1 - SubBytes:\n  00 04 08 0c\n  01 05 09 0d\n  02 06 0a 0e\n  03 07 0b 0f\n"
        );
    }

    #[test]
    fn trace_records_in_order() {
        let mut trace = Trace::new();
        assert!(trace.is_empty());
        trace.observe(&snapshot(0, Stage::Input));
        trace.observe(&snapshot(0, Stage::AddRoundKey));
        assert_eq!(trace.len(), 2);
        assert_eq!(trace.snapshots()[0].stage, Stage::Input);
        assert_eq!(trace.last().map(|s| s.stage), Some(Stage::AddRoundKey));
    }

    #[test]
    fn closures_are_observers() {
        let mut rounds = Vec::new();
        let mut observer = |s: &Snapshot| rounds.push(s.round);
        observer.observe(&snapshot(3, Stage::SubBytes));
        observer.observe(&snapshot(4, Stage::SubBytes));
        assert_eq!(rounds, vec![3, 4]);
    }
}
