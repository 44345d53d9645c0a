use log::debug;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::logic::probe::Probe;

/// A single-letter probe instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Forward,
    Backward,
    Left,
    Right,
}

impl Command {
    /// `F`, `B`, `L` or `R`; anything else is not a command.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'F' => Some(Command::Forward),
            'B' => Some(Command::Backward),
            'L' => Some(Command::Left),
            'R' => Some(Command::Right),
            _ => None,
        }
    }

    /// Applies the command; only moves can return `false`.
    pub fn apply(self, probe: &mut Probe<'_>) -> bool {
        match self {
            Command::Forward => probe.move_forward(),
            Command::Backward => probe.move_backward(),
            Command::Left => {
                probe.turn_left();
                true
            }
            Command::Right => {
                probe.turn_right();
                true
            }
        }
    }
}

/// What to do when a move in a command string is refused.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum DispatchPolicy {
    /// Skip the refused move and keep going.
    BestEffort,
    /// Halt on the first refused move.
    #[default]
    StopOnBlock,
}

/// A move that was refused, located by its character index in the command string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BlockedCommand {
    pub index: usize,
    pub command: char,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Every character was processed. Lists the moves skipped under best-effort.
    Completed { skipped: Vec<BlockedCommand> },
    /// Stop-on-block halted here; later characters were not processed.
    Halted(BlockedCommand),
}

/// Runs `commands` against `probe` in order. Unknown characters are ignored.
pub fn execute_commands(
    probe: &mut Probe<'_>,
    commands: &str,
    policy: DispatchPolicy,
) -> DispatchOutcome {
    let mut skipped = Vec::new();
    for (index, c) in commands.chars().enumerate() {
        let Some(command) = Command::from_char(c) else {
            continue;
        };
        if command.apply(probe) {
            continue;
        }
        debug!(
            "Move '{c}' at index {index} blocked at {} facing {}",
            probe.position(),
            probe.direction()
        );
        let blocked = BlockedCommand { index, command: c };
        match policy {
            DispatchPolicy::StopOnBlock => return DispatchOutcome::Halted(blocked),
            DispatchPolicy::BestEffort => skipped.push(blocked),
        }
    }
    DispatchOutcome::Completed { skipped }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::grid::Grid;
    use crate::models::{Direction, Point};

    #[test]
    fn test_sequence_best_effort() {
        let grid = Grid::new(5, 5);
        let mut probe = Probe::new(1, 1, Direction::North, &grid);
        let outcome = execute_commands(&mut probe, "FFRFF", DispatchPolicy::BestEffort);
        assert_eq!(outcome, DispatchOutcome::Completed { skipped: vec![] });
        assert_eq!((probe.x(), probe.y()), (3, 3));
        assert_eq!(probe.direction(), Direction::East);
    }

    #[test]
    fn test_stop_on_block_halts_at_obstacle() {
        let grid = Grid::new(3, 3).with_obstacles([Point::new(1, 2)]);
        let mut probe = Probe::new(1, 1, Direction::North, &grid);
        let outcome = execute_commands(&mut probe, "FFF", DispatchPolicy::StopOnBlock);
        assert_eq!(
            outcome,
            DispatchOutcome::Halted(BlockedCommand { index: 0, command: 'F' })
        );
        assert_eq!((probe.x(), probe.y()), (1, 1));
        assert_eq!(probe.direction(), Direction::North);
    }

    #[test]
    fn test_stop_on_block_keeps_earlier_progress() {
        let grid = Grid::new(3, 3);
        let mut probe = Probe::new(0, 0, Direction::North, &grid);
        let outcome = execute_commands(&mut probe, "FFFRF", DispatchPolicy::StopOnBlock);
        assert_eq!(
            outcome,
            DispatchOutcome::Halted(BlockedCommand { index: 2, command: 'F' })
        );
        assert_eq!(probe.position(), Point::new(0, 2));
        assert_eq!(probe.direction(), Direction::North, "The R after the block must not run");
    }

    #[test]
    fn test_best_effort_continues_past_block() {
        let grid = Grid::new(3, 3);
        let mut probe = Probe::new(0, 0, Direction::North, &grid);
        let outcome = execute_commands(&mut probe, "FFFRF", DispatchPolicy::BestEffort);
        assert_eq!(
            outcome,
            DispatchOutcome::Completed {
                skipped: vec![BlockedCommand { index: 2, command: 'F' }]
            }
        );
        assert_eq!(probe.position(), Point::new(1, 2));
        assert_eq!(probe.direction(), Direction::East);
    }

    #[test]
    fn test_invalid_commands_are_ignored() {
        let grid = Grid::new(5, 5);
        let mut probe = Probe::new(2, 2, Direction::North, &grid);
        let outcome = execute_commands(&mut probe, "FXBZL", DispatchPolicy::BestEffort);
        assert_eq!(outcome, DispatchOutcome::Completed { skipped: vec![] });
        assert_eq!((probe.x(), probe.y()), (2, 2));
        assert_eq!(probe.direction(), Direction::West);
    }

    #[test]
    fn test_lowercase_is_not_a_command() {
        assert_eq!(Command::from_char('f'), None);
        assert_eq!(Command::from_char('F'), Some(Command::Forward));
    }

    #[test]
    fn test_empty_string_is_identity() {
        let grid = Grid::new(5, 5);
        let mut probe = Probe::new(4, 0, Direction::South, &grid);
        for policy in [DispatchPolicy::BestEffort, DispatchPolicy::StopOnBlock] {
            let outcome = execute_commands(&mut probe, "", policy);
            assert_eq!(outcome, DispatchOutcome::Completed { skipped: vec![] });
            assert_eq!(probe.position(), Point::new(4, 0));
            assert_eq!(probe.direction(), Direction::South);
        }
    }

    #[test]
    fn test_index_counts_characters_not_bytes() {
        let grid = Grid::new(2, 2);
        let mut probe = Probe::new(0, 0, Direction::South, &grid);
        let outcome = execute_commands(&mut probe, "éF", DispatchPolicy::StopOnBlock);
        assert_eq!(
            outcome,
            DispatchOutcome::Halted(BlockedCommand { index: 1, command: 'F' })
        );
    }

    #[test]
    fn test_default_policy_is_stop_on_block() {
        assert_eq!(DispatchPolicy::default(), DispatchPolicy::StopOnBlock);
    }
}
