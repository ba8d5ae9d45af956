use std::fmt;

/// Complete Leona program: the top-level instruction sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    pub instructions: Vec<Instruction>,
}

/// A single instruction. `Repeat` owns its body, which may nest
/// further repeats to any depth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    /// `UP` or `DOWN`.
    Pen(PenState),
    /// `FORW`, `BACK`, `LEFT` or `RIGHT` with a distance or angle.
    Move { kind: MoveKind, amount: u32 },
    /// `COLOR #RRGGBB`.
    SetColor(String),
    /// `REP n " ... "`.
    Repeat { count: u32, body: Vec<Self> },
}

/// Pen position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PenState {
    Up,
    Down,
}

/// Movement or turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    Forward,
    Backward,
    TurnLeft,
    TurnRight,
}

impl MoveKind {
    /// Whether the instruction changes position rather than heading.
    #[must_use]
    pub const fn is_translation(self) -> bool {
        matches!(self, Self::Forward | Self::Backward)
    }

    /// Signed amount: backward and right turns count negative.
    #[must_use]
    pub fn signed(self, amount: u32) -> f64 {
        let amount = f64::from(amount);
        match self {
            Self::Forward | Self::TurnLeft => amount,
            Self::Backward | Self::TurnRight => -amount,
        }
    }
}

impl fmt::Display for PenState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Up => f.write_str("UP"),
            Self::Down => f.write_str("DOWN"),
        }
    }
}

impl fmt::Display for MoveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Forward => f.write_str("FORW"),
            Self::Backward => f.write_str("BACK"),
            Self::TurnLeft => f.write_str("LEFT"),
            Self::TurnRight => f.write_str("RIGHT"),
        }
    }
}

impl Program {
    /// Number of non-repeat instructions a run executes, with repeats
    /// expanded.
    /// Saturates at `u64::MAX`.
    #[must_use]
    pub fn executed_len(&self) -> u64 {
        let mut total: u64 = 0;
        // Bodies still to count, each with the product of the repeat
        // counts enclosing it.
        let mut pending = vec![(self.instructions.as_slice(), 1_u64)];

        while let Some((instructions, times)) = pending.pop() {
            for instruction in instructions {
                match instruction {
                    Instruction::Repeat { count, body } => {
                        pending.push((body, times.saturating_mul(u64::from(*count))));
                    }
                    _ => total = total.saturating_add(times),
                }
            }
        }
        total
    }
}

/// Nested bodies are moved onto a worklist before they drop, so
/// dropping a deeply nested repeat does not recurse once per level.
impl Drop for Instruction {
    fn drop(&mut self) {
        let Self::Repeat { body, .. } = self else {
            return;
        };
        let mut pending = std::mem::take(body);
        while let Some(mut instruction) = pending.pop() {
            if let Self::Repeat { body, .. } = &mut instruction {
                pending.append(body);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn executed_len_multiplies_nested_counts() {
        let program = Program::new()
            .pen_down()
            .repeat(3, Program::new().forward(1).repeat(4, Program::new().left(90)));
        assert_eq!(program.executed_len(), 1 + 3 * (1 + 4));
    }

    #[test]
    fn executed_len_saturates() {
        let mut program = Program::new().forward(1);
        for _ in 0..4 {
            program = Program::new().repeat(u32::MAX, program);
        }
        assert_eq!(program.executed_len(), u64::MAX);
    }

    #[test]
    fn drops_deep_nesting() {
        let mut instruction = Instruction::Pen(PenState::Down);
        for _ in 0..100_000 {
            instruction = Instruction::Repeat {
                count: 1,
                body: vec![instruction],
            };
        }
        drop(instruction);
    }
}
