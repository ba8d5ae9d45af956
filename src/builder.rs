use crate::ast::{Instruction, MoveKind, PenState, Program};

impl Program {
    /// Create a new empty program.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            instructions: Vec::new(),
        }
    }

    /// Append an instruction.
    #[must_use]
    pub fn instruction(mut self, instruction: Instruction) -> Self {
        self.instructions.push(instruction);
        self
    }

    /// Append `UP`.
    #[must_use]
    pub fn pen_up(self) -> Self {
        self.instruction(Instruction::Pen(PenState::Up))
    }

    /// Append `DOWN`.
    #[must_use]
    pub fn pen_down(self) -> Self {
        self.instruction(Instruction::Pen(PenState::Down))
    }

    /// Append `FORW amount`.
    #[must_use]
    pub fn forward(self, amount: u32) -> Self {
        self.movement(MoveKind::Forward, amount)
    }

    /// Append `BACK amount`.
    #[must_use]
    pub fn backward(self, amount: u32) -> Self {
        self.movement(MoveKind::Backward, amount)
    }

    /// Append `LEFT degrees`.
    #[must_use]
    pub fn left(self, degrees: u32) -> Self {
        self.movement(MoveKind::TurnLeft, degrees)
    }

    /// Append `RIGHT degrees`.
    #[must_use]
    pub fn right(self, degrees: u32) -> Self {
        self.movement(MoveKind::TurnRight, degrees)
    }

    /// Append `COLOR color`. The color is stored verbatim.
    #[must_use]
    pub fn color(self, color: &str) -> Self {
        self.instruction(Instruction::SetColor(color.to_string()))
    }

    /// Append a repeat block whose body is another program's
    /// instructions.
    #[must_use]
    pub fn repeat(self, count: u32, body: Self) -> Self {
        self.instruction(Instruction::Repeat {
            count,
            body: body.instructions,
        })
    }

    fn movement(self, kind: MoveKind, amount: u32) -> Self {
        self.instruction(Instruction::Move { kind, amount })
    }
}

impl Default for Program {
    fn default() -> Self {
        Self::new()
    }
}
