//! Tree-walking turtle machine.
//!
//! A [`Turtle`] walks the instruction tree depth-first, mutating its
//! own position, heading, pen and color in place, and hands one
//! [`Segment`] to the caller's sink for every movement made with the
//! pen down. Repeat bodies are tracked on an explicit frame stack, so
//! nesting depth is bounded by memory, not by the call stack.

use std::convert::Infallible;
use std::f64::consts::PI;
use std::fmt;

use crate::ast::{Instruction, PenState, Program};

/// Pen color of a freshly created turtle.
pub const DEFAULT_COLOR: &str = "#0000FF";

/// A drawn line segment.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub color: String,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// `<color> <x1> <y1> <x2> <y2>` with four decimals per coordinate.
impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:.4} {:.4} {:.4} {:.4}",
            self.color, self.x1, self.y1, self.x2, self.y2
        )
    }
}

/// Turtle state. The heading is in degrees and is never normalized.
#[derive(Debug, Clone, PartialEq)]
pub struct Turtle {
    pub x: f64,
    pub y: f64,
    pub heading: f64,
    pub pen_down: bool,
    pub color: String,
}

impl Default for Turtle {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            heading: 0.0,
            pen_down: false,
            color: DEFAULT_COLOR.to_string(),
        }
    }
}

impl Turtle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Execute instructions in order, passing each drawn segment to
    /// `draw` as soon as it is produced.
    ///
    /// # Errors
    ///
    /// Execution itself cannot fail; the first error returned by
    /// `draw` stops the run and is passed through.
    pub fn run<E>(
        &mut self,
        instructions: &[Instruction],
        draw: &mut impl FnMut(Segment) -> Result<(), E>,
    ) -> Result<(), E> {
        let mut frames = vec![Frame {
            body: instructions,
            next: 0,
            remaining: 1,
        }];

        while let Some(frame) = frames.last_mut() {
            let body = frame.body;
            let Some(instruction) = body.get(frame.next) else {
                frame.remaining -= 1;
                if frame.remaining == 0 {
                    frames.pop();
                } else {
                    frame.next = 0;
                }
                continue;
            };
            frame.next += 1;

            match instruction {
                Instruction::Pen(state) => {
                    self.pen_down = *state == PenState::Down;
                }
                Instruction::Move { kind, amount } => {
                    let amount = kind.signed(*amount);
                    if kind.is_translation() {
                        if let Some(segment) = self.advance(amount) {
                            log::trace!("draw {segment}");
                            draw(segment)?;
                        }
                    } else {
                        self.heading += amount;
                    }
                }
                Instruction::SetColor(color) => {
                    self.color.clone_from(color);
                }
                Instruction::Repeat { count, body } => {
                    if *count > 0 && !body.is_empty() {
                        frames.push(Frame {
                            body,
                            next: 0,
                            remaining: *count,
                        });
                    }
                }
            }
        }
        Ok(())
    }

    /// Move along the current heading. Returns the segment covered if
    /// the pen was down.
    fn advance(&mut self, distance: f64) -> Option<Segment> {
        let (x1, y1) = (self.x, self.y);
        let radians = PI * self.heading / 180.0;
        self.x += distance * radians.cos();
        self.y += distance * radians.sin();

        self.pen_down.then(|| Segment {
            color: self.color.clone(),
            x1,
            y1,
            x2: self.x,
            y2: self.y,
        })
    }
}

/// A body being executed: where to resume and how many passes are left,
/// the current one included.
struct Frame<'a> {
    body: &'a [Instruction],
    next: usize,
    remaining: u32,
}

/// Run a program on a fresh turtle and collect every drawn segment.
#[must_use]
pub fn execute(program: &Program) -> Vec<Segment> {
    let mut segments = Vec::new();
    let Ok(()) = Turtle::new().run(&program.instructions, &mut |segment| {
        segments.push(segment);
        Ok::<_, Infallible>(())
    });
    segments
}
