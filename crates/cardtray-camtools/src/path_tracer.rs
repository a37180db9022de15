//! Path Tracer
//!
//! Turtle-style drawing contract consumed by the edge tracer and the divider
//! panel builder, plus two implementations: [`TraceRecorder`] keeps the raw
//! command stream, [`PathTurtle`] turns it into point polylines.
//!
//! Angles are in degrees, positive turns are counter-clockwise (to the left of
//! the direction of travel).

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Drawing surface driven by the geometry engine.
pub trait PathTracer {
    /// Draw a straight line along the current heading.
    fn forward(&mut self, length: f64);

    /// Change heading in place.
    fn turn(&mut self, angle: f64);

    /// Draw an arc of the given radius while turning by `angle`. A zero radius
    /// is a plain turn.
    fn arc(&mut self, angle: f64, radius: f64);

    /// Push the current position and heading.
    fn save_state(&mut self);

    /// Pop the last saved position and heading.
    fn restore_state(&mut self);

    /// Move, without drawing, to `length` along the current heading.
    fn snap_to(&mut self, length: f64);

    /// Replay a list of moves in order.
    fn trace(&mut self, moves: &[Move]) {
        for step in moves {
            match *step {
                Move::Forward(length) => self.forward(length),
                Move::Turn(angle) => self.turn(angle),
                Move::Arc { angle, radius } => self.arc(angle, radius),
            }
        }
    }
}

/// One drawing step of a polyline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Move {
    Forward(f64),
    Turn(f64),
    Arc { angle: f64, radius: f64 },
}

/// A recorded tracer call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TraceCommand {
    Forward(f64),
    Turn(f64),
    Arc { angle: f64, radius: f64 },
    SaveState,
    RestoreState,
    SnapTo(f64),
}

/// Tracer that records every call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TraceRecorder {
    commands: Vec<TraceCommand>,
}

impl TraceRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[TraceCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<TraceCommand> {
        self.commands
    }

    /// Sum of all drawn straight lengths.
    pub fn forward_length(&self) -> f64 {
        self.commands
            .iter()
            .map(|command| match command {
                TraceCommand::Forward(length) => *length,
                _ => 0.0,
            })
            .sum()
    }
}

impl PathTracer for TraceRecorder {
    fn forward(&mut self, length: f64) {
        self.commands.push(TraceCommand::Forward(length));
    }

    fn turn(&mut self, angle: f64) {
        self.commands.push(TraceCommand::Turn(angle));
    }

    fn arc(&mut self, angle: f64, radius: f64) {
        self.commands.push(TraceCommand::Arc { angle, radius });
    }

    fn save_state(&mut self) {
        self.commands.push(TraceCommand::SaveState);
    }

    fn restore_state(&mut self) {
        self.commands.push(TraceCommand::RestoreState);
    }

    fn snap_to(&mut self, length: f64) {
        self.commands.push(TraceCommand::SnapTo(length));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Points closer than this are merged.
pub const POINT_TOLERANCE: f64 = 0.01;

/// Largest angle covered by one chord when flattening arcs.
const ARC_STEP_DEGREES: f64 = 5.0;

pub fn push_unique_point(path: &mut Vec<Point>, point: Point) {
    if let Some(last) = path.last() {
        if (point.x - last.x).abs() < POINT_TOLERANCE && (point.y - last.y).abs() < POINT_TOLERANCE
        {
            return;
        }
    }
    path.push(point);
}

#[derive(Debug, Clone, Copy)]
struct TurtleState {
    position: Point,
    heading: f64,
}

/// Tracer that follows position and heading and collects the drawn polylines.
///
/// A snap that lands within [`POINT_TOLERANCE`] of the pen replaces the last
/// drawn point with the snapped position, so floating-point drift never reaches
/// the output. A snap further away starts a new polyline.
#[derive(Debug, Clone)]
pub struct PathTurtle {
    state: TurtleState,
    saved: Vec<TurtleState>,
    paths: Vec<Vec<Point>>,
}

impl Default for PathTurtle {
    fn default() -> Self {
        Self::new()
    }
}

impl PathTurtle {
    pub fn new() -> Self {
        Self::at(Point::new(0.0, 0.0), 0.0)
    }

    /// Turtle starting at `position`, facing `heading` degrees.
    pub fn at(position: Point, heading: f64) -> Self {
        Self {
            state: TurtleState { position, heading },
            saved: Vec::new(),
            paths: vec![vec![position]],
        }
    }

    pub fn position(&self) -> Point {
        self.state.position
    }

    pub fn heading(&self) -> f64 {
        self.state.heading
    }

    /// Drawn polylines, skipping ones with fewer than two points.
    pub fn paths(&self) -> Vec<&[Point]> {
        self.paths
            .iter()
            .filter(|path| path.len() > 1)
            .map(Vec::as_slice)
            .collect()
    }

    pub fn into_paths(self) -> Vec<Vec<Point>> {
        self.paths.into_iter().filter(|path| path.len() > 1).collect()
    }

    /// Whether the current polyline ends where it started.
    pub fn is_closed(&self) -> bool {
        match self.paths.last() {
            Some(path) if path.len() > 2 => match (path.first(), path.last()) {
                (Some(first), Some(last)) => first.distance(last) < POINT_TOLERANCE,
                _ => false,
            },
            _ => false,
        }
    }

    fn direction(&self) -> (f64, f64) {
        let radians = self.state.heading.to_radians();
        (radians.cos(), radians.sin())
    }

    fn draw_to(&mut self, point: Point) {
        self.state.position = point;
        match self.paths.last_mut() {
            Some(path) => push_unique_point(path, point),
            None => self.paths.push(vec![point]),
        }
    }

    fn move_to(&mut self, point: Point) {
        self.state.position = point;
        let snapped = match self.paths.last_mut().and_then(|path| path.last_mut()) {
            Some(last) if last.distance(&point) < POINT_TOLERANCE => {
                *last = point;
                true
            }
            _ => false,
        };
        if !snapped {
            self.paths.push(vec![point]);
        }
    }
}

impl PathTracer for PathTurtle {
    fn forward(&mut self, length: f64) {
        let (dx, dy) = self.direction();
        let position = self.state.position;
        self.draw_to(Point::new(position.x + dx * length, position.y + dy * length));
    }

    fn turn(&mut self, angle: f64) {
        self.state.heading += angle;
    }

    fn arc(&mut self, angle: f64, radius: f64) {
        if radius <= 0.0 || angle == 0.0 {
            self.turn(angle);
            return;
        }

        // Centre sits to the left of the heading for left turns, to the right otherwise.
        let side = angle.signum();
        let start = self.state.heading.to_radians();
        let position = self.state.position;
        let center = Point::new(
            position.x - side * radius * start.sin(),
            position.y + side * radius * start.cos(),
        );

        let steps = (angle.abs() / ARC_STEP_DEGREES).ceil().max(1.0) as usize;
        for step in 1..=steps {
            let heading = (self.state.heading + angle * step as f64 / steps as f64).to_radians();
            self.draw_to(Point::new(
                center.x + side * radius * heading.sin(),
                center.y - side * radius * heading.cos(),
            ));
        }
        self.state.heading += angle;
    }

    fn save_state(&mut self) {
        self.saved.push(self.state);
    }

    fn restore_state(&mut self) {
        match self.saved.pop() {
            Some(state) => self.state = state,
            None => warn!("restore_state called without a saved state"),
        }
    }

    fn snap_to(&mut self, length: f64) {
        let (dx, dy) = self.direction();
        let position = self.state.position;
        self.move_to(Point::new(position.x + dx * length, position.y + dy * length));
    }
}
