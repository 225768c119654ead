//! Move-to / line-to paths in pixel space.

use crate::geometry::Point;

/// A single path command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Start a new subpath.
    MoveTo(Point),
    /// Straight segment from the current point.
    LineTo(Point),
    /// Close the current subpath back to its start.
    Close,
}

/// A sequence of subpaths built from straight segments.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    commands: Vec<PathCommand>,
    current: Option<Point>,
    subpath_start: Option<Point>,
}

/// One subpath flattened to its vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct Subpath {
    /// Vertices in drawing order.
    pub points: Vec<Point>,
    /// Whether the subpath was explicitly closed.
    pub closed: bool,
}

impl Path {
    /// Create an empty path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a closed triangle.
    #[must_use]
    pub fn triangle(a: Point, b: Point, c: Point) -> Self {
        let mut path = Self::new();
        path.move_to(a);
        path.line_to(b);
        path.line_to(c);
        path.close();
        path
    }

    /// Build an open polyline through `points`.
    #[must_use]
    pub fn polyline(points: impl IntoIterator<Item = Point>) -> Self {
        let mut path = Self::new();
        for (i, point) in points.into_iter().enumerate() {
            if i == 0 {
                path.move_to(point);
            } else {
                path.line_to(point);
            }
        }
        path
    }

    /// Start a new subpath at `point`.
    pub fn move_to(&mut self, point: Point) -> &mut Self {
        self.commands.push(PathCommand::MoveTo(point));
        self.current = Some(point);
        self.subpath_start = Some(point);
        self
    }

    /// Add a segment to `point`. Acts as `move_to` on an empty path.
    pub fn line_to(&mut self, point: Point) -> &mut Self {
        if self.current.is_none() {
            return self.move_to(point);
        }
        self.commands.push(PathCommand::LineTo(point));
        self.current = Some(point);
        self
    }

    /// Add a segment relative to the current point.
    pub fn line_by(&mut self, dx: f64, dy: f64) -> &mut Self {
        let from = self.current.unwrap_or(Point::ORIGIN);
        self.line_to(from.offset(dx, dy))
    }

    /// Close the current subpath.
    pub fn close(&mut self) -> &mut Self {
        if self.current.is_some() {
            self.commands.push(PathCommand::Close);
            self.current = self.subpath_start;
        }
        self
    }

    /// The pen position after the last command.
    #[must_use]
    pub fn current_point(&self) -> Option<Point> {
        self.current
    }

    /// The raw command list.
    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Whether the path has no commands.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Flatten into subpaths.
    #[must_use]
    pub fn subpaths(&self) -> Vec<Subpath> {
        let mut result = Vec::new();
        let mut current: Option<Subpath> = None;

        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(p) => {
                    result.extend(current.take().filter(|sub| sub.points.len() > 1));
                    current = Some(Subpath {
                        points: vec![p],
                        closed: false,
                    });
                }
                PathCommand::LineTo(p) => {
                    if let Some(sub) = current.as_mut() {
                        sub.points.push(p);
                    }
                }
                PathCommand::Close => {
                    if let Some(mut sub) = current.take() {
                        sub.closed = true;
                        let start = sub.points[0];
                        result.push(sub);
                        // Drawing may continue from the start point.
                        current = Some(Subpath {
                            points: vec![start],
                            closed: false,
                        });
                    }
                }
            }
        }

        result.extend(current.filter(|sub| sub.points.len() > 1));
        result
    }

    /// Render as SVG path data.
    #[must_use]
    pub fn to_svg_data(&self) -> String {
        let parts: Vec<String> = self
            .commands
            .iter()
            .map(|command| match command {
                PathCommand::MoveTo(p) => format!("M{} {}", p.x, p.y),
                PathCommand::LineTo(p) => format!("L{} {}", p.x, p.y),
                PathCommand::Close => "Z".to_string(),
            })
            .collect();
        parts.join(" ")
    }
}
