//! Frame-scoped drawing
//!
//! The engine never talks to a graphics API. Entities describe what they want
//! drawn through a [`DrawContext`]; the host turns the resulting
//! [`DrawCommand`]s into pixels however it likes.
//!
//! # Design Philosophy
//!
//! The draw pass is side-effect-only from the game's point of view:
//! - Accepts positions and opaque visual handles (no resource ownership)
//! - Never mutates game state
//! - One [`DrawList`] per frame

use crate::foundation::math::{Point2, Rect};

/// Opaque handle to a visual resource owned by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VisualHandle(pub u32);

/// RGBA colour with components in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red
    pub r: f32,
    /// Green
    pub g: f32,
    /// Blue
    pub b: f32,
    /// Alpha
    pub a: f32,
}

impl Color {
    /// Opaque white
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    /// Opaque red
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    /// Opaque green
    pub const GREEN: Self = Self::rgb(0.0, 1.0, 0.0);
    /// Opaque orange
    pub const ORANGE: Self = Self::rgb(1.0, 0.65, 0.0);
    /// Opaque aqua
    pub const AQUA: Self = Self::rgb(0.0, 1.0, 1.0);

    /// Opaque colour from components
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }
}

/// One primitive drawing request
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Textured quad filling `dest`, rotated by `rotation` radians about its center
    Sprite {
        /// Texture to draw
        visual: VisualHandle,
        /// Destination rectangle
        dest: Rect,
        /// Rotation in radians
        rotation: f32,
    },
    /// Circle outline
    Circle {
        /// Center point
        center: Point2,
        /// Radius in pixels
        radius: f32,
        /// Segments used to approximate the circle
        sides: u32,
        /// Stroke color
        color: Color,
        /// Stroke width
        thickness: f32,
    },
    /// Rectangle, outlined or filled
    Rectangle {
        /// Area covered
        rect: Rect,
        /// Stroke or fill color
        color: Color,
        /// Fill instead of outline
        filled: bool,
    },
    /// Line segment
    Line {
        /// First endpoint
        start: Point2,
        /// Second endpoint
        end: Point2,
        /// Stroke color
        color: Color,
    },
}

/// Sink for draw requests during one frame
pub trait DrawContext {
    /// Submit a draw command
    fn submit(&mut self, command: DrawCommand);

    /// Draw a sprite
    fn sprite(&mut self, visual: VisualHandle, dest: Rect, rotation: f32) {
        self.submit(DrawCommand::Sprite {
            visual,
            dest,
            rotation,
        });
    }

    /// Draw a circle outline
    fn circle(&mut self, center: Point2, radius: f32, sides: u32, color: Color, thickness: f32) {
        self.submit(DrawCommand::Circle {
            center,
            radius,
            sides,
            color,
            thickness,
        });
    }

    /// Draw a rectangle outline
    fn rectangle(&mut self, rect: Rect, color: Color) {
        self.submit(DrawCommand::Rectangle {
            rect,
            color,
            filled: false,
        });
    }

    /// Draw a filled rectangle
    fn fill_rectangle(&mut self, rect: Rect, color: Color) {
        self.submit(DrawCommand::Rectangle {
            rect,
            color,
            filled: true,
        });
    }

    /// Draw a line segment
    fn line(&mut self, start: Point2, end: Point2, color: Color) {
        self.submit(DrawCommand::Line { start, end, color });
    }
}

/// Recorded draw commands for one frame
#[derive(Debug, Default, Clone)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands in submission order
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of recorded commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether nothing was drawn
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Forget every recorded command
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl DrawContext for DrawList {
    fn submit(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }
}
