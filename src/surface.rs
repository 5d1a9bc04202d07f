// The drawing operations the render loop needs from its host. The canvas
// 2d context is the real implementation; `RecordingSurface` keeps a list
// of draw commands for headless use.

use crate::color::Color;
use crate::error::{NetworkError, Result};
use vecmath::Vector2;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

pub trait Surface {
    fn clear(&mut self, width: f64, height: f64) -> Result<()>;
    fn stroke_line(
        &mut self,
        from: Vector2<f64>,
        to: Vector2<f64>,
        color: Color,
        line_width: f64,
    ) -> Result<()>;
    fn fill_circle(&mut self, center: Vector2<f64>, radius: f64, color: Color) -> Result<()>;
}

impl Surface for CanvasRenderingContext2d {
    fn clear(&mut self, width: f64, height: f64) -> Result<()> {
        self.clear_rect(0.0, 0.0, width, height);
        Ok(())
    }

    fn stroke_line(
        &mut self,
        from: Vector2<f64>,
        to: Vector2<f64>,
        color: Color,
        line_width: f64,
    ) -> Result<()> {
        self.begin_path();
        self.move_to(from[0], from[1]);
        self.line_to(to[0], to[1]);
        self.set_stroke_style(&JsValue::from_str(&color.to_css()));
        self.set_line_width(line_width);
        self.stroke();
        Ok(())
    }

    fn fill_circle(&mut self, center: Vector2<f64>, radius: f64, color: Color) -> Result<()> {
        self.begin_path();
        self.arc(center[0], center[1], radius, 0.0, std::f64::consts::PI * 2.0)
            .map_err(NetworkError::draw)?;
        self.set_fill_style(&JsValue::from_str(&color.to_css()));
        self.fill();
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear {
        width: f64,
        height: f64,
    },
    Line {
        from: Vector2<f64>,
        to: Vector2<f64>,
        color: Color,
        line_width: f64,
    },
    Circle {
        center: Vector2<f64>,
        radius: f64,
        color: Color,
    },
}

#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        RecordingSurface::default()
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
    }

    pub fn circles(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
    }

    pub fn reset(&mut self) {
        self.commands.clear();
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, width: f64, height: f64) -> Result<()> {
        self.commands.push(DrawCommand::Clear { width, height });
        Ok(())
    }

    fn stroke_line(
        &mut self,
        from: Vector2<f64>,
        to: Vector2<f64>,
        color: Color,
        line_width: f64,
    ) -> Result<()> {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            color,
            line_width,
        });
        Ok(())
    }

    fn fill_circle(&mut self, center: Vector2<f64>, radius: f64, color: Color) -> Result<()> {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
        Ok(())
    }
}
