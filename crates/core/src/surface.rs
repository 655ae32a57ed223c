//! Drawing surface seam.
//!
//! The simulation never owns a rendering target. It issues a clear followed
//! by filled rectangles in pixel coordinates; the terminal crate implements
//! [`Surface`] on a framebuffer, and [`DrawList`] records the calls.

use crate::types::Color;

pub trait Surface {
    fn clear_surface(&mut self, width: u32, height: u32);
    fn draw_rect(&mut self, color: Color, x: u32, y: u32, width: u32, height: u32);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn clear_surface(&mut self, width: u32, height: u32) {
        (**self).clear_surface(width, height);
    }

    fn draw_rect(&mut self, color: Color, x: u32, y: u32, width: u32, height: u32) {
        (**self).draw_rect(color, x, y, width, height);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawCommand {
    Clear {
        width: u32,
        height: u32,
    },
    Rect {
        color: Color,
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
}

/// A [`Surface`] that records every call, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Recorded rectangles as (color, x, y, width, height)
    pub fn rects(&self) -> impl Iterator<Item = (Color, u32, u32, u32, u32)> + '_ {
        self.commands.iter().filter_map(|cmd| match *cmd {
            DrawCommand::Rect {
                color,
                x,
                y,
                width,
                height,
            } => Some((color, x, y, width, height)),
            DrawCommand::Clear { .. } => None,
        })
    }

    /// Commands issued since the most recent clear
    pub fn last_frame(&self) -> &[DrawCommand] {
        let start = self
            .commands
            .iter()
            .rposition(|cmd| matches!(cmd, DrawCommand::Clear { .. }))
            .unwrap_or(0);
        &self.commands[start..]
    }

    pub fn reset(&mut self) {
        self.commands.clear();
    }
}

impl Surface for DrawList {
    fn clear_surface(&mut self, width: u32, height: u32) {
        self.commands.push(DrawCommand::Clear { width, height });
    }

    fn draw_rect(&mut self, color: Color, x: u32, y: u32, width: u32, height: u32) {
        self.commands.push(DrawCommand::Rect {
            color,
            x,
            y,
            width,
            height,
        });
    }
}
