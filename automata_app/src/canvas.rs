// canvas.rs - Renderer that snapshots a grid into colours egui can paint

use automata::{Cell, Grid, ModelKind, Renderer, Rgb};
use eframe::egui;
use egui::{Color32, Pos2, Rect, Response, Stroke, Vec2};

pub fn to_color32(rgb: Rgb) -> Color32 {
    Color32::from_rgb(rgb.0, rgb.1, rgb.2)
}

/// Last painted generation, kept as one colour per cell.
pub struct CanvasRenderer {
    rows       : usize,
    cols       : usize,
    colours    : Vec<Color32>,
    cell_size  : f32,
    grid_lines : bool,
}

impl CanvasRenderer {
    pub fn for_model(kind: ModelKind) -> Self {
        // Life draws larger cells with grid lines so they can be clicked
        let (cell_size, grid_lines) = match kind {
            ModelKind::Life => (10.0, true),
            ModelKind::Fire | ModelKind::Sir => (8.0, false),
        };
        Self { rows: 0, cols: 0, colours: Vec::new(), cell_size, grid_lines }
    }

    pub fn size(&self) -> Vec2 {
        egui::vec2(self.cols as f32 * self.cell_size, self.rows as f32 * self.cell_size)
    }

    /// Grid coordinates under `pos`, for a canvas whose top-left is `origin`.
    pub fn cell_at(&self, origin: Pos2, pos: Pos2) -> Option<(usize, usize)> {
        let local = pos - origin;
        if local.x < 0.0 || local.y < 0.0 {
            return None;
        }
        let row = (local.y / self.cell_size) as usize;
        let col = (local.x / self.cell_size) as usize;
        (row < self.rows && col < self.cols).then_some((row, col))
    }

    /// Paints the snapshot and returns the click-sensing response.
    pub fn show(&self, ui: &mut egui::Ui) -> Response {
        let (response, painter) = ui.allocate_painter(self.size(), egui::Sense::click());
        let origin = response.rect.min;

        for row in 0..self.rows {
            for col in 0..self.cols {
                let min = origin + egui::vec2(col as f32 * self.cell_size, row as f32 * self.cell_size);
                let rect = Rect::from_min_size(min, Vec2::splat(self.cell_size));
                painter.rect_filled(rect, 0.0, self.colours[row * self.cols + col]);
            }
        }

        if self.grid_lines {
            let stroke = Stroke::new(1.0, Color32::from_gray(0xcc));
            let bottom = origin.y + self.size().y;
            let right = origin.x + self.size().x;
            for col in 0..=self.cols {
                let x = origin.x + col as f32 * self.cell_size;
                painter.line_segment([egui::pos2(x, origin.y), egui::pos2(x, bottom)], stroke);
            }
            for row in 0..=self.rows {
                let y = origin.y + row as f32 * self.cell_size;
                painter.line_segment([egui::pos2(origin.x, y), egui::pos2(right, y)], stroke);
            }
        }

        // Outer border
        painter.rect_stroke(
            Rect::from_min_size(origin, self.size()),
            0.0,
            Stroke::new(2.0, Color32::BLACK),
        );
        response
    }
}

impl Renderer for CanvasRenderer {
    fn render<C: Cell>(&mut self, grid: &Grid<C>) {
        self.rows = grid.rows();
        self.cols = grid.cols();
        self.colours.clear();
        self.colours.extend(grid.iter().map(|cell| to_color32(cell.colour())));
    }
}
