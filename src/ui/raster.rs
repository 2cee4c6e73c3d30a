use ratatui::prelude::*;

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::game::Bounds;
use crate::render::{Anchor, Surface, TextSize};

const HALF_BLOCK: &str = "▀";

/// Terminal rendering surface.
///
/// Each cell holds two vertically stacked pixels drawn with an upper half
/// block (fg = top pixel, bg = bottom pixel). Text sits on a separate layer
/// of whole cells on top of the pixels.
pub struct Raster {
    cols: usize,
    rows: usize,
    pixels: Vec<Color>,
    glyphs: Vec<Option<(char, Style)>>,
}

impl Raster {
    pub fn new(cols: u16, rows: u16) -> Self {
        let cols = cols as usize;
        let rows = rows as usize;
        Self {
            cols,
            rows,
            pixels: vec![Color::Reset; cols * rows * 2],
            glyphs: vec![None; cols * rows],
        }
    }

    fn pixel_rows(&self) -> usize {
        self.rows * 2
    }

    fn scale(&self) -> (f32, f32) {
        (
            self.cols as f32 / SCREEN_WIDTH as f32,
            self.pixel_rows() as f32 / SCREEN_HEIGHT as f32,
        )
    }

    /// Paints every pixel whose center, in canvas coordinates, passes
    /// `inside`. Shapes too small to cover any pixel center still get the
    /// pixel under their middle so nothing vanishes on small terminals.
    fn fill_where(
        &mut self,
        (x0, y0, x1, y1): (f32, f32, f32, f32),
        color: Color,
        inside: impl Fn(f32, f32) -> bool,
    ) {
        if self.cols == 0 || self.rows == 0 || x1 <= x0 || y1 <= y0 {
            return;
        }
        let (sx, sy) = self.scale();
        let px0 = (x0 * sx).floor().max(0.0) as usize;
        let py0 = (y0 * sy).floor().max(0.0) as usize;
        let px1 = ((x1 * sx).ceil().max(0.0) as usize).min(self.cols);
        let py1 = ((y1 * sy).ceil().max(0.0) as usize).min(self.pixel_rows());

        let mut painted = false;
        for py in py0..py1 {
            for px in px0..px1 {
                let lx = (px as f32 + 0.5) / sx;
                let ly = (py as f32 + 0.5) / sy;
                if inside(lx, ly) {
                    self.pixels[py * self.cols + px] = color;
                    painted = true;
                }
            }
        }

        if !painted {
            let mx = (x0 + x1) / 2.0 * sx;
            let my = (y0 + y1) / 2.0 * sy;
            if mx >= 0.0 && my >= 0.0 && (mx as usize) < self.cols && (my as usize) < self.pixel_rows() {
                self.pixels[my as usize * self.cols + mx as usize] = color;
            }
        }
    }

    pub fn pixel(&self, px: usize, py: usize) -> Color {
        self.pixels[py * self.cols + px]
    }

    pub fn into_lines(self) -> Vec<Line<'static>> {
        let cols = self.cols;
        (0..self.rows)
            .map(|row| {
                let spans: Vec<Span<'static>> = (0..cols)
                    .map(|col| {
                        let top = self.pixels[(row * 2) * cols + col];
                        let bottom = self.pixels[(row * 2 + 1) * cols + col];
                        match self.glyphs[row * cols + col] {
                            Some((ch, style)) => Span::styled(String::from(ch), style.bg(top)),
                            None => Span::styled(HALF_BLOCK, Style::default().fg(top).bg(bottom)),
                        }
                    })
                    .collect();
                Line::from(spans)
            })
            .collect()
    }
}

impl Surface for Raster {
    fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
        self.glyphs.fill(None);
    }

    fn fill_rect(&mut self, rect: Bounds, radius: i32, color: Color) {
        let (x0, y0) = (rect.x as f32, rect.y as f32);
        let (x1, y1) = (rect.right() as f32, rect.bottom() as f32);
        let r = (radius.max(0) as f32).min(rect.w as f32 / 2.0).min(rect.h as f32 / 2.0);
        self.fill_where((x0, y0, x1, y1), color, |x, y| {
            if x < x0 || x >= x1 || y < y0 || y >= y1 {
                return false;
            }
            // Distance to the nearest point of the inner rectangle; only
            // non-zero in the corner regions.
            let dx = x - x.clamp(x0 + r, x1 - r);
            let dy = y - y.clamp(y0 + r, y1 - r);
            dx * dx + dy * dy <= r * r
        });
    }

    fn fill_polygon(&mut self, points: &[(f32, f32)], color: Color) {
        if points.len() < 3 {
            return;
        }
        let bbox = points.iter().fold(
            (f32::MAX, f32::MAX, f32::MIN, f32::MIN),
            |(x0, y0, x1, y1), &(x, y)| (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
        );
        self.fill_where(bbox, color, |x, y| contains(points, x, y));
    }

    fn text(&mut self, text: &str, at: (i32, i32), anchor: Anchor, size: TextSize, color: Color) {
        if self.cols == 0 || self.rows == 0 {
            return;
        }
        let (sx, sy) = self.scale();
        let width = text.chars().count() as i32;
        let col = (at.0 as f32 * sx).round() as i32;
        let row = (at.1 as f32 * sy / 2.0).floor() as i32;
        let start = match anchor {
            Anchor::TopLeft => col,
            Anchor::TopRight => col - width,
            Anchor::TopCenter => col - width / 2,
        };
        if row < 0 || row as usize >= self.rows {
            return;
        }

        let mut style = Style::default().fg(color);
        if size == TextSize::Large {
            style = style.add_modifier(Modifier::BOLD);
        }
        for (i, ch) in text.chars().enumerate() {
            let c = start + i as i32;
            if c >= 0 && (c as usize) < self.cols {
                self.glyphs[row as usize * self.cols + c as usize] = Some((ch, style));
            }
        }
    }
}

/// Even-odd point-in-polygon test.
fn contains(points: &[(f32, f32)], x: f32, y: f32) -> bool {
    let mut inside = false;
    let mut j = points.len() - 1;
    for i in 0..points.len() {
        let (xi, yi) = points[i];
        let (xj, yj) = points[j];
        if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Largest 4:3 region of `area`, centered. A cell is two pixels tall and
/// roughly half as wide as it is tall, so 4:3 pixels means 8:3 cells.
pub fn fit_canvas(area: Rect) -> Rect {
    let by_height = area.height as u32 * 8 / 3;
    let (w, h) = if area.width as u32 >= by_height {
        (by_height as u16, area.height)
    } else {
        (area.width, (area.width as u32 * 3 / 8) as u16)
    };
    Rect {
        x: area.x + (area.width - w) / 2,
        y: area.y + (area.height - h) / 2,
        width: w,
        height: h,
    }
}
