//! Character-grid globe for terminals.

use std::io::{IsTerminal, Stdout, Write};

use globe_common::RendererError;

use super::GlobeSurface;
use crate::options::{FrameState, GlobeOptions};
use crate::sphere::matrix::globe_orientation;
use crate::sphere::{fibonacci_points, project_markers, Viewport};

const MIN_COLUMNS: u32 = 20;
const MIN_ROWS: u32 = 10;

/// Rasterises the dotted sphere and markers into a character grid.
///
/// `.`/`:` are sphere dots (dim/lit), `o` a visitor, `@` the local visitor.
pub struct AsciiSurface<W: Write> {
    out: W,
    viewport: Viewport,
    dots: Vec<[f32; 3]>,
    grid: Vec<Vec<char>>,
    cleared: bool,
}

impl AsciiSurface<Stdout> {
    /// Surface drawing to the process's terminal.
    pub fn stdout(columns: u32, rows: u32, options: &GlobeOptions) -> Result<Self, RendererError> {
        let stdout = std::io::stdout();
        if !stdout.is_terminal() {
            return Err(RendererError::SurfaceUnavailable(
                "stdout is not a terminal".into(),
            ));
        }
        Self::new(stdout, columns, rows, options)
    }
}

impl<W: Write> AsciiSurface<W> {
    pub fn new(
        out: W,
        columns: u32,
        rows: u32,
        options: &GlobeOptions,
    ) -> Result<Self, RendererError> {
        if columns < MIN_COLUMNS || rows < MIN_ROWS {
            return Err(RendererError::InvalidSize {
                width: columns,
                height: rows,
            });
        }
        // More dots than cells only overdraw.
        let samples = options.map_samples.min(columns * rows);
        Ok(Self {
            out,
            viewport: Viewport::cells(columns, rows),
            dots: fibonacci_points(samples),
            grid: vec![vec![' '; columns as usize]; rows as usize],
            cleared: false,
        })
    }

    /// The last rasterised frame, one string per row.
    pub fn lines(&self) -> Vec<String> {
        self.grid.iter().map(|row| row.iter().collect()).collect()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn rasterize(&mut self, frame: &FrameState) {
        for row in &mut self.grid {
            row.fill(' ');
        }

        let orientation = globe_orientation(frame.phi as f32, frame.theta as f32);
        for &dot in &self.dots {
            if let Some((x, y, depth)) = self.viewport.project_with(&orientation, dot) {
                let ch = if depth > 0.5 { ':' } else { '.' };
                plot(&mut self.grid, x, y, ch);
            }
        }

        for marker in project_markers(frame, &self.viewport) {
            let ch = if marker.is_self { '@' } else { 'o' };
            plot(&mut self.grid, marker.x, marker.y, ch);
        }
    }
}

fn plot(grid: &mut [Vec<char>], x: f32, y: f32, ch: char) {
    if x < 0.0 || y < 0.0 {
        return;
    }
    let (col, row) = (x as usize, y as usize);
    if let Some(cell) = grid.get_mut(row).and_then(|r| r.get_mut(col)) {
        *cell = ch;
    }
}

impl<W: Write> GlobeSurface for AsciiSurface<W> {
    fn name(&self) -> &'static str {
        "ascii"
    }

    fn draw(&mut self, _options: &GlobeOptions, frame: &FrameState) -> Result<(), RendererError> {
        self.rasterize(frame);

        let mut buf = String::with_capacity(self.grid.len() * (self.grid[0].len() + 1) + 32);
        if !self.cleared {
            buf.push_str("\x1b[2J");
            self.cleared = true;
        }
        // Home the cursor so frames overwrite each other.
        buf.push_str("\x1b[H");
        for row in &self.grid {
            buf.extend(row.iter());
            buf.push('\n');
        }
        buf.push_str(&format!("visitors: {}\x1b[K\n", frame.markers.len()));

        self.out
            .write_all(buf.as_bytes())
            .and_then(|_| self.out.flush())
            .map_err(|e| RendererError::DrawFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use globe_common::{Location, Marker};

    fn options() -> GlobeOptions {
        GlobeOptions {
            map_samples: 2000,
            ..GlobeOptions::default()
        }
    }

    fn frame(markers: Vec<Marker>) -> FrameState {
        FrameState {
            phi: 0.0,
            theta: 0.0,
            width: 80,
            height: 40,
            markers,
        }
    }

    #[test]
    fn rejects_tiny_grid() {
        let err = AsciiSurface::new(Vec::new(), 5, 5, &options()).err().unwrap();
        assert!(matches!(err, RendererError::InvalidSize { .. }));
    }

    #[test]
    fn draws_sphere_dots() {
        let mut surface = AsciiSurface::new(Vec::new(), 80, 40, &options()).unwrap();
        surface.draw(&options(), &frame(Vec::new())).unwrap();
        let lines = surface.lines();
        assert_eq!(lines.len(), 40);
        assert!(lines.iter().all(|l| l.chars().count() == 80));
        let dots: usize = lines
            .iter()
            .map(|l| l.chars().filter(|c| *c == '.' || *c == ':').count())
            .sum();
        assert!(dots > 100, "only {dots} dots drawn");
        // Corners stay empty.
        assert_eq!(lines[0].chars().next(), Some(' '));
    }

    #[test]
    fn draws_self_and_peer_markers() {
        let markers = vec![
            Marker::new("me", Location::new(0.0, 0.0), true),
            Marker::new("peer", Location::new(30.0, 30.0), false),
            Marker::new("hidden", Location::new(0.0, 180.0), false),
        ];
        let mut surface = AsciiSurface::new(Vec::new(), 80, 40, &options()).unwrap();
        surface.draw(&options(), &frame(markers)).unwrap();

        let lines = surface.lines();
        assert_eq!(lines[20].chars().nth(40), Some('@'));
        let peers: usize = lines.iter().map(|l| l.matches('o').count()).sum();
        assert_eq!(peers, 1);

        let written = String::from_utf8(surface.into_inner()).unwrap();
        assert!(written.starts_with("\x1b[2J\x1b[H"));
        assert!(written.contains("visitors: 3"));
    }
}
