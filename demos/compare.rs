//! Runs one comparison and draws both charts as ascii art.
//!
//! Usage: `cargo run --example compare -- <sample_size> <categories>`

use catsim::prelude::*;

/// Canvas units per character cell.
const CELL_WIDTH: f64 = 5.0;
const CELL_HEIGHT: f64 = 10.0;

/// A character grid standing in for a pixel canvas.
struct AsciiSurface {
    cells: Vec<Vec<char>>,
}

impl AsciiSurface {
    fn new(config: &ChartConfig) -> Self {
        let columns = (config.canvas_width() / CELL_WIDTH).ceil() as usize;
        let rows = (config.canvas_height() / CELL_HEIGHT).ceil() as usize;
        Self {
            cells: vec![vec![' '; columns]; rows],
        }
    }

    fn cell(&mut self, x: f64, y: f64) -> Option<&mut char> {
        if x < 0.0 || y < 0.0 {
            return None;
        }
        let column = (x / CELL_WIDTH) as usize;
        let row = (y / CELL_HEIGHT) as usize;
        self.cells.get_mut(row)?.get_mut(column)
    }

    fn plot(&mut self, x: f64, y: f64, c: char) {
        if let Some(cell) = self.cell(x, y) {
            *cell = c;
        }
    }
}

impl DrawingSurface for AsciiSurface {
    fn clear(&mut self, _color: Color) {
        self.cells.iter_mut().for_each(|row| row.fill(' '));
    }

    fn draw_line(&mut self, from: Point, to: Point, _color: Color) {
        let c = if from.y == to.y { '-' } else { '|' };
        let steps = ((to.x - from.x).abs() / CELL_WIDTH)
            .max((to.y - from.y).abs() / CELL_HEIGHT)
            .ceil() as usize;
        for i in 0..=steps {
            let t = if steps == 0 { 0.0 } else { i as f64 / steps as f64 };
            self.plot(from.x + t * (to.x - from.x), from.y + t * (to.y - from.y), c);
        }
    }

    fn fill_rect(&mut self, rect: Rect, _color: Color) {
        let mut y = rect.y;
        while y < rect.y + rect.height {
            let mut x = rect.x;
            while x < rect.x + rect.width {
                self.plot(x, y, '#');
                x += CELL_WIDTH;
            }
            y += CELL_HEIGHT;
        }
    }

    fn draw_text(&mut self, text: &str, position: Point, _font: Font, _color: Color) {
        for (line_idx, line) in text.lines().enumerate() {
            let y = position.y + line_idx as f64 * CELL_HEIGHT;
            for (char_idx, c) in line.chars().enumerate() {
                self.plot(position.x + char_idx as f64 * CELL_WIDTH, y, c);
            }
        }
    }
}

impl std::fmt::Display for AsciiSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.cells {
            writeln!(f, "{}", row.iter().collect::<String>().trim_end())?;
        }
        Ok(())
    }
}

fn parse_arg(idx: usize, default: usize) -> usize {
    std::env::args()
        .nth(idx)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(default)
}

fn main() {
    let simulation = SimulationConfig::new(parse_arg(1, 1000), parse_arg(2, 6))
        .expect("The number of categories must be > 0");
    let chart = ChartConfig::new(600.0, 400.0, 40.0).expect("Is a valid chart config");

    let comparison = match Comparison::run_with_thread_rng(&simulation, &chart) {
        Ok(comparison) => comparison,
        Err(err) => {
            eprintln!("simulation failed: {err}");
            std::process::exit(1);
        }
    };

    let mut empirical = AsciiSurface::new(&chart);
    let mut theoretical = AsciiSurface::new(&chart);
    comparison.render(&mut empirical, &mut theoretical);

    println!("{empirical}");
    println!("{theoretical}");
    println!("probabilities: {:?}", comparison.probabilities().probabilities());
    println!("frequencies:   {:?}", comparison.frequencies().counts());
}
