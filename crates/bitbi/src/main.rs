use std::time::Duration;

use bitbi_core::{RainConfig, RainRng, Rgb, rng};
use bitbi_field::{CellGrid, RainField, Renderer};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

mod config;

/// Time budget per animation frame; each frame moves the rain one row.
const FRAME_INTERVAL: Duration = Duration::from_millis(33);

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = config::load()?;
    let app = App::new(config)?;
    let terminal = ratatui::init();
    let result = app.run(terminal);
    ratatui::restore();
    result
}

/// The animation driver: owns the rain state and runs the frame loop.
pub struct App {
    /// Is the application running?
    running: bool,
    /// Pixel size of one glyph cell; one terminal cell maps to one glyph.
    glyph_size: u16,
    /// Per-column drop state.
    field: RainField,
    /// Software surface the renderer paints into.
    grid: CellGrid,
    /// Frame painter.
    renderer: Renderer,
    /// Random source for glyph choice, resets, and spawn offsets.
    rng: RainRng,
    /// Terminal dimensions (in cells) the rain state is sized to.
    last_size: (u16, u16),
}

impl App {
    /// Construct the driver from a validated configuration.
    ///
    /// The rain state starts zero-sized and is fitted to the terminal
    /// on the first frame, which shares the resize path.
    pub fn new(config: RainConfig) -> color_eyre::Result<Self> {
        let mut rng = rng::from_entropy();
        let field = RainField::new(&config, 0, 0, &mut rng)?;
        let grid = CellGrid::new(0, 0, config.glyph_size, config.background);
        let renderer = Renderer::new(&config);
        Ok(Self {
            running: false,
            glyph_size: config.glyph_size,
            field,
            grid,
            renderer,
            rng,
            last_size: (0, 0),
        })
    }

    /// Run the frame loop until a quit key arrives.
    ///
    /// Each iteration paints one frame and then waits up to one frame
    /// interval for input; if the terminal stops delivering redraws the
    /// rain simply pauses and resumes unchanged.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        while self.running {
            terminal.draw(|frame| {
                let area = frame.area();
                if (area.width, area.height) != self.last_size {
                    self.resize(area.width, area.height);
                }
                self.renderer
                    .draw(&mut self.grid, &mut self.field, &mut self.rng);
                self.render(frame);
            })?;
            self.handle_crossterm_events()?;
        }
        Ok(())
    }

    /// Forward a viewport change to the field and the surface.
    fn resize(&mut self, cols: u16, rows: u16) {
        let width = u32::from(cols) * u32::from(self.glyph_size);
        let height = u32::from(rows) * u32::from(self.glyph_size);
        self.field.resize(width, height, &mut self.rng);
        self.grid.resize(width, height);
        self.last_size = (cols, rows);
    }

    /// Copy the painted cell grid onto the terminal frame.
    fn render(&self, frame: &mut Frame) {
        let background = to_color(self.grid.background());
        let lines: Vec<Line> = self
            .grid
            .iter_rows()
            .map(|row| {
                let spans: Vec<Span> = row
                    .iter()
                    .map(|cell| {
                        let style = Style::new().fg(to_color(cell.color)).bg(background);
                        Span::styled(cell.glyph.to_string(), style)
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), frame.area());
    }

    /// Read pending crossterm events, pacing the animation via the
    /// poll timeout.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(FRAME_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Resize(cols, rows) => self.resize(cols, rows),
                _ => {}
            }
        }
        Ok(())
    }

    /// Handle a key press.
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            _ => {}
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}
