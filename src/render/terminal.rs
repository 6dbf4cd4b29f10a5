use super::Canvas;
use crossterm::{
    cursor, event, execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};
use std::io::{self, Stdout, Write};

const HALF_BLOCK: char = '▀';

pub struct TerminalRenderer {
    stdout: Stdout,
    width: u16,
    height: u16,
}

impl TerminalRenderer {
    pub fn new() -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        Ok(Self {
            stdout: io::stdout(),
            width,
            height,
        })
    }

    pub fn init(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            self.stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture,
            terminal::Clear(ClearType::All)
        )?;
        Ok(())
    }

    pub fn cleanup(&mut self) -> io::Result<()> {
        execute!(
            self.stdout,
            ResetColor,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        )?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    pub fn get_size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    pub fn manual_resize(&mut self, width: u16, height: u16) -> io::Result<()> {
        self.width = width;
        self.height = height;
        queue!(self.stdout, terminal::Clear(ClearType::All))?;
        Ok(())
    }

    /// Blits the canvas, two pixel rows per terminal row.
    pub fn present(&mut self, canvas: &Canvas) -> io::Result<()> {
        let rows = (canvas.height() / 2).min(self.height as usize);
        let cols = canvas.width().min(self.width as usize);

        let mut last: Option<(Color, Color)> = None;
        for row in 0..rows {
            queue!(self.stdout, cursor::MoveTo(0, row as u16))?;
            for col in 0..cols {
                let top = canvas.pixel(col, row * 2).unwrap_or(Color::Black);
                let bottom = canvas.pixel(col, row * 2 + 1).unwrap_or(Color::Black);

                if last != Some((top, bottom)) {
                    queue!(
                        self.stdout,
                        SetForegroundColor(top),
                        SetBackgroundColor(bottom)
                    )?;
                    last = Some((top, bottom));
                }
                queue!(self.stdout, Print(HALF_BLOCK))?;
            }
        }

        queue!(self.stdout, ResetColor)?;
        Ok(())
    }

    pub fn render_line_colored(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        color: Color,
    ) -> io::Result<()> {
        if y >= self.height || x >= self.width {
            return Ok(());
        }

        let max_len = (self.width - x) as usize;
        let text: String = text.chars().take(max_len).collect();

        queue!(
            self.stdout,
            cursor::MoveTo(x, y),
            SetForegroundColor(color),
            SetBackgroundColor(Color::Black),
            Print(text),
            ResetColor
        )?;
        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.stdout.flush()
    }
}
