use minifb::{Key, KeyRepeat, Window, WindowOptions};
use thiserror::Error;

use crate::display::domain::display_sink::{DisplayCommand, DisplaySink};
use crate::shared::frame::Frame;

#[derive(Error, Debug)]
pub enum DisplayOpenError {
    #[error("failed to create window \"{title}\": {source}")]
    Create {
        title: String,
        #[source]
        source: minifb::Error,
    },
}

/// Preview window backed by minifb.
///
/// minifb wants 0RGB-packed `u32` pixels; the scratch buffer is reused
/// across frames so presenting does not allocate per frame.
pub struct MinifbDisplay {
    window: Window,
    buffer: Vec<u32>,
}

impl MinifbDisplay {
    pub fn open(title: &str, width: u32, height: u32) -> Result<Self, DisplayOpenError> {
        let window = Window::new(
            title,
            width as usize,
            height as usize,
            WindowOptions::default(),
        )
        .map_err(|e| DisplayOpenError::Create {
            title: title.to_string(),
            source: e,
        })?;
        Ok(Self {
            window,
            buffer: Vec::new(),
        })
    }
}

impl DisplaySink for MinifbDisplay {
    fn present(&mut self, frame: &Frame) -> Result<(), Box<dyn std::error::Error>> {
        pack_0rgb(frame, &mut self.buffer);
        self.window.update_with_buffer(
            &self.buffer,
            frame.width() as usize,
            frame.height() as usize,
        )?;
        Ok(())
    }

    fn poll_commands(&mut self) -> Vec<DisplayCommand> {
        let mut commands = Vec::new();
        for key in self.window.get_keys_pressed(KeyRepeat::No) {
            match key {
                Key::B => commands.push(DisplayCommand::PrintFeedback),
                Key::Q => commands.push(DisplayCommand::Quit),
                _ => {}
            }
        }
        commands
    }

    fn is_open(&self) -> bool {
        self.window.is_open()
    }
}

/// Repack BGR bytes as the 0RGB `u32` words minifb expects.
fn pack_0rgb(frame: &Frame, out: &mut Vec<u32>) {
    out.clear();
    out.reserve((frame.width() as usize) * (frame.height() as usize));
    for pixel in frame.data().chunks_exact(Frame::CHANNELS) {
        let (b, g, r) = (pixel[0] as u32, pixel[1] as u32, pixel[2] as u32);
        out.push((r << 16) | (g << 8) | b);
    }
}
