use std::num::NonZeroU32;
use std::rc::Rc;

use anyhow::{Context, Result};
use winit::window::Window;

use crate::surface::Surface;

// softbuffer errors are not `Send + Sync`, so they are flattened to text
// before entering anyhow.
fn flatten(e: softbuffer::SoftBufferError) -> anyhow::Error {
    anyhow::anyhow!("{e}")
}

/// Owns the softbuffer surface for one window.
pub struct Presenter {
    _context: softbuffer::Context<Rc<Window>>,
    surface: softbuffer::Surface<Rc<Window>, Rc<Window>>,
    width: u32,
    height: u32,
}

impl Presenter {
    pub fn new(window: Rc<Window>) -> Result<Self> {
        let context = softbuffer::Context::new(window.clone())
            .map_err(flatten)
            .context("failed to create softbuffer context")?;
        let surface = softbuffer::Surface::new(&context, window.clone())
            .map_err(flatten)
            .context("failed to create softbuffer surface")?;

        let size = window.inner_size();
        let mut presenter = Self { _context: context, surface, width: 0, height: 0 };
        presenter.resize(size.width, size.height)?;
        Ok(presenter)
    }

    #[inline]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Resizes the backing buffer. Zero-sized windows (minimized) are ignored.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        let (Some(w), Some(h)) = (NonZeroU32::new(width), NonZeroU32::new(height)) else {
            return Ok(());
        };
        self.surface
            .resize(w, h)
            .map_err(flatten)
            .context("failed to resize softbuffer surface")?;
        self.width = width;
        self.height = height;
        Ok(())
    }

    /// Copies `frame` into the window buffer and presents it.
    ///
    /// A frame smaller than the buffer is drawn at the top-left over black;
    /// a larger one is cropped.
    pub fn present(&mut self, frame: &Surface) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Ok(());
        }

        let mut buffer = self
            .surface
            .buffer_mut()
            .map_err(flatten)
            .context("failed to acquire softbuffer buffer")?;

        if frame.width() == self.width && frame.height() == self.height {
            frame.write_xrgb(&mut buffer);
        } else {
            log::trace!(
                "frame {}x{} does not match window {}x{}",
                frame.width(),
                frame.height(),
                self.width,
                self.height
            );
            buffer.fill(0);
            let w = frame.width().min(self.width);
            for y in 0..frame.height().min(self.height) {
                let start = (y * self.width) as usize;
                let row = &mut buffer[start..start + w as usize];
                for (x, dst) in (0..w).zip(row.iter_mut()) {
                    if let Some(c) = frame.pixel(x, y) {
                        *dst = c.to_xrgb();
                    }
                }
            }
        }

        buffer
            .present()
            .map_err(flatten)
            .context("failed to present softbuffer buffer")?;
        Ok(())
    }
}
