/// Drawable target a renderer presents pixels to
///
/// The surface is moved into the renderer when it is created and is owned by
/// the renderer's draw loop from then on, so implementations must be `Send`.
pub trait Surface: Send {
    /// Present an RGBA8 pixel buffer of the given size
    ///
    /// `pixels` must be exactly `width * height * 4` bytes. Implementations
    /// that target a fixed-size backing store reconfigure themselves when the
    /// size changes.
    fn present(&mut self, pixels: &[u8], width: u32, height: u32) -> anyhow::Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CountingSurface {
        presents: usize,
        last_size: (u32, u32),
    }

    impl Surface for CountingSurface {
        fn present(&mut self, pixels: &[u8], width: u32, height: u32) -> anyhow::Result<()> {
            anyhow::ensure!(
                pixels.len() == (width * height * 4) as usize,
                "pixel buffer size mismatch"
            );
            self.presents += 1;
            self.last_size = (width, height);
            Ok(())
        }
    }

    #[test]
    fn present_records_size() {
        let mut surface = CountingSurface {
            presents: 0,
            last_size: (0, 0),
        };

        let pixels = vec![0u8; 4 * 4 * 4];
        surface.present(&pixels, 4, 4).unwrap();

        assert_eq!(surface.presents, 1);
        assert_eq!(surface.last_size, (4, 4));
    }

    #[test]
    fn present_rejects_short_buffer() {
        let mut surface = CountingSurface {
            presents: 0,
            last_size: (0, 0),
        };

        let pixels = vec![0u8; 7];
        assert!(surface.present(&pixels, 4, 4).is_err());
        assert_eq!(surface.presents, 0);
    }
}
