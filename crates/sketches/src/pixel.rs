//! Pixel buffer conversion from the rasterizer's premultiplied storage.

/// Converts premultiplied RGBA8 bytes to straight (demultiplied) RGBA8.
///
/// Fully transparent pixels become `[0, 0, 0, 0]`. Channels are rounded to
/// nearest.
pub fn demultiply_rgba(premultiplied: &[u8]) -> Vec<u8> {
    let mut bytes = premultiplied.to_vec();
    for pixel in bytes.chunks_exact_mut(4) {
        let alpha = pixel[3] as u16;
        if alpha == 0 {
            pixel[..3].fill(0);
            continue;
        }
        for channel in &mut pixel[..3] {
            *channel = ((*channel as u16 * 255 + alpha / 2) / alpha).min(255) as u8;
        }
    }
    bytes
}
