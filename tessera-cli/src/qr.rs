//! Terminal QR code rendering.

use qrcode::{Color, QrCode};
use qrcode::types::QrError;

/// Modules of blank border around the code.
const QUIET_ZONE: usize = 2;

/// Render `data` as a QR code made of Unicode half blocks.
///
/// Each text row packs two module rows (▀▄█ ), which keeps the code
/// roughly square in a terminal.
pub fn render(data: &str, indent: &str) -> Result<String, QrError> {
    let code = QrCode::new(data)?;
    let colors = code.to_colors();
    let width = code.width();
    let total = width + QUIET_ZONE * 2;

    let is_dark = |x: usize, y: usize| -> bool {
        if x < QUIET_ZONE || y < QUIET_ZONE || x >= width + QUIET_ZONE || y >= width + QUIET_ZONE {
            return false;
        }
        colors[(y - QUIET_ZONE) * width + (x - QUIET_ZONE)] == Color::Dark
    };

    let mut out = String::with_capacity((total + indent.len() + 1) * total.div_ceil(2) * 3);
    for y in (0..total).step_by(2) {
        out.push_str(indent);
        for x in 0..total {
            let ch = match (is_dark(x, y), is_dark(x, y + 1)) {
                (true, true) => '█',
                (true, false) => '▀',
                (false, true) => '▄',
                (false, false) => ' ',
            };
            out.push(ch);
        }
        out.push('\n');
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_is_square() {
        let qr = render("HAgk14JpMQLgt6rVgv7cBQFJWFto5Dqxi472uT3DKpqk", "").unwrap();
        let lines: Vec<_> = qr.lines().collect();
        let width = lines[0].chars().count();

        assert!(lines.iter().all(|l| l.chars().count() == width));
        assert_eq!(lines.len(), width.div_ceil(2));
    }

    #[test]
    fn test_render_indents_and_has_quiet_zone() {
        let qr = render("0x2759A6Ad812b8A7B73A63a243816D66F5b72A0A7", "  ").unwrap();
        let first = qr.lines().next().unwrap();
        assert!(first.starts_with("  "));
        assert!(first.trim().is_empty());
        assert!(qr.contains('█'));
    }
}
