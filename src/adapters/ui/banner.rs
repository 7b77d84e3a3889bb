//! ASCII banner with a wheat-to-leaf gradient (FARMWISE).

use crossterm::ExecutableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use figlet_rs::FIGfont;
use std::io::{Write, stdout};

/// Wheat Gold (#f5d04d).
const WHEAT_GOLD: (u8, u8, u8) = (0xf5, 0xd0, 0x4d);
/// Leaf Green (#27ae60).
const LEAF_GREEN: (u8, u8, u8) = (0x27, 0xae, 0x60);

/// Linear interpolation between two RGB colors. `t` in [0.0, 1.0].
fn lerp_rgb(a: (u8, u8, u8), b: (u8, u8, u8), t: f64) -> (u8, u8, u8) {
    let r = (f64::from(a.0) * (1.0 - t) + f64::from(b.0) * t).round() as u8;
    let g = (f64::from(a.1) * (1.0 - t) + f64::from(b.1) * t).round() as u8;
    let bl = (f64::from(a.2) * (1.0 - t) + f64::from(b.2) * t).round() as u8;
    (r, g, bl)
}

/// Prints the welcome banner: "FARMWISE" in figlet with a gradient from
/// Wheat Gold to Leaf Green, then version and tagline.
pub fn print_welcome() {
    let mut out = stdout();
    let Ok(font) = FIGfont::standard() else {
        // Banner is decoration; a broken font table must not kill the app
        let _ = writeln!(out, "FARMWISE");
        return;
    };
    let Some(figure) = font.convert("FARMWISE") else {
        let _ = writeln!(out, "FARMWISE");
        return;
    };
    let art = figure.to_string();
    let lines: Vec<&str> = art.lines().collect();
    let total = lines.len().max(1);

    for (i, line) in lines.iter().enumerate() {
        let t = if total <= 1 {
            1.0
        } else {
            i as f64 / (total - 1) as f64
        };
        let (r, g, b) = lerp_rgb(WHEAT_GOLD, LEAF_GREEN, t);
        let _ = out.execute(SetForegroundColor(Color::Rgb { r, g, b }));
        let _ = out.execute(Print(line));
        let _ = out.execute(Print("\r\n"));
        let _ = out.execute(ResetColor);
    }

    let version = env!("CARGO_PKG_VERSION");
    let _ = out.execute(SetForegroundColor(Color::Rgb {
        r: LEAF_GREEN.0,
        g: LEAF_GREEN.1,
        b: LEAF_GREEN.2,
    }));
    let _ = out.execute(Print(format!("v{}\r\n", version)));
    let _ = out.execute(Print("Smart Farming Advisory Portal\r\n"));
    let _ = out.execute(ResetColor);
    let _ = out.flush();
}
