//! ASCII rendering and export
//!
//! Renders a finished cave map as text for quick terminal inspection or a
//! shareable snapshot file.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use chrono::Local;

use crate::cave::{CaveMap, CellKind};

/// ASCII rendering modes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AsciiMode {
    /// One glyph per cell tier (water / fringe / interior).
    Terrain,
    /// Raw neighbor-cost digits.
    Cost,
}

impl AsciiMode {
    pub fn name(&self) -> &'static str {
        match self {
            AsciiMode::Terrain => "Terrain",
            AsciiMode::Cost => "Cost",
        }
    }

    pub fn all() -> &'static [AsciiMode] {
        &[AsciiMode::Terrain, AsciiMode::Cost]
    }
}

/// Glyph for a cell tier.
pub fn kind_char(kind: CellKind) -> char {
    match kind {
        CellKind::Water => '~',
        CellKind::Fringe => '"',
        CellKind::Interior => '#',
    }
}

/// Render the map as one string, one text row per grid row.
pub fn render_map(map: &CaveMap, mode: AsciiMode) -> String {
    let mut out = String::with_capacity((map.width + 1) * map.height);

    for y in 0..map.height as i32 {
        for x in 0..map.width as i32 {
            let ch = match mode {
                AsciiMode::Terrain => kind_char(map.kind_at(x, y)),
                AsciiMode::Cost => {
                    let cost = *map.grid.get(x, y).unwrap_or(&0);
                    (b'0' + cost) as char
                }
            };
            out.push(ch);
        }
        out.push('\n');
    }

    out
}

/// Write the rendered map to a text file with a small metadata header.
pub fn export_ascii<P: AsRef<Path>>(map: &CaveMap, mode: AsciiMode, path: P) -> io::Result<()> {
    let mut file = File::create(path)?;

    writeln!(file, "# cave_generator {} map", mode.name())?;
    writeln!(file, "# generated: {}", Local::now().format("%Y-%m-%d %H:%M:%S"))?;
    writeln!(file, "# seed: {}", map.seed())?;
    writeln!(
        file,
        "# size: {}x{}, rooms: {}, connections: {}",
        map.width,
        map.height,
        map.rooms.len(),
        map.connection_count()
    )?;
    write!(file, "{}", render_map(map, mode))?;

    Ok(())
}
