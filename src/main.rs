use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use cave_generator::anchors::sample_anchors;
use cave_generator::ascii::{self, AsciiMode};
use cave_generator::cave::{generate_cave, CellKind};
use cave_generator::config::CaveConfig;
use cave_generator::noise_map::{generate_noise_map, NoiseOptions};
use cave_generator::seeds::MapSeeds;

#[derive(Parser, Debug)]
#[command(name = "cave_generator")]
#[command(about = "Generate connected cellular-automaton cave maps")]
struct Args {
    /// Width of the map in cells
    #[arg(short = 'W', long, default_value = "128")]
    width: usize,

    /// Height of the map in cells (defaults to width)
    #[arg(short = 'H', long)]
    height: Option<usize>,

    /// Random seed (uses a random seed if not specified)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Load configuration from a JSON file
    #[arg(short, long)]
    config: Option<String>,

    /// Chance for a non-border cell to start as ground
    #[arg(long)]
    alive: Option<f64>,

    /// Forced void border width
    #[arg(long)]
    border: Option<usize>,

    /// Number of smoothing steps
    #[arg(long)]
    steps: Option<u32>,

    /// Minimum ground region size to survive pruning
    #[arg(long)]
    ground_threshold: Option<usize>,

    /// Minimum void region size to survive pruning
    #[arg(long)]
    void_threshold: Option<usize>,

    /// Passage carving radius
    #[arg(long)]
    radius: Option<usize>,

    /// Per-cell probability for anchor sampling preview
    #[arg(long)]
    luck: Option<f64>,

    /// Print the finished map to the terminal
    #[arg(long)]
    print: bool,

    /// Render raw neighbor-cost digits instead of terrain glyphs
    #[arg(long)]
    cost: bool,

    /// Export the rendered map to a text file
    #[arg(long)]
    export: Option<String>,

    /// Print a fractal noise heightmap preview instead of running the cave
    /// pipeline
    #[arg(long)]
    noise: bool,
}

/// Character ramp for noise heights, dark to bright.
fn height_char(value: f32) -> char {
    match value {
        v if v < 0.3 => '~',
        v if v < 0.4 => ',',
        v if v < 0.5 => '.',
        v if v < 0.65 => '"',
        v if v < 0.8 => 'n',
        _ => '^',
    }
}

fn main() {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => match CaveConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load config {path}: {e}");
                return;
            }
        },
        None => CaveConfig::default(),
    };

    if let Some(alive) = args.alive {
        config.chance_to_start_alive = alive;
    }
    if let Some(border) = args.border {
        config.border_width = border;
    }
    if let Some(steps) = args.steps {
        config.simulation_steps = steps;
    }
    if let Some(threshold) = args.ground_threshold {
        config.ground_region_threshold = threshold;
    }
    if let Some(threshold) = args.void_threshold {
        config.void_region_threshold = threshold;
    }
    if let Some(radius) = args.radius {
        config.connections_radius = radius;
    }

    let width = args.width;
    let height = args.height.unwrap_or(width);
    let seeds = MapSeeds::from_master(args.seed.unwrap_or_else(rand::random));

    if args.noise {
        println!("Generating noise heightmap with seed: {}", seeds.master);
        let options = NoiseOptions::default();
        let heightmap = generate_noise_map(width, height, &options, seeds.terrain);
        for y in 0..height as i32 {
            let row: String = (0..width as i32)
                .map(|x| height_char(*heightmap.get(x, y).unwrap_or(&0.0)))
                .collect();
            println!("{}", row);
        }
        return;
    }

    println!("Generating cave with seed: {}", seeds.master);
    println!("Map size: {}x{}", width, height);
    println!(
        "Smoothing: {} steps, alive chance {:.2}, border {}",
        config.simulation_steps, config.chance_to_start_alive, config.border_width
    );

    let map = generate_cave(width, height, &config, seeds);

    let ground = map.ground_cells();
    let total = width * height;
    println!(
        "Terrain: {} ground cells ({:.1}%)",
        ground,
        100.0 * ground as f64 / total.max(1) as f64
    );

    let interior = map
        .grid
        .iter()
        .filter(|(_, _, &v)| CellKind::from_cost(v) == CellKind::Interior)
        .count();
    println!("  {} interior, {} fringe", interior, ground - interior);

    match map.main_room {
        Some(main) => {
            println!(
                "Rooms: {} ({} connections), main room has {} tiles",
                map.rooms.len(),
                map.connection_count(),
                map.rooms[main.0].size
            );
        }
        None => {
            println!("Rooms: none survived pruning, connection phase skipped");
        }
    }

    if let Some(luck) = args.luck {
        let mut rng = ChaCha8Rng::seed_from_u64(seeds.anchors);
        let anchors: Vec<_> = sample_anchors(&map, luck, &mut rng).collect();
        println!("Anchors: {} sampled at luck {:.3}", anchors.len(), luck);
        for anchor in anchors.iter().take(5) {
            println!("  ({:.0}, {:.0})", anchor.x, anchor.y);
        }
    }

    let mode = if args.cost {
        AsciiMode::Cost
    } else {
        AsciiMode::Terrain
    };

    if args.print {
        print!("{}", ascii::render_map(&map, mode));
    }

    if let Some(ref path) = args.export {
        match ascii::export_ascii(&map, mode, path) {
            Ok(()) => println!("Exported {} map to: {}", mode.name(), path),
            Err(e) => eprintln!("Failed to export map: {}", e),
        }
    }
}
