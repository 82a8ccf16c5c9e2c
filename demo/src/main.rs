//! wildgrid: generate a tile and print it with its hiker and rival
//! distance maps.

use std::io;
use std::path::PathBuf;

use clap::Parser;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use wildgrid_core::Point;
use wildgrid_demo::{load_config, render_distance, render_map, write_map_colored};
use wildgrid_mapgen::{GenConfig, MapGen, WORLD_CENTER, World};

#[derive(Parser, Debug)]
#[command(name = "wildgrid")]
#[command(about = "Generate a wilderness tile and its travel distance maps")]
struct Args {
    /// Random seed; drawn from the system when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// World column of the tile to show
    #[arg(long, default_value_t = WORLD_CENTER.x)]
    world_x: i32,

    /// World row of the tile to show
    #[arg(long, default_value_t = WORLD_CENTER.y)]
    world_y: i32,

    /// Colour the map by terrain
    #[arg(long)]
    color: bool,

    /// JSON file overriding generation settings
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(rand::random);
    println!("Using seed: {seed}");

    let config = match &args.config {
        Some(path) => {
            info!("loading generation config from {}", path.display());
            load_config(path)?
        }
        None => GenConfig::default(),
    };

    let mapgen = MapGen::with_config(StdRng::seed_from_u64(seed), config);
    let mut world = World::new(mapgen)?;
    let pos = Point::new(args.world_x, args.world_y);
    if pos != world.current() {
        world.move_to(pos)?;
    }
    println!("Tile ({}, {})", pos.x, pos.y);

    let tile = world.current_tile();
    if args.color {
        write_map_colored(&mut io::stdout(), &tile.terrain)?;
    } else {
        print!("{}", render_map(&tile.terrain).text);
    }

    let fields = world.travel_fields()?;
    println!("\nHiker Distance Map:");
    print!("{}", render_distance(&fields.hiker));
    println!("\nRival Distance Map:");
    print!("{}", render_distance(&fields.rival));
    Ok(())
}
