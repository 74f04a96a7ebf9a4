use bitplane::tools::{grid_stats, load_grid, save_grid};
use bitplane::{BitGrid, BitVector};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "bittool", version, about = "bitplane CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print a bit string in binary or hex
    Render {
        #[arg(long)]
        bits: String,
        #[arg(long, default_value = "X")]
        format: String,
    },
    /// Print counts and conversions for a bit string
    Inspect {
        #[arg(long)]
        bits: String,
    },
    /// Build a checkerboard grid and print or save it
    Checkerboard {
        #[arg(long)]
        width: usize,
        #[arg(long)]
        height: usize,
        #[arg(long)]
        first_clear: bool,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Load an image as a grid and print statistics
    Image {
        #[arg(long)]
        image: PathBuf,
        #[arg(long)]
        threshold: Option<u8>,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Render { bits, format } => render_cmd(&bits, &format),
        Command::Inspect { bits } => inspect_cmd(&bits),
        Command::Checkerboard {
            width,
            height,
            first_clear,
            out,
        } => checkerboard_cmd(width, height, !first_clear, out.as_deref()),
        Command::Image { image, threshold } => image_cmd(&image, threshold),
    }
}

fn parse_bits(bits: &str) -> Option<BitVector> {
    match BitVector::from_bit_string(bits) {
        Ok(vector) => Some(vector),
        Err(err) => {
            eprintln!("Invalid bit string: {}", err);
            None
        }
    }
}

fn render_cmd(bits: &str, format: &str) {
    let Some(vector) = parse_bits(bits) else {
        return;
    };
    match vector.to_formatted(format) {
        Ok(text) => println!("{}", text),
        Err(err) => eprintln!("Cannot render: {}", err),
    }
}

fn inspect_cmd(bits: &str) {
    let Some(vector) = parse_bits(bits) else {
        return;
    };
    println!("Length: {}", vector.len());
    println!("Population: {}", vector.population_count());
    println!("Leading zeros: {}", vector.leading_zero_count());
    println!("Trailing zeros: {}", vector.trailing_zero_count());
    println!("Bytes (LE): {:02X?}", vector.to_bytes());

    let mut trimmed = vector.clone();
    trimmed.trim_leading_and_trailing_zeros();
    println!("Trimmed: {}", trimmed);
}

fn checkerboard_cmd(width: usize, height: usize, first: bool, out: Option<&Path>) {
    let grid = match BitGrid::checkerboard(width, height, first) {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("Cannot build grid: {}", err);
            return;
        }
    };
    match out {
        Some(path) => match save_grid(&grid, path) {
            Ok(()) => println!("Saved {}x{} grid to {}", width, height, path.display()),
            Err(err) => eprintln!("Failed to save {}: {}", path.display(), err),
        },
        None => println!("{}", grid.to_text()),
    }
}

fn image_cmd(image: &Path, threshold: Option<u8>) {
    let start = Instant::now();
    let grid = match load_grid(image, threshold) {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("Failed to load image {}: {}", image.display(), err);
            return;
        }
    };
    let elapsed = start.elapsed();

    let stats = grid_stats(&grid);
    println!("Image: {} ({}x{})", image.display(), grid.width(), grid.height());
    println!(
        "Grid: set_cells={} total={} set_ratio={:.2}%",
        stats.set_cells,
        stats.total_cells,
        stats.set_ratio * 100.0
    );
    println!("Text encoding: {} bytes", grid.to_text().len());
    println!("Loaded in {:.2?}", elapsed);
}
