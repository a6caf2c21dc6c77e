//! Faultgen CLI - fault formation terrain generator.
//!
//! Generate terrain heightmaps by iterative fault accumulation and export
//! them as color maps ready for texturing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use faultgen::export::{
    export_color_map_png, export_heightmap_png, ColorPngOptions, PngExportOptions,
};
use faultgen::scene::TerrainScene;
use faultgen::terrain::FaultConfig;

/// Fault formation terrain generator.
#[derive(Parser)]
#[command(name = "faultgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a terrain and export its color map.
    Generate {
        /// Terrain width in cells.
        #[arg(long, default_value = "128")]
        width: u32,

        /// Terrain height in cells.
        #[arg(long, default_value = "128")]
        height: u32,

        /// Number of fault iterations.
        #[arg(short, long, default_value = "500")]
        iterations: u32,

        /// Height delta at the first iteration.
        #[arg(long, default_value = "1.25")]
        max_change: f32,

        /// Height delta approached by the last iteration.
        #[arg(long, default_value = "0.25")]
        min_change: f32,

        /// Random seed for reproducible generation.
        #[arg(short, long)]
        seed: Option<u64>,

        /// Output directory for generated files.
        #[arg(short, long, default_value = "./output")]
        output: PathBuf,

        /// Base name for output files.
        #[arg(short, long, default_value = "terrain")]
        name: String,

        /// Also export the raw heightmap as a 16-bit grayscale PNG.
        #[arg(long)]
        heightmap_png: bool,

        /// Extra render passes of the same terrain; each draws a new palette.
        #[arg(long, default_value = "0")]
        redraws: u32,
    },

    /// Display grid and cost figures for a configuration.
    Info {
        /// Terrain width in cells.
        #[arg(long, default_value = "128")]
        width: u32,

        /// Terrain height in cells.
        #[arg(long, default_value = "128")]
        height: u32,

        /// Number of fault iterations.
        #[arg(short, long, default_value = "500")]
        iterations: u32,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            width,
            height,
            iterations,
            max_change,
            min_change,
            seed,
            output,
            name,
            heightmap_png,
            redraws,
        } => {
            run_generate(
                width,
                height,
                iterations,
                max_change,
                min_change,
                seed,
                output,
                name,
                heightmap_png,
                redraws,
            );
        }
        Commands::Info {
            width,
            height,
            iterations,
        } => {
            run_info(width, height, iterations);
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn run_generate(
    width: u32,
    height: u32,
    iterations: u32,
    max_change: f32,
    min_change: f32,
    seed: Option<u64>,
    output: PathBuf,
    name: String,
    heightmap_png: bool,
    redraws: u32,
) {
    // Validate parameters
    if width == 0 || width > 8192 || height == 0 || height > 8192 {
        eprintln!("Error: Width and height must be between 1 and 8192");
        std::process::exit(1);
    }

    if max_change < min_change {
        eprintln!("Error: max-change must not be below min-change");
        std::process::exit(1);
    }

    // Generate seed if not provided
    let seed = seed.unwrap_or_else(|| {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos() as u64
    });

    println!("Faultgen - Fault Formation Terrain Generator");
    println!("============================================");
    println!("Grid: {}x{} cells", width, height);
    println!("Iterations: {}", iterations);
    println!("Height delta: {} -> {}", max_change, min_change);
    println!("Seed: {}", seed);
    println!("Output: {}", output.display());

    let config = FaultConfig {
        iterations,
        max_change,
        min_change,
        seed,
    };

    let mut scene = TerrainScene::new(width, height, config).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    println!("\nGenerating terrain...");
    let report = scene.initialize().unwrap_or_else(|e| {
        eprintln!("Error during generation: {}", e);
        std::process::exit(1);
    });

    println!("Generation completed in {:.2?}", report.elapsed);
    println!("Mean height: {:.4}", report.mean_height);
    println!("Palette: {} ({})", report.palette.name(), report.palette.index());

    let (min_h, max_h) = scene.heightmap().height_range();
    println!("Height range: [{:.4}, {:.4}]", min_h, max_h);

    println!("\nExporting...");
    std::fs::create_dir_all(&output).unwrap_or_else(|e| {
        eprintln!("Error creating output directory: {}", e);
        std::process::exit(1);
    });

    let Some(color_map) = scene.color_map() else {
        eprintln!("Error: no color map was rendered");
        std::process::exit(1);
    };
    let color_path = output.join(format!("{}.png", name));
    export_color_map_png(color_map, &color_path, &ColorPngOptions::default()).unwrap_or_else(
        |e| {
            eprintln!("Error exporting color map: {}", e);
            std::process::exit(1);
        },
    );
    println!("  Exported color map: {}", color_path.display());

    if heightmap_png {
        let options = PngExportOptions::auto_range(scene.heightmap());
        let height_path = output.join(format!("{}_height.png", name));
        export_heightmap_png(scene.heightmap(), &height_path, &options).unwrap_or_else(|e| {
            eprintln!("Error exporting heightmap: {}", e);
            std::process::exit(1);
        });
        println!("  Exported heightmap: {}", height_path.display());
    }

    // Each redraw re-rolls the palette over the unchanged terrain.
    for i in 1..=redraws {
        let colors = scene.redraw();
        let redraw_path = output.join(format!("{}_redraw{:02}.png", name, i));
        export_color_map_png(colors, &redraw_path, &ColorPngOptions::default()).unwrap_or_else(
            |e| {
                eprintln!("Error exporting redraw: {}", e);
                std::process::exit(1);
            },
        );
        println!(
            "  Exported redraw {:02}: {} ({})",
            i,
            redraw_path.display(),
            colors.palette().name()
        );
    }

    println!("Done!");
}

fn run_info(width: u32, height: u32, iterations: u32) {
    let interior_cells = (width as u64) * (height as u64);
    let extended_cells = ((width + 1) as u64) * ((height + 1) as u64);
    let side_tests = extended_cells * (iterations as u64);

    let bytes_heights = extended_cells * 4; // f32
    let bytes_colors = interior_cells * 3 * 4; // [f32; 3]

    println!("Faultgen - Terrain Configuration Info");
    println!("=====================================");
    println!();
    println!("Grid: {}x{} cells ({}x{} extended)", width, height, width + 1, height + 1);
    println!("Iterations: {}", iterations);
    println!();
    println!("Cell counts:");
    println!("  Interior:  {:>12} cells", interior_cells);
    println!("  Extended:  {:>12} cells", extended_cells);
    println!();
    println!("Memory usage (in-memory):");
    println!(
        "  Heightmap:    {:>12} bytes ({:.2} MB)",
        bytes_heights,
        bytes_heights as f64 / 1024.0 / 1024.0
    );
    println!(
        "  Color buffer: {:>12} bytes ({:.2} MB)",
        bytes_colors,
        bytes_colors as f64 / 1024.0 / 1024.0
    );
    println!();
    println!("Generation cost:");
    println!("  Side tests: {:>12}", side_tests);
}
