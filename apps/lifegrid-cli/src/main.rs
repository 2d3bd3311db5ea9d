use anyhow::bail;
use clap::{Args, Parser, Subcommand};
use lifegrid_common::Cell;
use lifegrid_kernel::Life;
use lifegrid_patterns::{CATALOG, Scatter, find};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lifegrid-cli", about = "Terminal front end for the lifegrid engine")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the pattern catalog
    Patterns,
    /// Seed a world, step it, and print ASCII viewports
    Run {
        #[command(flatten)]
        world: WorldArgs,

        /// Generations to simulate
        #[arg(long, default_value = "10")]
        steps: u64,

        /// Print the viewport every N generations (0 = only at the end)
        #[arg(long, default_value = "0")]
        print_every: u64,
    },
    /// Seed a world, step it, and dump the final state as JSON
    Dump {
        #[command(flatten)]
        world: WorldArgs,

        /// Generations to simulate
        #[arg(long, default_value = "0")]
        steps: u64,
    },
}

/// World construction and seeding flags shared by `run` and `dump`.
#[derive(Args)]
struct WorldArgs {
    /// Grid width
    #[arg(long, default_value = "10000")]
    width: i64,

    /// Grid height
    #[arg(long, default_value = "10000")]
    height: i64,

    /// Seed a named catalog pattern, centered in the viewport
    #[arg(long)]
    pattern: Option<String>,

    /// Seed a random scatter over the viewport at this density
    #[arg(long)]
    density: Option<f64>,

    /// RNG seed for --density
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Viewport width in cells
    #[arg(long, default_value = "80")]
    view_width: i64,

    /// Viewport height in cells
    #[arg(long, default_value = "24")]
    view_height: i64,
}

/// Maps between viewport and world coordinates: an affine offset that
/// centers the viewport on the grid.
struct Viewport {
    offset_x: i64,
    offset_y: i64,
    width: i64,
    height: i64,
}

impl Viewport {
    fn centered(life: &Life, width: i64, height: i64) -> Self {
        Self {
            offset_x: (life.bounds().width() - width) / 2,
            offset_y: (life.bounds().height() - height) / 2,
            width,
            height,
        }
    }

    fn view_to_world(&self, x: i64, y: i64) -> Cell {
        Cell::new(x + self.offset_x, y + self.offset_y)
    }

    fn render(&self, life: &Life) -> String {
        let mut out = String::with_capacity((self.width as usize + 1) * self.height as usize);
        for y in 0..self.height {
            for x in 0..self.width {
                let world = self.view_to_world(x, y);
                out.push(if life.alive().contains(&world) { '#' } else { '.' });
            }
            out.push('\n');
        }
        out
    }
}

fn seed_world(args: &WorldArgs) -> anyhow::Result<(Life, Viewport)> {
    let mut life = Life::new(args.width, args.height);
    let viewport = Viewport::centered(&life, args.view_width, args.view_height);

    match (&args.pattern, args.density) {
        (Some(name), None) => {
            let pattern = find(name)?;
            // Anchor near the viewport center, as the pattern buttons of the
            // original front end did.
            let anchor = viewport.view_to_world(
                (viewport.width / 2 - pattern.width() / 2).max(0),
                (viewport.height / 2 - pattern.height() / 2).max(0),
            );
            pattern.stamp(&mut life, anchor);
            debug!(pattern = pattern.name, ?anchor, "stamped pattern");
        }
        (None, Some(density)) => {
            let origin = viewport.view_to_world(0, 0);
            Scatter::new(args.seed).fill(
                &mut life,
                origin,
                viewport.width,
                viewport.height,
                density,
            );
            debug!(density, seed = args.seed, "scattered random seed");
        }
        (None, None) => bail!("nothing to seed: pass --pattern or --density"),
        (Some(_), Some(_)) => bail!("--pattern and --density are mutually exclusive"),
    }

    Ok((life, viewport))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Patterns => {
            for pattern in CATALOG {
                println!(
                    "{:12} {:>2} cells, {}x{}",
                    pattern.name,
                    pattern.offsets.len(),
                    pattern.width(),
                    pattern.height()
                );
            }
        }
        Commands::Run {
            world,
            steps,
            print_every,
        } => {
            let (mut life, viewport) = seed_world(&world)?;
            println!(
                "Seeded {}x{} grid, population {}",
                life.bounds().width(),
                life.bounds().height(),
                life.population()
            );
            for _ in 0..steps {
                life.step();
                if print_every > 0 && life.generation() % print_every == 0 {
                    println!("generation {}", life.generation());
                    print!("{}", viewport.render(&life));
                }
            }
            println!("{}", viewport.render(&life));
            println!(
                "generation {}, population {}, state hash {:#018x}",
                life.generation(),
                life.population(),
                life.state_hash()
            );
        }
        Commands::Dump { world, steps } => {
            let (mut life, _) = seed_world(&world)?;
            for _ in 0..steps {
                life.step();
            }
            println!("{}", serde_json::to_string_pretty(&life)?);
        }
    }

    Ok(())
}
