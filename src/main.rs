use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;

use pmaze::{
    logging,
    maze::{Maze, MazeError},
    renderer::{ascii, LogRenderer},
    settings::{Settings, SettingsError},
};

#[derive(Parser, Debug)]
#[clap(version, about, name = "pmaze")]
struct Args {
    #[clap(short, long, help = "Number of columns, overrides the preset")]
    columns: Option<i32>,
    #[clap(short, long, help = "Number of rows, overrides the preset")]
    rows: Option<i32>,
    #[clap(short, long, help = "Seed for deterministic generation")]
    seed: Option<u64>,
    #[clap(short, long, help = "Maze preset from the settings file")]
    preset: Option<String>,
    #[clap(long, help = "Path to the settings file")]
    config: Option<PathBuf>,
    #[clap(long, action, help = "Show config path and quit")]
    show_config_path: bool,
    #[clap(long, action, help = "Reset config to default and quit")]
    reset_config: bool,
    #[clap(long, action, help = "Only generate the maze")]
    no_solve: bool,
    #[clap(short, long, action = clap::ArgAction::Count, help = "More logging, repeatable")]
    verbose: u8,
}

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Maze(#[from] MazeError),
    #[error("cannot install logger: {0}")]
    Logger(log::SetLoggerError),
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();
    logging::init(logging::level_from_verbosity(args.verbose)).map_err(AppError::Logger)?;

    let settings_path = args.config.clone().unwrap_or_else(Settings::default_path);

    if args.show_config_path {
        println!("{}", settings_path.display());
        return Ok(());
    }

    if args.reset_config {
        Settings::reset_config(&settings_path)?;
        return Ok(());
    }

    let settings = Settings::load(&settings_path)?;
    let preset = match &args.preset {
        Some(title) => settings.preset(title)?,
        None => settings.default_preset(),
    };
    log::debug!("Using preset '{}'", preset.title);

    let mut builder = Maze::builder(
        args.columns.unwrap_or(preset.columns),
        args.rows.unwrap_or(preset.rows),
    )
    .origin(settings.get_origin())
    .cell_size(settings.get_cell_size())
    .break_entrance_and_exit(settings.get_break_entrance_and_exit())
    .renderer(Box::new(LogRenderer::new()));
    builder.seed = args.seed.or(preset.seed);

    let mut maze = builder.build();
    println!("Seed: {}", maze.seed());

    if args.no_solve {
        print!("{}", ascii::draw(maze.grid(), None));
        return Ok(());
    }

    match maze.find_path()? {
        Some(path) => {
            print!("{}", ascii::draw(maze.grid(), Some(&path)));
            println!("Solved, path of {} cells", path.len());
        }
        None => {
            print!("{}", ascii::draw(maze.grid(), None));
            println!("No path found");
        }
    }

    Ok(())
}
