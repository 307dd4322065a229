//! `freelook` command line: pick a lesson and an options preset, then open
//! its window.

use std::path::PathBuf;

use clap::Parser;
use freelook::{lessons, FreelookError, Options, Runner};

/// Run one of the bundled rendering lessons.
#[derive(Parser)]
#[command(name = "freelook", version, about)]
struct Cli {
    /// Lesson to run.
    #[arg(default_value = "camera_cubes")]
    lesson: String,

    /// TOML options file to start from.
    #[arg(long, value_name = "PATH", conflicts_with = "preset")]
    options: Option<PathBuf>,

    /// Named preset from the presets directory (file stem, e.g. `slow`).
    #[arg(long, value_name = "NAME")]
    preset: Option<String>,

    /// Directory searched for named presets.
    #[arg(long, value_name = "DIR", default_value = "presets")]
    presets_dir: PathBuf,

    /// List the available lessons and presets and exit.
    #[arg(long)]
    list: bool,
}

impl Cli {
    fn options_path(&self) -> Option<PathBuf> {
        self.options.clone().or_else(|| {
            self.preset
                .as_ref()
                .map(|name| self.presets_dir.join(format!("{name}.toml")))
        })
    }
}

fn run(cli: &Cli) -> Result<(), FreelookError> {
    if cli.list {
        for (name, about) in lessons::LESSONS {
            log::info!("lesson  {name:<14} {about}");
        }
        for name in Options::list_presets(&cli.presets_dir) {
            log::info!("preset  {name}");
        }
        return Ok(());
    }

    let options = match cli.options_path() {
        Some(path) => Options::load(&path)?,
        None => Options::default(),
    };
    let lesson = lessons::create(&cli.lesson)?;

    Runner::builder().with_options(options).build(lesson).run()
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    if let Err(e) = run(&Cli::parse()) {
        log::error!("{e}");
        if matches!(e, FreelookError::UnknownLesson(_)) {
            log::error!(
                "available lessons: {}",
                lessons::names().collect::<Vec<_>>().join(", ")
            );
        }
        std::process::exit(1);
    }
}
