use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use bevy::prelude::*;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use brick_colour_quiz::catalog::load_catalog;
use brick_colour_quiz::core::config::config::DEFAULT_CONFIG_PATHS;
use brick_colour_quiz::gameplay::SessionSettings;
use brick_colour_quiz::rendering::layout::Viewport;
use brick_colour_quiz::{QuizConfig, QuizPlugin, QuizSession};

#[derive(Parser, Debug)]
#[command(about = "Guess the brick colour from its swatch", version, author)]
struct Cli {
    /// RON config layer; repeat to stack layers (later wins). Defaults to the
    /// files under assets/config.
    #[arg(long = "config")]
    configs: Vec<PathBuf>,
    /// Catalog RON file replacing the embedded colour list.
    #[arg(long)]
    catalog: Option<PathBuf>,
    #[arg(long)]
    choices: Option<usize>,
    #[arg(long)]
    seed: Option<u64>,
}

impl Cli {
    fn apply_overrides(&self, cfg: &mut QuizConfig) {
        if let Some(path) = &self.catalog {
            cfg.catalog.path = Some(path.display().to_string());
        }
        if let Some(n) = self.choices {
            cfg.quiz.choices = n;
        }
        if self.seed.is_some() {
            cfg.quiz.seed = self.seed;
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (mut cfg, used, errors) = if cli.configs.is_empty() {
        QuizConfig::load_layered(DEFAULT_CONFIG_PATHS)
    } else {
        QuizConfig::load_layered(&cli.configs)
    };
    cli.apply_overrides(&mut cfg);

    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: cfg.window.title.clone(),
            resolution: (cfg.window.width, cfg.window.height).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }));

    // Logging is live once DefaultPlugins is added.
    if used.is_empty() {
        info!(target: "config", "No config layers found; using defaults");
    } else {
        info!(target: "config", "Config layers: {}", used.join(", "));
    }
    for e in &errors {
        warn!(target: "config", "{e}");
    }
    for w in cfg.validate() {
        warn!(target: "config", "{w}");
    }

    let dataset = load_catalog(&cfg.catalog).context("loading colour catalog")?;
    let rng = match cfg.quiz.seed {
        Some(seed) => {
            info!(target: "quiz", "Using fixed seed {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };
    let viewport = Viewport::from_logical(cfg.window.width, cfg.window.height);
    let session = QuizSession::new(
        Arc::new(dataset),
        SessionSettings::from(&cfg.quiz),
        viewport,
        rng,
    )
    .context("starting quiz session")?;

    app.insert_resource(cfg).insert_resource(session).add_plugins(QuizPlugin);
    app.run();
    Ok(())
}
