use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use polars::prelude::*;
use serde_json::json;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::{Instant, SystemTime, UNIX_EPOCH};
use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

use statefit::dataset::{find_region, sample_regions, validate_regions, Region};
use statefit::fit::{area_ratio, FitCfg};
use statefit::quiz::{
    fit_pair, hint, Difficulty, Placement, QuestionGenerator, QuizConfig, Selection,
};

mod provenance;
mod render;
mod session;

use provenance::{write_sidecar, Payload};
use session::{rating, GameSession, TOTAL_QUESTIONS};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Terminal front end for the state-fit geography quiz")]
struct Cmd {
    /// JSON array of regions; defaults to the built-in sample states
    #[arg(long, global = true)]
    regions: Option<PathBuf>,

    /// Test fits in native coordinates instead of centring the shape on the target
    #[arg(long, global = true)]
    in_place: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Print the loaded regions as JSON
    Regions,
    /// Check whether region A can be rotated to fit inside region B
    Fit {
        #[arg(long)]
        a: String,
        #[arg(long)]
        b: String,
        /// Also require edge midpoints inside (stricter)
        #[arg(long)]
        midpoints: bool,
    },
    /// Play a game in the terminal
    Play {
        #[arg(long, default_value = "medium")]
        difficulty: Difficulty,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value_t = TOTAL_QUESTIONS)]
        questions: usize,
    },
    /// Generate a batch of questions into a CSV table (plus provenance sidecar)
    Questions {
        #[arg(long, default_value = "medium")]
        difficulty: Difficulty,
        #[arg(long, default_value_t = 20)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Write an SVG of the board for a region pair
    Board {
        #[arg(long)]
        a: String,
        #[arg(long)]
        b: String,
        #[arg(long, default_value_t = 0.0)]
        rotation: f64,
        #[arg(long, default_value_t = 500.0)]
        width: f64,
        #[arg(long, default_value_t = 300.0)]
        height: f64,
        #[arg(long)]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let cmd = Cmd::parse();
    let regions = load_regions(cmd.regions.as_deref())?;
    let config = quiz_config(cmd.in_place);
    match cmd.action {
        Action::Regions => {
            println!("{}", serde_json::to_string_pretty(&regions)?);
            Ok(())
        }
        Action::Fit { a, b, midpoints } => fit(&regions, &a, &b, midpoints, config),
        Action::Play {
            difficulty,
            seed,
            questions,
        } => {
            let seed = seed.unwrap_or_else(clock_seed);
            tracing::info!(%difficulty, seed, questions, "play");
            let generator = QuestionGenerator::with_seed(config, seed)?;
            let mut game = GameSession::new(&regions, difficulty, generator, questions);
            let stdin = std::io::stdin();
            play(&mut game, stdin.lock(), std::io::stdout().lock())
        }
        Action::Questions {
            difficulty,
            count,
            seed,
            out,
        } => questions(&regions, difficulty, count, seed, &out, config),
        Action::Board {
            a,
            b,
            rotation,
            width,
            height,
            out,
        } => board(&regions, &a, &b, rotation, width, height, &out),
    }
}

fn quiz_config(in_place: bool) -> QuizConfig {
    QuizConfig {
        placement: if in_place {
            Placement::InPlace
        } else {
            Placement::CentroidAligned
        },
        ..QuizConfig::default()
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn load_regions(path: Option<&Path>) -> Result<Vec<Region>> {
    let Some(path) = path else {
        return Ok(sample_regions());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading regions from {}", path.display()))?;
    let regions: Vec<Region> = serde_json::from_str(&text)
        .with_context(|| format!("parsing regions in {}", path.display()))?;
    validate_regions(&regions)?;
    tracing::info!(count = regions.len(), path = %path.display(), "regions_loaded");
    Ok(regions)
}

fn lookup<'a>(regions: &'a [Region], key: &str) -> Result<&'a Region> {
    match find_region(regions, key) {
        Some(r) => Ok(r),
        None => bail!("no region named {key:?}"),
    }
}

fn fit(regions: &[Region], a: &str, b: &str, midpoints: bool, config: QuizConfig) -> Result<()> {
    let (a, b) = (lookup(regions, a)?, lookup(regions, b)?);
    let cfg = if midpoints {
        FitCfg::with_midpoints()
    } else {
        FitCfg::default()
    };
    let ratio = area_ratio(&a.geometry, &b.geometry);
    let result = fit_pair(&a.geometry, &b.geometry, config.placement, cfg);
    tracing::info!(a = %a.name, b = %b.name, ratio, fits = result.fits, "fit");
    if result.fits {
        println!(
            "{} fits inside {} at {}° (area ratio {:.3})",
            a.name, b.name, result.rotation, ratio
        );
    } else {
        println!(
            "{} does not fit inside {} (area ratio {:.3})",
            a.name, b.name, ratio
        );
    }
    Ok(())
}

fn play<I: BufRead, O: Write>(game: &mut GameSession<'_>, input: I, mut out: O) -> Result<()> {
    let mut lines = input.lines();
    'rounds: while !game.is_over() {
        let q = game.next_question()?;
        writeln!(
            out,
            "\nQuestion {}/{}: can {} be rotated to fit inside {}?",
            game.question_number(),
            game.total(),
            q.state_a.name,
            q.state_b.name
        )?;
        write!(
            out,
            "{}",
            render::ascii_board(&q.state_a.geometry, &q.state_b.geometry, 48, 16, 0.0)
        )?;
        let started = Instant::now();
        let answer = loop {
            write!(out, "[y]es / [n]o / [h]int / [q]uit > ")?;
            out.flush()?;
            let Some(line) = lines.next() else {
                break 'rounds;
            };
            match line?.trim().to_ascii_lowercase().as_str() {
                "y" | "yes" => break true,
                "n" | "no" => break false,
                "h" | "hint" => writeln!(out, "{}", hint(&q))?,
                "q" | "quit" => break 'rounds,
                other => writeln!(out, "unrecognised reply {other:?}")?,
            }
        };
        let elapsed = started.elapsed().as_secs_f64();
        let truth = q.correct_answer;
        let rotation = q.rotation;
        let round = game.submit(q, answer, elapsed);
        if round.is_correct() {
            writeln!(out, "Correct! +{} points ({elapsed:.1}s)", round.points)?;
        } else if truth {
            writeln!(out, "Wrong: it fits when turned {rotation}°")?;
        } else {
            writeln!(out, "Wrong: it does not fit at any angle")?;
        }
    }
    let verdict = rating(game.score());
    writeln!(
        out,
        "\nFinal score {} ({}/{} correct, {:.1}s per answer). {} {}",
        game.score(),
        game.correct_count(),
        game.rounds().len(),
        game.average_seconds(),
        verdict.title,
        verdict.message
    )?;
    tracing::info!(score = game.score(), rounds = game.rounds().len(), "game_over");
    Ok(())
}

fn selection_label(s: &Selection) -> String {
    match s {
        Selection::InBand => "in_band".to_string(),
        Selection::Widened { band } => format!("widened[{:.2},{:.2}]", band.min, band.max),
        Selection::Closest => "closest".to_string(),
    }
}

fn questions(
    regions: &[Region],
    difficulty: Difficulty,
    count: usize,
    seed: u64,
    out: &Path,
    config: QuizConfig,
) -> Result<()> {
    tracing::info!(%difficulty, count, seed, out = %out.display(), "questions");
    let mut generator = QuestionGenerator::with_seed(config, seed)?;
    let mut history = Vec::with_capacity(count);
    for _ in 0..count {
        let q = generator.generate(regions, difficulty, &history)?;
        history.push(q);
    }
    let mut df = df!(
        "shape" => history.iter().map(|q| q.state_a.name.clone()).collect::<Vec<_>>(),
        "target" => history.iter().map(|q| q.state_b.name.clone()).collect::<Vec<_>>(),
        "area_ratio" => history.iter().map(|q| q.area_ratio).collect::<Vec<_>>(),
        "fits" => history.iter().map(|q| q.correct_answer).collect::<Vec<_>>(),
        "rotation" => history.iter().map(|q| q.rotation).collect::<Vec<_>>(),
        "selection" => history.iter().map(|q| selection_label(&q.selection)).collect::<Vec<_>>()
    )?;
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let mut file = std::fs::File::create(out)
        .with_context(|| format!("creating {}", out.display()))?;
    CsvWriter::new(&mut file).include_header(true).finish(&mut df)?;
    tracing::info!(rows = df.height(), cols = df.width(), "questions_written");

    let placement = match config.placement {
        Placement::InPlace => "in_place",
        Placement::CentroidAligned => "centroid_aligned",
    };
    write_sidecar(
        out,
        Payload::new(
            "questions",
            json!({
                "difficulty": difficulty.label(),
                "count": count,
                "seed": seed,
                "placement": placement,
                "regions": regions.len()
            }),
        ),
    )?;
    Ok(())
}

fn board(
    regions: &[Region],
    a: &str,
    b: &str,
    rotation: f64,
    width: f64,
    height: f64,
    out: &Path,
) -> Result<()> {
    let (a, b) = (lookup(regions, a)?, lookup(regions, b)?);
    let svg = render::svg_board(&a.geometry, &b.geometry, width, height, rotation);
    std::fs::write(out, svg).with_context(|| format!("writing {}", out.display()))?;
    tracing::info!(a = %a.name, b = %b.name, rotation, out = %out.display(), "board");
    Ok(())
}
