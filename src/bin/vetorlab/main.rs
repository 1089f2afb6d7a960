use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use rand::SeedableRng as _;

mod shell;

#[derive(Parser, Debug)]
#[command(name = "vetorlab", version, about = "Visualize 2D/3D linear transformations")]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(clap::Args, Debug)]
struct GlobalArgs {
    /// Settings JSON (render + animation).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Canvas width in pixels.
    #[arg(long, global = true)]
    width: Option<u32>,

    /// Canvas height in pixels.
    #[arg(long, global = true)]
    height: Option<u32>,

    /// Font file for plot labels; a system sans-serif face by default.
    #[arg(long, global = true)]
    font: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Apply a matrix to a vector, explain it, and optionally plot/animate it.
    Apply(ApplyArgs),
    /// Generate a random exercise with its solution.
    Exercise(ExerciseArgs),
    /// Answer the evaluation questionnaire.
    Survey,
    /// Interactive line-oriented session.
    Shell(ShellArgs),
}

#[derive(Parser, Debug)]
struct ApplyArgs {
    /// Expected dimension; rejected when it does not match the inputs.
    #[arg(long)]
    dim: Option<vetorlab::Dimension>,

    /// Vector components, e.g. "1,0".
    #[arg(long, allow_hyphen_values = true)]
    vector: String,

    /// Matrix rows separated by ';', e.g. "2,0;0,3".
    #[arg(long, allow_hyphen_values = true)]
    matrix: String,

    /// Output PNG path for the static plot.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Output MP4 path for the step-by-step animation (requires `ffmpeg` on PATH).
    #[arg(long, conflicts_with = "frames_dir")]
    animate: Option<PathBuf>,

    /// Directory for the animation as a PNG sequence.
    #[arg(long)]
    frames_dir: Option<PathBuf>,

    /// Animation speed multiplier (clamped to 0.5..=3.0).
    #[arg(long, default_value_t = 1.0)]
    speed: f64,

    /// Print the static scene as JSON.
    #[arg(long)]
    dump_scene: bool,
}

#[derive(Parser, Debug)]
struct ExerciseArgs {
    #[arg(long, default_value = "2")]
    dim: vetorlab::Dimension,

    /// Output PNG path for the plot.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Seed for a reproducible exercise.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Parser, Debug)]
struct ShellArgs {
    #[arg(long, default_value = "2")]
    dim: vetorlab::Dimension,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let settings = load_settings(&cli.global)?;
    match cli.cmd {
        Command::Apply(args) => cmd_apply(args, &settings),
        Command::Exercise(args) => cmd_exercise(args, &settings),
        Command::Survey => cmd_survey(),
        Command::Shell(args) => cmd_shell(args, settings),
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Defaults, then the config file, then env, then flags.
fn load_settings(args: &GlobalArgs) -> anyhow::Result<vetorlab::Settings> {
    let base = match &args.config {
        Some(path) => vetorlab::Settings::from_json_path(path)?,
        None => vetorlab::Settings::default(),
    };
    let mut settings = base.with_env_overrides();
    if let Some(w) = args.width {
        settings.render.width = w;
    }
    if let Some(h) = args.height {
        settings.render.height = h;
    }
    if let Some(font) = &args.font {
        settings.render.font_path = Some(font.clone());
    }
    settings.validate().context("invalid settings")?;
    Ok(settings)
}

fn cmd_apply(args: ApplyArgs, settings: &vetorlab::Settings) -> anyhow::Result<()> {
    let vector = vetorlab::parse_vector(&args.vector).context("parse --vector")?;
    let matrix = vetorlab::parse_matrix(&args.matrix).context("parse --matrix")?;
    let result = vetorlab::TransformationResult::compute(vector, matrix)?;
    if let Some(dim) = args.dim
        && dim != result.dimension
    {
        return Err(vetorlab::VetorError::shape(format!(
            "--dim {dim} does not match {} inputs",
            result.dimension
        ))
        .into());
    }

    println!(
        "{}",
        vetorlab::explain(&result.original, &result.matrix, &result.transformed)
    );
    println!("{}", vetorlab::status_line(&result.transformed));

    let scene = vetorlab::render(result.dimension, Some(&result));
    if args.dump_scene {
        let json = serde_json::to_string_pretty(&scene).context("serialize scene")?;
        println!("{json}");
    }

    let needs_backend = args.out.is_some() || args.animate.is_some() || args.frames_dir.is_some();
    if !needs_backend {
        return Ok(());
    }
    let mut backend = vetorlab::create_backend(vetorlab::BackendKind::Cpu, &settings.render)?;

    if let Some(out) = &args.out {
        write_scene_png(backend.as_mut(), &scene, out)?;
    }

    let speed = vetorlab::Speed::new(args.speed);
    if let Some(out) = &args.animate {
        let mut anim = vetorlab::Animation::from_settings(&result, &settings.animation)?;
        let stats =
            vetorlab::render_animation_to_mp4(&mut anim, out, settings, speed, backend.as_mut())
                .with_context(|| format!("render animation '{}'", out.display()))?;
        eprintln!("wrote {} ({} frames)", out.display(), stats.frames_rendered);
    }
    if let Some(dir) = &args.frames_dir {
        let mut anim = vetorlab::Animation::from_settings(&result, &settings.animation)?;
        let paths = vetorlab::render_animation_to_pngs(&mut anim, dir, backend.as_mut())
            .with_context(|| format!("render frames into '{}'", dir.display()))?;
        eprintln!("wrote {} frames to {}", paths.len(), dir.display());
    }
    Ok(())
}

fn cmd_exercise(args: ExerciseArgs, settings: &vetorlab::Settings) -> anyhow::Result<()> {
    let exercise = match args.seed {
        Some(seed) => {
            vetorlab::generate_with(&mut rand::rngs::StdRng::seed_from_u64(seed), args.dim)?
        }
        None => vetorlab::generate(args.dim)?,
    };
    println!("v = {}", exercise.vector);
    println!("A =\n{}", exercise.matrix);
    println!();
    println!(
        "{}",
        vetorlab::explain(&exercise.vector, &exercise.matrix, &exercise.transformed)
    );

    if let Some(out) = &args.out {
        let result =
            vetorlab::TransformationResult::compute(exercise.vector, exercise.matrix)?;
        let scene = vetorlab::render(result.dimension, Some(&result));
        let mut backend = vetorlab::create_backend(vetorlab::BackendKind::Cpu, &settings.render)?;
        write_scene_png(backend.as_mut(), &scene, out)?;
    }
    Ok(())
}

fn cmd_survey() -> anyhow::Result<()> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    shell::run_survey(&mut stdin.lock(), &mut stdout)?;
    Ok(())
}

fn cmd_shell(args: ShellArgs, settings: vetorlab::Settings) -> anyhow::Result<()> {
    let mut controller = vetorlab::ViewController::new(settings, args.dim);
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    shell::run_shell(&mut controller, stdin.lock(), &mut stdout)
}

fn write_scene_png(
    backend: &mut dyn vetorlab::RenderBackend,
    scene: &vetorlab::Scene,
    out: &Path,
) -> anyhow::Result<()> {
    let frame = backend.render_scene(scene)?;
    vetorlab::write_png(&frame, out)?;
    eprintln!("wrote {}", out.display());
    Ok(())
}
