//! Convex hull of a mesh point cloud, exported as an OBJ mesh and an HTML wireframe
//!
//! Usage:
//!     cargo run --bin hull-obj --release -- --input teapot.obj --show-normals
//!     cargo run --bin hull-obj --release -- --shape sphere --points 2000

use anyhow::{Context, bail};
use clap::{Parser, ValueEnum};
use math_point_hull::{
    HullConfig, HullTask, Point3, export_html, export_obj, load_obj_vertices, testdata,
};
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Shape {
    Tetrahedron,
    Cube,
    Octahedron,
    Icosahedron,
    Sphere,
}

#[derive(Parser, Debug)]
#[command(
    name = "hull-obj",
    about = "Compute the convex hull of a point cloud and export it for viewing"
)]
struct Cli {
    /// Wavefront OBJ file whose vertex positions form the point cloud
    #[arg(long, conflicts_with = "shape")]
    input: Option<PathBuf>,

    /// Built-in point set to use instead of an OBJ file
    #[arg(long, value_enum, default_value_t = Shape::Sphere)]
    shape: Shape,

    /// Number of points for the sphere shape
    #[arg(long, default_value_t = 1000)]
    points: usize,

    /// JSON hull configuration (defaults are used for missing fields)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the watchdog, in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Override the signed-volume tolerance
    #[arg(long)]
    epsilon: Option<f64>,

    /// Directory for the exported files
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Draw face normals in the HTML view
    #[arg(long)]
    show_normals: bool,

    /// Export even when the hull timed out or was cancelled
    #[arg(long)]
    export_partial: bool,
}

fn load_points(cli: &Cli) -> anyhow::Result<(String, Vec<Point3>)> {
    if let Some(path) = &cli.input {
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("input")
            .to_string();
        let points = load_obj_vertices(path)
            .with_context(|| format!("failed to load {}", path.display()))?;
        return Ok((name, points));
    }

    let points = match cli.shape {
        Shape::Tetrahedron => testdata::tetrahedron_vertices(),
        Shape::Cube => testdata::cube_vertices(2.0),
        Shape::Octahedron => testdata::octahedron_vertices(),
        Shape::Icosahedron => testdata::icosahedron_vertices(),
        Shape::Sphere => testdata::random_sphere_points(cli.points, 1.0),
    };
    Ok((format!("{:?}", cli.shape).to_lowercase(), points))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => HullConfig::from_file(path)
            .with_context(|| format!("failed to read config {}", path.display()))?,
        None => HullConfig::default(),
    };
    if let Some(ms) = cli.timeout_ms {
        config.timeout = Duration::from_millis(ms);
    }
    if let Some(eps) = cli.epsilon {
        config.epsilon = eps;
    }
    config.validate()?;

    let (name, points) = load_points(&cli)?;
    println!("{}: {} input points", name, points.len());

    // Poll the worker the way a render loop would, one frame at a time.
    let start = Instant::now();
    let task = HullTask::spawn(points.clone(), config);
    let mut frames = 0usize;
    while !task.is_finished() {
        frames += 1;
        thread::sleep(Duration::from_millis(16));
    }
    let result = task.wait();

    println!(
        "status: {} | faces: {} | hull vertices: {} | pruned: {} | iterations: {} | {:.1?} ({} frames, {:.1?} wall)",
        result.status(),
        result.num_faces(),
        result.hull_vertices().len(),
        result.pruned_points(),
        result.iterations(),
        result.elapsed(),
        frames,
        start.elapsed()
    );

    if !result.is_reliable() && !(cli.export_partial && result.status().has_faces()) {
        bail!("hull construction did not succeed: {}", result.status());
    }

    std::fs::create_dir_all(&cli.output_dir)?;
    let obj_path = cli.output_dir.join(format!("hull_{}.obj", name));
    let html_path = cli.output_dir.join(format!("hull_{}.html", name));

    export_obj(&result, &obj_path)?;
    println!("Exported OBJ: {}", obj_path.display());

    let title = format!("Convex Hull: {}", name);
    export_html(&result, &points, &html_path, &title, cli.show_normals)?;
    println!("Exported HTML: {}", html_path.display());

    Ok(())
}
