//! armature CLI - headless armature builder.
//!
//! Replays gesture scripts through the interaction controller, reports
//! on saved models, and exports their geometry to ASCII STL.

use anyhow::{Context, Result};
use armature_interact::Controller;
use armature_model::Model;
use armature_tessellate::{Tessellate, TriangleMesh};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

mod script;

#[derive(Parser)]
#[command(name = "armature")]
#[command(about = "Headless armature builder", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a gesture script and save the resulting model
    Replay {
        /// Gesture script file
        script: PathBuf,
        /// Output model file (JSON)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Start from an existing model instead of an empty one
        #[arg(short, long)]
        model: Option<PathBuf>,
    },
    /// Display information about a saved model
    Info {
        /// Path to the model file
        file: PathBuf,
    },
    /// Export a saved model's geometry to ASCII STL
    Export {
        /// Input model file (JSON)
        input: PathBuf,
        /// Output STL file
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Replay {
            script,
            output,
            model,
        } => {
            let mut controller = match model {
                Some(path) => Controller::with_model(load_model(&path)?),
                None => Controller::new(),
            };
            let text = fs::read_to_string(&script)
                .with_context(|| format!("failed to read {}", script.display()))?;
            let gestures = script::parse(&text)?;
            script::replay(&mut controller, &gestures);
            print_summary(controller.model());
            if let Some(path) = output {
                save_model(controller.model(), &path)?;
                println!("Saved model to {}", path.display());
            }
        }
        Commands::Info { file } => {
            let model = load_model(&file)?;
            print_summary(&model);
            for cylinder in model.cylinders() {
                let joined = |node: Option<u64>| match node {
                    Some(id) => format!("node {id}"),
                    None => "free".to_string(),
                };
                println!(
                    "  cylinder {}: ({:.2}, {:.2}, {:.2}) -> ({:.2}, {:.2}, {:.2}), top {}, bottom {}",
                    cylinder.id(),
                    cylinder.bottom_center.x,
                    cylinder.bottom_center.y,
                    cylinder.bottom_center.z,
                    cylinder.top_center.x,
                    cylinder.top_center.y,
                    cylinder.top_center.z,
                    joined(cylinder.top_node()),
                    joined(cylinder.bottom_node()),
                );
            }
            for node in model.nodes() {
                let ids: Vec<String> = node.cylinder_ids().iter().map(u64::to_string).collect();
                println!(
                    "  node {}: ({:.2}, {:.2}, {:.2}) joining [{}]",
                    node.id(),
                    node.center.x,
                    node.center.y,
                    node.center.z,
                    ids.join(", "),
                );
            }
        }
        Commands::Export { input, output } => {
            let model = load_model(&input)?;
            let mut mesh = TriangleMesh::new();
            for cylinder in model.cylinders() {
                mesh.merge(&cylinder.tessellate());
            }
            for node in model.nodes() {
                mesh.merge(&node.tessellate());
            }
            write_stl(&mesh, &output)?;
            println!(
                "Exported {} triangles to {}",
                mesh.num_triangles(),
                output.display()
            );
        }
    }

    Ok(())
}

fn load_model(path: &Path) -> Result<Model> {
    let text =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse {}", path.display()))
}

fn save_model(model: &Model, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(model)?;
    fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))
}

fn print_summary(model: &Model) {
    println!(
        "{} cylinders, {} nodes",
        model.cylinders().len(),
        model.nodes().len()
    );
}

fn write_stl(mesh: &TriangleMesh, path: &Path) -> Result<()> {
    use std::fmt::Write as _;

    let mut out = String::new();
    out.push_str("solid armature\n");
    for i in 0..mesh.num_triangles() {
        let [a, b, c] = mesh.triangle(i);
        let normal = facet_normal(a, b, c);
        writeln!(
            out,
            "  facet normal {:e} {:e} {:e}",
            normal[0], normal[1], normal[2]
        )?;
        out.push_str("    outer loop\n");
        for v in [a, b, c] {
            writeln!(out, "      vertex {:e} {:e} {:e}", v[0], v[1], v[2])?;
        }
        out.push_str("    endloop\n  endfacet\n");
    }
    out.push_str("endsolid armature\n");
    fs::write(path, out).with_context(|| format!("failed to write {}", path.display()))
}

fn facet_normal(a: [f32; 3], b: [f32; 3], c: [f32; 3]) -> [f32; 3] {
    let u = [b[0] - a[0], b[1] - a[1], b[2] - a[2]];
    let v = [c[0] - a[0], c[1] - a[1], c[2] - a[2]];
    let n = [
        u[1] * v[2] - u[2] * v[1],
        u[2] * v[0] - u[0] * v[2],
        u[0] * v[1] - u[1] * v[0],
    ];
    let length = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
    if length > 0.0 {
        [n[0] / length, n[1] / length, n[2] / length]
    } else {
        [0.0, 0.0, 0.0]
    }
}
