use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use facegen::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

mod output;
mod provenance;

use provenance::Payload;

#[derive(Parser)]
#[command(name = "facegen")]
#[command(about = "Randomized inputs for the weekly computational-geometry exercises")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Planar subdivision with holes: point.in, segment.in, region.in
    Faces(FacesArgs),
    /// Random half-planes `a b c` (a x + b y + c <= 0)
    Halfplanes {
        #[arg(long, default_value_t = 5)]
        n: usize,
        #[arg(long, default_value_t = 10.0)]
        range: f64,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value = "input.in")]
        out: PathBuf,
    },
    /// Random LP with the origin feasible
    Lp {
        #[arg(long, default_value_t = 2)]
        dims: usize,
        #[arg(long, default_value_t = 15)]
        constraints: usize,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value = "input.in")]
        out: PathBuf,
    },
    /// Star-shaped polygon around the origin
    StarPolygon {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value = "input.in")]
        out: PathBuf,
    },
    /// Y-monotone polygon
    MonotonePolygon {
        #[arg(long, default_value_t = 8)]
        n: usize,
        #[arg(long, default_value_t = 10.0)]
        spread: f64,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value = "input.in")]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

/// Flags override values from `--config`; unset fields fall back to defaults.
#[derive(Args)]
struct FacesArgs {
    /// JSON file with `FaceGenParams` fields
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    faces: Option<u32>,
    #[arg(long)]
    min_outer: Option<usize>,
    #[arg(long)]
    max_outer: Option<usize>,
    #[arg(long)]
    hole_probability: Option<f64>,
    #[arg(long)]
    min_hole: Option<usize>,
    #[arg(long)]
    max_hole: Option<usize>,
    #[arg(long)]
    spread: Option<f64>,
    #[arg(long)]
    radius_mean: Option<f64>,
    #[arg(long)]
    radius_variation: Option<f64>,
    #[arg(long)]
    seed: Option<u64>,
    /// Output directory for the three artifacts
    #[arg(long, default_value = ".")]
    out: PathBuf,
}

impl FacesArgs {
    fn params(&self) -> Result<FaceGenParams> {
        let mut p = match &self.config {
            Some(path) => {
                let raw = std::fs::read(path)
                    .with_context(|| format!("reading config {}", path.display()))?;
                serde_json::from_slice(&raw)
                    .with_context(|| format!("parsing config {}", path.display()))?
            }
            None => FaceGenParams::default(),
        };
        if let Some(v) = self.faces {
            p.face_count = v;
        }
        if let Some(v) = self.min_outer {
            p.min_outer = v;
        }
        if let Some(v) = self.max_outer {
            p.max_outer = v;
        }
        if let Some(v) = self.hole_probability {
            p.hole_probability = v;
        }
        if let Some(v) = self.min_hole {
            p.min_hole = v;
        }
        if let Some(v) = self.max_hole {
            p.max_hole = v;
        }
        if let Some(v) = self.spread {
            p.spread = v;
        }
        if let Some(v) = self.radius_mean {
            p.radius_mean = v;
        }
        if let Some(v) = self.radius_variation {
            p.radius_variation = v;
        }
        if self.seed.is_some() {
            p.seed = self.seed;
        }
        Ok(p)
    }
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    SubscriberBuilder::default()
        .with_env_filter(filter)
        .with_target(false)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Faces(args) => faces(&args),
        Action::Halfplanes {
            n,
            range,
            seed,
            out,
        } => {
            let params = HalfPlaneParams { count: n, range };
            let seed = resolve_seed(seed);
            let planes = sample_halfplanes(&params, &mut seeded(seed))?;
            write_single("halfplanes", &params, seed, &out, &render_halfplanes(&planes))
        }
        Action::Lp {
            dims,
            constraints,
            seed,
            out,
        } => {
            let params = LpParams { dims, constraints };
            let seed = resolve_seed(seed);
            let lp = sample_lp(&params, &mut seeded(seed))?;
            write_single("lp", &params, seed, &out, &render_lp(&lp))
        }
        Action::StarPolygon { seed, out } => {
            let params = StarPolygonParams::default();
            let seed = resolve_seed(seed);
            let pts = sample_star_polygon(&params, &mut seeded(seed))?;
            write_single("star-polygon", &params, seed, &out, &render_points(&pts))
        }
        Action::MonotonePolygon {
            n,
            spread,
            seed,
            out,
        } => {
            let params = MonotoneParams {
                vertices: n,
                spread,
            };
            let seed = resolve_seed(seed);
            let pts = sample_monotone_polygon(&params, &mut seeded(seed))?;
            write_single("monotone-polygon", &params, seed, &out, &render_points(&pts))
        }
        Action::Report => report(),
    }
}

fn faces(args: &FacesArgs) -> Result<()> {
    let params = args.params()?;
    let run = generate(&params)?;
    let artifacts = Artifacts::render(&run.ctx);
    let files = artifacts.files();
    let outputs: Vec<PathBuf> = files.iter().map(|(name, _)| args.out.join(name)).collect();

    let recorded = FaceGenParams {
        seed: Some(run.seed),
        ..params
    };
    let payload = Payload::new("faces", serde_json::to_value(&recorded)?, run.seed);
    let sidecar = provenance::render_sidecar(&outputs, payload)?;
    let mut staged = files.to_vec();
    staged.push(("provenance.json", sidecar.as_str()));
    output::write_staged(&args.out, &staged)?;

    let summary = run.ctx.summary();
    tracing::info!(
        out = %args.out.display(),
        seed = run.seed,
        faces = summary.faces,
        vertices = summary.vertices,
        segments = summary.segments,
        faces_with_holes = summary.faces_with_holes,
        "faces"
    );
    Ok(())
}

fn write_single<P: Serialize>(
    generator: &'static str,
    params: &P,
    seed: u64,
    out: &Path,
    body: &str,
) -> Result<()> {
    let name = out
        .file_name()
        .and_then(|s| s.to_str())
        .with_context(|| format!("output path {} has no file name", out.display()))?;
    let dir = out.parent().unwrap_or_else(|| Path::new(""));
    let sidecar_path = provenance::sidecar_path(out);
    let sidecar_name = sidecar_path
        .file_name()
        .and_then(|s| s.to_str())
        .with_context(|| format!("sidecar path {} has no file name", sidecar_path.display()))?;
    let payload = Payload::new(generator, serde_json::to_value(params)?, seed);
    let sidecar = provenance::render_sidecar(&[out.to_path_buf()], payload)?;
    output::write_staged(dir, &[(name, body), (sidecar_name, sidecar.as_str())])?;
    tracing::info!(generator, seed, out = %out.display(), lines = body.lines().count(), "sample");
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "version": facegen::VERSION,
        "generators": ["faces", "halfplanes", "lp", "star-polygon", "monotone-polygon"],
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn faces_args(out: &Path) -> FacesArgs {
        FacesArgs {
            config: None,
            faces: Some(3),
            min_outer: None,
            max_outer: None,
            hole_probability: None,
            min_hole: None,
            max_hole: None,
            spread: None,
            radius_mean: None,
            radius_variation: None,
            seed: Some(5),
            out: out.to_path_buf(),
        }
    }

    #[test]
    fn flags_override_config_file() {
        let dir = tempdir().unwrap();
        let cfg = dir.path().join("params.json");
        fs::write(&cfg, r#"{"face_count": 9, "max_hole": 4, "seed": 1}"#).unwrap();
        let mut args = faces_args(dir.path());
        args.config = Some(cfg);
        let p = args.params().unwrap();
        assert_eq!(p.face_count, 3);
        assert_eq!(p.max_hole, 4);
        assert_eq!(p.seed, Some(5));
    }

    #[test]
    fn faces_writes_artifacts_and_provenance() {
        let dir = tempdir().unwrap();
        faces(&faces_args(dir.path())).unwrap();
        for name in ["point.in", "segment.in", "region.in", "provenance.json"] {
            assert!(dir.path().join(name).exists(), "{name} missing");
        }
        let regions = fs::read_to_string(dir.path().join("region.in")).unwrap();
        assert_eq!(regions.lines().count(), 9);
        let prov: serde_json::Value =
            serde_json::from_slice(&fs::read(dir.path().join("provenance.json")).unwrap())
                .unwrap();
        assert_eq!(prov["seed"], 5);
        assert_eq!(prov["params"]["face_count"], 3);
    }

    #[test]
    fn seeded_faces_runs_are_byte_identical() {
        let a = tempdir().unwrap();
        let b = tempdir().unwrap();
        faces(&faces_args(a.path())).unwrap();
        faces(&faces_args(b.path())).unwrap();
        for name in ["point.in", "segment.in", "region.in"] {
            assert_eq!(
                fs::read(a.path().join(name)).unwrap(),
                fs::read(b.path().join(name)).unwrap()
            );
        }
    }

    #[test]
    fn invalid_faces_params_write_nothing() {
        let dir = tempdir().unwrap();
        let mut args = faces_args(dir.path());
        args.min_hole = Some(6);
        args.max_hole = Some(3);
        assert!(faces(&args).is_err());
        assert!(!dir.path().join("point.in").exists());
    }

    #[test]
    fn unwritable_sidecar_keeps_previous_run_intact() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("point.in"), "old\n").unwrap();
        fs::write(dir.path().join("provenance.json"), "{}").unwrap();
        // Occupy the sidecar's staging name so only that write fails.
        fs::create_dir(dir.path().join("provenance.json.tmp")).unwrap();
        assert!(faces(&faces_args(dir.path())).is_err());
        assert_eq!(fs::read_to_string(dir.path().join("point.in")).unwrap(), "old\n");
        assert_eq!(fs::read_to_string(dir.path().join("provenance.json")).unwrap(), "{}");
        for name in ["segment.in", "region.in", "point.in.tmp", "region.in.tmp"] {
            assert!(!dir.path().join(name).exists(), "{name} left behind");
        }
    }

    #[test]
    fn single_file_sampler_gets_sidecar() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("hp.in");
        let params = HalfPlaneParams::default();
        let planes = sample_halfplanes(&params, &mut seeded(3)).unwrap();
        write_single("halfplanes", &params, 3, &out, &render_halfplanes(&planes)).unwrap();
        assert_eq!(fs::read_to_string(&out).unwrap().lines().count(), 5);
        let prov: serde_json::Value =
            serde_json::from_slice(&fs::read(dir.path().join("hp.provenance.json")).unwrap())
                .unwrap();
        assert_eq!(prov["outputs"][0], out.to_string_lossy().as_ref());
        assert!(!dir.path().join("hp.provenance.json.tmp").exists());
    }

    #[test]
    fn cli_parses_faces_flags() {
        let cmd = Cmd::try_parse_from([
            "facegen",
            "faces",
            "--faces",
            "2",
            "--hole-probability",
            "0.5",
            "--out",
            "data",
        ])
        .unwrap();
        match cmd.action {
            Action::Faces(args) => {
                let p = args.params().unwrap();
                assert_eq!(p.face_count, 2);
                assert_eq!(p.hole_probability, 0.5);
                assert_eq!(args.out, PathBuf::from("data"));
            }
            _ => panic!("expected faces"),
        }
        assert!(Cmd::try_parse_from(["facegen", "faces", "--faces", "-1"]).is_err());
    }
}
