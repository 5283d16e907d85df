use clap::Parser;
use oscillograph::WaveParams;
use std::path::PathBuf;
use workflow::config::{SessionConfig, SweepConfig};
use workflow::runner::Runner;

mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Generate, record and report sine-wave signals")]
struct Args {
    /// Load a session description from YAML
    #[arg(
        long,
        conflicts_with_all = ["frequency", "amplitude", "duration", "sample_rate", "sweep", "seed"]
    )]
    session: Option<PathBuf>,
    #[arg(long, default_value_t = 5.0)]
    frequency: f64,
    #[arg(long, default_value_t = 1.0)]
    amplitude: f64,
    #[arg(long, default_value_t = 1.0)]
    duration: f64,
    #[arg(long, default_value_t = oscillograph::prelude::DEFAULT_SAMPLE_RATE)]
    sample_rate: u32,
    /// Append a sweep of this many randomly drawn amplitudes
    #[arg(long)]
    sweep: Option<usize>,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Clear the signal log once the session has been summarized
    #[arg(long, default_value_t = false)]
    clear: bool,
    /// Write the session summary as JSON
    #[arg(long)]
    report: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut session_config = if let Some(path) = args.session {
        SessionConfig::load(path)?
    } else {
        let wave = WaveParams::new(args.frequency, args.amplitude, args.duration)
            .with_sample_rate(args.sample_rate);
        let sweep = args.sweep.map(|count| SweepConfig {
            count,
            seed: args.seed,
            ..Default::default()
        });
        SessionConfig::from_args(Some(wave), sweep, false)
    };
    session_config.clear_after |= args.clear;

    let runner = Runner::new(session_config);
    let (result, log) = runner.execute()?;

    println!(
        "Session -> recorded {}, last samples {}, log len {}",
        result.recorded,
        result.last.as_ref().map_or(0, |s| s.sample_count),
        log.len()
    );
    if let Some(sweep) = &result.sweep {
        println!(
            "Sweep -> draws {}, violations {:?}",
            sweep.amplitudes.len(),
            sweep.violations
        );
    }

    if let Some(path) = args.report {
        result.write_json(path)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn args_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn wave_flags_conflict_with_session() {
        for flag in ["--frequency", "--amplitude", "--duration", "--sample-rate", "--sweep", "--seed"] {
            let parsed = Args::try_parse_from(["simulator", "--session", "s.yaml", flag, "3"]);
            assert!(parsed.is_err(), "{} should conflict with --session", flag);
        }
    }

    #[test]
    fn session_accepts_clear_and_report() {
        let args = Args::try_parse_from([
            "simulator",
            "--session",
            "s.yaml",
            "--clear",
            "--report",
            "out.json",
        ])
        .unwrap();
        assert!(args.clear);
        assert_eq!(args.session, Some(PathBuf::from("s.yaml")));
    }

    #[test]
    fn defaults_describe_unit_wave() {
        let args = Args::try_parse_from(["simulator"]).unwrap();
        assert_eq!(args.frequency, 5.0);
        assert_eq!(args.sample_rate, 1000);
        assert!(args.sweep.is_none());
    }
}
