use std::process::ExitCode;

use clap::Parser;
use leaflet_divider::{
    save_assignments_to_csv, CliArgs, GroMembrane, LeafletError, LeafletReport, LeafletSets, Membrane, RunConfig,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let config = match RunConfig::validate(CliArgs::parse()) {
        Ok(config) => config,
        Err(missing) => {
            eprintln!("{}", missing);
            return ExitCode::from(1);
        }
    };

    init_logging(&config);

    match run(&config) {
        Ok(report) => {
            print!("{}", report.render());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("❌ Error: {}", e);
            ExitCode::from(1)
        }
    }
}

fn init_logging(config: &RunConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(config: &RunConfig) -> Result<LeafletReport, LeafletError> {
    info!(
        input = %config.input.display(),
        residue = %config.selector.residue_name,
        atom = %config.selector.atom_name,
        "dividing membrane leaflets"
    );

    let membrane = GroMembrane::new(&config.input).with_progress(config.show_progress);

    // The midplane must be known before any atom can be classified
    let center = membrane.find_center(&config.selector)?;
    let assignments = membrane.assign_leaflets(&config.selector, center)?;

    if let Some(output) = &config.output {
        save_assignments_to_csv(&assignments, output)?;
        info!(path = %output.display(), rows = assignments.len(), "saved leaflet assignments");
    }

    Ok(LeafletReport::new(center, LeafletSets::from_assignments(&assignments)))
}
