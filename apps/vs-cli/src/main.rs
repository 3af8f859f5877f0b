use clap::{Parser, Subcommand, ValueEnum};
use serde_json::json;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use vs_formulas::{FormulaError, Formulas};
use vs_sheet::{SheetError, SheetReport, ValidationError};
use vs_steam::{Iapws97, SteamTable};

#[derive(Parser)]
#[command(name = "vs-cli")]
#[command(about = "Valve sizing formulas - steam phase, specific volume and gas flow", long_about = None)]
struct Cli {
    /// Steam table backend
    #[arg(long, global = true, value_enum, env = "VS_STEAM_BACKEND", default_value_t = Backend::If97)]
    backend: Backend,

    /// Print machine-readable JSON instead of plain values
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Backend {
    /// Native IAPWS-IF97
    If97,
    /// CoolProp via rfluids (needs the `coolprop` feature)
    Coolprop,
}

#[derive(Subcommand)]
enum Commands {
    /// Phase of water/steam at a service condition
    SteamType {
        /// Pressure [psig]
        #[arg(allow_negative_numbers = true)]
        pressure_psig: f64,
        /// Temperature [°F]
        #[arg(allow_negative_numbers = true)]
        temperature_f: f64,
    },
    /// Specific volume of steam or water [ft³/lb]
    SteamVolume {
        /// Phase label, e.g. "Saturated Steam"
        phase: String,
        /// Pressure [psig]
        #[arg(allow_negative_numbers = true)]
        pressure_psig: f64,
        /// Temperature [°F]
        #[arg(allow_negative_numbers = true)]
        temperature_f: f64,
        /// Fail on an unrecognized phase label instead of printing 0
        #[arg(long)]
        strict: bool,
    },
    /// Ideal gas specific volume [ft³/lb]
    GasVolume {
        /// Molecular weight [lb/lbmol]
        #[arg(allow_negative_numbers = true)]
        molecular_weight: f64,
        /// Pressure [psig]
        #[arg(allow_negative_numbers = true)]
        pressure_psig: f64,
        /// Temperature [°F]
        #[arg(allow_negative_numbers = true)]
        temperature_f: f64,
    },
    /// Convert standard gas flow [SCFD] to gallons per minute
    ScfdToGpm {
        /// Standard flow [SCFD]
        #[arg(allow_negative_numbers = true)]
        scfd: f64,
        /// Pressure [psig]
        #[arg(allow_negative_numbers = true)]
        pressure_psig: f64,
        /// Temperature [°F]
        #[arg(allow_negative_numbers = true)]
        temperature_f: f64,
    },
    /// Evaluate every line of a worksheet file
    Sheet {
        /// Path to the worksheet (.yaml, .yml or .json)
        sheet_path: PathBuf,
        /// Write results to this file instead of stdout (format by extension)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error(transparent)]
    Formula(#[from] FormulaError),

    #[error(transparent)]
    Sheet(#[from] SheetError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Steam table backend '{backend}' is not available in this build")]
    BackendUnavailable { backend: &'static str },
}

type CliResult<T> = Result<T, CliError>;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let table = steam_table(cli.backend)?;
    let formulas = Formulas::new(table.as_ref());
    debug!(backend = formulas.table_name(), "steam table selected");

    match cli.command {
        Commands::SteamType {
            pressure_psig,
            temperature_f,
        } => {
            let phase = formulas.steam_type(pressure_psig, temperature_f)?;
            emit(
                cli.json,
                &phase,
                json!({
                    "pressure_psig": pressure_psig,
                    "temperature_f": temperature_f,
                    "phase": phase,
                }),
            )
        }
        Commands::SteamVolume {
            phase,
            pressure_psig,
            temperature_f,
            strict,
        } => {
            let v = if strict {
                formulas.steam_volume_strict(&phase, pressure_psig, temperature_f)?
            } else {
                formulas.steam_volume(&phase, pressure_psig, temperature_f)?
            };
            emit(
                cli.json,
                &v.to_string(),
                json!({
                    "phase": phase,
                    "pressure_psig": pressure_psig,
                    "temperature_f": temperature_f,
                    "specific_volume_ft3_lb": v,
                }),
            )
        }
        Commands::GasVolume {
            molecular_weight,
            pressure_psig,
            temperature_f,
        } => {
            let v = formulas.gas_volume(molecular_weight, pressure_psig, temperature_f)?;
            emit(
                cli.json,
                &v.to_string(),
                json!({
                    "molecular_weight": molecular_weight,
                    "pressure_psig": pressure_psig,
                    "temperature_f": temperature_f,
                    "specific_volume_ft3_lb": v,
                }),
            )
        }
        Commands::ScfdToGpm {
            scfd,
            pressure_psig,
            temperature_f,
        } => {
            let gpm = formulas.scfd_to_gpm(scfd, pressure_psig, temperature_f)?;
            emit(
                cli.json,
                &gpm.to_string(),
                json!({
                    "scfd": scfd,
                    "pressure_psig": pressure_psig,
                    "temperature_f": temperature_f,
                    "gpm": gpm,
                }),
            )
        }
        Commands::Sheet { sheet_path, output } => {
            cmd_sheet(&formulas, &sheet_path, output.as_deref(), cli.json)
        }
    }
}

fn steam_table(backend: Backend) -> CliResult<Box<dyn SteamTable>> {
    match backend {
        Backend::If97 => Ok(Box::new(Iapws97::new())),
        #[cfg(feature = "coolprop")]
        Backend::Coolprop => Ok(Box::new(vs_steam::CoolPropSteamTable::new())),
        #[cfg(not(feature = "coolprop"))]
        Backend::Coolprop => Err(CliError::BackendUnavailable {
            backend: "coolprop",
        }),
    }
}

fn emit(as_json: bool, plain: &str, value: serde_json::Value) -> CliResult<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{plain}");
    }
    Ok(())
}

fn cmd_sheet(
    formulas: &Formulas<'_>,
    sheet_path: &Path,
    output: Option<&Path>,
    as_json: bool,
) -> CliResult<()> {
    let sheet = vs_sheet::load(sheet_path)?;
    let report = vs_sheet::evaluate_worksheet(&sheet, formulas)?;

    if let Some(path) = output {
        vs_sheet::save_report(path, &report)?;
        println!(
            "✓ Wrote {} line(s) to {} ({} failed)",
            report.lines.len(),
            path.display(),
            report.failures()
        );
    } else if as_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn print_report(report: &SheetReport) {
    println!("{} ({})", report.name, report.steam_table);
    for line in &report.lines {
        let kind = line
            .phase
            .map(|phase| phase.to_string())
            .unwrap_or_else(|| line.service.clone());
        match &line.error {
            Some(err) => println!("  {:<20} {:<10} {:<20} ✗ {}", line.id, line.tag, kind, err),
            None => {
                let v = line
                    .specific_volume_ft3_lb
                    .map(|v| format!("{v:.6} ft³/lb"))
                    .unwrap_or_default();
                let gpm = line
                    .gpm
                    .map(|gpm| format!("  {gpm:.3} gpm"))
                    .unwrap_or_default();
                println!("  {:<20} {:<10} {:<20} {}{}", line.id, line.tag, kind, v, gpm);
            }
        }
    }
    if report.failures() > 0 {
        println!("{} of {} line(s) failed", report.failures(), report.lines.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn negative_gauge_pressure_parses() {
        let cli = Cli::try_parse_from(["vs-cli", "gas-volume", "28.97", "-5", "-20"]).unwrap();
        match cli.command {
            Commands::GasVolume {
                pressure_psig,
                temperature_f,
                ..
            } => {
                assert_eq!(pressure_psig, -5.0);
                assert_eq!(temperature_f, -20.0);
            }
            _ => panic!("wrong subcommand"),
        }
    }

    #[test]
    fn backend_and_json_are_global() {
        let cli =
            Cli::try_parse_from(["vs-cli", "steam-type", "0", "212", "--json", "--backend", "if97"])
                .unwrap();
        assert!(cli.json);
        assert_eq!(cli.backend, Backend::If97);
    }

    #[test]
    fn if97_backend_builds() {
        let table = steam_table(Backend::If97).unwrap();
        assert_eq!(table.name(), "IAPWS-IF97");
    }

    #[cfg(not(feature = "coolprop"))]
    #[test]
    fn coolprop_backend_needs_feature() {
        assert!(matches!(
            steam_table(Backend::Coolprop),
            Err(CliError::BackendUnavailable { .. })
        ));
    }
}
