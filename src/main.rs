use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;

mod billing;
mod dto;
mod model;
mod prompt;
mod report;

use model::bill::BillRequest;
use model::service::ServiceType;
use model::tariff::Tariff;
use prompt::Prompter;

#[derive(Parser)]
#[command(about = "Calculate a tiered-rate mobile or landline phone bill")]
struct Cli {
    /// YAML tariff file; the built-in rates are used when omitted
    #[arg(long = "rates")]
    rates: Option<PathBuf>,

    /// Bill this service instead of asking
    #[arg(long = "service", value_enum)]
    service: Option<ServiceType>,

    /// Bill this many minutes instead of asking
    #[arg(long = "minutes")]
    minutes: Option<u32>,

    /// Show the charge for each bracket after the total
    #[arg(long = "breakdown", default_value = "false")]
    breakdown: bool,
}

impl Cli {
    fn to_session_options(&self) -> SessionOptions {
        SessionOptions {
            service: self.service,
            minutes: self.minutes,
            breakdown: self.breakdown,
        }
    }
}

#[derive(Default)]
struct SessionOptions {
    service: Option<ServiceType>,
    minutes: Option<u32>,
    breakdown: bool,
}

fn load_tariff(path: Option<&PathBuf>) -> anyhow::Result<Tariff> {
    match path {
        Some(path) => dto::load_tariff(path),
        None => {
            let tariff = dto::TariffDocument::default()
                .to_model()
                .context("Built-in tariff is invalid")?;
            Ok(tariff)
        }
    }
}

fn run_session<R: BufRead, W: Write>(
    tariff: &Tariff,
    options: &SessionOptions,
    prompter: &mut Prompter<R, W>,
) -> anyhow::Result<()> {
    let out = prompter.output();
    writeln!(out, "Welcome to the Phone Bill calculator!\n")?;
    writeln!(out, "Mobile rates: ")?;
    report::write_rates(out, &tariff.mobile)?;
    writeln!(out)?;
    writeln!(out, "Landline rates: ")?;
    report::write_rates(out, &tariff.landline)?;

    let service_type = match options.service {
        Some(service_type) => service_type,
        None => prompter.read_service_type()?,
    };
    let minutes_used = match options.minutes {
        Some(minutes) => minutes,
        None => prompter.read_minutes()?,
    };

    let request = BillRequest::new(service_type, minutes_used);
    let result = billing::bill(tariff, &request);
    info!(
        "Billed {} minutes of {} at {}p ({:.2} pounds)",
        request.minutes_used,
        request.service_type,
        result.pence,
        result.pounds()
    );

    let out = prompter.output();
    writeln!(
        out,
        "\nThe total bill for your {} is: {}",
        request.service_type, result
    )?;

    if options.breakdown {
        let charges = billing::breakdown(minutes_used, tariff.schedule_for(service_type));
        report::write_breakdown(out, &charges)?;
    }

    out.flush()?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Cli::parse();
    let tariff = load_tariff(args.rates.as_ref())?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut prompter = Prompter::new(stdin.lock(), stdout.lock());

    run_session(&tariff, &args.to_session_options(), &mut prompter)
}
