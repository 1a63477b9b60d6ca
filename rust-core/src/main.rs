mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;

use cli::Cli;
use wav_spectrum::{read_wav, AnalyzerConfig, Report, SpectrumAnalyzer};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_millis()
        .init();

    // usage errors exit with 1 like every other failure, --help/--version with 0
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let wav = read_wav(&cli.input)
        .with_context(|| format!("Failed to read {}", cli.input.display()))?;
    log::info!(
        "Decoded {}: {} frames, {} ch, {} bit, {} Hz",
        cli.input.display(),
        wav.frames(),
        wav.header.channels,
        wav.header.bits_per_sample,
        wav.header.sample_rate
    );

    let samples = wav.samples.channel(cli.channel).with_context(|| {
        format!(
            "{} has no {} channel ({} channel(s))",
            cli.input.display(),
            cli.channel,
            wav.header.channels
        )
    })?;

    let config = AnalyzerConfig {
        fft_size: cli.fft_size,
        window_type: cli.window,
        threshold: cli.threshold,
    };
    let analyzer = SpectrumAnalyzer::new(config);
    if analyzer.fft_size() != cli.fft_size {
        log::info!(
            "FFT size {} rounded up to {}",
            cli.fft_size,
            analyzer.fft_size()
        );
    }

    let spectrum = analyzer.analyze(samples, f64::from(wav.header.sample_rate));

    let report = Report {
        path: &cli.input,
        wav: &wav,
        channel: cli.channel,
        window_type: cli.window,
        spectrum: &spectrum,
        threshold: config.threshold,
    };
    println!("{}", report);

    Ok(())
}
