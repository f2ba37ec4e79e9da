use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use askline_client::endpoint::QaEndpoint;
use askline_client::service::HttpQaService;
use askline_client::session;
use askline_client::surface::MemorySurface;
use askline_core::error::AppError;
use tracing_subscriber::EnvFilter;

mod config;

#[derive(Debug, Default, PartialEq, Eq)]
struct CliOptions {
    server: Option<String>,
    config_path: Option<PathBuf>,
    check: bool,
    help: bool,
    question: Option<String>,
}

fn parse_args(args: &[String]) -> Result<CliOptions, AppError> {
    let mut opts = CliOptions::default();
    let mut free: Vec<String> = Vec::new();

    let mut it = args.iter();
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--server" => opts.server = Some(next_value(&mut it, "--server")?),
            "--config" => {
                opts.config_path = Some(PathBuf::from(next_value(&mut it, "--config")?))
            }
            "--check" => opts.check = true,
            "--help" | "-h" => opts.help = true,
            other if other.starts_with('-') && other.len() > 1 => {
                return Err(AppError::new("CLI_BAD_ARG", "Unknown flag")
                    .with_details(other.to_string()))
            }
            other => free.push(other.to_string()),
        }
    }

    if !free.is_empty() {
        opts.question = Some(free.join(" "));
    }
    Ok(opts)
}

fn next_value(it: &mut std::slice::Iter<'_, String>, flag: &str) -> Result<String, AppError> {
    it.next().cloned().ok_or_else(|| {
        AppError::new("CLI_BAD_ARG", "Flag requires a value").with_details(flag.to_string())
    })
}

fn print_usage() {
    println!("askline - terminal client for a retrieval question-answering service");
    println!();
    println!("Usage: askline [OPTIONS] [QUESTION...]");
    println!();
    println!("With a QUESTION, asks once and exits; otherwise starts a prompt.");
    println!();
    println!("Options:");
    println!("  --server <URL>   answering service base URL (overrides config)");
    println!("  --config <PATH>  config file to load");
    println!("  --check          probe the service and exit");
    println!("  -h, --help       show this help");
    println!();
    println!("Prompt commands: :health  :quit");
}

fn print_surface(surface: &MemorySurface) {
    println!();
    println!("{}", surface.answer());
    if !surface.citations().is_empty() {
        println!();
        for entry in surface.citations() {
            println!("{entry}");
        }
    }
    println!();
}

fn run_one_shot(service: &HttpQaService, question: &str) -> ExitCode {
    let mut surface = MemorySurface::new();
    surface.set_question(question);

    match session::ask(service, &mut surface) {
        Ok(_) => {
            print_surface(&surface);
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(code = %err.code, retryable = err.retryable, "{err}");
            ExitCode::FAILURE
        }
    }
}

fn run_repl(service: &HttpQaService, endpoint: &QaEndpoint) -> ExitCode {
    let stdin = io::stdin();
    let mut surface = MemorySurface::new();

    loop {
        print!("ask> ");
        if io::stdout().flush().is_err() {
            return ExitCode::FAILURE;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => return ExitCode::SUCCESS,
            Ok(_) => {}
            Err(err) => {
                tracing::error!("failed to read input: {err}");
                return ExitCode::FAILURE;
            }
        }
        let line = line.trim_end_matches(['\r', '\n']);

        match line {
            ":quit" | ":exit" => return ExitCode::SUCCESS,
            ":health" => {
                match endpoint.health_check() {
                    Ok(()) => println!("service reachable at {}", endpoint.base_url()),
                    Err(err) => tracing::error!(code = %err.code, "{err}"),
                }
                continue;
            }
            _ => {}
        }

        // The line is the question field, sent as-is; a failed cycle leaves
        // the last rendered state in place and only logs the error.
        surface.set_question(line);
        match session::ask(service, &mut surface) {
            Ok(_) => print_surface(&surface),
            Err(err) => tracing::error!(code = %err.code, retryable = err.retryable, "{err}"),
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let opts = match parse_args(&args) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(2);
        }
    };

    if opts.help {
        print_usage();
        return ExitCode::SUCCESS;
    }

    let cfg = match &opts.config_path {
        Some(path) => config::load_from(path),
        None => config::load_default(),
    };
    let cfg = match cfg {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(2);
        }
    };

    let base_url = opts.server.as_deref().unwrap_or(&cfg.server.base_url);
    let endpoint = match QaEndpoint::new(base_url) {
        Ok(endpoint) => endpoint,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(2);
        }
    };

    if opts.check {
        return match endpoint.health_check() {
            Ok(()) => {
                println!("service reachable at {}", endpoint.base_url());
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("{err}");
                ExitCode::FAILURE
            }
        };
    }

    let service = HttpQaService::new(endpoint.clone());
    match &opts.question {
        Some(question) => run_one_shot(&service, question),
        None => run_repl(&service, &endpoint),
    }
}
