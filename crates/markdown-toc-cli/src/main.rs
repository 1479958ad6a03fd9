use anyhow::{Context, Result};
use clap::{
    builder::{OsStringValueParser, TypedValueParser},
    Parser,
};
use env_logger::Env;
use log::debug;
use markdown_toc::{
    toc_from_path, toc_from_reader, write_toc, ExitCode, TocEntry, TocError, TocResult,
};
use std::{
    io::{self, BufReader},
    path::{Path, PathBuf},
};

#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to markdown file ('-' reads stdin)
    #[arg(
        value_name = "FILE",
        value_parser = OsStringValueParser::new().map(PathBuf::from)
    )]
    path: PathBuf,
}

fn main() -> std::process::ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            let exit = if err.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            return std::process::ExitCode::from(exit as u8);
        }
    };

    match run(&cli) {
        Ok(()) => std::process::ExitCode::from(ExitCode::Success as u8),
        Err(err) => {
            eprintln!("markdown-toc error: {err:#}");
            let exit = err
                .downcast_ref::<TocError>()
                .map(TocError::exit_code)
                .unwrap_or(ExitCode::Io);
            std::process::ExitCode::from(exit as u8)
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let entries = collect_entries(&cli.path).with_context(|| {
        format!(
            "Unable to build table of contents for: {}",
            cli.path.display()
        )
    })?;
    debug!("{} toc entries for {}", entries.len(), cli.path.display());
    print_entries(&entries)
}

fn collect_entries(path: &Path) -> TocResult<Vec<TocEntry>> {
    if path == Path::new("-") {
        let stdin = io::stdin();
        let mut reader = BufReader::new(stdin.lock());
        toc_from_reader(&mut reader)
    } else {
        toc_from_path(path)
    }
}

fn print_entries(entries: &[TocEntry]) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match write_toc(&mut handle, entries) {
        Ok(()) => Ok(()),
        Err(err) if should_ignore_pipe_error(&err) => {
            debug!("stdout closed early: {err}");
            Ok(())
        }
        Err(err) => Err(TocError::Write(err).into()),
    }
}

fn should_ignore_pipe_error(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::BrokenPipe | io::ErrorKind::WouldBlock
    )
}
