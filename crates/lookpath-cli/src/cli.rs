use clap::Parser;
use lookpath::{Finder, Mode};
use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;

#[derive(Clone, Debug, Parser)]
#[command(name = "lookpath", version, about = "Locate executables along PATH")]
pub struct App {
    /// Print every match instead of only the first.
    #[arg(short, long)]
    pub all: bool,

    /// Print nothing; report through the exit status only.
    #[arg(short, long)]
    pub silent: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,

    /// Program names to resolve.
    #[arg(required = true)]
    pub names: Vec<OsString>,
}

impl App {
    fn mode(&self) -> Mode {
        if self.all {
            Mode::AllMatches
        } else {
            Mode::FirstMatch
        }
    }

    /// Resolves every name, printing matches to stdout and failures to stderr.
    /// Fails the process if any name did not resolve.
    pub fn run(&self) -> anyhow::Result<ExitCode> {
        let finder = Finder::new();
        let mode = self.mode();
        let mut stdout = io::stdout().lock();
        let mut failed = 0usize;

        for name in &self.names {
            match finder.search(name, mode) {
                Ok(paths) if !self.silent => {
                    for path in paths {
                        writeln!(stdout, "{}", path.display())?;
                    }
                }
                Ok(_) => {}
                Err(err) => {
                    failed += 1;
                    tracing::debug!(cause = ?err.cause(), "lookup failed");
                    if !self.silent {
                        eprintln!("lookpath: {err}");
                    }
                }
            }
        }

        stdout.flush()?;
        Ok(if failed == 0 {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        })
    }
}
