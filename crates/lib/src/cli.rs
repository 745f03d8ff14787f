//! CLI helpers.

mod bencher;
pub(crate) mod error;
mod output;
mod output_eq;
mod stdout_logger;

use core::fmt;
use core::time::Duration;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use serde::Serialize;

use crate::input::IStr;

pub use self::bencher::Bencher;
pub use self::error::error_context;
pub(self) use self::output::{Output, OutputKind};
pub use self::output_eq::OutputEq;
use self::stdout_logger::StdoutLogger;

static STDOUT_LOGGER: StdoutLogger = StdoutLogger::new(OutputKind::Normal);
static JSON_LOGGER: StdoutLogger = StdoutLogger::new(OutputKind::Json);

/// Run mode.
#[derive(Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Default run mode.
    #[default]
    Default,
    /// Run as benchmark.
    Bench,
}

/// Input options.
#[derive(Debug, Default)]
pub struct Opts {
    /// Run as a benchmark.
    pub mode: Mode,
    /// Run in verbose mode.
    verbose: bool,
    /// Output JSON.
    json: bool,
    /// Warmup period.
    warmup: Option<u64>,
    /// Bench period.
    time_limit: Option<u64>,
    /// Number of times to run benches.
    count: Option<usize>,
    /// Input file to use instead of the default one.
    input: Option<PathBuf>,
}

impl Opts {
    /// Parse CLI options and install the stdout logger. With `--json` log
    /// records are written as JSON message lines.
    pub fn parse() -> Result<Self> {
        let opts = Self::parse_from(std::env::args_os().skip(1))?;

        let logger = match opts.output_kind() {
            OutputKind::Json => &JSON_LOGGER,
            OutputKind::Normal => &STDOUT_LOGGER,
        };

        log::set_max_level(opts.log_level());
        log::set_logger(logger).map_err(|error| anyhow!("failed to set log: {error}"))?;
        Ok(opts)
    }

    /// Parse options from the given arguments.
    pub fn parse_from<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut opts = Self::default();
        let mut it = args.into_iter();

        while let Some(arg) = it.next() {
            let Some(arg) = arg.to_str() else {
                bail!("non-utf8 argument");
            };

            match arg {
                "--bench" => {
                    if !matches!(opts.mode, Mode::Default) {
                        bail!("duplicate `--bench` arguments");
                    }

                    opts.mode = Mode::Bench;
                }
                "--verbose" => {
                    opts.verbose = true;
                }
                "--warmup" => {
                    let warmup = it.next().context("missing argument to `--warmup`")?;
                    let warmup = warmup
                        .to_str()
                        .context("missing string argument to `--warmup`")?;
                    opts.warmup = Some(warmup.parse().context("bad argument to `--warmup`")?);
                }
                "--time-limit" => {
                    let time_limit = it.next().context("missing argument to `--time-limit`")?;
                    let time_limit = time_limit
                        .to_str()
                        .context("missing string argument to `--time-limit`")?;
                    opts.time_limit = Some(
                        time_limit
                            .parse()
                            .context("bad argument to `--time-limit`")?,
                    );
                }
                "--count" => {
                    let count = it.next().context("missing argument to `--count`")?;
                    let count = count
                        .to_str()
                        .context("missing string argument to `--count`")?;
                    opts.count = Some(count.parse().context("bad argument to `--count`")?);
                }
                "--input" => {
                    let input = it.next().context("missing argument to `--input`")?;
                    opts.input = Some(PathBuf::from(input));
                }
                "--json" => {
                    opts.json = true;
                }
                "--" => {
                    break;
                }
                other => {
                    bail!("unsupported argument: {other}");
                }
            }
        }

        Ok(opts)
    }

    /// The input path to read, falling back to `default` unless overridden
    /// with `--input`.
    pub fn input_path(&self, default: &str) -> PathBuf {
        match &self.input {
            Some(path) => path.clone(),
            None => PathBuf::from(default),
        }
    }

    fn log_level(&self) -> log::LevelFilter {
        match (self.verbose, &self.mode) {
            (true, _) => log::LevelFilter::Debug,
            (false, Mode::Bench) => log::LevelFilter::Warn,
            (false, Mode::Default) => log::LevelFilter::Info,
        }
    }

    fn output_kind(&self) -> OutputKind {
        if self.json {
            OutputKind::Json
        } else {
            OutputKind::Normal
        }
    }
}

/// Run `solve` over `input` in the mode selected by `opts`.
///
/// In the default mode the answer is printed and compared against `expected`
/// if it is present. `expected` belongs to the bundled input, so it is
/// ignored when another file is passed with `--input`. Errors raised by the
/// solver are annotated with the input path and, if they originate from
/// input processing, the position they refer to.
pub fn run<T, O, C>(
    opts: &Opts,
    path: &Path,
    input: IStr,
    expected: Option<C>,
    mut solve: T,
) -> Result<()>
where
    T: FnMut(IStr) -> Result<O>,
    O: fmt::Debug + Serialize + OutputEq<C>,
    C: fmt::Debug,
{
    let expected = expected.filter(|_| opts.input.is_none());

    match opts.mode {
        Mode::Default => {
            let value = match solve(input) {
                Ok(value) => value,
                Err(error) => return Err(error_context(path, input, error)),
            };

            let stdout = std::io::stdout();
            let mut o = Output::new(stdout.lock(), opts.output_kind());
            o.answer(&value)?;

            if let Some(expected) = &expected {
                if !value.output_eq(expected) {
                    bail!("{value:?} (value) != {expected:?} (expected)");
                }
            }
        }
        Mode::Bench => {
            let mut b = Bencher::new();
            b.iter(opts, expected, || solve(input))?;
        }
    }

    Ok(())
}

#[derive(Debug, Default, Serialize)]
pub struct Report {
    pub count: usize,
    pub min: Duration,
    pub max: Duration,
    pub avg: Duration,
    pub p50: Duration,
    pub p95: Duration,
    pub p99: Duration,
}

impl Report {
    /// Build a report out of a sorted collection of samples.
    fn from_sorted(samples: &[Duration]) -> Self {
        let count = samples.len();

        if count == 0 {
            return Self::default();
        }

        let sum = samples.iter().copied().sum::<Duration>();

        let avg = Duration::from_nanos(
            u64::try_from(sum.as_nanos() / (count as u128)).unwrap_or_default(),
        );

        let percentile = |p: usize| {
            let index = (count * p / 100).min(count - 1);
            samples.get(index).copied().unwrap_or_default()
        };

        Self {
            count,
            min: samples.first().copied().unwrap_or_default(),
            max: samples.last().copied().unwrap_or_default(),
            avg,
            p50: percentile(50),
            p95: percentile(95),
            p99: percentile(99),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Report {
            count,
            min,
            max,
            avg,
            p50,
            p95,
            p99,
        } = self;

        write!(f, "count: {count}, min: {min:?}, max: {max:?}, avg: {avg:?}, 50th: {p50:?}, 95th: {p95:?}, 99th: {p99:?}")
    }
}
