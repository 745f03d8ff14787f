use std::io::{self, Write};

use log::Log;

use crate::cli::output::{Output, OutputKind};

/// Logger writing records to stdout, either as `file:line: LEVEL: message`
/// or as JSON message lines.
pub(crate) struct StdoutLogger {
    kind: OutputKind,
}

impl StdoutLogger {
    pub(crate) const fn new(kind: OutputKind) -> Self {
        Self { kind }
    }

    fn write(&self, mut out: impl Write, record: &log::Record) -> io::Result<()> {
        match self.kind {
            OutputKind::Normal => writeln!(
                out,
                "{file}:{line}: {}: {}",
                record.level(),
                record.args(),
                file = record.file().unwrap_or_default(),
                line = record.line().unwrap_or_default()
            ),
            OutputKind::Json => {
                Output::new(out, OutputKind::Json).message(record.level().into(), record.args())
            }
        }
    }
}

impl Log for StdoutLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let stdout = io::stdout();
        let _ = self.write(stdout.lock(), record);
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use log::{Level, Record};

    use crate::cli::output::OutputKind;

    use super::StdoutLogger;

    fn log(kind: OutputKind, level: Level) -> String {
        let mut buf = Vec::new();

        StdoutLogger::new(kind)
            .write(
                &mut buf,
                &Record::builder()
                    .args(format_args!("gear at 3,1+1x1: 467 * 35 = 16345"))
                    .level(level)
                    .file(Some("src/gear.rs"))
                    .line(Some(84))
                    .build(),
            )
            .unwrap();

        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_normal_record() {
        assert_eq!(
            log(OutputKind::Normal, Level::Info),
            "src/gear.rs:84: INFO: gear at 3,1+1x1: 467 * 35 = 16345\n"
        );
    }

    #[test]
    fn test_json_record() {
        assert_eq!(
            log(OutputKind::Json, Level::Info),
            "{\"type\":\"message\",\"data\":{\"kind\":\"info\",\"output\":\"gear at 3,1+1x1: 467 * 35 = 16345\"}}\n"
        );

        assert!(log(OutputKind::Json, Level::Warn).contains("\"kind\":\"warn\""));
    }
}
