use core::fmt;
use std::io::{self, Write};

use serde::Serialize;

use crate::cli::Report;

/// Writes answers, messages and bench reports either as plain text or as
/// one JSON object per line.
pub(crate) struct Output<O> {
    out: O,
    kind: OutputKind,
}

#[derive(Debug, Clone, Copy)]
pub(crate) enum OutputKind {
    Json,
    Normal,
}

impl<O> Output<O>
where
    O: Write,
{
    pub(crate) fn new(out: O, kind: OutputKind) -> Self {
        Self { out, kind }
    }

    pub(crate) fn info(&mut self, m: impl fmt::Display) -> io::Result<()> {
        self.message(MessageKind::Info, m)
    }

    pub(crate) fn error(&mut self, m: impl fmt::Display) -> io::Result<()> {
        self.message(MessageKind::Error, m)
    }

    pub(crate) fn answer<T>(&mut self, answer: &T) -> io::Result<()>
    where
        T: fmt::Debug + Serialize,
    {
        match self.kind {
            OutputKind::Json => self.json(LineType::Answer, answer),
            OutputKind::Normal => writeln!(self.out, "answer: {answer:?}"),
        }
    }

    pub(crate) fn report(&mut self, report: &Report) -> io::Result<()> {
        match self.kind {
            OutputKind::Json => self.json(LineType::Report, report),
            OutputKind::Normal => writeln!(self.out, "{report}"),
        }
    }

    pub(crate) fn message(&mut self, kind: MessageKind, m: impl fmt::Display) -> io::Result<()> {
        match self.kind {
            OutputKind::Json => {
                let output = m.to_string();
                self.json(
                    LineType::Message,
                    &Message {
                        kind,
                        output: &output,
                    },
                )
            }
            OutputKind::Normal => writeln!(self.out, "{kind}: {m}"),
        }
    }

    fn json<T>(&mut self, ty: LineType, data: &T) -> io::Result<()>
    where
        T: Serialize,
    {
        serde_json::to_writer(&mut self.out, &Line { ty, data })?;
        writeln!(self.out)
    }
}

#[derive(Serialize)]
struct Line<'a, T> {
    #[serde(rename = "type")]
    ty: LineType,
    data: &'a T,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "kebab-case")]
enum LineType {
    Answer,
    Message,
    Report,
}

/// Severity of a message line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum MessageKind {
    Error,
    Warn,
    Info,
    Debug,
}

impl From<log::Level> for MessageKind {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Self::Error,
            log::Level::Warn => Self::Warn,
            log::Level::Info => Self::Info,
            log::Level::Debug | log::Level::Trace => Self::Debug,
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };

        f.write_str(kind)
    }
}

#[derive(Serialize)]
struct Message<'a> {
    kind: MessageKind,
    output: &'a str,
}
