//! Line input with an optional timeout.
//!
//! Without a timeout, stdin is read in place so unread lines stay buffered
//! for whatever asks next. With a timeout, a reader thread forwards lines
//! over a channel so waiting can give up after a deadline. For stdin that
//! thread and channel are process-wide: once started, every stdin
//! `LineSource` reads through it and no line is lost between sources.

use std::io::{self, BufRead};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::sync::{Mutex, OnceLock};
use std::thread;
use std::time::Duration;

use tracing::{debug, warn};

use crate::error::{Result, WizardError};

type LineReceiver = Receiver<io::Result<String>>;

static STDIN_LINES: OnceLock<Mutex<LineReceiver>> = OnceLock::new();

enum Source {
    /// Blocking reads on the process stdin.
    Stdin,
    /// The process-wide stdin reader thread.
    SharedStdin(&'static Mutex<LineReceiver>),
    /// A reader thread owned by this source.
    Owned(LineReceiver),
}

pub struct LineSource {
    source: Source,
    timeout: Option<Duration>,
}

impl LineSource {
    /// Read stdin, waiting at most `timeout` per line (`None` waits forever).
    pub fn stdin(timeout: Option<Duration>) -> Self {
        let source = match (timeout, STDIN_LINES.get()) {
            (None, None) => Source::Stdin,
            (_, Some(shared)) => Source::SharedStdin(shared),
            (Some(_), None) => Source::SharedStdin(STDIN_LINES.get_or_init(|| {
                debug!("starting stdin reader thread");
                Mutex::new(forward_lines(|line| io::stdin().read_line(line)))
            })),
        };
        Self { source, timeout }
    }

    /// Forward lines from `reader` on a dedicated thread.
    pub fn spawn<R>(mut reader: R, timeout: Option<Duration>) -> Self
    where
        R: BufRead + Send + 'static,
    {
        Self {
            source: Source::Owned(forward_lines(move |line| reader.read_line(line))),
            timeout,
        }
    }

    /// Next line without its terminator.
    pub fn next_line(&self) -> Result<String> {
        let line = match &self.source {
            Source::Stdin => read_stdin_line()?,
            Source::SharedStdin(shared) => {
                let rx = shared
                    .lock()
                    .map_err(|_| io::Error::other("stdin reader lock poisoned"))?;
                receive(&rx, self.timeout)?
            }
            Source::Owned(rx) => receive(rx, self.timeout)?,
        };
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }
}

fn forward_lines<F>(mut read_line: F) -> LineReceiver
where
    F: FnMut(&mut String) -> io::Result<usize> + Send + 'static,
{
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        loop {
            let mut line = String::new();
            let sent = match read_line(&mut line) {
                Ok(0) => break,
                Ok(_) => tx.send(Ok(line)),
                Err(err) => {
                    let _ = tx.send(Err(err));
                    break;
                }
            };
            if sent.is_err() {
                break;
            }
        }
        debug!("input stream finished");
    });
    rx
}

fn read_stdin_line() -> Result<String> {
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Err(WizardError::InputClosed);
    }
    Ok(line)
}

fn receive(rx: &LineReceiver, timeout: Option<Duration>) -> Result<String> {
    let received = match timeout {
        None => rx.recv().map_err(|_| WizardError::InputClosed)?,
        Some(limit) => rx.recv_timeout(limit).map_err(|err| match err {
            RecvTimeoutError::Timeout => {
                warn!(secs = limit.as_secs(), "timed out waiting for input");
                WizardError::PromptTimedOut {
                    secs: limit.as_secs(),
                }
            }
            RecvTimeoutError::Disconnected => WizardError::InputClosed,
        })?,
    };
    Ok(received?)
}
