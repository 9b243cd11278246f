// src/adapter/coordinator.rs
// Interactive session loop

use std::io::{BufRead, BufReader, Write};
use std::thread;

use tokio::sync::mpsc::{self, error::TryRecvError};
use tokio::time::{sleep, Duration};

use crate::adapter::command::{Command, HELP};
use crate::adapter::renderer::DashboardView;
use crate::application::usecase::{CycleOutcome, DashboardController, SessionState};
use crate::domain::errors::AppResult;
use crate::domain::repository::QuoteTransport;
use crate::domain::service::PolarityScorer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Refresh,
    Idle,
    Quit,
}

/// Forward stdin lines to the session loop. The reader thread is detached,
/// so a pending read never holds up shutdown.
pub fn spawn_stdin_reader() -> mpsc::Receiver<String> {
    spawn_line_reader(BufReader::new(std::io::stdin()))
}

/// Forward lines from any blocking reader until it ends or the loop hangs up
pub fn spawn_line_reader<R: BufRead + Send + 'static>(reader: R) -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel::<String>(32);

    thread::spawn(move || {
        for line in reader.lines() {
            match line {
                Ok(line) => {
                    if tx.blocking_send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    log::error!("Failed to read command: {}", e);
                    break;
                }
            }
        }
        log::debug!("Command input closed");
    });

    rx
}

/// Drives refresh cycles from user commands or the auto-refresh timer.
/// Everything runs on one task; the session is handed to each cycle by
/// mutable reference.
pub struct DashboardCoordinator<T: QuoteTransport, P: PolarityScorer, W: Write> {
    controller: DashboardController<T, P>,
    session: SessionState,
    commands: mpsc::Receiver<String>,
    out: W,
    refresh_interval: Duration,
    history_rows: usize,
    cycles: u64,
}

impl<T: QuoteTransport, P: PolarityScorer, W: Write> DashboardCoordinator<T, P, W> {
    pub fn new(
        controller: DashboardController<T, P>,
        session: SessionState,
        commands: mpsc::Receiver<String>,
        out: W,
        refresh_interval: Duration,
        history_rows: usize,
    ) -> Self {
        Self {
            controller,
            session,
            commands,
            out,
            refresh_interval,
            history_rows,
            cycles: 0,
        }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Run until `quit`, or until input closes while auto-refresh is off
    pub async fn run(&mut self) -> AppResult<()> {
        self.refresh().await?;

        loop {
            if self.session.auto_refresh {
                // The wait is never cut short; input typed meanwhile is
                // applied once it ends.
                sleep(self.refresh_interval).await;

                if self.drain_pending()? == Flow::Quit {
                    break;
                }
                self.refresh().await?;
            } else {
                let line = match self.commands.recv().await {
                    Some(line) => line,
                    None => {
                        log::info!("Input closed, leaving dashboard");
                        break;
                    }
                };

                match self.handle_line(&line)? {
                    Flow::Quit => break,
                    Flow::Refresh => {
                        self.refresh().await?;
                    }
                    Flow::Idle => {}
                }
            }
        }

        log::info!("Session ended after {} refresh cycles", self.cycles);
        Ok(())
    }

    /// One full cycle followed by a redraw
    pub async fn refresh(&mut self) -> AppResult<CycleOutcome> {
        let outcome = self.controller.refresh(&mut self.session).await;
        self.cycles += 1;

        let view = DashboardView {
            outcome: &outcome,
            history: &self.session.history,
            threshold_percent: self.session.threshold_percent,
            history_rows: self.history_rows,
        };
        writeln!(self.out, "{}", view)?;
        if self.session.auto_refresh {
            writeln!(
                self.out,
                "(auto-refresh every {}s; type 'auto off' to stop)",
                self.refresh_interval.as_secs()
            )?;
        }
        self.out.flush()?;

        Ok(outcome)
    }

    fn drain_pending(&mut self) -> AppResult<Flow> {
        loop {
            match self.commands.try_recv() {
                Ok(line) => {
                    if self.handle_line(&line)? == Flow::Quit {
                        return Ok(Flow::Quit);
                    }
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => {
                    return Ok(Flow::Refresh)
                }
            }
        }
    }

    fn handle_line(&mut self, line: &str) -> AppResult<Flow> {
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                log::debug!("Rejected input '{}': {}", line, e);
                writeln!(self.out, "{} (type 'help' for commands)", e)?;
                return Ok(Flow::Idle);
            }
        };

        match command {
            Command::Quit => Ok(Flow::Quit),
            Command::Help => {
                writeln!(self.out, "{}", HELP)?;
                Ok(Flow::Idle)
            }
            command => {
                log::debug!("Applying {:?}", command);
                if command.apply(&mut self.session) {
                    Ok(Flow::Refresh)
                } else {
                    Ok(Flow::Idle)
                }
            }
        }
    }
}
