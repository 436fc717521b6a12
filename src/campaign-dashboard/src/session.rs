//! Line-oriented interactive session: one user event per stdin line.

use campaign_core::{CampaignError, CampaignResult, CampaignStatus};
use campaign_reporting::{Dashboard, DashboardEvent};
use std::io::BufRead;
use tracing::{info, warn};

pub const HELP: &str = "commands: status <active|paused>, search <text>, clear, show, help, quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Event(DashboardEvent),
    Show,
    Help,
    Quit,
}

/// Parse one input line. `search` keeps everything after the first space
/// untouched, so padded queries reach the dashboard as typed.
pub fn parse_command(line: &str) -> Option<CampaignResult<Command>> {
    let line = line.strip_suffix('\n').unwrap_or(line);
    let line = line.strip_suffix('\r').unwrap_or(line);
    let (word, rest) = match line.trim_start().split_once(' ') {
        Some((word, rest)) => (word, rest),
        None => (line.trim(), ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "" => return None,
        "status" => rest
            .parse::<CampaignStatus>()
            .map(|s| Command::Event(DashboardEvent::StatusSelected(s))),
        "search" => Ok(Command::Event(DashboardEvent::QueryChanged(rest.to_string()))),
        "clear" => Ok(Command::Event(DashboardEvent::QueryChanged(String::new()))),
        "show" => Ok(Command::Show),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(CampaignError::Validation(format!(
            "unknown command {other:?}; {HELP}"
        ))),
    };
    Some(command)
}

/// Feed input lines into the dashboard until EOF or `quit`. Rendering
/// happens through the dashboard's listeners; `show` is answered by
/// `show_view`.
pub fn run<R: BufRead>(
    input: R,
    dashboard: &mut Dashboard,
    mut show_view: impl FnMut(&Dashboard),
) -> anyhow::Result<()> {
    info!("Interactive session started");
    for line in input.lines() {
        let line = line?;
        match parse_command(&line) {
            None => continue,
            Some(Ok(Command::Event(event))) => dashboard.apply(event),
            Some(Ok(Command::Show)) => show_view(dashboard),
            Some(Ok(Command::Help)) => eprintln!("{HELP}"),
            Some(Ok(Command::Quit)) => break,
            Some(Err(e)) => {
                warn!(error = %e, "Ignoring input line");
                eprintln!("{e}");
            }
        }
    }
    info!("Interactive session ended");
    Ok(())
}
