//! JSON-lines command runner.
//!
//! Each non-blank input line is one [`Command`]. Lines starting with `#`
//! are comments. Replies other than [`Reply::Done`] are written to the
//! output as one JSON value per line. A line that fails to parse is
//! logged and skipped; only I/O failures abort the run.

use std::io::{BufRead, Write};

use panelgui_common::{Event, PanelGuiError};
use panelgui_engine::{Command, PanelManager, Reply};
use tokio::sync::broadcast::{self, error::TryRecvError};

/// Totals for one run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    pub executed: usize,
    pub replies: usize,
    pub skipped: usize,
}

pub fn run_script<R: BufRead, W: Write>(
    manager: &mut PanelManager,
    input: R,
    mut output: W,
) -> Result<RunStats, PanelGuiError> {
    let mut events = manager.subscribe();
    let mut stats = RunStats::default();

    for (idx, line) in input.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let cmd = match parse_line(idx + 1, trimmed) {
            Ok(cmd) => cmd,
            Err(e) => {
                tracing::warn!("{e}");
                stats.skipped += 1;
                continue;
            }
        };
        check_colors(idx + 1, &cmd);

        let reply = manager.execute(cmd);
        stats.executed += 1;
        if reply != Reply::Done {
            let json = serde_json::to_string(&reply)
                .map_err(|e| PanelGuiError::Other(format!("reply encoding failed: {e}")))?;
            writeln!(output, "{json}")?;
            stats.replies += 1;
        }
        drain_events(&mut events);
    }

    output.flush()?;
    tracing::info!(
        "Script finished: {} executed, {} replies, {} skipped",
        stats.executed,
        stats.replies,
        stats.skipped
    );
    Ok(stats)
}

fn parse_line(line: usize, text: &str) -> Result<Command, PanelGuiError> {
    serde_json::from_str(text).map_err(|e| PanelGuiError::Script {
        line,
        message: e.to_string(),
    })
}

/// Style colors are forwarded as-is; unrecognised ones only get a warning.
fn check_colors(line: usize, cmd: &Command) {
    if let Command::SetStyle {
        header_bg,
        body_text,
        header_text,
        body_bg,
        ..
    } = cmd
    {
        for color in [header_bg, body_text, header_text, body_bg] {
            if !color.trim().is_empty() && !panelgui_config::colors::validate_color(color) {
                tracing::warn!("line {line}: unrecognised color '{color}' passed through");
            }
        }
    }
}

fn drain_events(rx: &mut broadcast::Receiver<Event>) {
    loop {
        match rx.try_recv() {
            Ok(event) => tracing::debug!(?event, "engine event"),
            Err(TryRecvError::Lagged(n)) => tracing::warn!("dropped {n} engine events"),
            Err(_) => break,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use panelgui_common::PanelId;
    use serde_json::{json, Value};
    use std::io::Cursor;

    fn run(mgr: &mut PanelManager, script: &str) -> (RunStats, Vec<Value>) {
        let mut out = Vec::new();
        let stats = run_script(mgr, Cursor::new(script), &mut out).unwrap();
        let replies = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        (stats, replies)
    }

    #[test]
    fn executes_commands_and_prints_replies() {
        let mut mgr = PanelManager::default();
        let script = r#"
{"op":"open","panel":"w","title":"Demo"}
{"op":"set_position","panel":"w","x":10,"y":20}
{"op":"position","panel":"w"}
{"op":"create","panel":"w","element":"c","widget":{"kind":"checkbox","label":"On","checked":true}}
{"op":"read_value","panel":"w","element":"c"}
"#;
        let (stats, replies) = run(&mut mgr, script);
        assert_eq!(stats.executed, 5);
        assert_eq!(stats.replies, 2);
        assert_eq!(stats.skipped, 0);
        assert_eq!(replies, vec![json!({"x": 10, "y": 20}), json!("true")]);
        assert!(mgr.contains(&PanelId::from("w")));
    }

    #[test]
    fn bad_lines_are_skipped() {
        let mut mgr = PanelManager::default();
        let script = "not json\n{\"op\":\"explode\"}\n{\"op\":\"open\",\"panel\":\"ok\"}\n";
        let (stats, replies) = run(&mut mgr, script);
        assert_eq!(stats.skipped, 2);
        assert_eq!(stats.executed, 1);
        assert!(replies.is_empty());
        assert!(mgr.contains(&PanelId::from("ok")));
    }

    #[test]
    fn comments_and_blank_lines_are_ignored() {
        let mut mgr = PanelManager::default();
        let (stats, _) = run(&mut mgr, "# setup\n\n   \n{\"op\":\"close_all\"}\n");
        assert_eq!(stats, RunStats { executed: 1, replies: 0, skipped: 0 });
    }

    #[test]
    fn invalid_colors_are_still_applied() {
        let mut mgr = PanelManager::default();
        let script = r#"{"op":"set_style","panel":"w","header_bg":"not-a-color"}"#;
        let (stats, _) = run(&mut mgr, script);
        assert_eq!(stats.executed, 1);
        let panel = mgr.panel(&PanelId::from("w")).unwrap();
        assert_eq!(panel.style.header_bg, "not-a-color");
    }

    #[test]
    fn parse_error_carries_line_number() {
        let err = parse_line(4, "{").unwrap_err();
        assert!(matches!(err, PanelGuiError::Script { line: 4, .. }));
    }

    #[test]
    fn export_reply_is_one_line() {
        let mut mgr = PanelManager::default();
        let script = "{\"op\":\"open\",\"panel\":\"w\",\"title\":\"T\"}\n{\"op\":\"export\",\"panel\":\"w\"}\n";
        let (_, replies) = run(&mut mgr, script);
        assert_eq!(replies.len(), 1);
        assert_eq!(replies[0]["id"], "w");
        assert_eq!(replies[0]["title"], "T");
    }
}
