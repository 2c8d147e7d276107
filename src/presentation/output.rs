//! Output Rendering
//!
//! Event sinks for the two output formats (text and NDJSON) plus the step
//! listing for `--list-steps`.

use std::cell::{Cell, RefCell};
use std::io::{self, Write};

use serde_json::json;

use crate::application::InstallPlan;
use crate::domain::ports::{InstallEvent, InstallEventSink};

use super::terminal::TerminalCapabilities;
use super::theme::{colors, paint, Icon};

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// NDJSON event stream for scripting
    Json,
}

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &serde_json::Value) -> io::Result<()> {
    let line = serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string());
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// JSON shape of an install event
pub fn event_to_json(event: &InstallEvent) -> serde_json::Value {
    match event {
        InstallEvent::Started {
            project_root,
            step_count,
            dry_run,
        } => json!({
            "event": "start",
            "project_root": project_root.display().to_string(),
            "step_count": step_count,
            "dry_run": dry_run,
        }),
        InstallEvent::StepStarted {
            index,
            step,
            description,
        } => json!({
            "event": "step_start",
            "index": index,
            "step": step.as_str(),
            "description": description,
        }),
        InstallEvent::StepCompleted { index, step } => json!({
            "event": "step_complete",
            "index": index,
            "step": step.as_str(),
        }),
        InstallEvent::StepSkipped {
            index,
            step,
            reason,
        } => json!({
            "event": "step_skip",
            "index": index,
            "step": step.as_str(),
            "reason": reason,
        }),
        InstallEvent::FilePreview { path, diff } => json!({
            "event": "file_preview",
            "path": path.display().to_string(),
            "diff": diff,
        }),
        InstallEvent::Warning { message } => json!({
            "event": "warning",
            "message": message,
        }),
        InstallEvent::Failed { index, step, error } => json!({
            "event": "error",
            "index": index,
            "step": step.as_str(),
            "message": error,
        }),
        InstallEvent::Completed {
            executed_count,
            skipped_count,
            warning_count,
        } => json!({
            "event": "complete",
            "executed": executed_count,
            "skipped": skipped_count,
            "warnings": warning_count,
        }),
    }
}

/// NDJSON event sink
pub struct JsonEventSink<W: Write> {
    out: RefCell<W>,
}

impl<W: Write> JsonEventSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: RefCell::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl JsonEventSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> InstallEventSink for JsonEventSink<W> {
    fn on_event(&self, event: InstallEvent) {
        let mut out = self.out.borrow_mut();
        let _ = write_event(&mut *out, &event_to_json(&event));
        let _ = out.flush();
    }
}

/// Progress lines for a terminal
pub struct TextEventSink<W: Write> {
    out: RefCell<W>,
    caps: TerminalCapabilities,
    verbose: u8,
    step_count: Cell<usize>,
    dry_run: Cell<bool>,
}

impl<W: Write> TextEventSink<W> {
    pub fn new(out: W, caps: TerminalCapabilities, verbose: u8) -> Self {
        Self {
            out: RefCell::new(out),
            caps,
            verbose,
            step_count: Cell::new(0),
            dry_run: Cell::new(false),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }

    fn icon(&self, icon: Icon) -> String {
        icon.colored(self.caps.supports_color, self.caps.supports_unicode)
    }

    fn counter(&self, index: usize) -> String {
        format!("[{index}/{}]", self.step_count.get())
    }

    fn render(&self, event: &InstallEvent) -> Option<String> {
        let color = self.caps.supports_color;
        match event {
            InstallEvent::Started {
                project_root,
                step_count,
                dry_run,
            } => {
                self.step_count.set(*step_count);
                self.dry_run.set(*dry_run);
                let mode = if *dry_run { " (dry run)" } else { "" };
                Some(format!(
                    "Installing Voyager into {}{mode}",
                    project_root.display()
                ))
            }
            InstallEvent::StepStarted {
                index, description, ..
            } => Some(format!(
                "{} {} {description}",
                self.icon(Icon::Progress),
                self.counter(*index)
            )),
            InstallEvent::StepCompleted { index, step } => (self.verbose > 0).then(|| {
                format!(
                    "{} {} {step}",
                    self.icon(Icon::Success),
                    self.counter(*index)
                )
            }),
            InstallEvent::StepSkipped {
                index,
                step,
                reason,
            } => (self.verbose > 0 || self.dry_run.get()).then(|| {
                paint(
                    &format!(
                        "{} {} {step}: {reason}",
                        Icon::Pending.render(self.caps.supports_unicode),
                        self.counter(*index)
                    ),
                    colors::DIM,
                    color,
                )
            }),
            InstallEvent::FilePreview { path, diff } => {
                let mut block = format!("{} {}\n", self.icon(Icon::Diff), path.display());
                for line in diff.lines() {
                    block.push_str(&color_diff_line(line, color));
                    block.push('\n');
                }
                Some(block.trim_end().to_string())
            }
            InstallEvent::Warning { message } => Some(format!(
                "{} {}",
                self.icon(Icon::Warning),
                paint(message, colors::WARNING, color)
            )),
            InstallEvent::Failed { index, step, error } => Some(format!(
                "{} {} {step} failed: {error}",
                self.icon(Icon::Error),
                self.counter(*index)
            )),
            InstallEvent::Completed {
                executed_count,
                skipped_count,
                warning_count,
            } => {
                let headline = if self.dry_run.get() {
                    "Dry run complete, nothing was changed"
                } else {
                    "Successfully installed Voyager! Enjoy"
                };
                let mut line = format!("{} {headline}", self.icon(Icon::Success));
                line.push_str(&format!(
                    "\n  {executed_count} steps run, {skipped_count} skipped, {warning_count} warnings"
                ));
                Some(line)
            }
        }
    }
}

impl TextEventSink<io::Stdout> {
    pub fn stdout(caps: TerminalCapabilities, verbose: u8) -> Self {
        Self::new(io::stdout(), caps, verbose)
    }
}

impl<W: Write> InstallEventSink for TextEventSink<W> {
    fn on_event(&self, event: InstallEvent) {
        if let Some(text) = self.render(&event) {
            let mut out = self.out.borrow_mut();
            let _ = writeln!(out, "{text}");
            let _ = out.flush();
        }
    }
}

fn color_diff_line(line: &str, supports_color: bool) -> String {
    let color = if line.starts_with("+++") || line.starts_with("---") || line.starts_with("@@") {
        colors::INFO
    } else if line.starts_with('+') {
        colors::SUCCESS
    } else if line.starts_with('-') {
        colors::ERROR
    } else {
        colors::DIM
    };
    paint(&format!("    {line}"), color, supports_color)
}

/// `--list-steps` text: one numbered line per step
pub fn render_plan(plan: &InstallPlan) -> String {
    let width = plan
        .steps()
        .iter()
        .map(|s| s.name().as_str().len())
        .max()
        .unwrap_or(0);
    let mut out = String::new();
    for (i, step) in plan.steps().iter().enumerate() {
        out.push_str(&format!(
            "[{:>2}] {:<width$}  {}\n",
            i + 1,
            step.name().as_str(),
            step.description(),
        ));
    }
    out
}

/// `--list-steps --json`
pub fn plan_to_json(plan: &InstallPlan) -> serde_json::Value {
    let steps: Vec<_> = plan
        .steps()
        .iter()
        .enumerate()
        .map(|(i, step)| {
            json!({
                "index": i + 1,
                "step": step.name().as_str(),
                "description": step.description(),
            })
        })
        .collect();
    json!({ "event": "plan", "steps": steps })
}
