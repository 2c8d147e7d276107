//! Error rendering for the binary

use crate::error::InstallError;

use super::output::write_event;
use super::terminal::TerminalCapabilities;
use super::theme::{colors, paint, Icon};

/// Human-readable error block, with a resume hint for failed steps
pub fn format_error(err: &anyhow::Error, caps: TerminalCapabilities) -> String {
    let icon = Icon::Error.colored(caps.supports_color, caps.supports_unicode);
    let mut out = format!("{icon} {err}\n");

    for cause in err.chain().skip(1) {
        out.push_str(&format!("  caused by: {cause}\n"));
    }

    if let Some(install) = err.downcast_ref::<InstallError>() {
        if let Some(fix) = fix_hint(install) {
            out.push_str(&paint(&format!("  fix: {fix}"), colors::INFO, caps.supports_color));
            out.push('\n');
        }
    }
    out
}

fn fix_hint(err: &InstallError) -> Option<String> {
    match err {
        InstallError::StepFailed { step, source, .. } => {
            let resume = format!("re-run with --from-step {step} once the problem is fixed");
            match source.root() {
                InstallError::File(file) if file.is_not_found() => {
                    Some(format!("restore the missing file, then {resume}"))
                }
                _ => Some(resume),
            }
        }
        InstallError::InvalidPrefix(_) => {
            Some("pass --with-prefix with letters, digits and underscores, e.g. voy_".to_string())
        }
        InstallError::UnknownStep { .. } => {
            Some("run with --list-steps to see the steps for these flags".to_string())
        }
        _ => None,
    }
}

/// Print an error to stderr, or as an NDJSON event on stdout.
///
/// Step failures were already reported by the event sink in JSON mode.
pub fn print_error(err: &anyhow::Error, json: bool, caps: TerminalCapabilities) {
    if json {
        let already_reported = matches!(
            err.downcast_ref::<InstallError>(),
            Some(InstallError::StepFailed { .. })
        );
        if !already_reported {
            let event = serde_json::json!({
                "event": "error",
                "message": format!("{err:#}"),
            });
            let _ = write_event(&mut std::io::stdout().lock(), &event);
        }
        return;
    }

    eprint!("{}", format_error(err, caps));
}
