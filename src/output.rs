//! Terminal rendering of the deploy form
//!
//! Commands draw the card, its fields and its alerts through `Output`.
//! Error alerts carry their `AlertKind` and go to stderr; everything else
//! is stdout. Tests swap in `testing::MockOutput` to capture both.

use crate::error::CliResult;
use crate::logic::form::AlertKind;

/// Sink for everything a command shows
pub trait Output: Send + Sync {
    /// Plain line on stdout
    fn print(&self, msg: &str) -> CliResult<()>;

    /// Red alert: a failed precondition or action
    fn error_alert(&self, kind: AlertKind, msg: &str) -> CliResult<()>;

    fn print_json(&self, data: &serde_json::Value) -> CliResult<()> {
        self.print(&serde_json::to_string_pretty(data)?)
    }

    /// Green alert
    fn success_alert(&self, msg: &str) -> CliResult<()> {
        self.print(&format!("✅ {}", msg))
    }

    /// Secondary line: progress, addresses, links
    fn note(&self, msg: &str) -> CliResult<()> {
        self.print(&format!("   {}", msg))
    }

    fn card_title(&self, title: &str, subtitle: &str) -> CliResult<()> {
        let width = title.chars().count().max(subtitle.chars().count());
        self.print(&format!("\n{}\n{}\n{}", title, subtitle, "-".repeat(width)))
    }

    /// Labelled input with its current value and optional hint below
    fn field(&self, label: &str, value: &str, hint: Option<&str>) -> CliResult<()> {
        self.print(&format!("{:<14} {}", format!("{}:", label), value))?;
        match hint {
            Some(hint) => self.print(&format!("{:<14} ({})", "", hint)),
            None => Ok(()),
        }
    }

    fn button(&self, label: &str, disabled: bool) -> CliResult<()> {
        if disabled {
            self.print(&format!("[ {} ] (busy)", label))
        } else {
            self.print(&format!("[ {} ]", label))
        }
    }
}

/// Stdout/stderr output
pub struct ConsoleOutput;

impl Output for ConsoleOutput {
    fn print(&self, msg: &str) -> CliResult<()> {
        println!("{}", msg);
        Ok(())
    }

    fn error_alert(&self, kind: AlertKind, msg: &str) -> CliResult<()> {
        eprintln!("❌ [{}] {}", kind.label(), msg);
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;

    #[test]
    fn test_error_alerts_stay_off_stdout() {
        let output = MockOutput::new();
        output.print("contract source").unwrap();
        output
            .error_alert(AlertKind::Cancellation, "Transaction cancelled by user")
            .unwrap();

        assert_eq!(output.get_messages(), vec!["contract source".to_string()]);
        assert_eq!(
            output.get_alerts(),
            vec![(AlertKind::Cancellation, "Transaction cancelled by user".to_string())]
        );
    }

    #[test]
    fn test_field_prints_hint_on_second_line() {
        let output = MockOutput::new();
        output
            .field("Contract Name", "meme-token", Some("1-40 chars: letters, numbers, . _ -"))
            .unwrap();
        output.field("Decimals", "6", None).unwrap();

        let lines = output.get_messages();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Contract Name:"));
        assert!(lines[0].ends_with("meme-token"));
        assert!(lines[1].contains("(1-40 chars"));
        assert!(lines[2].starts_with("Decimals:"));
    }

    #[test]
    fn test_button_marks_busy_state() {
        let output = MockOutput::new();
        output.button("Deploy Meme Token", false).unwrap();
        output.button("Deploying...", true).unwrap();
        assert_eq!(
            output.get_messages(),
            vec!["[ Deploy Meme Token ]".to_string(), "[ Deploying... ] (busy)".to_string()]
        );
    }

    #[test]
    fn test_card_title_rule_spans_longest_line() {
        let output = MockOutput::new();
        output
            .card_title("Deploy Meme Token", "Launch a SIP-010 token in minutes")
            .unwrap();
        let rule = "-".repeat("Launch a SIP-010 token in minutes".len());
        output.assert_contains_message(&format!("Launch a SIP-010 token in minutes\n{}", rule));
    }
}
