//! Spinner shown during bucket resolution
//!
//! Transfers report one line per uploaded object, so the only
//! indeterminate wait worth indicating is the validation round-trip.

use super::OutputConfig;

/// Indeterminate progress spinner
///
/// Suppressed in quiet, JSON, or no-progress mode.
#[derive(Debug)]
pub struct Spinner {
    bar: Option<indicatif::ProgressBar>,
}

impl Spinner {
    /// Start a spinner with the given message
    pub fn new(config: &OutputConfig, message: &str) -> Self {
        let bar = if config.quiet || config.json || config.no_progress {
            None
        } else {
            let bar = indicatif::ProgressBar::new_spinner();
            bar.set_style(
                indicatif::ProgressStyle::default_spinner()
                    .template("{spinner:.green} {msg}")
                    .expect("valid template"),
            );
            bar.set_message(message.to_string());
            bar.enable_steady_tick(std::time::Duration::from_millis(100));
            Some(bar)
        };

        Self { bar }
    }

    /// Stop the spinner and remove it from the terminal
    pub fn finish_and_clear(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }

    /// Check if the spinner is visible
    pub fn is_visible(&self) -> bool {
        self.bar.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_quiet_mode() {
        let config = OutputConfig {
            quiet: true,
            ..Default::default()
        };
        let spinner = Spinner::new(&config, "resolving");
        assert!(!spinner.is_visible());
    }

    #[test]
    fn test_spinner_json_mode() {
        let config = OutputConfig {
            json: true,
            ..Default::default()
        };
        let spinner = Spinner::new(&config, "resolving");
        assert!(!spinner.is_visible());
    }

    #[test]
    fn test_spinner_no_progress() {
        let config = OutputConfig {
            no_progress: true,
            ..Default::default()
        };
        let spinner = Spinner::new(&config, "resolving");
        assert!(!spinner.is_visible());
    }

    #[test]
    fn test_spinner_normal() {
        let config = OutputConfig::default();
        let spinner = Spinner::new(&config, "resolving");
        assert!(spinner.is_visible());
        spinner.finish_and_clear();
    }
}
