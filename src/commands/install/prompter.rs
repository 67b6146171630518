use crate::core::types::{ConfigAction, ConfigEntry, PluginFile};
use crate::error::Result;
use crate::traits::InstallPrompter;
use crate::ui as output;

const CONFIG_ACTIONS: [ConfigAction; 3] =
    [ConfigAction::AutoApply, ConfigAction::Manual, ConfigAction::Skip];

/// Answers installer questions on the terminal.
///
/// With `--yes` every default is accepted and fragments are auto-applied.
/// Without a terminal, defaults are accepted and fragments are only shown.
pub struct TerminalPrompter {
    yes: bool,
    interactive: bool,
}

impl TerminalPrompter {
    pub fn new(yes: bool) -> Self {
        Self::with_mode(yes, output::is_interactive())
    }

    pub fn with_mode(yes: bool, interactive: bool) -> Self {
        Self { yes, interactive }
    }

    fn asks(&self) -> bool {
        self.interactive && !self.yes
    }
}

impl InstallPrompter for TerminalPrompter {
    fn file_destination(&mut self, file: &PluginFile) -> Result<String> {
        if !self.asks() {
            return Ok(file.location.clone());
        }

        if output::prompt_yes_no(&format!("Install {} to {}?", file.name, file.location), true) {
            return Ok(file.location.clone());
        }

        Ok(output::prompt_text(
            &format!("Enter custom location for {}:", file.name),
            &file.location,
        ))
    }

    fn config_action(&mut self, entry: &ConfigEntry, fragment: &str) -> Result<ConfigAction> {
        if self.yes {
            output::verbose(&format!("Auto-applying configuration to {}", entry.target_file));
            return Ok(ConfigAction::AutoApply);
        }

        output::info(&format!("Configuration needed for: {}", entry.target_file));
        output::framed(fragment);

        if !self.interactive {
            return Ok(ConfigAction::Manual);
        }

        let choices: Vec<String> = CONFIG_ACTIONS.iter().map(ToString::to_string).collect();
        let picked = output::prompt_select(
            &format!("How would you like to handle {}?", entry.target_file),
            &choices,
        );

        Ok(picked.map_or(ConfigAction::Skip, |i| CONFIG_ACTIONS[i]))
    }
}
