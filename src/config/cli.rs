use crate::config::ClientConfig;
use crate::domain::model::{ContactForm, LayoutForm};
use crate::utils::error::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "site-forms")]
#[command(about = "Submit the contact and layout planner forms against a running backend")]
pub struct CliConfig {
    /// Backend base URL; overrides the config file.
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// TOML client configuration.
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit log records as JSON lines.
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Send a message through the contact form.
    Contact {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        subject: String,
        #[arg(long, default_value = "")]
        message: String,
    },
    /// Generate a city layout report.
    Plan {
        #[arg(long, default_value = "")]
        population: String,
        #[arg(long, default_value = "")]
        temperature: String,
        #[arg(long, default_value = "")]
        weather: String,
        #[arg(long, default_value = "")]
        roads: String,
    },
    /// Fetch the quick recommendation stats.
    Recommend {
        #[arg(long, default_value = "")]
        population: String,
        #[arg(long, default_value = "")]
        temperature: String,
        #[arg(long, default_value = "")]
        weather: String,
    },
}

impl CliConfig {
    /// Loads the config file (if any) and applies command-line overrides.
    pub fn client_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.config {
            Some(path) => ClientConfig::from_file(path)?,
            None => ClientConfig::default(),
        };

        if let Some(base_url) = &self.base_url {
            config.api.base_url = base_url.clone();
        }

        Ok(config)
    }
}

impl Command {
    pub fn contact_form(&self) -> Option<ContactForm> {
        match self {
            Command::Contact {
                name,
                email,
                subject,
                message,
            } => Some(ContactForm {
                name: name.clone(),
                email: email.clone(),
                subject: subject.clone(),
                message: message.clone(),
            }),
            _ => None,
        }
    }

    pub fn layout_form(&self) -> Option<LayoutForm> {
        match self {
            Command::Plan {
                population,
                temperature,
                weather,
                roads,
            } => Some(LayoutForm {
                population: population.clone(),
                temperature: temperature.clone(),
                weather: weather.clone(),
                roads: roads.clone(),
            }),
            Command::Recommend {
                population,
                temperature,
                weather,
            } => Some(LayoutForm {
                population: population.clone(),
                temperature: temperature.clone(),
                weather: weather.clone(),
                roads: String::new(),
            }),
            Command::Contact { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plan_command() {
        let config = CliConfig::parse_from([
            "site-forms",
            "--base-url",
            "http://127.0.0.1:9000",
            "plan",
            "--population",
            "50000",
            "--temperature",
            "30",
            "--weather",
            "hot",
            "--roads",
            "narrow",
        ]);

        let form = config.command.layout_form().unwrap();
        assert_eq!(form.population, "50000");
        assert_eq!(form.roads, "narrow");
        assert!(config.command.contact_form().is_none());

        let client = config.client_config().unwrap();
        assert_eq!(client.api.base_url, "http://127.0.0.1:9000");
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let config = CliConfig::parse_from([
            "site-forms",
            "recommend",
            "--population",
            "1000",
            "--log-json",
            "--verbose",
        ]);

        assert!(config.log_json);
        assert!(config.verbose);
        assert!(config.command.layout_form().is_some());
    }

    #[test]
    fn test_missing_flags_become_empty_fields() {
        let config = CliConfig::parse_from(["site-forms", "contact", "--name", "Ada"]);

        let form = config.command.contact_form().unwrap();
        assert_eq!(form.name, "Ada");
        assert!(form.email.is_empty());
        assert!(form.to_request().is_err());
    }
}
