//! Operator CLI for exercising the webhook out of band.

use crate::{JobQueryTool, JobSearchTool, SearchCriteria};
use anyhow::Result;
use clap::{Parser, Subcommand};
use rcore::WebhookConfig;

/// Invoke the n8n job-search webhook from the command line.
#[derive(Debug, Parser)]
#[command(name = "remora-n8n", version, about)]
pub struct Cli {
    /// Webhook endpoint URL (falls back to N8N_WEBHOOK_URL).
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// API key sent as a bearer token (falls back to N8N_API_KEY).
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Request timeout in milliseconds (falls back to N8N_TIMEOUT).
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Structured search with individual criteria flags.
    Search {
        /// Job title or role.
        #[arg(long)]
        position: Option<String>,

        /// Location filter.
        #[arg(long)]
        location: Option<String>,

        /// Skill filter (repeatable).
        #[arg(long = "skill")]
        skills: Vec<String>,

        /// Seniority filter.
        #[arg(long)]
        experience_level: Option<String>,

        /// Employment type.
        #[arg(long)]
        job_type: Option<String>,

        /// Lower salary bound.
        #[arg(long)]
        salary_min: Option<f64>,

        /// Upper salary bound.
        #[arg(long)]
        salary_max: Option<f64>,

        /// Remote positions only.
        #[arg(long)]
        remote: bool,

        /// Workflow name reported in the envelope.
        #[arg(long)]
        workflow: Option<String>,
    },
    /// Free-text query relayed verbatim.
    Ask {
        /// Natural-language job-search request.
        query: String,
    },
}

impl Cli {
    /// Run the selected subcommand and print the returned JSON.
    pub async fn run(self) -> Result<()> {
        let mut config = WebhookConfig::new();
        if let Some(url) = self.endpoint {
            config = config.endpoint_url(url);
        }
        if let Some(key) = self.api_key {
            config = config.api_key(key);
        }
        if let Some(millis) = self.timeout_ms {
            config = config.timeout_ms(millis);
        }

        match self.command {
            Command::Search {
                position,
                location,
                skills,
                experience_level,
                job_type,
                salary_min,
                salary_max,
                remote,
                workflow,
            } => {
                if let Some(name) = workflow {
                    config = config.workflow(name);
                }
                let tool = JobSearchTool::new(config)?;
                let criteria = SearchCriteria {
                    position,
                    location,
                    skills,
                    experience_level,
                    job_type,
                    salary_min,
                    salary_max,
                    remote: remote.then_some(true),
                    ..Default::default()
                };
                println!("{}", tool.invoke(&criteria).await);
            }
            Command::Ask { query } => {
                let tool = JobQueryTool::new(config)?;
                println!("{}", tool.invoke(&query).await?);
            }
        }

        Ok(())
    }
}
