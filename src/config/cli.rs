use crate::config::{ScreenerConfig, DEFAULT_BASE_URL};
use crate::utils::error::Result;
use crate::utils::validation::validate_required_field;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "vacancy-screener")]
#[command(about = "Checks a candidate against their vacancy's requirements and comments the result")]
pub struct CliArgs {
    #[arg(long, env = "SKILLAZ_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[arg(long, env = "SKILLAZ_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    #[arg(long, env = "SKILLAZ_CANDIDATE_ID")]
    pub candidate_id: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl CliArgs {
    pub fn into_config(self) -> Result<ScreenerConfig> {
        let token = validate_required_field("token", &self.token)?;
        let candidate_id = validate_required_field("candidate_id", &self.candidate_id)?;

        Ok(ScreenerConfig::new(token.clone(), candidate_id.clone()).with_base_url(self.base_url))
    }
}
