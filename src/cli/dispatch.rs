use anyhow::Result;
use gdi_validator::commands::{describe, validate};
use gdi_validator::config::ValidatorConfig;

use super::types::Mode;

pub fn dispatch(mode: Mode, config: &ValidatorConfig) -> Result<()> {
    match mode {
        Mode::Describe => describe::execute(config),
        Mode::Validate => validate::execute(config).map(|_| ()),
    }
}
