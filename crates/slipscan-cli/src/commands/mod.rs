//! CLI subcommands.

pub mod batch;
pub mod config;
pub mod scan;

use std::path::Path;

use slipscan_core::{SlipAnalyzer, SlipscanConfig, TesseractGateway, TipParser};

/// Load the config file if given, defaults otherwise.
pub fn load_config(path: Option<&str>) -> anyhow::Result<SlipscanConfig> {
    match path {
        Some(p) => Ok(SlipscanConfig::from_file(Path::new(p))?),
        None => Ok(SlipscanConfig::default()),
    }
}

/// Build the analyzer the commands share.
pub fn build_analyzer(config: &SlipscanConfig) -> SlipAnalyzer<TesseractGateway> {
    let gateway = TesseractGateway::with_config(config.gateway.clone());
    let parser = TipParser::new().with_min_odds(config.parser.min_odds);
    SlipAnalyzer::new(gateway).with_parser(parser)
}
