use anyhow::Result;
use nutrigene_tools::config::Config;

pub fn run(config: &Config, save: bool) -> Result<()> {
    print!("{}", toml::to_string_pretty(config)?);
    if save {
        config.save()?;
        eprintln!("Configuration saved");
    }
    Ok(())
}
