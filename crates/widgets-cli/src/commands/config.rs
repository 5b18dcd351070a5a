use anyhow::Result;
use colored::Colorize;

use widgets_infrastructure::ConfigService;

pub fn path(service: &ConfigService) -> Result<()> {
    println!("{}", service.path().display());
    Ok(())
}

pub fn show(service: &ConfigService) -> Result<()> {
    let config = service.load()?;
    print!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}

pub fn init(service: &ConfigService) -> Result<()> {
    if service.init()? {
        println!("{} {}", "Created".green(), service.path().display());
    } else {
        println!(
            "{} {}",
            "Already exists:".bright_black(),
            service.path().display()
        );
    }
    Ok(())
}
