use crate::cli::OutputFormat;
use crate::error::{Result, ResultExt};
use crate::ui;
use version::Version;

pub fn execute(raw: String, format: OutputFormat, verbose: bool) -> Result<()> {
    if verbose {
        println!("Parsing server version '{raw}'");
    }

    let record = Version::parse(&raw).with_context(|| "Failed to parse server version")?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&record)?),
        OutputFormat::Text => {
            ui::section_header("Server Version");
            ui::field("Server type", &record.server_type);
            ui::field("Major", &record.major.to_string());
            ui::field("Minor", &record.minor.to_string());
            ui::field("Service pack code", &record.service_pack_code);
            ui::field("Level", &record.level);
        }
    }

    Ok(())
}
