use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use game_archive_lib::{ArchiveConfig, ConsoleDefinition};

/// Group consoles by company, keeping the order companies first appear in.
fn group_by_company(consoles: &[ConsoleDefinition]) -> Vec<(&str, Vec<&ConsoleDefinition>)> {
    let mut groups: Vec<(&str, Vec<&ConsoleDefinition>)> = Vec::new();
    for console in consoles {
        match groups.iter_mut().find(|(company, _)| *company == console.company) {
            Some((_, members)) => members.push(console),
            None => groups.push((console.company.as_str(), vec![console])),
        }
    }
    groups
}

pub(crate) fn run_list(config: &ArchiveConfig) {
    log::info!("Configured consoles:");
    log::info!("");

    for (i, (company, consoles)) in group_by_company(&config.consoles).iter().enumerate() {
        if i > 0 {
            log::info!("");
        }
        log::info!("{}:", company.if_supports_color(Stdout, |t| t.bold()));

        for console in consoles {
            log::info!(
                "  {} [{}]",
                console.short_name.if_supports_color(Stdout, |t| t.bold()),
                console.name.if_supports_color(Stdout, |t| t.cyan()),
            );
            log::info!("    Formats: {}", console.rom_formats.join(", "));
        }
    }
}
