use colored::Colorize;

pub fn handle_error(err: anyhow::Error) -> ! {
    eprintln!("{} {:#}", "Error:".red().bold(), err);

    let msg = err.to_string().to_lowercase();

    if msg.contains("config") {
        eprintln!("\n{}", "Suggestion:".yellow().bold());
        eprintln!("  Check the [default] and [tools] tables in your config file.");
        eprintln!("  {} pathgate presets", "$".dimmed());
    }

    std::process::exit(1);
}
