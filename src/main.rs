use clap::Parser;
use mkrepo::AppError;

#[derive(Parser)]
#[command(name = "mkrepo")]
#[command(version)]
#[command(
    about = "Create an organization GitHub repository with standard configurations",
    long_about = None
)]
struct Cli {
    /// Name of the application (repository)
    name: String,
    /// Programming language template (e.g. python)
    language: String,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = mkrepo::provision(&cli.name, &cli.language).map(|outcome| {
        println!("✅ Repository '{}' created successfully", outcome.repository);
        println!("Repository URL: {}", outcome.url);
        println!("Default files added: {}", outcome.files_uploaded);
        for warning in &outcome.warnings {
            eprintln!("Warning: {}", warning);
        }
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
