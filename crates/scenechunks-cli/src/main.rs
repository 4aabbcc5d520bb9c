//! Scene Chunks CLI - screenplay import and project tooling.

use clap::{Parser, Subcommand};
use scenechunks::ImportHints;
use scenechunks::project::ProjectFile;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Parser)]
#[command(name = "scenechunks")]
#[command(author, version, about = "Screenplay import and project tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Import free-form screenplay text into a project file
    Import {
        /// Input text file (use - for stdin)
        input: PathBuf,

        /// Project file to write (omit to print the parsed document as JSON)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Project name used when front matter carries no title
        #[arg(long, default_value = "Untitled Project")]
        name: String,

        /// Example line to classify as the title
        #[arg(long)]
        title: Option<String>,

        /// Example line to classify as the author
        #[arg(long)]
        author: Option<String>,

        /// Example line to classify as a scene heading
        #[arg(long)]
        scene_heading: Option<String>,

        /// Example line to classify as a transition
        #[arg(long)]
        transition: Option<String>,

        /// Example line to classify as a character cue
        #[arg(long)]
        character: Option<String>,

        /// Example line to classify as a parenthetical
        #[arg(long)]
        parenthetical: Option<String>,

        /// Example line to classify as dialogue
        #[arg(long)]
        dialogue: Option<String>,

        /// Leading columns of character cues in the source text
        #[arg(long)]
        character_indent: Option<usize>,
    },

    /// Assemble a project's active script back into plain text
    Export {
        /// Project file to read
        input: PathBuf,

        /// Output text file (use - for stdout, or omit to use stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List built-in structure templates
    Templates,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Import {
            input,
            output,
            name,
            title,
            author,
            scene_heading,
            transition,
            character,
            parenthetical,
            dialogue,
            character_indent,
        } => {
            let hints = ImportHints {
                title,
                author,
                scene_heading,
                transition,
                character,
                parenthetical,
                dialogue,
                character_indent,
            };
            import(input, output, name, &hints)?;
        }
        Commands::Export { input, output } => {
            export(input, output)?;
        }
        Commands::Templates => {
            list_templates();
        }
    }

    Ok(())
}

fn import(
    input: PathBuf,
    output: Option<PathBuf>,
    name: String,
    hints: &ImportHints,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = if input.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(&input)?
    };

    let result = scenechunks::import::parse_with_hints(&text, hints);

    // Report warnings to stderr
    for warning in &result.warnings {
        match warning.line {
            Some(line) => eprintln!("warning: {} (line {line})", warning.message),
            None => eprintln!("warning: {}", warning.message),
        }
    }

    match output {
        Some(path) => {
            let mut project = ProjectFile::new(name);
            project.apply_import(&result.document)?;
            project.save(&path, unix_timestamp())?;
            eprintln!(
                "imported {} scene(s) into {}",
                result.document.scenes.len(),
                path.display()
            );
        }
        None => {
            let json = serde_json::to_string_pretty(&result.document)?;
            println!("{json}");
        }
    }

    Ok(())
}

fn export(input: PathBuf, output: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let project = ProjectFile::load(&input)?;
    let text = scenechunks::project::assembled_active_script(&project)?;

    match output {
        Some(path) if path.as_os_str() != "-" => {
            fs::write(&path, text)?;
        }
        _ => {
            io::stdout().write_all(text.as_bytes())?;
        }
    }

    Ok(())
}

fn list_templates() {
    println!("Available structure templates:\n");
    println!("  {:14} {:5} {:5}  LABEL", "ID", "ACTS", "BEATS");
    println!("  {:14} {:5} {:5}  -----", "--", "----", "-----");

    for template in scenechunks::structure::all() {
        println!(
            "  {:14} {:5} {:5}  {}",
            template.id,
            template.acts.len(),
            template.beats.len(),
            template.label
        );
    }
}

fn unix_timestamp() -> String {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs().to_string())
        .unwrap_or_default()
}
