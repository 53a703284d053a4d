//! Command-line interface for the glossary pipeline.

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{
    chapter_file_name, DEFAULT_CHAPTER_DESCRIPTION, DEFAULT_CHAPTER_NUMBER,
    DEFAULT_CHAPTER_TITLE, DEFAULT_DATA_DIR, DEFAULT_SOURCE_PATH,
};
use crate::error::Result;
use crate::json::{load_chapter, save_chapter};
use crate::pipeline::{convert_document, split_chapter, ChapterMetadata, SplitOutput};
use crate::splitting::{create_default_chapter_splits, ChapterSplitter};
use crate::visualization::default_visualizations;

/// Glossary Pipeline - Convert a glossary document to chapter JSON files.
#[derive(Parser)]
#[command(name = "glossary-pipeline")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse the glossary document into a single chapter JSON file.
    Convert(ConvertArgs),

    /// Split a chapter JSON file into the authored chapters.
    Split(SplitArgs),

    /// Convert, then split the converted chapter.
    Build(ConvertArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ConvertArgs {
    /// Glossary text document (default: chapters/planning_doc.md)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output directory (default: data/)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Chapter number of the converted document
    #[arg(long, default_value_t = DEFAULT_CHAPTER_NUMBER)]
    pub chapter: u32,

    /// Chapter title
    #[arg(long, default_value = DEFAULT_CHAPTER_TITLE)]
    pub title: String,

    /// Chapter description
    #[arg(long, default_value = DEFAULT_CHAPTER_DESCRIPTION)]
    pub description: String,
}

impl ConvertArgs {
    fn input(&self) -> PathBuf {
        self.input
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SOURCE_PATH))
    }

    fn output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
    }

    fn metadata(&self) -> ChapterMetadata {
        ChapterMetadata::new(self.chapter, &self.title, &self.description)
    }
}

#[derive(Args, Debug, Clone)]
pub struct SplitArgs {
    /// Chapter file to split (default: data/chapter1.json)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output directory (default: data/)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
}

impl SplitArgs {
    fn input(&self) -> PathBuf {
        self.input.clone().unwrap_or_else(|| {
            Path::new(DEFAULT_DATA_DIR).join(chapter_file_name(DEFAULT_CHAPTER_NUMBER))
        })
    }

    fn output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
    }
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert(args) => convert_command(&args).map(|_| ()),
        Commands::Split(args) => split_command(&args.input(), &args.output_dir()),
        Commands::Build(args) => {
            let converted = convert_command(&args)?;
            println!();
            split_command(&converted, &args.output_dir())
        }
    }
}

fn spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

/// Execute the convert command, returning the path of the written chapter.
fn convert_command(args: &ConvertArgs) -> Result<PathBuf> {
    let input = args.input();
    let output_dir = args.output_dir();

    println!(
        "{} {} to JSON...",
        style("Converting").bold(),
        style(input.display()).cyan()
    );

    let pb = spinner();
    pb.set_message("Parsing terms...");

    let chapter = match convert_document(&input, &args.metadata(), default_visualizations()) {
        Ok(chapter) => chapter,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.set_message("Saving JSON...");

    let output_path = match save_chapter(&chapter, &output_dir) {
        Ok(path) => path,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.finish_and_clear();

    let viz_titles: Vec<&str> = chapter
        .visualized_terms()
        .map(|t| t.title.as_str())
        .collect();

    println!(
        "{} Converted Chapter {}",
        style("[OK]").green().bold(),
        chapter.chapter
    );
    println!("   Sections: {}", chapter.sections.len());
    println!("   Total terms: {}", chapter.term_count());
    println!("   Terms with visualizations: {}", viz_titles.len());
    for title in &viz_titles {
        println!("      - {}", style(title).cyan());
    }
    println!(
        "{} {}",
        style("Saved to:").green().bold(),
        output_path.display()
    );

    Ok(output_path)
}

/// Execute the split command with the authored rules.
fn split_command(input: &Path, output_dir: &Path) -> Result<()> {
    let splitter = ChapterSplitter::new(create_default_chapter_splits());

    println!("{} {}...", style("Loading").bold(), style(input.display()).cyan());

    let source = load_chapter(input)?;
    println!(
        "Found {} sections with {} total terms",
        source.sections.len(),
        source.term_count()
    );

    let pb = spinner();
    pb.set_message("Splitting chapters...");

    let report = |output: &SplitOutput| {
        pb.suspend(|| {
            println!(
                "{} Chapter {}: {}",
                style("[OK]").green().bold(),
                output.chapter.chapter,
                output.chapter.title
            );
            println!(
                "     Sections: {}, Terms: {}",
                output.chapter.sections.len(),
                output.chapter.term_count()
            );
            println!("     Saved to: {}", output.path.display());
            println!();
        });
    };

    let outputs = match split_chapter(&source, output_dir, &splitter, report) {
        Ok(outputs) => outputs,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.finish_and_clear();

    println!(
        "{} All {} chapters created.",
        style("Split complete!").green().bold(),
        outputs.len()
    );

    Ok(())
}
