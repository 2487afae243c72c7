//! schooldoc CLI - school document OCR text analysis tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use schooldoc::render::{self, JsonFormat, Report, ReportOptions};
use schooldoc::{
    process_stream, quick_summary, read_text, BatchOptions, ExtractOptions, OfflineSummarizer,
    Pipeline, PipelineResult,
};

#[derive(Parser)]
#[command(name = "schooldoc")]
#[command(version)]
#[command(about = "Classify school document OCR text and extract subjects and deadlines", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze OCR text files and produce summary reports
    Analyze {
        /// OCR text files (UTF-8)
        #[arg(value_name = "FILE", required = true)]
        inputs: Vec<PathBuf>,

        /// Output directory (stdout if not specified)
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Report format
        #[arg(short, long, value_enum, default_value = "markdown")]
        format: ReportFormat,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Maximum worker threads (0 = one per CPU)
        #[arg(long, default_value = "0")]
        threads: usize,

        /// Process documents one at a time
        #[arg(long)]
        sequential: bool,

        /// Discard marks below this value
        #[arg(long, default_value = "20.0")]
        min_marks: f64,

        /// Additional notice keyword (repeatable)
        #[arg(long = "keyword", value_name = "KEYWORD")]
        keywords: Vec<String>,

        /// Append the normalized text to each report
        #[arg(long)]
        include_text: bool,
    },

    /// Print the category of an OCR text file
    Classify {
        /// OCR text file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show extraction details for an OCR text file
    Info {
        /// OCR text file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum ReportFormat {
    /// Markdown report
    Markdown,
    /// Plain text report
    Text,
    /// JSON report
    Json,
}

impl ReportFormat {
    fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Markdown => "md",
            ReportFormat::Text => "txt",
            ReportFormat::Json => "json",
        }
    }
}

/// Settings for the analyze command.
struct AnalyzeSettings {
    format: ReportFormat,
    compact: bool,
    batch: BatchOptions,
    extract: ExtractOptions,
    report: ReportOptions,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Analyze {
            inputs,
            output,
            format,
            compact,
            threads,
            sequential,
            min_marks,
            keywords,
            include_text,
        }) => {
            let mut batch = BatchOptions::new().with_max_threads(threads);
            if sequential {
                batch = batch.sequential();
            }
            let extract = keywords
                .into_iter()
                .fold(ExtractOptions::new().with_min_marks(min_marks), |opts, k| {
                    opts.with_extra_keyword(k)
                });
            let settings = AnalyzeSettings {
                format,
                compact,
                batch,
                extract,
                report: ReportOptions::new().with_text(include_text),
            };
            cmd_analyze(&inputs, output.as_deref(), &settings)
        }
        Some(Commands::Classify { input }) => cmd_classify(&input),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            println!("{}", "Usage: schooldoc analyze <FILE>...".yellow());
            println!("       schooldoc --help for more information");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_analyze(
    inputs: &[PathBuf],
    output: Option<&Path>,
    settings: &AnalyzeSettings,
) -> Result<(), Box<dyn std::error::Error>> {
    let pipeline = Pipeline::with_options(settings.extract.clone())?;

    let documents = inputs
        .iter()
        .map(read_text)
        .collect::<schooldoc::Result<Vec<String>>>()?;

    let pb = ProgressBar::new(documents.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );
    pb.set_message("Analyzing...");

    let receiver = process_stream(documents, pipeline, &settings.batch)?;
    let mut results: Vec<Option<PipelineResult>> = vec![None; inputs.len()];
    for item in receiver {
        results[item.index] = Some(item.result);
        pb.inc(1);
    }
    pb.finish_and_clear();
    log::info!("Analyzed {} documents", inputs.len());

    if let Some(dir) = output {
        fs::create_dir_all(dir)?;
    }

    for (idx, result) in results.into_iter().enumerate() {
        let result = result.ok_or_else(|| format!("No result for {}", inputs[idx].display()))?;
        log::debug!("{}: {}", inputs[idx].display(), result.category);
        let report = Report::summarize(result, &OfflineSummarizer);
        let rendered = render_report(&report, settings)?;

        match output {
            Some(dir) => {
                let path = dir.join(report_file_name(idx + 1, settings.format));
                fs::write(&path, &rendered)?;
                println!("{} {}", "Saved to".green(), path.display());
            }
            None => {
                if idx > 0 {
                    println!();
                }
                println!("{}", rendered);
            }
        }
    }

    Ok(())
}

fn render_report(report: &Report, settings: &AnalyzeSettings) -> schooldoc::Result<String> {
    match settings.format {
        ReportFormat::Markdown => render::to_markdown(report, &settings.report),
        ReportFormat::Text => render::to_text(report, &settings.report),
        ReportFormat::Json => {
            let format = if settings.compact {
                JsonFormat::Compact
            } else {
                JsonFormat::Pretty
            };
            render::to_json(report, format)
        }
    }
}

fn report_file_name(number: usize, format: ReportFormat) -> String {
    format!("document_{}_summary.{}", number, format.extension())
}

fn cmd_classify(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let raw = read_text(input)?;
    let category = schooldoc::classify(&schooldoc::normalize(&raw));
    println!("{}", category);
    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let result = schooldoc::process(&read_text(input)?);
    let stats = result.stats();

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Category".bold(), result.category.label());
    println!("{}: {}", "Words".bold(), stats.word_count);
    println!("{}: {}", "Characters".bold(), stats.char_count);

    if result.is_academic() {
        println!();
        println!("{}", "Subjects".cyan().bold());
        println!("{}", "─".repeat(40).dimmed());
        if result.subject_records.is_empty() {
            println!("{}", "No structured academic data detected.".dimmed());
        }
        for record in &result.subject_records {
            println!(
                "{} {} ({} units): {}",
                record.code.bold(),
                record.name,
                record.units,
                schooldoc::model::format_marks(record.marks)
            );
        }
        if let Some(average) = stats.average_marks {
            println!("{}: {:.2}", "Average".bold(), average);
        }
    } else {
        println!();
        println!("{}", "Deadlines".cyan().bold());
        println!("{}", "─".repeat(40).dimmed());
        if result.deadlines.is_empty() {
            println!("{}", "No deadlines found.".dimmed());
        }
        for deadline in &result.deadlines {
            match deadline.to_date() {
                Some(date) => println!("• {} ({})", deadline.text, date.format("%Y-%m-%d")),
                None => println!("• {}", deadline.text),
            }
        }
    }

    println!();
    println!("{}", "Summary".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}", quick_summary(&result.normalized_text));

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "schooldoc".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("School document OCR text analysis tool");
    println!();
    println!("License: MIT");
}
