//! Interactive chat binary
//!
//! Run with: cargo run -p docchat -- report.pdf notes.txt

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use console::style;
use indicatif::ProgressBar;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use docchat::{Answer, ChatConfig, Session};

#[derive(Debug, Parser)]
#[command(name = "docchat", version, about = "Offline document Q&A with source citations")]
struct Args {
    /// Documents to load at startup (.pdf, .txt, .pptx)
    files: Vec<PathBuf>,

    /// Path to a TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of top-scoring passages carried to answer synthesis
    #[arg(long)]
    top_n: Option<usize>,

    /// Maximum number of answer points
    #[arg(long)]
    max_points: Option<usize>,

    /// Print answers as JSON instead of styled text
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "docchat=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => ChatConfig::from_file(path)?,
        None => ChatConfig::default(),
    };
    if let Some(n) = args.top_n {
        config.scoring.top_n = n;
    }
    if let Some(n) = args.max_points {
        config.synthesis.max_points = n;
    }

    let mut session = Session::new(&config);

    println!("{}", style("docchat: chat with your documents, offline").bold());
    println!("Type a question, or :help for commands.\n");

    if !args.files.is_empty() {
        load_files(&mut session, &args.files);
    }

    let stdin = io::stdin();
    loop {
        print!("{} ", style("?").cyan().bold());
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match input.split_once(' ').map_or((input, ""), |(c, rest)| (c, rest.trim())) {
            (":quit" | ":exit" | ":q", _) => break,
            (":help", _) => print_help(),
            (":load", "") => println!("usage: :load <path>"),
            (":load", path) => load_files(&mut session, &[PathBuf::from(path)]),
            (":docs", _) => print_documents(&session),
            (":save", "") => println!("usage: :save <path>"),
            (":save", path) => match session.save_transcript(std::path::Path::new(path)) {
                Ok(()) => println!("{}", style(format!("Transcript saved to {path}.")).dim()),
                Err(e) => println!("{} {}", style("could not save:").yellow(), e),
            },
            (":history", _) => print_history(&session, args.json)?,
            (":clear", _) => {
                session.clear();
                println!("{}", style("Session cleared.").dim());
            }
            (cmd, _) if cmd.starts_with(':') => println!("unknown command {cmd}; try :help"),
            _ => {
                let answer = session.ask(input);
                print_answer(&answer, args.json)?;
            }
        }
    }

    Ok(())
}

/// Load documents one by one; a failing file is reported and skipped, the
/// rest keep loading.
fn load_files(session: &mut Session, paths: &[PathBuf]) {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Processing files...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    for path in paths {
        match session.load_path(path) {
            Ok(doc) => spinner.println(format!(
                "  {} {} ({}, {} passages)",
                style("loaded").green(),
                doc.filename,
                doc.file_type.display_name(),
                doc.total_passages,
            )),
            Err(e) => spinner.println(format!("  {} {}: {}", style("skipped").yellow(), path.display(), e)),
        }
    }

    spinner.finish_and_clear();
    println!(
        "{} document(s) loaded, {} passage(s) indexed.\n",
        session.document_count(),
        session.passage_count(),
    );
}

fn print_answer(answer: &Answer, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(answer)?);
        return Ok(());
    }

    for (i, point) in answer.points.iter().enumerate() {
        println!("  {} {}", style(format!("{}.", i + 1)).cyan().bold(), point);
    }
    if !answer.citations.is_empty() {
        println!("{}", style("  Sources:").dim());
        for citation in &answer.citations {
            println!("    {}", style(citation.format_inline()).dim());
        }
    }
    println!();
    Ok(())
}

fn print_documents(session: &Session) {
    if session.document_count() == 0 {
        println!("no documents loaded\n");
        return;
    }
    for doc in session.documents() {
        let pages = doc
            .total_pages
            .map(|n| format!(", {} pages", n))
            .unwrap_or_default();
        println!(
            "  {} ({}{}, {} passages)",
            doc.filename,
            doc.file_type.display_name(),
            pages,
            doc.total_passages,
        );
    }
    println!();
}

fn print_history(session: &Session, json: bool) -> anyhow::Result<()> {
    if session.transcript().is_empty() {
        println!("no questions asked yet\n");
        return Ok(());
    }
    for entry in session.transcript() {
        println!("{} {}", style("You:").bold(), entry.question);
        print_answer(&entry.answer, json)?;
    }
    Ok(())
}

fn print_help() {
    println!("  :load <path>   load a document (.pdf, .txt, .pptx)");
    println!("  :docs          list loaded documents");
    println!("  :history       show the session transcript");
    println!("  :save <path>   write the transcript to a JSON file");
    println!("  :clear         clear documents and transcript");
    println!("  :quit          exit");
    println!("  anything else is treated as a question\n");
}
