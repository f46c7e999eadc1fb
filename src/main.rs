mod adapters;
mod core;
mod global_constants;
mod presentation;
mod retrieval;
mod user_settings;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::adapters::{EmbeddedSearchBackend, HttpSearchBackend};
use crate::core::interfaces::adapters::SearchBackend;
use crate::core::models::SearchPhase;
use crate::core::orchestrators::SearchOrchestrator;
use crate::retrieval::corpus;
use crate::retrieval::inverted_index::InvertedIndex;
use crate::retrieval::server::{self, ServerState};
use crate::user_settings::UserSettings;

enum CliCommand {
    Repl { corpus: Option<PathBuf> },
    OneShot { query: String, corpus: Option<PathBuf> },
    Serve { corpus: PathBuf, bind: Option<String>, index: Option<PathBuf> },
    Index { corpus: PathBuf, out: Option<PathBuf> },
}

#[derive(Debug, PartialEq)]
enum ReplCommand<'a> {
    Quit,
    Open(&'a str),
    More(&'a str),
    Redraw,
    Query(&'a str),
}

/// A blank line redraws the current result list without issuing a query.
fn parse_repl_line(line: &str) -> ReplCommand<'_> {
    let input = line.trim();
    if input.is_empty() {
        ReplCommand::Redraw
    } else if matches!(input, "quit" | "exit") {
        ReplCommand::Quit
    } else if let Some(rest) = input.strip_prefix("open ") {
        ReplCommand::Open(rest)
    } else if let Some(rest) = input.strip_prefix("more ") {
        ReplCommand::More(rest)
    } else {
        ReplCommand::Query(input)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    log::info!("[MAIN] Starting {}", global_constants::APPLICATION_NAME);

    let settings = UserSettings::load().unwrap_or_else(|error| {
        log::warn!("[MAIN] Could not load settings, using defaults: {:#}", error);
        UserSettings::default()
    });

    match parse_args(std::env::args().skip(1).collect())? {
        CliCommand::Serve { corpus, bind, index } => {
            run_serve(&settings, corpus, bind, index).await
        }
        CliCommand::Index { corpus, out } => run_index(corpus, out).await,
        CliCommand::OneShot { query, corpus } => {
            let backend = build_backend(&settings, corpus).await?;
            run_one_shot(backend, &query).await
        }
        CliCommand::Repl { corpus } => {
            let backend = build_backend(&settings, corpus).await?;
            run_repl(backend).await
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliCommand> {
    let mut corpus: Option<PathBuf> = None;
    let mut bind: Option<String> = None;
    let mut out: Option<PathBuf> = None;
    let mut index: Option<PathBuf> = None;
    let mut subcommand: Option<String> = None;
    let mut query_words: Vec<String> = Vec::new();

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--corpus" => {
                let value = iter.next().context("--corpus requires a file path")?;
                corpus = Some(PathBuf::from(value));
            }
            "--bind" => {
                bind = Some(iter.next().context("--bind requires an address")?);
            }
            "--out" => {
                let value = iter.next().context("--out requires a file path")?;
                out = Some(PathBuf::from(value));
            }
            "--index" => {
                let value = iter.next().context("--index requires a file path")?;
                index = Some(PathBuf::from(value));
            }
            "serve" | "index" if subcommand.is_none() && query_words.is_empty() => {
                subcommand = Some(arg);
            }
            _ => query_words.push(arg),
        }
    }

    match subcommand.as_deref() {
        Some("serve") => Ok(CliCommand::Serve {
            corpus: corpus.context("serve requires --corpus <file>")?,
            bind,
            index,
        }),
        Some("index") => Ok(CliCommand::Index {
            corpus: corpus.context("index requires --corpus <file>")?,
            out,
        }),
        _ if query_words.is_empty() => Ok(CliCommand::Repl { corpus }),
        _ => Ok(CliCommand::OneShot {
            query: query_words.join(" "),
            corpus,
        }),
    }
}

/// Remote HTTP backend by default; `--corpus` swaps in the in-process
/// engine built over the given article dump.
async fn build_backend(
    settings: &UserSettings,
    corpus_path: Option<PathBuf>,
) -> Result<Arc<dyn SearchBackend>> {
    match corpus_path {
        Some(path) => {
            let backend = build_embedded_backend(&path, settings.top_k).await?;
            Ok(backend as Arc<dyn SearchBackend>)
        }
        None => {
            let origin = settings.resolved_backend_origin();
            log::info!("[MAIN] Using HTTP backend at {}", origin);
            Ok(Arc::new(HttpSearchBackend::new(origin)))
        }
    }
}

async fn build_embedded_backend(
    corpus_path: &PathBuf,
    top_k: usize,
) -> Result<Arc<EmbeddedSearchBackend>> {
    let documents = corpus::load_corpus(corpus_path).await?;
    let index = Arc::new(InvertedIndex::build(&documents));
    Ok(Arc::new(EmbeddedSearchBackend::new(
        index,
        Arc::new(corpus::by_url(documents)),
        top_k,
    )))
}

/// `--index` serves a dump written by `felagi index --out` instead of
/// re-tokenizing the corpus; the corpus is still read for document fields.
async fn run_serve(
    settings: &UserSettings,
    corpus_path: PathBuf,
    bind: Option<String>,
    index_path: Option<PathBuf>,
) -> Result<()> {
    let documents = corpus::load_corpus(&corpus_path).await?;
    let index = match index_path {
        Some(path) => {
            let json = tokio::fs::read_to_string(&path)
                .await
                .with_context(|| format!("could not read index file {:?}", path))?;
            log::info!("[MAIN] Loaded prebuilt index from {:?}", path);
            Arc::new(InvertedIndex::from_json(&json)?)
        }
        None => Arc::new(InvertedIndex::build(&documents)),
    };
    let stats = Arc::new(index.stats.clone());
    let backend = Arc::new(EmbeddedSearchBackend::new(
        Arc::clone(&index),
        Arc::new(corpus::by_url(documents)),
        settings.top_k,
    ));

    println!("{}", presentation::render_stats(&stats));

    let bind = bind.unwrap_or_else(|| settings.serve_bind.clone());
    server::serve(ServerState::new(backend, stats), &bind).await
}

async fn run_index(corpus_path: PathBuf, out: Option<PathBuf>) -> Result<()> {
    let documents = corpus::load_corpus(&corpus_path).await?;
    let index = InvertedIndex::build(&documents);

    println!("{}", presentation::render_stats(&index.stats));

    if let Some(out_path) = out {
        tokio::fs::write(&out_path, index.to_json()?).await?;
        log::info!("[INDEX] Wrote index to {:?}", out_path);
        println!("Index written to {}", out_path.display());
    }

    Ok(())
}

async fn run_one_shot(backend: Arc<dyn SearchBackend>, query: &str) -> Result<()> {
    let orchestrator = SearchOrchestrator::new(backend);
    let phase = orchestrator.submit(query).await;
    print_phase(&orchestrator, &phase);
    Ok(())
}

async fn run_repl(backend: Arc<dyn SearchBackend>) -> Result<()> {
    println!("{}", global_constants::STARTUP_BANNER);

    let orchestrator = SearchOrchestrator::new(backend);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    stdout.write_all(global_constants::PROMPT.as_bytes()).await?;
    stdout.flush().await?;

    while let Some(line) = lines.next_line().await? {
        match parse_repl_line(&line) {
            ReplCommand::Quit => break,
            ReplCommand::Open(rest) => open_result(&orchestrator, rest),
            ReplCommand::More(rest) => toggle_result(&orchestrator, rest),
            ReplCommand::Redraw => {
                let phase = orchestrator.phase();
                print_phase(&orchestrator, &phase);
            }
            ReplCommand::Query(query) => {
                let phase = orchestrator.submit(query).await;
                print_phase(&orchestrator, &phase);
            }
        }

        stdout.write_all(global_constants::PROMPT.as_bytes()).await?;
        stdout.flush().await?;
    }

    log::info!("[MAIN] Exiting");
    Ok(())
}

fn print_phase(orchestrator: &SearchOrchestrator, phase: &SearchPhase) {
    println!("{}", presentation::render_header(phase));
    for (index, result) in orchestrator.results().iter().enumerate() {
        println!();
        println!(
            "{}",
            presentation::render_card(result, index, orchestrator.is_expanded(index))
        );
    }
}

fn toggle_result(orchestrator: &SearchOrchestrator, argument: &str) {
    match parse_result_number(orchestrator, argument) {
        Some(index) => {
            orchestrator.toggle_expanded(index);
            let phase = orchestrator.phase();
            print_phase(orchestrator, &phase);
        }
        None => println!("No such result: {}", argument),
    }
}

fn open_result(orchestrator: &SearchOrchestrator, argument: &str) {
    let Some(index) = parse_result_number(orchestrator, argument) else {
        println!("No such result: {}", argument);
        return;
    };

    let url = orchestrator.results()[index].url.clone();
    if url.is_empty() {
        println!("Result {} has no URL", index + 1);
        return;
    }

    if let Err(error) = open::that(&url) {
        log::error!("[MAIN] Failed to open {}: {:#}", url, error);
        println!("Could not open {}", url);
    }
}

/// Results are numbered from 1 in the rendered cards.
fn parse_result_number(orchestrator: &SearchOrchestrator, argument: &str) -> Option<usize> {
    let number: usize = argument.trim().parse().ok()?;
    let index = number.checked_sub(1)?;
    (index < orchestrator.results().len()).then_some(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_args_starts_repl_against_http_backend() {
        let command = parse_args(Vec::new()).unwrap();
        assert!(matches!(command, CliCommand::Repl { corpus: None }));
    }

    #[test]
    fn test_query_words_join_into_one_query() {
        let command = parse_args(args(&["አዲስ", "አበባ"])).unwrap();
        match command {
            CliCommand::OneShot { query, corpus } => {
                assert_eq!(query, "አዲስ አበባ");
                assert!(corpus.is_none());
            }
            _ => panic!("expected one-shot command"),
        }
    }

    #[test]
    fn test_serve_requires_corpus() {
        assert!(parse_args(args(&["serve"])).is_err());

        let command = parse_args(args(&["serve", "--corpus", "a.json", "--bind", "0.0.0.0:8000"]))
            .unwrap();
        match command {
            CliCommand::Serve { corpus, bind, index } => {
                assert_eq!(corpus, PathBuf::from("a.json"));
                assert_eq!(bind.as_deref(), Some("0.0.0.0:8000"));
                assert!(index.is_none());
            }
            _ => panic!("expected serve command"),
        }
    }

    #[test]
    fn test_serve_accepts_prebuilt_index_file() {
        let command =
            parse_args(args(&["serve", "--corpus", "a.json", "--index", "idx.json"])).unwrap();
        match command {
            CliCommand::Serve { index, .. } => {
                assert_eq!(index, Some(PathBuf::from("idx.json")));
            }
            _ => panic!("expected serve command"),
        }
    }

    #[test]
    fn test_blank_repl_line_redraws_instead_of_submitting() {
        assert_eq!(parse_repl_line(""), ReplCommand::Redraw);
        assert_eq!(parse_repl_line("   "), ReplCommand::Redraw);
        assert_eq!(parse_repl_line("\t"), ReplCommand::Redraw);
    }

    #[test]
    fn test_repl_line_dispatch() {
        assert_eq!(parse_repl_line("quit"), ReplCommand::Quit);
        assert_eq!(parse_repl_line(" exit "), ReplCommand::Quit);
        assert_eq!(parse_repl_line("open 2"), ReplCommand::Open("2"));
        assert_eq!(parse_repl_line("more 1"), ReplCommand::More("1"));
        assert_eq!(parse_repl_line("ምርጫ ዜና"), ReplCommand::Query("ምርጫ ዜና"));
    }

    #[test]
    fn test_index_accepts_out_path() {
        let command =
            parse_args(args(&["index", "--corpus", "a.json", "--out", "idx.json"])).unwrap();
        match command {
            CliCommand::Index { corpus, out } => {
                assert_eq!(corpus, PathBuf::from("a.json"));
                assert_eq!(out, Some(PathBuf::from("idx.json")));
            }
            _ => panic!("expected index command"),
        }
    }

    #[test]
    fn test_corpus_flag_selects_embedded_backend_for_queries() {
        let command = parse_args(args(&["--corpus", "a.json", "ዜና"])).unwrap();
        match command {
            CliCommand::OneShot { query, corpus } => {
                assert_eq!(query, "ዜና");
                assert_eq!(corpus, Some(PathBuf::from("a.json")));
            }
            _ => panic!("expected one-shot command"),
        }
    }

    #[test]
    fn test_literal_serve_after_query_words_is_part_of_the_query() {
        let command = parse_args(args(&["news", "serve"])).unwrap();
        match command {
            CliCommand::OneShot { query, .. } => assert_eq!(query, "news serve"),
            _ => panic!("expected one-shot command"),
        }
    }
}
