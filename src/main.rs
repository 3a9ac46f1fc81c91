//! Interactive console assistant for narrowing word-guess candidates.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use wordle_assistant::{dictionary, opener, ConstraintState, LetterOccurrences, RoundInput};

#[derive(Parser)]
#[command(version, about = "Narrows word-guess candidates from accumulated letter feedback")]
struct Opts {
    /// Word list file, one word per line
    #[arg(long, default_value = "words_en.txt")]
    dictionary: PathBuf,

    /// Length of the words to play with
    #[arg(long, default_value_t = wordle_assistant::DEFAULT_WORD_LENGTH)]
    word_length: usize,
}

struct Spinner {
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Spinner {
    fn new(message: &'static str) -> Self {
        let running = Arc::new(AtomicBool::new(true));
        let running_clone = running.clone();
        let handle = thread::spawn(move || {
            let frames = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
            let mut i = 0;
            while running_clone.load(Ordering::Relaxed) {
                print!("\r{} {}", frames[i % frames.len()], message);
                let _ = io::stdout().flush();
                thread::sleep(Duration::from_millis(80));
                i += 1;
            }
            print!("\r{}\r", " ".repeat(message.len() + 3));
            let _ = io::stdout().flush();
        });
        Self {
            running,
            handle: Some(handle),
        }
    }

    fn stop(mut self) {
        self.running.store(false, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.running.store(false, Ordering::Relaxed);
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let opts = Opts::parse();

    let words = load_words(&opts)?;
    run_rounds(&words, opts.word_length)
}

/// Load the dictionary, either straight from the filtered cache or by
/// normalizing the raw word source. The slow path also prints the one-time
/// letter-frequency report and the opening recommendations, then writes the
/// cache so the next run takes the fast path.
fn load_words(opts: &Opts) -> Result<Vec<String>> {
    let cache = dictionary::cache_path(&opts.dictionary);
    if cache.exists() {
        let words = dictionary::read_word_list(&cache)
            .with_context(|| format!("cannot read cached word list {}", cache.display()))?;
        info!("loaded {} cached words from {}", words.len(), cache.display());
        return Ok(words);
    }

    println!("Analyzing words input file... (this process is made only once)");
    let lines = dictionary::read_word_list(&opts.dictionary)
        .with_context(|| format!("cannot read word list {}", opts.dictionary.display()))?;
    let words = dictionary::normalize(&lines, opts.word_length);
    info!(
        "normalized {} of {} raw lines to {}-letter words",
        words.len(),
        lines.len(),
        opts.word_length
    );

    if let Err(err) = dictionary::write_cache(&cache, &words) {
        warn!("failed to write cache file {}: {err}", cache.display());
    }

    let occurrences = LetterOccurrences::tally(&words);
    for (letter, percentage) in occurrences.by_descending_percentage() {
        println!("{letter}: {percentage:.2}%");
    }

    if let Some(best) = opener::best_starting_word(&words, &occurrences) {
        println!("Best starting word: {best}");
    }

    let spinner = Spinner::new("Searching for the best starting word pair (may take a while...)");
    let pair = opener::best_starting_pair(&words, &occurrences);
    spinner.stop();
    if let Some((first, second)) = pair {
        println!("Best starting word pair: {first}, {second}");
    }
    println!();

    Ok(words)
}

/// Prompt for one round of feedback after another until at most one
/// candidate is left. Malformed lines are re-requested without touching the
/// state; end of input ends the session.
fn run_rounds(words: &[String], word_length: usize) -> Result<()> {
    println!(
        "### Input format: \"chair _y__g\" (without quotes), \
         where '_' represents a gray letter, 'y' a yellow letter and 'g' a green letter."
    );

    let mut state = ConstraintState::new(word_length);
    let stdin = io::stdin();
    let mut round = 1;

    loop {
        let input = loop {
            print!("Enter {} word: ", ordinal(round));
            io::stdout().flush()?;

            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                return Ok(());
            }

            match RoundInput::parse(&line, word_length) {
                Ok(input) => break input,
                Err(err) => {
                    println!("Wrong format ({err}), look at the format instructions above and try again.");
                }
            }
        };

        state.apply(&input);
        let candidates = state.filter_candidates(words);
        for candidate in &candidates {
            println!("{candidate}");
        }
        println!(
            "{} possible solutions found (the secret word is usually the most common word).",
            candidates.len()
        );
        println!();

        if candidates.len() <= 1 {
            return Ok(());
        }
        round += 1;
    }
}

fn ordinal(n: usize) -> String {
    match n {
        1 => "1st".to_string(),
        2 => "2nd".to_string(),
        3 => "3rd".to_string(),
        _ => format!("{n}th"),
    }
}
