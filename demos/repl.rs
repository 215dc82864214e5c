use autocomplete::{Dictionary, closest_words};
use std::{
    env,
    io::{self, Write},
    path::Path,
};

const MAX_EDIT_DISTANCE: usize = 2;
const MAX_COMPLETIONS: usize = 10;
const MAX_SUGGESTIONS: usize = 5;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let dict_path = env::args().nth(1).unwrap_or_else(|| "words.txt".into());

    if !Path::new(&dict_path).exists() {
        eprintln!("Dictionary file not found: {}", dict_path);
        std::process::exit(1);
    }

    let dictionary = Dictionary::from_word_list_file(&dict_path)?;

    println!(
        "Autocomplete REPL - dictionary: {} ({} words)\n:type a prefix, :q to quit",
        dict_path,
        dictionary.len()
    );
    let mut input = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;
        input.clear();
        if io::stdin().read_line(&mut input)? == 0 {
            break; // EOF
        }
        let prefix = input.trim();
        if prefix == ":q" {
            break;
        }
        if prefix.is_empty() {
            continue;
        }

        let completions = dictionary.autocomplete(prefix);
        if !completions.is_empty() {
            let shown: Vec<_> = completions.iter().take(MAX_COMPLETIONS).cloned().collect();
            println!("  {}  ->  {}", prefix, shown.join(", "));
        } else if !dictionary.contains(prefix) {
            let suggestions: Vec<_> = closest_words(&dictionary, prefix, MAX_EDIT_DISTANCE, MAX_SUGGESTIONS)
                .into_iter()
                .map(|s| s.word)
                .collect();
            if !suggestions.is_empty() {
                println!("  did you mean: {}", suggestions.join(", "));
            }
        }
    }
    Ok(())
}
