//! Dream tokenizer CLI

use dream_lexer::TaxonomyKind;
use dreamc::commands::{check_files, highlight_file, lex_file, list_taxonomies};
use dreamc::options::{parse_file_options, taxonomy_from_env, FileOptions};

fn main() {
    dreamc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" => {
            let options = file_options("lex <file.dr> [--taxonomy=<name>] [--stats]", &args[2..]);
            lex_file(&options);
        }
        "highlight" => {
            let options = file_options("highlight <file.dr> [--taxonomy=<name>]", &args[2..]);
            highlight_file(&options);
        }
        "check" => {
            let options = file_options("check <files...> [--taxonomy=<name>]", &args[2..]);
            check_files(&options);
        }
        "taxonomies" => {
            let only = match args.get(2) {
                Some(name) => match name.parse::<TaxonomyKind>() {
                    Ok(kind) => Some(kind),
                    Err(msg) => {
                        eprintln!("error: {msg}");
                        std::process::exit(1);
                    }
                },
                None => None,
            };
            list_taxonomies(only);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("Dream tokenizer {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            // A bare `.dr` path is shorthand for `lex`
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("dr"))
            {
                let options = file_options("lex <file.dr>", &args[1..]);
                lex_file(&options);
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    }
}

/// Parse file-command options or exit with a usage message.
fn file_options(usage: &str, args: &[String]) -> FileOptions {
    let env = taxonomy_from_env();
    match parse_file_options(args, env.as_deref()) {
        Ok(options) if !options.paths.is_empty() => options,
        Ok(_) => {
            eprintln!("error: missing file path");
            eprintln!("Usage: dream {usage}");
            std::process::exit(1);
        }
        Err(msg) => {
            eprintln!("error: {msg}");
            eprintln!("Usage: dream {usage}");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Dream tokenizer");
    println!();
    println!("Usage: dream <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file.dr>          Tokenize and display tokens with categories");
    println!("  highlight <file.dr>    Display merged highlight spans");
    println!("  check <files...>       Report malformed lexemes (exit 1 if any), warn on unknown characters");
    println!("  taxonomies [name]      List taxonomy versions and category tables");
    println!("  help                   Show this help message");
    println!("  version                Show version information");
    println!();
    println!("Options:");
    println!("  --taxonomy=<name>      basic, standard (default) or extended");
    println!("  --stats                lex: print token counts per category");
    println!("  -                      Read source from standard input");
    println!();
    println!("Environment:");
    println!("  DREAM_TAXONOMY         Taxonomy used when --taxonomy is absent");
    println!("  DREAM_LOG              Log filter, e.g. `dream_lexer=debug`");
    println!();
    println!("Examples:");
    println!("  dream lex main.dr");
    println!("  dream lex main.dr --taxonomy=extended --stats");
    println!("  dream highlight main.dr --taxonomy=basic");
    println!("  dream check src/*.dr");
    println!("  dream taxonomies extended");
}
