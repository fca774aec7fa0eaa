use std::env;
use std::fs;
use std::io::{self, Read};
use std::process;

use entmark_core::{Entity, MarkupLanguage, render};
use serde::Deserialize;

// The upstream message payload, reduced to the fields rendering needs.
#[derive(Deserialize)]
struct Payload {
    text: String,
    #[serde(default)]
    entities: Vec<Entity>,
}

fn main() {
    let mut input: Option<String> = None;
    let mut language = MarkupLanguage::Html;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_usage();
                return;
            }
            "--language" => {
                language = match args.next().as_deref() {
                    Some("html") => MarkupLanguage::Html,
                    Some("markdown") => MarkupLanguage::Markdown,
                    _ => {
                        eprintln!("--language expects: html | markdown");
                        print_usage();
                        process::exit(2);
                    }
                };
            }
            _ => {
                if input.is_none() {
                    input = Some(arg);
                } else {
                    eprintln!("unexpected argument: {}", arg);
                    print_usage();
                    process::exit(2);
                }
            }
        }
    }

    let source = match input {
        Some(path) => fs::read_to_string(&path).unwrap_or_else(|err| {
            eprintln!("failed to read {}: {}", path, err);
            process::exit(1);
        }),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .unwrap_or_else(|err| {
                    eprintln!("failed to read stdin: {}", err);
                    process::exit(1);
                });
            buffer
        }
    };

    let payload: Payload = serde_json::from_str(&source).unwrap_or_else(|err| {
        eprintln!("invalid payload: {}", err);
        process::exit(1);
    });

    match render(&payload.text, &payload.entities, language) {
        Ok(markup) => print!("{}", markup),
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!("Usage: entmark-cli [--language html|markdown] [payload.json]");
    eprintln!("Reads {{\"text\": ..., \"entities\": [...]}} and prints the rendered markup.");
}
