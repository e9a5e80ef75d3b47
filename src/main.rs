use std::env;
use std::fs;
use std::process;

use keyshift::{detect_key_in_text, transpose_text, Key};

fn usage() -> ! {
    eprintln!("Usage: keyshift detect [--json] <melody.txt>");
    eprintln!("       keyshift transpose <from-key> <to-key> <melody.txt>");
    eprintln!();
    eprintln!("Keys are written as '<tonic> <mode>', e.g. \"C major\",");
    eprintln!("\"A naturalMinor\", \"D harmonicMinor\". Mode defaults to major.");
    process::exit(1);
}

fn read_melody(path: &str) -> String {
    match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading file '{}': {}", path, e);
            process::exit(1);
        }
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        usage();
    }

    match args[1].as_str() {
        "detect" => {
            let mut json = false;
            let mut path: Option<&String> = None;
            for arg in &args[2..] {
                if arg == "--json" {
                    json = true;
                } else {
                    path = Some(arg);
                }
            }
            let path = match path {
                Some(p) => p,
                None => usage(),
            };

            let text = read_melody(path);
            let report = match detect_key_in_text(&text) {
                Some(report) => report,
                None => {
                    eprintln!("No notes found in '{}'", path);
                    process::exit(1);
                }
            };

            if json {
                match serde_json::to_string_pretty(&report) {
                    Ok(out) => println!("{}", out),
                    Err(e) => {
                        eprintln!("Error serializing report: {}", e);
                        process::exit(1);
                    }
                }
            } else {
                println!("{}", report.best.explanation);
                println!("Confidence: {:.0}%", report.best.confidence * 100.0);
                println!("Alternatives:");
                for alt in &report.alternatives {
                    println!("  {} ({:.0}%)", alt.key, alt.confidence * 100.0);
                }
            }
        }
        "transpose" => {
            if args.len() < 5 {
                usage();
            }
            let from = match Key::parse(&args[2]) {
                Ok(key) => key,
                Err(e) => {
                    eprintln!("Bad source key: {}", e);
                    process::exit(1);
                }
            };
            let to = match Key::parse(&args[3]) {
                Ok(key) => key,
                Err(e) => {
                    eprintln!("Bad target key: {}", e);
                    process::exit(1);
                }
            };

            let text = read_melody(&args[4]);
            match transpose_text(&text, from, to) {
                Ok(out) => println!("{}", out),
                Err(e) => {
                    eprintln!("Transposition error: {}", e);
                    process::exit(1);
                }
            }
        }
        _ => usage(),
    }
}
