use std::env;
use std::process::ExitCode;

use renfa::{compile, describe, Matcher};

fn main() -> ExitCode {
    env_logger::init();

    let mut args = env::args().skip(1);
    let pattern = match args.next() {
        Some(pattern) => pattern,
        None => {
            demo();
            return ExitCode::SUCCESS;
        }
    };

    let nfa = match compile(pattern.as_bytes()) {
        Ok(nfa) => nfa,
        Err(err) => {
            eprintln!("{pattern}: {err}");
            return ExitCode::FAILURE;
        }
    };

    let subjects: Vec<String> = args.collect();
    if subjects.is_empty() {
        // No subjects: dump the automaton for rendering with graphviz.
        print!("{}", describe(&nfa));
        return ExitCode::SUCCESS;
    }

    let matcher = Matcher::new(&nfa);
    for subject in &subjects {
        println!(
            "{subject}: full_match={} contains={}",
            matcher.full_match(subject.as_bytes()),
            matcher.contains(subject.as_bytes())
        );
    }
    ExitCode::SUCCESS
}

/// Built-in demonstration: one pattern, a table of subjects, and the graph.
fn demo() {
    let pattern = b"ab(a[bd]*|cd)?|xqwyz";
    let subjects: &[&[u8]] = &[
        b"abab", b"abad", b"ababad", b"abadcd", b"ababdabd", b"ab", b"abcccc", b"abc", b"cd",
        b"xqwyz",
    ];

    println!("pattern: {}", String::from_utf8_lossy(pattern));
    let nfa = match compile(pattern) {
        Ok(nfa) => nfa,
        Err(err) => {
            eprintln!("demo pattern failed to compile: {err}");
            return;
        }
    };

    let matcher = Matcher::new(&nfa);
    for subject in subjects {
        println!(
            "  {:10} full_match={}",
            String::from_utf8_lossy(subject),
            matcher.full_match(subject)
        );
    }

    println!();
    print!("{}", describe(&nfa));
}
