use std::{fs::File, io::BufReader, time::Duration};

use clap::Parser;
use crossterm::style::Stylize;

use otter_entail::{
    builder::parse_sentence, config::Config, knowledge_base::KnowledgeBase,
    procedures::model_check, structures::sentence::Sentence, types::err::ErrorKind,
};

mod args;
use args::Args;

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let args = Args::parse();

    let mut config = Config::default();
    if !config.round_limit.set(args.round_limit) {
        let (min, max) = config.round_limit.min_max();
        println!("c {} requires a value between {min} and {max}", config.round_limit.name);
        std::process::exit(1);
    }
    if let Some(seconds) = args.time_limit {
        config.time_limit.set(Duration::from_secs(seconds));
    }

    let mut kb = KnowledgeBase::from_config(config);

    println!("c Reading sentences from {:?}", args.file);
    let file = match File::open(&args.file) {
        Ok(file) => file,
        Err(_) => {
            println!("c Failed to open {:?}", args.file);
            std::process::exit(1);
        }
    };

    match kb.read_sentences(BufReader::new(file)) {
        Ok(count) => println!("c Asserted {count} sentences"),
        Err(e) => {
            println!("c Parse error: {e}");
            std::process::exit(1);
        }
    }

    if args.cnf {
        let mut normal = kb.clone();
        normal.normalize();
        println!("c CNF: {normal}");
    }

    let mut failures = 0;

    for query in &args.queries {
        let goal = match parse_sentence(query) {
            Ok(goal) => goal,
            Err(e) => {
                println!("c Parse error in query {query:?}: {e}");
                std::process::exit(1);
            }
        };

        let answer = match kb.derive(&goal) {
            Ok(answer) => answer,
            Err(ErrorKind::Resolution(e)) => {
                println!("s {goal} {}", format!("UNKNOWN ({e})").yellow());
                continue;
            }
            Err(e) => {
                println!("c Query error: {e}");
                std::process::exit(2);
            }
        };

        match answer {
            true => println!("s {goal} {}", "ENTAILED".green()),
            false => println!("s {goal} {}", "NOT ENTAILED".red()),
        }

        if args.stats {
            let counters = &kb.counters;
            println!(
                "c rounds: {}, resolutions: {}, resolvents: {}, settled: {}, time: {:.2?}",
                counters.rounds,
                counters.resolutions,
                counters.resolvents,
                counters.settled,
                counters.time
            );
        }

        if args.model_check && !agrees_with_models(&kb, &goal, answer) {
            failures += 1;
        }
    }

    if failures > 0 {
        std::process::exit(3);
    }
}

/// Compares an answer from resolution with an enumeration of valuations, noting any disagreement.
fn agrees_with_models(kb: &KnowledgeBase, goal: &Sentence, answer: bool) -> bool {
    let expected = match model_check::entails(kb.sentences(), goal) {
        Ok(expected) => expected,
        Err(e) => {
            println!("c Model check skipped: {e}");
            return true;
        }
    };

    match expected == answer {
        true => {
            println!("c Model check agrees");
            true
        }
        false => {
            println!("c {} model check expected {expected}", "Disagreement:".red());
            false
        }
    }
}
