//! A small command tree wired to the process arguments.
//!
//! ```text
//! arbor-demo                     # runs the default command (greet)
//! arbor-demo greet Ada           # hello, Ada
//! arbor-demo notes add buy milk  # adds a note
//! arbor-demo help notes          # documents `notes`
//! ```

use anyhow::Result;
use arbor::{help_command, nothing, run, Node};
use tracing_subscriber::EnvFilter;

fn build() -> Result<Node> {
    let greet = Node::builder("greet")
        .alias("hi|hello")
        .short("print a greeting")
        .long(
            "
            Prints a greeting for each name given, or for the world when
            there are none. Try {{ code(\"arbor-demo hi Ada\") }}.",
        )
        .run(|_inv, args| {
            if args.is_empty() {
                println!("hello, world");
            }
            for name in args {
                println!("hello, {}", name);
            }
            Ok(())
        })
        .build()?;

    let add = Node::builder("add")
        .alias("a")
        .short("add a note")
        .run(|_inv, args| {
            anyhow::ensure!(!args.is_empty(), "nothing to add");
            println!("added: {}", args.join(" "));
            Ok(())
        })
        .build()?;

    let list = Node::builder("list")
        .alias("ls")
        .short("list notes")
        .options("-a|--all")
        .run(|_inv, _args| {
            println!("(no notes yet)");
            Ok(())
        })
        .build()?;

    let notes = Node::builder("notes")
        .alias("n")
        .short("keep short notes")
        .child(add)
        .child(list)
        .child(help_command()?)
        .default_child("list")
        .build()?;

    let debug = Node::builder("debug")
        .short("internal diagnostics")
        .run(nothing)
        .build()?
        .as_hidden();

    let root = Node::builder("arbor-demo")
        .short("a worked example of a command tree")
        .long(
            "
            {{ aka(node) }} shows resolution, default commands and generated
            help. Every command accepts {{ code(\"help\") }} to describe
            itself:

            {{ commands(node) | indented(4) }}",
        )
        .child(greet)
        .child(notes)
        .child(debug)
        .child(help_command()?)
        .default_child("greet")
        .build()?;

    root.validate()?;
    Ok(root)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let code = match build() {
        Ok(root) => match run(&root, std::env::args().skip(1)) {
            Ok(()) => 0,
            Err(err) => {
                eprintln!("error: {}", err);
                1
            }
        },
        Err(err) => {
            eprintln!("error: {}", err);
            2
        }
    };
    std::process::exit(code);
}
