use std::{env, fs, path::PathBuf};

fn input_arg() -> clap::Arg {
    clap::arg!(<INPUT> "URL to fetch, local HTML file, or '-' for stdin")
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let mut cmd = clap::Command::new("calmread")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Calm reading for noisy news pages")
        .subcommand_required(true)
        .arg(
            clap::arg!(-o --output <FILE> "Output file (default: stdout)")
                .global(true)
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            clap::arg!(-f --format <FORMAT> "Output format (text, json)")
                .global(true)
                .default_value("text")
                .value_parser(["text", "json"]),
        )
        .arg(clap::arg!(--timeout <SECS> "HTTP timeout in seconds").global(true).default_value("12"))
        .arg(
            clap::Arg::new("user-agent")
                .long("user-agent")
                .value_name("UA")
                .help("Custom User-Agent for HTTP requests")
                .global(true),
        )
        .arg(clap::arg!(-v --verbose "Enable debug logging").global(true))
        .subcommand(clap::Command::new("extract").about("Print the main readable text of a page").arg(input_arg()))
        .subcommand(clap::Command::new("quality").about("Print quality metrics of the extracted text").arg(input_arg()))
        .subcommand(
            clap::Command::new("summary")
                .about("Print a calm summary of the extracted text")
                .arg(input_arg())
                .arg(clap::arg!(--raw "Treat the input as plain text instead of HTML"))
                .arg(clap::arg!(--what <TEXT> "Short description of what happened"))
                .arg(clap::arg!(--why <TEXT> "Short description of why it matters")),
        )
        .subcommand(
            clap::Command::new("spans")
                .about("Highlight manipulative, promotional and emphatic spans")
                .arg(input_arg())
                .arg(clap::arg!(--raw "Treat the input as plain text instead of HTML")),
        )
        .subcommand(
            clap::Command::new("read")
                .about("Fetch a URL in reader mode, falling back to the given text")
                .arg(clap::arg!(<URL> "Page URL"))
                .arg(clap::arg!(--fallback <TEXT> "Text used when the page cannot be fetched or is too thin")),
        );

    clap_complete::generate_to(clap_complete::shells::Bash, &mut cmd, "calmread", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Zsh, &mut cmd, "calmread", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Fish, &mut cmd, "calmread", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::PowerShell, &mut cmd, "calmread", &completions_dir).unwrap();
}
