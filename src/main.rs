use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use curl_to_kodi::{
    ConvertOptions, config, convert,
    curl::{AllowList, HeaderPolicy},
    input, logging,
    output::write_artifacts,
    sanitize::{DEFAULT_BASE_NAME, base_name},
    script::ScriptDialect,
};

fn cli() -> Command {
    Command::new("curl-to-kodi")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert a curl command to a Kodi .strm file and an optional yt-dlp script. If no curl command is given, it is read from the clipboard, or from stdin when piped.")
        .arg(
            Arg::new("command")
                .help("The curl command to parse. If omitted, reads the clipboard (or piped stdin).")
                .required(false)
                .index(1),
        )
        .arg(
            Arg::new("title")
                .short('t')
                .long("title")
                .value_name("TITLE")
                .help("Stream title, used as the base output name (.strm and script extension are appended)"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("NAME")
                .help("Base output name for files (ignored if --title is given)"),
        )
        .arg(
            Arg::new("yt-dlp")
                .long("yt-dlp")
                .action(ArgAction::SetTrue)
                .help("Also emit a yt-dlp script and print the command"),
        )
        .arg(
            Arg::new("all-headers")
                .long("all-headers")
                .action(ArgAction::SetTrue)
                .help("Include every header from the curl command, ignoring the allow-list"),
        )
        .arg(
            Arg::new("allow-header")
                .long("allow-header")
                .value_name("NAME")
                .action(ArgAction::Append)
                .help("Header to keep; repeat to build a custom allow-list replacing the default one"),
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .action(ArgAction::SetTrue)
                .help("Print what would be written without creating files"),
        )
        .arg(
            Arg::new("script-format")
                .long("script-format")
                .value_name("FORMAT")
                .help("Format of the generated script when --yt-dlp is used [default: sh, or bat on Windows]")
                .value_parser(clap::value_parser!(ScriptDialect)),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Config file to use instead of $XDG_CONFIG_HOME/curl-to-kodi/config.toml")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Log parsing details to stderr"),
        )
}

fn main() {
    let matches = cli().get_matches();
    logging::init_logging(matches.get_flag("verbose"));

    if let Err(err) = run(&matches) {
        eprintln!("Error: {:#}", err);
        std::process::exit(2);
    }
}

fn run(matches: &ArgMatches) -> Result<()> {
    let file_config = config::load(matches.get_one::<PathBuf>("config").map(PathBuf::as_path))
        .context("failed to load config")?;

    let input = match matches.get_one::<String>("command") {
        Some(command) => command.clone(),
        None if io::stdin().is_terminal() => {
            let input = input::read_clipboard()?;
            println!("Read curl command from clipboard.");
            input
        }
        None => {
            let input = input::read_text(io::stdin().lock())
                .context("failed to read curl command from stdin")?;
            println!("Read curl command from stdin.");
            input
        }
    };

    let header_policy = if matches.get_flag("all-headers") {
        HeaderPolicy::All
    } else if let Some(names) = matches.get_many::<String>("allow-header") {
        HeaderPolicy::AllowList(AllowList::new(names))
    } else {
        file_config.header_policy()
    };

    let label = matches
        .get_one::<String>("title")
        .or_else(|| matches.get_one::<String>("output"))
        .map_or(DEFAULT_BASE_NAME, String::as_str);

    let options = ConvertOptions {
        header_policy,
        base_name: base_name(label),
        emit_downloader_script: matches.get_flag("yt-dlp"),
        script_dialect: matches
            .get_one::<ScriptDialect>("script-format")
            .copied()
            .or(file_config.script_format)
            .unwrap_or_else(ScriptDialect::host_default),
    };
    let conversion = convert(&input, &options)?;

    if conversion.headers.is_empty() && options.header_policy != HeaderPolicy::All {
        eprintln!(
            "Note: No whitelisted headers found. Use --all-headers to include all provided headers."
        );
    }

    println!("Generated .strm content:");
    println!("{}", conversion.strm);
    if let Some(script) = &conversion.script {
        println!("yt-dlp command:");
        println!("{}", script.command);
    }

    if matches.get_flag("dry-run") {
        println!("(dry-run) .strm file not written");
        if conversion.script.is_some() {
            println!("(dry-run) script not written");
        }
        return Ok(());
    }

    let dir = std::env::current_dir().context("failed to resolve the current directory")?;
    let paths = write_artifacts(&dir, &conversion).context("failed to write output files")?;
    println!(".strm file written: {}", paths.strm.display());
    if let Some(script_path) = paths.script {
        println!("yt-dlp script written: {}", script_path.display());
    }

    Ok(())
}
