use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::Level;
use tracing_subscriber::fmt::time::LocalTime;
use tracing_appender::non_blocking;
use time::macros::format_description;

use sha1mac::legacy::{legacy_hmac_sha1, legacy_sha1, string_to_code_units};
use sha1mac::{bytes_to_hex, hex_to_bytes, hmac_sha1_bytes, read_message, sha1_hash, string_to_bytes, url_encode, Error, Result};

#[derive(Parser, Debug)]
#[command(name="sha1mac", version, about="Print the SHA-1 digest or HMAC-SHA1 of a message as hex")]
struct Args {
    #[arg(short, long, help="HMAC key as text; without a key the plain SHA-1 digest is printed")]
    key: Option<String>,

    #[arg(long, conflicts_with="key", help="HMAC key as hex bytes")]
    key_hex: Option<String>,

    #[arg(short, long, conflicts_with="message", help="Read the message from a file")]
    file: Option<PathBuf>,

    #[arg(long, help="Use the legacy per-code-unit text encoding")]
    legacy: bool,

    #[arg(short, long, help="Percent-encode the message text before hashing")]
    url_encode: bool,

    #[arg(short, long, help="Log debug output to stderr")]
    verbose: bool,

    message: Option<String>,
}

fn into_text(message: Vec<u8>, mode: &'static str) -> Result<String> {
    String::from_utf8(message).map_err(|_| Error::NotText(mode))
}

fn run(args: &Args) -> Result<String> {
    let mut message: Vec<u8> = match &args.file {
        Some(path) => read_message(path)?,
        None => args.message.clone().unwrap_or_default().into_bytes(),
    };

    if args.url_encode {
        let text = into_text(message, "--url-encode")?;
        message = url_encode(&text).into_bytes();
    }

    let digest = if args.legacy {
        let text = into_text(message, "--legacy")?;
        match (&args.key, &args.key_hex) {
            (_, Some(_)) => return Err(Error::NotText("--legacy")),
            (Some(key), None) => legacy_hmac_sha1(key, &text),
            (None, None) => legacy_sha1(&string_to_code_units(&text)),
        }
    } else {
        match (&args.key, &args.key_hex) {
            (Some(key), _) => hmac_sha1_bytes(&string_to_bytes(key), &message),
            (None, Some(hex)) => hmac_sha1_bytes(&hex_to_bytes(hex)?, &message),
            (None, None) => sha1_hash(&message),
        }
    };

    Ok(bytes_to_hex(&digest))
}

fn main() -> ExitCode {
    let args = Args::parse();

    let (non_blocking, _guard) = non_blocking(std::io::stderr());
    let timer = LocalTime::new(
        format_description!("[month]/[day]/[year] [hour repr:24]:[minute]:[second].[subsecond digits:4]"));
    let level = if args.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_timer(timer)
        .with_max_level(level)
        .init();

    match run(&args) {
        Ok(hex) => {
            println!("{hex}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("{e}");
            ExitCode::FAILURE
        }
    }
}
