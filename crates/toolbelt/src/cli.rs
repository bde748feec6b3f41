//! Subcommand logic behind the `toolbelt` binary.
//!
//! Every subcommand resolves to a pure call into one of the tool modules;
//! this layer only reads inputs, parses JSON where needed, and formats the
//! outcome. Inputs accept three spellings: a literal value, `@path` to
//! read a file, or `-` to read stdin.

use std::fs;
use std::io::{self, Read};

use chrono::Utc;
use clap::{Parser, Subcommand};
use serde_json::Value;
use thiserror::Error;

use cdc_diff::{compare, extract_envelope, DiffError, EnvelopeError};

use crate::diff_render::render_table;
use crate::text_stats::analyze;
use crate::{basic_auth, codec, cron, epoch, json_env, json_fmt, jwt, md5, passwd};

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Io(#[from] io::Error),
    #[error("{context} is not valid JSON: {source}")]
    Parse {
        context: &'static str,
        source: serde_json::Error,
    },
    #[error(transparent)]
    Diff(#[from] DiffError),
    #[error(transparent)]
    Envelope(#[from] EnvelopeError),
    #[error(transparent)]
    Jwt(#[from] jwt::JwtError),
    #[error(transparent)]
    Epoch(#[from] epoch::EpochError),
    #[error(transparent)]
    Codec(#[from] codec::CodecError),
    #[error(transparent)]
    Passwd(#[from] passwd::PasswdError),
    #[error(transparent)]
    Cron(#[from] cron::CronError),
    #[error(transparent)]
    JsonEnv(#[from] json_env::JsonEnvError),
    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(
    name = "toolbelt",
    version,
    about = "Small developer utilities: CDC diff, JWT decoding, epoch conversion, and friends"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compare two JSON objects field by field.
    Diff {
        /// Before state: inline JSON, @path, or - for stdin.
        before: String,
        /// After state: inline JSON, @path, or - for stdin.
        after: String,
        /// Hide unchanged fields.
        #[arg(long)]
        changes_only: bool,
        /// Emit the raw entries as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
    /// Pull the before/after pair out of a CDC event payload.
    Extract {
        /// Full event payload: inline JSON, @path, or - for stdin.
        payload: String,
        /// Compare the extracted pair instead of printing it.
        #[arg(long)]
        diff: bool,
    },
    /// Decode a JWT's header and payload (no signature check).
    Jwt { token: String },
    /// Convert a Unix timestamp or RFC 3339 date-time; with no value,
    /// print the current time.
    Epoch { value: Option<String> },
    /// Base64 encode or decode text.
    B64 {
        input: String,
        #[arg(long)]
        decode: bool,
    },
    /// Percent (URL) encode or decode text.
    Url {
        input: String,
        #[arg(long)]
        decode: bool,
    },
    /// Character, word, line, and paragraph counts.
    Count { input: String },
    /// Generate a random password.
    Passwd {
        #[arg(long, default_value_t = 16)]
        length: usize,
        #[arg(long)]
        no_upper: bool,
        #[arg(long)]
        no_lower: bool,
        #[arg(long)]
        no_digits: bool,
        #[arg(long)]
        no_symbols: bool,
    },
    /// MD5 digest of the input, as lowercase hex.
    Md5 { input: String },
    /// HTTP Basic Authentication header for a username and password.
    BasicAuth { username: String, password: String },
    /// Beautify or minify JSON.
    Fmt {
        input: String,
        /// Spaces per indent level.
        #[arg(long, default_value_t = 2)]
        indent: usize,
        #[arg(long)]
        minify: bool,
    },
    /// Convert a JSON object to .env lines.
    Env { input: String },
    /// Validate and describe a five-field cron expression.
    Cron {
        #[arg(required = true, num_args = 1..)]
        expression: Vec<String>,
    },
}

pub fn run(cli: Cli) -> Result<String, CliError> {
    match cli.command {
        Command::Diff {
            before,
            after,
            changes_only,
            json,
        } => {
            let before = parse_json(&read_input(&before)?, "before input")?;
            let after = parse_json(&read_input(&after)?, "after input")?;
            let entries = compare(&before, &after)?;
            if json {
                Ok(serde_json::to_string_pretty(&entries)?)
            } else {
                Ok(render_table(&entries, changes_only))
            }
        }
        Command::Extract { payload, diff } => {
            let raw = parse_json(&read_input(&payload)?, "payload")?;
            let envelope = extract_envelope(&raw)?;
            if diff {
                let entries = compare(&envelope.before, &envelope.after)?;
                Ok(render_table(&entries, false))
            } else {
                Ok(serde_json::to_string_pretty(&serde_json::json!({
                    "before": envelope.before,
                    "after": envelope.after,
                }))?)
            }
        }
        Command::Jwt { token } => {
            let decoded = jwt::decode(&read_input(&token)?)?;
            let mut out = format!(
                "header:\n{}\n\npayload:\n{}",
                serde_json::to_string_pretty(&decoded.header)?,
                serde_json::to_string_pretty(&decoded.payload)?,
            );
            if let Some(issued) = decoded.issued_at() {
                out.push_str(&format!("\n\nissued at:  {}", issued.to_rfc3339()));
            }
            if let Some(expires) = decoded.expires_at() {
                out.push_str(&format!("\nexpires at: {}", expires.to_rfc3339()));
                let verdict = match decoded.is_expired(Utc::now()) {
                    Some(true) => "expired",
                    _ => "valid",
                };
                out.push_str(&format!("\nstatus:     {verdict}"));
            }
            Ok(out)
        }
        Command::Epoch { value } => {
            let instant = match value {
                None => Utc::now(),
                Some(text) => {
                    let text = read_input(&text)?;
                    match epoch::parse_timestamp(&text) {
                        Ok(instant) => instant,
                        // Not a number at all: try the calendar spelling.
                        Err(epoch::EpochError::NotANumber(_)) => epoch::parse_datetime(&text)?,
                        Err(err) => return Err(err.into()),
                    }
                }
            };
            let conversion = epoch::convert(instant);
            Ok(format!(
                "unix seconds: {}\nunix millis:  {}\nutc:          {}\nrfc 2822:     {}\nlocal:        {}",
                conversion.unix_seconds,
                conversion.unix_millis,
                conversion.rfc3339,
                conversion.rfc2822,
                conversion.local,
            ))
        }
        Command::B64 { input, decode } => {
            let text = read_input(&input)?;
            if decode {
                Ok(codec::base64_decode(&text)?)
            } else {
                Ok(codec::base64_encode(&text))
            }
        }
        Command::Url { input, decode } => {
            let text = read_input(&input)?;
            if decode {
                Ok(codec::url_decode(&text)?)
            } else {
                Ok(codec::url_encode(&text))
            }
        }
        Command::Count { input } => {
            let stats = analyze(&read_input(&input)?);
            Ok(format!(
                "characters:  {}\nno spaces:   {}\nwords:       {}\nlines:       {}\nparagraphs:  {}\nbytes:       {}",
                stats.chars,
                stats.chars_no_whitespace,
                stats.words,
                stats.lines,
                stats.paragraphs,
                stats.bytes,
            ))
        }
        Command::Passwd {
            length,
            no_upper,
            no_lower,
            no_digits,
            no_symbols,
        } => {
            let options = passwd::PasswordOptions {
                length,
                uppercase: !no_upper,
                lowercase: !no_lower,
                digits: !no_digits,
                symbols: !no_symbols,
            };
            Ok(passwd::generate(&options)?)
        }
        Command::Md5 { input } => Ok(md5::md5_hex(&read_input(&input)?)),
        Command::BasicAuth { username, password } => {
            let auth = basic_auth::encode(&username, &password);
            Ok(format!("{}\nbase64: {}", auth.header, auth.token))
        }
        Command::Fmt {
            input,
            indent,
            minify,
        } => {
            let text = read_input(&input)?;
            let result = if minify {
                json_fmt::minify(&text)
            } else {
                json_fmt::beautify(&text, indent)
            };
            result.map_err(|source| CliError::Parse {
                context: "input",
                source,
            })
        }
        Command::Env { input } => {
            let value = parse_json(&read_input(&input)?, "input")?;
            Ok(json_env::to_env(&value)?)
        }
        Command::Cron { expression } => Ok(cron::describe_str(&expression.join(" "))?),
    }
}

fn read_input(arg: &str) -> Result<String, CliError> {
    if arg == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else if let Some(path) = arg.strip_prefix('@') {
        Ok(fs::read_to_string(path)?)
    } else {
        Ok(arg.to_string())
    }
}

fn parse_json(text: &str, context: &'static str) -> Result<Value, CliError> {
    serde_json::from_str(text.trim()).map_err(|source| CliError::Parse { context, source })
}
