use arith_lexer::{reject_unknown, Error, LetterMode, TokenSpan, Tokenizer, TokenizerConfig};
use clap::{Parser, ValueEnum};
use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
    process::ExitCode,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Expression to tokenize; each stdin line is tokenized when omitted
    expr: Option<String>,

    /// Path to config file
    #[arg(short, long, default_value = "arith-lex.json")]
    config: PathBuf,

    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Print byte spans alongside tokens
    #[arg(short, long)]
    spans: bool,

    /// Split letter runs into one LETTER per character
    #[arg(long)]
    per_character: bool,

    /// Fail when any token is UNKNOWN
    #[arg(long)]
    strict: bool,

    /// Enable debug mode
    #[arg(short, long)]
    verbose: bool,
}

fn load_config(cli: &Cli) -> Result<TokenizerConfig, Error> {
    let mut config = if cli.config.exists() {
        TokenizerConfig::from_file(&cli.config)?
    } else {
        TokenizerConfig::default()
    };
    if cli.per_character {
        config.letter_mode = LetterMode::PerCharacter;
    }
    info!("config loaded.");
    debug!("config: {:?}", config);
    Ok(config)
}

fn render(out: &mut impl Write, tokens: &[TokenSpan], cli: &Cli) -> Result<(), Error> {
    match cli.format {
        Format::Json if cli.spans => writeln!(out, "{}", serde_json::to_string(tokens)?)?,
        Format::Json => {
            let plain: Vec<_> = tokens.iter().map(|t| &t.token).collect();
            writeln!(out, "{}", serde_json::to_string(&plain)?)?
        }
        Format::Text => {
            for spanned in tokens {
                if cli.spans {
                    writeln!(out, "{}\t{}", spanned.token, spanned.span)?;
                } else {
                    writeln!(out, "{}", spanned.token)?;
                }
            }
        }
    }
    Ok(())
}

fn process(
    out: &mut impl Write,
    tokenizer: &Tokenizer,
    input: &str,
    cli: &Cli,
) -> Result<(), Error> {
    let tokens = tokenizer.tokenize_spans(input);
    if cli.strict {
        reject_unknown(&tokens)?;
    }
    render(out, &tokens, cli)
}

fn run(cli: &Cli) -> Result<(), Error> {
    let tokenizer = Tokenizer::with_config(load_config(cli)?);
    let mut out = io::stdout().lock();

    match &cli.expr {
        Some(expr) => process(&mut out, &tokenizer, expr, cli),
        None => {
            for line in io::stdin().lock().lines() {
                process(&mut out, &tokenizer, &line?, cli)?;
            }
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use arith_lexer::Span;

    use super::*;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["arith-lex", "--config", "/nonexistent/arith-lex.json"];
        argv.extend_from_slice(args);
        Cli::parse_from(argv)
    }

    fn output(args: &[&str], input: &str) -> Result<String, Error> {
        let cli = cli(args);
        let tokenizer = Tokenizer::with_config(load_config(&cli)?);
        let mut out = Vec::new();
        process(&mut out, &tokenizer, input, &cli)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_text_format() {
        assert_eq!(
            output(&[], "4x").unwrap(),
            "NUMBER(\"4\")\nLETTER(\"x\")\n"
        );
    }

    #[test]
    fn test_text_format_with_spans() {
        assert_eq!(
            output(&["--spans"], "4x").unwrap(),
            "NUMBER(\"4\")\tstart: 0, end: 1\nLETTER(\"x\")\tstart: 1, end: 2\n"
        );
    }

    #[test]
    fn test_json_format() {
        assert_eq!(
            output(&["--format", "json"], "4x").unwrap(),
            "[{\"kind\":0,\"text\":\"4\"},{\"kind\":10,\"text\":\"x\"}]\n"
        );
    }

    #[test]
    fn test_json_format_with_spans() {
        let json = output(&["--format", "json", "--spans"], "4x").unwrap();
        let tokens: Vec<TokenSpan> = serde_json::from_str(json.trim_end()).unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1].span, Span::new(1, 2));
    }

    #[test]
    fn test_per_character_flag() {
        assert_eq!(
            output(&["--per-character"], "ab").unwrap(),
            "LETTER(\"a\")\nLETTER(\"b\")\n"
        );
    }

    #[test]
    fn test_strict_rejects_unknown() {
        let result = output(&["--strict"], "sin");
        match result {
            Err(Error::UnknownToken { text, span }) => {
                assert_eq!(text, "sin");
                assert_eq!(span, Span::new(0, 3));
            }
            other => panic!("expected unknown token error, got {:?}", other),
        }
        assert!(output(&[], "sin").is_ok());
    }

    #[test]
    fn test_strict_writes_nothing_on_failure() {
        let cli = cli(&["--strict"]);
        let mut out = Vec::new();
        let result = process(&mut out, &Tokenizer::new(), "4 + sin", &cli);
        assert!(result.is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn test_missing_config_falls_back_to_default() {
        let config = load_config(&cli(&[])).unwrap();
        assert_eq!(config, TokenizerConfig::default());
    }

    #[test]
    fn test_config_file_is_loaded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"keep_unknown": false}}"#).unwrap();
        let path = file.path().to_str().unwrap();

        let cli = Cli::parse_from(["arith-lex", "--config", path]);
        let config = load_config(&cli).unwrap();
        assert!(!config.keep_unknown);
    }
}
