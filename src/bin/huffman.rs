use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use huffcode::huffman::{huffman_decode, huffman_encode, to_bit_string};

#[derive(Parser, Debug)]
#[command(about = "Huffman-encode a line of text and decode it back", long_about = None)]
struct Args {
    /// The text to encode. Read from stdin when omitted.
    text: Option<String>,

    /// Do not print the code table.
    #[clap(short, long)]
    quiet: bool,
}

fn read_text() -> Result<String> {
    print!("Please enter the text to encode: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read text from stdin")?;
    Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
}

pub fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let text = match args.text {
        Some(text) => text,
        None => read_text()?,
    };

    let encoding = huffman_encode(&text).context("cannot encode text")?;

    if !args.quiet {
        println!("Huffman Codes:");
        for (symbol, code) in encoding.codes.iter() {
            println!("{:?}: {}", symbol, to_bit_string(code));
        }
    }
    println!("Encoded Text: {}", to_bit_string(&encoding.encoded));

    let decoded = huffman_decode(&encoding.encoded, &encoding.tree)?;
    println!("Decoded Text: {}", decoded);

    Ok(())
}
