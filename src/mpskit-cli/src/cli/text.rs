//! Text command CLI definitions

use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum TextCommand {
    /// Decode a byte region of a file to text
    Decode {
        /// File containing the raw text
        input: PathBuf,

        /// Byte offset of the text in the file
        #[arg(long, default_value_t = 0)]
        offset: u64,

        /// Number of bytes to decode (defaults to the rest of the file)
        #[arg(short, long)]
        length: Option<usize>,

        /// Stop at the first zero byte
        #[arg(short = 'z', long)]
        null_term: bool,
    },

    /// Encode text to raw game bytes
    Encode {
        /// Text to encode; anything inside [...] is written as-is
        text: String,

        /// Append a zero byte terminator
        #[arg(short = 'z', long)]
        null_term: bool,

        /// Fail if the encoded text is longer than this many bytes
        #[arg(short, long)]
        max_len: Option<usize>,

        /// Pad with zero bytes up to --max-len
        #[arg(short, long, requires = "max_len")]
        fill: bool,

        /// Write the bytes to this file instead of printing them as hex
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
