use clap::{arg, crate_version, Command};
use nary_compress::{context, huffman};

const RCH: &str = "unreachable was reached";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let long_help = "Examples:
---------
Compress:      `nary-compress compress -m huffman -i plain.txt -o coded.bin`
Expand:        `nary-compress expand -m huffman -i coded.bin -o plain.txt`";

    let methods = ["huffman", "nybble", "lzw"];

    let mut main_cmd = Command::new("nary-compress")
        .about("Compress and expand with n-ary canonical Huffman and context-mixing codecs")
        .after_long_help(long_help)
        .version(crate_version!());
    main_cmd = main_cmd.subcommand(
        Command::new("compress")
            .arg(arg!(-m --method <METHOD> "compression algorithm").value_parser(methods).required(true))
            .arg(arg!(-n --arity [N] "huffman output alphabet size").default_value("2"))
            .arg(arg!(-r --radix [R] "huffman print radix, must be a power of n").default_value("64"))
            .arg(arg!(-i --input <PATH> "input path").required(true))
            .arg(arg!(-o --output <PATH> "output path").required(true))
            .about("compress a file"),
    );

    main_cmd = main_cmd.subcommand(
        Command::new("expand")
            .arg(arg!(-m --method <METHOD> "compression algorithm").value_parser(methods).required(true))
            .arg(arg!(-i --input <PATH> "input path").required(true))
            .arg(arg!(-o --output <PATH> "output path").required(true))
            .about("expand a file"),
    );

    let matches = main_cmd.get_matches();

    if let Some(cmd) = matches.subcommand_matches("compress") {
        let path_in = cmd.get_one::<String>("input").expect(RCH);
        let path_out = cmd.get_one::<String>("output").expect(RCH);
        let method = cmd.get_one::<String>("method").expect(RCH);
        let dat = std::fs::read(path_in)?;
        let compressed: Vec<u8> = match method.as_str() {
            "huffman" => {
                let n: u32 = cmd.get_one::<String>("arity").expect(RCH).parse()?;
                let r: u32 = cmd.get_one::<String>("radix").expect(RCH).parse()?;
                huffman::compress(&dat, &huffman::Options { s_max: 255, n, r })?
            }
            "nybble" => context::encode(&dat, &context::Options { method: context::Method::Nybble, contexts: 16 })?,
            "lzw" => context::encode(&dat, &context::Options { method: context::Method::Lzw, contexts: 16 })?,
            _ => {
                eprintln!("{} not supported", method);
                return Err(Box::new(std::fmt::Error));
            }
        };
        std::fs::write(path_out, compressed)?;
    }

    if let Some(cmd) = matches.subcommand_matches("expand") {
        let path_in = cmd.get_one::<String>("input").expect(RCH);
        let path_out = cmd.get_one::<String>("output").expect(RCH);
        let method = cmd.get_one::<String>("method").expect(RCH);
        let dat = std::fs::read(path_in)?;
        let expanded: Vec<u8> = match method.as_str() {
            "huffman" => huffman::expand(&dat)?,
            "nybble" | "lzw" => context::decode(&dat)?,
            _ => {
                eprintln!("{} not supported", method);
                return Err(Box::new(std::fmt::Error));
            }
        };
        std::fs::write(path_out, expanded)?;
    }

    Ok(())
}
