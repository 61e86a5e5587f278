//! # Fixed Stock Grid Menu
//!
//! Interactive front-end for [`stockledger_core::StockGrid`]: 10 stores,
//! 5 items each, no resizing. Store and item numbers are entered 1-based.

use std::io::{self, BufRead, Write};

use stockledger_cli::input::{read_int, read_int_in_range};
use stockledger_cli::GridSession;

const NUM_STORES: i32 = 10;
const NUM_ITEMS: i32 = 5;

fn read_positive_quantity<R: BufRead, W: Write>(reader: &mut R, out: &mut W) -> io::Result<i32> {
    loop {
        let quantity = read_int(reader, out, "Enter quantity (positive integer): ")?;
        if quantity > 0 {
            return Ok(quantity);
        }
        writeln!(out, "Invalid quantity. Enter a positive integer.")?;
    }
}

fn run<R: BufRead, W: Write>(reader: &mut R, out: &mut W) -> io::Result<()> {
    writeln!(out, "Stationery stock management (10 stores x 5 items)")?;
    let mut session = GridSession::new();
    loop {
        writeln!(out, "\nMenu:")?;
        writeln!(out, "1. Show store stock")?;
        writeln!(out, "2. Add stock to an item in a store")?;
        writeln!(out, "3. Reduce stock from an item in a store")?;
        writeln!(out, "4. Exit")?;
        let choice = read_int_in_range(reader, out, "Choose an option (1-4): ", 1, 4)?;
        match choice {
            1 => {
                let store =
                    read_int_in_range(reader, out, "Enter store number (1-10): ", 1, NUM_STORES)?;
                writeln!(out, "{}", session.show_store(store))?;
            }
            2 => {
                let store =
                    read_int_in_range(reader, out, "Enter store number (1-10): ", 1, NUM_STORES)?;
                let item =
                    read_int_in_range(reader, out, "Enter item number (1-5): ", 1, NUM_ITEMS)?;
                let quantity = read_positive_quantity(reader, out)?;
                writeln!(out, "{}", session.add(store, item, quantity))?;
            }
            3 => {
                let store =
                    read_int_in_range(reader, out, "Enter store number (1-10): ", 1, NUM_STORES)?;
                let item =
                    read_int_in_range(reader, out, "Enter item number (1-5): ", 1, NUM_ITEMS)?;
                let quantity = read_positive_quantity(reader, out)?;
                writeln!(out, "{}", session.reduce(store, item, quantity))?;
            }
            _ => {
                writeln!(out, "Exiting...")?;
                break;
            }
        }
    }
    writeln!(out, "Goodbye.")
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(err) = run(&mut stdin.lock(), &mut stdout.lock()) {
        if err.kind() != io::ErrorKind::UnexpectedEof {
            eprintln!("I/O error: {err}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_script(script: &str) -> String {
        let mut input = script.as_bytes();
        let mut out = Vec::new();
        run(&mut input, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_add_then_show() {
        let output = run_script("2\n3\n2\n12\n1\n3\n4\n");
        assert!(output.contains("Added 12 to store 3, item 2. New stock: 12"));
        assert!(output.contains("Item 2: 12"));
        assert!(output.contains("Goodbye."));
    }

    #[test]
    fn test_reduce_clamp_message() {
        let output = run_script("2\n1\n1\n5\n3\n1\n1\n9\n4\n");
        assert!(output.contains("Cannot reduce by 9 because current stock is 5."));
    }

    #[test]
    fn test_out_of_range_store_reprompts() {
        let output = run_script("1\n11\n2\n4\n");
        assert!(output.contains("between 1 and 10"));
        assert!(output.contains("Stock for store 2:"));
    }
}
