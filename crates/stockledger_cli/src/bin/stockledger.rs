//! # Dynamic Stock Ledger Menu
//!
//! Interactive front-end for [`stockledger_core::StockLedger`]. Menu
//! choices 0-11 map one-to-one onto the ledger operations; everything that
//! needs an existing ledger is guarded behind the create check.

use std::io::{self, BufRead, Write};
use std::path::Path;

use stockledger_cli::input::read_int;
use stockledger_cli::session::CREATE_FIRST;
use stockledger_cli::{CliConfig, Session};

fn print_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "---------------------------------------------------")?;
    writeln!(out, "1) Create new stock ledger")?;
    writeln!(out, "2) Add (append) a new product's stock")?;
    writeln!(out, "3) Insert product stock at specific position")?;
    writeln!(out, "4) Remove a product from inventory")?;
    writeln!(out, "5) Find product by stock quantity")?;
    writeln!(
        out,
        "6) Show current number of products and total capacity"
    )?;
    writeln!(out, "7) Reverse product list")?;
    writeln!(
        out,
        "8) Display inventory statistics (min / max / average stock)"
    )?;
    writeln!(out, "9) Adjust reserved capacity")?;
    writeln!(out, "10) Show all products' stock values")?;
    writeln!(out, "11) Sort inventory (ascending by stock)")?;
    writeln!(out, "0) Exit")?;
    writeln!(out, "---------------------------------------------------")
}

fn run<R: BufRead, W: Write>(reader: &mut R, out: &mut W, config: &CliConfig) -> io::Result<()> {
    writeln!(out, "=== Welcome to the Dynamic Stock Ledger System ===")?;
    writeln!(
        out,
        "Manage your store's product stock easily through the options below."
    )?;

    let mut session = Session::new(config);
    loop {
        print_menu(out)?;
        let choice = read_int(reader, out, "Enter your choice: ")?;
        match choice {
            1 => {
                let capacity = read_int(
                    reader,
                    out,
                    "Enter initial stock capacity (number of products to prepare space for): ",
                )?;
                writeln!(out, "{}", session.create(capacity))?;
            }
            2 => {
                if session.has_ledger() {
                    let value =
                        read_int(reader, out, "Enter stock quantity for the new product: ")?;
                    writeln!(out, "{}", session.append(value))?;
                } else {
                    writeln!(out, "{CREATE_FIRST}")?;
                }
            }
            3 => {
                if session.has_ledger() {
                    let index = read_int(
                        reader,
                        out,
                        "Enter position to insert the new product (0-based index): ",
                    )?;
                    let value = read_int(reader, out, "Enter stock quantity for the product: ")?;
                    writeln!(out, "{}", session.insert(index, value))?;
                } else {
                    writeln!(out, "{CREATE_FIRST}")?;
                }
            }
            4 => {
                if session.has_ledger() {
                    let index = read_int(reader, out, "Enter index of product to remove: ")?;
                    writeln!(out, "{}", session.remove(index))?;
                } else {
                    writeln!(out, "{CREATE_FIRST}")?;
                }
            }
            5 => {
                if session.has_ledger() {
                    let target = read_int(reader, out, "Enter stock quantity to search for: ")?;
                    writeln!(out, "{}", session.find(target))?;
                } else {
                    writeln!(out, "{CREATE_FIRST}")?;
                }
            }
            6 => writeln!(out, "{}", session.show_counts())?,
            7 => {
                if session.has_ledger() {
                    writeln!(out, "Reversing product order...")?;
                    writeln!(out, "{}", session.reverse())?;
                } else {
                    writeln!(out, "{CREATE_FIRST}")?;
                }
            }
            8 => writeln!(out, "{}", session.show_stats())?,
            9 => {
                if session.has_ledger() {
                    let capacity = read_int(reader, out, "Enter new capacity to reserve: ")?;
                    writeln!(out, "{}", session.reserve(capacity))?;
                } else {
                    writeln!(out, "{CREATE_FIRST}")?;
                }
            }
            10 => writeln!(out, "{}", session.list())?,
            11 => {
                if session.has_ledger() {
                    writeln!(out, "Sorting inventory from lowest to highest stock...")?;
                    writeln!(out, "{}", session.sort())?;
                } else {
                    writeln!(out, "{CREATE_FIRST}")?;
                }
            }
            0 => break,
            _ => writeln!(out, "Unknown choice.")?,
        }
    }
    writeln!(out, "Goodbye!")
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let config = CliConfig::load_or_default(Path::new("stockledger.toml"));
    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(err) = run(&mut stdin.lock(), &mut stdout.lock(), &config) {
        // Running out of piped input is a normal way to leave the menu.
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
        run(&mut input, &mut out, &CliConfig::default()).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_scripted_session() {
        let output = run_script("1\n3\n2\n50\n2\n10\n11\n10\n8\n0\n");
        assert!(output.contains("New inventory ledger created successfully!"));
        assert!(output.contains("[10, 50]"));
        assert!(output.contains("Average stock = 30.00"));
        assert!(output.contains("Goodbye!"));
    }

    #[test]
    fn test_guard_before_create() {
        let output = run_script("2\n0\n");
        assert!(output.contains(CREATE_FIRST));
    }

    #[test]
    fn test_unknown_choice() {
        let output = run_script("42\n0\n");
        assert!(output.contains("Unknown choice."));
    }
}
