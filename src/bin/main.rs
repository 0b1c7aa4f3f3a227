use std::io::BufRead;

use clap::Parser;

use storefront::{Catalog, Command, Purchase, Refund, Shop, TransactionLog, UrlOpener, Wallet};

/// A cli interface to the storefront
#[derive(Debug, Parser)]
#[clap(version)]
struct Args {
    /// The path to the inventory CSV file
    inventory: std::path::PathBuf,

    /// The starting wallet balance
    #[clap(long, default_value_t = 100)]
    balance: u32,

    /// The path of the transaction log file
    #[clap(long, default_value = "transactions.csv")]
    log: std::path::PathBuf,
}

/// Opens product pages in the default browser of the host
struct Browser;

impl UrlOpener for Browser {
    fn open(&self, url: &str) -> std::io::Result<()> {
        webbrowser::open(url)
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let catalog = match Catalog::load(&args.inventory) {
        Ok(catalog) => catalog,
        Err(err) => {
            eprintln!("Error: unable to read {}: {err}", args.inventory.display());
            Catalog::default()
        }
    };
    let log = TransactionLog::create(&args.log)?;
    let mut shop = Shop::new(catalog, Wallet::new(args.balance), log, Browser);

    println!("\n------ Welcome to Amayzeon! ------");

    let stdin = std::io::stdin();
    let mut line = String::new();
    loop {
        println!(
            "\nWhat would you like to do?\n\
             'buy' or 'return' or 'add' or 'view' or 'belongings' or 'inventory' or 'exit'\n",
        );

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match line.trim().parse() {
            Ok(Command::Exit) => {
                println!("Goodbye!");
                break;
            }
            Ok(command) => run_command(&mut shop, command),
            Err(err) => println!("{err}"),
        }
    }

    Ok(())
}

fn run_command(shop: &mut Shop<Browser>, command: Command) {
    match command {
        // `exit` never reaches this point, the input loop breaks on it
        Command::Exit => {}
        Command::Buy(item) => match shop.buy(&item) {
            Ok(purchase) => report_purchase(purchase),
            Err(err) => println!("{err}"),
        },
        Command::Return(item) => match shop.return_item(&item) {
            Ok(refund) => report_refund(refund),
            Err(err) => println!("{err}"),
        },
        Command::View(item) => {
            if let Err(err) = shop.view(&item) {
                println!("{err}");
            }
        }
        Command::Add(amount) => match shop.add_funds(amount) {
            Ok(_) => println!("${amount} has been added."),
            Err(err) => println!("{err}"),
        },
        Command::Belongings => report_belongings(shop),
        Command::Inventory => report_inventory(shop),
    }
}

fn report_purchase(purchase: Purchase) {
    println!("Item bought.");
    if let Some(err) = purchase.log_error {
        eprintln!("Error: unable to write to the transaction log: {err}");
    }
}

fn report_refund(refund: Refund) {
    println!("Item has been returned.");
    if let Some(err) = refund.refund_error {
        println!("{err}");
    }
    if let Some(err) = refund.log_error {
        eprintln!("Error: unable to update the transaction log: {err}");
    }
}

fn report_belongings(shop: &Shop<Browser>) {
    println!("You have ${} in your wallet.", shop.balance());
    if shop.basket().is_empty() {
        println!("No items have been purchased.");
    } else {
        println!("You have purchased these items:");
        for (item, count) in shop.basket().items() {
            println!("{item} - {count}");
        }
    }
}

fn report_inventory(shop: &Shop<Browser>) {
    println!("These are the items in the inventory:");
    for entry in shop.catalog().entries() {
        println!("{} - ${}", entry.name(), entry.price());
    }
}
