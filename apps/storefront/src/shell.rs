//! # Terminal Front-End
//!
//! Line-oriented loop over a [`Storefront`]. One command per line:
//!
//! ```text
//! products            catalog with pending quantities
//! inc <id> / dec <id> adjust the pending quantity
//! add <id>            commit the pending quantity to the cart
//! cart                open the cart modal
//! plus <id> / minus <id> / remove <id>
//! checkout            place the order
//! close               close the cart modal
//! help / quit
//! ```

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use hive_store::KeyValueStorage;
use tracing::debug;

use crate::commands::Storefront;

const HELP: &str = "\
Команды:
  products             список товаров
  inc <id> / dec <id>  изменить количество
  add <id>             добавить в корзину
  cart                 открыть корзину
  plus <id> / minus <id> / remove <id>
  checkout             оформить заказ
  close                закрыть корзину
  help / quit";

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Products,
    Increase(String),
    Decrease(String),
    Add(String),
    Cart,
    Plus(String),
    Minus(String),
    Remove(String),
    Checkout,
    Close,
    Help,
    Quit,
}

impl FromStr for Action {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let command = words.next().ok_or_else(|| "empty command".to_string())?;
        let arg = words.next().map(str::to_string);

        let with_id = |make: fn(String) -> Action| {
            arg.clone()
                .map(make)
                .ok_or_else(|| format!("{} needs a product id", command))
        };

        match command {
            "products" => Ok(Action::Products),
            "inc" => with_id(Action::Increase),
            "dec" => with_id(Action::Decrease),
            "add" => with_id(Action::Add),
            "cart" => Ok(Action::Cart),
            "plus" => with_id(Action::Plus),
            "minus" => with_id(Action::Minus),
            "remove" => with_id(Action::Remove),
            "checkout" => Ok(Action::Checkout),
            "close" => Ok(Action::Close),
            "help" => Ok(Action::Help),
            "quit" | "exit" => Ok(Action::Quit),
            other => Err(format!("unknown command: {}", other)),
        }
    }
}

/// Runs commands from `input` until `quit` or end of input.
pub fn run_session<S, R, W>(shop: &mut Storefront<S>, input: R, mut out: W) -> io::Result<()>
where
    S: KeyValueStorage,
    R: BufRead,
    W: Write,
{
    writeln!(out, "{}", shop.config().store_name)?;
    writeln!(out, "{}", HELP)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let action = match line.parse::<Action>() {
            Ok(action) => action,
            Err(message) => {
                writeln!(out, "{}", message)?;
                continue;
            }
        };
        debug!(?action, "shell action");

        if action == Action::Quit {
            break;
        }

        dispatch(shop, action, &mut out)?;

        for toast in shop.notifications_mut().drain() {
            writeln!(out, "* {}", toast.message)?;
        }
    }

    Ok(())
}

fn dispatch<S, W>(shop: &mut Storefront<S>, action: Action, out: &mut W) -> io::Result<()>
where
    S: KeyValueStorage,
    W: Write,
{
    match action {
        Action::Products => {
            for entry in shop.catalog_view() {
                writeln!(out, "{}", entry)?;
            }
        }
        Action::Increase(id) => match shop.increase_pending(&id) {
            Ok(qty) => writeln!(out, "{}: {}", id, qty)?,
            Err(err) => writeln!(out, "{}", err)?,
        },
        Action::Decrease(id) => match shop.decrease_pending(&id) {
            Ok(qty) => writeln!(out, "{}: {}", id, qty)?,
            Err(err) => writeln!(out, "{}", err)?,
        },
        Action::Add(id) => match shop.add_to_cart(&id) {
            Ok(view) => writeln!(out, "Корзина: {}", view.badge_count)?,
            Err(err) => writeln!(out, "{}", err)?,
        },
        Action::Cart => write!(out, "{}", shop.open_cart())?,
        Action::Plus(id) => write!(out, "{}", shop.change_cart_item(&id, 1))?,
        Action::Minus(id) => write!(out, "{}", shop.change_cart_item(&id, -1))?,
        Action::Remove(id) => write!(out, "{}", shop.remove_from_cart(&id))?,
        Action::Checkout => match shop.checkout() {
            Ok(receipt) => writeln!(
                out,
                "Заказ {} на {}",
                receipt.order_id,
                shop.config().format_price(receipt.total)
            )?,
            Err(err) => writeln!(out, "{}", err)?,
        },
        Action::Close => shop.close_cart(),
        Action::Help => writeln!(out, "{}", HELP)?,
        Action::Quit => {}
    }

    Ok(())
}
