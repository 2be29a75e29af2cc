//! # Commands Module
//!
//! Every action the POS screen can take, one per stdin line.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (parsing, dispatch, reply envelope)
//! ├── product.rs   ◄─── Catalog search and categories
//! ├── cart.rs      ◄─── Cart manipulation
//! ├── order.rs     ◄─── Complete Order
//! ├── customer.rs  ◄─── Customer directory
//! ├── insights.rs  ◄─── Business insights
//! ├── settings.rs  ◄─── AI model settings
//! └── config.rs    ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! stdin:  "inc 1 2"
//!            │
//!            ▼
//!   Command::from_str ──► Command::ChangeQuantity { product_id: 1, delta: 2 }
//!            │
//!            ▼
//!   dispatch(&state, cmd) ──► cart::change_quantity(&state, 1, 2)
//!            │
//!            ▼
//! stdout: {"status":"ok","data":{"lines":[...],"totals":{...}}}
//! ```

pub mod cart;
pub mod config;
pub mod customer;
pub mod insights;
pub mod order;
pub mod product;
pub mod settings;

use std::str::FromStr;

use serde::Serialize;
use serde_json::Value;
use tillbook_core::{Impact, ParameterValue, StatusFilter};

use crate::error::ApiError;
use crate::state::AppState;

/// One parsed line of input.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `products [term]`
    Products { term: String },
    /// `category <name>`
    Category { name: String },
    /// `categories`
    Categories,
    /// `add <id>`
    Add { product_id: u32 },
    /// `inc <id> [n]`, `dec <id> [n]` and `qty <id> <delta>`
    ChangeQuantity { product_id: u32, delta: i64 },
    /// `remove <id>`
    Remove { product_id: u32 },
    /// `cart`
    Cart,
    /// `clear`
    Clear,
    /// `complete`
    Complete,
    /// `customers [term] [--status all|active|inactive]`
    Customers { term: String, status: StatusFilter },
    /// `insights [positive|negative|neutral]`
    Insights { impact: Option<Impact> },
    /// `settings`
    Settings,
    /// `set <model> <param> <value>`
    SetParameter {
        model_id: String,
        param_id: String,
        value: ParameterValue,
    },
    /// `reset-settings`
    ResetSettings,
    /// `config`
    Config,
    /// `help`
    Help,
    /// `quit` / `exit`
    Quit,
}

/// Usage lines returned by `help`.
pub const USAGE: &[&str] = &[
    "products [term]            search products by name (alias: search)",
    "category <name>            list products in a category",
    "categories                 list categories",
    "add <id>                   add one unit of a product",
    "inc <id> [n]               increase quantity (default 1)",
    "dec <id> [n]               decrease quantity (default 1)",
    "qty <id> <delta>           change quantity by a signed amount",
    "remove <id>                remove a product from the order (alias: rm)",
    "cart                       show the current order",
    "clear                      empty the current order",
    "complete                   complete the current order",
    "customers [term] [--status all|active|inactive]",
    "insights [impact]          list insights (positive, negative or neutral)",
    "settings                   show AI model settings",
    "set <model> <param> <val>  change one AI model parameter",
    "reset-settings             restore default AI model settings",
    "config                     show configuration",
    "help                       show this list",
    "quit                       end the session (alias: exit)",
];

impl FromStr for Command {
    type Err = ApiError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        if line.is_empty() {
            return Err(ApiError::invalid_command("empty command"));
        }
        // Free-text arguments keep their inner spacing.
        let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let verb = verb.to_ascii_lowercase();
        let rest = rest.trim();
        let args: Vec<&str> = rest.split_whitespace().collect();

        let command = match verb.as_str() {
            "products" | "search" => Command::Products {
                term: rest.to_string(),
            },
            "category" => {
                if rest.is_empty() {
                    return Err(ApiError::invalid_command("usage: category <name>"));
                }
                Command::Category {
                    name: rest.to_string(),
                }
            }
            "categories" => no_args(&args, Command::Categories)?,
            "add" => Command::Add {
                product_id: single_id(&verb, &args)?,
            },
            "inc" | "dec" => {
                let (product_id, by) = match args.as_slice() {
                    [id] => (parse_id(id)?, 1),
                    [id, n] => (parse_id(id)?, parse_count(n)?),
                    _ => {
                        return Err(ApiError::invalid_command(format!(
                            "usage: {} <id> [n]",
                            verb
                        )))
                    }
                };
                let delta = if verb == "inc" { by } else { -by };
                Command::ChangeQuantity { product_id, delta }
            }
            "qty" => match args.as_slice() {
                [id, delta] => Command::ChangeQuantity {
                    product_id: parse_id(id)?,
                    delta: delta.parse().map_err(|_| {
                        ApiError::invalid_command(format!("invalid delta: {}", delta))
                    })?,
                },
                _ => return Err(ApiError::invalid_command("usage: qty <id> <delta>")),
            },
            "remove" | "rm" => Command::Remove {
                product_id: single_id(&verb, &args)?,
            },
            "cart" => no_args(&args, Command::Cart)?,
            "clear" => no_args(&args, Command::Clear)?,
            "complete" => no_args(&args, Command::Complete)?,
            "customers" => parse_customers(&args)?,
            "insights" => match args.as_slice() {
                [] => Command::Insights { impact: None },
                [impact] => Command::Insights {
                    impact: Some(impact.parse::<Impact>().map_err(ApiError::invalid_command)?),
                },
                _ => return Err(ApiError::invalid_command("usage: insights [impact]")),
            },
            "settings" => no_args(&args, Command::Settings)?,
            "set" => match args.as_slice() {
                [model_id, param_id, value] => Command::SetParameter {
                    model_id: model_id.to_string(),
                    param_id: param_id.to_string(),
                    value: value
                        .parse::<ParameterValue>()
                        .unwrap_or_else(|never| match never {}),
                },
                _ => return Err(ApiError::invalid_command("usage: set <model> <param> <value>")),
            },
            "reset-settings" => no_args(&args, Command::ResetSettings)?,
            "config" => no_args(&args, Command::Config)?,
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(ApiError::invalid_command(format!("unknown command: {}", other))),
        };

        Ok(command)
    }
}

fn no_args(args: &[&str], command: Command) -> Result<Command, ApiError> {
    if args.is_empty() {
        Ok(command)
    } else {
        Err(ApiError::invalid_command(format!(
            "unexpected arguments: {}",
            args.join(" ")
        )))
    }
}

fn single_id(verb: &str, args: &[&str]) -> Result<u32, ApiError> {
    match args {
        [id] => parse_id(id),
        _ => Err(ApiError::invalid_command(format!("usage: {} <id>", verb))),
    }
}

fn parse_id(raw: &str) -> Result<u32, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::invalid_command(format!("invalid product id: {}", raw)))
}

fn parse_count(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<u32>()
        .map(i64::from)
        .map_err(|_| ApiError::invalid_command(format!("invalid count: {}", raw)))
}

fn parse_customers(args: &[&str]) -> Result<Command, ApiError> {
    let mut term = Vec::new();
    let mut status = StatusFilter::All;
    let mut iter = args.iter();

    while let Some(&arg) = iter.next() {
        if arg == "--status" {
            let value = iter
                .next()
                .ok_or_else(|| ApiError::invalid_command("--status needs a value"))?;
            status = value.parse().map_err(ApiError::invalid_command)?;
        } else {
            term.push(arg);
        }
    }

    Ok(Command::Customers {
        term: term.join(" "),
        status,
    })
}

/// Reply envelope written to stdout.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Reply {
    Ok { data: Value },
    Error { error: ApiError },
}

impl From<Result<Value, ApiError>> for Reply {
    fn from(result: Result<Value, ApiError>) -> Self {
        match result {
            Ok(data) => Reply::Ok { data },
            Err(error) => Reply::Error { error },
        }
    }
}

/// Runs one command against the session state.
///
/// `Quit` is handled by the session loop and answers with `null` here.
pub fn dispatch(state: &AppState, command: Command) -> Result<Value, ApiError> {
    let value = match command {
        Command::Products { term } => to_value(product::search_products(state, &term)?)?,
        Command::Category { name } => to_value(product::products_in_category(state, &name))?,
        Command::Categories => to_value(product::list_categories(state))?,
        Command::Add { product_id } => to_value(cart::add_to_cart(state, product_id)?)?,
        Command::ChangeQuantity { product_id, delta } => {
            to_value(cart::change_quantity(state, product_id, delta)?)?
        }
        Command::Remove { product_id } => to_value(cart::remove_from_cart(state, product_id)?)?,
        Command::Cart => to_value(cart::get_cart(state)?)?,
        Command::Clear => to_value(cart::clear_cart(state)?)?,
        Command::Complete => to_value(order::complete_order(state)?)?,
        Command::Customers { term, status } => {
            to_value(customer::search_customers(state, &term, status)?)?
        }
        Command::Insights { impact } => to_value(insights::list_insights(state, impact)?)?,
        Command::Settings => to_value(settings::get_settings(state)?)?,
        Command::SetParameter {
            model_id,
            param_id,
            value,
        } => to_value(settings::set_parameter(state, &model_id, &param_id, value)?)?,
        Command::ResetSettings => to_value(settings::reset_settings(state)?)?,
        Command::Config => to_value(config::get_config(state))?,
        Command::Help => to_value(USAGE)?,
        Command::Quit => Value::Null,
    };

    Ok(value)
}

fn to_value<T: Serialize>(value: T) -> Result<Value, ApiError> {
    Ok(serde_json::to_value(value)?)
}
