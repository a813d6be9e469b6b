//! recur CLI entry point
//!
//! Thin demo harness over `recur-core`: builds the sample list and
//! expression values and prints the result of every operation. The printed
//! text is for human eyes; pass `--json` for a machine-readable report.

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;

use recur_core::{Expr, List};

//-----------------------------------------------------------------------------
// Command Definition
//-----------------------------------------------------------------------------

/// Structural-recursion demonstrations
#[derive(Debug, Parser)]
#[command(name = "recur", about = "Structural-recursion demonstrations over recursive sum types")]
struct Cli {
    /// Emit results as JSON instead of human-readable text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List operations: sum, product, fold, map, take, append, sublists
    List,
    /// Expression operations: evaluate, pretty-print, transform
    Expr,
    /// Both demonstrations (the default)
    All,
}

//-----------------------------------------------------------------------------
// Reports
//-----------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct ListReport {
    input: String,
    sum: i32,
    sum_via_fold: i32,
    product: i32,
    product_via_fold: i32,
    string_concat: String,
    doubled: String,
    take_3_of_5: String,
    appended: String,
    sublists_of_1_2: Vec<String>,
}

#[derive(Debug, Serialize)]
struct ExprReport {
    pretty: String,
    value: i32,
    transformed_pretty: String,
    transformed_value: i32,
}

#[derive(Debug, Serialize)]
struct Report {
    #[serde(skip_serializing_if = "Option::is_none")]
    list: Option<ListReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    expr: Option<ExprReport>,
}

fn list_report() -> ListReport {
    let ints = List::from_slice(&[5, 3, 2]);
    log::debug!("list demo input: {}", ints);

    let strings = List::from_slice(&["a".to_string(), "b".to_string(), "c".to_string()]);
    let concat = strings.fold_right(|h, acc: String| format!("{}{}", h, acc), String::new());

    let five = List::from_slice(&[1, 2, 3, 4, 5]);
    let appended = List::from_slice(&[1, 2]).append(&List::from_slice(&[3, 4]));

    let sublists: Vec<String> = List::from_slice(&[1, 2])
        .sublists()
        .iter()
        .map(|sub| sub.to_string())
        .collect();

    ListReport {
        input: ints.to_string(),
        sum: ints.sum(),
        sum_via_fold: ints.fold_right(|h, acc: i32| h + acc, 0),
        product: ints.product(),
        product_via_fold: ints.fold_right(|h, acc: i32| h * acc, 1),
        string_concat: concat,
        doubled: ints.map(|x| x * 2).to_string(),
        take_3_of_5: five.take(3).to_string(),
        appended: appended.to_string(),
        sublists_of_1_2: sublists,
    }
}

fn expr_report() -> ExprReport {
    // 3*4 + (8 + 1*7)
    let expr = Expr::add(
        Expr::mul(Expr::val(3), Expr::val(4)),
        Expr::add(Expr::val(8), Expr::mul(Expr::val(1), Expr::val(7))),
    );
    log::debug!("expr demo input: {}", expr);

    let transformed = expr.transform(|v| v * 2);

    ExprReport {
        pretty: expr.to_string(),
        value: expr.evaluate(),
        transformed_pretty: transformed.to_string(),
        transformed_value: transformed.evaluate(),
    }
}

fn print_list_report(report: &ListReport) {
    println!("list demo");
    println!("  input            = {}", report.input);
    println!("  sum              = {}", report.sum);
    println!("  sum via fold     = {}", report.sum_via_fold);
    println!("  product          = {}", report.product);
    println!("  product via fold = {}", report.product_via_fold);
    println!("  concat [a,b,c]   = {}", report.string_concat);
    println!("  doubled          = {}", report.doubled);
    println!("  take 3 of 5      = {}", report.take_3_of_5);
    println!("  [1,2] ++ [3,4]   = {}", report.appended);
    println!("  sublists of [1,2]:");
    for sub in &report.sublists_of_1_2 {
        println!("    {}", sub);
    }
}

fn print_expr_report(report: &ExprReport) {
    println!("expression demo");
    println!("  pretty print       = {}", report.pretty);
    println!("  evaluate           = {}", report.value);
    println!("  doubled, printed   = {}", report.transformed_pretty);
    println!("  doubled, evaluated = {}", report.transformed_value);
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let command = cli.command.unwrap_or(Command::All);
    let report = match command {
        Command::List => Report {
            list: Some(list_report()),
            expr: None,
        },
        Command::Expr => Report {
            list: None,
            expr: Some(expr_report()),
        },
        Command::All => Report {
            list: Some(list_report()),
            expr: Some(expr_report()),
        },
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if let Some(list) = &report.list {
        print_list_report(list);
    }
    if let Some(expr) = &report.expr {
        print_expr_report(expr);
    }
    Ok(())
}
