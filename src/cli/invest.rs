use super::ui;
use crate::core::config::AppConfig;
use crate::core::fund::FundCode;
use crate::core::investment::{InvestmentRequest, TransactionResult};
use crate::core::sales_load::sales_load_rate;
use crate::core::validation::{ValidationError, parse_amount, validate};
use anyhow::{Context, Result};
use comfy_table::Cell;
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Validates raw console input and prices the transaction.
pub fn price_transaction(
    name: &str,
    fund_code: &str,
    amount: &str,
) -> Result<(InvestmentRequest, TransactionResult), ValidationError> {
    let amount = parse_amount(amount)?;
    let request = validate(name, fund_code, amount)?;
    let result = TransactionResult::compute(&request);
    Ok((request, result))
}

/// Renders the receipt shown after a successful transaction.
pub fn render_receipt(
    request: &InvestmentRequest,
    result: &TransactionResult,
    config: &AppConfig,
) -> String {
    let currency = &config.currency;
    let fund = request.fund_code;
    let mut table = ui::new_styled_table();

    table.set_header(vec![ui::header_cell("Transaction"), ui::header_cell("")]);
    table.add_row(vec![
        ui::label_cell("Investor Name"),
        Cell::new(&request.investor_name),
    ]);
    table.add_row(vec![
        ui::label_cell("Investment Fund Type"),
        Cell::new(format!("{} ({fund})", fund.display_name())),
    ]);
    table.add_row(vec![
        ui::label_cell("Amount Invested"),
        ui::number_cell(ui::format_money(currency, request.amount)),
    ]);
    table.add_row(vec![
        ui::label_cell("NAVPS"),
        ui::number_cell(format!(
            "{currency} {} (Updated as of {})",
            fund.price_per_share(),
            config.navps_as_of_label()
        )),
    ]);
    table.add_row(vec![
        ui::label_cell("Sales Load Amount"),
        ui::number_cell(format!(
            "{} ({})",
            ui::format_money(currency, result.sales_load),
            ui::format_rate(sales_load_rate(request.amount))
        )),
    ]);
    table.add_row(vec![
        ui::label_cell("Net Amount Invested"),
        ui::number_cell(ui::format_money(currency, result.net_invested)),
    ]);
    table.add_row(vec![
        ui::label_cell("Total Shares Bought"),
        ui::total_cell(format!(
            "{:.*}",
            config.share_precision, result.shares_purchased
        )),
    ]);

    table.to_string()
}

/// Writes `message`, then reads one line. `None` means the input is exhausted.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> Result<Option<String>> {
    write!(output, "{message}").context("Failed to write prompt")?;
    output.flush().context("Failed to flush output")?;

    let mut buf = Vec::new();
    let read = input
        .read_until(b'\n', &mut buf)
        .context("Failed to read input")?;
    if read == 0 {
        debug!("Input closed");
        return Ok(None);
    }
    // Undecodable bytes become U+FFFD and are rejected by validation
    let line = String::from_utf8_lossy(&buf);
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Runs the interactive transaction loop until the user answers "N" or input ends.
///
/// Validation failures are reported and the transaction is started over; they never
/// end the loop. Returns the number of completed transactions.
pub fn run_loop<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    config: &AppConfig,
) -> Result<usize> {
    let fund_prompt = format!("Enter Mutual Fund Type ({}): ", FundCode::ticker_list());
    let amount_prompt = format!("Enter Investment Amount ({}): ", config.currency);
    let mut completed = 0;

    loop {
        let Some(name) = prompt(input, output, "\nEnter Investor Name: ")? else {
            break;
        };
        let Some(fund_code) = prompt(input, output, &fund_prompt)? else {
            break;
        };
        let Some(amount) = prompt(input, output, &amount_prompt)? else {
            break;
        };

        let (request, result) = match price_transaction(&name, &fund_code, &amount) {
            Ok(priced) => priced,
            Err(e) => {
                debug!(error = %e, "Rejected transaction");
                writeln!(
                    output,
                    "{}",
                    ui::style_text(&format!("Error: {e}"), ui::StyleType::Error)
                )?;
                continue;
            }
        };

        writeln!(output, "\n{}", render_receipt(&request, &result, config))?;
        completed += 1;

        let Some(answer) = prompt(input, output, "\nDo you want to continue [Y/N]? ")? else {
            break;
        };
        if answer.trim().eq_ignore_ascii_case("n") {
            writeln!(
                output,
                "{}",
                ui::style_text("Thank You for Using The App.", ui::StyleType::Subtle)
            )?;
            break;
        }
    }

    info!(completed, "Transaction loop finished");
    Ok(completed)
}

/// Runs the loop on the process console.
pub fn run(config: &AppConfig) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_loop(&mut stdin.lock(), &mut stdout.lock(), config)?;
    Ok(())
}
